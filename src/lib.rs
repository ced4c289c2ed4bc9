//! Taskdeck: a task management CRUD service.
//!
//! This crate exposes create/read/update/delete operations over a task
//! entity through an HTTP API backed by a relational store.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//! - **Services**: Orchestration combining validation and persistence
//!
//! The [`server`] module is the HTTP boundary: it binds routes to service
//! calls and owns the mapping from error kinds to status codes. Everything
//! below it is HTTP-agnostic.
//!
//! # Modules
//!
//! - [`task`]: Task domain model, validation, and persistence
//! - [`server`]: Axum routing, request decoding, and response encoding

pub mod server;
pub mod task;
