//! Task management for Taskdeck.
//!
//! This module implements the full task lifecycle: creating tasks from
//! client-submitted drafts, retrieving them singly or as an ordered
//! collection, updating their content, and deleting them. Content
//! validation runs before create and update, never before read or delete.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
