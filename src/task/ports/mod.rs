//! Port contracts for task management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod repository;
pub mod validator;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use validator::{TaskValidator, ValidationResult};

#[cfg(test)]
pub use repository::MockTaskRepository;
#[cfg(test)]
pub use validator::MockTaskValidator;
