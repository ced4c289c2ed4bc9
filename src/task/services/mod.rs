//! Application services for task orchestration.

mod tasks;
mod validation;

pub use tasks::{TaskResponse, TaskService, TaskServiceError, TaskServiceResult};
pub use validation::DraftTaskValidator;
