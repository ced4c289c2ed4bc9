//! Domain model for task management.
//!
//! The task domain models client-submitted drafts, persisted task records,
//! and the content constraints a draft must satisfy before it may reach a
//! store, while keeping all infrastructure concerns outside of the domain
//! boundary.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task, TaskDraft, TITLE_MAX_CHARS};
