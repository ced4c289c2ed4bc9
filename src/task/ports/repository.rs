//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskDraft, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every method is a single auto-committing store statement; there are no
/// multi-row transactions and no retries. Implementations must be safe for
/// concurrent use.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns all tasks ordered by creation time, ascending.
    ///
    /// An empty store yields an empty collection, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] on store failure.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no row matches the
    /// identifier, distinctly from other store failures.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Task>;

    /// Inserts a new task from draft content.
    ///
    /// The store assigns the identifier and both timestamps; the returned
    /// task is the authoritative persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] on store failure.
    async fn create(&self, draft: TaskDraft) -> TaskRepositoryResult<Task>;

    /// Replaces the content of the task at `id` with draft content.
    ///
    /// The creation timestamp is preserved and the mutation timestamp is
    /// refreshed by the store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the update affects
    /// zero rows.
    async fn update(&self, id: TaskId, draft: TaskDraft) -> TaskRepositoryResult<Task>;

    /// Deletes the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when zero rows were
    /// affected.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
