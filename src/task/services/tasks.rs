//! Service layer orchestrating task validation and persistence.

use crate::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskValidator},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Wire-facing projection of a persisted task.
///
/// A deliberate field subset of [`Task`]: the description is internal and
/// never projected, decoupling the storage shape from the wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Store-assigned task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().to_owned(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Draft content failed validation.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Seats the business rules: validation runs before create and update and
/// never before read or delete, and persisted tasks are projected into
/// [`TaskResponse`] before leaving the service.
#[derive(Debug, Clone)]
pub struct TaskService<R, V>
where
    R: TaskRepository,
    V: TaskValidator,
{
    repository: Arc<R>,
    validator: Arc<V>,
}

impl<R, V> TaskService<R, V>
where
    R: TaskRepository,
    V: TaskValidator,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, validator: Arc<V>) -> Self {
        Self {
            repository,
            validator,
        }
    }

    /// Returns all tasks in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] on store failure.
    pub async fn get_all_tasks(&self) -> TaskServiceResult<Vec<TaskResponse>> {
        let tasks = self.repository.list_all().await?;
        Ok(tasks.into_iter().map(TaskResponse::from).collect())
    }

    /// Returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Propagates [`TaskRepositoryError::NotFound`] unchanged for the
    /// caller to map.
    pub async fn get_task_by_id(&self, id: TaskId) -> TaskServiceResult<TaskResponse> {
        let task = self.repository.find_by_id(id).await?;
        Ok(TaskResponse::from(task))
    }

    /// Validates and persists a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] without touching the
    /// repository when the draft fails a content rule, or
    /// [`TaskServiceError::Repository`] on store failure.
    pub async fn create_task(&self, draft: TaskDraft) -> TaskServiceResult<TaskResponse> {
        self.validator.validate(&draft)?;
        let task = self.repository.create(draft).await?;
        Ok(TaskResponse::from(task))
    }

    /// Validates and persists new content for the task at `id`.
    ///
    /// The identifier always comes from the caller; draft content cannot
    /// name a target row.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] without touching the
    /// repository when the draft fails a content rule, or propagates
    /// repository errors including [`TaskRepositoryError::NotFound`].
    pub async fn update_task(&self, id: TaskId, draft: TaskDraft) -> TaskServiceResult<TaskResponse> {
        self.validator.validate(&draft)?;
        let task = self.repository.update(id, draft).await?;
        Ok(TaskResponse::from(task))
    }

    /// Deletes the task with the given identifier.
    ///
    /// Deletion carries no content, so no validation gate applies.
    ///
    /// # Errors
    ///
    /// Propagates repository errors including
    /// [`TaskRepositoryError::NotFound`].
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
