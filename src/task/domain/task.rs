//! Task aggregate root and client-submitted draft content.

use super::TaskId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum permitted title length in characters.
pub const TITLE_MAX_CHARS: usize = 10;

/// Client-submitted task content.
///
/// A draft carries no identifier: the target row for an update is always
/// named by the caller, so a draft cannot smuggle one in through the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
}

impl TaskDraft {
    /// Creates a draft with the given title and no description.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Sets the draft description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Assembles a draft from a title and an optional description.
    #[must_use]
    pub const fn from_parts(title: String, description: Option<String>) -> Self {
        Self { title, description }
    }

    /// Returns the draft title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the draft description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Consumes the draft, returning its title and description.
    #[must_use]
    pub fn into_parts(self) -> (String, Option<String>) {
        (self.title, self.description)
    }
}

/// Task aggregate root.
///
/// Instances only ever exist for persisted rows: the store assigns the
/// identifier and both timestamps, and adapters reconstruct the aggregate
/// through [`Task::from_persisted`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Store-assigned task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        debug_assert!(
            data.created_at <= data.updated_at,
            "persisted task must not be updated before it was created"
        );
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
