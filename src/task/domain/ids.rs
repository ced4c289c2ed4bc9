//! Identifier types for the task domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a persisted task record.
///
/// Identifiers are assigned by the store on creation and are never
/// client-supplied. Above the repository boundary they are opaque lookup
/// keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Creates a task identifier from a store-assigned value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Creates a task identifier from an unsigned path parameter.
    ///
    /// Returns `None` when the value does not fit the schema-backed
    /// signed 64-bit range.
    #[must_use]
    pub fn from_u64(value: u64) -> Option<Self> {
        i64::try_from(value).ok().map(Self)
    }

    /// Returns the wrapped store value.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
