//! Error types for task content validation.

use thiserror::Error;

/// Errors returned while validating task content.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The title exceeds the maximum permitted length.
    #[error("task title is {len} characters, maximum is {max}")]
    TitleTooLong {
        /// Character count of the rejected title.
        len: usize,
        /// Maximum permitted character count.
        max: usize,
    },
}
