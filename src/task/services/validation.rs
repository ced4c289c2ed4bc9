//! Default content validator for task drafts.

use crate::task::domain::{TITLE_MAX_CHARS, TaskDomainError, TaskDraft};
use crate::task::ports::{TaskValidator, ValidationResult};

/// Validates draft titles against the standard content rules.
///
/// A title must be non-empty after trimming and at most
/// [`TITLE_MAX_CHARS`] characters long. Descriptions are free text and
/// carry no constraints.
#[derive(Debug, Clone, Copy)]
pub struct DraftTaskValidator {
    max_title_chars: usize,
}

impl DraftTaskValidator {
    /// Creates a validator with the standard title length limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_title_chars: TITLE_MAX_CHARS,
        }
    }

    /// Creates a validator with a custom title length limit.
    #[must_use]
    pub const fn with_max_title_chars(max_title_chars: usize) -> Self {
        Self { max_title_chars }
    }
}

impl Default for DraftTaskValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskValidator for DraftTaskValidator {
    fn validate(&self, draft: &TaskDraft) -> ValidationResult {
        if draft.title().trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let len = draft.title().chars().count();
        if len > self.max_title_chars {
            return Err(TaskDomainError::TitleTooLong {
                len,
                max: self.max_title_chars,
            });
        }
        Ok(())
    }
}
