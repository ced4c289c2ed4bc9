//! Validator port for task content validation.

use crate::task::domain::{TaskDomainError, TaskDraft};

/// Result type for validation operations.
pub type ValidationResult = Result<(), TaskDomainError>;

/// Port for task content validation.
///
/// Implementations must be pure: no I/O, no side effects, deterministic
/// for a given draft. This keeps validation independently testable without
/// a store.
#[cfg_attr(test, mockall::automock)]
pub trait TaskValidator: Send + Sync {
    /// Validates draft content against all rules.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] describing the first violated rule.
    fn validate(&self, draft: &TaskDraft) -> ValidationResult;
}
