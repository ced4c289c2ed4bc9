//! Content-validation tests for the draft validator.

use crate::task::domain::{TITLE_MAX_CHARS, TaskDomainError, TaskDraft};
use crate::task::ports::TaskValidator;
use crate::task::services::DraftTaskValidator;
use rstest::{fixture, rstest};

#[fixture]
fn validator() -> DraftTaskValidator {
    DraftTaskValidator::new()
}

#[rstest]
fn empty_title_is_rejected(validator: DraftTaskValidator) {
    let result = validator.validate(&TaskDraft::new(""));
    assert_eq!(result, Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn whitespace_only_title_is_rejected(validator: DraftTaskValidator) {
    let result = validator.validate(&TaskDraft::new("   \t "));
    assert_eq!(result, Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn overlong_title_is_rejected(validator: DraftTaskValidator) {
    let title = "This title is definitely more than ten characters";
    let result = validator.validate(&TaskDraft::new(title));
    assert_eq!(
        result,
        Err(TaskDomainError::TitleTooLong {
            len: title.chars().count(),
            max: TITLE_MAX_CHARS,
        })
    );
}

#[rstest]
fn title_at_the_limit_is_accepted(validator: DraftTaskValidator) {
    let title: String = "x".repeat(TITLE_MAX_CHARS);
    assert_eq!(validator.validate(&TaskDraft::new(title)), Ok(()));
}

#[rstest]
fn valid_title_is_accepted(validator: DraftTaskValidator) {
    assert_eq!(validator.validate(&TaskDraft::new("Valid")), Ok(()));
}

#[rstest]
fn description_carries_no_constraints(validator: DraftTaskValidator) {
    let draft = TaskDraft::new("Valid").with_description("x".repeat(10_000));
    assert_eq!(validator.validate(&draft), Ok(()));
}

#[rstest]
fn length_is_counted_in_characters_not_bytes() {
    let validator = DraftTaskValidator::with_max_title_chars(4);
    // Four multi-byte characters fit a four-character limit.
    assert_eq!(validator.validate(&TaskDraft::new("日本語帳")), Ok(()));
    assert!(validator.validate(&TaskDraft::new("日本語帳簿")).is_err());
}
