//! Service orchestration tests using mocked ports.
//!
//! The repository mocks carry no expectations in the gating tests, so any
//! persistence call on a rejected draft fails the test.

use std::sync::Arc;

use crate::task::{
    domain::{PersistedTaskData, Task, TaskDomainError, TaskDraft, TaskId},
    ports::{MockTaskRepository, MockTaskValidator, TaskRepositoryError},
    services::{TaskService, TaskServiceError},
};
use chrono::{DateTime, TimeZone, Utc};
use mockall::predicate::eq;
use rstest::{fixture, rstest};

#[fixture]
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 28, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn persisted(id: i64, title: &str, at: DateTime<Utc>) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        title: title.to_owned(),
        description: None,
        created_at: at,
        updated_at: at,
    })
}

fn accepting_validator() -> MockTaskValidator {
    let mut validator = MockTaskValidator::new();
    validator.expect_validate().returning(|_| Ok(()));
    validator
}

fn rejecting_validator() -> MockTaskValidator {
    let mut validator = MockTaskValidator::new();
    validator
        .expect_validate()
        .returning(|_| Err(TaskDomainError::EmptyTitle));
    validator
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_all_tasks_projects_in_store_order(now: DateTime<Utc>) {
    let mut repository = MockTaskRepository::new();
    let first = persisted(1, "First", now);
    let second = persisted(2, "Second", now);
    let listed = vec![first, second];
    repository
        .expect_list_all()
        .returning(move || Ok(listed.clone()));

    let service = TaskService::new(Arc::new(repository), Arc::new(accepting_validator()));
    let responses = service.get_all_tasks().await.expect("listing should succeed");

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0].id, TaskId::new(1));
    assert_eq!(responses[0].title, "First");
    assert_eq!(responses[1].id, TaskId::new(2));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_task_by_id_projects_the_match(now: DateTime<Utc>) {
    let mut repository = MockTaskRepository::new();
    let task = persisted(1, "Test Task", now);
    repository
        .expect_find_by_id()
        .with(eq(TaskId::new(1)))
        .returning(move |_| Ok(task.clone()));

    let service = TaskService::new(Arc::new(repository), Arc::new(accepting_validator()));
    let response = service
        .get_task_by_id(TaskId::new(1))
        .await
        .expect("lookup should succeed");

    assert_eq!(response.id, TaskId::new(1));
    assert_eq!(response.title, "Test Task");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_task_by_id_propagates_not_found() {
    let mut repository = MockTaskRepository::new();
    repository
        .expect_find_by_id()
        .returning(|id| Err(TaskRepositoryError::NotFound(id)));

    let service = TaskService::new(Arc::new(repository), Arc::new(accepting_validator()));
    let result = service.get_task_by_id(TaskId::new(2)).await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Repository(TaskRepositoryError::NotFound(
            id
        ))) if id == TaskId::new(2)
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_persists_validated_drafts(now: DateTime<Utc>) {
    let draft = TaskDraft::new("New Task");
    let mut repository = MockTaskRepository::new();
    let stored = persisted(1, "New Task", now);
    repository
        .expect_create()
        .with(eq(draft.clone()))
        .returning(move |_| Ok(stored.clone()));

    let service = TaskService::new(Arc::new(repository), Arc::new(accepting_validator()));
    let response = service.create_task(draft).await.expect("creation should succeed");

    assert_eq!(response.id, TaskId::new(1));
    assert_eq!(response.title, "New Task");
    assert_eq!(response.created_at, now);
    assert_eq!(response.updated_at, now);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_never_reaches_the_repository_on_invalid_content() {
    // No expectations on the repository: any call panics.
    let repository = MockTaskRepository::new();
    let service = TaskService::new(Arc::new(repository), Arc::new(rejecting_validator()));

    let result = service.create_task(TaskDraft::new("")).await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Validation(TaskDomainError::EmptyTitle))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_persists_validated_drafts(now: DateTime<Utc>) {
    let draft = TaskDraft::new("Updated");
    let mut repository = MockTaskRepository::new();
    let stored = persisted(1, "Updated", now);
    repository
        .expect_update()
        .with(eq(TaskId::new(1)), eq(draft.clone()))
        .returning(move |_, _| Ok(stored.clone()));

    let service = TaskService::new(Arc::new(repository), Arc::new(accepting_validator()));
    let response = service
        .update_task(TaskId::new(1), draft)
        .await
        .expect("update should succeed");

    assert_eq!(response.id, TaskId::new(1));
    assert_eq!(response.title, "Updated");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_never_reaches_the_repository_on_invalid_content() {
    let repository = MockTaskRepository::new();
    let service = TaskService::new(Arc::new(repository), Arc::new(rejecting_validator()));

    let result = service.update_task(TaskId::new(1), TaskDraft::new("")).await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Validation(TaskDomainError::EmptyTitle))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_task_skips_validation() {
    // A validator with no expectations: any validate call panics.
    let validator = MockTaskValidator::new();
    let mut repository = MockTaskRepository::new();
    repository
        .expect_delete()
        .with(eq(TaskId::new(1)))
        .returning(|_| Ok(()));

    let service = TaskService::new(Arc::new(repository), Arc::new(validator));
    service
        .delete_task(TaskId::new(1))
        .await
        .expect("deletion should succeed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_task_propagates_repository_errors() {
    let mut repository = MockTaskRepository::new();
    repository
        .expect_delete()
        .returning(|id| Err(TaskRepositoryError::NotFound(id)));

    let service = TaskService::new(Arc::new(repository), Arc::new(MockTaskValidator::new()));
    let result = service.delete_task(TaskId::new(5)).await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Repository(TaskRepositoryError::NotFound(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn responses_serialise_with_camel_case_keys_and_no_description(now: DateTime<Utc>) {
    let mut repository = MockTaskRepository::new();
    let task = Task::from_persisted(PersistedTaskData {
        id: TaskId::new(3),
        title: "Wire".to_owned(),
        description: Some("kept internal".to_owned()),
        created_at: now,
        updated_at: now,
    });
    repository
        .expect_find_by_id()
        .returning(move |_| Ok(task.clone()));

    let service = TaskService::new(Arc::new(repository), Arc::new(accepting_validator()));
    let response = service
        .get_task_by_id(TaskId::new(3))
        .await
        .expect("lookup should succeed");

    let json = serde_json::to_value(&response).expect("projection should serialise");
    assert_eq!(json["id"], 3);
    assert_eq!(json["title"], "Wire");
    assert!(json.get("createdAt").is_some());
    assert!(json.get("updatedAt").is_some());
    assert!(json.get("description").is_none());
}
