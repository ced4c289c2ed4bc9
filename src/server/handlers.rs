//! Request handlers translating HTTP calls into task service calls.

use super::{AppState, error::ApiError};
use crate::task::{
    domain::{TaskDraft, TaskId},
    ports::{TaskRepository, TaskValidator},
    services::TaskResponse,
};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

/// JSON body accepted by create and update.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct TaskPayload {
    title: String,
    description: Option<String>,
}

impl From<TaskPayload> for TaskDraft {
    fn from(payload: TaskPayload) -> Self {
        Self::from_parts(payload.title, payload.description)
    }
}

/// Parses the `task_id` path parameter into a store identifier.
fn parse_task_id(raw: u64) -> Result<TaskId, ApiError> {
    TaskId::from_u64(raw).ok_or_else(|| ApiError::decode("task identifier out of range"))
}

/// Decodes a JSON body, surfacing rejections as decode errors.
fn decode_body(body: Result<Json<TaskPayload>, JsonRejection>) -> Result<TaskDraft, ApiError> {
    let Json(payload) = body?;
    Ok(TaskDraft::from(payload))
}

/// GET /tasks
pub(super) async fn get_all_tasks<R, V>(
    State(state): State<AppState<R, V>>,
) -> Result<Json<Vec<TaskResponse>>, ApiError>
where
    R: TaskRepository,
    V: TaskValidator,
{
    let service = state.into_service();
    let tasks = service.get_all_tasks().await?;
    Ok(Json(tasks))
}

/// GET /tasks/{task_id}
pub(super) async fn get_task_by_id<R, V>(
    State(state): State<AppState<R, V>>,
    Path(task_id): Path<u64>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository,
    V: TaskValidator,
{
    let service = state.into_service();
    let id = parse_task_id(task_id)?;
    let task = service.get_task_by_id(id).await?;
    Ok(Json(task))
}

/// POST /tasks
pub(super) async fn create_task<R, V>(
    State(state): State<AppState<R, V>>,
    body: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError>
where
    R: TaskRepository,
    V: TaskValidator,
{
    let service = state.into_service();
    let draft = decode_body(body)?;
    let task = service.create_task(draft).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /tasks/{task_id}
pub(super) async fn update_task<R, V>(
    State(state): State<AppState<R, V>>,
    Path(task_id): Path<u64>,
    body: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository,
    V: TaskValidator,
{
    let service = state.into_service();
    let id = parse_task_id(task_id)?;
    let draft = decode_body(body)?;
    let task = service.update_task(id, draft).await?;
    Ok(Json(task))
}

/// DELETE /tasks/{task_id}
pub(super) async fn delete_task<R, V>(
    State(state): State<AppState<R, V>>,
    Path(task_id): Path<u64>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository,
    V: TaskValidator,
{
    let service = state.into_service();
    let id = parse_task_id(task_id)?;
    service.delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
