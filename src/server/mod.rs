//! HTTP boundary for the task service.
//!
//! Owns routing, request decoding, response encoding, and the exhaustive
//! mapping from error kinds to status codes. No module below this one
//! knows anything about HTTP.

pub mod config;
mod error;
mod handlers;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;

use crate::task::{
    ports::{TaskRepository, TaskValidator},
    services::TaskService,
};
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared state accessible from axum handlers.
#[derive(Debug)]
pub struct AppState<R, V>
where
    R: TaskRepository,
    V: TaskValidator,
{
    service: Arc<TaskService<R, V>>,
}

impl<R, V> AppState<R, V>
where
    R: TaskRepository,
    V: TaskValidator,
{
    /// Creates handler state around a task service.
    #[must_use]
    pub const fn new(service: Arc<TaskService<R, V>>) -> Self {
        Self { service }
    }

    /// Consumes the state, returning the task service.
    #[must_use]
    pub fn into_service(self) -> Arc<TaskService<R, V>> {
        self.service
    }
}

impl<R, V> Clone for AppState<R, V>
where
    R: TaskRepository,
    V: TaskValidator,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

/// Builds the axum router with all task routes.
#[must_use]
pub fn build_router<R, V>(state: AppState<R, V>) -> Router
where
    R: TaskRepository + 'static,
    V: TaskValidator + 'static,
{
    Router::new()
        .route(
            "/tasks",
            get(handlers::get_all_tasks).post(handlers::create_task),
        )
        .route(
            "/tasks/{task_id}",
            get(handlers::get_task_by_id)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
        .with_state(state)
}

/// Builds the cross-origin layer for the configured frontend origin.
///
/// Falls back to a permissive layer when no origin is configured or the
/// configured value is not a valid header value.
#[must_use]
pub fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
    allowed_origin
        .and_then(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "ignoring unparseable allowed origin");
                None
            }
        })
        .map_or_else(CorsLayer::permissive, |origin| {
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true)
        })
}

/// Binds the configured address and serves the router until shutdown.
///
/// # Errors
///
/// Returns an I/O error when the listener cannot bind or the server loop
/// fails.
pub async fn serve(config: &ServerConfig, router: Router) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "taskdeck server listening");
    axum::serve(listener, router).await
}
