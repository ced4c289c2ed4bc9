//! Taskdeck server entry point.
//!
//! Reads configuration from the environment, wires the `PostgreSQL`
//! repository into the task service, and serves the HTTP API.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use std::sync::Arc;
use taskdeck::server::{AppState, ServerConfig, build_router, cors_layer, serve};
use taskdeck::task::{
    adapters::postgres::PostgresTaskRepository,
    services::{DraftTaskValidator, TaskService},
};
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::from_env()?;

    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool = Pool::builder().build(manager)?;

    let repository = Arc::new(PostgresTaskRepository::new(pool));
    let validator = Arc::new(DraftTaskValidator::new());
    let service = Arc::new(TaskService::new(repository, validator));

    let router =
        build_router(AppState::new(service)).layer(cors_layer(config.allowed_origin.as_deref()));
    serve(&config, router).await?;
    Ok(())
}
