//! Environment-driven server configuration.

use std::env;
use thiserror::Error;

/// Default port when `PORT` is unset.
const DEFAULT_PORT: u16 = 8080;

/// Errors returned while loading configuration from the environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is present but not a valid port number.
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),

    /// `DATABASE_URL` is required but unset.
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// `PostgreSQL` connection string.
    pub database_url: String,
    /// Frontend origin allowed for cross-origin requests, if any.
    pub allowed_origin: Option<String>,
}

impl ServerConfig {
    /// Loads configuration from `PORT`, `DATABASE_URL`, and
    /// `ALLOWED_ORIGIN`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `DATABASE_URL` is unset or `PORT` does
    /// not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("PORT").ok(),
            env::var("DATABASE_URL").ok(),
            env::var("ALLOWED_ORIGIN").ok(),
        )
    }

    /// Builds configuration from raw variable values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the database URL is absent or the port
    /// value does not parse.
    pub fn from_vars(
        port: Option<String>,
        database_url: Option<String>,
        allowed_origin: Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = port.map_or(Ok(DEFAULT_PORT), |raw| {
            raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))
        })?;
        let database_url = database_url.ok_or(ConfigError::MissingDatabaseUrl)?;

        Ok(Self {
            host: "0.0.0.0".to_owned(),
            port,
            database_url,
            allowed_origin,
        })
    }

    /// Returns the socket address string to bind.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
