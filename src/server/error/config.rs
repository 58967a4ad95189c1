//! Startup configuration errors.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Environment the relief server cannot start with
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A variable the server has no default for is unset
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but cannot be parsed
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the variable
        var: String,
        /// Parser message
        reason: String,
    },
    /// `DATABASE_URL` does not point at a Postgres database, the only backend relief ships with
    #[error("DATABASE_URL must use the postgres:// or postgresql:// scheme, got {scheme:?}")]
    UnsupportedDatabaseScheme {
        /// Scheme found before `://`, empty when the URL has none
        scheme: String,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
