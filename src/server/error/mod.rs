//! Error types for the relief server application.
//!
//! This module provides the error hierarchy for the server: configuration, request
//! context, and domain errors, plus the database and concurrency failures surfaced by
//! the unit of work. All errors implement `IntoResponse` for Axum HTTP responses and
//! use `thiserror` for their `Display` and `Error` implementations.

pub mod auth;
pub mod config;
pub mod domain;
pub mod retry;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, domain::DomainError},
};

/// Main error type for the relief server application.
///
/// Aggregates all domain-specific error types and external library errors into a
/// single unified error type. `#[from]` conversions let services propagate any of
/// them with `?`, and the `IntoResponse` implementation maps each to an HTTP status.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Request context errors (missing caller identity, insufficient role)
/// - Domain errors (not found, insufficient stock, invalid transitions, duplicates)
/// - Concurrency conflicts on version-guarded rows
/// - Database errors
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Request context error (missing identity headers, role not permitted).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Domain rule violation, recoverable by the caller with corrected input.
    #[error(transparent)]
    DomainError(#[from] DomainError),
    /// A version-guarded update matched no row because another writer got there first.
    #[error("Concurrent modification detected: {0}")]
    ConcurrencyConflict(String),
    /// Internal error indicating a bug in the server's code.
    ///
    /// This error should never occur in normal operation and indicates a programming error.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] DbErr),
}

impl Error {
    /// Whether the error is an infrastructure failure the caller may retry later.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::ConcurrencyConflict(_) => true,
            Self::DbErr(DbErr::Conn(_)) | Self::DbErr(DbErr::ConnectionAcquire(_)) => true,
            _ => false,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400/404/409 - Domain errors, see [`DomainError`]
/// - 401/403 - Request context errors, see [`AuthError`]
/// - 503 Service Unavailable - Connection failures and exhausted concurrency retries
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::DomainError(err) => err.into_response(),
            err if err.is_transient() => {
                tracing::warn!("Transient failure: {}", err);

                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        error: "Service temporarily unavailable, please try again".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
