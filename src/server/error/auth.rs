//! Caller identity and role errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Caller identity is missing, unreadable or lacks the role an operation needs
#[derive(Error, Debug)]
pub enum AuthError {
    /// The named identity header was not sent, 401
    #[error("Request is missing the caller identity header {0}")]
    MissingContext(&'static str),
    /// An identity header could not be parsed, 401
    #[error("Request carries an invalid caller identity header {header}: {value:?}")]
    InvalidContext {
        /// Header name
        header: &'static str,
        /// Raw header value
        value: String,
    },
    /// The caller's role does not pass the operation's gate, 403
    #[error("User ID {user_id} with role {role} is not permitted to {action}")]
    Forbidden {
        /// Calling user
        user_id: i32,
        /// Role the caller holds
        role: String,
        /// Operation that was refused
        action: &'static str,
    },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingContext(_) | Self::InvalidContext { .. } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Authentication required".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Forbidden { .. } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to perform this action".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
