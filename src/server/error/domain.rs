//! Domain errors raised by the ledger, capacity tracking and aid lifecycle services.
//!
//! Every variant is recoverable by the caller with corrected input. Services raise them
//! inside a unit of work, so any writes made before the failure are rolled back.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A request that breaks a relief rule, mapped to 400, 404 or 409 by [`DomainError::status`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No resource row with this ID
    #[error("Resource ID {0} not found")]
    ResourceNotFound(i32),
    /// A debit asked for more than the row holds
    #[error(
        "Insufficient quantity of resource ID {resource_id}: requested {requested}, available {available}"
    )]
    InsufficientResource {
        /// Resource that was short
        resource_id: i32,
        /// Quantity the caller asked for
        requested: i32,
        /// Quantity on hand when the debit was checked
        available: i32,
    },
    /// No relief center with this ID
    #[error("Relief center ID {0} not found")]
    CenterNotFound(i32),
    /// No volunteer with this ID
    #[error("Volunteer ID {0} not found")]
    VolunteerNotFound(i32),
    /// A skill ID in a registration does not exist
    #[error("Skill ID {0} not found")]
    SkillNotFound(i32),
    /// Registration attempted before any skill was created
    #[error("No skills are registered in the system")]
    NoSkillsAvailable,
    /// No user with this ID
    #[error("User ID {0} not found")]
    UserNotFound(i32),
    /// No aid request with this ID
    #[error("Aid request ID {0} not found")]
    AidRequestNotFound(i32),
    /// No aid preparation with this ID
    #[error("Aid preparation ID {0} not found")]
    PreparationNotFound(i32),
    /// No rescue tracking with this ID
    #[error("Rescue tracking ID {0} not found")]
    TrackingNotFound(i32),
    /// No resource usage record with this ID
    #[error("Resource usage ID {0} not found")]
    UsageNotFound(i32),
    /// The aid request is `Completed` and takes no further preparation or rescue
    #[error("Aid request ID {0} is already completed")]
    RequestCompleted(i32),
    /// The rescue is `Completed` and takes no further volunteers
    #[error("Rescue tracking ID {0} is already completed")]
    TrackingCompleted(i32),
    /// The volunteer is already attached to the preparation or rescue
    #[error("Volunteer ID {volunteer_id} is already assigned to {target}")]
    DuplicateAssignment {
        /// Volunteer being attached
        volunteer_id: i32,
        /// Human readable preparation or rescue, e.g. "aid preparation ID 4"
        target: String,
    },
    /// The transition table has no edge between the two statuses
    #[error("Invalid {entity} status transition from {from} to {to}")]
    InvalidStatusTransition {
        /// Kind of record, e.g. "aid request"
        entity: &'static str,
        /// Stored status
        from: String,
        /// Requested status
        to: String,
    },
    /// A unique name or open request already exists
    #[error("{0} already exists")]
    AlreadyExists(String),
    /// A field failed validation
    #[error("Invalid value for {field}: {reason}")]
    ValidationError {
        /// Name of the offending field
        field: String,
        /// What is wrong with it
        reason: String,
    },
}

impl DomainError {
    /// Shorthand for [`DomainError::ValidationError`]
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// HTTP status for the error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ValidationError { .. } | Self::NoSkillsAvailable => StatusCode::BAD_REQUEST,
            Self::ResourceNotFound(_)
            | Self::CenterNotFound(_)
            | Self::VolunteerNotFound(_)
            | Self::SkillNotFound(_)
            | Self::UserNotFound(_)
            | Self::AidRequestNotFound(_)
            | Self::PreparationNotFound(_)
            | Self::TrackingNotFound(_)
            | Self::UsageNotFound(_) => StatusCode::NOT_FOUND,
            Self::InsufficientResource { .. }
            | Self::DuplicateAssignment { .. }
            | Self::InvalidStatusTransition { .. }
            | Self::RequestCompleted(_)
            | Self::TrackingCompleted(_)
            | Self::AlreadyExists(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            self.status(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
