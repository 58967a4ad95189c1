use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Body for endpoints that only change a status field
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateStatusDto {
    /// Target status, matched case-insensitively (e.g. "In Progress")
    pub status: String,
}
