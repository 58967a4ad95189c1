//! Shared axum state.

use sea_orm::DatabaseConnection;

/// State cloned into every handler
#[derive(Clone)]
pub struct AppState {
    /// Pooled database connection
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
