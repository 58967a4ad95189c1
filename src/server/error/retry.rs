//! Which failures the unit of work re-runs.

use sea_orm::{DbErr, RuntimeErr, SqlErr};

use super::Error;

/// Postgres SQLSTATE for a serializable transaction that could not be ordered
const SERIALIZATION_FAILURE: &str = "40001";
/// Postgres SQLSTATE for a transaction aborted to break a deadlock
const DEADLOCK_DETECTED: &str = "40P01";

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Re-run the whole unit of work in a fresh transaction
    Retry,
    /// Failed permanently, propagate to the caller
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // Another writer bumped the row version between our read and guarded update
            Self::ConcurrencyConflict(_) => ErrorRetryStrategy::Retry,

            Self::DbErr(db_err) => {
                // Lost an idempotent create race; the retry will find the winner's row.
                // Every unique index is checked by a lookup inside the unit, so the
                // second attempt ends in that row or a domain error.
                if let Some(SqlErr::UniqueConstraintViolation(_)) = db_err.sql_err() {
                    return ErrorRetryStrategy::Retry;
                }

                if is_serialization_failure(db_err) {
                    return ErrorRetryStrategy::Retry;
                }

                // Connection loss and acquire timeouts abort the unit of work and are
                // reported as transient; whether to try again is the caller's decision.
                //
                // All other database errors are permanent failures:
                // - Query errors (constraint violations, syntax errors, etc.)
                // - Type conversion errors
                // - Record not found/inserted/updated
                ErrorRetryStrategy::Fail
            }

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Missing identity or role - permanent for this request
            Self::AuthError(_) => ErrorRetryStrategy::Fail,

            // Domain errors need corrected input from the caller
            Self::DomainError(_) => ErrorRetryStrategy::Fail,

            Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}

fn is_serialization_failure(db_err: &DbErr) -> bool {
    match db_err {
        DbErr::Exec(RuntimeErr::SqlxError(err)) | DbErr::Query(RuntimeErr::SqlxError(err)) => err
            .as_database_error()
            .and_then(|db| db.code())
            .is_some_and(|code| code == SERIALIZATION_FAILURE || code == DEADLOCK_DETECTED),
        _ => false,
    }
}
