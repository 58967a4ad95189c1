//! Transactional unit of work with retry on concurrency conflicts.
//!
//! Every composite mutation runs through [`UnitOfWork::execute`]: one database
//! transaction per attempt, committed when the operation returns `Ok` and rolled back
//! when it returns `Err`. Attempts that fail with a retryable error (a lost
//! optimistic-version race, a unique-key race on an idempotent create, or a
//! serialization failure) are re-run from scratch in a fresh transaction with
//! exponential backoff.

use std::{future::Future, pin::Pin, time::Duration};

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Boxed future returned by a unit-of-work operation, borrowing the open transaction
pub type TxnFuture<'t, R> = Pin<Box<dyn Future<Output = Result<R, Error>> + Send + 't>>;

/// Runs operations atomically inside a database transaction.
///
/// # Retry Behavior
///
/// - **Max attempts**: 3 (default)
/// - **Backoff strategy**: Exponential starting at 25 milliseconds (25ms, 50ms, ...)
/// - **Retry conditions**: Only errors with `ErrorRetryStrategy::Retry` are retried
/// - **Permanent failures**: Domain errors and connection failures return immediately
///
/// Dropping the future returned by `execute` drops the open transaction, which rolls
/// it back, so a cancelled request leaves no partial writes.
///
/// # Example
///
/// ```ignore
/// let uow = UnitOfWork::new(&db);
///
/// let usage = uow
///     .execute("debit resource ID 3", |txn| {
///         Box::pin(async move { ResourceLedger::debit(txn, preparation_id, 3, 30).await })
///     })
///     .await?;
/// ```
pub struct UnitOfWork<'a> {
    db: &'a DatabaseConnection,
    /// Maximum number of attempts before giving up
    max_attempts: u32,
    /// Backoff before the first retry, doubling with each further retry
    initial_backoff: Duration,
}

impl<'a> UnitOfWork<'a> {
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_INITIAL_BACKOFF_MILLIS: u64 = 25;

    /// Creates a unit of work with 3 max attempts and 25 millisecond initial backoff.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff: Duration::from_millis(Self::DEFAULT_INITIAL_BACKOFF_MILLIS),
        }
    }

    /// Overrides the maximum number of attempts, at least one attempt is always made.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Executes `operation` inside a transaction, retrying transient conflicts.
    ///
    /// The operation receives the open transaction and must do all of its reads and
    /// writes through it. Values it needs from the caller must be cloned into the
    /// returned future, since the operation may run more than once.
    ///
    /// # Arguments
    /// - `description` - Human-readable description for logging (e.g., "debit resource ID 3")
    /// - `operation` - Async function receiving the transaction and returning `Result<R, Error>`
    ///
    /// # Returns
    /// - `Ok(R)` - Operation succeeded and its writes are committed
    /// - `Err(Error)` - Operation failed permanently or exhausted all attempts; nothing was committed
    pub async fn execute<R, F>(&self, description: &str, operation: F) -> Result<R, Error>
    where
        F: for<'t> Fn(&'t DatabaseTransaction) -> TxnFuture<'t, R>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            let result = self.attempt(description, &operation).await;

            match result {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::debug!("Permanent error for {}: {}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff = self.initial_backoff * 2_u32.pow(attempt_count - 1);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }

    /// One transaction: begin, run, then commit or roll back
    async fn attempt<R, F>(&self, description: &str, operation: &F) -> Result<R, Error>
    where
        F: for<'t> Fn(&'t DatabaseTransaction) -> TxnFuture<'t, R>,
    {
        let txn = self.db.begin().await?;

        let result = operation(&txn).await;

        match result {
            Ok(value) => {
                txn.commit().await?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!(
                        "Failed to roll back {} after error {}: {}",
                        description,
                        e,
                        rollback_err
                    );
                }
                Err(e)
            }
        }
    }
}
