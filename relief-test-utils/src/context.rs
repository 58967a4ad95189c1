//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder` for test execution.
//! The context wraps an in-memory SQLite database with the relief schema applied.

use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_relief_tables().build().await?;
///
/// // Access fixtures helpers
/// let user = test.relief().insert_user(UserRole::User).await?;
///
/// // Access the database
/// let db = &test.db;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main relief crate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }
}

impl TestContext {
    /// Create a new test context backed by an empty in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an open connection
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Create the composite unique indexes the relief schema relies on.
    pub(crate) async fn with_indexes(
        &self,
        stmts: Vec<IndexCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
