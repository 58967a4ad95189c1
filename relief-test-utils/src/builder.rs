//! Declarative test builder for test setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use entity::{aid_preparation_volunteer, rescue_tracking_volunteer, resource};
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables.
/// Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_relief_tables: bool,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_relief_tables: false,
        }
    }

    /// Add every relief table to the test database.
    ///
    /// Creates the tables in foreign key order along with the unique indexes the
    /// services depend on for duplicate detection: one resource row per center and
    /// type key, one assignment per volunteer per preparation or tracking, and one
    /// center per name ignoring case.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_relief_tables(mut self) -> Self {
        self.include_relief_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use relief_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), relief_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(AppUser)
    ///     .with_table(ReliefCenter)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Build the test context, executing all queued setup.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database with the configured schema
    /// - `Err(TestError::DbErr)` - Connection or schema creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();
        let mut indexes = Vec::new();

        if self.include_relief_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::AppUser),
                schema.create_table_from_entity(entity::prelude::ReliefCenter),
                schema.create_table_from_entity(entity::prelude::Resource),
                schema.create_table_from_entity(entity::prelude::Donation),
                schema.create_table_from_entity(entity::prelude::Skill),
                schema.create_table_from_entity(entity::prelude::Volunteer),
                schema.create_table_from_entity(entity::prelude::VolunteerSkill),
                schema.create_table_from_entity(entity::prelude::AidRequest),
                schema.create_table_from_entity(entity::prelude::AidPreparation),
                schema.create_table_from_entity(entity::prelude::AidPreparationResource),
                schema.create_table_from_entity(entity::prelude::AidPreparationVolunteer),
                schema.create_table_from_entity(entity::prelude::RescueTracking),
                schema.create_table_from_entity(entity::prelude::RescueTrackingVolunteer),
            ]);
            indexes.extend(relief_unique_indexes());
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;
        setup.with_indexes(indexes).await?;

        if self.include_relief_tables {
            setup
                .db
                .execute_unprepared(
                    "CREATE UNIQUE INDEX \"idx-relief_center-lower_name\" ON relief_center (LOWER(name))",
                )
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn relief_unique_indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("idx-resource-center_id-type_key")
            .table(entity::prelude::Resource)
            .col(resource::Column::CenterId)
            .col(resource::Column::TypeKey)
            .unique()
            .to_owned(),
        Index::create()
            .name("idx-aid_preparation_volunteer-preparation_id-volunteer_id")
            .table(entity::prelude::AidPreparationVolunteer)
            .col(aid_preparation_volunteer::Column::PreparationId)
            .col(aid_preparation_volunteer::Column::VolunteerId)
            .unique()
            .to_owned(),
        Index::create()
            .name("idx-rescue_tracking_volunteer-tracking_id-volunteer_id")
            .table(entity::prelude::RescueTrackingVolunteer)
            .col(rescue_tracking_volunteer::Column::TrackingId)
            .col(rescue_tracking_volunteer::Column::VolunteerId)
            .unique()
            .to_owned(),
    ]
}
