use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, ExprTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Repository for relief centers
pub struct ReliefCenterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReliefCenterRepository<'a, C> {
    /// Creates a new instance of [`ReliefCenterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a center with no volunteers counted yet
    pub async fn create(
        &self,
        name: &str,
        location: &str,
        max_capacity: i32,
        manager_id: Option<i32>,
    ) -> Result<entity::relief_center::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let center = entity::relief_center::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            location: ActiveValue::Set(location.to_string()),
            volunteer_count: ActiveValue::Set(0),
            max_capacity: ActiveValue::Set(max_capacity),
            manager_id: ActiveValue::Set(manager_id),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        center.insert(self.db).await
    }

    /// Gets a center by ID
    pub async fn get_by_id(
        &self,
        center_id: i32,
    ) -> Result<Option<entity::relief_center::Model>, DbErr> {
        entity::prelude::ReliefCenter::find_by_id(center_id)
            .one(self.db)
            .await
    }

    /// Gets a center by ID, locking the row for the rest of the transaction
    pub async fn get_by_id_for_update(
        &self,
        center_id: i32,
    ) -> Result<Option<entity::relief_center::Model>, DbErr> {
        entity::prelude::ReliefCenter::find_by_id(center_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Case-insensitive lookup by name
    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::relief_center::Model>, DbErr> {
        entity::prelude::ReliefCenter::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::relief_center::Column::Name)))
                    .eq(name.to_lowercase()),
            )
            .one(self.db)
            .await
    }

    /// Every center ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::relief_center::Model>, DbErr> {
        entity::prelude::ReliefCenter::find()
            .order_by_asc(entity::relief_center::Column::Name)
            .all(self.db)
            .await
    }

    /// Writes the cached volunteer count if the row is still at `expected_version`
    ///
    /// # Returns
    /// - `Ok(true)` - Count written and version bumped
    /// - `Ok(false)` - Another writer changed the row first
    pub async fn set_volunteer_count(
        &self,
        center_id: i32,
        expected_version: i32,
        volunteer_count: i32,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::ReliefCenter::update_many()
            .col_expr(
                entity::relief_center::Column::VolunteerCount,
                Expr::value(volunteer_count),
            )
            .col_expr(
                entity::relief_center::Column::Version,
                Expr::col(entity::relief_center::Column::Version).add(1),
            )
            .col_expr(
                entity::relief_center::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::relief_center::Column::Id.eq(center_id))
            .filter(entity::relief_center::Column::Version.eq(expected_version))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Deletes a center; resources, donations and volunteers cascade
    pub async fn delete(&self, center_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ReliefCenter::delete_by_id(center_id)
            .exec(self.db)
            .await
    }
}
