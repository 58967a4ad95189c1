use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, ExprTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Repository for per-center resource stock
pub struct ResourceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ResourceRepository<'a, C> {
    /// Creates a new instance of [`ResourceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a stock row for a center, starting at version 0
    pub async fn create(
        &self,
        center_id: i32,
        resource_type: &str,
        type_key: &str,
        quantity: i32,
        expires_at: Option<NaiveDateTime>,
    ) -> Result<entity::resource::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let resource = entity::resource::ActiveModel {
            center_id: ActiveValue::Set(center_id),
            resource_type: ActiveValue::Set(resource_type.to_string()),
            type_key: ActiveValue::Set(type_key.to_string()),
            quantity: ActiveValue::Set(quantity),
            expires_at: ActiveValue::Set(expires_at),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        resource.insert(self.db).await
    }

    /// Gets a resource row by ID
    pub async fn get_by_id(&self, resource_id: i32) -> Result<Option<entity::resource::Model>, DbErr> {
        entity::prelude::Resource::find_by_id(resource_id)
            .one(self.db)
            .await
    }

    /// Reads the row with `FOR UPDATE` so concurrent writers queue behind this transaction
    pub async fn get_by_id_for_update(
        &self,
        resource_id: i32,
    ) -> Result<Option<entity::resource::Model>, DbErr> {
        entity::prelude::Resource::find_by_id(resource_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// The center's row for a normalized type key, locked for the rest of the transaction
    pub async fn find_by_type_key_for_update(
        &self,
        center_id: i32,
        type_key: &str,
    ) -> Result<Option<entity::resource::Model>, DbErr> {
        entity::prelude::Resource::find()
            .filter(entity::resource::Column::CenterId.eq(center_id))
            .filter(entity::resource::Column::TypeKey.eq(type_key))
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Stock of a center in creation order
    pub async fn get_many_by_center_id(
        &self,
        center_id: i32,
    ) -> Result<Vec<entity::resource::Model>, DbErr> {
        entity::prelude::Resource::find()
            .filter(entity::resource::Column::CenterId.eq(center_id))
            .order_by_asc(entity::resource::Column::Id)
            .all(self.db)
            .await
    }

    /// Adds `delta` to the quantity if the row is still at `expected_version`.
    ///
    /// A negative delta only applies while the stored quantity covers it, so the
    /// check and the decrement are a single statement.
    ///
    /// # Returns
    /// - `Ok(true)` - Quantity changed and version bumped
    /// - `Ok(false)` - No row matched: version moved on, quantity too low, or row gone
    pub async fn apply_delta(
        &self,
        resource_id: i32,
        expected_version: i32,
        delta: i32,
    ) -> Result<bool, DbErr> {
        let mut update = entity::prelude::Resource::update_many()
            .col_expr(
                entity::resource::Column::Quantity,
                Expr::col(entity::resource::Column::Quantity).add(delta),
            )
            .col_expr(
                entity::resource::Column::Version,
                Expr::col(entity::resource::Column::Version).add(1),
            )
            .col_expr(
                entity::resource::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::resource::Column::Id.eq(resource_id))
            .filter(entity::resource::Column::Version.eq(expected_version));

        if delta < 0 {
            update = update.filter(entity::resource::Column::Quantity.gte(-delta));
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected == 1)
    }
}
