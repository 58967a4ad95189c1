use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Repository for user accounts
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    pub async fn create(
        &self,
        email: &str,
        name: &str,
        phone_no: &str,
        role: UserRole,
    ) -> Result<entity::app_user::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let user = entity::app_user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            name: ActiveValue::Set(name.to_string()),
            phone_no: ActiveValue::Set(phone_no.to_string()),
            role: ActiveValue::Set(role),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets a user by ID
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Gets a user by exact email
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Sets the role of a user
    ///
    /// # Returns
    /// - `Ok(Some(_))` - Updated user
    /// - `Ok(None)` - User does not exist
    pub async fn update_role(
        &self,
        user_id: i32,
        role: UserRole,
    ) -> Result<Option<entity::app_user::Model>, DbErr> {
        let user = match entity::prelude::AppUser::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.role = ActiveValue::Set(role);
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Resets the role of many users at once, used when their volunteer rows go away together
    pub async fn set_role_for_many(&self, user_ids: &[i32], role: UserRole) -> Result<u64, DbErr> {
        if user_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::AppUser::update_many()
            .set(entity::app_user::ActiveModel {
                role: ActiveValue::Set(role),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .filter(entity::app_user::Column::Id.is_in(user_ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AppUser::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
