use chrono::Utc;
use entity::sea_orm_active_enums::VolunteerStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Repository for volunteers
pub struct VolunteerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VolunteerRepository<'a, C> {
    /// Creates a new instance of [`VolunteerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a volunteer for an existing user
    pub async fn create(
        &self,
        user_id: i32,
        assigned_center_id: Option<i32>,
        status: VolunteerStatus,
    ) -> Result<entity::volunteer::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let volunteer = entity::volunteer::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            assigned_center_id: ActiveValue::Set(assigned_center_id),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        volunteer.insert(self.db).await
    }

    /// Gets a volunteer by ID
    pub async fn get_by_id(
        &self,
        volunteer_id: i32,
    ) -> Result<Option<entity::volunteer::Model>, DbErr> {
        entity::prelude::Volunteer::find_by_id(volunteer_id)
            .one(self.db)
            .await
    }

    /// Gets a volunteer by ID, locking the row for the rest of the transaction
    pub async fn get_by_id_for_update(
        &self,
        volunteer_id: i32,
    ) -> Result<Option<entity::volunteer::Model>, DbErr> {
        entity::prelude::Volunteer::find_by_id(volunteer_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// The volunteer row of a user, if any
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::volunteer::Model>, DbErr> {
        entity::prelude::Volunteer::find()
            .filter(entity::volunteer::Column::UserId.eq(user_id))
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Every volunteer assigned to a center, whatever their status
    pub async fn get_many_by_center_id(
        &self,
        center_id: i32,
    ) -> Result<Vec<entity::volunteer::Model>, DbErr> {
        entity::prelude::Volunteer::find()
            .filter(entity::volunteer::Column::AssignedCenterId.eq(center_id))
            .order_by_asc(entity::volunteer::Column::Id)
            .all(self.db)
            .await
    }

    /// Number of `Active` volunteers assigned to a center
    pub async fn count_active_by_center_id(&self, center_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Volunteer::find()
            .filter(entity::volunteer::Column::AssignedCenterId.eq(center_id))
            .filter(entity::volunteer::Column::Status.eq(VolunteerStatus::Active))
            .count(self.db)
            .await
    }

    /// Writes the assigned center and status together
    pub async fn update(
        &self,
        volunteer: entity::volunteer::Model,
        assigned_center_id: Option<i32>,
        status: VolunteerStatus,
    ) -> Result<entity::volunteer::Model, DbErr> {
        let mut volunteer_am = volunteer.into_active_model();
        volunteer_am.assigned_center_id = ActiveValue::Set(assigned_center_id);
        volunteer_am.status = ActiveValue::Set(status);
        volunteer_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        volunteer_am.update(self.db).await
    }

    /// Deletes a volunteer; skill links and aid assignments cascade
    pub async fn delete(&self, volunteer_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Volunteer::delete_by_id(volunteer_id)
            .exec(self.db)
            .await
    }

    /// Deletes every volunteer assigned to a center
    pub async fn delete_by_center_id(&self, center_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Volunteer::delete_many()
            .filter(entity::volunteer::Column::AssignedCenterId.eq(center_id))
            .exec(self.db)
            .await
    }
}
