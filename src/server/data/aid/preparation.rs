use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::PreparationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

/// Repository for aid preparations, their resource usage and volunteers
pub struct AidPreparationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AidPreparationRepository<'a, C> {
    /// Creates a new instance of [`AidPreparationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the preparation for a request in the `Preparing` state
    pub async fn create(&self, request_id: i32) -> Result<entity::aid_preparation::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let preparation = entity::aid_preparation::ActiveModel {
            request_id: ActiveValue::Set(request_id),
            departure_time: ActiveValue::Set(None),
            estimated_arrival: ActiveValue::Set(None),
            status: ActiveValue::Set(PreparationStatus::Preparing),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        preparation.insert(self.db).await
    }

    /// Gets a preparation by ID
    pub async fn get_by_id(
        &self,
        preparation_id: i32,
    ) -> Result<Option<entity::aid_preparation::Model>, DbErr> {
        entity::prelude::AidPreparation::find_by_id(preparation_id)
            .one(self.db)
            .await
    }

    /// Gets a preparation by ID, locking the row for the rest of the transaction
    pub async fn get_by_id_for_update(
        &self,
        preparation_id: i32,
    ) -> Result<Option<entity::aid_preparation::Model>, DbErr> {
        entity::prelude::AidPreparation::find_by_id(preparation_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// The preparation of an aid request, if one was created
    pub async fn get_by_request_id(
        &self,
        request_id: i32,
    ) -> Result<Option<entity::aid_preparation::Model>, DbErr> {
        entity::prelude::AidPreparation::find()
            .filter(entity::aid_preparation::Column::RequestId.eq(request_id))
            .one(self.db)
            .await
    }

    /// Overwrites both planned times
    pub async fn update_times(
        &self,
        preparation: entity::aid_preparation::Model,
        departure_time: Option<NaiveDateTime>,
        estimated_arrival: Option<NaiveDateTime>,
    ) -> Result<entity::aid_preparation::Model, DbErr> {
        let mut preparation_am = preparation.into_active_model();
        preparation_am.departure_time = ActiveValue::Set(departure_time);
        preparation_am.estimated_arrival = ActiveValue::Set(estimated_arrival);
        preparation_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        preparation_am.update(self.db).await
    }

    /// Sets the status; the transition must already be checked
    pub async fn update_status(
        &self,
        preparation: entity::aid_preparation::Model,
        status: PreparationStatus,
    ) -> Result<entity::aid_preparation::Model, DbErr> {
        let mut preparation_am = preparation.into_active_model();
        preparation_am.status = ActiveValue::Set(status);
        preparation_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        preparation_am.update(self.db).await
    }

    /// Records stock consumed by a preparation
    pub async fn create_usage(
        &self,
        preparation_id: i32,
        resource_id: i32,
        quantity_used: i32,
    ) -> Result<entity::aid_preparation_resource::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let usage = entity::aid_preparation_resource::ActiveModel {
            preparation_id: ActiveValue::Set(preparation_id),
            resource_id: ActiveValue::Set(resource_id),
            quantity_used: ActiveValue::Set(quantity_used),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        usage.insert(self.db).await
    }

    /// Gets a usage record by ID, locking the row
    pub async fn get_usage_for_update(
        &self,
        usage_id: i32,
    ) -> Result<Option<entity::aid_preparation_resource::Model>, DbErr> {
        entity::prelude::AidPreparationResource::find_by_id(usage_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Usage records of a preparation in creation order
    pub async fn get_usages_by_preparation_id(
        &self,
        preparation_id: i32,
    ) -> Result<Vec<entity::aid_preparation_resource::Model>, DbErr> {
        entity::prelude::AidPreparationResource::find()
            .filter(entity::aid_preparation_resource::Column::PreparationId.eq(preparation_id))
            .order_by_asc(entity::aid_preparation_resource::Column::Id)
            .all(self.db)
            .await
    }

    /// Points a usage record at a resource and quantity
    pub async fn update_usage(
        &self,
        usage: entity::aid_preparation_resource::Model,
        resource_id: i32,
        quantity_used: i32,
    ) -> Result<entity::aid_preparation_resource::Model, DbErr> {
        let mut usage_am = usage.into_active_model();
        usage_am.resource_id = ActiveValue::Set(resource_id);
        usage_am.quantity_used = ActiveValue::Set(quantity_used);
        usage_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        usage_am.update(self.db).await
    }

    /// Deletes a usage record without touching stock
    pub async fn delete_usage(&self, usage_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AidPreparationResource::delete_by_id(usage_id)
            .exec(self.db)
            .await
    }

    /// Attaches a volunteer, duplicates are rejected by a unique index
    pub async fn create_volunteer(
        &self,
        preparation_id: i32,
        volunteer_id: i32,
    ) -> Result<entity::aid_preparation_volunteer::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let assignment = entity::aid_preparation_volunteer::ActiveModel {
            preparation_id: ActiveValue::Set(preparation_id),
            volunteer_id: ActiveValue::Set(volunteer_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        assignment.insert(self.db).await
    }

    /// The assignment of a volunteer to a preparation, if any
    pub async fn find_volunteer(
        &self,
        preparation_id: i32,
        volunteer_id: i32,
    ) -> Result<Option<entity::aid_preparation_volunteer::Model>, DbErr> {
        entity::prelude::AidPreparationVolunteer::find()
            .filter(entity::aid_preparation_volunteer::Column::PreparationId.eq(preparation_id))
            .filter(entity::aid_preparation_volunteer::Column::VolunteerId.eq(volunteer_id))
            .one(self.db)
            .await
    }

    /// Assignments of a preparation in creation order
    pub async fn get_volunteers_by_preparation_id(
        &self,
        preparation_id: i32,
    ) -> Result<Vec<entity::aid_preparation_volunteer::Model>, DbErr> {
        entity::prelude::AidPreparationVolunteer::find()
            .filter(entity::aid_preparation_volunteer::Column::PreparationId.eq(preparation_id))
            .order_by_asc(entity::aid_preparation_volunteer::Column::Id)
            .all(self.db)
            .await
    }

    /// Removes an assignment by its own ID
    pub async fn delete_volunteer(&self, assignment_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AidPreparationVolunteer::delete_by_id(assignment_id)
            .exec(self.db)
            .await
    }

    /// Preparations a volunteer is assigned to, each with the request it serves
    pub async fn get_tasks_by_volunteer_id(
        &self,
        volunteer_id: i32,
    ) -> Result<
        Vec<(
            entity::aid_preparation::Model,
            Option<entity::aid_request::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::AidPreparation::find()
            .inner_join(entity::aid_preparation_volunteer::Entity)
            .filter(entity::aid_preparation_volunteer::Column::VolunteerId.eq(volunteer_id))
            .find_also_related(entity::aid_request::Entity)
            .order_by_asc(entity::aid_preparation::Column::Id)
            .all(self.db)
            .await
    }
}
