use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::TrackingStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

/// Repository for rescue trackings and their volunteers
pub struct RescueTrackingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RescueTrackingRepository<'a, C> {
    /// Creates a new instance of [`RescueTrackingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Opens the tracking of a request
    pub async fn create(
        &self,
        request_id: i32,
        status: TrackingStatus,
        start_time: Option<NaiveDateTime>,
    ) -> Result<entity::rescue_tracking::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let tracking = entity::rescue_tracking::ActiveModel {
            request_id: ActiveValue::Set(request_id),
            status: ActiveValue::Set(status),
            start_time: ActiveValue::Set(start_time),
            completion_time: ActiveValue::Set(None),
            people_helped: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        tracking.insert(self.db).await
    }

    /// Gets a tracking by ID
    pub async fn get_by_id(
        &self,
        tracking_id: i32,
    ) -> Result<Option<entity::rescue_tracking::Model>, DbErr> {
        entity::prelude::RescueTracking::find_by_id(tracking_id)
            .one(self.db)
            .await
    }

    /// Gets a tracking by ID, locking the row for the rest of the transaction
    pub async fn get_by_id_for_update(
        &self,
        tracking_id: i32,
    ) -> Result<Option<entity::rescue_tracking::Model>, DbErr> {
        entity::prelude::RescueTracking::find_by_id(tracking_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// The tracking of an aid request, if one was opened
    pub async fn get_by_request_id(
        &self,
        request_id: i32,
    ) -> Result<Option<entity::rescue_tracking::Model>, DbErr> {
        entity::prelude::RescueTracking::find()
            .filter(entity::rescue_tracking::Column::RequestId.eq(request_id))
            .one(self.db)
            .await
    }

    /// Writes status, people helped and completion time together
    pub async fn update(
        &self,
        tracking: entity::rescue_tracking::Model,
        status: TrackingStatus,
        people_helped: i32,
        completion_time: Option<NaiveDateTime>,
    ) -> Result<entity::rescue_tracking::Model, DbErr> {
        let mut tracking_am = tracking.into_active_model();
        tracking_am.status = ActiveValue::Set(status);
        tracking_am.people_helped = ActiveValue::Set(people_helped);
        tracking_am.completion_time = ActiveValue::Set(completion_time);
        tracking_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        tracking_am.update(self.db).await
    }

    /// Attaches a volunteer, duplicates are rejected by a unique index
    pub async fn create_volunteer(
        &self,
        tracking_id: i32,
        volunteer_id: i32,
    ) -> Result<entity::rescue_tracking_volunteer::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let assignment = entity::rescue_tracking_volunteer::ActiveModel {
            tracking_id: ActiveValue::Set(tracking_id),
            volunteer_id: ActiveValue::Set(volunteer_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        assignment.insert(self.db).await
    }

    /// The assignment of a volunteer to a tracking, if any
    pub async fn find_volunteer(
        &self,
        tracking_id: i32,
        volunteer_id: i32,
    ) -> Result<Option<entity::rescue_tracking_volunteer::Model>, DbErr> {
        entity::prelude::RescueTrackingVolunteer::find()
            .filter(entity::rescue_tracking_volunteer::Column::TrackingId.eq(tracking_id))
            .filter(entity::rescue_tracking_volunteer::Column::VolunteerId.eq(volunteer_id))
            .one(self.db)
            .await
    }

    /// Assignments of a tracking in creation order
    pub async fn get_volunteers_by_tracking_id(
        &self,
        tracking_id: i32,
    ) -> Result<Vec<entity::rescue_tracking_volunteer::Model>, DbErr> {
        entity::prelude::RescueTrackingVolunteer::find()
            .filter(entity::rescue_tracking_volunteer::Column::TrackingId.eq(tracking_id))
            .order_by_asc(entity::rescue_tracking_volunteer::Column::Id)
            .all(self.db)
            .await
    }

    /// Trackings a volunteer is assigned to, each with the request it serves
    pub async fn get_tasks_by_volunteer_id(
        &self,
        volunteer_id: i32,
    ) -> Result<
        Vec<(
            entity::rescue_tracking::Model,
            Option<entity::aid_request::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::RescueTracking::find()
            .inner_join(entity::rescue_tracking_volunteer::Entity)
            .filter(entity::rescue_tracking_volunteer::Column::VolunteerId.eq(volunteer_id))
            .find_also_related(entity::aid_request::Entity)
            .order_by_asc(entity::rescue_tracking::Column::Id)
            .all(self.db)
            .await
    }
}
