use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::AidRequestStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

/// Repository for aid requests
pub struct AidRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

/// Caller-supplied fields of a new aid request
pub struct NewAidRequest<'b> {
    /// Requesting user
    pub user_id: i32,
    /// Affected area
    pub area_id: i32,
    /// Kind of help needed
    pub request_type: &'b str,
    /// Free-form details
    pub description: &'b str,
    /// Urgency label
    pub urgency: &'b str,
    /// Number of people needing help
    pub people_count: i32,
}

impl<'a, C: ConnectionTrait> AidRequestRepository<'a, C> {
    /// Creates a new instance of [`AidRequestRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a request in the `Pending` state
    pub async fn create(
        &self,
        request: NewAidRequest<'_>,
    ) -> Result<entity::aid_request::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let aid_request = entity::aid_request::ActiveModel {
            user_id: ActiveValue::Set(request.user_id),
            area_id: ActiveValue::Set(request.area_id),
            request_type: ActiveValue::Set(request.request_type.to_string()),
            description: ActiveValue::Set(request.description.to_string()),
            urgency: ActiveValue::Set(request.urgency.to_string()),
            status: ActiveValue::Set(AidRequestStatus::Pending),
            people_count: ActiveValue::Set(request.people_count),
            request_date: ActiveValue::Set(now),
            response_time: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        aid_request.insert(self.db).await
    }

    /// Gets a request by ID
    pub async fn get_by_id(
        &self,
        request_id: i32,
    ) -> Result<Option<entity::aid_request::Model>, DbErr> {
        entity::prelude::AidRequest::find_by_id(request_id)
            .one(self.db)
            .await
    }

    /// Gets a request by ID, locking the row for the rest of the transaction
    pub async fn get_by_id_for_update(
        &self,
        request_id: i32,
    ) -> Result<Option<entity::aid_request::Model>, DbErr> {
        entity::prelude::AidRequest::find_by_id(request_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Every request, newest first
    pub async fn get_all(&self) -> Result<Vec<entity::aid_request::Model>, DbErr> {
        entity::prelude::AidRequest::find()
            .order_by_desc(entity::aid_request::Column::RequestDate)
            .order_by_desc(entity::aid_request::Column::Id)
            .all(self.db)
            .await
    }

    /// Requests filed by one user, newest first
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::aid_request::Model>, DbErr> {
        entity::prelude::AidRequest::find()
            .filter(entity::aid_request::Column::UserId.eq(user_id))
            .order_by_desc(entity::aid_request::Column::RequestDate)
            .order_by_desc(entity::aid_request::Column::Id)
            .all(self.db)
            .await
    }

    /// The caller's open request for an area, if any
    pub async fn find_pending_by_user_and_area(
        &self,
        user_id: i32,
        area_id: i32,
    ) -> Result<Option<entity::aid_request::Model>, DbErr> {
        entity::prelude::AidRequest::find()
            .filter(entity::aid_request::Column::UserId.eq(user_id))
            .filter(entity::aid_request::Column::AreaId.eq(area_id))
            .filter(entity::aid_request::Column::Status.eq(AidRequestStatus::Pending))
            .one(self.db)
            .await
    }

    /// Sets the status and response time; the transition must already be checked
    pub async fn update_status(
        &self,
        request: entity::aid_request::Model,
        status: AidRequestStatus,
        response_time: Option<NaiveDateTime>,
    ) -> Result<entity::aid_request::Model, DbErr> {
        let mut request_am = request.into_active_model();
        request_am.status = ActiveValue::Set(status);
        request_am.response_time = ActiveValue::Set(response_time);
        request_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        request_am.update(self.db).await
    }
}
