use chrono::Utc;
use entity::sea_orm_active_enums::{AidRequestStatus, UserRole};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        aid::request::{AidRequestRepository, NewAidRequest},
        user::UserRepository,
    },
    error::{domain::DomainError, Error},
    model::{context::RequestContext, db::AidRequestModel},
    service::{aid::transition::check_request_transition, unit_of_work::UnitOfWork},
    util::status::parse_status,
};

/// Fields of an aid request as submitted by a citizen
pub struct AidRequestInput {
    /// Affected area the request is for
    pub area_id: i32,
    /// Kind of help needed, e.g. Medical or Food
    pub request_type: String,
    /// Free-form details
    pub description: String,
    /// Urgency label, stored as given
    pub urgency: String,
    /// Number of people needing help
    pub people_count: i32,
}

/// Filing, triage and lookup of aid requests
pub struct AidRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AidRequestService<'a> {
    /// Creates a new instance of [`AidRequestService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a new `Pending` aid request for the caller
    ///
    /// # Returns
    /// - `Ok(AidRequestModel)` - The created request
    /// - `Err(Error::DomainError(DomainError::AlreadyExists))` - The caller already has a
    ///   pending request for the same area
    /// - `Err(Error::DomainError(DomainError::ValidationError))` - Blank type or non-positive people count
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: AidRequestInput,
    ) -> Result<AidRequestModel, Error> {
        if input.request_type.trim().is_empty() {
            return Err(DomainError::validation("request_type", "must not be empty").into());
        }
        if input.people_count <= 0 {
            return Err(DomainError::validation("people_count", "must be greater than 0").into());
        }

        let user_id = ctx.user_id();
        let uow = UnitOfWork::new(self.db);
        let request = uow
            .execute(&format!("aid request by user ID {}", user_id), |txn| {
                let request_type = input.request_type.trim().to_string();
                let description = input.description.clone();
                let urgency = input.urgency.trim().to_string();
                let area_id = input.area_id;
                let people_count = input.people_count;
                Box::pin(async move {
                    let request_repo = AidRequestRepository::new(txn);

                    if request_repo
                        .find_pending_by_user_and_area(user_id, area_id)
                        .await?
                        .is_some()
                    {
                        return Err(DomainError::AlreadyExists(format!(
                            "Pending aid request for area ID {}",
                            area_id
                        ))
                        .into());
                    }

                    let request = request_repo
                        .create(NewAidRequest {
                            user_id,
                            area_id,
                            request_type: &request_type,
                            description: &description,
                            urgency: &urgency,
                            people_count,
                        })
                        .await?;

                    Ok(request)
                })
            })
            .await?;

        tracing::info!(
            "User ID {} filed aid request ID {} for area ID {}",
            user_id,
            request.id,
            request.area_id
        );

        Ok(request)
    }

    /// Moves a request along its transition table
    ///
    /// The response time is stamped the first time the request leaves `Pending`.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        request_id: i32,
        status: &str,
    ) -> Result<AidRequestModel, Error> {
        ctx.require_staff("update aid request status")?;

        let status: AidRequestStatus = parse_status("status", status)?;

        let uow = UnitOfWork::new(self.db);
        uow.execute(&format!("status of aid request ID {}", request_id), |txn| {
            Box::pin(async move {
                let request_repo = AidRequestRepository::new(txn);

                let Some(request) = request_repo.get_by_id_for_update(request_id).await? else {
                    return Err(DomainError::AidRequestNotFound(request_id).into());
                };

                check_request_transition(request.status, status)?;

                if request.status == status {
                    return Ok(request);
                }

                let response_time = match request.response_time {
                    Some(response_time) => Some(response_time),
                    None if request.status == AidRequestStatus::Pending => {
                        Some(Utc::now().naive_utc())
                    }
                    None => None,
                };

                let updated = request_repo
                    .update_status(request, status, response_time)
                    .await?;

                Ok(updated)
            })
        })
        .await
    }

    /// Every aid request, newest first, for staff triage
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<AidRequestModel>, Error> {
        ctx.require_staff("list aid requests")?;

        Ok(AidRequestRepository::new(self.db).get_all().await?)
    }

    /// Requests filed by `user_id`, newest first
    ///
    /// A caller may always list their own requests, anyone else's need a staff role.
    ///
    /// # Returns
    /// - `Ok(Vec<AidRequestModel>)` - The user's requests, possibly empty
    /// - `Err(Error::AuthError(AuthError::Forbidden))` - Another user's requests, caller is not staff
    /// - `Err(Error::DomainError(DomainError::UserNotFound))` - Unknown user
    pub async fn list_by_user(
        &self,
        ctx: &RequestContext,
        user_id: i32,
    ) -> Result<Vec<AidRequestModel>, Error> {
        ctx.require_role_or_self(
            &[UserRole::Admin, UserRole::Volunteer],
            user_id,
            "list aid requests of another user",
        )?;

        if UserRepository::new(self.db).get_by_id(user_id).await?.is_none() {
            return Err(DomainError::UserNotFound(user_id).into());
        }

        Ok(AidRequestRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?)
    }

    /// Looks up a single aid request
    pub async fn get(&self, request_id: i32) -> Result<AidRequestModel, Error> {
        AidRequestRepository::new(self.db)
            .get_by_id(request_id)
            .await?
            .ok_or_else(|| DomainError::AidRequestNotFound(request_id).into())
    }
}
