//! In-field execution records of rescues.

use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{AidRequestStatus, TrackingStatus};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        aid::{request::AidRequestRepository, tracking::RescueTrackingRepository},
        volunteer::VolunteerRepository,
    },
    error::{domain::DomainError, Error},
    model::{
        context::RequestContext,
        db::{RescueTrackingModel, TrackingVolunteerModel},
    },
    service::{
        aid::transition::{check_tracking_initial_status, resolve_tracking_update},
        unit_of_work::UnitOfWork,
    },
    util::status::parse_status,
};

/// Partial update of a rescue tracking record, `None` keeps the stored value
#[derive(Default)]
pub struct TrackingUpdate {
    /// New status label
    pub status: Option<String>,
    /// Total number of people helped so far
    pub people_helped: Option<i32>,
    /// When the rescue finished
    pub completion_time: Option<NaiveDateTime>,
}

/// In-field execution of aid requests
pub struct RescueTrackingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RescueTrackingService<'a> {
    /// Creates a new instance of [`RescueTrackingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens the rescue tracking record of an aid request
    ///
    /// Only one record exists per request; repeating the call returns it unchanged.
    /// The start time defaults to now.
    ///
    /// # Returns
    /// - `Ok((RescueTrackingModel, true))` - Record was created by this call
    /// - `Ok((RescueTrackingModel, false))` - Record already existed
    /// - `Err(Error::DomainError(DomainError::RequestCompleted))` - The aid request is completed
    /// - `Err(Error::DomainError(DomainError::ValidationError))` - Status other than Pending or In Progress
    pub async fn create(
        &self,
        ctx: &RequestContext,
        request_id: i32,
        status: &str,
        start_time: Option<NaiveDateTime>,
    ) -> Result<(RescueTrackingModel, bool), Error> {
        ctx.require_staff("create rescue tracking")?;

        let status: TrackingStatus = parse_status("status", status)?;
        check_tracking_initial_status(status)?;

        let uow = UnitOfWork::new(self.db);
        let (tracking, created) = uow
            .execute(&format!("rescue tracking of aid request ID {}", request_id), |txn| {
                Box::pin(async move {
                    let Some(request) = AidRequestRepository::new(txn)
                        .get_by_id_for_update(request_id)
                        .await?
                    else {
                        return Err(DomainError::AidRequestNotFound(request_id).into());
                    };

                    if request.status == AidRequestStatus::Completed {
                        return Err(DomainError::RequestCompleted(request_id).into());
                    }

                    let tracking_repo = RescueTrackingRepository::new(txn);

                    if let Some(existing) = tracking_repo.get_by_request_id(request_id).await? {
                        return Ok((existing, false));
                    }

                    let start_time = start_time.unwrap_or_else(|| Utc::now().naive_utc());
                    let tracking = tracking_repo
                        .create(request_id, status, Some(start_time))
                        .await?;

                    Ok((tracking, true))
                })
            })
            .await?;

        if created {
            tracing::info!(
                "Opened rescue tracking ID {} for aid request ID {}",
                tracking.id,
                request_id
            );
        }

        Ok((tracking, created))
    }

    /// Applies a partial update; leaving `Completed` is rejected
    pub async fn update(
        &self,
        ctx: &RequestContext,
        tracking_id: i32,
        update: TrackingUpdate,
    ) -> Result<RescueTrackingModel, Error> {
        ctx.require_staff("update rescue tracking")?;

        let status = update
            .status
            .as_deref()
            .map(|raw| parse_status::<TrackingStatus>("status", raw))
            .transpose()?;
        if let Some(people_helped) = update.people_helped {
            if people_helped < 0 {
                return Err(DomainError::validation("people_helped", "must not be negative").into());
            }
        }
        let people_helped = update.people_helped;
        let completion_time = update.completion_time;

        let uow = UnitOfWork::new(self.db);
        let tracking = uow
            .execute(&format!("update of rescue tracking ID {}", tracking_id), |txn| {
                Box::pin(async move {
                    let tracking_repo = RescueTrackingRepository::new(txn);

                    let Some(tracking) = tracking_repo.get_by_id_for_update(tracking_id).await?
                    else {
                        return Err(DomainError::TrackingNotFound(tracking_id).into());
                    };

                    let (status, completion_time) =
                        resolve_tracking_update(&tracking, status, completion_time)?;
                    let people_helped = people_helped.unwrap_or(tracking.people_helped);

                    let updated = tracking_repo
                        .update(tracking, status, people_helped, completion_time)
                        .await?;

                    Ok(updated)
                })
            })
            .await?;

        if tracking.status == TrackingStatus::Completed {
            tracing::info!(
                "Rescue tracking ID {} completed with {} people helped",
                tracking.id,
                tracking.people_helped
            );
        }

        Ok(tracking)
    }

    /// Attaches a volunteer to an open rescue
    pub async fn assign_volunteer(
        &self,
        ctx: &RequestContext,
        tracking_id: i32,
        volunteer_id: i32,
    ) -> Result<TrackingVolunteerModel, Error> {
        ctx.require_staff("assign rescue volunteer")?;

        let uow = UnitOfWork::new(self.db);
        uow.execute(
            &format!(
                "assignment of volunteer ID {} to rescue tracking ID {}",
                volunteer_id, tracking_id
            ),
            |txn| {
                Box::pin(async move {
                    let tracking_repo = RescueTrackingRepository::new(txn);

                    let Some(tracking) = tracking_repo.get_by_id_for_update(tracking_id).await?
                    else {
                        return Err(DomainError::TrackingNotFound(tracking_id).into());
                    };

                    if tracking.status == TrackingStatus::Completed {
                        return Err(DomainError::TrackingCompleted(tracking_id).into());
                    }

                    if VolunteerRepository::new(txn)
                        .get_by_id(volunteer_id)
                        .await?
                        .is_none()
                    {
                        return Err(DomainError::VolunteerNotFound(volunteer_id).into());
                    }

                    if tracking_repo
                        .find_volunteer(tracking_id, volunteer_id)
                        .await?
                        .is_some()
                    {
                        return Err(DomainError::DuplicateAssignment {
                            volunteer_id,
                            target: format!("rescue tracking ID {}", tracking_id),
                        }
                        .into());
                    }

                    let assignment = tracking_repo
                        .create_volunteer(tracking_id, volunteer_id)
                        .await?;

                    Ok(assignment)
                })
            },
        )
        .await
    }

    /// Gets a tracking record by ID
    pub async fn get(&self, tracking_id: i32) -> Result<RescueTrackingModel, Error> {
        RescueTrackingRepository::new(self.db)
            .get_by_id(tracking_id)
            .await?
            .ok_or_else(|| DomainError::TrackingNotFound(tracking_id).into())
    }

    /// Volunteers assigned to a tracking record
    pub async fn list_volunteers(
        &self,
        tracking_id: i32,
    ) -> Result<Vec<TrackingVolunteerModel>, Error> {
        let tracking_repo = RescueTrackingRepository::new(self.db);

        if tracking_repo.get_by_id(tracking_id).await?.is_none() {
            return Err(DomainError::TrackingNotFound(tracking_id).into());
        }

        Ok(tracking_repo
            .get_volunteers_by_tracking_id(tracking_id)
            .await?)
    }
}
