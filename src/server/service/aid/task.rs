//! Read-only views of the work a volunteer is assigned to.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        aid::{preparation::AidPreparationRepository, tracking::RescueTrackingRepository},
        volunteer::VolunteerRepository,
    },
    error::{domain::DomainError, Error},
    model::{
        context::RequestContext,
        db::{AidPreparationModel, AidRequestModel, RescueTrackingModel, VolunteerModel},
    },
};

/// Assignment listings for a single volunteer
pub struct VolunteerTaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VolunteerTaskService<'a> {
    /// Creates a new instance of [`VolunteerTaskService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Preparations the volunteer is assigned to, paired with the request each one serves
    ///
    /// Only admins and the volunteer's own user may look.
    ///
    /// # Returns
    /// - `Ok(Vec<(AidPreparationModel, AidRequestModel)>)` - Assignments ordered by preparation ID
    /// - `Err(Error::DomainError(DomainError::VolunteerNotFound))` - Unknown volunteer
    /// - `Err(Error::AuthError(AuthError::Forbidden))` - Caller is neither admin nor the volunteer
    pub async fn preparation_tasks(
        &self,
        ctx: &RequestContext,
        volunteer_id: i32,
    ) -> Result<Vec<(AidPreparationModel, AidRequestModel)>, Error> {
        let volunteer = self.authorize(ctx, volunteer_id).await?;

        let tasks = AidPreparationRepository::new(self.db)
            .get_tasks_by_volunteer_id(volunteer.id)
            .await?;

        Ok(with_request(tasks))
    }

    /// Rescue trackings the volunteer is assigned to, paired with the request each one serves
    ///
    /// Same access rule as [`Self::preparation_tasks`].
    pub async fn tracking_tasks(
        &self,
        ctx: &RequestContext,
        volunteer_id: i32,
    ) -> Result<Vec<(RescueTrackingModel, AidRequestModel)>, Error> {
        let volunteer = self.authorize(ctx, volunteer_id).await?;

        let tasks = RescueTrackingRepository::new(self.db)
            .get_tasks_by_volunteer_id(volunteer.id)
            .await?;

        Ok(with_request(tasks))
    }

    async fn authorize(
        &self,
        ctx: &RequestContext,
        volunteer_id: i32,
    ) -> Result<VolunteerModel, Error> {
        let volunteer = VolunteerRepository::new(self.db)
            .get_by_id(volunteer_id)
            .await?
            .ok_or(DomainError::VolunteerNotFound(volunteer_id))?;

        ctx.require_role_or_self(&[UserRole::Admin], volunteer.user_id, "view volunteer tasks")?;

        Ok(volunteer)
    }
}

/// Unwraps the joined request, present for every row through the non-null foreign key
fn with_request<T>(rows: Vec<(T, Option<AidRequestModel>)>) -> Vec<(T, AidRequestModel)> {
    rows.into_iter()
        .filter_map(|(task, request)| request.map(|request| (task, request)))
        .collect()
}
