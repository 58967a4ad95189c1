//! Volunteer lifecycle. Every path that creates, moves, deactivates or removes a
//! volunteer recounts the affected centers within the same unit of work.

use entity::sea_orm_active_enums::{UserRole, VolunteerStatus};
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::{
        center::ReliefCenterRepository, skill::SkillRepository, user::UserRepository,
        volunteer::VolunteerRepository,
    },
    error::{domain::DomainError, Error},
    model::{
        context::RequestContext,
        db::{UserModel, VolunteerModel},
    },
    service::{capacity::CapacityTracker, unit_of_work::UnitOfWork},
    util::status::parse_status,
};

/// Self-registration of a new volunteer account
#[derive(Clone)]
pub struct VolunteerRegistration {
    /// Login email, unique across users
    pub email: String,
    /// Display name
    pub name: String,
    /// Contact phone number
    pub phone_no: String,
    /// Center the volunteer starts at
    pub center_id: i32,
    /// Skills from the catalogue, may be empty
    pub skill_ids: Vec<i32>,
}

/// Volunteer registration and center assignment
pub struct VolunteerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VolunteerService<'a> {
    /// Creates a new instance of [`VolunteerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user as an Active volunteer of a center with a set of skills
    ///
    /// The user, volunteer, skill links and the center's recount are written together;
    /// any failure leaves no trace. Duplicate skill IDs are collapsed.
    ///
    /// # Returns
    /// - `Ok((UserModel, VolunteerModel))` - The created user and volunteer
    /// - `Err(Error::DomainError(DomainError::NoSkillsAvailable))` - No skills exist yet
    /// - `Err(Error::DomainError(DomainError::CenterNotFound))` - Unknown center
    /// - `Err(Error::DomainError(DomainError::AlreadyExists))` - Email already registered
    /// - `Err(Error::DomainError(DomainError::SkillNotFound))` - Any skill ID is unknown
    pub async fn register(
        &self,
        registration: VolunteerRegistration,
    ) -> Result<(UserModel, VolunteerModel), Error> {
        let email = registration.email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::validation("email", "must be a valid email address").into());
        }
        if registration.name.trim().is_empty() {
            return Err(DomainError::validation("name", "must not be empty").into());
        }

        let mut skill_ids = registration.skill_ids.clone();
        skill_ids.sort_unstable();
        skill_ids.dedup();

        let center_id = registration.center_id;

        let uow = UnitOfWork::new(self.db);
        let (user, volunteer) = uow
            .execute(&format!("volunteer registration of {}", email), |txn| {
                let email = email.clone();
                let name = registration.name.trim().to_string();
                let phone_no = registration.phone_no.trim().to_string();
                let skill_ids = skill_ids.clone();
                Box::pin(async move {
                    let skill_repo = SkillRepository::new(txn);
                    let user_repo = UserRepository::new(txn);

                    if skill_repo.count().await? == 0 {
                        return Err(DomainError::NoSkillsAvailable.into());
                    }

                    if ReliefCenterRepository::new(txn)
                        .get_by_id(center_id)
                        .await?
                        .is_none()
                    {
                        return Err(DomainError::CenterNotFound(center_id).into());
                    }

                    if user_repo.find_by_email(&email).await?.is_some() {
                        return Err(DomainError::AlreadyExists(format!("User {}", email)).into());
                    }

                    let known = skill_repo.get_many_by_ids(&skill_ids).await?;
                    if let Some(missing) = skill_ids
                        .iter()
                        .find(|skill_id| !known.iter().any(|skill| skill.id == **skill_id))
                    {
                        return Err(DomainError::SkillNotFound(*missing).into());
                    }

                    let user = user_repo
                        .create(&email, &name, &phone_no, UserRole::Volunteer)
                        .await?;
                    let volunteer = VolunteerRepository::new(txn)
                        .create(user.id, Some(center_id), VolunteerStatus::Active)
                        .await?;
                    skill_repo.link_to_volunteer(volunteer.id, &skill_ids).await?;

                    CapacityTracker::recount(txn, center_id).await?;

                    Ok((user, volunteer))
                })
            })
            .await?;

        tracing::info!(
            "Registered volunteer ID {} (user ID {}) at center ID {}",
            volunteer.id,
            user.id,
            center_id
        );

        Ok((user, volunteer))
    }

    /// Activates or deactivates a volunteer
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        volunteer_id: i32,
        status: &str,
    ) -> Result<VolunteerModel, Error> {
        ctx.require_admin("update volunteer status")?;

        let status: VolunteerStatus = parse_status("status", status)?;

        let uow = UnitOfWork::new(self.db);
        uow.execute(&format!("status of volunteer ID {}", volunteer_id), |txn| {
            Box::pin(async move {
                let volunteer = lock_volunteer(txn, volunteer_id).await?;
                let center_id = volunteer.assigned_center_id;

                let updated = VolunteerRepository::new(txn)
                    .update(volunteer, center_id, status)
                    .await?;

                CapacityTracker::recount_many(txn, &[center_id]).await?;

                Ok(updated)
            })
        })
        .await
    }

    /// Moves a volunteer to another center, recounting both
    pub async fn reassign(
        &self,
        ctx: &RequestContext,
        volunteer_id: i32,
        center_id: i32,
    ) -> Result<VolunteerModel, Error> {
        ctx.require_admin("reassign volunteer")?;

        let uow = UnitOfWork::new(self.db);
        let volunteer = uow
            .execute(
                &format!(
                    "reassignment of volunteer ID {} to center ID {}",
                    volunteer_id, center_id
                ),
                |txn| {
                    Box::pin(async move {
                        let volunteer = lock_volunteer(txn, volunteer_id).await?;

                        assign_center(txn, volunteer, center_id).await
                    })
                },
            )
            .await?;

        tracing::info!(
            "Reassigned volunteer ID {} to center ID {}",
            volunteer_id,
            center_id
        );

        Ok(volunteer)
    }

    /// Removes a volunteer, returning its user to the `User` role
    pub async fn delete(&self, ctx: &RequestContext, volunteer_id: i32) -> Result<(), Error> {
        ctx.require_admin("delete volunteer")?;

        let uow = UnitOfWork::new(self.db);
        uow.execute(&format!("deletion of volunteer ID {}", volunteer_id), |txn| {
            Box::pin(async move {
                let volunteer = lock_volunteer(txn, volunteer_id).await?;

                VolunteerRepository::new(txn).delete(volunteer.id).await?;
                UserRepository::new(txn)
                    .update_role(volunteer.user_id, UserRole::User)
                    .await?;

                CapacityTracker::recount_many(txn, &[volunteer.assigned_center_id]).await?;

                Ok(())
            })
        })
        .await?;

        tracing::info!("Deleted volunteer ID {}", volunteer_id);

        Ok(())
    }

    /// Gets a volunteer by ID
    pub async fn get(&self, volunteer_id: i32) -> Result<VolunteerModel, Error> {
        VolunteerRepository::new(self.db)
            .get_by_id(volunteer_id)
            .await?
            .ok_or_else(|| DomainError::VolunteerNotFound(volunteer_id).into())
    }

    /// Skill IDs of a volunteer
    pub async fn get_skill_ids(&self, volunteer_id: i32) -> Result<Vec<i32>, Error> {
        self.get(volunteer_id).await?;

        Ok(SkillRepository::new(self.db)
            .get_ids_by_volunteer(volunteer_id)
            .await?)
    }
}

async fn lock_volunteer<C: ConnectionTrait>(
    db: &C,
    volunteer_id: i32,
) -> Result<VolunteerModel, Error> {
    VolunteerRepository::new(db)
        .get_by_id_for_update(volunteer_id)
        .await?
        .ok_or_else(|| DomainError::VolunteerNotFound(volunteer_id).into())
}

/// Points a volunteer at `center_id` and recounts the old and new center.
pub(super) async fn assign_center<C: ConnectionTrait>(
    db: &C,
    volunteer: VolunteerModel,
    center_id: i32,
) -> Result<VolunteerModel, Error> {
    if ReliefCenterRepository::new(db)
        .get_by_id(center_id)
        .await?
        .is_none()
    {
        return Err(DomainError::CenterNotFound(center_id).into());
    }

    let previous_center_id = volunteer.assigned_center_id;
    let status = volunteer.status;

    let updated = VolunteerRepository::new(db)
        .update(volunteer, Some(center_id), status)
        .await?;

    CapacityTracker::recount_many(db, &[previous_center_id, Some(center_id)]).await?;

    Ok(updated)
}
