//! User lookup, role changes and removal.

use entity::sea_orm_active_enums::{UserRole, VolunteerStatus};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{center::ReliefCenterRepository, user::UserRepository, volunteer::VolunteerRepository},
    error::{domain::DomainError, Error},
    model::{context::RequestContext, db::UserModel},
    service::{capacity::CapacityTracker, unit_of_work::UnitOfWork, volunteer::assign_center},
    util::status::parse_status,
};

/// User account administration
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Changes the role of a user, keeping the volunteer row in step
    ///
    /// - Becoming a volunteer creates an Active volunteer at `center_id`, which is required
    /// - Staying a volunteer with a different `center_id` reassigns the volunteer
    /// - Leaving the volunteer role removes the volunteer row
    ///
    /// Affected centers are recounted in the same unit of work.
    pub async fn change_role(
        &self,
        ctx: &RequestContext,
        user_id: i32,
        role: &str,
        center_id: Option<i32>,
    ) -> Result<UserModel, Error> {
        ctx.require_admin("change user role")?;

        let role: UserRole = parse_status("role", role)?;

        let uow = UnitOfWork::new(self.db);
        let user = uow
            .execute(&format!("role change of user ID {}", user_id), |txn| {
                Box::pin(async move {
                    let user_repo = UserRepository::new(txn);
                    let volunteer_repo = VolunteerRepository::new(txn);

                    if user_repo.get_by_id(user_id).await?.is_none() {
                        return Err(DomainError::UserNotFound(user_id).into());
                    }

                    let volunteer = volunteer_repo.get_by_user_id(user_id).await?;

                    match (role, volunteer) {
                        (UserRole::Volunteer, None) => {
                            let Some(center_id) = center_id else {
                                return Err(DomainError::validation(
                                    "center_id",
                                    "required when assigning the Volunteer role",
                                )
                                .into());
                            };
                            if ReliefCenterRepository::new(txn)
                                .get_by_id(center_id)
                                .await?
                                .is_none()
                            {
                                return Err(DomainError::CenterNotFound(center_id).into());
                            }

                            volunteer_repo
                                .create(user_id, Some(center_id), VolunteerStatus::Active)
                                .await?;
                            CapacityTracker::recount(txn, center_id).await?;
                        }
                        (UserRole::Volunteer, Some(volunteer)) => {
                            if let Some(center_id) = center_id {
                                if volunteer.assigned_center_id != Some(center_id) {
                                    assign_center(txn, volunteer, center_id).await?;
                                }
                            }
                        }
                        (_, Some(volunteer)) => {
                            volunteer_repo.delete(volunteer.id).await?;
                            CapacityTracker::recount_many(txn, &[volunteer.assigned_center_id])
                                .await?;
                        }
                        (_, None) => {}
                    }

                    user_repo
                        .update_role(user_id, role)
                        .await?
                        .ok_or_else(|| DomainError::UserNotFound(user_id).into())
                })
            })
            .await?;

        tracing::info!("Changed role of user ID {} to {:?}", user_id, role);

        Ok(user)
    }

    /// Deletes a user; a volunteer row goes with it and its center is recounted
    pub async fn delete(&self, ctx: &RequestContext, user_id: i32) -> Result<(), Error> {
        ctx.require_admin("delete user")?;

        let uow = UnitOfWork::new(self.db);
        uow.execute(&format!("deletion of user ID {}", user_id), |txn| {
            Box::pin(async move {
                let user_repo = UserRepository::new(txn);

                if user_repo.get_by_id(user_id).await?.is_none() {
                    return Err(DomainError::UserNotFound(user_id).into());
                }

                let volunteer = VolunteerRepository::new(txn)
                    .get_by_user_id(user_id)
                    .await?;

                user_repo.delete(user_id).await?;

                if let Some(volunteer) = volunteer {
                    CapacityTracker::recount_many(txn, &[volunteer.assigned_center_id]).await?;
                }

                Ok(())
            })
        })
        .await?;

        tracing::info!("Deleted user ID {}", user_id);

        Ok(())
    }

    /// Gets a user by ID
    pub async fn get(&self, user_id: i32) -> Result<UserModel, Error> {
        UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }
}
