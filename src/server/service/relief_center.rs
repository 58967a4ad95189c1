//! Relief center administration.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{center::ReliefCenterRepository, user::UserRepository, volunteer::VolunteerRepository},
    error::{domain::DomainError, Error},
    model::{context::RequestContext, db::ReliefCenterModel},
    service::{capacity::CapacityTracker, unit_of_work::UnitOfWork},
};

/// Fields of a new relief center
pub struct ReliefCenterInput {
    /// Display name, unique ignoring case
    pub name: String,
    /// Address or description of the site
    pub location: String,
    /// Number of volunteers the site can hold
    pub max_capacity: i32,
    /// User managing the site
    pub manager_id: Option<i32>,
}

/// Creation, removal and lookup of relief centers
pub struct ReliefCenterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReliefCenterService<'a> {
    /// Creates a new instance of [`ReliefCenterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a center with a volunteer count of 0
    ///
    /// # Returns
    /// - `Ok(ReliefCenterModel)` - The created center
    /// - `Err(Error::DomainError(DomainError::AlreadyExists))` - A center with the same name,
    ///   ignoring case, exists
    /// - `Err(Error::DomainError(DomainError::UserNotFound))` - Unknown manager
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: ReliefCenterInput,
    ) -> Result<ReliefCenterModel, Error> {
        ctx.require_admin("create relief center")?;

        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("name", "must not be empty").into());
        }
        if input.max_capacity <= 0 {
            return Err(DomainError::validation("max_capacity", "must be greater than 0").into());
        }

        let uow = UnitOfWork::new(self.db);
        let center = uow
            .execute(&format!("creation of relief center {}", name), |txn| {
                let name = name.clone();
                let location = input.location.trim().to_string();
                let max_capacity = input.max_capacity;
                let manager_id = input.manager_id;
                Box::pin(async move {
                    let center_repo = ReliefCenterRepository::new(txn);

                    if center_repo.find_by_name(&name).await?.is_some() {
                        return Err(
                            DomainError::AlreadyExists(format!("Relief center {}", name)).into()
                        );
                    }

                    if let Some(manager_id) = manager_id {
                        if UserRepository::new(txn).get_by_id(manager_id).await?.is_none() {
                            return Err(DomainError::UserNotFound(manager_id).into());
                        }
                    }

                    let center = center_repo
                        .create(&name, &location, max_capacity, manager_id)
                        .await?;

                    Ok(center)
                })
            })
            .await?;

        tracing::info!("Created relief center ID {} ({})", center.id, center.name);

        Ok(center)
    }

    /// Deletes a center together with its volunteers
    ///
    /// The users behind the removed volunteers are returned to the `User` role. Stock and
    /// donations of the center cascade with it.
    pub async fn delete(&self, ctx: &RequestContext, center_id: i32) -> Result<(), Error> {
        ctx.require_admin("delete relief center")?;

        let uow = UnitOfWork::new(self.db);
        let removed = uow
            .execute(&format!("deletion of relief center ID {}", center_id), |txn| {
                Box::pin(async move {
                    let center_repo = ReliefCenterRepository::new(txn);
                    let volunteer_repo = VolunteerRepository::new(txn);

                    if center_repo.get_by_id_for_update(center_id).await?.is_none() {
                        return Err(DomainError::CenterNotFound(center_id).into());
                    }

                    let user_ids: Vec<i32> = volunteer_repo
                        .get_many_by_center_id(center_id)
                        .await?
                        .into_iter()
                        .map(|volunteer| volunteer.user_id)
                        .collect();

                    UserRepository::new(txn)
                        .set_role_for_many(&user_ids, UserRole::User)
                        .await?;
                    let removed = volunteer_repo.delete_by_center_id(center_id).await?;
                    center_repo.delete(center_id).await?;

                    Ok(removed.rows_affected)
                })
            })
            .await?;

        tracing::info!(
            "Deleted relief center ID {} and {} of its volunteers",
            center_id,
            removed
        );

        Ok(())
    }

    /// Recomputes the center's volunteer count, see [`CapacityTracker::recount`]
    pub async fn recount(
        &self,
        ctx: &RequestContext,
        center_id: i32,
    ) -> Result<ReliefCenterModel, Error> {
        ctx.require_admin("recount relief center")?;

        let uow = UnitOfWork::new(self.db);
        uow.execute(&format!("recount of relief center ID {}", center_id), |txn| {
            Box::pin(async move { CapacityTracker::recount(txn, center_id).await })
        })
        .await
    }

    /// Every center ordered by name
    pub async fn list(&self) -> Result<Vec<ReliefCenterModel>, Error> {
        Ok(ReliefCenterRepository::new(self.db).get_all().await?)
    }

    /// Looks up a single center
    pub async fn get(&self, center_id: i32) -> Result<ReliefCenterModel, Error> {
        ReliefCenterRepository::new(self.db)
            .get_by_id(center_id)
            .await?
            .ok_or_else(|| DomainError::CenterNotFound(center_id).into())
    }
}
