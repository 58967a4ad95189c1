//! Dispatch planning of an aid request: timing, consumed stock and assigned volunteers.

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::PreparationStatus;
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::{
        aid::{preparation::AidPreparationRepository, request::AidRequestRepository},
        volunteer::VolunteerRepository,
    },
    error::{domain::DomainError, Error},
    model::{
        context::RequestContext,
        db::{AidPreparationModel, PreparationVolunteerModel, ResourceUsageModel},
    },
    service::{
        aid::transition::check_preparation_transition, ledger::ResourceLedger,
        unit_of_work::UnitOfWork,
    },
    util::status::parse_status,
};

/// Dispatch planning for approved aid requests
pub struct AidPreparationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AidPreparationService<'a> {
    /// Creates a new instance of [`AidPreparationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the preparation of an aid request, creating it on first call
    ///
    /// A repeated call returns the existing preparation unchanged. Two concurrent first
    /// calls race on the unique request ID; the loser is retried and finds the winner's row.
    ///
    /// # Returns
    /// - `Ok((AidPreparationModel, true))` - Preparation was created by this call
    /// - `Ok((AidPreparationModel, false))` - Preparation already existed
    /// - `Err(Error::DomainError(DomainError::AidRequestNotFound))` - Unknown aid request
    pub async fn create_or_get(
        &self,
        ctx: &RequestContext,
        request_id: i32,
    ) -> Result<(AidPreparationModel, bool), Error> {
        ctx.require_staff("create aid preparation")?;

        let uow = UnitOfWork::new(self.db);
        let (preparation, created) = uow
            .execute(&format!("preparation of aid request ID {}", request_id), |txn| {
                Box::pin(async move {
                    if AidRequestRepository::new(txn)
                        .get_by_id(request_id)
                        .await?
                        .is_none()
                    {
                        return Err(DomainError::AidRequestNotFound(request_id).into());
                    }

                    let preparation_repo = AidPreparationRepository::new(txn);

                    if let Some(existing) = preparation_repo.get_by_request_id(request_id).await? {
                        return Ok((existing, false));
                    }

                    let preparation = preparation_repo.create(request_id).await?;

                    Ok((preparation, true))
                })
            })
            .await?;

        if created {
            tracing::info!(
                "Created aid preparation ID {} for aid request ID {}",
                preparation.id,
                request_id
            );
        }

        Ok((preparation, created))
    }

    /// Sets departure and estimated arrival, omitted values are cleared
    pub async fn update_times(
        &self,
        ctx: &RequestContext,
        preparation_id: i32,
        departure_time: Option<NaiveDateTime>,
        estimated_arrival: Option<NaiveDateTime>,
    ) -> Result<AidPreparationModel, Error> {
        ctx.require_staff("update aid preparation times")?;

        if let (Some(departure), Some(arrival)) = (departure_time, estimated_arrival) {
            if arrival < departure {
                return Err(DomainError::validation(
                    "estimated_arrival",
                    "must not be before the departure time",
                )
                .into());
            }
        }

        let uow = UnitOfWork::new(self.db);
        uow.execute(&format!("times of aid preparation ID {}", preparation_id), |txn| {
            Box::pin(async move {
                let preparation = lock_preparation(txn, preparation_id).await?;

                let updated = AidPreparationRepository::new(txn)
                    .update_times(preparation, departure_time, estimated_arrival)
                    .await?;

                Ok(updated)
            })
        })
        .await
    }

    /// Moves a preparation along `Preparing`, `Dispatched` and `Completed`
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        preparation_id: i32,
        status: &str,
    ) -> Result<AidPreparationModel, Error> {
        ctx.require_staff("update aid preparation status")?;

        let status: PreparationStatus = parse_status("status", status)?;

        let uow = UnitOfWork::new(self.db);
        uow.execute(&format!("status of aid preparation ID {}", preparation_id), |txn| {
            Box::pin(async move {
                let preparation = lock_preparation(txn, preparation_id).await?;

                check_preparation_transition(preparation.status, status)?;

                if preparation.status == status {
                    return Ok(preparation);
                }

                let updated = AidPreparationRepository::new(txn)
                    .update_status(preparation, status)
                    .await?;

                Ok(updated)
            })
        })
        .await
    }

    /// Gets a preparation by ID
    pub async fn get(&self, preparation_id: i32) -> Result<AidPreparationModel, Error> {
        AidPreparationRepository::new(self.db)
            .get_by_id(preparation_id)
            .await?
            .ok_or_else(|| DomainError::PreparationNotFound(preparation_id).into())
    }

    /// Consumes stock for a preparation, see [`ResourceLedger::debit`]
    pub async fn add_resource_usage(
        &self,
        ctx: &RequestContext,
        preparation_id: i32,
        resource_id: i32,
        quantity: i32,
    ) -> Result<ResourceUsageModel, Error> {
        ctx.require_staff("add resource usage")?;

        let uow = UnitOfWork::new(self.db);
        uow.execute(
            &format!(
                "usage of resource ID {} by aid preparation ID {}",
                resource_id, preparation_id
            ),
            |txn| {
                Box::pin(async move {
                    lock_preparation(txn, preparation_id).await?;

                    ResourceLedger::debit(txn, preparation_id, resource_id, quantity).await
                })
            },
        )
        .await
    }

    /// Usage records of a preparation
    pub async fn list_resource_usage(
        &self,
        preparation_id: i32,
    ) -> Result<Vec<ResourceUsageModel>, Error> {
        let preparation_repo = AidPreparationRepository::new(self.db);

        if preparation_repo.get_by_id(preparation_id).await?.is_none() {
            return Err(DomainError::PreparationNotFound(preparation_id).into());
        }

        Ok(preparation_repo
            .get_usages_by_preparation_id(preparation_id)
            .await?)
    }

    /// Changes the resource or amount of a usage record
    ///
    /// The previously used amount is returned to the previous resource before the new
    /// amount is taken, so editing a usage never loses or invents stock.
    pub async fn update_resource_usage(
        &self,
        ctx: &RequestContext,
        usage_id: i32,
        resource_id: i32,
        quantity: i32,
    ) -> Result<ResourceUsageModel, Error> {
        ctx.require_staff("update resource usage")?;

        let uow = UnitOfWork::new(self.db);
        uow.execute(&format!("edit of resource usage ID {}", usage_id), |txn| {
            Box::pin(async move {
                let preparation_repo = AidPreparationRepository::new(txn);

                let Some(usage) = preparation_repo.get_usage_for_update(usage_id).await? else {
                    return Err(DomainError::UsageNotFound(usage_id).into());
                };

                ResourceLedger::restore(txn, usage.resource_id, usage.quantity_used).await?;
                ResourceLedger::take(txn, resource_id, quantity).await?;

                let updated = preparation_repo
                    .update_usage(usage, resource_id, quantity)
                    .await?;

                Ok(updated)
            })
        })
        .await
    }

    /// Deletes a usage record and returns its amount to the resource
    pub async fn delete_resource_usage(
        &self,
        ctx: &RequestContext,
        usage_id: i32,
    ) -> Result<(), Error> {
        ctx.require_staff("delete resource usage")?;

        let uow = UnitOfWork::new(self.db);
        uow.execute(&format!("removal of resource usage ID {}", usage_id), |txn| {
            Box::pin(async move {
                let preparation_repo = AidPreparationRepository::new(txn);

                let Some(usage) = preparation_repo.get_usage_for_update(usage_id).await? else {
                    return Err(DomainError::UsageNotFound(usage_id).into());
                };

                ResourceLedger::restore(txn, usage.resource_id, usage.quantity_used).await?;
                preparation_repo.delete_usage(usage.id).await?;

                Ok(())
            })
        })
        .await
    }

    /// Attaches a volunteer to a preparation, rejecting duplicates
    pub async fn add_volunteer(
        &self,
        ctx: &RequestContext,
        preparation_id: i32,
        volunteer_id: i32,
    ) -> Result<PreparationVolunteerModel, Error> {
        ctx.require_staff("assign preparation volunteer")?;

        let uow = UnitOfWork::new(self.db);
        uow.execute(
            &format!(
                "assignment of volunteer ID {} to aid preparation ID {}",
                volunteer_id, preparation_id
            ),
            |txn| {
                Box::pin(async move {
                    lock_preparation(txn, preparation_id).await?;

                    if VolunteerRepository::new(txn)
                        .get_by_id(volunteer_id)
                        .await?
                        .is_none()
                    {
                        return Err(DomainError::VolunteerNotFound(volunteer_id).into());
                    }

                    let preparation_repo = AidPreparationRepository::new(txn);

                    if preparation_repo
                        .find_volunteer(preparation_id, volunteer_id)
                        .await?
                        .is_some()
                    {
                        return Err(DomainError::DuplicateAssignment {
                            volunteer_id,
                            target: format!("aid preparation ID {}", preparation_id),
                        }
                        .into());
                    }

                    let assignment = preparation_repo
                        .create_volunteer(preparation_id, volunteer_id)
                        .await?;

                    Ok(assignment)
                })
            },
        )
        .await
    }

    /// Detaches a volunteer from a preparation
    pub async fn remove_volunteer(
        &self,
        ctx: &RequestContext,
        preparation_id: i32,
        volunteer_id: i32,
    ) -> Result<(), Error> {
        ctx.require_staff("remove preparation volunteer")?;

        let uow = UnitOfWork::new(self.db);
        uow.execute(
            &format!(
                "removal of volunteer ID {} from aid preparation ID {}",
                volunteer_id, preparation_id
            ),
            |txn| {
                Box::pin(async move {
                    lock_preparation(txn, preparation_id).await?;

                    let preparation_repo = AidPreparationRepository::new(txn);

                    let Some(assignment) = preparation_repo
                        .find_volunteer(preparation_id, volunteer_id)
                        .await?
                    else {
                        return Err(DomainError::VolunteerNotFound(volunteer_id).into());
                    };

                    preparation_repo.delete_volunteer(assignment.id).await?;

                    Ok(())
                })
            },
        )
        .await
    }

    /// Volunteers assigned to a preparation
    pub async fn list_volunteers(
        &self,
        preparation_id: i32,
    ) -> Result<Vec<PreparationVolunteerModel>, Error> {
        let preparation_repo = AidPreparationRepository::new(self.db);

        if preparation_repo.get_by_id(preparation_id).await?.is_none() {
            return Err(DomainError::PreparationNotFound(preparation_id).into());
        }

        Ok(preparation_repo
            .get_volunteers_by_preparation_id(preparation_id)
            .await?)
    }
}

async fn lock_preparation<C: ConnectionTrait>(
    db: &C,
    preparation_id: i32,
) -> Result<AidPreparationModel, Error> {
    AidPreparationRepository::new(db)
        .get_by_id_for_update(preparation_id)
        .await?
        .ok_or_else(|| DomainError::PreparationNotFound(preparation_id).into())
}
