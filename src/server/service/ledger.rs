//! Credit and debit accounting of each center's resource stock.
//!
//! Quantities only change through [`ResourceLedger`], which takes the open transaction
//! of the caller's unit of work. A debit locks the row, checks the available quantity
//! and then applies a version-guarded decrement, so a concurrent writer either queues
//! behind the lock or loses the version race and is retried.

use chrono::NaiveDateTime;
use sea_orm::ConnectionTrait;

use crate::server::{
    data::{
        aid::preparation::AidPreparationRepository, center::ReliefCenterRepository,
        resource::ResourceRepository,
    },
    error::{domain::DomainError, Error},
    model::db::{ResourceModel, ResourceUsageModel},
};

/// Stock movements on per-center resources
pub struct ResourceLedger;

impl ResourceLedger {
    /// Canonical matching key for a resource type: trimmed and lowercased.
    pub fn normalize_type_key(resource_type: &str) -> String {
        resource_type.trim().to_lowercase()
    }

    /// Adds stock of `resource_type` to a center.
    ///
    /// Matches an existing row on the normalized type key and increments it, otherwise
    /// creates the row with the trimmed display name and the provided expiry. The expiry
    /// of an existing row is left untouched.
    ///
    /// # Returns
    /// - `Ok(ResourceModel)` - The credited row after the update
    /// - `Err(Error::DomainError)` - Non-positive quantity, blank type, unknown center or a
    ///   credit that would overflow the stored quantity
    /// - `Err(Error::ConcurrencyConflict)` - Row changed between lock and update, retried by the unit of work
    pub async fn credit<C: ConnectionTrait>(
        db: &C,
        center_id: i32,
        resource_type: &str,
        quantity: i32,
        expires_at: Option<NaiveDateTime>,
    ) -> Result<ResourceModel, Error> {
        validate_quantity(quantity)?;

        let display_type = resource_type.trim();
        if display_type.is_empty() {
            return Err(DomainError::validation("resource_type", "must not be empty").into());
        }

        if ReliefCenterRepository::new(db)
            .get_by_id(center_id)
            .await?
            .is_none()
        {
            return Err(DomainError::CenterNotFound(center_id).into());
        }

        let resource_repo = ResourceRepository::new(db);
        let type_key = Self::normalize_type_key(display_type);

        let resource = match resource_repo
            .find_by_type_key_for_update(center_id, &type_key)
            .await?
        {
            Some(existing) => {
                ensure_headroom(&existing, quantity)?;

                if !resource_repo
                    .apply_delta(existing.id, existing.version, quantity)
                    .await?
                {
                    return Err(Error::ConcurrencyConflict(format!(
                        "credit of resource ID {}",
                        existing.id
                    )));
                }

                Self::get(db, existing.id).await?
            }
            None => {
                resource_repo
                    .create(center_id, display_type, &type_key, quantity, expires_at)
                    .await?
            }
        };

        tracing::info!(
            "Credited {} {} to center ID {} (now {})",
            quantity,
            resource.resource_type,
            center_id,
            resource.quantity
        );

        Ok(resource)
    }

    /// Consumes stock for an aid preparation and records the usage.
    ///
    /// # Returns
    /// - `Ok(ResourceUsageModel)` - The usage record written alongside the decrement
    /// - `Err(Error::DomainError)` - Non-positive quantity, unknown resource or insufficient stock
    pub async fn debit<C: ConnectionTrait>(
        db: &C,
        preparation_id: i32,
        resource_id: i32,
        quantity: i32,
    ) -> Result<ResourceUsageModel, Error> {
        Self::take(db, resource_id, quantity).await?;

        let usage = AidPreparationRepository::new(db)
            .create_usage(preparation_id, resource_id, quantity)
            .await?;

        tracing::info!(
            "Debited {} of resource ID {} for aid preparation ID {}",
            quantity,
            resource_id,
            preparation_id
        );

        Ok(usage)
    }

    /// Decrements a resource without writing a usage record.
    pub async fn take<C: ConnectionTrait>(
        db: &C,
        resource_id: i32,
        quantity: i32,
    ) -> Result<ResourceModel, Error> {
        validate_quantity(quantity)?;

        let resource_repo = ResourceRepository::new(db);

        let Some(resource) = resource_repo.get_by_id_for_update(resource_id).await? else {
            return Err(DomainError::ResourceNotFound(resource_id).into());
        };

        if quantity > resource.quantity {
            return Err(insufficient(&resource, quantity));
        }

        if !resource_repo
            .apply_delta(resource.id, resource.version, -quantity)
            .await?
        {
            // Lost the race: report shortage if the stock is now too low, otherwise retry
            let current = Self::get(db, resource_id).await?;
            if quantity > current.quantity {
                return Err(insufficient(&current, quantity));
            }

            return Err(Error::ConcurrencyConflict(format!(
                "debit of resource ID {}",
                resource_id
            )));
        }

        Self::get(db, resource_id).await
    }

    /// Returns previously consumed stock to a resource by ID.
    ///
    /// Fails with a validation error instead of wrapping when the stored quantity cannot
    /// hold the returned amount.
    pub async fn restore<C: ConnectionTrait>(
        db: &C,
        resource_id: i32,
        quantity: i32,
    ) -> Result<ResourceModel, Error> {
        validate_quantity(quantity)?;

        let resource_repo = ResourceRepository::new(db);

        let Some(resource) = resource_repo.get_by_id_for_update(resource_id).await? else {
            return Err(DomainError::ResourceNotFound(resource_id).into());
        };

        ensure_headroom(&resource, quantity)?;

        if !resource_repo
            .apply_delta(resource.id, resource.version, quantity)
            .await?
        {
            return Err(Error::ConcurrencyConflict(format!(
                "restore of resource ID {}",
                resource_id
            )));
        }

        Self::get(db, resource_id).await
    }

    /// All resources held by a center.
    pub async fn query<C: ConnectionTrait>(
        db: &C,
        center_id: i32,
    ) -> Result<Vec<ResourceModel>, Error> {
        if ReliefCenterRepository::new(db)
            .get_by_id(center_id)
            .await?
            .is_none()
        {
            return Err(DomainError::CenterNotFound(center_id).into());
        }

        Ok(ResourceRepository::new(db)
            .get_many_by_center_id(center_id)
            .await?)
    }

    /// Gets a resource by ID
    pub async fn get<C: ConnectionTrait>(db: &C, resource_id: i32) -> Result<ResourceModel, Error> {
        ResourceRepository::new(db)
            .get_by_id(resource_id)
            .await?
            .ok_or_else(|| DomainError::ResourceNotFound(resource_id).into())
    }
}

fn validate_quantity(quantity: i32) -> Result<(), DomainError> {
    if quantity <= 0 {
        return Err(DomainError::validation("quantity", "must be greater than 0"));
    }

    Ok(())
}

/// Rejects an increment the stored quantity cannot represent
fn ensure_headroom(resource: &ResourceModel, quantity: i32) -> Result<(), DomainError> {
    if resource.quantity.checked_add(quantity).is_none() {
        return Err(DomainError::validation(
            "quantity",
            "would exceed the maximum stock level",
        ));
    }

    Ok(())
}

fn insufficient(resource: &ResourceModel, requested: i32) -> Error {
    DomainError::InsufficientResource {
        resource_id: resource.id,
        requested,
        available: resource.quantity,
    }
    .into()
}
