//! Cached volunteer counts of relief centers.
//!
//! Every volunteer lifecycle path calls [`CapacityTracker::recount`] for each affected
//! center inside its own unit of work, so the cached count always matches the live
//! number of Active volunteers once the unit commits.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::{center::ReliefCenterRepository, volunteer::VolunteerRepository},
    error::{domain::DomainError, Error},
    model::db::ReliefCenterModel,
};

/// Keeps `relief_center.volunteer_count` in step with active volunteers
pub struct CapacityTracker;

impl CapacityTracker {
    /// Sets the center's volunteer count to its live number of Active volunteers.
    ///
    /// # Returns
    /// - `Ok(ReliefCenterModel)` - Center with the recomputed count
    /// - `Err(Error::DomainError(DomainError::CenterNotFound))` - Center does not exist
    /// - `Err(Error::ConcurrencyConflict)` - Center row changed between lock and write
    pub async fn recount<C: ConnectionTrait>(
        db: &C,
        center_id: i32,
    ) -> Result<ReliefCenterModel, Error> {
        let center_repo = ReliefCenterRepository::new(db);

        let Some(center) = center_repo.get_by_id_for_update(center_id).await? else {
            return Err(DomainError::CenterNotFound(center_id).into());
        };

        let active = VolunteerRepository::new(db)
            .count_active_by_center_id(center_id)
            .await?;
        let volunteer_count = i32::try_from(active).map_err(|_| {
            Error::InternalError(format!(
                "active volunteer count {} of center ID {} exceeds i32",
                active, center_id
            ))
        })?;

        write_count(db, &center, volunteer_count).await?;

        if center.volunteer_count != volunteer_count {
            tracing::info!(
                "Recounted center ID {}: {} -> {} volunteers",
                center_id,
                center.volunteer_count,
                volunteer_count
            );
        }

        get_center(db, center_id).await
    }

    /// Recounts every distinct center in `center_ids`, skipping unassigned entries.
    ///
    /// Centers are locked in ascending ID order, so two units touching the same pair of
    /// centers never wait on each other in opposite order.
    pub async fn recount_many<C: ConnectionTrait>(
        db: &C,
        center_ids: &[Option<i32>],
    ) -> Result<(), Error> {
        for center_id in lock_order(center_ids) {
            Self::recount(db, center_id).await?;
        }

        Ok(())
    }

    /// Incrementally moves one volunteer's weight from one center to another.
    ///
    /// The source center loses one and the target gains one, clamped at zero. A move
    /// between the same center is a no-op.
    pub async fn adjust_on_move<C: ConnectionTrait>(
        db: &C,
        from_center_id: Option<i32>,
        to_center_id: Option<i32>,
    ) -> Result<(), Error> {
        if from_center_id == to_center_id {
            return Ok(());
        }

        if let Some(center_id) = from_center_id {
            adjust(db, center_id, -1).await?;
        }
        if let Some(center_id) = to_center_id {
            adjust(db, center_id, 1).await?;
        }

        Ok(())
    }
}

/// Distinct assigned center IDs, ascending
fn lock_order(center_ids: &[Option<i32>]) -> Vec<i32> {
    let mut ids: Vec<i32> = center_ids.iter().flatten().copied().collect();
    ids.sort_unstable();
    ids.dedup();

    ids
}

async fn adjust<C: ConnectionTrait>(db: &C, center_id: i32, delta: i32) -> Result<(), Error> {
    let Some(center) = ReliefCenterRepository::new(db)
        .get_by_id_for_update(center_id)
        .await?
    else {
        return Err(DomainError::CenterNotFound(center_id).into());
    };

    let volunteer_count = center.volunteer_count.saturating_add(delta).max(0);

    write_count(db, &center, volunteer_count).await
}

async fn write_count<C: ConnectionTrait>(
    db: &C,
    center: &ReliefCenterModel,
    volunteer_count: i32,
) -> Result<(), Error> {
    if !ReliefCenterRepository::new(db)
        .set_volunteer_count(center.id, center.version, volunteer_count)
        .await?
    {
        return Err(Error::ConcurrencyConflict(format!(
            "volunteer count of center ID {}",
            center.id
        )));
    }

    Ok(())
}

async fn get_center<C: ConnectionTrait>(
    db: &C,
    center_id: i32,
) -> Result<ReliefCenterModel, Error> {
    ReliefCenterRepository::new(db)
        .get_by_id(center_id)
        .await?
        .ok_or_else(|| DomainError::CenterNotFound(center_id).into())
}
