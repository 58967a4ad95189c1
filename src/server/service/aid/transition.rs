//! Transition table of the aid lifecycle stages.
//!
//! - Aid request: `Pending -> {Approved, Rejected}`, `Approved -> In Progress -> Completed`
//! - Aid preparation: `Preparing -> Dispatched -> Completed`
//! - Rescue tracking: starts `Pending` or `In Progress`, may move freely between
//!   `Pending`, `In Progress` and `Completed` until it is completed, and needs a
//!   completion time to complete
//!
//! Setting a status to its current value is always accepted and changes nothing.

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{AidRequestStatus, PreparationStatus, TrackingStatus};
use sea_orm::ActiveEnum;

use crate::server::{error::domain::DomainError, model::db::RescueTrackingModel};

/// Checks an aid request status change.
///
/// Requests move `Pending` to `Approved` or `Rejected`, then `Approved` to `In Progress`
/// to `Completed`. Setting the current status again is allowed.
pub fn check_request_transition(
    from: AidRequestStatus,
    to: AidRequestStatus,
) -> Result<(), DomainError> {
    use AidRequestStatus::*;

    let allowed = from == to
        || matches!(
            (from, to),
            (Pending, Approved)
                | (Pending, Rejected)
                | (Approved, InProgress)
                | (InProgress, Completed)
        );

    if !allowed {
        return Err(invalid("aid request", from, to));
    }

    Ok(())
}

/// Checks an aid preparation status change: `Preparing` to `Dispatched` to `Completed`
pub fn check_preparation_transition(
    from: PreparationStatus,
    to: PreparationStatus,
) -> Result<(), DomainError> {
    use PreparationStatus::*;

    let allowed =
        from == to || matches!((from, to), (Preparing, Dispatched) | (Dispatched, Completed));

    if !allowed {
        return Err(invalid("aid preparation", from, to));
    }

    Ok(())
}

/// A rescue tracking record may only be opened as `Pending` or `In Progress`.
pub fn check_tracking_initial_status(status: TrackingStatus) -> Result<(), DomainError> {
    match status {
        TrackingStatus::Pending | TrackingStatus::InProgress => Ok(()),
        TrackingStatus::Completed => Err(DomainError::validation(
            "status",
            "a rescue tracking record must start as Pending or In Progress",
        )),
    }
}

/// Resolves the status and completion time a tracking update ends up with.
///
/// Omitted fields keep their current values.
///
/// # Returns
/// - `Ok((TrackingStatus, Option<NaiveDateTime>))` - Status and completion time to persist
/// - `Err(DomainError::InvalidStatusTransition)` - Attempt to leave `Completed`
/// - `Err(DomainError::ValidationError)` - `Completed` without any known completion time
pub fn resolve_tracking_update(
    current: &RescueTrackingModel,
    status: Option<TrackingStatus>,
    completion_time: Option<NaiveDateTime>,
) -> Result<(TrackingStatus, Option<NaiveDateTime>), DomainError> {
    let target = status.unwrap_or(current.status);

    if current.status == TrackingStatus::Completed && target != TrackingStatus::Completed {
        return Err(invalid("rescue tracking", current.status, target));
    }

    let completion_time = completion_time.or(current.completion_time);

    if target == TrackingStatus::Completed && completion_time.is_none() {
        return Err(DomainError::validation(
            "completion_time",
            "required to complete a rescue",
        ));
    }

    Ok((target, completion_time))
}

fn invalid<E: ActiveEnum<Value = String>>(entity: &'static str, from: E, to: E) -> DomainError {
    DomainError::InvalidStatusTransition {
        entity,
        from: from.to_value(),
        to: to.to_value(),
    }
}
