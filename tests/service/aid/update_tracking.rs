//! Tests for RescueTrackingService::update.

use entity::sea_orm_active_enums::{AidRequestStatus, TrackingStatus, UserRole};
use relief::server::{
    error::{domain::DomainError, Error},
    model::context::RequestContext,
    service::aid::tracking::{RescueTrackingService, TrackingUpdate},
};
use relief_test_utils::prelude::*;

async fn open_tracking(
    test: &TestContext,
    status: TrackingStatus,
) -> Result<(RequestContext, i32), TestError> {
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let request = test
        .relief()
        .insert_aid_request(admin.id, AidRequestStatus::InProgress)
        .await?;
    let tracking = test.relief().insert_tracking(request.id, status).await?;

    Ok((RequestContext::new(admin.id, admin.role), tracking.id))
}

/// Tests completing a rescue with a completion time.
///
/// Expected: Ok with status Completed, the completion time and people helped stored
#[tokio::test]
async fn completes_with_completion_time() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let (ctx, tracking_id) = open_tracking(&test, TrackingStatus::InProgress).await?;
    let finished = chrono::Utc::now().naive_utc();

    let result = RescueTrackingService::new(&test.db)
        .update(
            &ctx,
            tracking_id,
            TrackingUpdate {
                status: Some("Completed".to_string()),
                people_helped: Some(7),
                completion_time: Some(finished),
            },
        )
        .await;

    assert!(result.is_ok());
    let tracking = result.unwrap();
    assert_eq!(tracking.status, TrackingStatus::Completed);
    assert_eq!(tracking.people_helped, 7);
    assert_eq!(tracking.completion_time, Some(finished));

    Ok(())
}

/// Tests completing a rescue without any completion time.
///
/// Expected: Err with ValidationError and the record unchanged
#[tokio::test]
async fn completing_requires_completion_time() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let (ctx, tracking_id) = open_tracking(&test, TrackingStatus::InProgress).await?;
    let service = RescueTrackingService::new(&test.db);

    let result = service
        .update(
            &ctx,
            tracking_id,
            TrackingUpdate {
                status: Some("Completed".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::ValidationError { .. }))
    ));
    assert_eq!(
        service.get(tracking_id).await.unwrap().status,
        TrackingStatus::InProgress
    );

    Ok(())
}

/// Tests moving a completed rescue back to In Progress.
///
/// Expected: Err with InvalidStatusTransition
#[tokio::test]
async fn completed_rescue_cannot_reopen() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let (ctx, tracking_id) = open_tracking(&test, TrackingStatus::Completed).await?;

    let result = RescueTrackingService::new(&test.db)
        .update(
            &ctx,
            tracking_id,
            TrackingUpdate {
                status: Some("In Progress".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::InvalidStatusTransition { .. }))
    ));

    Ok(())
}

/// Tests updating only the number of people helped.
///
/// Expected: Ok with the status kept and the count replaced
#[tokio::test]
async fn omitted_fields_keep_values() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let (ctx, tracking_id) = open_tracking(&test, TrackingStatus::Pending).await?;

    let tracking = RescueTrackingService::new(&test.db)
        .update(
            &ctx,
            tracking_id,
            TrackingUpdate {
                people_helped: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(tracking.status, TrackingStatus::Pending);
    assert_eq!(tracking.people_helped, 3);
    assert!(tracking.completion_time.is_none());

    Ok(())
}

/// Tests a negative number of people helped.
///
/// Expected: Err with ValidationError
#[tokio::test]
async fn rejects_negative_people_helped() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let (ctx, tracking_id) = open_tracking(&test, TrackingStatus::InProgress).await?;

    let result = RescueTrackingService::new(&test.db)
        .update(
            &ctx,
            tracking_id,
            TrackingUpdate {
                people_helped: Some(-1),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::ValidationError { .. }))
    ));

    Ok(())
}

/// Tests updating a tracking record that does not exist.
///
/// Expected: Err with TrackingNotFound
#[tokio::test]
async fn fails_for_unknown_tracking() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let ctx = RequestContext::new(admin.id, admin.role);

    let result = RescueTrackingService::new(&test.db)
        .update(&ctx, 5, TrackingUpdate::default())
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::TrackingNotFound(5)))
    ));

    Ok(())
}
