//! Tests for RescueTrackingService::create.

use entity::sea_orm_active_enums::{AidRequestStatus, TrackingStatus, UserRole};
use relief::server::{
    error::{domain::DomainError, Error},
    model::context::RequestContext,
    service::aid::tracking::RescueTrackingService,
};
use relief_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests opening tracking for a request that is already completed.
///
/// Expected: Err with RequestCompleted and no tracking record stored
#[tokio::test]
async fn rejects_completed_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let request = test
        .relief()
        .insert_aid_request(admin.id, AidRequestStatus::Completed)
        .await?;
    let ctx = RequestContext::new(admin.id, admin.role);

    let result = RescueTrackingService::new(&test.db)
        .create(&ctx, request.id, "In Progress", None)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::RequestCompleted(id))) if id == request.id
    ));
    assert_eq!(
        entity::prelude::RescueTracking::find().count(&test.db).await?,
        0
    );

    Ok(())
}

/// Tests opening tracking without a start time.
///
/// Expected: Ok with the start time defaulted and nobody helped yet
#[tokio::test]
async fn defaults_start_time_to_now() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let volunteer = test.relief().insert_user(UserRole::Volunteer).await?;
    let request = test
        .relief()
        .insert_aid_request(volunteer.id, AidRequestStatus::InProgress)
        .await?;
    let ctx = RequestContext::new(volunteer.id, volunteer.role);
    let before = chrono::Utc::now().naive_utc();

    let (tracking, created) = RescueTrackingService::new(&test.db)
        .create(&ctx, request.id, "pending", None)
        .await
        .unwrap();

    assert!(created);
    assert_eq!(tracking.status, TrackingStatus::Pending);
    assert_eq!(tracking.people_helped, 0);
    assert!(tracking.start_time.is_some_and(|start| start >= before));
    assert!(tracking.completion_time.is_none());

    Ok(())
}

/// Tests opening tracking twice for the same request.
///
/// Expected: Ok with the first record returned again, created only once
#[tokio::test]
async fn repeated_create_returns_existing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let request = test
        .relief()
        .insert_aid_request(admin.id, AidRequestStatus::InProgress)
        .await?;
    let ctx = RequestContext::new(admin.id, admin.role);
    let service = RescueTrackingService::new(&test.db);

    let (first, _) = service
        .create(&ctx, request.id, "In Progress", None)
        .await
        .unwrap();
    let (second, created) = service
        .create(&ctx, request.id, "Pending", None)
        .await
        .unwrap();

    assert!(!created);
    assert_eq!(first.id, second.id);
    assert_eq!(second.status, TrackingStatus::InProgress);

    Ok(())
}

/// Tests opening tracking directly as Completed.
///
/// Expected: Err with ValidationError
#[tokio::test]
async fn rejects_completed_initial_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let request = test
        .relief()
        .insert_aid_request(admin.id, AidRequestStatus::InProgress)
        .await?;
    let ctx = RequestContext::new(admin.id, admin.role);

    let result = RescueTrackingService::new(&test.db)
        .create(&ctx, request.id, "Completed", None)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::ValidationError { .. }))
    ));

    Ok(())
}

/// Tests opening tracking for a request that does not exist.
///
/// Expected: Err with AidRequestNotFound
#[tokio::test]
async fn fails_for_unknown_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let ctx = RequestContext::new(admin.id, admin.role);

    let result = RescueTrackingService::new(&test.db)
        .create(&ctx, 42, "Pending", None)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::AidRequestNotFound(42)))
    ));

    Ok(())
}
