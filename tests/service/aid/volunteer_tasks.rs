//! Tests for VolunteerTaskService.
//!
//! A volunteer's task lists join their assignments with the preparation or rescue and
//! the aid request behind it. Only admins and the volunteer's own user may read them.

use entity::sea_orm_active_enums::{
    AidRequestStatus, PreparationStatus, TrackingStatus, UserRole, VolunteerStatus,
};
use relief::server::{
    error::{auth::AuthError, domain::DomainError, Error},
    model::context::RequestContext,
    service::aid::{
        preparation::AidPreparationService, task::VolunteerTaskService,
        tracking::RescueTrackingService,
    },
};
use relief_test_utils::prelude::*;

/// Tests a volunteer reading their own preparation tasks.
///
/// Verifies that each task carries the request it serves and that preparations the
/// volunteer is not attached to are left out.
///
/// Expected: Ok with the single assigned preparation and its request
#[tokio::test]
async fn lists_own_preparation_tasks_with_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let center = test.relief().insert_center("North Hall", 10).await?;
    let (user, volunteer) = test
        .relief()
        .insert_user_volunteer(Some(center.id), VolunteerStatus::Active)
        .await?;
    let assigned_request = test
        .relief()
        .insert_aid_request(admin.id, AidRequestStatus::Approved)
        .await?;
    let other_request = test
        .relief()
        .insert_aid_request(admin.id, AidRequestStatus::Approved)
        .await?;
    let assigned = test
        .relief()
        .insert_preparation(assigned_request.id, PreparationStatus::Preparing)
        .await?;
    test.relief()
        .insert_preparation(other_request.id, PreparationStatus::Preparing)
        .await?;
    let admin_ctx = RequestContext::new(admin.id, admin.role);
    AidPreparationService::new(&test.db)
        .add_volunteer(&admin_ctx, assigned.id, volunteer.id)
        .await
        .unwrap();
    let ctx = RequestContext::new(user.id, user.role);

    let result = VolunteerTaskService::new(&test.db)
        .preparation_tasks(&ctx, volunteer.id)
        .await;

    assert!(result.is_ok());
    let tasks = result.unwrap();
    assert_eq!(tasks.len(), 1);
    let (preparation, request) = &tasks[0];
    assert_eq!(preparation.id, assigned.id);
    assert_eq!(request.id, assigned_request.id);
    assert_eq!(request.request_type, assigned_request.request_type);

    Ok(())
}

/// Tests an admin reading another volunteer's rescue tasks.
///
/// Expected: Ok with the assigned tracking and its request
#[tokio::test]
async fn admin_lists_tracking_tasks_of_any_volunteer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let center = test.relief().insert_center("North Hall", 10).await?;
    let (_, volunteer) = test
        .relief()
        .insert_user_volunteer(Some(center.id), VolunteerStatus::Active)
        .await?;
    let request = test
        .relief()
        .insert_aid_request(admin.id, AidRequestStatus::Approved)
        .await?;
    let tracking = test
        .relief()
        .insert_tracking(request.id, TrackingStatus::InProgress)
        .await?;
    let ctx = RequestContext::new(admin.id, admin.role);
    RescueTrackingService::new(&test.db)
        .assign_volunteer(&ctx, tracking.id, volunteer.id)
        .await
        .unwrap();

    let result = VolunteerTaskService::new(&test.db)
        .tracking_tasks(&ctx, volunteer.id)
        .await;

    assert!(result.is_ok());
    let tasks = result.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].0.id, tracking.id);
    assert_eq!(tasks[0].1.id, request.id);

    Ok(())
}

/// Tests a volunteer without assignments.
///
/// Expected: Ok with empty lists for both views
#[tokio::test]
async fn returns_empty_lists_without_assignments() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let center = test.relief().insert_center("North Hall", 10).await?;
    let (user, volunteer) = test
        .relief()
        .insert_user_volunteer(Some(center.id), VolunteerStatus::Active)
        .await?;
    let ctx = RequestContext::new(user.id, user.role);
    let service = VolunteerTaskService::new(&test.db);

    let preparations = service.preparation_tasks(&ctx, volunteer.id).await;
    let trackings = service.tracking_tasks(&ctx, volunteer.id).await;

    assert!(preparations.is_ok_and(|tasks| tasks.is_empty()));
    assert!(trackings.is_ok_and(|tasks| tasks.is_empty()));

    Ok(())
}

/// Tests another volunteer reading someone else's tasks.
///
/// Verifies that sharing the Volunteer role is not enough to see another volunteer's work.
///
/// Expected: Err with AuthError::Forbidden
#[tokio::test]
async fn forbids_other_volunteers() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let center = test.relief().insert_center("North Hall", 10).await?;
    let (_, volunteer) = test
        .relief()
        .insert_user_volunteer(Some(center.id), VolunteerStatus::Active)
        .await?;
    let (other_user, _) = test
        .relief()
        .insert_user_volunteer(Some(center.id), VolunteerStatus::Active)
        .await?;
    let ctx = RequestContext::new(other_user.id, other_user.role);

    let result = VolunteerTaskService::new(&test.db)
        .preparation_tasks(&ctx, volunteer.id)
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::Forbidden { .. }))
    ));

    Ok(())
}

/// Tests reading tasks of a volunteer that does not exist.
///
/// Expected: Err with VolunteerNotFound
#[tokio::test]
async fn fails_for_unknown_volunteer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let ctx = RequestContext::new(admin.id, admin.role);

    let result = VolunteerTaskService::new(&test.db)
        .tracking_tasks(&ctx, 404)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::VolunteerNotFound(404)))
    ));

    Ok(())
}
