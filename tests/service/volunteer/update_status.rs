//! Tests for VolunteerService::update_status.

use entity::sea_orm_active_enums::{UserRole, VolunteerStatus};
use relief::server::{
    error::{domain::DomainError, Error},
    model::context::RequestContext,
    service::{relief_center::ReliefCenterService, volunteer::VolunteerService},
};
use relief_test_utils::prelude::*;

/// Tests deactivating and reactivating a volunteer.
///
/// Expected: Ok with the center count following the status, 1 -> 0 -> 1
#[tokio::test]
async fn count_follows_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let center = test.relief().insert_center("Harbor Gym", 20).await?;
    let (_, volunteer) = test
        .relief()
        .insert_user_volunteer(Some(center.id), VolunteerStatus::Active)
        .await?;
    let ctx = RequestContext::new(admin.id, admin.role);
    let centers = ReliefCenterService::new(&test.db);
    let service = VolunteerService::new(&test.db);
    centers.recount(&ctx, center.id).await.unwrap();

    let inactive = service
        .update_status(&ctx, volunteer.id, "inactive")
        .await
        .unwrap();
    let after_deactivate = centers.get(center.id).await.unwrap().volunteer_count;
    service
        .update_status(&ctx, volunteer.id, "Active")
        .await
        .unwrap();
    let after_reactivate = centers.get(center.id).await.unwrap().volunteer_count;

    assert_eq!(inactive.status, VolunteerStatus::Inactive);
    assert_eq!(after_deactivate, 0);
    assert_eq!(after_reactivate, 1);

    Ok(())
}

/// Tests an unknown volunteer status.
///
/// Expected: Err with ValidationError
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let (_, volunteer) = test
        .relief()
        .insert_user_volunteer(None, VolunteerStatus::Active)
        .await?;
    let ctx = RequestContext::new(admin.id, admin.role);

    let result = VolunteerService::new(&test.db)
        .update_status(&ctx, volunteer.id, "Retired")
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::ValidationError { .. }))
    ));

    Ok(())
}

/// Tests updating a volunteer that does not exist.
///
/// Expected: Err with VolunteerNotFound
#[tokio::test]
async fn fails_for_unknown_volunteer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let ctx = RequestContext::new(admin.id, admin.role);

    let result = VolunteerService::new(&test.db)
        .update_status(&ctx, 31, "Inactive")
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::VolunteerNotFound(31)))
    ));

    Ok(())
}
