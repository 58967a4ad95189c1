//! Tests for VolunteerService::reassign.

use entity::sea_orm_active_enums::{UserRole, VolunteerStatus};
use relief::server::{
    error::{domain::DomainError, Error},
    model::context::RequestContext,
    service::{relief_center::ReliefCenterService, volunteer::VolunteerService},
};
use relief_test_utils::prelude::*;

/// Tests moving an Active volunteer between centers.
///
/// Expected: Ok with the source count 0 and the target count 1
#[tokio::test]
async fn moves_count_between_centers() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let north = test.relief().insert_center("North Hall", 10).await?;
    let south = test.relief().insert_center("South Hall", 10).await?;
    let (_, volunteer) = test
        .relief()
        .insert_user_volunteer(Some(north.id), VolunteerStatus::Active)
        .await?;
    let ctx = RequestContext::new(admin.id, admin.role);
    let centers = ReliefCenterService::new(&test.db);
    centers.recount(&ctx, north.id).await.unwrap();

    let result = VolunteerService::new(&test.db)
        .reassign(&ctx, volunteer.id, south.id)
        .await;

    assert_eq!(result.unwrap().assigned_center_id, Some(south.id));
    assert_eq!(centers.get(north.id).await.unwrap().volunteer_count, 0);
    assert_eq!(centers.get(south.id).await.unwrap().volunteer_count, 1);

    Ok(())
}

/// Tests moving an Inactive volunteer.
///
/// Expected: Ok with neither count changed
#[tokio::test]
async fn inactive_volunteer_does_not_count() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let north = test.relief().insert_center("North Hall", 10).await?;
    let south = test.relief().insert_center("South Hall", 10).await?;
    let (_, volunteer) = test
        .relief()
        .insert_user_volunteer(Some(north.id), VolunteerStatus::Inactive)
        .await?;
    let ctx = RequestContext::new(admin.id, admin.role);
    let centers = ReliefCenterService::new(&test.db);

    VolunteerService::new(&test.db)
        .reassign(&ctx, volunteer.id, south.id)
        .await
        .unwrap();

    assert_eq!(centers.get(north.id).await.unwrap().volunteer_count, 0);
    assert_eq!(centers.get(south.id).await.unwrap().volunteer_count, 0);

    Ok(())
}

/// Tests moving a volunteer to a center that does not exist.
///
/// Expected: Err with CenterNotFound and the assignment unchanged
#[tokio::test]
async fn fails_for_unknown_center() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let north = test.relief().insert_center("North Hall", 10).await?;
    let (_, volunteer) = test
        .relief()
        .insert_user_volunteer(Some(north.id), VolunteerStatus::Active)
        .await?;
    let ctx = RequestContext::new(admin.id, admin.role);
    let service = VolunteerService::new(&test.db);

    let result = service.reassign(&ctx, volunteer.id, 404).await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::CenterNotFound(404)))
    ));
    assert_eq!(
        service.get(volunteer.id).await.unwrap().assigned_center_id,
        Some(north.id)
    );

    Ok(())
}
