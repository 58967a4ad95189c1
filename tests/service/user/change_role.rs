//! Tests for UserService::change_role.
//!
//! Role changes keep the volunteer row and center counts in step with the role.

use entity::sea_orm_active_enums::{UserRole, VolunteerStatus};
use relief::server::{
    error::{domain::DomainError, Error},
    model::context::RequestContext,
    service::{relief_center::ReliefCenterService, user::UserService, volunteer::VolunteerService},
};
use relief_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests promoting a citizen to volunteer at a center.
///
/// Expected: Ok with a volunteer row created and the center count 1
#[tokio::test]
async fn promotion_creates_volunteer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let citizen = test.relief().insert_user(UserRole::User).await?;
    let center = test.relief().insert_center("Harbor Gym", 20).await?;
    let ctx = RequestContext::new(admin.id, admin.role);

    let result = UserService::new(&test.db)
        .change_role(&ctx, citizen.id, "Volunteer", Some(center.id))
        .await;

    assert_eq!(result.unwrap().role, UserRole::Volunteer);
    assert_eq!(entity::prelude::Volunteer::find().count(&test.db).await?, 1);
    let center = ReliefCenterService::new(&test.db).get(center.id).await.unwrap();
    assert_eq!(center.volunteer_count, 1);

    Ok(())
}

/// Tests promoting a citizen to volunteer without a center.
///
/// Expected: Err with ValidationError and the role unchanged
#[tokio::test]
async fn promotion_requires_center() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let citizen = test.relief().insert_user(UserRole::User).await?;
    let ctx = RequestContext::new(admin.id, admin.role);
    let service = UserService::new(&test.db);

    let result = service
        .change_role(&ctx, citizen.id, "Volunteer", None)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::ValidationError { .. }))
    ));
    assert_eq!(service.get(citizen.id).await.unwrap().role, UserRole::User);

    Ok(())
}

/// Tests demoting a volunteer to a plain user.
///
/// Expected: Ok with the volunteer row removed and the center count back to 0
#[tokio::test]
async fn demotion_removes_volunteer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let center = test.relief().insert_center("Harbor Gym", 20).await?;
    let (user, volunteer) = test
        .relief()
        .insert_user_volunteer(Some(center.id), VolunteerStatus::Active)
        .await?;
    let ctx = RequestContext::new(admin.id, admin.role);
    let centers = ReliefCenterService::new(&test.db);
    centers.recount(&ctx, center.id).await.unwrap();

    let result = UserService::new(&test.db)
        .change_role(&ctx, user.id, "User", None)
        .await;

    assert_eq!(result.unwrap().role, UserRole::User);
    assert!(matches!(
        VolunteerService::new(&test.db).get(volunteer.id).await,
        Err(Error::DomainError(DomainError::VolunteerNotFound(_)))
    ));
    assert_eq!(centers.get(center.id).await.unwrap().volunteer_count, 0);

    Ok(())
}

/// Tests keeping the volunteer role with a different center.
///
/// Expected: Ok with the volunteer moved and both counts updated
#[tokio::test]
async fn volunteer_with_new_center_is_reassigned() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let north = test.relief().insert_center("North Hall", 10).await?;
    let south = test.relief().insert_center("South Hall", 10).await?;
    let (user, volunteer) = test
        .relief()
        .insert_user_volunteer(Some(north.id), VolunteerStatus::Active)
        .await?;
    let ctx = RequestContext::new(admin.id, admin.role);
    let centers = ReliefCenterService::new(&test.db);
    centers.recount(&ctx, north.id).await.unwrap();

    UserService::new(&test.db)
        .change_role(&ctx, user.id, "volunteer", Some(south.id))
        .await
        .unwrap();

    let volunteer = VolunteerService::new(&test.db).get(volunteer.id).await.unwrap();
    assert_eq!(volunteer.assigned_center_id, Some(south.id));
    assert_eq!(centers.get(north.id).await.unwrap().volunteer_count, 0);
    assert_eq!(centers.get(south.id).await.unwrap().volunteer_count, 1);

    Ok(())
}

/// Tests changing the role of a user that does not exist.
///
/// Expected: Err with UserNotFound
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let ctx = RequestContext::new(admin.id, admin.role);

    let result = UserService::new(&test.db)
        .change_role(&ctx, 9001, "Admin", None)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::UserNotFound(9001)))
    ));

    Ok(())
}

/// Tests a role change requested by a non-admin.
///
/// Expected: Err with AuthError
#[tokio::test]
async fn forbids_non_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let citizen = test.relief().insert_user(UserRole::User).await?;
    let ctx = RequestContext::new(citizen.id, citizen.role);

    let result = UserService::new(&test.db)
        .change_role(&ctx, citizen.id, "Admin", None)
        .await;

    assert!(matches!(result, Err(Error::AuthError(_))));

    Ok(())
}
