//! Tests for ReliefCenterService::delete.

use entity::sea_orm_active_enums::{UserRole, VolunteerStatus};
use relief::server::{
    error::{domain::DomainError, Error},
    model::context::RequestContext,
    service::{relief_center::ReliefCenterService, user::UserService},
};
use relief_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests deleting a center staffed by two volunteers.
///
/// Verifies that volunteers of other centers are untouched.
///
/// Expected: Ok with the center and its volunteers gone and their users demoted to User
#[tokio::test]
async fn removes_volunteers_and_demotes_users() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let north = test.relief().insert_center("North Hall", 10).await?;
    let south = test.relief().insert_center("South Hall", 10).await?;
    let (first, _) = test
        .relief()
        .insert_user_volunteer(Some(north.id), VolunteerStatus::Active)
        .await?;
    let (second, _) = test
        .relief()
        .insert_user_volunteer(Some(north.id), VolunteerStatus::Inactive)
        .await?;
    let (other, _) = test
        .relief()
        .insert_user_volunteer(Some(south.id), VolunteerStatus::Active)
        .await?;
    test.relief().insert_resource(north.id, "Water", 40).await?;
    let ctx = RequestContext::new(admin.id, admin.role);
    let centers = ReliefCenterService::new(&test.db);
    let users = UserService::new(&test.db);

    let result = centers.delete(&ctx, north.id).await;

    assert!(result.is_ok());
    assert!(matches!(
        centers.get(north.id).await,
        Err(Error::DomainError(DomainError::CenterNotFound(_)))
    ));
    assert_eq!(users.get(first.id).await.unwrap().role, UserRole::User);
    assert_eq!(users.get(second.id).await.unwrap().role, UserRole::User);
    assert_eq!(users.get(other.id).await.unwrap().role, UserRole::Volunteer);
    assert_eq!(entity::prelude::Volunteer::find().count(&test.db).await?, 1);
    assert_eq!(entity::prelude::Resource::find().count(&test.db).await?, 0);

    Ok(())
}

/// Tests deleting a center that does not exist.
///
/// Expected: Err with CenterNotFound
#[tokio::test]
async fn fails_for_unknown_center() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let ctx = RequestContext::new(admin.id, admin.role);

    let result = ReliefCenterService::new(&test.db).delete(&ctx, 8).await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::CenterNotFound(8)))
    ));

    Ok(())
}
