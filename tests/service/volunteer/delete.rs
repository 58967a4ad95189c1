//! Tests for VolunteerService::delete.

use entity::sea_orm_active_enums::{UserRole, VolunteerStatus};
use relief::server::{
    error::{domain::DomainError, Error},
    model::context::RequestContext,
    service::{
        relief_center::ReliefCenterService, user::UserService,
        volunteer::{VolunteerRegistration, VolunteerService},
    },
};
use relief_test_utils::prelude::*;

/// Tests deleting a freshly registered volunteer.
///
/// Expected: Ok with the center count back to 0 and the user demoted to User
#[tokio::test]
async fn delete_restores_count_and_role() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let center = test.relief().insert_center("Harbor Gym", 20).await?;
    let skill = test.relief().insert_skill("First Aid").await?;
    let ctx = RequestContext::new(admin.id, admin.role);
    let service = VolunteerService::new(&test.db);
    let (user, volunteer) = service
        .register(VolunteerRegistration {
            email: "mara@relief.test".to_string(),
            name: "Mara Quist".to_string(),
            phone_no: "555-0199".to_string(),
            center_id: center.id,
            skill_ids: vec![skill.id],
        })
        .await
        .unwrap();

    let result = service.delete(&ctx, volunteer.id).await;

    assert!(result.is_ok());
    let center = ReliefCenterService::new(&test.db).get(center.id).await.unwrap();
    assert_eq!(center.volunteer_count, 0);
    let user = UserService::new(&test.db).get(user.id).await.unwrap();
    assert_eq!(user.role, UserRole::User);
    assert!(matches!(
        service.get(volunteer.id).await,
        Err(Error::DomainError(DomainError::VolunteerNotFound(_)))
    ));

    Ok(())
}

/// Tests deleting a volunteer from a center whose cached count already reads 0.
///
/// Expected: Ok with the count still 0, never negative
#[tokio::test]
async fn count_never_goes_negative() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = test.relief().insert_user(UserRole::Admin).await?;
    let center = test.relief().insert_center("Harbor Gym", 20).await?;
    let (_, volunteer) = test
        .relief()
        .insert_user_volunteer(Some(center.id), VolunteerStatus::Active)
        .await?;
    let ctx = RequestContext::new(admin.id, admin.role);

    VolunteerService::new(&test.db)
        .delete(&ctx, volunteer.id)
        .await
        .unwrap();

    let center = ReliefCenterService::new(&test.db).get(center.id).await.unwrap();
    assert_eq!(center.volunteer_count, 0);

    Ok(())
}

/// Tests deleting a volunteer as a volunteer.
///
/// Expected: Err with AuthError and the volunteer kept
#[tokio::test]
async fn forbids_non_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let (user, volunteer) = test
        .relief()
        .insert_user_volunteer(None, VolunteerStatus::Active)
        .await?;
    let ctx = RequestContext::new(user.id, user.role);
    let service = VolunteerService::new(&test.db);

    let result = service.delete(&ctx, volunteer.id).await;

    assert!(matches!(result, Err(Error::AuthError(_))));
    assert!(service.get(volunteer.id).await.is_ok());

    Ok(())
}
