//! Tests for VolunteerService::register.

use entity::sea_orm_active_enums::{UserRole, VolunteerStatus};
use relief::server::{
    error::{domain::DomainError, Error},
    service::{
        relief_center::ReliefCenterService,
        volunteer::{VolunteerRegistration, VolunteerService},
    },
};
use relief_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

fn registration(email: &str, center_id: i32, skill_ids: Vec<i32>) -> VolunteerRegistration {
    VolunteerRegistration {
        email: email.to_string(),
        name: "Mara Quist".to_string(),
        phone_no: "555-0199".to_string(),
        center_id,
        skill_ids,
    }
}

/// Tests registering a volunteer at an empty center.
///
/// Verifies the user gets the Volunteer role and the center count goes from 0 to 1.
///
/// Expected: Ok with an Active volunteer linked to the center
#[tokio::test]
async fn registration_increments_center_count() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let center = test.relief().insert_center("Harbor Gym", 20).await?;
    let first_aid = test.relief().insert_skill("First Aid").await?;

    let result = VolunteerService::new(&test.db)
        .register(registration(
            "mara@relief.test",
            center.id,
            vec![first_aid.id],
        ))
        .await;

    assert!(result.is_ok());
    let (user, volunteer) = result.unwrap();
    assert_eq!(user.role, UserRole::Volunteer);
    assert_eq!(volunteer.user_id, user.id);
    assert_eq!(volunteer.assigned_center_id, Some(center.id));
    assert_eq!(volunteer.status, VolunteerStatus::Active);
    let center = ReliefCenterService::new(&test.db).get(center.id).await.unwrap();
    assert_eq!(center.volunteer_count, 1);

    Ok(())
}

/// Tests registering with a repeated skill ID.
///
/// Expected: Ok with each skill linked once
#[tokio::test]
async fn collapses_duplicate_skills() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let center = test.relief().insert_center("Harbor Gym", 20).await?;
    let first_aid = test.relief().insert_skill("First Aid").await?;
    let driving = test.relief().insert_skill("Driving").await?;
    let service = VolunteerService::new(&test.db);

    let (_, volunteer) = service
        .register(registration(
            "mara@relief.test",
            center.id,
            vec![driving.id, first_aid.id, driving.id],
        ))
        .await
        .unwrap();

    let mut skill_ids = service.get_skill_ids(volunteer.id).await.unwrap();
    skill_ids.sort_unstable();
    let mut expected = vec![first_aid.id, driving.id];
    expected.sort_unstable();
    assert_eq!(skill_ids, expected);

    Ok(())
}

/// Tests registering before any skill exists.
///
/// Expected: Err with NoSkillsAvailable
#[tokio::test]
async fn fails_without_skill_catalogue() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let center = test.relief().insert_center("Harbor Gym", 20).await?;

    let result = VolunteerService::new(&test.db)
        .register(registration("mara@relief.test", center.id, vec![]))
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::NoSkillsAvailable))
    ));

    Ok(())
}

/// Tests registering at a center that does not exist.
///
/// Expected: Err with CenterNotFound
#[tokio::test]
async fn fails_for_unknown_center() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let skill = test.relief().insert_skill("First Aid").await?;

    let result = VolunteerService::new(&test.db)
        .register(registration("mara@relief.test", 404, vec![skill.id]))
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::CenterNotFound(404)))
    ));

    Ok(())
}

/// Tests registering an email that is already in use, with different case.
///
/// Expected: Err with AlreadyExists
#[tokio::test]
async fn rejects_taken_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let center = test.relief().insert_center("Harbor Gym", 20).await?;
    let skill = test.relief().insert_skill("First Aid").await?;
    test.relief()
        .insert_user_with_email("mara@relief.test", UserRole::User)
        .await?;

    let result = VolunteerService::new(&test.db)
        .register(registration(" Mara@Relief.test ", center.id, vec![skill.id]))
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::AlreadyExists(_)))
    ));

    Ok(())
}

/// Tests registering with one unknown skill among valid ones.
///
/// Verifies that nothing of the registration is kept.
///
/// Expected: Err with SkillNotFound, no user created and the center count still 0
#[tokio::test]
async fn unknown_skill_leaves_no_trace() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let center = test.relief().insert_center("Harbor Gym", 20).await?;
    let skill = test.relief().insert_skill("First Aid").await?;

    let result = VolunteerService::new(&test.db)
        .register(registration(
            "mara@relief.test",
            center.id,
            vec![skill.id, 999],
        ))
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::SkillNotFound(999)))
    ));
    assert_eq!(entity::prelude::AppUser::find().count(&test.db).await?, 0);
    assert_eq!(entity::prelude::Volunteer::find().count(&test.db).await?, 0);
    let center = ReliefCenterService::new(&test.db).get(center.id).await.unwrap();
    assert_eq!(center.volunteer_count, 0);

    Ok(())
}
