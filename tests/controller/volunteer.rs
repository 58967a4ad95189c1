//! Tests for the volunteer endpoints.

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::{AidRequestStatus, PreparationStatus, VolunteerStatus};
use relief::{
    model::{aid::PreparationTaskDto, volunteer::RegisterVolunteerDto},
    server::{
        controller::volunteer::{
            delete_volunteer, list_preparation_tasks, list_tracking_tasks, register_volunteer,
        },
        service::aid::preparation::AidPreparationService,
    },
};

use super::*;

/// Tests registering a volunteer.
///
/// Expected: Ok with 201 Created response
#[tokio::test]
async fn registration_is_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let center = test.relief().insert_center("Harbor Gym", 20).await?;
    let skill = test.relief().insert_skill("First Aid").await?;

    let result = register_volunteer(
        State(test.to_app_state()),
        Json(RegisterVolunteerDto {
            email: "mara@relief.test".to_string(),
            name: "Mara Quist".to_string(),
            phone_no: "555-0199".to_string(),
            center_id: center.id,
            skill_ids: vec![skill.id],
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests registering before the skill catalogue has any entries.
///
/// Expected: Err with 400 Bad Request response
#[tokio::test]
async fn registration_without_skills_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let center = test.relief().insert_center("Harbor Gym", 20).await?;

    let result = register_volunteer(
        State(test.to_app_state()),
        Json(RegisterVolunteerDto {
            email: "mara@relief.test".to_string(),
            name: "Mara Quist".to_string(),
            phone_no: "555-0199".to_string(),
            center_id: center.id,
            skill_ids: vec![],
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests deleting a volunteer.
///
/// Expected: Ok with 204 No Content response
#[tokio::test]
async fn delete_is_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ctx = ctx_for(&test, UserRole::Admin).await?;
    let (_, volunteer) = test
        .relief()
        .insert_user_volunteer(None, VolunteerStatus::Active)
        .await?;

    let result = delete_volunteer(State(test.to_app_state()), ctx, Path(volunteer.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Tests a volunteer reading their own preparation tasks.
///
/// Expected: Ok with 200 OK and the assigned preparation with its request in the body
#[tokio::test]
async fn own_preparation_tasks_are_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let admin = ctx_for(&test, UserRole::Admin).await?;
    let (user, volunteer) = test
        .relief()
        .insert_user_volunteer(None, VolunteerStatus::Active)
        .await?;
    let request = test
        .relief()
        .insert_aid_request(admin.user_id(), AidRequestStatus::Approved)
        .await?;
    let preparation = test
        .relief()
        .insert_preparation(request.id, PreparationStatus::Preparing)
        .await?;
    AidPreparationService::new(&test.db)
        .add_volunteer(&admin, preparation.id, volunteer.id)
        .await
        .unwrap();
    let ctx = RequestContext::new(user.id, user.role);

    let result =
        list_preparation_tasks(State(test.to_app_state()), ctx, Path(volunteer.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let tasks: Vec<PreparationTaskDto> = serde_json::from_slice(&body).unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].task.id, preparation.id);
    assert_eq!(tasks[0].request.id, request.id);

    Ok(())
}

/// Tests a plain user reading a volunteer's rescue tasks.
///
/// Expected: Err with 403 Forbidden response
#[tokio::test]
async fn tracking_tasks_of_other_volunteer_are_forbidden() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ctx = ctx_for(&test, UserRole::User).await?;
    let (_, volunteer) = test
        .relief()
        .insert_user_volunteer(None, VolunteerStatus::Active)
        .await?;

    let result = list_tracking_tasks(State(test.to_app_state()), ctx, Path(volunteer.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Tests reading the tasks of an unknown volunteer.
///
/// Expected: Err with 404 Not Found response
#[tokio::test]
async fn tasks_of_unknown_volunteer_are_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ctx = ctx_for(&test, UserRole::Admin).await?;

    let result = list_preparation_tasks(State(test.to_app_state()), ctx, Path(31)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
