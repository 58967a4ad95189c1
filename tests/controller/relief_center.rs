//! Tests for the relief center endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use relief::{
    model::center::CreateReliefCenterDto,
    server::controller::relief_center::{create_center, delete_center, get_center, list_centers},
};

use super::*;

fn body(name: &str) -> Json<CreateReliefCenterDto> {
    Json(CreateReliefCenterDto {
        name: name.to_string(),
        location: "12 Dock Road".to_string(),
        max_capacity: 40,
        manager_id: None,
    })
}

/// Tests creating a center and then one with the same name.
///
/// Expected: 201 Created, then Err with 409 Conflict response
#[tokio::test]
async fn create_then_duplicate() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ctx = ctx_for(&test, UserRole::Admin).await?;

    let created = create_center(State(test.to_app_state()), ctx, body("Harbor Gym")).await;
    let duplicate = create_center(State(test.to_app_state()), ctx, body("harbor gym")).await;

    assert_eq!(created.unwrap().into_response().status(), StatusCode::CREATED);
    assert_eq!(
        duplicate.err().unwrap().into_response().status(),
        StatusCode::CONFLICT
    );

    Ok(())
}

/// Tests creating a center without a name.
///
/// Expected: Err with 400 Bad Request response
#[tokio::test]
async fn create_with_blank_name_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ctx = ctx_for(&test, UserRole::Admin).await?;

    let result = create_center(State(test.to_app_state()), ctx, body("  ")).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests deleting a center, then fetching it.
///
/// Expected: 204 No Content, then Err with 404 Not Found response
#[tokio::test]
async fn delete_then_get() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ctx = ctx_for(&test, UserRole::Admin).await?;
    let center = test.relief().insert_center("Harbor Gym", 20).await?;

    let deleted = delete_center(State(test.to_app_state()), ctx, Path(center.id)).await;
    let fetched = get_center(State(test.to_app_state()), ctx, Path(center.id)).await;

    assert_eq!(
        deleted.unwrap().into_response().status(),
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        fetched.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Tests deleting a center as a volunteer.
///
/// Expected: Err with 403 Forbidden response
#[tokio::test]
async fn delete_forbidden_for_volunteer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ctx = ctx_for(&test, UserRole::Volunteer).await?;
    let center = test.relief().insert_center("Harbor Gym", 20).await?;

    let result = delete_center(State(test.to_app_state()), ctx, Path(center.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Tests listing centers as a plain user.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn list_is_ok_for_any_caller() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ctx = ctx_for(&test, UserRole::User).await?;
    test.relief().insert_center("Harbor Gym", 20).await?;

    let result = list_centers(State(test.to_app_state()), ctx).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
