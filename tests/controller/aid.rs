//! Tests for the aid lifecycle endpoints.

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::{AidRequestStatus, PreparationStatus, VolunteerStatus};
use relief::{
    model::aid::{
        AidPreparationDto, AidRequestDto, AssignVolunteerDto, CreateRescueTrackingDto,
        ResourceUsageRequestDto,
    },
    server::controller::aid::{
        preparation::{add_preparation_volunteer, add_resource_usage, create_preparation},
        request::{list_aid_requests, list_user_aid_requests},
        tracking::create_tracking,
    },
};

use super::*;

/// Tests the status of a first and a repeated preparation create.
///
/// Expected: 201 Created the first time, 200 OK the second
#[tokio::test]
async fn preparation_create_is_created_then_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ctx = ctx_for(&test, UserRole::Volunteer).await?;
    let request = test
        .relief()
        .insert_aid_request(ctx.user_id(), AidRequestStatus::Approved)
        .await?;

    let first = create_preparation(State(test.to_app_state()), ctx, Path(request.id)).await;
    let second = create_preparation(State(test.to_app_state()), ctx, Path(request.id)).await;

    assert_eq!(first.unwrap().into_response().status(), StatusCode::CREATED);
    assert_eq!(second.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

/// Tests the body of a repeated preparation create.
///
/// Expected: Both responses carry the same preparation ID
#[tokio::test]
async fn preparation_create_repeat_returns_same_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ctx = ctx_for(&test, UserRole::Admin).await?;
    let request = test
        .relief()
        .insert_aid_request(ctx.user_id(), AidRequestStatus::Approved)
        .await?;

    let mut ids = Vec::new();
    for _ in 0..2 {
        let resp = create_preparation(State(test.to_app_state()), ctx, Path(request.id))
            .await
            .unwrap()
            .into_response();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let preparation: AidPreparationDto = serde_json::from_slice(&body).unwrap();
        assert_eq!(preparation.request_id, request.id);
        ids.push(preparation.id);
    }

    assert_eq!(ids[0], ids[1]);

    Ok(())
}

/// Tests a preparation create by a citizen.
///
/// Expected: Err with 403 Forbidden response
#[tokio::test]
async fn preparation_create_forbidden_for_citizen() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ctx = ctx_for(&test, UserRole::User).await?;
    let request = test
        .relief()
        .insert_aid_request(ctx.user_id(), AidRequestStatus::Approved)
        .await?;

    let result = create_preparation(State(test.to_app_state()), ctx, Path(request.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Tests a preparation create for a missing aid request.
///
/// Expected: Err with 404 Not Found response
#[tokio::test]
async fn preparation_create_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ctx = ctx_for(&test, UserRole::Admin).await?;

    let result = create_preparation(State(test.to_app_state()), ctx, Path(404)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests a resource usage larger than the stock.
///
/// Expected: 201 Created for the covered usage, 409 Conflict for the overdraw
#[tokio::test]
async fn resource_usage_overdraw_is_conflict() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ctx = ctx_for(&test, UserRole::Admin).await?;
    let center = test.relief().insert_center("Harbor Gym", 20).await?;
    let resource = test.relief().insert_resource(center.id, "Water", 10).await?;
    let request = test
        .relief()
        .insert_aid_request(ctx.user_id(), AidRequestStatus::Approved)
        .await?;
    let preparation = test
        .relief()
        .insert_preparation(request.id, PreparationStatus::Preparing)
        .await?;
    let usage = |quantity| {
        Json(ResourceUsageRequestDto {
            resource_id: resource.id,
            quantity,
        })
    };

    let covered = add_resource_usage(
        State(test.to_app_state()),
        ctx,
        Path(preparation.id),
        usage(10),
    )
    .await;
    let overdraw = add_resource_usage(
        State(test.to_app_state()),
        ctx,
        Path(preparation.id),
        usage(1),
    )
    .await;

    assert_eq!(covered.unwrap().into_response().status(), StatusCode::CREATED);
    assert_eq!(
        overdraw.err().unwrap().into_response().status(),
        StatusCode::CONFLICT
    );

    Ok(())
}

/// Tests attaching the same volunteer to a preparation twice.
///
/// Expected: Err with 409 Conflict response on the second call
#[tokio::test]
async fn duplicate_preparation_volunteer_is_conflict() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ctx = ctx_for(&test, UserRole::Admin).await?;
    let (_, volunteer) = test
        .relief()
        .insert_user_volunteer(None, VolunteerStatus::Active)
        .await?;
    let request = test
        .relief()
        .insert_aid_request(ctx.user_id(), AidRequestStatus::Approved)
        .await?;
    let preparation = test
        .relief()
        .insert_preparation(request.id, PreparationStatus::Preparing)
        .await?;
    let body = || {
        Json(AssignVolunteerDto {
            volunteer_id: volunteer.id,
        })
    };

    add_preparation_volunteer(State(test.to_app_state()), ctx, Path(preparation.id), body())
        .await
        .unwrap();
    let result =
        add_preparation_volunteer(State(test.to_app_state()), ctx, Path(preparation.id), body())
            .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests opening tracking for a completed aid request.
///
/// Expected: Err with 409 Conflict response
#[tokio::test]
async fn tracking_for_completed_request_is_conflict() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ctx = ctx_for(&test, UserRole::Admin).await?;
    let request = test
        .relief()
        .insert_aid_request(ctx.user_id(), AidRequestStatus::Completed)
        .await?;

    let result = create_tracking(
        State(test.to_app_state()),
        ctx,
        Json(CreateRescueTrackingDto {
            request_id: request.id,
            status: "In Progress".to_string(),
            start_time: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests listing every aid request as a citizen.
///
/// Expected: Err with 403 Forbidden response
#[tokio::test]
async fn request_list_forbidden_for_citizen() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ctx = ctx_for(&test, UserRole::User).await?;

    let result = list_aid_requests(State(test.to_app_state()), ctx).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Tests a citizen listing their own aid requests.
///
/// Expected: Ok with 200 OK and the caller's request in the body
#[tokio::test]
async fn own_request_list_is_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ctx = ctx_for(&test, UserRole::User).await?;
    let request = test
        .relief()
        .insert_aid_request(ctx.user_id(), AidRequestStatus::Pending)
        .await?;

    let result =
        list_user_aid_requests(State(test.to_app_state()), ctx, Path(ctx.user_id())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let requests: Vec<AidRequestDto> = serde_json::from_slice(&body).unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].id, request.id);

    Ok(())
}
