//! Tests for the donation and stock endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use relief::{
    model::resource::CreateDonationDto,
    server::controller::resource::{create_donation, list_all_donations, list_center_resources},
};

use super::*;

/// Tests recording a donation.
///
/// Expected: Ok with 201 Created response
#[tokio::test]
async fn donation_is_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ctx = ctx_for(&test, UserRole::User).await?;
    let center = test.relief().insert_center("Harbor Gym", 20).await?;

    let result = create_donation(
        State(test.to_app_state()),
        ctx,
        Json(CreateDonationDto {
            center_id: center.id,
            donation_type: "Blankets".to_string(),
            quantity: 12,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests a donation with a negative quantity.
///
/// Expected: Err with 400 Bad Request response
#[tokio::test]
async fn negative_donation_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ctx = ctx_for(&test, UserRole::User).await?;
    let center = test.relief().insert_center("Harbor Gym", 20).await?;

    let result = create_donation(
        State(test.to_app_state()),
        ctx,
        Json(CreateDonationDto {
            center_id: center.id,
            donation_type: "Blankets".to_string(),
            quantity: -3,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests listing the stock of a missing center.
///
/// Expected: Err with 404 Not Found response
#[tokio::test]
async fn stock_of_unknown_center_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ctx = ctx_for(&test, UserRole::Volunteer).await?;

    let result = list_center_resources(State(test.to_app_state()), ctx, Path(99)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests listing every donation as a volunteer.
///
/// Expected: Err with 403 Forbidden response
#[tokio::test]
async fn all_donations_forbidden_for_volunteer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_relief_tables().build().await?;
    let ctx = ctx_for(&test, UserRole::Volunteer).await?;

    let result = list_all_donations(State(test.to_app_state()), ctx).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
