use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        resource::{
            CreateDonationDto, CreditStockDto, DonationDto, DonationReceiptDto, ResourceDto,
        },
    },
    server::{
        error::Error,
        model::{app::AppState, context::RequestContext},
        service::resource::ResourceService,
    },
};

/// OpenAPI tag of the donation and stock endpoints
pub static RESOURCE_TAG: &str = "resource";

/// Donate stock to a relief center
///
/// The donation is credited to the center's stock of the same type, matched ignoring
/// case and surrounding whitespace.
#[utoipa::path(
    post,
    path = "/api/donations",
    tag = RESOURCE_TAG,
    request_body = CreateDonationDto,
    responses(
        (status = 201, description = "Donation recorded and credited", body = DonationReceiptDto),
        (status = 400, description = "Invalid quantity or donation type", body = ErrorDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 404, description = "Relief center not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_donation(
    State(state): State<AppState>,
    ctx: RequestContext,
    Json(payload): Json<CreateDonationDto>,
) -> Result<impl IntoResponse, Error> {
    let (donation, resource) = ResourceService::new(&state.db)
        .create_donation(&ctx, payload.center_id, &payload.donation_type, payload.quantity)
        .await?;

    let receipt = DonationReceiptDto {
        donation: donation.into(),
        resource: resource.into(),
    };

    Ok((StatusCode::CREATED, Json(receipt)))
}

/// List the caller's donations, newest first
#[utoipa::path(
    get,
    path = "/api/donations",
    tag = RESOURCE_TAG,
    responses(
        (status = 200, description = "Donations of the caller", body = Vec<DonationDto>),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_donations(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, Error> {
    let donations: Vec<DonationDto> = ResourceService::new(&state.db)
        .list_donations(&ctx)
        .await?
        .into_iter()
        .map(DonationDto::from)
        .collect();

    Ok((StatusCode::OK, Json(donations)))
}

/// List donations to every relief center, newest first
#[utoipa::path(
    get,
    path = "/api/donations/all",
    tag = RESOURCE_TAG,
    responses(
        (status = 200, description = "All donations", body = Vec<DonationDto>),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_all_donations(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, Error> {
    let donations: Vec<DonationDto> = ResourceService::new(&state.db)
        .list_all_donations(&ctx)
        .await?
        .into_iter()
        .map(DonationDto::from)
        .collect();

    Ok((StatusCode::OK, Json(donations)))
}

/// Credit stock to a relief center manually
#[utoipa::path(
    post,
    path = "/api/resources",
    tag = RESOURCE_TAG,
    request_body = CreditStockDto,
    responses(
        (status = 200, description = "Stock credited", body = ResourceDto),
        (status = 400, description = "Invalid quantity or resource type", body = ErrorDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Relief center not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn credit_stock(
    State(state): State<AppState>,
    ctx: RequestContext,
    Json(payload): Json<CreditStockDto>,
) -> Result<impl IntoResponse, Error> {
    let resource = ResourceService::new(&state.db)
        .credit_stock(
            &ctx,
            payload.center_id,
            &payload.resource_type,
            payload.quantity,
            payload.expires_at,
        )
        .await?;

    Ok((StatusCode::OK, Json(ResourceDto::from(resource))))
}

/// Look up a resource row
#[utoipa::path(
    get,
    path = "/api/resources/{resource_id}",
    tag = RESOURCE_TAG,
    params(("resource_id" = i32, Path, description = "Resource ID")),
    responses(
        (status = 200, description = "Resource found", body = ResourceDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 404, description = "Resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_resource(
    State(state): State<AppState>,
    _ctx: RequestContext,
    Path(resource_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let resource = ResourceService::new(&state.db)
        .get_resource(resource_id)
        .await?;

    Ok((StatusCode::OK, Json(ResourceDto::from(resource))))
}

/// List the stock held by a relief center
#[utoipa::path(
    get,
    path = "/api/centers/{center_id}/resources",
    tag = RESOURCE_TAG,
    params(("center_id" = i32, Path, description = "Relief center ID")),
    responses(
        (status = 200, description = "Resources of the center", body = Vec<ResourceDto>),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 404, description = "Relief center not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_center_resources(
    State(state): State<AppState>,
    _ctx: RequestContext,
    Path(center_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let resources: Vec<ResourceDto> = ResourceService::new(&state.db)
        .list_resources(center_id)
        .await?
        .into_iter()
        .map(ResourceDto::from)
        .collect();

    Ok((StatusCode::OK, Json(resources)))
}
