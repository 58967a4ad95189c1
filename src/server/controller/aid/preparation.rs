use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        aid::{
            AidPreparationDto, AssignVolunteerDto, AssignmentDto, ResourceUsageDto,
            ResourceUsageRequestDto, UpdatePreparationTimesDto,
        },
        api::{ErrorDto, UpdateStatusDto},
    },
    server::{
        controller::aid::AID_TAG,
        error::Error,
        model::{app::AppState, context::RequestContext},
        service::aid::preparation::AidPreparationService,
    },
};

/// Create the preparation of an aid request, or return the existing one
#[utoipa::path(
    post,
    path = "/api/aid-requests/{request_id}/preparation",
    tag = AID_TAG,
    params(("request_id" = i32, Path, description = "Aid request ID")),
    responses(
        (status = 201, description = "Preparation created", body = AidPreparationDto),
        (status = 200, description = "Preparation already existed", body = AidPreparationDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Aid request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_preparation(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let (preparation, created) = AidPreparationService::new(&state.db)
        .create_or_get(&ctx, request_id)
        .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(AidPreparationDto::from(preparation))))
}

/// Look up an aid preparation
#[utoipa::path(
    get,
    path = "/api/preparations/{preparation_id}",
    tag = AID_TAG,
    params(("preparation_id" = i32, Path, description = "Aid preparation ID")),
    responses(
        (status = 200, description = "Preparation found", body = AidPreparationDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 404, description = "Preparation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_preparation(
    State(state): State<AppState>,
    _ctx: RequestContext,
    Path(preparation_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let preparation = AidPreparationService::new(&state.db)
        .get(preparation_id)
        .await?;

    Ok((StatusCode::OK, Json(AidPreparationDto::from(preparation))))
}

/// Set the departure and estimated arrival times of a preparation
#[utoipa::path(
    put,
    path = "/api/preparations/{preparation_id}/times",
    tag = AID_TAG,
    params(("preparation_id" = i32, Path, description = "Aid preparation ID")),
    request_body = UpdatePreparationTimesDto,
    responses(
        (status = 200, description = "Times updated", body = AidPreparationDto),
        (status = 400, description = "Arrival before departure", body = ErrorDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Preparation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_preparation_times(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(preparation_id): Path<i32>,
    Json(payload): Json<UpdatePreparationTimesDto>,
) -> Result<impl IntoResponse, Error> {
    let preparation = AidPreparationService::new(&state.db)
        .update_times(
            &ctx,
            preparation_id,
            payload.departure_time,
            payload.estimated_arrival,
        )
        .await?;

    Ok((StatusCode::OK, Json(AidPreparationDto::from(preparation))))
}

/// Move an aid preparation to its next status
#[utoipa::path(
    put,
    path = "/api/preparations/{preparation_id}/status",
    tag = AID_TAG,
    params(("preparation_id" = i32, Path, description = "Aid preparation ID")),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated", body = AidPreparationDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Preparation not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_preparation_status(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(preparation_id): Path<i32>,
    Json(payload): Json<UpdateStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let preparation = AidPreparationService::new(&state.db)
        .update_status(&ctx, preparation_id, &payload.status)
        .await?;

    Ok((StatusCode::OK, Json(AidPreparationDto::from(preparation))))
}

/// Consume stock for a preparation
#[utoipa::path(
    post,
    path = "/api/preparations/{preparation_id}/resources",
    tag = AID_TAG,
    params(("preparation_id" = i32, Path, description = "Aid preparation ID")),
    request_body = ResourceUsageRequestDto,
    responses(
        (status = 201, description = "Stock debited and usage recorded", body = ResourceUsageDto),
        (status = 400, description = "Invalid quantity", body = ErrorDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Preparation or resource not found", body = ErrorDto),
        (status = 409, description = "Insufficient stock", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_resource_usage(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(preparation_id): Path<i32>,
    Json(payload): Json<ResourceUsageRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let usage = AidPreparationService::new(&state.db)
        .add_resource_usage(&ctx, preparation_id, payload.resource_id, payload.quantity)
        .await?;

    Ok((StatusCode::CREATED, Json(ResourceUsageDto::from(usage))))
}

/// List the stock a preparation has consumed
#[utoipa::path(
    get,
    path = "/api/preparations/{preparation_id}/resources",
    tag = AID_TAG,
    params(("preparation_id" = i32, Path, description = "Aid preparation ID")),
    responses(
        (status = 200, description = "Usage records of the preparation", body = Vec<ResourceUsageDto>),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 404, description = "Preparation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_resource_usage(
    State(state): State<AppState>,
    _ctx: RequestContext,
    Path(preparation_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let usages: Vec<ResourceUsageDto> = AidPreparationService::new(&state.db)
        .list_resource_usage(preparation_id)
        .await?
        .into_iter()
        .map(ResourceUsageDto::from)
        .collect();

    Ok((StatusCode::OK, Json(usages)))
}

/// Change the resource or amount of a usage record
///
/// The previous amount is returned to stock before the new amount is taken.
#[utoipa::path(
    put,
    path = "/api/resource-usages/{usage_id}",
    tag = AID_TAG,
    params(("usage_id" = i32, Path, description = "Resource usage ID")),
    request_body = ResourceUsageRequestDto,
    responses(
        (status = 200, description = "Usage updated", body = ResourceUsageDto),
        (status = 400, description = "Invalid quantity", body = ErrorDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Usage or resource not found", body = ErrorDto),
        (status = 409, description = "Insufficient stock", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_resource_usage(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(usage_id): Path<i32>,
    Json(payload): Json<ResourceUsageRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let usage = AidPreparationService::new(&state.db)
        .update_resource_usage(&ctx, usage_id, payload.resource_id, payload.quantity)
        .await?;

    Ok((StatusCode::OK, Json(ResourceUsageDto::from(usage))))
}

/// Delete a usage record, returning its amount to stock
#[utoipa::path(
    delete,
    path = "/api/resource-usages/{usage_id}",
    tag = AID_TAG,
    params(("usage_id" = i32, Path, description = "Resource usage ID")),
    responses(
        (status = 204, description = "Usage deleted and stock restored"),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Usage not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_resource_usage(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(usage_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    AidPreparationService::new(&state.db)
        .delete_resource_usage(&ctx, usage_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Attach a volunteer to a preparation
#[utoipa::path(
    post,
    path = "/api/preparations/{preparation_id}/volunteers",
    tag = AID_TAG,
    params(("preparation_id" = i32, Path, description = "Aid preparation ID")),
    request_body = AssignVolunteerDto,
    responses(
        (status = 201, description = "Volunteer assigned", body = AssignmentDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Preparation or volunteer not found", body = ErrorDto),
        (status = 409, description = "Volunteer already assigned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_preparation_volunteer(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(preparation_id): Path<i32>,
    Json(payload): Json<AssignVolunteerDto>,
) -> Result<impl IntoResponse, Error> {
    let assignment = AidPreparationService::new(&state.db)
        .add_volunteer(&ctx, preparation_id, payload.volunteer_id)
        .await?;

    Ok((StatusCode::CREATED, Json(AssignmentDto::from(assignment))))
}

/// List the volunteers attached to a preparation
#[utoipa::path(
    get,
    path = "/api/preparations/{preparation_id}/volunteers",
    tag = AID_TAG,
    params(("preparation_id" = i32, Path, description = "Aid preparation ID")),
    responses(
        (status = 200, description = "Volunteers of the preparation", body = Vec<AssignmentDto>),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 404, description = "Preparation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_preparation_volunteers(
    State(state): State<AppState>,
    _ctx: RequestContext,
    Path(preparation_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let assignments: Vec<AssignmentDto> = AidPreparationService::new(&state.db)
        .list_volunteers(preparation_id)
        .await?
        .into_iter()
        .map(AssignmentDto::from)
        .collect();

    Ok((StatusCode::OK, Json(assignments)))
}

/// Detach a volunteer from a preparation
#[utoipa::path(
    delete,
    path = "/api/preparations/{preparation_id}/volunteers/{volunteer_id}",
    tag = AID_TAG,
    params(
        ("preparation_id" = i32, Path, description = "Aid preparation ID"),
        ("volunteer_id" = i32, Path, description = "Volunteer ID")
    ),
    responses(
        (status = 204, description = "Volunteer removed from the preparation"),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Preparation or assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_preparation_volunteer(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path((preparation_id, volunteer_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    AidPreparationService::new(&state.db)
        .remove_volunteer(&ctx, preparation_id, volunteer_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
