use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        aid::{AidRequestDto, CreateAidRequestDto},
        api::{ErrorDto, UpdateStatusDto},
    },
    server::{
        controller::aid::AID_TAG,
        error::Error,
        model::{app::AppState, context::RequestContext},
        service::aid::request::{AidRequestInput, AidRequestService},
    },
};

/// File an aid request for an affected area
#[utoipa::path(
    post,
    path = "/api/aid-requests",
    tag = AID_TAG,
    request_body = CreateAidRequestDto,
    responses(
        (status = 201, description = "Aid request filed", body = AidRequestDto),
        (status = 400, description = "Invalid request fields", body = ErrorDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 409, description = "Caller already has a pending request for the area", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_aid_request(
    State(state): State<AppState>,
    ctx: RequestContext,
    Json(payload): Json<CreateAidRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let request = AidRequestService::new(&state.db)
        .create(
            &ctx,
            AidRequestInput {
                area_id: payload.area_id,
                request_type: payload.request_type,
                description: payload.description,
                urgency: payload.urgency,
                people_count: payload.people_count,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(AidRequestDto::from(request))))
}

/// List every aid request, newest first
#[utoipa::path(
    get,
    path = "/api/aid-requests",
    tag = AID_TAG,
    responses(
        (status = 200, description = "All aid requests", body = Vec<AidRequestDto>),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_aid_requests(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, Error> {
    let requests: Vec<AidRequestDto> = AidRequestService::new(&state.db)
        .list(&ctx)
        .await?
        .into_iter()
        .map(AidRequestDto::from)
        .collect();

    Ok((StatusCode::OK, Json(requests)))
}

/// List the aid requests filed by a user, newest first
///
/// Callers may list their own requests; staff may list anyone's.
#[utoipa::path(
    get,
    path = "/api/aid-requests/user/{user_id}",
    tag = AID_TAG,
    params(("user_id" = i32, Path, description = "User ID of the requester")),
    responses(
        (status = 200, description = "Aid requests of the user", body = Vec<AidRequestDto>),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Another user's requests and caller is not staff", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_user_aid_requests(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let requests: Vec<AidRequestDto> = AidRequestService::new(&state.db)
        .list_by_user(&ctx, user_id)
        .await?
        .into_iter()
        .map(AidRequestDto::from)
        .collect();

    Ok((StatusCode::OK, Json(requests)))
}

/// Look up an aid request
#[utoipa::path(
    get,
    path = "/api/aid-requests/{request_id}",
    tag = AID_TAG,
    params(("request_id" = i32, Path, description = "Aid request ID")),
    responses(
        (status = 200, description = "Aid request found", body = AidRequestDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 404, description = "Aid request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_aid_request(
    State(state): State<AppState>,
    _ctx: RequestContext,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let request = AidRequestService::new(&state.db).get(request_id).await?;

    Ok((StatusCode::OK, Json(AidRequestDto::from(request))))
}

/// Move an aid request to its next status
#[utoipa::path(
    put,
    path = "/api/aid-requests/{request_id}/status",
    tag = AID_TAG,
    params(("request_id" = i32, Path, description = "Aid request ID")),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated", body = AidRequestDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Aid request not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_aid_request_status(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(request_id): Path<i32>,
    Json(payload): Json<UpdateStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let request = AidRequestService::new(&state.db)
        .update_status(&ctx, request_id, &payload.status)
        .await?;

    Ok((StatusCode::OK, Json(AidRequestDto::from(request))))
}
