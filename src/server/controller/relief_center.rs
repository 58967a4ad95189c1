use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        center::{CreateReliefCenterDto, ReliefCenterDto},
    },
    server::{
        error::Error,
        model::{app::AppState, context::RequestContext},
        service::relief_center::{ReliefCenterInput, ReliefCenterService},
    },
};

/// OpenAPI tag of the relief center endpoints
pub static CENTER_TAG: &str = "relief center";

/// Create a relief center
#[utoipa::path(
    post,
    path = "/api/centers",
    tag = CENTER_TAG,
    request_body = CreateReliefCenterDto,
    responses(
        (status = 201, description = "Relief center created", body = ReliefCenterDto),
        (status = 400, description = "Invalid name or capacity", body = ErrorDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Manager not found", body = ErrorDto),
        (status = 409, description = "A center with the same name exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_center(
    State(state): State<AppState>,
    ctx: RequestContext,
    Json(payload): Json<CreateReliefCenterDto>,
) -> Result<impl IntoResponse, Error> {
    let center = ReliefCenterService::new(&state.db)
        .create(
            &ctx,
            ReliefCenterInput {
                name: payload.name,
                location: payload.location,
                max_capacity: payload.max_capacity,
                manager_id: payload.manager_id,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ReliefCenterDto::from(center))))
}

/// List every relief center ordered by name
#[utoipa::path(
    get,
    path = "/api/centers",
    tag = CENTER_TAG,
    responses(
        (status = 200, description = "All relief centers", body = Vec<ReliefCenterDto>),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_centers(
    State(state): State<AppState>,
    _ctx: RequestContext,
) -> Result<impl IntoResponse, Error> {
    let centers: Vec<ReliefCenterDto> = ReliefCenterService::new(&state.db)
        .list()
        .await?
        .into_iter()
        .map(ReliefCenterDto::from)
        .collect();

    Ok((StatusCode::OK, Json(centers)))
}

/// Look up a relief center
#[utoipa::path(
    get,
    path = "/api/centers/{center_id}",
    tag = CENTER_TAG,
    params(("center_id" = i32, Path, description = "Relief center ID")),
    responses(
        (status = 200, description = "Relief center found", body = ReliefCenterDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 404, description = "Relief center not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_center(
    State(state): State<AppState>,
    _ctx: RequestContext,
    Path(center_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let center = ReliefCenterService::new(&state.db).get(center_id).await?;

    Ok((StatusCode::OK, Json(ReliefCenterDto::from(center))))
}

/// Delete a relief center
///
/// Its volunteers are removed and their users returned to the User role.
#[utoipa::path(
    delete,
    path = "/api/centers/{center_id}",
    tag = CENTER_TAG,
    params(("center_id" = i32, Path, description = "Relief center ID")),
    responses(
        (status = 204, description = "Relief center deleted"),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Relief center not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_center(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(center_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    ReliefCenterService::new(&state.db)
        .delete(&ctx, center_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Recompute a relief center's volunteer count from its Active volunteers
#[utoipa::path(
    post,
    path = "/api/centers/{center_id}/recount",
    tag = CENTER_TAG,
    params(("center_id" = i32, Path, description = "Relief center ID")),
    responses(
        (status = 200, description = "Volunteer count recomputed", body = ReliefCenterDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Relief center not found", body = ErrorDto),
        (status = 503, description = "Center kept changing during the recount", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn recount_center(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(center_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let center = ReliefCenterService::new(&state.db)
        .recount(&ctx, center_id)
        .await?;

    Ok((StatusCode::OK, Json(ReliefCenterDto::from(center))))
}
