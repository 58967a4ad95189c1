use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        aid::{
            AssignVolunteerDto, AssignmentDto, CreateRescueTrackingDto, RescueTrackingDto,
            UpdateRescueTrackingDto,
        },
        api::ErrorDto,
    },
    server::{
        controller::aid::AID_TAG,
        error::Error,
        model::{app::AppState, context::RequestContext},
        service::aid::tracking::{RescueTrackingService, TrackingUpdate},
    },
};

/// Open the rescue tracking record of an aid request, or return the existing one
#[utoipa::path(
    post,
    path = "/api/rescue-trackings",
    tag = AID_TAG,
    request_body = CreateRescueTrackingDto,
    responses(
        (status = 201, description = "Rescue tracking opened", body = RescueTrackingDto),
        (status = 200, description = "Rescue tracking already existed", body = RescueTrackingDto),
        (status = 400, description = "Status other than Pending or In Progress", body = ErrorDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Aid request not found", body = ErrorDto),
        (status = 409, description = "Aid request already completed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tracking(
    State(state): State<AppState>,
    ctx: RequestContext,
    Json(payload): Json<CreateRescueTrackingDto>,
) -> Result<impl IntoResponse, Error> {
    let (tracking, created) = RescueTrackingService::new(&state.db)
        .create(&ctx, payload.request_id, &payload.status, payload.start_time)
        .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(RescueTrackingDto::from(tracking))))
}

/// Look up a rescue tracking
#[utoipa::path(
    get,
    path = "/api/rescue-trackings/{tracking_id}",
    tag = AID_TAG,
    params(("tracking_id" = i32, Path, description = "Rescue tracking ID")),
    responses(
        (status = 200, description = "Rescue tracking found", body = RescueTrackingDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 404, description = "Rescue tracking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tracking(
    State(state): State<AppState>,
    _ctx: RequestContext,
    Path(tracking_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let tracking = RescueTrackingService::new(&state.db).get(tracking_id).await?;

    Ok((StatusCode::OK, Json(RescueTrackingDto::from(tracking))))
}

/// Update status, people helped or completion time of a rescue
///
/// Completing a rescue requires a completion time, supplied here or recorded earlier.
#[utoipa::path(
    patch,
    path = "/api/rescue-trackings/{tracking_id}",
    tag = AID_TAG,
    params(("tracking_id" = i32, Path, description = "Rescue tracking ID")),
    request_body = UpdateRescueTrackingDto,
    responses(
        (status = 200, description = "Rescue tracking updated", body = RescueTrackingDto),
        (status = 400, description = "Unknown status or missing completion time", body = ErrorDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Rescue tracking not found", body = ErrorDto),
        (status = 409, description = "Rescue already completed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tracking(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(tracking_id): Path<i32>,
    Json(payload): Json<UpdateRescueTrackingDto>,
) -> Result<impl IntoResponse, Error> {
    let tracking = RescueTrackingService::new(&state.db)
        .update(
            &ctx,
            tracking_id,
            TrackingUpdate {
                status: payload.status,
                people_helped: payload.people_helped,
                completion_time: payload.completion_time,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(RescueTrackingDto::from(tracking))))
}

/// Attach a volunteer to an open rescue
#[utoipa::path(
    post,
    path = "/api/rescue-trackings/{tracking_id}/volunteers",
    tag = AID_TAG,
    params(("tracking_id" = i32, Path, description = "Rescue tracking ID")),
    request_body = AssignVolunteerDto,
    responses(
        (status = 201, description = "Volunteer assigned", body = AssignmentDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not staff", body = ErrorDto),
        (status = 404, description = "Rescue tracking or volunteer not found", body = ErrorDto),
        (status = 409, description = "Volunteer already assigned or rescue completed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_tracking_volunteer(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(tracking_id): Path<i32>,
    Json(payload): Json<AssignVolunteerDto>,
) -> Result<impl IntoResponse, Error> {
    let assignment = RescueTrackingService::new(&state.db)
        .assign_volunteer(&ctx, tracking_id, payload.volunteer_id)
        .await?;

    Ok((StatusCode::CREATED, Json(AssignmentDto::from(assignment))))
}

/// List the volunteers attached to a rescue
#[utoipa::path(
    get,
    path = "/api/rescue-trackings/{tracking_id}/volunteers",
    tag = AID_TAG,
    params(("tracking_id" = i32, Path, description = "Rescue tracking ID")),
    responses(
        (status = 200, description = "Volunteers of the rescue", body = Vec<AssignmentDto>),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 404, description = "Rescue tracking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tracking_volunteers(
    State(state): State<AppState>,
    _ctx: RequestContext,
    Path(tracking_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let assignments: Vec<AssignmentDto> = RescueTrackingService::new(&state.db)
        .list_volunteers(tracking_id)
        .await?
        .into_iter()
        .map(AssignmentDto::from)
        .collect();

    Ok((StatusCode::OK, Json(assignments)))
}
