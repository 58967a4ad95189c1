use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        aid::{PreparationTaskDto, TrackingTaskDto},
        api::{ErrorDto, UpdateStatusDto},
        volunteer::{ReassignVolunteerDto, RegisterVolunteerDto, UserDto, VolunteerDto},
    },
    server::{
        error::Error,
        model::{app::AppState, context::RequestContext},
        service::{
            aid::task::VolunteerTaskService,
            volunteer::{VolunteerRegistration, VolunteerService},
        },
    },
};

/// OpenAPI tag of the volunteer endpoints
pub static VOLUNTEER_TAG: &str = "volunteer";

/// Register a new volunteer account
///
/// Creates the user, the volunteer at the chosen center and its skill links in one step.
/// No caller identity is needed.
#[utoipa::path(
    post,
    path = "/api/volunteers/register",
    tag = VOLUNTEER_TAG,
    request_body = RegisterVolunteerDto,
    responses(
        (status = 201, description = "Volunteer registered", body = UserDto),
        (status = 400, description = "Invalid input or no skills registered yet", body = ErrorDto),
        (status = 404, description = "Relief center or skill not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_volunteer(
    State(state): State<AppState>,
    Json(payload): Json<RegisterVolunteerDto>,
) -> Result<impl IntoResponse, Error> {
    let (user, _) = VolunteerService::new(&state.db)
        .register(VolunteerRegistration {
            email: payload.email,
            name: payload.name,
            phone_no: payload.phone_no,
            center_id: payload.center_id,
            skill_ids: payload.skill_ids,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// Look up a volunteer
#[utoipa::path(
    get,
    path = "/api/volunteers/{volunteer_id}",
    tag = VOLUNTEER_TAG,
    params(("volunteer_id" = i32, Path, description = "Volunteer ID")),
    responses(
        (status = 200, description = "Volunteer found", body = VolunteerDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 404, description = "Volunteer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_volunteer(
    State(state): State<AppState>,
    _ctx: RequestContext,
    Path(volunteer_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let volunteer = VolunteerService::new(&state.db).get(volunteer_id).await?;

    Ok((StatusCode::OK, Json(VolunteerDto::from(volunteer))))
}

/// Activate or deactivate a volunteer
#[utoipa::path(
    put,
    path = "/api/volunteers/{volunteer_id}/status",
    tag = VOLUNTEER_TAG,
    params(("volunteer_id" = i32, Path, description = "Volunteer ID")),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated", body = VolunteerDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Volunteer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_volunteer_status(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(volunteer_id): Path<i32>,
    Json(payload): Json<UpdateStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let volunteer = VolunteerService::new(&state.db)
        .update_status(&ctx, volunteer_id, &payload.status)
        .await?;

    Ok((StatusCode::OK, Json(VolunteerDto::from(volunteer))))
}

/// Move a volunteer to another relief center
#[utoipa::path(
    put,
    path = "/api/volunteers/{volunteer_id}/center",
    tag = VOLUNTEER_TAG,
    params(("volunteer_id" = i32, Path, description = "Volunteer ID")),
    request_body = ReassignVolunteerDto,
    responses(
        (status = 200, description = "Volunteer reassigned", body = VolunteerDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Volunteer or relief center not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reassign_volunteer(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(volunteer_id): Path<i32>,
    Json(payload): Json<ReassignVolunteerDto>,
) -> Result<impl IntoResponse, Error> {
    let volunteer = VolunteerService::new(&state.db)
        .reassign(&ctx, volunteer_id, payload.center_id)
        .await?;

    Ok((StatusCode::OK, Json(VolunteerDto::from(volunteer))))
}

/// Delete a volunteer
///
/// The user goes back to the `User` role and the center is recounted.
#[utoipa::path(
    delete,
    path = "/api/volunteers/{volunteer_id}",
    tag = VOLUNTEER_TAG,
    params(("volunteer_id" = i32, Path, description = "Volunteer ID")),
    responses(
        (status = 204, description = "Volunteer deleted"),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Volunteer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_volunteer(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(volunteer_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    VolunteerService::new(&state.db)
        .delete(&ctx, volunteer_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the aid preparations a volunteer is assigned to
///
/// Each entry carries the aid request the preparation serves. Admins may look at any
/// volunteer, everyone else only at their own volunteer record.
#[utoipa::path(
    get,
    path = "/api/volunteers/{volunteer_id}/aid-prep-tasks",
    tag = VOLUNTEER_TAG,
    params(("volunteer_id" = i32, Path, description = "Volunteer ID")),
    responses(
        (status = 200, description = "Assigned preparations", body = Vec<PreparationTaskDto>),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is neither an admin nor the volunteer", body = ErrorDto),
        (status = 404, description = "Volunteer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_preparation_tasks(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(volunteer_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let tasks: Vec<PreparationTaskDto> = VolunteerTaskService::new(&state.db)
        .preparation_tasks(&ctx, volunteer_id)
        .await?
        .into_iter()
        .map(PreparationTaskDto::from)
        .collect();

    Ok((StatusCode::OK, Json(tasks)))
}

/// List the rescue trackings a volunteer is assigned to
#[utoipa::path(
    get,
    path = "/api/volunteers/{volunteer_id}/rescue-tracking-tasks",
    tag = VOLUNTEER_TAG,
    params(("volunteer_id" = i32, Path, description = "Volunteer ID")),
    responses(
        (status = 200, description = "Assigned rescue trackings", body = Vec<TrackingTaskDto>),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is neither an admin nor the volunteer", body = ErrorDto),
        (status = 404, description = "Volunteer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tracking_tasks(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(volunteer_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let tasks: Vec<TrackingTaskDto> = VolunteerTaskService::new(&state.db)
        .tracking_tasks(&ctx, volunteer_id)
        .await?
        .into_iter()
        .map(TrackingTaskDto::from)
        .collect();

    Ok((StatusCode::OK, Json(tasks)))
}
