use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        volunteer::{ChangeUserRoleDto, UserDto},
    },
    server::{
        error::Error,
        model::{app::AppState, context::RequestContext},
        service::user::UserService,
    },
};

/// OpenAPI tag of the user endpoints
pub static USER_TAG: &str = "user";

/// Look up a user
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    _ctx: RequestContext,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).get(user_id).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// Change the role of a user
///
/// Granting the Volunteer role requires a relief center; revoking it removes the user's
/// volunteer record.
#[utoipa::path(
    put,
    path = "/api/users/{user_id}/role",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    request_body = ChangeUserRoleDto,
    responses(
        (status = 200, description = "Role changed", body = UserDto),
        (status = 400, description = "Unknown role or missing center", body = ErrorDto),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User or relief center not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_user_role(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(user_id): Path<i32>,
    Json(payload): Json<ChangeUserRoleDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db)
        .change_role(&ctx, user_id, &payload.role, payload.center_id)
        .await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// Delete a user
///
/// A volunteer record of the user is removed with it and its center recounted.
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Missing caller identity", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    UserService::new(&state.db).delete(&ctx, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
