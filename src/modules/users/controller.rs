use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use yoga_core::AppError;
use yoga_models::{UserDto, UserId};

use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::parse_id;

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/api/user/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = UserDto),
        (status = 400, description = "Non-numeric ID"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn find_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserDto>, AppError> {
    let id: UserId = parse_id(&id)?;

    let user = UserService::find_by_id(state.store(), id)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("User not found")))?;

    Ok(Json(UserDto::from(&user)))
}

/// Delete your own account
#[utoipa::path(
    delete,
    path = "/api/user/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Account deleted"),
        (status = 400, description = "Non-numeric ID"),
        (status = 401, description = "Unauthorized or not the account owner"),
        (status = 404, description = "User not found")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id: UserId = parse_id(&id)?;

    UserService::delete_own_account(state.store(), id, auth_user.email()).await?;

    Ok(StatusCode::OK)
}
