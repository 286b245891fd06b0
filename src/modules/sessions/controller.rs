use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use yoga_core::AppError;
use yoga_models::{SessionDto, SessionId, UserId};

use crate::modules::sessions::mapper::SessionMapper;
use crate::modules::sessions::service::SessionService;
use crate::state::AppState;
use crate::utils::parse_id;
use crate::validator::ValidatedJson;

/// Get a session by ID
#[utoipa::path(
    get,
    path = "/api/session/{id}",
    params(
        ("id" = i64, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session details", body = SessionDto),
        (status = 400, description = "Non-numeric ID"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Session not found")
    ),
    tag = "Sessions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn find_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionDto>, AppError> {
    let id: SessionId = parse_id(&id)?;

    let session = SessionService::get_by_id(state.store(), id)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Session not found")))?;

    Ok(Json(SessionDto::from(&session)))
}

/// List all sessions
#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "All sessions", body = Vec<SessionDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Sessions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn find_all_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionDto>>, AppError> {
    let sessions = SessionService::find_all(state.store()).await?;

    Ok(Json(sessions.iter().map(SessionDto::from).collect()))
}

/// Create a session
#[utoipa::path(
    post,
    path = "/api/session",
    request_body = SessionDto,
    responses(
        (status = 200, description = "Session created", body = SessionDto),
        (status = 400, description = "Invalid session"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Sessions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_session(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SessionDto>,
) -> Result<Json<SessionDto>, AppError> {
    let draft = SessionMapper::to_draft(state.store(), dto).await?;
    let session = SessionService::create(state.store(), draft).await?;

    Ok(Json(SessionDto::from(&session)))
}

/// Update a session
///
/// Writing to an ID that does not exist creates the session under that ID.
#[utoipa::path(
    put,
    path = "/api/session/{id}",
    params(
        ("id" = i64, Path, description = "Session ID")
    ),
    request_body = SessionDto,
    responses(
        (status = 200, description = "Session updated", body = SessionDto),
        (status = 400, description = "Non-numeric ID or invalid session"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Sessions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<SessionDto>,
) -> Result<Json<SessionDto>, AppError> {
    let id: SessionId = parse_id(&id)?;

    let draft = SessionMapper::to_draft(state.store(), dto).await?;
    let session = SessionService::update(state.store(), id, draft).await?;

    Ok(Json(SessionDto::from(&session)))
}

/// Delete a session
#[utoipa::path(
    delete,
    path = "/api/session/{id}",
    params(
        ("id" = i64, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session deleted"),
        (status = 400, description = "Non-numeric ID"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Session not found")
    ),
    tag = "Sessions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id: SessionId = parse_id(&id)?;

    if !SessionService::delete(state.store(), id).await? {
        return Err(AppError::not_found(anyhow!("Session not found")));
    }

    Ok(StatusCode::OK)
}

/// Add a user to a session
#[utoipa::path(
    post,
    path = "/api/session/{id}/participate/{user_id}",
    params(
        ("id" = i64, Path, description = "Session ID"),
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User added to the session"),
        (status = 400, description = "Non-numeric ID or user already participating"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Session or user not found")
    ),
    tag = "Sessions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn participate(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let id: SessionId = parse_id(&id)?;
    let user_id: UserId = parse_id(&user_id)?;

    SessionService::participate(state.store(), id, user_id).await?;

    Ok(StatusCode::OK)
}

/// Remove a user from a session
#[utoipa::path(
    delete,
    path = "/api/session/{id}/participate/{user_id}",
    params(
        ("id" = i64, Path, description = "Session ID"),
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User removed from the session"),
        (status = 400, description = "Non-numeric ID or user not participating"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Session not found")
    ),
    tag = "Sessions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn no_longer_participate(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let id: SessionId = parse_id(&id)?;
    let user_id: UserId = parse_id(&user_id)?;

    SessionService::no_longer_participate(state.store(), id, user_id).await?;

    Ok(StatusCode::OK)
}
