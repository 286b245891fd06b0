use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use yoga_core::AppError;
use yoga_models::{TeacherDto, TeacherId};

use crate::modules::teachers::service::TeacherService;
use crate::state::AppState;
use crate::utils::parse_id;

/// Get a teacher by ID
#[utoipa::path(
    get,
    path = "/api/teacher/{id}",
    params(
        ("id" = i64, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher details", body = TeacherDto),
        (status = 400, description = "Non-numeric ID"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn find_teacher(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TeacherDto>, AppError> {
    let id: TeacherId = parse_id(&id)?;

    let teacher = TeacherService::find_by_id(state.store(), id)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Teacher not found")))?;

    Ok(Json(TeacherDto::from(&teacher)))
}

/// List all teachers
#[utoipa::path(
    get,
    path = "/api/teacher",
    responses(
        (status = 200, description = "All teachers", body = Vec<TeacherDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn find_all_teachers(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeacherDto>>, AppError> {
    let teachers = TeacherService::find_all(state.store()).await?;

    Ok(Json(teachers.iter().map(TeacherDto::from).collect()))
}
