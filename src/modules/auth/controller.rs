use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;
use utoipa::ToSchema;

use yoga_core::AppError;
use yoga_models::{JwtResponse, LoginRequest, MessageResponse, SignupRequest};

use super::service::{AuthService, RegisterOutcome};
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Log in and receive a bearer token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = JwtResponse),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 401, description = "Bad credentials", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<JwtResponse>, AppError> {
    let response = AuthService::authenticate(state.store(), &state.jwt_config, request).await?;
    Ok(Json(response))
}

/// Register a new member account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "User registered successfully", body = MessageResponse),
        (status = 400, description = "Validation error or email already taken", body = MessageResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    match AuthService::register(state.store(), request).await? {
        RegisterOutcome::Registered(_) => Ok((
            StatusCode::OK,
            Json(MessageResponse::new("User registered successfully!")),
        )),
        RegisterOutcome::EmailTaken => Ok((
            StatusCode::BAD_REQUEST,
            Json(MessageResponse::new("Error: Email is already taken!")),
        )),
    }
}
