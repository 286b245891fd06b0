use anyhow::anyhow;
use tracing::{info, instrument, warn};

use yoga_auth::create_access_token;
use yoga_config::JwtConfig;
use yoga_core::{AppError, hash_password, verify_password};
use yoga_db::Store;
use yoga_models::{JwtResponse, LoginRequest, NewUser, SignupRequest, User};

use crate::metrics::{
    track_login_failure, track_login_success, track_registration_conflict, track_user_registered,
};

/// Result of a signup attempt. A taken email is an expected outcome, not an error.
#[derive(Debug)]
pub enum RegisterOutcome {
    Registered(User),
    EmailTaken,
}

pub struct AuthService;

impl AuthService {
    /// Checks the credentials and issues a token.
    ///
    /// Unknown email and wrong password fail the same way.
    #[instrument(skip(store, jwt_config))]
    pub async fn authenticate(
        store: &dyn Store,
        jwt_config: &JwtConfig,
        request: LoginRequest,
    ) -> Result<JwtResponse, AppError> {
        let bad_credentials = || {
            track_login_failure();
            AppError::unauthorized(anyhow!("Bad credentials"))
        };

        let Some(user) = store.find_user_by_email(&request.email).await? else {
            warn!("Login attempt for unknown email");
            return Err(bad_credentials());
        };

        if !verify_password(&request.password, &user.password)? {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(bad_credentials());
        }

        let token = create_access_token(user.id.into_inner(), &user.email, user.admin, jwt_config)?;
        track_login_success(user.admin);

        Ok(JwtResponse::bearer(token, &user))
    }

    #[instrument(skip(store))]
    pub async fn register(
        store: &dyn Store,
        request: SignupRequest,
    ) -> Result<RegisterOutcome, AppError> {
        if store.user_exists_by_email(&request.email).await? {
            track_registration_conflict();
            return Ok(RegisterOutcome::EmailTaken);
        }

        let password = hash_password(&request.password)?;
        let user = store
            .create_user(NewUser {
                email: request.email,
                last_name: request.last_name,
                first_name: request.first_name,
                password,
                admin: false,
            })
            .await?;

        info!(user_id = %user.id, "User registered");
        track_user_registered();

        Ok(RegisterOutcome::Registered(user))
    }
}
