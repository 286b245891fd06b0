//! Request extractors and middleware for authentication.
//!
//! Every route outside `/api/auth`, `/health` and the docs runs behind
//! [`auth::require_auth`]. Handlers that need the caller's identity take an
//! [`auth::AuthUser`] argument:
//!
//! ```ignore
//! async fn delete_user(auth_user: AuthUser, Path(id): Path<String>) -> Result<..., AppError> {
//!     let email = auth_user.email();
//!     // ...
//! }
//! ```

pub mod auth;
