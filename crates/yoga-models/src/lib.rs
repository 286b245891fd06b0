//! # Yoga Models
//!
//! Domain entities, transfer objects and the mapping between them.
//!
//! - [`ids`]: strongly-typed numeric identifiers
//! - [`users`]: studio members ([`User`], [`UserDto`])
//! - [`teachers`]: yoga teachers ([`Teacher`], [`TeacherDto`])
//! - [`sessions`]: scheduled sessions and their participants
//! - [`auth`]: login, signup and token response payloads
//!
//! Entities are what the repositories store; DTOs are what crosses the HTTP
//! boundary. DTOs serialize in camelCase (with `teacher_id` kept verbatim)
//! to match the web front-end.

pub mod auth;
pub mod ids;
pub mod sessions;
pub mod teachers;
pub mod users;
mod validation;

pub use auth::{JwtResponse, LoginRequest, MessageResponse, SignupRequest};
pub use ids::{SessionId, TeacherId, UserId};
pub use sessions::{Session, SessionDraft, SessionDto};
pub use teachers::{NewTeacher, Teacher, TeacherDto};
pub use users::{NewUser, User, UserDto};
