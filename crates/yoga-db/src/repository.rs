//! Repository contracts.
//!
//! Lookups by id return `Ok(None)` when the row is absent; deciding whether
//! that is an error belongs to the caller. Deletes report whether a row was
//! actually removed.

use async_trait::async_trait;

use yoga_core::AppError;
use yoga_models::{
    NewTeacher, NewUser, Session, SessionDraft, SessionId, Teacher, TeacherId, User, UserId,
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>, AppError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError>;
    async fn create_user(&self, user: NewUser) -> Result<User, AppError>;
    /// Also removes the user from every session they participate in.
    async fn delete_user(&self, id: UserId) -> Result<bool, AppError>;
}

#[async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn find_all_teachers(&self) -> Result<Vec<Teacher>, AppError>;
    async fn find_teacher_by_id(&self, id: TeacherId) -> Result<Option<Teacher>, AppError>;
    async fn create_teacher(&self, teacher: NewTeacher) -> Result<Teacher, AppError>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// All sessions in id order, participants included.
    async fn find_all_sessions(&self) -> Result<Vec<Session>, AppError>;
    async fn find_session_by_id(&self, id: SessionId) -> Result<Option<Session>, AppError>;
    /// Inserts when `draft.id` is `None`, otherwise writes the row with that
    /// id whether or not it exists. The participant set is replaced by
    /// `draft.users` atomically with the row.
    async fn save_session(&self, draft: SessionDraft) -> Result<Session, AppError>;
    async fn delete_session(&self, id: SessionId) -> Result<bool, AppError>;
}

/// Everything the services need from persistence.
pub trait Store: UserRepository + TeacherRepository + SessionRepository {}

impl<T> Store for T where T: UserRepository + TeacherRepository + SessionRepository {}
