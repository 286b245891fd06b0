//! In-process store with the same semantics as [`PgStore`](crate::PgStore).
//!
//! Used by unit and integration tests so the whole HTTP stack can be driven
//! without a database. Ids are assigned from per-table counters starting at 1.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use yoga_core::{AppError, hash_password};
use yoga_models::{
    NewTeacher, NewUser, Session, SessionDraft, SessionId, Teacher, TeacherId, User, UserId,
};

use crate::repository::{SessionRepository, TeacherRepository, UserRepository};

pub const DEMO_ADMIN_EMAIL: &str = "yoga@studio.com";
pub const DEMO_ADMIN_PASSWORD: &str = "test!1234";
pub const DEMO_USER_EMAIL: &str = "member@studio.com";
pub const DEMO_USER_PASSWORD: &str = "member!1234";

#[derive(Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    teachers: BTreeMap<TeacherId, Teacher>,
    sessions: BTreeMap<SessionId, Session>,
    last_user_id: i64,
    last_teacher_id: i64,
    last_session_id: i64,
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

fn normalize(mut users: Vec<UserId>) -> Vec<UserId> {
    users.sort();
    users.dedup();
    users
}

// bcrypt at the default cost is slow; hash each demo password once per process
fn demo_hash(cell: &'static OnceLock<String>, password: &str) -> Result<String, AppError> {
    if let Some(hash) = cell.get() {
        return Ok(hash.clone());
    }
    let hash = hash_password(password)?;
    Ok(cell.get_or_init(|| hash).clone())
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding two teachers, the admin account, one regular member
    /// and the two test sessions "Session de test 1" and "Session de test 2".
    ///
    /// The admin is user 1 and the member is user 2.
    pub async fn with_demo_data() -> Result<Self, AppError> {
        static ADMIN_HASH: OnceLock<String> = OnceLock::new();
        static MEMBER_HASH: OnceLock<String> = OnceLock::new();

        let store = Self::new();

        let margot = store
            .create_teacher(NewTeacher {
                last_name: "DELAHAYE".to_string(),
                first_name: "Margot".to_string(),
            })
            .await?;
        store
            .create_teacher(NewTeacher {
                last_name: "THIERCELIN".to_string(),
                first_name: "Hélène".to_string(),
            })
            .await?;

        store
            .create_user(NewUser {
                email: DEMO_ADMIN_EMAIL.to_string(),
                last_name: "Admin".to_string(),
                first_name: "Admin".to_string(),
                password: demo_hash(&ADMIN_HASH, DEMO_ADMIN_PASSWORD)?,
                admin: true,
            })
            .await?;
        store
            .create_user(NewUser {
                email: DEMO_USER_EMAIL.to_string(),
                last_name: "Member".to_string(),
                first_name: "Studio".to_string(),
                password: demo_hash(&MEMBER_HASH, DEMO_USER_PASSWORD)?,
                admin: false,
            })
            .await?;

        let tomorrow = Utc::now() + Duration::days(1);
        store
            .save_session(SessionDraft {
                id: None,
                name: "Session de test 1".to_string(),
                date: tomorrow,
                description: "Première session de test".to_string(),
                teacher_id: Some(margot.id),
                users: vec![],
            })
            .await?;
        store
            .save_session(SessionDraft {
                id: None,
                name: "Session de test 2".to_string(),
                date: tomorrow + Duration::days(1),
                description: "Deuxième session de test".to_string(),
                teacher_id: Some(margot.id),
                users: vec![],
            })
            .await?;

        Ok(store)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>, AppError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().any(|u| u.email == email))
    }

    async fn create_user(&self, user: NewUser) -> Result<User, AppError> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.email == user.email) {
            return Err(AppError::bad_request(anyhow!("Email is already taken")));
        }

        tables.last_user_id += 1;
        let now = Utc::now();
        let created = User {
            id: UserId::new(tables.last_user_id),
            email: user.email,
            last_name: user.last_name,
            first_name: user.first_name,
            password: user.password,
            admin: user.admin,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(created.id, created.clone());

        Ok(created)
    }

    async fn delete_user(&self, id: UserId) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;

        if tables.users.remove(&id).is_none() {
            return Ok(false);
        }
        for session in tables.sessions.values_mut() {
            session.remove_participant(id);
        }

        Ok(true)
    }
}

#[async_trait]
impl TeacherRepository for InMemoryStore {
    async fn find_all_teachers(&self) -> Result<Vec<Teacher>, AppError> {
        Ok(self.tables.read().await.teachers.values().cloned().collect())
    }

    async fn find_teacher_by_id(&self, id: TeacherId) -> Result<Option<Teacher>, AppError> {
        Ok(self.tables.read().await.teachers.get(&id).cloned())
    }

    async fn create_teacher(&self, teacher: NewTeacher) -> Result<Teacher, AppError> {
        let mut tables = self.tables.write().await;

        tables.last_teacher_id += 1;
        let now = Utc::now();
        let created = Teacher {
            id: TeacherId::new(tables.last_teacher_id),
            last_name: teacher.last_name,
            first_name: teacher.first_name,
            created_at: now,
            updated_at: now,
        };
        tables.teachers.insert(created.id, created.clone());

        Ok(created)
    }
}

#[async_trait]
impl SessionRepository for InMemoryStore {
    async fn find_all_sessions(&self) -> Result<Vec<Session>, AppError> {
        Ok(self.tables.read().await.sessions.values().cloned().collect())
    }

    async fn find_session_by_id(&self, id: SessionId) -> Result<Option<Session>, AppError> {
        Ok(self.tables.read().await.sessions.get(&id).cloned())
    }

    async fn save_session(&self, draft: SessionDraft) -> Result<Session, AppError> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();

        let id = match draft.id {
            Some(id) => {
                tables.last_session_id = tables.last_session_id.max(id.into_inner());
                id
            }
            None => {
                tables.last_session_id += 1;
                SessionId::new(tables.last_session_id)
            }
        };
        let created_at = tables
            .sessions
            .get(&id)
            .map(|existing| existing.created_at)
            .unwrap_or(now);

        let session = Session {
            id,
            name: draft.name,
            date: draft.date,
            description: draft.description,
            teacher_id: draft.teacher_id,
            users: normalize(draft.users),
            created_at,
            updated_at: now,
        };
        tables.sessions.insert(id, session.clone());

        Ok(session)
    }

    async fn delete_session(&self, id: SessionId) -> Result<bool, AppError> {
        Ok(self.tables.write().await.sessions.remove(&id).is_some())
    }
}
