//! PostgreSQL store.
//!
//! Participation lives in the `participate` join table; a session is loaded
//! as its `sessions` row plus the ordered list of participant ids.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use tracing::instrument;

use yoga_core::AppError;
use yoga_models::{
    NewTeacher, NewUser, Session, SessionDraft, SessionId, Teacher, TeacherId, User, UserId,
};

use crate::repository::{SessionRepository, TeacherRepository, UserRepository};

const USER_COLUMNS: &str =
    "id, email, last_name, first_name, password, admin, created_at, updated_at";
const TEACHER_COLUMNS: &str = "id, last_name, first_name, created_at, updated_at";
const SESSION_COLUMNS: &str =
    "id, name, date, description, teacher_id, created_at, updated_at";

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[derive(FromRow)]
struct SessionRow {
    id: SessionId,
    name: String,
    date: DateTime<Utc>,
    description: String,
    teacher_id: Option<TeacherId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self, users: Vec<UserId>) -> Session {
        Session {
            id: self.id,
            name: self.name,
            date: self.date,
            description: self.description,
            teacher_id: self.teacher_id,
            users,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

async fn participants_of(
    tx: &mut Transaction<'_, Postgres>,
    session_id: SessionId,
) -> Result<Vec<UserId>, sqlx::Error> {
    sqlx::query_scalar::<_, UserId>(
        "SELECT user_id FROM participate WHERE session_id = $1 ORDER BY user_id",
    )
    .bind(session_id)
    .fetch_all(&mut **tx)
    .await
}

#[async_trait]
impl UserRepository for PgStore {
    #[instrument(skip(self))]
    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn create_user(&self, user: NewUser) -> Result<User, AppError> {
        let created = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, last_name, first_name, password, admin)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&user.email)
        .bind(&user.last_name)
        .bind(&user.first_name)
        .bind(&user.password)
        .bind(user.admin)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::bad_request(anyhow::anyhow!("Email is already taken"));
                }
            }
            AppError::from(e)
        })?;

        Ok(created)
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, id: UserId) -> Result<bool, AppError> {
        // participate rows go with the user through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl TeacherRepository for PgStore {
    #[instrument(skip(self))]
    async fn find_all_teachers(&self) -> Result<Vec<Teacher>, AppError> {
        let teachers = sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(teachers)
    }

    #[instrument(skip(self))]
    async fn find_teacher_by_id(&self, id: TeacherId) -> Result<Option<Teacher>, AppError> {
        let teacher = sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(teacher)
    }

    #[instrument(skip(self))]
    async fn create_teacher(&self, teacher: NewTeacher) -> Result<Teacher, AppError> {
        let created = sqlx::query_as::<_, Teacher>(&format!(
            "INSERT INTO teachers (last_name, first_name)
             VALUES ($1, $2)
             RETURNING {TEACHER_COLUMNS}"
        ))
        .bind(&teacher.last_name)
        .bind(&teacher.first_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}

#[async_trait]
impl SessionRepository for PgStore {
    #[instrument(skip(self))]
    async fn find_all_sessions(&self) -> Result<Vec<Session>, AppError> {
        let mut tx = self.pool.begin().await?;

        let rows = sqlx::query_as::<_, SessionRow>(&format!(
            "SELECT {SESSION_COLUMNS} FROM sessions ORDER BY id"
        ))
        .fetch_all(&mut *tx)
        .await?;

        let links = sqlx::query_as::<_, (SessionId, UserId)>(
            "SELECT session_id, user_id FROM participate ORDER BY session_id, user_id",
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let mut participants: HashMap<SessionId, Vec<UserId>> = HashMap::new();
        for (session_id, user_id) in links {
            participants.entry(session_id).or_default().push(user_id);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let users = participants.remove(&row.id).unwrap_or_default();
                row.into_session(users)
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn find_session_by_id(&self, id: SessionId) -> Result<Option<Session>, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, SessionRow>(&format!(
            "SELECT {SESSION_COLUMNS} FROM sessions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let session = match row {
            Some(row) => {
                let users = participants_of(&mut tx, row.id).await?;
                Some(row.into_session(users))
            }
            None => None,
        };

        tx.commit().await?;

        Ok(session)
    }

    #[instrument(skip(self))]
    async fn save_session(&self, draft: SessionDraft) -> Result<Session, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = match draft.id {
            None => {
                sqlx::query_as::<_, SessionRow>(&format!(
                    "INSERT INTO sessions (name, date, description, teacher_id)
                     VALUES ($1, $2, $3, $4)
                     RETURNING {SESSION_COLUMNS}"
                ))
                .bind(&draft.name)
                .bind(draft.date)
                .bind(&draft.description)
                .bind(draft.teacher_id)
                .fetch_one(&mut *tx)
                .await?
            }
            Some(id) => {
                let row = sqlx::query_as::<_, SessionRow>(&format!(
                    "INSERT INTO sessions (id, name, date, description, teacher_id)
                     VALUES ($1, $2, $3, $4, $5)
                     ON CONFLICT (id) DO UPDATE SET
                        name = EXCLUDED.name,
                        date = EXCLUDED.date,
                        description = EXCLUDED.description,
                        teacher_id = EXCLUDED.teacher_id,
                        updated_at = NOW()
                     RETURNING {SESSION_COLUMNS}"
                ))
                .bind(id)
                .bind(&draft.name)
                .bind(draft.date)
                .bind(&draft.description)
                .bind(draft.teacher_id)
                .fetch_one(&mut *tx)
                .await?;

                // explicit ids bypass the identity sequence; keep it ahead of them
                sqlx::query(
                    "SELECT setval(pg_get_serial_sequence('sessions', 'id'), \
                     GREATEST((SELECT MAX(id) FROM sessions), 1))",
                )
                .execute(&mut *tx)
                .await?;

                row
            }
        };

        let user_ids: Vec<i64> = draft.users.iter().map(|id| id.into_inner()).collect();

        sqlx::query("DELETE FROM participate WHERE session_id = $1")
            .bind(row.id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO participate (session_id, user_id)
             SELECT $1, UNNEST($2::BIGINT[])
             ON CONFLICT DO NOTHING",
        )
        .bind(row.id)
        .bind(&user_ids)
        .execute(&mut *tx)
        .await?;

        let users = participants_of(&mut tx, row.id).await?;

        tx.commit().await?;

        Ok(row.into_session(users))
    }

    #[instrument(skip(self))]
    async fn delete_session(&self, id: SessionId) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn draft(name: &str) -> SessionDraft {
        SessionDraft {
            id: None,
            name: name.to_string(),
            date: Utc::now() + Duration::days(1),
            description: "Postgres session".to_string(),
            teacher_id: Some(TeacherId::new(1)),
            users: vec![],
        }
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL server at DATABASE_URL"]
    async fn test_seeded_teachers_and_admin(pool: PgPool) {
        let store = PgStore::new(pool);

        let teachers = store.find_all_teachers().await.unwrap();
        assert_eq!(teachers.len(), 2);

        let admin = store.find_user_by_email("yoga@studio.com").await.unwrap();
        assert!(admin.unwrap().admin);
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL server at DATABASE_URL"]
    async fn test_save_session_and_participants(pool: PgPool) {
        let store = PgStore::new(pool);

        let created = store.save_session(draft("Hatha")).await.unwrap();
        assert!(created.users.is_empty());

        let mut next = SessionDraft::from(&created);
        next.users = vec![UserId::new(1), UserId::new(1)];
        let saved = store.save_session(next).await.unwrap();
        assert_eq!(saved.id, created.id);
        assert_eq!(saved.users, vec![UserId::new(1)]);

        let loaded = store.find_session_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(loaded.users, vec![UserId::new(1)]);
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL server at DATABASE_URL"]
    async fn test_save_with_unknown_id_creates_row(pool: PgPool) {
        let store = PgStore::new(pool);

        let mut upsert = draft("Upserted");
        upsert.id = Some(SessionId::new(40));
        let saved = store.save_session(upsert).await.unwrap();
        assert_eq!(saved.id, SessionId::new(40));

        let fresh = store.save_session(draft("After upsert")).await.unwrap();
        assert!(fresh.id > SessionId::new(40));
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires a PostgreSQL server at DATABASE_URL"]
    async fn test_delete_user_cascades_participation(pool: PgPool) {
        let store = PgStore::new(pool);

        let user = store
            .create_user(NewUser {
                email: "member@studio.com".to_string(),
                last_name: "Member".to_string(),
                first_name: "Studio".to_string(),
                password: "hash".to_string(),
                admin: false,
            })
            .await
            .unwrap();

        let mut with_user = draft("Cascade");
        with_user.users = vec![user.id];
        let session = store.save_session(with_user).await.unwrap();

        assert!(store.delete_user(user.id).await.unwrap());
        let session = store.find_session_by_id(session.id).await.unwrap().unwrap();
        assert!(session.users.is_empty());
        assert!(!store.delete_user(user.id).await.unwrap());
    }
}
