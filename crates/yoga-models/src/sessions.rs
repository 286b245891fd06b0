//! Scheduled yoga sessions and their participants.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{SessionId, TeacherId, UserId};
use crate::validation::not_blank;

/// A session with its participant set, as loaded from the store.
///
/// `users` never holds the same id twice; use [`Session::add_participant`]
/// and [`Session::remove_participant`] to keep it that way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: SessionId,
    pub name: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub teacher_id: Option<TeacherId>,
    pub users: Vec<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn has_participant(&self, user_id: UserId) -> bool {
        self.users.contains(&user_id)
    }

    /// Returns `false` if the user was already participating.
    pub fn add_participant(&mut self, user_id: UserId) -> bool {
        if self.has_participant(user_id) {
            return false;
        }
        self.users.push(user_id);
        true
    }

    /// Returns `false` if the user was not participating.
    pub fn remove_participant(&mut self, user_id: UserId) -> bool {
        let before = self.users.len();
        self.users.retain(|id| *id != user_id);
        self.users.len() != before
    }
}

/// The writable part of a session, handed to `SessionRepository::save`.
///
/// With `id: None` the store inserts a new row; with `Some(id)` it writes that
/// row, creating it if it does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDraft {
    pub id: Option<SessionId>,
    pub name: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub teacher_id: Option<TeacherId>,
    pub users: Vec<UserId>,
}

impl From<&Session> for SessionDraft {
    fn from(session: &Session) -> Self {
        Self {
            id: Some(session.id),
            name: session.name.clone(),
            date: session.date,
            description: session.description.clone(),
            teacher_id: session.teacher_id,
            users: session.users.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    #[serde(default)]
    pub id: Option<SessionId>,
    #[validate(length(max = 50), custom(function = "not_blank"))]
    #[schema(example = "Morning Vinyasa")]
    pub name: String,
    /// RFC 3339 timestamp, or a bare `YYYY-MM-DD` date taken as midnight UTC.
    #[serde(deserialize_with = "deserialize_session_date")]
    pub date: DateTime<Utc>,
    #[serde(rename = "teacher_id")]
    #[validate(required(message = "teacher_id is required"))]
    pub teacher_id: Option<TeacherId>,
    #[validate(length(max = 2500))]
    pub description: String,
    #[serde(default)]
    pub users: Vec<UserId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Parses a session date as sent by clients: either a full timestamp or a
/// calendar date.
pub fn parse_session_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = raw.parse::<DateTime<Utc>>() {
        return Some(timestamp);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|day| day.and_time(NaiveTime::MIN).and_utc())
}

fn deserialize_session_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_session_date(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid date `{}`, expected YYYY-MM-DD or an RFC 3339 timestamp",
            raw
        ))
    })
}

impl From<&Session> for SessionDto {
    fn from(session: &Session) -> Self {
        Self {
            id: Some(session.id),
            name: session.name.clone(),
            date: session.date,
            teacher_id: session.teacher_id,
            description: session.description.clone(),
            users: session.users.clone(),
            created_at: Some(session.created_at),
            updated_at: Some(session.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_session() -> Session {
        Session {
            id: SessionId::new(1),
            name: "Session de test 1".to_string(),
            date: Utc::now(),
            description: "Première session de test".to_string(),
            teacher_id: Some(TeacherId::new(1)),
            users: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_participant_is_idempotent_guarded() {
        let mut session = sample_session();

        assert!(session.add_participant(UserId::new(2)));
        assert!(!session.add_participant(UserId::new(2)));
        assert_eq!(session.users, vec![UserId::new(2)]);
    }

    #[test]
    fn test_remove_participant() {
        let mut session = sample_session();
        session.add_participant(UserId::new(2));
        session.add_participant(UserId::new(3));

        assert!(session.remove_participant(UserId::new(2)));
        assert!(!session.remove_participant(UserId::new(2)));
        assert_eq!(session.users, vec![UserId::new(3)]);
    }

    #[test]
    fn test_dto_wire_format() {
        let dto = SessionDto::from(&sample_session());
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["teacher_id"], 1);
        assert_eq!(json["users"], json!([]));
        assert!(json.get("createdAt").is_some());
        assert!(json.get("teacherId").is_none());
    }

    #[test]
    fn test_dto_deserializes_minimal_payload() {
        let dto: SessionDto = serde_json::from_value(json!({
            "name": "Yin",
            "date": "2024-01-05T10:00:00Z",
            "teacher_id": 2,
            "description": "Slow practice"
        }))
        .unwrap();

        assert_eq!(dto.id, None);
        assert_eq!(dto.teacher_id, Some(TeacherId::new(2)));
        assert!(dto.users.is_empty());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_dto_accepts_plain_date() {
        let dto: SessionDto = serde_json::from_value(json!({
            "name": "Yin",
            "date": "2024-01-05",
            "teacher_id": 2,
            "description": "Slow practice"
        }))
        .unwrap();

        assert_eq!(
            dto.date,
            "2024-01-05T00:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn test_parse_session_date() {
        assert_eq!(
            parse_session_date("2024-01-05T10:30:00+02:00"),
            Some("2024-01-05T08:30:00Z".parse::<DateTime<Utc>>().unwrap())
        );
        assert!(parse_session_date("2024-13-05").is_none());
        assert!(parse_session_date("05/01/2024").is_none());
        assert!(parse_session_date("").is_none());
    }

    #[test]
    fn test_dto_validation() {
        let mut dto = SessionDto::from(&sample_session());
        dto.name = "   ".to_string();
        assert!(dto.validate().is_err());

        let mut dto = SessionDto::from(&sample_session());
        dto.teacher_id = None;
        assert!(dto.validate().is_err());

        let mut dto = SessionDto::from(&sample_session());
        dto.description = "a".repeat(2501);
        assert!(dto.validate().is_err());
    }
}
