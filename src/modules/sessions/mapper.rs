use std::collections::HashSet;

use tracing::instrument;

use yoga_core::AppError;
use yoga_db::Store;
use yoga_models::{SessionDraft, SessionDto, UserId};

pub struct SessionMapper;

impl SessionMapper {
    /// Turns an incoming DTO into a draft, resolving references against the
    /// store: an unknown `teacher_id` leaves the session without a teacher,
    /// and unknown or repeated participant ids are dropped.
    ///
    /// The DTO's own `id` is ignored; callers set it.
    #[instrument(skip(store))]
    pub async fn to_draft(store: &dyn Store, dto: SessionDto) -> Result<SessionDraft, AppError> {
        let teacher_id = match dto.teacher_id {
            Some(id) => store.find_teacher_by_id(id).await?.map(|teacher| teacher.id),
            None => None,
        };

        let mut seen = HashSet::new();
        let mut users: Vec<UserId> = Vec::with_capacity(dto.users.len());
        for user_id in dto.users {
            if !seen.insert(user_id) {
                continue;
            }
            if store.find_user_by_id(user_id).await?.is_some() {
                users.push(user_id);
            }
        }

        Ok(SessionDraft {
            id: None,
            name: dto.name,
            date: dto.date,
            description: dto.description,
            teacher_id,
            users,
        })
    }
}
