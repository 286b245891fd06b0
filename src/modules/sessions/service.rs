use anyhow::anyhow;
use tracing::instrument;

use yoga_core::AppError;
use yoga_db::Store;
use yoga_models::{Session, SessionDraft, SessionId, UserId};

use crate::metrics::{track_participation, track_session_write};

pub struct SessionService;

impl SessionService {
    #[instrument(skip(store))]
    pub async fn create(store: &dyn Store, draft: SessionDraft) -> Result<Session, AppError> {
        let session = store.save_session(SessionDraft { id: None, ..draft }).await?;
        track_session_write("create");
        Ok(session)
    }

    #[instrument(skip(store))]
    pub async fn find_all(store: &dyn Store) -> Result<Vec<Session>, AppError> {
        store.find_all_sessions().await
    }

    #[instrument(skip(store))]
    pub async fn get_by_id(store: &dyn Store, id: SessionId) -> Result<Option<Session>, AppError> {
        store.find_session_by_id(id).await
    }

    /// Overwrites the session stored under `id`.
    ///
    /// There is no existence check: an unknown `id` creates the session with
    /// that id.
    #[instrument(skip(store))]
    pub async fn update(
        store: &dyn Store,
        id: SessionId,
        draft: SessionDraft,
    ) -> Result<Session, AppError> {
        let session = store
            .save_session(SessionDraft {
                id: Some(id),
                ..draft
            })
            .await?;
        track_session_write("update");
        Ok(session)
    }

    /// Returns `false` when there was no such session.
    #[instrument(skip(store))]
    pub async fn delete(store: &dyn Store, id: SessionId) -> Result<bool, AppError> {
        let deleted = store.delete_session(id).await?;
        if deleted {
            track_session_write("delete");
        }
        Ok(deleted)
    }

    #[instrument(skip(store))]
    pub async fn participate(
        store: &dyn Store,
        session_id: SessionId,
        user_id: UserId,
    ) -> Result<(), AppError> {
        let mut session = store
            .find_session_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Session not found")))?;

        if store.find_user_by_id(user_id).await?.is_none() {
            return Err(AppError::not_found(anyhow!("User not found")));
        }

        if !session.add_participant(user_id) {
            return Err(AppError::bad_request(anyhow!(
                "User already participates in this session"
            )));
        }

        store.save_session(SessionDraft::from(&session)).await?;
        track_participation("join");

        Ok(())
    }

    #[instrument(skip(store))]
    pub async fn no_longer_participate(
        store: &dyn Store,
        session_id: SessionId,
        user_id: UserId,
    ) -> Result<(), AppError> {
        let mut session = store
            .find_session_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Session not found")))?;

        if !session.remove_participant(user_id) {
            return Err(AppError::bad_request(anyhow!(
                "User does not participate in this session"
            )));
        }

        store.save_session(SessionDraft::from(&session)).await?;
        track_participation("leave");

        Ok(())
    }
}
