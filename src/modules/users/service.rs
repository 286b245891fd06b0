use anyhow::anyhow;
use tracing::{info, instrument};

use yoga_core::AppError;
use yoga_db::Store;
use yoga_models::{User, UserId};

pub struct UserService;

impl UserService {
    #[instrument(skip(store))]
    pub async fn find_by_id(store: &dyn Store, id: UserId) -> Result<Option<User>, AppError> {
        store.find_user_by_id(id).await
    }

    #[instrument(skip(store))]
    pub async fn delete(store: &dyn Store, id: UserId) -> Result<(), AppError> {
        if !store.delete_user(id).await? {
            return Err(AppError::not_found(anyhow!("User not found")));
        }
        info!(user_id = %id, "User deleted");
        Ok(())
    }

    /// Deletes `id` on behalf of the caller identified by `caller_email`.
    ///
    /// Only the account owner may delete it: 404 if the user does not exist,
    /// 401 if it belongs to someone else.
    #[instrument(skip(store))]
    pub async fn delete_own_account(
        store: &dyn Store,
        id: UserId,
        caller_email: &str,
    ) -> Result<(), AppError> {
        let user = store
            .find_user_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("User not found")))?;

        if user.email != caller_email {
            return Err(AppError::unauthorized(anyhow!(
                "You can only delete your own account"
            )));
        }

        Self::delete(store, id).await
    }
}
