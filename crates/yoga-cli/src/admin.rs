//! Admin account creation.

use anyhow::{Result, bail};

use yoga_core::hash_password;
use yoga_db::Store;
use yoga_models::{NewUser, User};

pub struct AdminAccount {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Creates an admin user, refusing to touch an existing account.
pub async fn create_admin(store: &dyn Store, account: AdminAccount) -> Result<User> {
    let email = account.email.trim().to_string();
    if email.is_empty() {
        bail!("email must not be empty");
    }
    if account.password.len() < 6 {
        bail!("password must be at least 6 characters");
    }
    if store
        .user_exists_by_email(&email)
        .await
        .map_err(|e| e.error)?
    {
        bail!("a user with email {} already exists", email);
    }

    let password = hash_password(&account.password).map_err(|e| e.error)?;
    let user = store
        .create_user(NewUser {
            email,
            last_name: account.last_name,
            first_name: account.first_name,
            password,
            admin: true,
        })
        .await
        .map_err(|e| e.error)?;

    Ok(user)
}
