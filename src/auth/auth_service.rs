use std::sync::Arc;

use super::password::{verify_password, verify_unknown_user, INVALID_CREDENTIALS};
use crate::error::{AppError, Result};
use crate::user::user_repository::UserRepository;

#[derive(Clone)]
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Succeeds when `username` exists and `password` matches its stored hash.
    ///
    /// Unknown users and wrong passwords produce the same error.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await
            .map_err(|e| AppError::Server(e.to_string()))?;

        // bcrypt runs whether or not the user exists
        let password = password.to_owned();
        let matches = tokio::task::spawn_blocking(move || match user {
            Some(user) => verify_password(&password, &user.password_hash),
            None => verify_unknown_user(&password),
        })
        .await
        .map_err(|e| AppError::Server(e.to_string()))??;

        if !matches {
            tracing::debug!(username, "Rejected login");
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS));
        }

        tracing::info!(username, "User logged in");
        Ok(())
    }
}
