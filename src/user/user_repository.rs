use async_trait::async_trait;
use sqlx::types::Json;

use super::user_models::User;
use crate::{db::DbPool, error::StoreError};

/// Read-only access to the users collection.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;
}

#[derive(Clone)]
pub struct PgUserRepository {
    pool: DbPool,
}

impl PgUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_scalar::<_, Json<User>>(
            "SELECT data FROM usuarios WHERE data->>'Usuario' = $1 LIMIT 1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user.map(|Json(user)| user))
    }
}
