use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::RefreshToken;

#[derive(Debug, Clone)]
pub struct NewRefreshToken {
    pub user_id: Uuid,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshTokenRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Refresh tokens live in Postgres, one row per live session; a JWT whose
/// row is gone is revoked no matter what its expiry claim says.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    async fn store(&self, token: NewRefreshToken) -> Result<(), RefreshTokenRepositoryError>;

    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<RefreshToken>, RefreshTokenRepositoryError>;

    /// Returns whether a row was actually deleted
    async fn delete_by_token(&self, token: &str) -> Result<bool, RefreshTokenRepositoryError>;

    /// Revokes every session for the user (password change, deactivation)
    async fn delete_for_user(&self, user_id: Uuid) -> Result<(), RefreshTokenRepositoryError>;

    /// Housekeeping sweep of rows past `now`
    async fn delete_expired_for_user(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<(), RefreshTokenRepositoryError>;
}
