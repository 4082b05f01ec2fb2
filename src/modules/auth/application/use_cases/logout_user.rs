use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{
    RefreshTokenRepository, RefreshTokenRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<RefreshTokenRepositoryError> for LogoutError {
    fn from(err: RefreshTokenRepositoryError) -> Self {
        let RefreshTokenRepositoryError::DatabaseError(msg) = err;
        LogoutError::RepositoryError(msg)
    }
}

#[async_trait]
pub trait ILogoutUserUseCase {
    async fn execute(&self, refresh_token: &str) -> Result<(), LogoutError>;
}

pub struct LogoutUserUseCase<R>
where
    R: RefreshTokenRepository,
{
    refresh_token_repository: Arc<R>,
}

impl<R> LogoutUserUseCase<R>
where
    R: RefreshTokenRepository,
{
    pub fn new(refresh_token_repository: Arc<R>) -> Self {
        Self {
            refresh_token_repository,
        }
    }
}

#[async_trait]
impl<R> ILogoutUserUseCase for LogoutUserUseCase<R>
where
    R: RefreshTokenRepository + Send + Sync,
{
    async fn execute(&self, refresh_token: &str) -> Result<(), LogoutError> {
        // Idempotent: logging out an already-revoked session is still a logout.
        self.refresh_token_repository
            .delete_by_token(refresh_token)
            .await?;
        Ok(())
    }
}
