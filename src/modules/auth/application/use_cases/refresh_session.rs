use async_trait::async_trait;
use chrono::Utc;
use std::fmt;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{
    RefreshTokenRepository, RefreshTokenRepositoryError, TokenError, TokenProvider, UserQuery,
    UserQueryError,
};

#[derive(Debug, Clone)]
pub struct RefreshOutput {
    pub access_token: String,
}

#[derive(Debug, Clone)]
pub enum RefreshError {
    InvalidRefreshToken,
    AccountDisabled,
    TokenGenerationFailed(String),
    RepositoryError(String),
}

impl fmt::Display for RefreshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshError::InvalidRefreshToken => write!(f, "Invalid refresh token"),
            RefreshError::AccountDisabled => write!(f, "Account has been disabled"),
            RefreshError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            RefreshError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RefreshError {}

impl From<RefreshTokenRepositoryError> for RefreshError {
    fn from(err: RefreshTokenRepositoryError) -> Self {
        let RefreshTokenRepositoryError::DatabaseError(msg) = err;
        RefreshError::RepositoryError(msg)
    }
}

impl From<UserQueryError> for RefreshError {
    fn from(err: UserQueryError) -> Self {
        let UserQueryError::DatabaseError(msg) = err;
        RefreshError::RepositoryError(msg)
    }
}

#[async_trait]
pub trait IRefreshSessionUseCase {
    async fn execute(&self, refresh_token: &str) -> Result<RefreshOutput, RefreshError>;
}

pub struct RefreshSessionUseCase<R, Q, T>
where
    R: RefreshTokenRepository,
    Q: UserQuery,
    T: TokenProvider,
{
    refresh_token_repository: Arc<R>,
    user_query: Arc<Q>,
    token_provider: Arc<T>,
}

impl<R, Q, T> RefreshSessionUseCase<R, Q, T>
where
    R: RefreshTokenRepository,
    Q: UserQuery,
    T: TokenProvider,
{
    pub fn new(refresh_token_repository: Arc<R>, user_query: Arc<Q>, token_provider: Arc<T>) -> Self {
        Self {
            refresh_token_repository,
            user_query,
            token_provider,
        }
    }
}

#[async_trait]
impl<R, Q, T> IRefreshSessionUseCase for RefreshSessionUseCase<R, Q, T>
where
    R: RefreshTokenRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
    T: TokenProvider + Send + Sync,
{
    async fn execute(&self, refresh_token: &str) -> Result<RefreshOutput, RefreshError> {
        // The JWT must verify AND the session row must still exist; a deleted
        // row means the session was revoked.
        let claims = self
            .token_provider
            .verify_token(refresh_token)
            .map_err(|err| match err {
                TokenError::EncodingError(msg) => RefreshError::TokenGenerationFailed(msg),
                _ => RefreshError::InvalidRefreshToken,
            })?;
        if claims.token_type != "refresh" {
            return Err(RefreshError::InvalidRefreshToken);
        }

        let row = self
            .refresh_token_repository
            .find_by_token(refresh_token)
            .await?
            .ok_or(RefreshError::InvalidRefreshToken)?;
        if row.is_expired(Utc::now()) || row.user_id != claims.sub {
            return Err(RefreshError::InvalidRefreshToken);
        }

        let user = self
            .user_query
            .find_by_id(claims.sub)
            .await?
            .ok_or(RefreshError::InvalidRefreshToken)?;
        if !user.is_active {
            return Err(RefreshError::AccountDisabled);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.role)
            .map_err(|err| RefreshError::TokenGenerationFailed(err.to_string()))?;

        Ok(RefreshOutput { access_token })
    }
}
