use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    RefreshTokenRepository, RefreshTokenRepositoryError, UserPatch, UserRepository,
    UserRepositoryError,
};

#[derive(Debug, Clone)]
pub enum DeactivateUserError {
    UserNotFound,
    CannotDeactivateSelf,
    RepositoryError(String),
}

impl fmt::Display for DeactivateUserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeactivateUserError::UserNotFound => write!(f, "User not found"),
            DeactivateUserError::CannotDeactivateSelf => {
                write!(f, "You cannot deactivate your own account")
            }
            DeactivateUserError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for DeactivateUserError {}

impl From<UserRepositoryError> for DeactivateUserError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::UserNotFound => DeactivateUserError::UserNotFound,
            other => DeactivateUserError::RepositoryError(other.to_string()),
        }
    }
}

impl From<RefreshTokenRepositoryError> for DeactivateUserError {
    fn from(err: RefreshTokenRepositoryError) -> Self {
        let RefreshTokenRepositoryError::DatabaseError(msg) = err;
        DeactivateUserError::RepositoryError(msg)
    }
}

#[async_trait]
pub trait IDeactivateUserUseCase {
    async fn execute(&self, actor_id: Uuid, target_id: Uuid) -> Result<(), DeactivateUserError>;
}

pub struct DeactivateUserUseCase<R, S>
where
    R: UserRepository,
    S: RefreshTokenRepository,
{
    user_repository: Arc<R>,
    refresh_token_repository: Arc<S>,
}

impl<R, S> DeactivateUserUseCase<R, S>
where
    R: UserRepository,
    S: RefreshTokenRepository,
{
    pub fn new(user_repository: Arc<R>, refresh_token_repository: Arc<S>) -> Self {
        Self {
            user_repository,
            refresh_token_repository,
        }
    }
}

#[async_trait]
impl<R, S> IDeactivateUserUseCase for DeactivateUserUseCase<R, S>
where
    R: UserRepository + Send + Sync,
    S: RefreshTokenRepository + Send + Sync,
{
    async fn execute(&self, actor_id: Uuid, target_id: Uuid) -> Result<(), DeactivateUserError> {
        // An admin locking themselves out of the last admin account is not
        // recoverable from the UI, so self-deactivation is refused outright.
        if actor_id == target_id {
            return Err(DeactivateUserError::CannotDeactivateSelf);
        }

        self.user_repository
            .update_user(
                target_id,
                UserPatch {
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await?;

        self.refresh_token_repository.delete_for_user(target_id).await?;
        Ok(())
    }
}
