use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    HashError, PasswordHasher, RefreshTokenRepository, RefreshTokenRepositoryError,
    UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};

const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone)]
pub enum ChangePasswordError {
    UserNotFound,
    CurrentPasswordIncorrect,
    PasswordTooShort,
    HashingFailed,
    RepositoryError(String),
}

impl fmt::Display for ChangePasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangePasswordError::UserNotFound => write!(f, "User not found"),
            ChangePasswordError::CurrentPasswordIncorrect => {
                write!(f, "Current password is incorrect")
            }
            ChangePasswordError::PasswordTooShort => write!(
                f,
                "New password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            ),
            ChangePasswordError::HashingFailed => write!(f, "Password hashing failed"),
            ChangePasswordError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ChangePasswordError {}

impl From<UserQueryError> for ChangePasswordError {
    fn from(err: UserQueryError) -> Self {
        let UserQueryError::DatabaseError(msg) = err;
        ChangePasswordError::RepositoryError(msg)
    }
}

impl From<UserRepositoryError> for ChangePasswordError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::UserNotFound => ChangePasswordError::UserNotFound,
            other => ChangePasswordError::RepositoryError(other.to_string()),
        }
    }
}

impl From<RefreshTokenRepositoryError> for ChangePasswordError {
    fn from(err: RefreshTokenRepositoryError) -> Self {
        let RefreshTokenRepositoryError::DatabaseError(msg) = err;
        ChangePasswordError::RepositoryError(msg)
    }
}

impl From<HashError> for ChangePasswordError {
    fn from(_: HashError) -> Self {
        ChangePasswordError::HashingFailed
    }
}

#[async_trait]
pub trait IChangePasswordUseCase {
    async fn execute(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ChangePasswordError>;
}

pub struct ChangePasswordUseCase<Q, R, S, H>
where
    Q: UserQuery,
    R: UserRepository,
    S: RefreshTokenRepository,
    H: PasswordHasher,
{
    user_query: Arc<Q>,
    user_repository: Arc<R>,
    refresh_token_repository: Arc<S>,
    password_hasher: Arc<H>,
}

impl<Q, R, S, H> ChangePasswordUseCase<Q, R, S, H>
where
    Q: UserQuery,
    R: UserRepository,
    S: RefreshTokenRepository,
    H: PasswordHasher,
{
    pub fn new(
        user_query: Arc<Q>,
        user_repository: Arc<R>,
        refresh_token_repository: Arc<S>,
        password_hasher: Arc<H>,
    ) -> Self {
        Self {
            user_query,
            user_repository,
            refresh_token_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R, S, H> IChangePasswordUseCase for ChangePasswordUseCase<Q, R, S, H>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    S: RefreshTokenRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ChangePasswordError> {
        if new_password.len() < MIN_PASSWORD_LENGTH {
            return Err(ChangePasswordError::PasswordTooShort);
        }

        let user = self
            .user_query
            .find_by_id(user_id)
            .await?
            .ok_or(ChangePasswordError::UserNotFound)?;

        let matches = self
            .password_hasher
            .verify_password(current_password, &user.password_hash)?;
        if !matches {
            return Err(ChangePasswordError::CurrentPasswordIncorrect);
        }

        let new_hash = self.password_hasher.hash_password(new_password)?;
        self.user_repository
            .update_password(user_id, new_hash)
            .await?;

        // Every other session becomes invalid once the password changes.
        self.refresh_token_repository.delete_for_user(user_id).await?;

        Ok(())
    }
}
