use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserRole};
use crate::auth::application::ports::outgoing::{UserPatch, UserRepository, UserRepositoryError};

/// Partial update coming from the admin screen; every field is optional and
/// validated before it becomes a [`UserPatch`].
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateUserRequest {
    fn into_patch(self) -> Result<UserPatch, UpdateUserError> {
        let email = match self.email {
            Some(raw) => {
                let email = raw.trim().to_lowercase();
                if !email_address::EmailAddress::is_valid(&email) {
                    return Err(UpdateUserError::InvalidEmail);
                }
                Some(email)
            }
            None => None,
        };
        let name = match self.name {
            Some(raw) => {
                let name = raw.trim().to_string();
                if name.is_empty() {
                    return Err(UpdateUserError::EmptyName);
                }
                Some(name)
            }
            None => None,
        };
        let role = match self.role {
            Some(raw) => {
                Some(UserRole::from_str(&raw).map_err(|_| UpdateUserError::InvalidRole)?)
            }
            None => None,
        };
        Ok(UserPatch {
            email,
            name,
            role,
            is_active: self.is_active,
        })
    }

    fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.name.is_none()
            && self.role.is_none()
            && self.is_active.is_none()
    }
}

#[derive(Debug, Clone)]
pub enum UpdateUserError {
    UserNotFound,
    InvalidEmail,
    EmptyName,
    InvalidRole,
    NothingToUpdate,
    EmailAlreadyTaken,
    RepositoryError(String),
}

impl fmt::Display for UpdateUserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateUserError::UserNotFound => write!(f, "User not found"),
            UpdateUserError::InvalidEmail => write!(f, "A valid email address is required"),
            UpdateUserError::EmptyName => write!(f, "Name cannot be empty"),
            UpdateUserError::InvalidRole => {
                write!(f, "Role must be one of admin, sales, scanner")
            }
            UpdateUserError::NothingToUpdate => write!(f, "No fields to update"),
            UpdateUserError::EmailAlreadyTaken => {
                write!(f, "A user with this email already exists")
            }
            UpdateUserError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for UpdateUserError {}

impl From<UserRepositoryError> for UpdateUserError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
            UserRepositoryError::UserAlreadyExists => UpdateUserError::EmailAlreadyTaken,
            UserRepositoryError::DatabaseError(msg) => UpdateUserError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait IUpdateUserUseCase {
    async fn execute(
        &self,
        user_id: Uuid,
        request: UpdateUserRequest,
    ) -> Result<User, UpdateUserError>;
}

pub struct UpdateUserUseCase<R>
where
    R: UserRepository,
{
    user_repository: Arc<R>,
}

impl<R> UpdateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R> IUpdateUserUseCase for UpdateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        request: UpdateUserRequest,
    ) -> Result<User, UpdateUserError> {
        if request.is_empty() {
            return Err(UpdateUserError::NothingToUpdate);
        }
        let patch = request.into_patch()?;
        let user = self.user_repository.update_user(user_id, patch).await?;
        Ok(user)
    }
}
