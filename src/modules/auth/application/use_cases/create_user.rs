use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::auth::application::domain::entities::{User, UserRole};
use crate::auth::application::ports::outgoing::{
    HashError, NewUser, PasswordHasher, UserRepository, UserRepositoryError,
};

const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    email: String,
    name: String,
    password: String,
    role: UserRole,
}

impl CreateUserRequest {
    pub fn new(
        email: &str,
        name: &str,
        password: &str,
        role: &str,
    ) -> Result<Self, CreateUserError> {
        let email = email.trim().to_lowercase();
        if !email_address::EmailAddress::is_valid(&email) {
            return Err(CreateUserError::InvalidEmail);
        }
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(CreateUserError::EmptyName);
        }
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(CreateUserError::PasswordTooShort);
        }
        let role = UserRole::from_str(role).map_err(|_| CreateUserError::InvalidRole)?;
        Ok(Self {
            email,
            name,
            password: password.to_string(),
            role,
        })
    }
}

#[derive(Debug, Clone)]
pub enum CreateUserError {
    InvalidEmail,
    EmptyName,
    PasswordTooShort,
    InvalidRole,
    EmailAlreadyTaken,
    HashingFailed,
    RepositoryError(String),
}

impl fmt::Display for CreateUserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateUserError::InvalidEmail => write!(f, "A valid email address is required"),
            CreateUserError::EmptyName => write!(f, "Name cannot be empty"),
            CreateUserError::PasswordTooShort => write!(
                f,
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            ),
            CreateUserError::InvalidRole => {
                write!(f, "Role must be one of admin, sales, scanner")
            }
            CreateUserError::EmailAlreadyTaken => {
                write!(f, "A user with this email already exists")
            }
            CreateUserError::HashingFailed => write!(f, "Password hashing failed"),
            CreateUserError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for CreateUserError {}

impl From<UserRepositoryError> for CreateUserError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::UserAlreadyExists => CreateUserError::EmailAlreadyTaken,
            other => CreateUserError::RepositoryError(other.to_string()),
        }
    }
}

impl From<HashError> for CreateUserError {
    fn from(_: HashError) -> Self {
        CreateUserError::HashingFailed
    }
}

#[async_trait]
pub trait ICreateUserUseCase {
    async fn execute(&self, request: CreateUserRequest) -> Result<User, CreateUserError>;
}

pub struct CreateUserUseCase<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    user_repository: Arc<R>,
    password_hasher: Arc<H>,
}

impl<R, H> CreateUserUseCase<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    pub fn new(user_repository: Arc<R>, password_hasher: Arc<H>) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R, H> ICreateUserUseCase for CreateUserUseCase<R, H>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(&self, request: CreateUserRequest) -> Result<User, CreateUserError> {
        let password_hash = self.password_hasher.hash_password(&request.password)?;
        let user = self
            .user_repository
            .create_user(NewUser {
                email: request.email,
                name: request.name,
                password_hash,
                role: request.role,
            })
            .await?;
        Ok(user)
    }
}
