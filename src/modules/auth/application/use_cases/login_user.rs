use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::fmt;
use std::sync::Arc;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{
    HashError, NewRefreshToken, PasswordHasher, RefreshTokenRepository,
    RefreshTokenRepositoryError, TokenError, TokenProvider, UserQuery, UserQueryError,
};

#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Result<Self, LoginError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() || !email_address::EmailAddress::is_valid(&email) {
            return Err(LoginError::InvalidCredentials);
        }
        if password.is_empty() {
            return Err(LoginError::InvalidCredentials);
        }
        Ok(Self {
            email,
            password: password.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Debug, Clone)]
pub struct LoginOutput {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone)]
pub enum LoginError {
    InvalidCredentials,
    AccountDisabled,
    PasswordVerificationFailed,
    TokenGenerationFailed(String),
    RepositoryError(String),
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid email or password"),
            LoginError::AccountDisabled => write!(f, "Account has been disabled"),
            LoginError::PasswordVerificationFailed => write!(f, "Password verification failed"),
            LoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            LoginError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

impl From<UserQueryError> for LoginError {
    fn from(err: UserQueryError) -> Self {
        let UserQueryError::DatabaseError(msg) = err;
        LoginError::RepositoryError(msg)
    }
}

impl From<RefreshTokenRepositoryError> for LoginError {
    fn from(err: RefreshTokenRepositoryError) -> Self {
        let RefreshTokenRepositoryError::DatabaseError(msg) = err;
        LoginError::RepositoryError(msg)
    }
}

impl From<HashError> for LoginError {
    fn from(_: HashError) -> Self {
        LoginError::PasswordVerificationFailed
    }
}

impl From<TokenError> for LoginError {
    fn from(err: TokenError) -> Self {
        LoginError::TokenGenerationFailed(err.to_string())
    }
}

#[async_trait]
pub trait ILoginUserUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<LoginOutput, LoginError>;
}

pub struct LoginUserUseCase<Q, R, H, T>
where
    Q: UserQuery,
    R: RefreshTokenRepository,
    H: PasswordHasher,
    T: TokenProvider,
{
    user_query: Arc<Q>,
    refresh_token_repository: Arc<R>,
    password_hasher: Arc<H>,
    token_provider: Arc<T>,
    refresh_token_ttl: Duration,
}

impl<Q, R, H, T> LoginUserUseCase<Q, R, H, T>
where
    Q: UserQuery,
    R: RefreshTokenRepository,
    H: PasswordHasher,
    T: TokenProvider,
{
    pub fn new(
        user_query: Arc<Q>,
        refresh_token_repository: Arc<R>,
        password_hasher: Arc<H>,
        token_provider: Arc<T>,
        refresh_token_ttl: Duration,
    ) -> Self {
        Self {
            user_query,
            refresh_token_repository,
            password_hasher,
            token_provider,
            refresh_token_ttl,
        }
    }
}

#[async_trait]
impl<Q, R, H, T> ILoginUserUseCase for LoginUserUseCase<Q, R, H, T>
where
    Q: UserQuery + Send + Sync,
    R: RefreshTokenRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
    T: TokenProvider + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginOutput, LoginError> {
        let user = self
            .user_query
            .find_by_email(request.email())
            .await?
            .ok_or(LoginError::InvalidCredentials)?;

        if !user.is_active {
            return Err(LoginError::AccountDisabled);
        }

        let matches = self
            .password_hasher
            .verify_password(&request.password, &user.password_hash)?;
        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.role)?;
        let refresh_token = self
            .token_provider
            .generate_refresh_token(user.id, user.role)?;

        let now = Utc::now();
        self.refresh_token_repository
            .delete_expired_for_user(user.id, now)
            .await?;
        self.refresh_token_repository
            .store(NewRefreshToken {
                user_id: user.id,
                token: refresh_token.clone(),
                expires_at: now + self.refresh_token_ttl,
            })
            .await?;

        Ok(LoginOutput {
            user,
            access_token,
            refresh_token,
        })
    }
}
