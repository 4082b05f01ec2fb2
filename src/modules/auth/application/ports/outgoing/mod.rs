pub mod password_hasher;
pub mod refresh_token_repository;
pub mod token_provider;
pub mod user_query;
pub mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use refresh_token_repository::{
    NewRefreshToken, RefreshTokenRepository, RefreshTokenRepositoryError,
};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
pub use user_query::{UserPage, UserQuery, UserQueryError};
pub use user_repository::{NewUser, UserPatch, UserRepository, UserRepositoryError};
