use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone)]
pub struct UserPage {
    pub items: Vec<User>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError>;

    /// Lookup by normalized (lowercase) email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;

    /// Newest-first listing for the admin screen
    async fn list(&self, page: u32, limit: u32) -> Result<UserPage, UserQueryError>;
}
