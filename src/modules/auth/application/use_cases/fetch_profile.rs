use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IFetchProfileUseCase {
    async fn execute(&self, user_id: Uuid) -> Result<User, FetchProfileError>;
}

pub struct FetchProfileUseCase<Q>
where
    Q: UserQuery,
{
    user_query: Arc<Q>,
}

impl<Q> FetchProfileUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(user_query: Arc<Q>) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl<Q> IFetchProfileUseCase for FetchProfileUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<User, FetchProfileError> {
        self.user_query
            .find_by_id(user_id)
            .await
            .map_err(|UserQueryError::DatabaseError(msg)| FetchProfileError::QueryError(msg))?
            .ok_or(FetchProfileError::UserNotFound)
    }
}
