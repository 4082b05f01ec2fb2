use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{UserPage, UserQuery, UserQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUsersError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IListUsersUseCase {
    async fn execute(&self, page: u32, limit: u32) -> Result<UserPage, ListUsersError>;
}

pub struct ListUsersUseCase<Q>
where
    Q: UserQuery,
{
    user_query: Arc<Q>,
}

impl<Q> ListUsersUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(user_query: Arc<Q>) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl<Q> IListUsersUseCase for ListUsersUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, page: u32, limit: u32) -> Result<UserPage, ListUsersError> {
        let page = page.max(1);
        let limit = limit.clamp(1, 100);
        self.user_query
            .list(page, limit)
            .await
            .map_err(|UserQueryError::DatabaseError(msg)| ListUsersError::QueryError(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::auth::application::use_cases::login_user::tests::{test_user, MockUserQuery};

    #[tokio::test]
    async fn lists_users_with_clamped_paging() {
        let uc = ListUsersUseCase::new(Arc::new(MockUserQuery {
            user: Some(test_user(UserRole::Sales, true)),
            should_fail: false,
        }));

        let result = uc.execute(0, 500).await.unwrap();
        assert_eq!(result.page, 1);
        assert_eq!(result.limit, 100);
        assert_eq!(result.items.len(), 1);
    }

    #[tokio::test]
    async fn query_failure_surfaces_as_error() {
        let uc = ListUsersUseCase::new(Arc::new(MockUserQuery {
            user: None,
            should_fail: true,
        }));
        assert!(matches!(
            uc.execute(1, 10).await,
            Err(ListUsersError::QueryError(_))
        ));
    }
}
