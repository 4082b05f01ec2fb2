use async_trait::async_trait;

use crate::ticket::application::ports::outgoing::ticket_query::{
    PageRequest, PageResult, TicketListFilter, TicketView,
};
use crate::ticket::application::ports::outgoing::{TicketQuery, TicketQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTicketsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IListTicketsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: TicketListFilter,
        page: PageRequest,
    ) -> Result<PageResult<TicketView>, ListTicketsError>;
}

#[derive(Clone)]
pub struct ListTicketsUseCase<Q>
where
    Q: TicketQuery,
{
    query: Q,
}

impl<Q> ListTicketsUseCase<Q>
where
    Q: TicketQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListTicketsUseCase for ListTicketsUseCase<Q>
where
    Q: TicketQuery,
{
    async fn execute(
        &self,
        filter: TicketListFilter,
        page: PageRequest,
    ) -> Result<PageResult<TicketView>, ListTicketsError> {
        // Page bounds are clamped here so every caller gets the same limits
        let page = PageRequest {
            page: page.page.max(1),
            limit: page.limit.clamp(1, 100),
        };

        let filter = TicketListFilter {
            search: filter
                .search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            ..filter
        };

        self.query
            .list(filter, page)
            .await
            .map_err(|TicketQueryError::DatabaseError(e)| ListTicketsError::QueryError(e))
    }
}
