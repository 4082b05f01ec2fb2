use async_trait::async_trait;
use uuid::Uuid;

use crate::ticket::application::ports::outgoing::ticket_query::TicketView;
use crate::ticket::application::ports::outgoing::{TicketQuery, TicketQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchTicketError {
    #[error("Ticket not found")]
    TicketNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IFetchTicketUseCase: Send + Sync {
    async fn execute(&self, ticket_id: Uuid) -> Result<TicketView, FetchTicketError>;
}

#[derive(Clone)]
pub struct FetchTicketUseCase<Q>
where
    Q: TicketQuery,
{
    query: Q,
}

impl<Q> FetchTicketUseCase<Q>
where
    Q: TicketQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchTicketUseCase for FetchTicketUseCase<Q>
where
    Q: TicketQuery,
{
    async fn execute(&self, ticket_id: Uuid) -> Result<TicketView, FetchTicketError> {
        self.query
            .find_by_id(ticket_id)
            .await
            .map_err(|TicketQueryError::DatabaseError(e)| FetchTicketError::QueryError(e))?
            .ok_or(FetchTicketError::TicketNotFound)
    }
}
