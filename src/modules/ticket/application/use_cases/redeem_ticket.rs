use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::ticket::application::domain::entities::TicketStatus;
use crate::ticket::application::ports::outgoing::ticket_query::TicketView;
use crate::ticket::application::ports::outgoing::{
    TicketQuery, TicketQueryError, TicketRepository, TicketRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RedeemTicketError {
    #[error("Ticket not found")]
    TicketNotFound,

    /// The ticket was not active at commit time. Carries what was actually
    /// observed so staff see the reason, not a generic rejection.
    #[error("Ticket is not active")]
    NotActive {
        status: TicketStatus,
        used_at: Option<DateTime<Utc>>,
    },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TicketRepositoryError> for RedeemTicketError {
    fn from(e: TicketRepositoryError) -> Self {
        RedeemTicketError::RepositoryError(e.to_string())
    }
}

impl From<TicketQueryError> for RedeemTicketError {
    fn from(e: TicketQueryError) -> Self {
        RedeemTicketError::RepositoryError(e.to_string())
    }
}

#[async_trait]
pub trait IRedeemTicketUseCase: Send + Sync {
    async fn execute(&self, ticket_id: Uuid) -> Result<TicketView, RedeemTicketError>;
}

/// Marks a ticket used at event entry. The repository's compare-and-swap is
/// the only mutation; with N concurrent redemptions of one ticket, exactly
/// one CAS succeeds and every loser re-reads the row to report the terminal
/// state it lost to.
#[derive(Clone)]
pub struct RedeemTicketUseCase<R, Q>
where
    R: TicketRepository,
    Q: TicketQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> RedeemTicketUseCase<R, Q>
where
    R: TicketRepository,
    Q: TicketQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }

    async fn observed_state(&self, ticket_id: Uuid) -> RedeemTicketError {
        match self.query.find_by_id(ticket_id).await {
            Ok(Some(ticket)) => RedeemTicketError::NotActive {
                status: ticket.status,
                used_at: ticket.used_at,
            },
            Ok(None) => RedeemTicketError::TicketNotFound,
            Err(e) => RedeemTicketError::RepositoryError(e.to_string()),
        }
    }
}

#[async_trait]
impl<R, Q> IRedeemTicketUseCase for RedeemTicketUseCase<R, Q>
where
    R: TicketRepository,
    Q: TicketQuery,
{
    async fn execute(&self, ticket_id: Uuid) -> Result<TicketView, RedeemTicketError> {
        let ticket = self
            .query
            .find_by_id(ticket_id)
            .await?
            .ok_or(RedeemTicketError::TicketNotFound)?;

        if ticket.status != TicketStatus::Active {
            return Err(RedeemTicketError::NotActive {
                status: ticket.status,
                used_at: ticket.used_at,
            });
        }

        let used_at = Utc::now();
        let won = self
            .repository
            .transition_status(
                ticket_id,
                TicketStatus::Active,
                TicketStatus::Used,
                Some(used_at),
            )
            .await?;

        if !won {
            // Lost the race; report whatever state the winner left behind.
            return Err(self.observed_state(ticket_id).await);
        }

        Ok(TicketView {
            status: TicketStatus::Used,
            used_at: Some(used_at),
            ..ticket
        })
    }
}
