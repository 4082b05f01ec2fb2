use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::ticket::application::domain::entities::TicketStatus;
use crate::ticket::application::ports::outgoing::{
    TicketQuery, TicketQueryError, TicketRepository, TicketRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CancelTicketError {
    #[error("Ticket not found")]
    TicketNotFound,

    /// A used ticket stays used; entry already happened.
    #[error("Cannot cancel a used ticket")]
    AlreadyUsed { used_at: Option<DateTime<Utc>> },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TicketRepositoryError> for CancelTicketError {
    fn from(e: TicketRepositoryError) -> Self {
        CancelTicketError::RepositoryError(e.to_string())
    }
}

impl From<TicketQueryError> for CancelTicketError {
    fn from(e: TicketQueryError) -> Self {
        CancelTicketError::RepositoryError(e.to_string())
    }
}

#[async_trait]
pub trait ICancelTicketUseCase: Send + Sync {
    async fn execute(&self, ticket_id: Uuid) -> Result<(), CancelTicketError>;
}

/// Cancels an active ticket via the store's compare-and-swap. Cancelling an
/// already-cancelled ticket is a no-op; cancelling a used ticket is always
/// rejected, including when a concurrent redemption wins the race.
#[derive(Clone)]
pub struct CancelTicketUseCase<R, Q>
where
    R: TicketRepository,
    Q: TicketQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> CancelTicketUseCase<R, Q>
where
    R: TicketRepository,
    Q: TicketQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> ICancelTicketUseCase for CancelTicketUseCase<R, Q>
where
    R: TicketRepository,
    Q: TicketQuery,
{
    async fn execute(&self, ticket_id: Uuid) -> Result<(), CancelTicketError> {
        let ticket = self
            .query
            .find_by_id(ticket_id)
            .await?
            .ok_or(CancelTicketError::TicketNotFound)?;

        match ticket.status {
            TicketStatus::Used => {
                return Err(CancelTicketError::AlreadyUsed {
                    used_at: ticket.used_at,
                });
            }
            TicketStatus::Cancelled => return Ok(()),
            TicketStatus::Active => {}
        }

        let won = self
            .repository
            .transition_status(ticket_id, TicketStatus::Active, TicketStatus::Cancelled, None)
            .await?;

        if !won {
            // Raced with another writer; only a redemption can beat us here.
            return match self.query.find_by_id(ticket_id).await? {
                Some(current) if current.status == TicketStatus::Used => {
                    Err(CancelTicketError::AlreadyUsed {
                        used_at: current.used_at,
                    })
                }
                Some(_) => Ok(()),
                None => Err(CancelTicketError::TicketNotFound),
            };
        }

        Ok(())
    }
}
