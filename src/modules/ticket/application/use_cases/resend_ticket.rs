use async_trait::async_trait;
use email_address::EmailAddress;
use uuid::Uuid;

use crate::ticket::application::ports::outgoing::ticket_query::TicketView;
use crate::ticket::application::ports::outgoing::{
    TicketNotificationError, TicketNotifier, TicketQuery, TicketQueryError, TicketRepository,
    TicketRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResendTicketError {
    #[error("Ticket not found")]
    TicketNotFound,

    #[error("Invalid email address")]
    InvalidEmail,

    /// Unlike issuance, resend exists only to deliver the email, so a
    /// delivery failure is surfaced to the caller.
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TicketQueryError> for ResendTicketError {
    fn from(e: TicketQueryError) -> Self {
        ResendTicketError::RepositoryError(e.to_string())
    }
}

impl From<TicketRepositoryError> for ResendTicketError {
    fn from(e: TicketRepositoryError) -> Self {
        ResendTicketError::RepositoryError(e.to_string())
    }
}

#[async_trait]
pub trait IResendTicketUseCase: Send + Sync {
    async fn execute(
        &self,
        ticket_id: Uuid,
        email_override: Option<String>,
    ) -> Result<TicketView, ResendTicketError>;
}

/// Re-delivers a ticket email, optionally to a corrected address. When the
/// override differs from the stored buyer email, the stored address is
/// updated before sending so later resends go to the right place.
#[derive(Clone)]
pub struct ResendTicketUseCase<R, Q, N>
where
    R: TicketRepository,
    Q: TicketQuery,
    N: TicketNotifier,
{
    repository: R,
    query: Q,
    notifier: N,
}

impl<R, Q, N> ResendTicketUseCase<R, Q, N>
where
    R: TicketRepository,
    Q: TicketQuery,
    N: TicketNotifier,
{
    pub fn new(repository: R, query: Q, notifier: N) -> Self {
        Self {
            repository,
            query,
            notifier,
        }
    }
}

#[async_trait]
impl<R, Q, N> IResendTicketUseCase for ResendTicketUseCase<R, Q, N>
where
    R: TicketRepository,
    Q: TicketQuery,
    N: TicketNotifier,
{
    async fn execute(
        &self,
        ticket_id: Uuid,
        email_override: Option<String>,
    ) -> Result<TicketView, ResendTicketError> {
        let mut ticket = self
            .query
            .find_by_id(ticket_id)
            .await?
            .ok_or(ResendTicketError::TicketNotFound)?;

        if let Some(email) = email_override {
            let email = email.trim().to_lowercase();
            if !EmailAddress::is_valid(&email) {
                return Err(ResendTicketError::InvalidEmail);
            }
            if email != ticket.buyer_email {
                self.repository.update_buyer_email(ticket_id, &email).await?;
                ticket.buyer_email = email;
            }
        }

        self.notifier
            .send_ticket_email(&ticket)
            .await
            .map_err(|TicketNotificationError::EmailSendingFailed(e)| {
                ResendTicketError::EmailSendingFailed(e)
            })?;

        Ok(ticket)
    }
}
