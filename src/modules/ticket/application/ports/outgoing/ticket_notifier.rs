use crate::ticket::application::ports::outgoing::ticket_query::TicketView;

#[derive(Debug, thiserror::Error)]
pub enum TicketNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

/// Delivers the ticket (QR + details) to the buyer. Issuance tolerates
/// failures from this port; resend surfaces them.
#[async_trait::async_trait]
pub trait TicketNotifier: Send + Sync {
    async fn send_ticket_email(&self, ticket: &TicketView) -> Result<(), TicketNotificationError>;
}
