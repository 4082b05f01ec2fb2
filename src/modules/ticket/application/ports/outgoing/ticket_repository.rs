use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::ticket::application::domain::entities::{Ticket, TicketStatus};

/// Data required to persist a new ticket. Identifiers come from the identity
/// generator; the repository only assigns the row id.
#[derive(Debug, Clone)]
pub struct NewTicket {
    pub ticket_number: String,
    pub event_id: Uuid,
    pub buyer_name: String,
    pub buyer_email: String,
    pub buyer_phone: Option<String>,
    pub price: Decimal,
    pub qr_code: String,
    pub created_by: Uuid,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TicketRepositoryError {
    /// ticket_number or qr_code collided with an existing row
    #[error("Ticket number or QR code already exists")]
    DuplicateEntry,

    /// event_id does not reference an existing event
    #[error("Referenced event does not exist")]
    InvalidEventReference,

    #[error("Ticket not found")]
    TicketNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn create(&self, ticket: NewTicket) -> Result<Ticket, TicketRepositoryError>;

    /// Atomic conditional status update (compare-and-swap). The row is
    /// changed only if its status still equals `from` at commit time;
    /// `Ok(false)` means another writer got there first. Never implemented
    /// as a read-then-write.
    async fn transition_status(
        &self,
        ticket_id: Uuid,
        from: TicketStatus,
        to: TicketStatus,
        used_at: Option<DateTime<Utc>>,
    ) -> Result<bool, TicketRepositoryError>;

    async fn update_buyer_email(
        &self,
        ticket_id: Uuid,
        buyer_email: &str,
    ) -> Result<(), TicketRepositoryError>;
}
