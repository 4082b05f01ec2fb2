// src/modules/ticket/application/ports/outgoing/ticket_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::ticket::application::domain::entities::TicketStatus;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Ticket joined with its event, as shown to staff and embedded in emails.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TicketView {
    pub id: Uuid,
    pub ticket_number: String,
    pub buyer_name: String,
    pub buyer_email: String,
    pub buyer_phone: Option<String>,
    pub price: Decimal,
    pub qr_code: String,
    pub status: TicketStatus,
    pub used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub event_id: Uuid,
    pub event_name: String,
    pub event_location: String,
    pub event_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct TicketListFilter {
    /// Substring match over ticket_number, buyer_name, buyer_email, event name
    pub search: Option<String>,
    pub status: Option<TicketStatus>,
    pub event_id: Option<Uuid>,
}

#[derive(Debug, Clone)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

/// Dashboard aggregates over the whole ticket table.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SalesStats {
    pub total_tickets: u64,
    pub active_tickets: u64,
    pub used_tickets: u64,
    /// Sum of prices over active + used tickets (cancelled excluded)
    pub total_revenue: Decimal,
    pub todays_sales: u64,
    pub monthly_revenue: Decimal,
    pub recent_tickets: Vec<TicketView>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TicketQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read-side, joins events)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait TicketQuery: Send + Sync {
    async fn find_by_id(&self, ticket_id: Uuid) -> Result<Option<TicketView>, TicketQueryError>;

    /// Exact-match lookup on the QR bearer token. Hot path at event entry;
    /// backed by the qr_code unique index.
    async fn find_by_qr_code(&self, qr_code: &str)
        -> Result<Option<TicketView>, TicketQueryError>;

    /// Filtered listing ordered by creation time descending.
    async fn list(
        &self,
        filter: TicketListFilter,
        page: PageRequest,
    ) -> Result<PageResult<TicketView>, TicketQueryError>;

    async fn sales_stats(&self) -> Result<SalesStats, TicketQueryError>;
}
