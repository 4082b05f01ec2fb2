use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::ticket::application::ports::outgoing::ticket_query::TicketView;

/// Ticket as returned by every ticket-facing route.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketDto {
    /// Ticket ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,

    /// Human-readable ticket number
    #[schema(example = "NBL-1A2B3C4D5E6F")]
    pub ticket_number: String,

    pub event_id: Uuid,

    #[schema(example = "Nebula Open Air 2026")]
    pub event_name: String,

    #[schema(example = "Riverside Arena")]
    pub event_location: String,

    pub event_date: DateTime<Utc>,

    #[schema(example = "100.00")]
    pub price: Decimal,

    #[schema(example = "Jane Doe")]
    pub buyer_name: String,

    #[schema(example = "jane@example.com")]
    pub buyer_email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_phone: Option<String>,

    /// Opaque QR payload embedded in the ticket's QR code
    #[schema(example = "NEBULA-1717286400000-a1b2c3d4e")]
    pub qr_code: String,

    /// "active" | "used" | "cancelled"
    #[schema(example = "active")]
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
}

impl From<TicketView> for TicketDto {
    fn from(view: TicketView) -> Self {
        Self {
            id: view.id,
            ticket_number: view.ticket_number,
            event_id: view.event_id,
            event_name: view.event_name,
            event_location: view.event_location,
            event_date: view.event_date,
            price: view.price,
            buyer_name: view.buyer_name,
            buyer_email: view.buyer_email,
            buyer_phone: view.buyer_phone,
            qr_code: view.qr_code,
            status: view.status.as_str().to_string(),
            used_at: view.used_at,
            created_at: view.created_at,
        }
    }
}
