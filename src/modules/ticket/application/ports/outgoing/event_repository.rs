use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::ticket::application::domain::entities::Event;

#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: String,
    pub location: String,
    pub event_date: DateTime<Utc>,
    pub base_price: Decimal,
    pub created_by: Uuid,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Idempotent by exact (name, location, event_date) equality: repeated
    /// ticket sales for the same event reuse the existing row instead of
    /// inserting a duplicate. Deliberately a best-effort exact match, not
    /// fuzzy.
    async fn find_or_create(&self, event: NewEvent) -> Result<Event, EventRepositoryError>;
}
