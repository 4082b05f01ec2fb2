use async_trait::async_trait;
use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::ticket::application::domain::entities::{Event, Ticket};
use crate::ticket::application::domain::identity::TicketIdentity;
use crate::ticket::application::ports::outgoing::event_repository::NewEvent;
use crate::ticket::application::ports::outgoing::ticket_query::TicketView;
use crate::ticket::application::ports::outgoing::ticket_repository::NewTicket;
use crate::ticket::application::ports::outgoing::{
    EventRepository, EventRepositoryError, TicketRepository, TicketRepositoryError,
};

// ========================= Issue Request =========================

/// Validated issuance request; construction guarantees the invariants the
/// store relies on (non-empty fields, positive price, future event date).
#[derive(Debug, Clone)]
pub struct IssueTicketRequest {
    event_name: String,
    event_location: String,
    event_date: DateTime<Utc>,
    price: Decimal,
    buyer_name: String,
    buyer_email: String,
    buyer_phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueTicketRequestError {
    MissingField(&'static str),
    InvalidBuyerEmail,
    NonPositivePrice,
    EventDateNotInFuture,
}

impl std::fmt::Display for IssueTicketRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueTicketRequestError::MissingField(field) => {
                write!(f, "{} is required", field)
            }
            IssueTicketRequestError::InvalidBuyerEmail => write!(f, "Invalid buyer email"),
            IssueTicketRequestError::NonPositivePrice => {
                write!(f, "Price must be greater than 0")
            }
            IssueTicketRequestError::EventDateNotInFuture => {
                write!(f, "Event date must be in the future")
            }
        }
    }
}

impl std::error::Error for IssueTicketRequestError {}

impl IssueTicketRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        event_name: String,
        event_location: String,
        event_date: DateTime<Utc>,
        price: Decimal,
        buyer_name: String,
        buyer_email: String,
        buyer_phone: Option<String>,
    ) -> Result<Self, IssueTicketRequestError> {
        let event_name = require(event_name, "eventName")?;
        let event_location = require(event_location, "eventLocation")?;
        let buyer_name = require(buyer_name, "buyerName")?;
        let buyer_email = require(buyer_email, "buyerEmail")?.to_lowercase();

        if !EmailAddress::is_valid(&buyer_email) {
            return Err(IssueTicketRequestError::InvalidBuyerEmail);
        }

        if price <= Decimal::ZERO {
            return Err(IssueTicketRequestError::NonPositivePrice);
        }

        if event_date <= Utc::now() {
            return Err(IssueTicketRequestError::EventDateNotInFuture);
        }

        let buyer_phone = buyer_phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        Ok(Self {
            event_name,
            event_location,
            event_date,
            price,
            buyer_name,
            buyer_email,
            buyer_phone,
        })
    }

    pub fn buyer_email(&self) -> &str {
        &self.buyer_email
    }
}

fn require(value: String, field: &'static str) -> Result<String, IssueTicketRequestError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(IssueTicketRequestError::MissingField(field));
    }
    Ok(value)
}

// ====================== Issue Error =============================

#[derive(Debug, Clone, thiserror::Error)]
pub enum IssueTicketError {
    /// Generated ticket_number/qr_code collided with an existing row.
    /// Surfaced directly, no regeneration retry.
    #[error("Ticket number or QR code already exists")]
    DuplicateTicket,

    /// The just-resolved event id was rejected by the ticket insert
    #[error("Referenced event does not exist")]
    EventReferenceBroken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<EventRepositoryError> for IssueTicketError {
    fn from(e: EventRepositoryError) -> Self {
        IssueTicketError::RepositoryError(e.to_string())
    }
}

impl From<TicketRepositoryError> for IssueTicketError {
    fn from(e: TicketRepositoryError) -> Self {
        match e {
            TicketRepositoryError::DuplicateEntry => IssueTicketError::DuplicateTicket,
            TicketRepositoryError::InvalidEventReference => IssueTicketError::EventReferenceBroken,
            other => IssueTicketError::RepositoryError(other.to_string()),
        }
    }
}

// ====================== Issue Ticket Use Case ====================

#[async_trait]
pub trait IIssueTicketUseCase: Send + Sync {
    async fn execute(
        &self,
        request: IssueTicketRequest,
        created_by: Uuid,
    ) -> Result<TicketView, IssueTicketError>;
}

#[derive(Clone)]
pub struct IssueTicketUseCase<E, T>
where
    E: EventRepository,
    T: TicketRepository,
{
    events: E,
    tickets: T,
}

impl<E, T> IssueTicketUseCase<E, T>
where
    E: EventRepository,
    T: TicketRepository,
{
    pub fn new(events: E, tickets: T) -> Self {
        Self { events, tickets }
    }
}

#[async_trait]
impl<E, T> IIssueTicketUseCase for IssueTicketUseCase<E, T>
where
    E: EventRepository,
    T: TicketRepository,
{
    async fn execute(
        &self,
        request: IssueTicketRequest,
        created_by: Uuid,
    ) -> Result<TicketView, IssueTicketError> {
        // Resolve or create the event; exact-equality match keeps repeated
        // sales for one event on a single row.
        let event = self
            .events
            .find_or_create(NewEvent {
                name: request.event_name.clone(),
                location: request.event_location.clone(),
                event_date: request.event_date,
                base_price: request.price,
                created_by,
            })
            .await?;

        let identity = TicketIdentity::generate();

        let ticket = self
            .tickets
            .create(NewTicket {
                ticket_number: identity.ticket_number,
                event_id: event.id,
                buyer_name: request.buyer_name,
                buyer_email: request.buyer_email,
                buyer_phone: request.buyer_phone,
                price: request.price,
                qr_code: identity.qr_code,
                created_by,
            })
            .await?;

        Ok(joined_view(ticket, &event))
    }
}

fn joined_view(ticket: Ticket, event: &Event) -> TicketView {
    TicketView {
        id: ticket.id,
        ticket_number: ticket.ticket_number,
        buyer_name: ticket.buyer_name,
        buyer_email: ticket.buyer_email,
        buyer_phone: ticket.buyer_phone,
        price: ticket.price,
        qr_code: ticket.qr_code,
        status: ticket.status,
        used_at: ticket.used_at,
        created_at: ticket.created_at,
        updated_at: ticket.updated_at,
        event_id: event.id,
        event_name: event.name.clone(),
        event_location: event.location.clone(),
        event_date: event.event_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::application::domain::entities::TicketStatus;
    use std::sync::Mutex;

    fn future_date() -> DateTime<Utc> {
        Utc::now() + chrono::Duration::days(30)
    }

    fn valid_request() -> IssueTicketRequest {
        IssueTicketRequest::new(
            "Concert A".to_string(),
            "Arena X".to_string(),
            future_date(),
            Decimal::new(10000, 2),
            "Jane Doe".to_string(),
            "jane@example.com".to_string(),
            Some("555-0101".to_string()),
        )
        .unwrap()
    }

    // ==================== IssueTicketRequest Tests ====================

    #[test]
    fn test_request_valid() {
        let request = valid_request();
        assert_eq!(request.buyer_email(), "jane@example.com");
    }

    #[test]
    fn test_request_rejects_empty_fields() {
        let result = IssueTicketRequest::new(
            "  ".to_string(),
            "Arena X".to_string(),
            future_date(),
            Decimal::ONE,
            "Jane".to_string(),
            "jane@example.com".to_string(),
            None,
        );
        assert!(matches!(
            result,
            Err(IssueTicketRequestError::MissingField("eventName"))
        ));
    }

    #[test]
    fn test_request_rejects_invalid_email() {
        let result = IssueTicketRequest::new(
            "Concert A".to_string(),
            "Arena X".to_string(),
            future_date(),
            Decimal::ONE,
            "Jane".to_string(),
            "not-an-email".to_string(),
            None,
        );
        assert!(matches!(
            result,
            Err(IssueTicketRequestError::InvalidBuyerEmail)
        ));
    }

    #[test]
    fn test_request_rejects_non_positive_price() {
        for price in [Decimal::ZERO, Decimal::new(-100, 2)] {
            let result = IssueTicketRequest::new(
                "Concert A".to_string(),
                "Arena X".to_string(),
                future_date(),
                price,
                "Jane".to_string(),
                "jane@example.com".to_string(),
                None,
            );
            assert!(matches!(
                result,
                Err(IssueTicketRequestError::NonPositivePrice)
            ));
        }
    }

    #[test]
    fn test_request_rejects_past_event_date() {
        let result = IssueTicketRequest::new(
            "Concert A".to_string(),
            "Arena X".to_string(),
            Utc::now() - chrono::Duration::hours(1),
            Decimal::ONE,
            "Jane".to_string(),
            "jane@example.com".to_string(),
            None,
        );
        assert!(matches!(
            result,
            Err(IssueTicketRequestError::EventDateNotInFuture)
        ));
    }

    #[test]
    fn test_request_normalizes_email_and_phone() {
        let request = IssueTicketRequest::new(
            "Concert A".to_string(),
            "Arena X".to_string(),
            future_date(),
            Decimal::ONE,
            "Jane".to_string(),
            "Jane@Example.COM".to_string(),
            Some("   ".to_string()),
        )
        .unwrap();
        assert_eq!(request.buyer_email(), "jane@example.com");
        assert!(request.buyer_phone.is_none());
    }

    // ==================== IssueTicketUseCase Tests ====================

    struct MockEventRepository {
        existing: Option<Event>,
        created: Mutex<Vec<NewEvent>>,
    }

    impl MockEventRepository {
        fn empty() -> Self {
            Self {
                existing: None,
                created: Mutex::new(Vec::new()),
            }
        }

        fn with_existing(event: Event) -> Self {
            Self {
                existing: Some(event),
                created: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl EventRepository for MockEventRepository {
        async fn find_or_create(&self, event: NewEvent) -> Result<Event, EventRepositoryError> {
            if let Some(existing) = &self.existing {
                return Ok(existing.clone());
            }
            self.created.lock().unwrap().push(event.clone());
            Ok(make_event(event))
        }
    }

    struct MockTicketRepository {
        fail_with: Option<TicketRepositoryError>,
    }

    #[async_trait]
    impl TicketRepository for MockTicketRepository {
        async fn create(&self, ticket: NewTicket) -> Result<Ticket, TicketRepositoryError> {
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            Ok(make_ticket(ticket))
        }

        async fn transition_status(
            &self,
            _ticket_id: Uuid,
            _from: TicketStatus,
            _to: TicketStatus,
            _used_at: Option<DateTime<Utc>>,
        ) -> Result<bool, TicketRepositoryError> {
            unimplemented!("Not used in this test")
        }

        async fn update_buyer_email(
            &self,
            _ticket_id: Uuid,
            _buyer_email: &str,
        ) -> Result<(), TicketRepositoryError> {
            unimplemented!("Not used in this test")
        }
    }

    fn make_event(new: NewEvent) -> Event {
        Event {
            id: Uuid::new_v4(),
            name: new.name,
            location: new.location,
            event_date: new.event_date,
            base_price: new.base_price,
            created_by: new.created_by,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn make_ticket(new: NewTicket) -> Ticket {
        Ticket {
            id: Uuid::new_v4(),
            ticket_number: new.ticket_number,
            event_id: new.event_id,
            buyer_name: new.buyer_name,
            buyer_email: new.buyer_email,
            buyer_phone: new.buyer_phone,
            price: new.price,
            qr_code: new.qr_code,
            status: TicketStatus::Active,
            used_at: None,
            created_by: new.created_by,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_issue_creates_event_and_ticket() {
        let use_case = IssueTicketUseCase::new(
            MockEventRepository::empty(),
            MockTicketRepository { fail_with: None },
        );

        let view = use_case
            .execute(valid_request(), Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(view.status, TicketStatus::Active);
        assert!(view.used_at.is_none());
        assert!(view.ticket_number.starts_with("NBL-"));
        assert!(view.qr_code.starts_with("NEBULA-"));
        assert_eq!(view.event_name, "Concert A");
        assert_eq!(view.event_location, "Arena X");
    }

    #[tokio::test]
    async fn test_issue_reuses_existing_event() {
        let existing = make_event(NewEvent {
            name: "Concert A".to_string(),
            location: "Arena X".to_string(),
            event_date: future_date(),
            base_price: Decimal::new(10000, 2),
            created_by: Uuid::new_v4(),
        });
        let existing_id = existing.id;

        let use_case = IssueTicketUseCase::new(
            MockEventRepository::with_existing(existing),
            MockTicketRepository { fail_with: None },
        );

        let first = use_case
            .execute(valid_request(), Uuid::new_v4())
            .await
            .unwrap();
        let second = use_case
            .execute(valid_request(), Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(first.event_id, existing_id);
        assert_eq!(second.event_id, existing_id);
    }

    #[tokio::test]
    async fn test_issue_surfaces_duplicate_as_conflict() {
        let use_case = IssueTicketUseCase::new(
            MockEventRepository::empty(),
            MockTicketRepository {
                fail_with: Some(TicketRepositoryError::DuplicateEntry),
            },
        );

        let result = use_case.execute(valid_request(), Uuid::new_v4()).await;
        assert!(matches!(result, Err(IssueTicketError::DuplicateTicket)));
    }

    #[tokio::test]
    async fn test_issue_surfaces_dangling_event_reference() {
        let use_case = IssueTicketUseCase::new(
            MockEventRepository::empty(),
            MockTicketRepository {
                fail_with: Some(TicketRepositoryError::InvalidEventReference),
            },
        );

        let result = use_case.execute(valid_request(), Uuid::new_v4()).await;
        assert!(matches!(
            result,
            Err(IssueTicketError::EventReferenceBroken)
        ));
    }
}
