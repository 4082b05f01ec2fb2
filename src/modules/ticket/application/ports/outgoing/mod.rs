pub mod event_repository;
pub mod ticket_notifier;
pub mod ticket_query;
pub mod ticket_repository;

pub use event_repository::{EventRepository, EventRepositoryError};
pub use ticket_notifier::{TicketNotificationError, TicketNotifier};
pub use ticket_query::{TicketQuery, TicketQueryError};
pub use ticket_repository::{TicketRepository, TicketRepositoryError};
