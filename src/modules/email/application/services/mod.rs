pub mod ticket_email_service;

pub use ticket_email_service::TicketEmailService;
