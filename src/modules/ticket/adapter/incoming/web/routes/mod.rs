pub mod cancel_ticket;
pub mod fetch_ticket;
pub mod issue_ticket;
pub mod list_tickets;
pub mod redeem_ticket;
pub mod resend_ticket;
pub mod sales_stats;
pub mod scan_ticket;

pub use cancel_ticket::{cancel_ticket_handler, CancelTicketResponse};
pub use fetch_ticket::fetch_ticket_handler;
pub use issue_ticket::{issue_ticket_handler, IssueTicketDto, IssueTicketResponse};
pub use list_tickets::{list_tickets_handler, ListTicketsQuery};
pub use redeem_ticket::redeem_ticket_handler;
pub use resend_ticket::{resend_ticket_handler, ResendTicketDto, ResendTicketResponse};
pub use sales_stats::{sales_stats_handler, SalesStatsDto};
pub use scan_ticket::{scan_ticket_handler, ScanTicketDto, ScanTicketResponse};
