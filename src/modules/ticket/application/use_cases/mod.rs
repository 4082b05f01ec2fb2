pub mod cancel_ticket;
pub mod fetch_ticket;
pub mod issue_ticket;
pub mod list_tickets;
pub mod redeem_ticket;
pub mod resend_ticket;
pub mod sales_stats;
pub mod scan_ticket;
