use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserRole};
use crate::ticket::application::domain::entities::TicketStatus;
use crate::ticket::application::ports::outgoing::ticket_query::{SalesStats, TicketView};

pub fn ticket_view(status: TicketStatus) -> TicketView {
    let used_at = match status {
        TicketStatus::Used => Some(Utc::now()),
        _ => None,
    };
    TicketView {
        id: Uuid::new_v4(),
        ticket_number: "NBL-12345678ABCD".to_string(),
        buyer_name: "Jane Doe".to_string(),
        buyer_email: "jane@example.com".to_string(),
        buyer_phone: Some("555-0101".to_string()),
        price: Decimal::new(10000, 2),
        qr_code: "NEBULA-1717286400000-a1b2c3d4e".to_string(),
        status,
        used_at,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        event_id: Uuid::new_v4(),
        event_name: "Concert A".to_string(),
        event_location: "Arena X".to_string(),
        event_date: Utc::now() + chrono::Duration::days(30),
    }
}

pub fn empty_sales_stats() -> SalesStats {
    SalesStats {
        total_tickets: 0,
        active_tickets: 0,
        used_tickets: 0,
        total_revenue: Decimal::ZERO,
        todays_sales: 0,
        monthly_revenue: Decimal::ZERO,
        recent_tickets: Vec::new(),
    }
}

pub fn staff_user(role: UserRole) -> User {
    User {
        id: Uuid::new_v4(),
        email: "staff@nebulatickets.com".to_string(),
        name: "Staff Member".to_string(),
        password_hash: "$2b$12$hash".to_string(),
        role,
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
