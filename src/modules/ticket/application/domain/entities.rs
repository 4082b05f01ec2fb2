use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Ticket lifecycle. `Active` is the only non-terminal state: a ticket can be
/// redeemed (`Used`) or cancelled exactly once, and neither terminal state
/// can transition out again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Active,
    Used,
    Cancelled,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Active => "active",
            TicketStatus::Used => "used",
            TicketStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TicketStatus::Used | TicketStatus::Cancelled)
    }

    /// Legal transitions: active -> used, active -> cancelled. Everything
    /// else is rejected.
    pub fn can_transition_to(&self, to: TicketStatus) -> bool {
        matches!(
            (self, to),
            (TicketStatus::Active, TicketStatus::Used)
                | (TicketStatus::Active, TicketStatus::Cancelled)
        )
    }
}

impl std::str::FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(TicketStatus::Active),
            "used" => Ok(TicketStatus::Used),
            "cancelled" => Ok(TicketStatus::Cancelled),
            other => Err(format!("Unknown ticket status: {}", other)),
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub event_date: DateTime<Utc>,
    pub base_price: Decimal,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct Ticket {
    pub id: Uuid,
    pub ticket_number: String,
    pub event_id: Uuid,
    pub buyer_name: String,
    pub buyer_email: String,
    pub buyer_phone: Option<String>,
    pub price: Decimal,
    pub qr_code: String,
    pub status: TicketStatus,
    pub used_at: Option<DateTime<Utc>>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Outcome of a read-only scan. Front-desk staff see the message, so a
/// used/cancelled ticket carries the reason instead of a generic rejection.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ScanVerdict {
    pub is_valid: bool,
    pub message: String,
}

impl ScanVerdict {
    pub fn for_status(status: TicketStatus, used_at: Option<DateTime<Utc>>) -> Self {
        match status {
            TicketStatus::Active => Self {
                is_valid: true,
                message: "Valid ticket".to_string(),
            },
            TicketStatus::Used => {
                let when = used_at
                    .map(|ts| ts.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                    .unwrap_or_else(|| "an unknown time".to_string());
                Self {
                    is_valid: false,
                    message: format!("Ticket already used at {}", when),
                }
            }
            TicketStatus::Cancelled => Self {
                is_valid: false,
                message: "Ticket cancelled".to_string(),
            },
        }
    }

    pub fn unknown_code() -> Self {
        Self {
            is_valid: false,
            message: "Invalid QR code".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_active_transitions() {
        assert!(TicketStatus::Active.can_transition_to(TicketStatus::Used));
        assert!(TicketStatus::Active.can_transition_to(TicketStatus::Cancelled));
        assert!(!TicketStatus::Active.can_transition_to(TicketStatus::Active));
    }

    #[test]
    fn test_terminal_states_cannot_transition() {
        for terminal in [TicketStatus::Used, TicketStatus::Cancelled] {
            assert!(terminal.is_terminal());
            assert!(!terminal.can_transition_to(TicketStatus::Active));
            assert!(!terminal.can_transition_to(TicketStatus::Used));
            assert!(!terminal.can_transition_to(TicketStatus::Cancelled));
        }
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            TicketStatus::Active,
            TicketStatus::Used,
            TicketStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<TicketStatus>().unwrap(), status);
        }
        assert!("expired".parse::<TicketStatus>().is_err());
    }

    #[test]
    fn test_scan_verdict_active() {
        let verdict = ScanVerdict::for_status(TicketStatus::Active, None);
        assert!(verdict.is_valid);
        assert_eq!(verdict.message, "Valid ticket");
    }

    #[test]
    fn test_scan_verdict_used_mentions_timestamp() {
        let used_at = Utc.with_ymd_and_hms(2025, 6, 1, 20, 15, 0).unwrap();
        let verdict = ScanVerdict::for_status(TicketStatus::Used, Some(used_at));
        assert!(!verdict.is_valid);
        assert!(verdict.message.contains("2025-06-01 20:15:00 UTC"));
    }

    #[test]
    fn test_scan_verdict_cancelled() {
        let verdict = ScanVerdict::for_status(TicketStatus::Cancelled, None);
        assert!(!verdict.is_valid);
        assert_eq!(verdict.message, "Ticket cancelled");
    }

    #[test]
    fn test_scan_verdict_unknown() {
        let verdict = ScanVerdict::unknown_code();
        assert!(!verdict.is_valid);
        assert_eq!(verdict.message, "Invalid QR code");
    }
}
