use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Staff roles. Stored as a string column but surfaced as this enum
/// everywhere above the adapter layer; authorization checks go through the
/// capability methods, never through string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Sales,
    Scanner,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Sales => "sales",
            UserRole::Scanner => "scanner",
        }
    }

    /// Issue, resend and cancel tickets
    pub fn can_sell(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Sales)
    }

    /// Validate and redeem tickets at the door
    pub fn can_scan(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Scanner)
    }

    /// User management and sales dashboards
    pub fn can_administer(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "sales" => Ok(UserRole::Sales),
            "scanner" => Ok(UserRole::Scanner),
            other => Err(format!("Unknown user role: {}", other)),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RefreshToken {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
