use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;

/// Staff account as exposed over the API. The password hash never leaves
/// the application layer.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,

    #[schema(example = "staff@nebulatickets.com")]
    pub email: String,

    #[schema(example = "Jane Staff")]
    pub name: String,

    /// "admin" | "sales" | "scanner"
    #[schema(example = "sales")]
    pub role: String,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role.as_str().to_string(),
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}
