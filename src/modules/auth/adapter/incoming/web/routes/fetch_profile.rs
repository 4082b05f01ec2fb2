use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::dto::UserDto;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::auth::application::use_cases::fetch_profile::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current staff profile
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile of the authenticated staff member"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Account no longer exists"),
    )
)]
#[get("/api/auth/profile")]
pub async fn fetch_profile_handler(
    staff: AuthenticatedStaff,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_profile_use_case.execute(staff.user_id).await {
        Ok(user) => ApiResponse::success(UserDto::from(user)),
        Err(FetchProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(FetchProfileError::QueryError(ref e)) => {
            error!(user_id = %staff.user_id, error = %e, "Profile fetch failed");
            ApiResponse::internal_error()
        }
    }
}
