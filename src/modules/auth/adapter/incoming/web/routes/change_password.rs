use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::auth::application::use_cases::change_password::ChangePasswordError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDto {
    #[schema(example = "OldPass123!")]
    pub current_password: String,

    /// New password, minimum 6 characters
    #[schema(example = "NewPass456!")]
    pub new_password: String,
}

#[derive(Serialize, ToSchema)]
pub struct ChangePasswordResponse {
    #[schema(example = "Password changed successfully")]
    message: String,
}

/// Change the caller's password
///
/// Verifies the current password before storing the new hash. All other
/// sessions for the account are revoked.
#[utoipa::path(
    put,
    path = "/api/auth/change-password",
    tag = "auth",
    request_body = ChangePasswordDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Password changed"),
        (status = 400, description = "New password too short"),
        (status = 401, description = "Current password incorrect"),
    )
)]
#[put("/api/auth/change-password")]
pub async fn change_password_handler(
    staff: AuthenticatedStaff,
    req: web::Json<ChangePasswordDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data
        .change_password_use_case
        .execute(staff.user_id, &dto.current_password, &dto.new_password)
        .await
    {
        Ok(()) => {
            info!(user_id = %staff.user_id, "Password changed");
            ApiResponse::success(ChangePasswordResponse {
                message: "Password changed successfully".to_string(),
            })
        }

        Err(ChangePasswordError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(ChangePasswordError::CurrentPasswordIncorrect) => {
            warn!(user_id = %staff.user_id, "Password change rejected: wrong current password");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Current password is incorrect")
        }

        Err(ChangePasswordError::PasswordTooShort) => ApiResponse::bad_request(
            "VALIDATION_ERROR",
            "Password must be at least 6 characters long",
        ),

        Err(ChangePasswordError::HashingFailed) => {
            error!(user_id = %staff.user_id, "Password hashing failed");
            ApiResponse::internal_error()
        }

        Err(ChangePasswordError::RepositoryError(ref e)) => {
            error!(user_id = %staff.user_id, error = %e, "Password change failed");
            ApiResponse::internal_error()
        }
    }
}
