use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::auth::application::use_cases::deactivate_user::DeactivateUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct DeactivateUserResponse {
    #[schema(example = "User deactivated successfully")]
    message: String,
}

/// Deactivate a staff account
///
/// Soft-deletes the account and revokes all of its sessions. Admins cannot
/// deactivate themselves.
#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "User ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Account deactivated"),
        (status = 400, description = "Attempted self-deactivation"),
        (status = 404, description = "User not found"),
    )
)]
#[delete("/api/admin/users/{id}")]
pub async fn deactivate_user_handler(
    admin: AdminAccess,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target_id = path.into_inner();

    match data
        .deactivate_user_use_case
        .execute(admin.user_id, target_id)
        .await
    {
        Ok(()) => {
            info!(user_id = %target_id, deactivated_by = %admin.user_id, "Staff account deactivated");
            ApiResponse::success(DeactivateUserResponse {
                message: "User deactivated successfully".to_string(),
            })
        }

        Err(DeactivateUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(DeactivateUserError::CannotDeactivateSelf) => {
            warn!(user_id = %admin.user_id, "Admin attempted self-deactivation");
            ApiResponse::bad_request("VALIDATION_ERROR", "You cannot deactivate your own account")
        }

        Err(DeactivateUserError::RepositoryError(ref e)) => {
            error!(user_id = %target_id, error = %e, "Staff account deactivation failed");
            ApiResponse::internal_error()
        }
    }
}
