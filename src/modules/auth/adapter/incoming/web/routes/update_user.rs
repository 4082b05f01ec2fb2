use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::dto::UserDto;
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::auth::application::use_cases::update_user::{UpdateUserError, UpdateUserRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Partial staff account update; omitted fields are left untouched
#[derive(Deserialize, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[schema(example = "renamed@nebulatickets.com")]
    pub email: Option<String>,

    #[schema(example = "Renamed Staff")]
    pub name: Option<String>,

    /// "admin" | "sales" | "scanner"
    #[schema(example = "sales")]
    pub role: Option<String>,

    pub is_active: Option<bool>,
}

/// Update a staff account
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = UpdateUserDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Account updated"),
        (status = 400, description = "Invalid or empty update"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already registered"),
    )
)]
#[put("/api/admin/users/{id}")]
pub async fn update_user_handler(
    admin: AdminAccess,
    path: web::Path<Uuid>,
    req: web::Json<UpdateUserDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();
    let dto = req.into_inner();

    let request = UpdateUserRequest {
        email: dto.email,
        name: dto.name,
        role: dto.role,
        is_active: dto.is_active,
    };

    match data.update_user_use_case.execute(user_id, request).await {
        Ok(user) => {
            info!(user_id = %user.id, updated_by = %admin.user_id, "Staff account updated");
            ApiResponse::success(UserDto::from(user))
        }

        Err(UpdateUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(UpdateUserError::EmailAlreadyTaken) => {
            warn!(user_id = %user_id, "Staff account update hit an existing email");
            ApiResponse::conflict("DUPLICATE_ENTRY", "A user with this email already exists")
        }

        Err(
            e @ (UpdateUserError::InvalidEmail
            | UpdateUserError::EmptyName
            | UpdateUserError::InvalidRole
            | UpdateUserError::NothingToUpdate),
        ) => ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),

        Err(UpdateUserError::RepositoryError(ref e)) => {
            error!(user_id = %user_id, error = %e, "Staff account update failed");
            ApiResponse::internal_error()
        }
    }
}
