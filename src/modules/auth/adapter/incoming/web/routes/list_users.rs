use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::auth::adapter::incoming::web::dto::UserDto;
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::auth::application::use_cases::list_users::ListUsersError;
use crate::shared::api::{ApiResponse, PaginationMeta};
use crate::AppState;

#[derive(Deserialize, IntoParams)]
pub struct ListUsersQuery {
    /// 1-based page number
    pub page: Option<u32>,

    /// Page size, capped server-side
    pub limit: Option<u32>,
}

/// List staff accounts
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "admin",
    params(ListUsersQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Page of staff accounts, newest first"),
        (status = 403, description = "Caller is not an admin"),
    )
)]
#[get("/api/admin/users")]
pub async fn list_users_handler(
    _admin: AdminAccess,
    query: web::Query<ListUsersQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    match data
        .list_users_use_case
        .execute(query.page.unwrap_or(1), query.limit.unwrap_or(10))
        .await
    {
        Ok(result) => {
            let pagination = PaginationMeta::new(result.page, result.limit, result.total);
            let users: Vec<UserDto> = result.items.into_iter().map(UserDto::from).collect();
            ApiResponse::success_with_pagination(users, pagination)
        }
        Err(ListUsersError::QueryError(ref e)) => {
            error!(error = %e, "Staff account listing failed");
            ApiResponse::internal_error()
        }
    }
}
