use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::shared::api::ApiResponse;
use crate::ticket::adapter::incoming::web::dto::TicketDto;
use crate::ticket::application::use_cases::fetch_ticket::FetchTicketError;
use crate::AppState;

/// Fetch a single ticket
#[utoipa::path(
    get,
    path = "/api/tickets/{id}",
    tag = "tickets",
    params(("id" = Uuid, Path, description = "Ticket ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Ticket found"),
        (status = 404, description = "Ticket not found"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/tickets/{id}")]
pub async fn fetch_ticket_handler(
    _staff: AuthenticatedStaff,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ticket_id = path.into_inner();

    match data.fetch_ticket_use_case.execute(ticket_id).await {
        Ok(ticket) => ApiResponse::success(TicketDto::from(ticket)),
        Err(FetchTicketError::TicketNotFound) => {
            ApiResponse::not_found("TICKET_NOT_FOUND", "Ticket not found")
        }
        Err(FetchTicketError::QueryError(ref e)) => {
            error!(ticket_id = %ticket_id, error = %e, "Ticket fetch failed");
            ApiResponse::internal_error()
        }
    }
}
