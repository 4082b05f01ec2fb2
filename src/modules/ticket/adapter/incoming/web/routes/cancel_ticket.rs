use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::SalesAccess;
use crate::shared::api::ApiResponse;
use crate::ticket::application::use_cases::cancel_ticket::CancelTicketError;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct CancelTicketResponse {
    #[schema(example = "Ticket cancelled successfully")]
    message: String,
}

/// Cancel a ticket
///
/// Voids an active ticket. Used tickets cannot be cancelled; entry already
/// happened. Cancelling an already-cancelled ticket is a no-op success.
#[utoipa::path(
    delete,
    path = "/api/tickets/{id}",
    tag = "tickets",
    params(("id" = Uuid, Path, description = "Ticket ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Ticket cancelled"),
        (status = 404, description = "Ticket not found"),
        (status = 409, description = "Ticket was already used"),
    )
)]
#[delete("/api/tickets/{id}")]
pub async fn cancel_ticket_handler(
    staff: SalesAccess,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ticket_id = path.into_inner();

    match data.cancel_ticket_use_case.execute(ticket_id).await {
        Ok(()) => {
            info!(ticket_id = %ticket_id, cancelled_by = %staff.user_id, "Ticket cancelled");
            ApiResponse::success(CancelTicketResponse {
                message: "Ticket cancelled successfully".to_string(),
            })
        }

        Err(CancelTicketError::TicketNotFound) => {
            ApiResponse::not_found("TICKET_NOT_FOUND", "Ticket not found")
        }

        Err(CancelTicketError::AlreadyUsed { .. }) => {
            warn!(ticket_id = %ticket_id, "Cancellation refused: ticket already used");
            ApiResponse::conflict("TICKET_ALREADY_USED", "Cannot cancel a used ticket")
        }

        Err(CancelTicketError::RepositoryError(ref e)) => {
            error!(ticket_id = %ticket_id, error = %e, "Ticket cancellation failed");
            ApiResponse::internal_error()
        }
    }
}
