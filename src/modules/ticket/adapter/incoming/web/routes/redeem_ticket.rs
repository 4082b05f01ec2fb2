use actix_web::{put, web, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::ScannerAccess;
use crate::shared::api::ApiResponse;
use crate::ticket::adapter::incoming::web::dto::TicketDto;
use crate::ticket::application::domain::entities::TicketStatus;
use crate::ticket::application::use_cases::redeem_ticket::RedeemTicketError;
use crate::AppState;

/// Mark a ticket as used
///
/// Atomically flips an active ticket to used. A ticket can only be redeemed
/// once; concurrent attempts lose with a conflict.
#[utoipa::path(
    put,
    path = "/api/tickets/{id}/mark-used",
    tag = "tickets",
    params(("id" = Uuid, Path, description = "Ticket ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Ticket marked as used"),
        (status = 404, description = "Ticket not found"),
        (status = 409, description = "Ticket was already used"),
        (status = 400, description = "Ticket is cancelled"),
    )
)]
#[put("/api/tickets/{id}/mark-used")]
pub async fn redeem_ticket_handler(
    staff: ScannerAccess,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ticket_id = path.into_inner();

    match data.redeem_ticket_use_case.execute(ticket_id).await {
        Ok(ticket) => {
            info!(
                ticket_number = %ticket.ticket_number,
                scanned_by = %staff.user_id,
                "Ticket redeemed"
            );
            ApiResponse::success(TicketDto::from(ticket))
        }

        Err(RedeemTicketError::TicketNotFound) => {
            ApiResponse::not_found("TICKET_NOT_FOUND", "Ticket not found")
        }

        Err(RedeemTicketError::NotActive {
            status: TicketStatus::Used,
            ..
        }) => {
            warn!(ticket_id = %ticket_id, "Redemption refused: already used");
            ApiResponse::conflict("TICKET_ALREADY_USED", "Ticket has already been used")
        }

        Err(RedeemTicketError::NotActive { status, .. }) => {
            warn!(ticket_id = %ticket_id, status = %status, "Redemption refused: not active");
            ApiResponse::bad_request("TICKET_NOT_ACTIVE", "Ticket is not active")
        }

        Err(RedeemTicketError::RepositoryError(ref e)) => {
            error!(ticket_id = %ticket_id, error = %e, "Ticket redemption failed");
            ApiResponse::internal_error()
        }
    }
}
