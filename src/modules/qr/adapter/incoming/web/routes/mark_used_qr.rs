use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::ScannerAccess;
use crate::shared::api::ApiResponse;
use crate::ticket::adapter::incoming::web::dto::TicketDto;
use crate::ticket::application::domain::entities::TicketStatus;
use crate::ticket::application::use_cases::redeem_ticket::RedeemTicketError;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkUsedQrDto {
    /// Ticket ID returned by a previous validate call
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub ticket_id: Uuid,
}

/// Redeem a validated ticket
///
/// Scanner-device alias for the ticket mark-used route; the body carries the
/// ticket ID reported by a previous validation.
#[utoipa::path(
    post,
    path = "/api/qr/mark-used",
    tag = "qr",
    request_body = MarkUsedQrDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Ticket marked as used"),
        (status = 404, description = "Ticket not found"),
        (status = 409, description = "Ticket was already used"),
    )
)]
#[post("/api/qr/mark-used")]
pub async fn mark_used_qr_handler(
    staff: ScannerAccess,
    req: web::Json<MarkUsedQrDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ticket_id = req.into_inner().ticket_id;

    match data.redeem_ticket_use_case.execute(ticket_id).await {
        Ok(ticket) => {
            info!(
                ticket_number = %ticket.ticket_number,
                scanned_by = %staff.user_id,
                "Ticket redeemed via QR surface"
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
