use actix_web::{http::StatusCode, post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::SalesAccess;
use crate::shared::api::ApiResponse;
use crate::ticket::adapter::incoming::web::dto::TicketDto;
use crate::ticket::application::use_cases::resend_ticket::ResendTicketError;
use crate::AppState;

#[derive(Deserialize, Default, ToSchema)]
pub struct ResendTicketDto {
    /// Overrides the buyer email on record when set
    #[schema(example = "other@example.com")]
    pub email: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ResendTicketResponse {
    ticket: TicketDto,

    #[schema(example = "Ticket email sent")]
    message: String,
}

/// Resend the ticket email
///
/// Re-delivers the QR code email for an existing ticket, optionally to a
/// different address. Unlike issuance, delivery failure here is an error.
#[utoipa::path(
    post,
    path = "/api/tickets/{id}/resend",
    tag = "tickets",
    params(("id" = Uuid, Path, description = "Ticket ID")),
    request_body = ResendTicketDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Email sent"),
        (status = 400, description = "Invalid override email"),
        (status = 404, description = "Ticket not found"),
        (status = 502, description = "Email delivery failed"),
    )
)]
#[post("/api/tickets/{id}/resend")]
pub async fn resend_ticket_handler(
    _staff: SalesAccess,
    path: web::Path<Uuid>,
    req: web::Json<ResendTicketDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ticket_id = path.into_inner();
    let email_override = req.into_inner().email;

    match data
        .resend_ticket_use_case
        .execute(ticket_id, email_override)
        .await
    {
        Ok(ticket) => {
            info!(ticket_number = %ticket.ticket_number, "Ticket email resent");
            ApiResponse::success(ResendTicketResponse {
                ticket: TicketDto::from(ticket),
                message: "Ticket email sent".to_string(),
            })
        }

        Err(ResendTicketError::TicketNotFound) => {
            ApiResponse::not_found("TICKET_NOT_FOUND", "Ticket not found")
        }

        Err(ResendTicketError::InvalidEmail) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Invalid email address")
        }

        Err(ResendTicketError::EmailSendingFailed(ref e)) => {
            warn!(ticket_id = %ticket_id, error = %e, "Ticket email delivery failed");
            ApiResponse::error(
                StatusCode::BAD_GATEWAY,
                "EMAIL_ERROR",
                "Failed to send the ticket email",
            )
        }

        Err(ResendTicketError::RepositoryError(ref e)) => {
            error!(ticket_id = %ticket_id, error = %e, "Ticket resend failed");
            ApiResponse::internal_error()
        }
    }
}
