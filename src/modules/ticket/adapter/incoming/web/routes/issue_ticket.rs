use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::SalesAccess;
use crate::qr::qr_image_url;
use crate::shared::api::ApiResponse;
use crate::ticket::adapter::incoming::web::dto::TicketDto;
use crate::ticket::application::use_cases::issue_ticket::{IssueTicketError, IssueTicketRequest};
use crate::AppState;

const QR_IMAGE_SIZE: u32 = 300;

/// New ticket sale from the sales desk
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueTicketDto {
    /// Event name
    #[schema(example = "Nebula Open Air 2026")]
    pub event_name: String,

    /// Event venue
    #[schema(example = "Riverside Arena")]
    pub event_location: String,

    /// Event date, must be in the future
    pub event_date: DateTime<Utc>,

    /// Ticket price, must be positive
    #[schema(example = "100.00")]
    pub price: Decimal,

    /// Buyer full name
    #[schema(example = "Jane Doe")]
    pub buyer_name: String,

    /// Buyer email, receives the QR code
    #[schema(example = "jane@example.com")]
    pub buyer_email: String,

    /// Optional buyer phone number
    pub buyer_phone: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueTicketResponse {
    /// The newly issued ticket
    ticket: TicketDto,

    /// Rendered QR image URL for immediate display
    #[schema(example = "https://api.qrserver.com/v1/create-qr-code/?size=300x300&data=NEBULA-...")]
    qr_image_url: String,

    #[schema(example = "Ticket created successfully. The QR code has been emailed to the buyer.")]
    message: String,
}

/// Issue a new ticket
///
/// Creates a ticket with a unique number and QR code, then emails the QR code
/// to the buyer in the background. Requires the admin or sales role.
#[utoipa::path(
    post,
    path = "/api/tickets",
    tag = "tickets",
    request_body = IssueTicketDto,
    security(("bearer_auth" = [])),
    responses(
        (
            status = 201,
            description = "Ticket issued",
            body = inline(SuccessResponse<IssueTicketResponse>),
            example = json!({
                "success": true,
                "data": {
                    "ticket": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "ticketNumber": "NBL-1A2B3C4D5E6F",
                        "eventName": "Nebula Open Air 2026",
                        "status": "active"
                    },
                    "qrImageUrl": "https://api.qrserver.com/v1/create-qr-code/?size=300x300&data=NEBULA-1717286400000-a1b2c3d4e",
                    "message": "Ticket created successfully. The QR code has been emailed to the buyer."
                }
            })
        ),
        (
            status = 400,
            description = "Invalid ticket data",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "buyerEmail is required"
                }
            })
        ),
        (
            status = 409,
            description = "Generated ticket number or QR code already exists",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "DUPLICATE_TICKET",
                    "message": "Ticket number or QR code already exists"
                }
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller cannot sell tickets", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/tickets")]
pub async fn issue_ticket_handler(
    staff: SalesAccess,
    req: web::Json<IssueTicketDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(
        buyer_email = %dto.buyer_email,
        event_name = %dto.event_name,
        sold_by = %staff.user_id,
        "Ticket issuance requested"
    );

    let request = match IssueTicketRequest::new(
        dto.event_name,
        dto.event_location,
        dto.event_date,
        dto.price,
        dto.buyer_name,
        dto.buyer_email,
        dto.buyer_phone,
    ) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Ticket issuance rejected");
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data
        .issue_ticket_orchestrator
        .issue_ticket(request, staff.user_id)
        .await
    {
        Ok(output) => {
            info!(
                ticket_number = %output.ticket.ticket_number,
                "Ticket issued successfully"
            );
            let qr_image_url = qr_image_url(&output.ticket.qr_code, QR_IMAGE_SIZE);
            ApiResponse::created(IssueTicketResponse {
                ticket: TicketDto::from(output.ticket),
                qr_image_url,
                message: output.message,
            })
        }

        Err(IssueTicketError::DuplicateTicket) => {
            warn!("Ticket issuance hit a duplicate ticket number or QR code");
            ApiResponse::conflict("DUPLICATE_TICKET", "Ticket number or QR code already exists")
        }

        Err(IssueTicketError::EventReferenceBroken) => {
            error!("Ticket insert rejected the resolved event reference");
            ApiResponse::not_found("EVENT_NOT_FOUND", "Referenced event does not exist")
        }

        Err(IssueTicketError::RepositoryError(ref e)) => {
            error!(error = %e, "Ticket issuance failed");
            ApiResponse::internal_error()
        }
    }
}
