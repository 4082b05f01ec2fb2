use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::ScannerAccess;
use crate::shared::api::ApiResponse;
use crate::ticket::adapter::incoming::web::dto::TicketDto;
use crate::ticket::application::use_cases::scan_ticket::ScanTicketError;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanTicketDto {
    /// Raw QR payload as read by the scanner device
    #[schema(example = "NEBULA-1717286400000-a1b2c3d4e")]
    pub qr_data: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanTicketResponse {
    /// Null when the QR code does not match any ticket
    ticket: Option<TicketDto>,

    /// True only when the ticket exists and is still active
    is_valid: bool,

    /// Human-readable verdict for the scanner screen
    message: String,
}

/// Scan a QR code
///
/// Looks up a scanned QR payload and reports whether it grants entry. The
/// verdict is always HTTP 200; only an empty payload or a backend failure is
/// an error.
#[utoipa::path(
    post,
    path = "/api/tickets/scan",
    tag = "tickets",
    request_body = ScanTicketDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Scan verdict"),
        (status = 400, description = "Empty QR payload"),
        (status = 403, description = "Caller cannot scan tickets"),
    )
)]
#[post("/api/tickets/scan")]
pub async fn scan_ticket_handler(
    _staff: ScannerAccess,
    req: web::Json<ScanTicketDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data.scan_ticket_use_case.execute(&dto.qr_data).await {
        Ok(result) => {
            info!(is_valid = result.is_valid, "QR scan completed");
            ApiResponse::success(ScanTicketResponse {
                ticket: result.ticket.map(TicketDto::from),
                is_valid: result.is_valid,
                message: result.message,
            })
        }
        Err(ScanTicketError::EmptyQrData) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "QR data is required")
        }
        Err(ScanTicketError::QueryError(ref e)) => {
            error!(error = %e, "QR scan failed");
            ApiResponse::internal_error()
        }
    }
}
