use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::ScannerAccess;
use crate::shared::api::ApiResponse;
use crate::ticket::adapter::incoming::web::dto::TicketDto;
use crate::ticket::application::use_cases::scan_ticket::ScanTicketError;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateQrDto {
    /// Raw QR payload
    #[schema(example = "NEBULA-1717286400000-a1b2c3d4e")]
    pub qr_data: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateQrResponse {
    /// Null when the QR code does not match any ticket
    ticket: Option<TicketDto>,

    is_valid: bool,

    message: String,
}

/// Validate a QR code
///
/// Scanner-device alias for the ticket scan route; same verdict semantics,
/// always HTTP 200.
#[utoipa::path(
    post,
    path = "/api/qr/validate",
    tag = "qr",
    request_body = ValidateQrDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Validation verdict"),
        (status = 400, description = "Empty QR payload"),
    )
)]
#[post("/api/qr/validate")]
pub async fn validate_qr_handler(
    _staff: ScannerAccess,
    req: web::Json<ValidateQrDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data.scan_ticket_use_case.execute(&dto.qr_data).await {
        Ok(result) => ApiResponse::success(ValidateQrResponse {
            ticket: result.ticket.map(TicketDto::from),
            is_valid: result.is_valid,
            message: result.message,
        }),
        Err(ScanTicketError::EmptyQrData) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "QR data is required")
        }
        Err(ScanTicketError::QueryError(ref e)) => {
            error!(error = %e, "QR validation failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{access_token, test_token_provider};
    use crate::tests::support::fixtures::ticket_view;
    use crate::ticket::application::domain::entities::TicketStatus;
    use crate::ticket::application::use_cases::scan_ticket::{IScanTicketUseCase, ScanResult};
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockScanValid;

    #[async_trait]
    impl IScanTicketUseCase for MockScanValid {
        async fn execute(&self, _qr_data: &str) -> Result<ScanResult, ScanTicketError> {
            Ok(ScanResult {
                ticket: Some(ticket_view(TicketStatus::Active)),
                is_valid: true,
                message: "Ticket is valid".to_string(),
            })
        }
    }

    async fn call(
        app_state: actix_web::web::Data<crate::AppState>,
        role: UserRole,
    ) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(validate_qr_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/qr/validate")
            .insert_header(("Authorization", format!("Bearer {}", access_token(role))))
            .set_json(&serde_json::json!({ "qrData": "NEBULA-1717286400000-a1b2c3d4e" }))
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_validate_qr_valid_ticket() {
        let app_state = TestAppStateBuilder::default()
            .with_scan_ticket(MockScanValid)
            .build();

        let resp = call(app_state, UserRole::Scanner).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["isValid"], true);
        assert_eq!(body["data"]["message"], "Ticket is valid");
    }

    #[actix_web::test]
    async fn test_validate_qr_unknown_token_still_http_200() {
        let app_state = TestAppStateBuilder::default().build();

        let resp = call(app_state, UserRole::Scanner).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["isValid"], false);
        // Unknown codes report an explicit null ticket, not an omitted key
        assert!(body["data"]["ticket"].is_null());
        assert!(body["data"]
            .as_object()
            .is_some_and(|data| data.contains_key("ticket")));
    }

    #[actix_web::test]
    async fn test_validate_qr_sales_role_forbidden() {
        let app_state = TestAppStateBuilder::default().build();

        let resp = call(app_state, UserRole::Sales).await;
        assert_eq!(resp.status(), 403);
    }
}
