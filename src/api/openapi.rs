use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};

use crate::auth::adapter::incoming::web::dto::UserDto;
use crate::auth::adapter::incoming::web::routes::{
    ChangePasswordDto, ChangePasswordResponse, CreateUserDto, DeactivateUserResponse,
    LoginRequestDto, LoginResponse, LogoutDto, LogoutResponse, RefreshTokenDto,
    RefreshTokenResponse, UpdateUserDto,
};
use crate::qr::adapter::incoming::web::routes::{MarkUsedQrDto, ValidateQrDto, ValidateQrResponse};
use crate::ticket::adapter::incoming::web::dto::TicketDto;
use crate::ticket::adapter::incoming::web::routes::{
    CancelTicketResponse, IssueTicketDto, IssueTicketResponse, ResendTicketDto,
    ResendTicketResponse, SalesStatsDto, ScanTicketDto, ScanTicketResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nebula Tickets API",
        version = "1.0.0",
        description = "Event ticket sales, QR validation and staff management",
        contact(
            name = "API Support",
            email = "support@nebulatickets.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token::refresh_token_handler,
        crate::auth::adapter::incoming::web::routes::logout_user::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::fetch_profile::fetch_profile_handler,
        crate::auth::adapter::incoming::web::routes::change_password::change_password_handler,

        // Ticket endpoints
        crate::ticket::adapter::incoming::web::routes::issue_ticket::issue_ticket_handler,
        crate::ticket::adapter::incoming::web::routes::list_tickets::list_tickets_handler,
        crate::ticket::adapter::incoming::web::routes::fetch_ticket::fetch_ticket_handler,
        crate::ticket::adapter::incoming::web::routes::resend_ticket::resend_ticket_handler,
        crate::ticket::adapter::incoming::web::routes::scan_ticket::scan_ticket_handler,
        crate::ticket::adapter::incoming::web::routes::redeem_ticket::redeem_ticket_handler,
        crate::ticket::adapter::incoming::web::routes::cancel_ticket::cancel_ticket_handler,

        // QR scanner endpoints
        crate::qr::adapter::incoming::web::routes::validate_qr::validate_qr_handler,
        crate::qr::adapter::incoming::web::routes::mark_used_qr::mark_used_qr_handler,

        // Admin endpoints
        crate::ticket::adapter::incoming::web::routes::sales_stats::sales_stats_handler,
        crate::auth::adapter::incoming::web::routes::create_user::create_user_handler,
        crate::auth::adapter::incoming::web::routes::list_users::list_users_handler,
        crate::auth::adapter::incoming::web::routes::update_user::update_user_handler,
        crate::auth::adapter::incoming::web::routes::deactivate_user::deactivate_user_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            LoginRequestDto,
            LoginResponse,
            RefreshTokenDto,
            RefreshTokenResponse,
            LogoutDto,
            LogoutResponse,
            ChangePasswordDto,
            ChangePasswordResponse,
            UserDto,
            CreateUserDto,
            UpdateUserDto,
            DeactivateUserResponse,

            // Ticket DTOs
            TicketDto,
            IssueTicketDto,
            IssueTicketResponse,
            ScanTicketDto,
            ScanTicketResponse,
            ResendTicketDto,
            ResendTicketResponse,
            CancelTicketResponse,
            SalesStatsDto,

            // QR DTOs
            ValidateQrDto,
            ValidateQrResponse,
            MarkUsedQrDto
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Staff authentication endpoints"),
        (name = "tickets", description = "Ticket sales and lifecycle endpoints"),
        (name = "qr", description = "Scanner device endpoints"),
        (name = "admin", description = "Admin-only statistics and staff management"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT access token"))
                        .build(),
                ),
            )
        }
    }
}
