use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::auth::application::use_cases::refresh_session::RefreshError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenDto {
    /// Refresh token issued at login
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponse {
    /// Fresh JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,
}

/// Refresh the access token
///
/// Exchanges a live refresh token for a new access token. The refresh token
/// must verify as a JWT and its session must not have been revoked.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenDto,
    responses(
        (status = 200, description = "New access token issued"),
        (status = 401, description = "Refresh token invalid, expired or revoked"),
        (status = 403, description = "Account has been disabled"),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data
        .refresh_session_use_case
        .execute(&dto.refresh_token)
        .await
    {
        Ok(output) => {
            info!("Access token refreshed");
            ApiResponse::success(RefreshTokenResponse {
                access_token: output.access_token,
            })
        }

        Err(RefreshError::InvalidRefreshToken) => {
            warn!("Refresh rejected: invalid or revoked token");
            ApiResponse::unauthorized("INVALID_TOKEN", "Refresh token is invalid or has expired")
        }

        Err(RefreshError::AccountDisabled) => {
            warn!("Refresh rejected: account disabled");
            ApiResponse::forbidden("ACCOUNT_DISABLED", "This account has been disabled")
        }

        Err(RefreshError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed during refresh");
            ApiResponse::internal_error()
        }

        Err(RefreshError::RepositoryError(ref e)) => {
            error!(error = %e, "Session lookup failed during refresh");
            ApiResponse::internal_error()
        }
    }
}
