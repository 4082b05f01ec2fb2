use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::auth::application::use_cases::logout_user::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogoutDto {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct LogoutResponse {
    #[schema(example = "Logged out successfully")]
    message: String,
}

/// Staff logout
///
/// Revokes the session behind the given refresh token. Logging out an
/// already-revoked session still succeeds.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    request_body = LogoutDto,
    responses(
        (status = 200, description = "Session revoked"),
        (status = 500, description = "Internal server error"),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    req: web::Json<LogoutDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data.logout_user_use_case.execute(&dto.refresh_token).await {
        Ok(()) => {
            info!("Staff member logged out");
            ApiResponse::success(LogoutResponse {
                message: "Logged out successfully".to_string(),
            })
        }
        Err(LogoutError::RepositoryError(ref e)) => {
            error!(error = %e, "Logout failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::logout_user::ILogoutUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockLogoutRepositoryError;

    #[async_trait]
    impl ILogoutUserUseCase for MockLogoutRepositoryError {
        async fn execute(&self, _refresh_token: &str) -> Result<(), LogoutError> {
            Err(LogoutError::RepositoryError("db down".to_string()))
        }
    }

    async fn call(
        app_state: actix_web::web::Data<crate::AppState>,
    ) -> actix_web::dev::ServiceResponse {
        let app =
            test::init_service(App::new().app_data(app_state).service(logout_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/logout")
            .set_json(&serde_json::json!({ "refreshToken": "some.refresh.token" }))
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_logout_success() {
        let app_state = TestAppStateBuilder::default().build();

        let resp = call(app_state).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["message"], "Logged out successfully");
    }

    #[actix_web::test]
    async fn test_logout_repository_error() {
        let app_state = TestAppStateBuilder::default()
            .with_logout_user(MockLogoutRepositoryError)
            .build();

        let resp = call(app_state).await;
        assert_eq!(resp.status(), 500);
    }
}
