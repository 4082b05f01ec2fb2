use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::dto::UserDto;
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Login request from the staff app
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Email address
    #[schema(example = "staff@nebulatickets.com")]
    pub email: String,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// JWT access token (short-lived)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    /// JWT refresh token (long-lived, revocable)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    refresh_token: String,

    /// Authenticated staff member
    user: UserDto,
}

/// Staff login
///
/// Authenticates a staff member with email and password, returns JWT access
/// and refresh tokens plus the account's role.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponse>),
            example = json!({
                "success": true,
                "data": {
                    "accessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "refreshToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "user": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "email": "staff@nebulatickets.com",
                        "name": "Jane Staff",
                        "role": "sales",
                        "isActive": true
                    }
                }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password"
                }
            })
        ),
        (
            status = 403,
            description = "Account has been disabled",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "ACCOUNT_DISABLED",
                    "message": "This account has been disabled"
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INTERNAL_ERROR",
                    "message": "An unexpected error occurred"
                }
            })
        ),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Login attempt");

    let request = match LoginRequest::new(&dto.email, &dto.password) {
        Ok(request) => request,
        Err(_) => {
            warn!("Login rejected: malformed credentials");
            return ApiResponse::bad_request("VALIDATION_ERROR", "Email and password are required");
        }
    };

    match data.login_user_use_case.execute(request).await {
        Ok(output) => {
            info!(
                user_id = %output.user.id,
                role = %output.user.role.as_str(),
                "Staff member logged in"
            );
            ApiResponse::success(LoginResponse {
                access_token: output.access_token,
                refresh_token: output.refresh_token,
                user: UserDto::from(output.user),
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::AccountDisabled) => {
            warn!("Login failed: account disabled");
            ApiResponse::forbidden("ACCOUNT_DISABLED", "This account has been disabled")
        }

        Err(LoginError::PasswordVerificationFailed) => {
            error!("Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::RepositoryError(ref e)) => {
            error!(error = %e, "Login query failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::auth::application::use_cases::login_user::{ILoginUserUseCase, LoginOutput};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::staff_user;
    use crate::tests::support::load_test_env;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockLoginSuccess;

    #[async_trait]
    impl ILoginUserUseCase for MockLoginSuccess {
        async fn execute(&self, request: LoginRequest) -> Result<LoginOutput, LoginError> {
            assert_eq!(request.email(), "staff@nebulatickets.com");
            Ok(LoginOutput {
                user: staff_user(UserRole::Sales),
                access_token: "eyJhbGciOiJIUzI1NiJ9.access".to_string(),
                refresh_token: "eyJhbGciOiJIUzI1NiJ9.refresh".to_string(),
            })
        }
    }

    struct MockLoginDisabled;

    #[async_trait]
    impl ILoginUserUseCase for MockLoginDisabled {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginOutput, LoginError> {
            Err(LoginError::AccountDisabled)
        }
    }

    struct MockLoginRepositoryError;

    #[async_trait]
    impl ILoginUserUseCase for MockLoginRepositoryError {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginOutput, LoginError> {
            Err(LoginError::RepositoryError(
                "connection pool exhausted".to_string(),
            ))
        }
    }

    async fn call(
        app_state: actix_web::web::Data<crate::AppState>,
        body: serde_json::Value,
    ) -> actix_web::dev::ServiceResponse {
        let app =
            test::init_service(App::new().app_data(app_state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(&body)
            .to_request();

        test::call_service(&app, req).await
    }

    fn valid_login_json() -> serde_json::Value {
        serde_json::json!({
            "email": "staff@nebulatickets.com",
            "password": "SecurePass123!"
        })
    }

    #[actix_web::test]
    async fn test_login_success() {
        load_test_env();
        let app_state = TestAppStateBuilder::default()
            .with_login_user(MockLoginSuccess)
            .build();

        let resp = call(app_state, valid_login_json()).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(body["data"]["accessToken"].is_string());
        assert!(body["data"]["refreshToken"].is_string());
        assert_eq!(body["data"]["user"]["role"], "sales");
        assert!(body["data"]["user"].get("passwordHash").is_none());
    }

    #[actix_web::test]
    async fn test_login_normalizes_email_before_use_case() {
        let app_state = TestAppStateBuilder::default()
            .with_login_user(MockLoginSuccess)
            .build();

        let resp = call(
            app_state,
            serde_json::json!({
                "email": "  STAFF@NebulaTickets.com  ",
                "password": "SecurePass123!"
            }),
        )
        .await;
        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_login_invalid_credentials() {
        let app_state = TestAppStateBuilder::default().build();

        let resp = call(app_state, valid_login_json()).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
        assert_eq!(body["error"]["message"], "Invalid email or password");
    }

    #[actix_web::test]
    async fn test_login_disabled_account() {
        let app_state = TestAppStateBuilder::default()
            .with_login_user(MockLoginDisabled)
            .build();

        let resp = call(app_state, valid_login_json()).await;
        assert_eq!(resp.status(), 403);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ACCOUNT_DISABLED");
    }

    #[actix_web::test]
    async fn test_login_repository_error_is_opaque() {
        let app_state = TestAppStateBuilder::default()
            .with_login_user(MockLoginRepositoryError)
            .build();

        let resp = call(app_state, valid_login_json()).await;
        assert_eq!(resp.status(), 500);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"]["message"], "An unexpected error occurred");
    }

    #[actix_web::test]
    async fn test_login_rejects_invalid_email_format() {
        let app_state = TestAppStateBuilder::default()
            .with_login_user(MockLoginSuccess)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_user_handler)).await;

        for email in ["notanemail", "missing@", "@nodomain.com", ""] {
            let req = test::TestRequest::post()
                .uri("/api/auth/login")
                .set_json(&serde_json::json!({
                    "email": email,
                    "password": "password123"
                }))
                .to_request();

            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 400, "should reject email: {}", email);

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[actix_web::test]
    async fn test_login_rejects_empty_password() {
        let app_state = TestAppStateBuilder::default()
            .with_login_user(MockLoginSuccess)
            .build();

        let resp = call(
            app_state,
            serde_json::json!({
                "email": "staff@nebulatickets.com",
                "password": ""
            }),
        )
        .await;
        assert_eq!(resp.status(), 400);
    }
}
