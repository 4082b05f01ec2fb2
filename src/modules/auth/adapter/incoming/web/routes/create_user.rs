use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::dto::UserDto;
use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::auth::application::use_cases::create_user::{CreateUserError, CreateUserRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct CreateUserDto {
    #[schema(example = "new.staff@nebulatickets.com")]
    pub email: String,

    #[schema(example = "New Staff")]
    pub name: String,

    /// Initial password, minimum 6 characters
    #[schema(example = "SecurePass123!")]
    pub password: String,

    /// "admin" | "sales" | "scanner"
    #[schema(example = "scanner")]
    pub role: String,
}

/// Create a staff account
///
/// Admin-only. The password is hashed before storage.
#[utoipa::path(
    post,
    path = "/api/admin/users",
    tag = "admin",
    request_body = CreateUserDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Account created"),
        (status = 400, description = "Invalid account data"),
        (status = 403, description = "Caller is not an admin"),
        (status = 409, description = "Email already registered"),
    )
)]
#[post("/api/admin/users")]
pub async fn create_user_handler(
    admin: AdminAccess,
    req: web::Json<CreateUserDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, created_by = %admin.user_id, "Staff account creation requested");

    let request = match CreateUserRequest::new(&dto.email, &dto.name, &dto.password, &dto.role) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Staff account creation rejected");
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.create_user_use_case.execute(request).await {
        Ok(user) => {
            info!(user_id = %user.id, "Staff account created");
            ApiResponse::created(UserDto::from(user))
        }

        Err(CreateUserError::EmailAlreadyTaken) => {
            warn!("Staff account creation hit an existing email");
            ApiResponse::conflict("DUPLICATE_ENTRY", "A user with this email already exists")
        }

        Err(
            e @ (CreateUserError::InvalidEmail
            | CreateUserError::EmptyName
            | CreateUserError::PasswordTooShort
            | CreateUserError::InvalidRole),
        ) => ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),

        Err(CreateUserError::HashingFailed) => {
            error!("Password hashing failed");
            ApiResponse::internal_error()
        }

        Err(CreateUserError::RepositoryError(ref e)) => {
            error!(error = %e, "Staff account creation failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{User, UserRole};
    use crate::auth::application::use_cases::create_user::ICreateUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{access_token, test_token_provider};
    use crate::tests::support::fixtures::staff_user;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockCreateSuccess;

    #[async_trait]
    impl ICreateUserUseCase for MockCreateSuccess {
        async fn execute(&self, _request: CreateUserRequest) -> Result<User, CreateUserError> {
            Ok(staff_user(UserRole::Scanner))
        }
    }

    struct MockCreateDuplicate;

    #[async_trait]
    impl ICreateUserUseCase for MockCreateDuplicate {
        async fn execute(&self, _request: CreateUserRequest) -> Result<User, CreateUserError> {
            Err(CreateUserError::EmailAlreadyTaken)
        }
    }

    fn valid_create_json() -> serde_json::Value {
        serde_json::json!({
            "email": "new.staff@nebulatickets.com",
            "name": "New Staff",
            "password": "SecurePass123!",
            "role": "scanner"
        })
    }

    async fn call(
        app_state: actix_web::web::Data<crate::AppState>,
        role: UserRole,
        body: serde_json::Value,
    ) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(create_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/users")
            .insert_header(("Authorization", format!("Bearer {}", access_token(role))))
            .set_json(&body)
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_create_user_success() {
        let app_state = TestAppStateBuilder::default()
            .with_create_user(MockCreateSuccess)
            .build();

        let resp = call(app_state, UserRole::Admin, valid_create_json()).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["role"], "scanner");
        assert!(body["data"].get("passwordHash").is_none());
    }

    #[actix_web::test]
    async fn test_create_user_duplicate_email_conflict() {
        let app_state = TestAppStateBuilder::default()
            .with_create_user(MockCreateDuplicate)
            .build();

        let resp = call(app_state, UserRole::Admin, valid_create_json()).await;
        assert_eq!(resp.status(), 409);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "DUPLICATE_ENTRY");
    }

    #[actix_web::test]
    async fn test_create_user_unknown_role_rejected() {
        let app_state = TestAppStateBuilder::default().build();

        let mut body = valid_create_json();
        body["role"] = serde_json::json!("manager");

        let resp = call(app_state, UserRole::Admin, body).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_create_user_short_password_rejected() {
        let app_state = TestAppStateBuilder::default().build();

        let mut body = valid_create_json();
        body["password"] = serde_json::json!("abc");

        let resp = call(app_state, UserRole::Admin, body).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_create_user_non_admin_forbidden() {
        let app_state = TestAppStateBuilder::default().build();

        let resp = call(app_state, UserRole::Sales, valid_create_json()).await;
        assert_eq!(resp.status(), 403);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INSUFFICIENT_PERMISSIONS");
    }
}
