use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Any staff member with a valid access token
#[derive(Debug, Clone)]
pub struct AuthenticatedStaff {
    pub user_id: Uuid,
    pub role: UserRole,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedStaff {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let jwt_service =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(service) => service,
                None => {
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        // Extract token from Authorization header
        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match jwt_service.verify_token(&token) {
            Ok(claims) => {
                if claims.token_type != "access" {
                    return ready(Err(create_api_error(ApiResponse::unauthorized(
                        "INVALID_TOKEN_TYPE",
                        "Invalid token type",
                    ))));
                }

                ready(Ok(AuthenticatedStaff {
                    user_id: claims.sub,
                    role: claims.role,
                }))
            }
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

fn forbidden() -> ActixError {
    create_api_error(ApiResponse::forbidden(
        "INSUFFICIENT_PERMISSIONS",
        "You do not have permission to perform this action",
    ))
}

/// Staff allowed to issue, resend and cancel tickets
#[derive(Debug, Clone)]
pub struct SalesAccess {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl FromRequest for SalesAccess {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match AuthenticatedStaff::from_request(req, payload).into_inner() {
            Ok(staff) if staff.role.can_sell() => ready(Ok(SalesAccess {
                user_id: staff.user_id,
                role: staff.role,
            })),
            Ok(_) => ready(Err(forbidden())),
            Err(e) => ready(Err(e)),
        }
    }
}

/// Staff allowed to validate and redeem tickets at the door
#[derive(Debug, Clone)]
pub struct ScannerAccess {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl FromRequest for ScannerAccess {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match AuthenticatedStaff::from_request(req, payload).into_inner() {
            Ok(staff) if staff.role.can_scan() => ready(Ok(ScannerAccess {
                user_id: staff.user_id,
                role: staff.role,
            })),
            Ok(_) => ready(Err(forbidden())),
            Err(e) => ready(Err(e)),
        }
    }
}

/// Staff allowed to manage users and see sales dashboards
#[derive(Debug, Clone)]
pub struct AdminAccess {
    pub user_id: Uuid,
}

impl FromRequest for AdminAccess {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match AuthenticatedStaff::from_request(req, payload).into_inner() {
            Ok(staff) if staff.role.can_administer() => ready(Ok(AdminAccess {
                user_id: staff.user_id,
            })),
            Ok(_) => ready(Err(forbidden())),
            Err(e) => ready(Err(e)),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
