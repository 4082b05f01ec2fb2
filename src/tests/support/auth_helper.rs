use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub fn test_jwt_service() -> JwtTokenService {
    let config = JwtConfig {
        secret_key: std::env::var("TEST_JWT_SECRET")
            .unwrap_or_else(|_| "FAKE_JWT_SECRET_DO_NOT_USE".to_string()),
        issuer: "test_issuer".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86400,
    };
    JwtTokenService::new(config)
}

pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(test_jwt_service())
}

pub fn access_token_for(user_id: Uuid, role: UserRole) -> String {
    test_jwt_service()
        .generate_access_token(user_id, role)
        .expect("token generation should not fail in tests")
}

pub fn access_token(role: UserRole) -> String {
    access_token_for(Uuid::new_v4(), role)
}
