use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::web::JsonConfig;
use actix_web::HttpRequest;

use crate::shared::api::ApiResponse;

/// JSON extractor config that keeps deserialization failures inside the
/// standard response envelope instead of actix's plain-text 400.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    InternalError::from_response(err, ApiResponse::bad_request("VALIDATION_ERROR", &message))
        .into()
}
