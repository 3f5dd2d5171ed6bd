// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;
use tracing::warn;

/// Body extraction failures (bad JSON, wrong content type) answer 400 in
/// the same `{error}` shape as every other rejection.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, req| {
        let message = err.to_string();
        warn!(path = %req.path(), error = %message, "Rejected request body");
        actix_web::error::InternalError::from_response(err, ApiResponse::bad_request(&message))
            .into()
    })
}
