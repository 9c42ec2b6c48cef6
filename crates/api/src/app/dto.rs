use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

use prodapi_products::ProductId;

use crate::app::errors;

/// `{"mensagem": ...}` body used for errors and plain confirmations.
pub fn message_json(message: &str) -> serde_json::Value {
    serde_json::json!({ "mensagem": message })
}

/// Unwrap a JSON body, treating any rejection (missing content type, syntax
/// error, wrong field types) as an absent body.
pub fn body_or_none<T>(body: Result<Json<T>, JsonRejection>) -> Option<T> {
    match body {
        Ok(Json(value)) => Some(value),
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "unusable request body");
            None
        }
    }
}

/// Parse an `{id}` path segment. Non-integer ids name no product.
pub fn parse_product_id(raw: &str) -> Result<ProductId, Response> {
    raw.parse()
        .map_err(|_| errors::json_error(StatusCode::NOT_FOUND, errors::MSG_NOT_FOUND))
}
