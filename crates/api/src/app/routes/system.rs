use axum::http::StatusCode;
use axum::response::Response;

use crate::app::errors;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Fallback for unmatched routes.
pub async fn not_found() -> Response {
    errors::json_error(StatusCode::NOT_FOUND, errors::MSG_ROUTE_NOT_FOUND)
}
