use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use prodapi_products::RegistryError;

use crate::app::dto;

pub const MSG_NOT_FOUND: &str = "Produto não encontrado";
pub const MSG_INVALID: &str = "Dados inválidos";
pub const MSG_ROUTE_NOT_FOUND: &str = "Recurso não encontrado";
pub const MSG_DOCS_UNAVAILABLE: &str = "Documentação indisponível";
pub const MSG_INTERNAL: &str = "Erro interno do servidor";

pub fn registry_error_to_response(err: RegistryError) -> Response {
    match err {
        RegistryError::Validation(detail) => {
            tracing::debug!(%detail, "rejected product payload");
            json_error(StatusCode::BAD_REQUEST, MSG_INVALID)
        }
        RegistryError::NotFound(_) => json_error(StatusCode::NOT_FOUND, MSG_NOT_FOUND),
    }
}

pub fn json_error(status: StatusCode, message: &str) -> Response {
    (status, Json(dto::message_json(message))).into_response()
}

/// Response for a handler that panicked.
pub fn panic_to_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(%detail, "handler panicked");

    json_error(StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL)
}
