use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use prodapi_products::{ProductInput, ProductPatch};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub const MSG_REMOVED: &str = "Produto removido com sucesso";

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", get(get_product).put(update_product).delete(delete_product))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.registry().list())).into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_product_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.registry().get(id) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => errors::registry_error_to_response(e),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> axum::response::Response {
    match services.registry().create(dto::body_or_none(body)) {
        Ok(product) => {
            tracing::info!(id = product.id, "product created");
            (StatusCode::CREATED, Json(product)).into_response()
        }
        Err(e) => errors::registry_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<ProductPatch>, JsonRejection>,
) -> axum::response::Response {
    let id = match dto::parse_product_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.registry().update(id, dto::body_or_none(body)) {
        Ok(product) => {
            tracing::info!(id, "product updated");
            (StatusCode::OK, Json(product)).into_response()
        }
        Err(e) => errors::registry_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_product_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.registry().delete(id) {
        Ok(_) => {
            tracing::info!(id, "product deleted");
            (StatusCode::OK, Json(dto::message_json(MSG_REMOVED))).into_response()
        }
        Err(e) => errors::registry_error_to_response(e),
    }
}
