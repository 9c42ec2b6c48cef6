use axum::{routing::get, Router};

pub mod docs;
pub mod products;
pub mod system;

/// Router for the product endpoints and their documentation.
pub fn router() -> Router {
    Router::new()
        .nest("/produtos", products::router())
        .route("/static/swagger.yaml", get(docs::openapi_document))
        .route("/api/docs", get(docs::docs_ui))
        .route("/api/docs/", get(docs::docs_ui))
}
