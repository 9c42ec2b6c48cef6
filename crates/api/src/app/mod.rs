//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the registry and docs location shared by handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request body/path mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use prodapi_products::{InMemoryProductRegistry, ProductRegistry};

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router over a freshly seeded registry (entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    build_app_with_registry(InMemoryProductRegistry::seeded(), config)
}

/// Build the router over a caller-supplied registry.
pub fn build_app_with_registry<R>(registry: R, config: &ApiConfig) -> Router
where
    R: ProductRegistry + 'static,
{
    let services = Arc::new(services::AppServices::new(registry, config.openapi_path.clone()));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .fallback(routes::system::not_found)
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(errors::panic_to_response)),
        )
}
