//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the ledger + wallet engine and the submit-implies-credit policy
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::http::Method;
use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    build_app_with_services(Arc::new(services::AppServices::from_config(config)))
}

/// Build the router around already-constructed services (tests inject a manual clock).
pub fn build_app_with_services(services: Arc<services::AppServices>) -> Router {
    // The mobile client runs in a browser during development.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(Extension(services)),
        )
}
