use axum::Router;

pub mod drivers;
pub mod system;
pub mod transactions;

/// Router for the domain endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/transactions", transactions::router())
        .nest("/drivers", drivers::router())
}
