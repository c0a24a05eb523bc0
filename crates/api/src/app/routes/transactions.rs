use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/", post(create_transaction))
}

pub async fn create_transaction(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateTransactionRequest>,
) -> axum::response::Response {
    let new = match body.into_new_transaction() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.submit_transaction(new) {
        Ok(tx) => (StatusCode::CREATED, Json(dto::transaction_created_to_json(tx))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
