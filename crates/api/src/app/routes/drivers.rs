use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/:driver_id/earnings-today", get(get_earnings_today))
        .route("/:driver_id/transactions", get(list_driver_transactions))
        .route("/:driver_id/wallet", get(get_wallet))
        .route("/:driver_id/payouts", post(create_payout))
}

pub async fn get_earnings_today(
    Extension(services): Extension<Arc<AppServices>>,
    Path(driver_id): Path<String>,
) -> axum::response::Response {
    let driver_id = match errors::parse_driver_id(driver_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let summary = services.earnings_today(&driver_id);
    (StatusCode::OK, Json(dto::earnings_today_to_json(&driver_id, summary))).into_response()
}

pub async fn list_driver_transactions(
    Extension(services): Extension<Arc<AppServices>>,
    Path(driver_id): Path<String>,
) -> axum::response::Response {
    let driver_id = match errors::parse_driver_id(driver_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let items = services.transactions_for_driver(&driver_id);
    (StatusCode::OK, Json(dto::transactions_to_json(items))).into_response()
}

pub async fn get_wallet(
    Extension(services): Extension<Arc<AppServices>>,
    Path(driver_id): Path<String>,
) -> axum::response::Response {
    let driver_id = match errors::parse_driver_id(driver_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    (StatusCode::OK, Json(dto::wallet_to_json(services.wallet(&driver_id)))).into_response()
}

pub async fn create_payout(
    Extension(services): Extension<Arc<AppServices>>,
    Path(driver_id): Path<String>,
) -> axum::response::Response {
    let driver_id = match errors::parse_driver_id(driver_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    (StatusCode::OK, Json(dto::wallet_to_json(services.payout(&driver_id)))).into_response()
}
