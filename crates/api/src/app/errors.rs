use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use gosvg_core::{DomainError, DriverId};

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::InvalidAmount(msg) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_amount", msg)
        }
        DomainError::InvalidIdentifier(msg) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_identifier", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn parse_driver_id(raw: String) -> Result<DriverId, axum::response::Response> {
    DriverId::parse(raw).map_err(domain_error_to_response)
}
