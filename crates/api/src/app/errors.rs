use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use orderflow_core::DomainError;
use orderflow_fulfillment::FulfillmentError;

pub fn fulfillment_error_to_response(err: FulfillmentError) -> axum::response::Response {
    match err {
        FulfillmentError::NotFound(id) => json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("order not found for id: {id}"),
        ),
        FulfillmentError::InvalidState(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid_state", msg)
        }
        FulfillmentError::Domain(e) => domain_error_to_response(e),
        FulfillmentError::Store(e) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "store_error",
            e.to_string(),
        ),
        FulfillmentError::Notification(e) => {
            json_error(StatusCode::BAD_GATEWAY, "notification_error", e.to_string())
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::InvalidState(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid_state", msg)
        }
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
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
