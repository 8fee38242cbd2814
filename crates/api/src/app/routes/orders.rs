use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use orderflow_core::OrderId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/:id/processOrder", post(process_order))
}

pub async fn process_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let order_id: OrderId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.processor.process_order(order_id) {
        Ok(order) => {
            tracing::info!(order_id = %order_id, products = order.len(), "order processed");
            (
                StatusCode::OK,
                Json(dto::ProcessOrderResponse {
                    id: order.id_typed(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(order_id = %order_id, error = %e, "order processing failed");
            errors::fulfillment_error_to_response(e)
        }
    }
}
