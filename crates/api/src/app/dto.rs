use serde::Serialize;

use orderflow_core::OrderId;

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ProcessOrderResponse {
    pub id: OrderId,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
