//! Order-level orchestration.

use std::sync::Arc;

use orderflow_core::OrderId;
use orderflow_products::Product;
use orderflow_sales::Order;

use crate::engine::FulfillmentEngine;
use crate::error::{FulfillmentError, FulfillmentResult};
use crate::ports::OrderStore;

/// Loads an order and runs the [`FulfillmentEngine`] over each of its products.
///
/// Products are handled one at a time in ascending product id order. There is
/// no rollback: if product N fails, effects already applied for earlier
/// products stay applied.
pub struct OrderProcessor {
    orders: Arc<dyn OrderStore>,
    engine: FulfillmentEngine,
}

impl OrderProcessor {
    pub fn new(orders: Arc<dyn OrderStore>, engine: FulfillmentEngine) -> Self {
        Self { orders, engine }
    }

    pub fn engine(&self) -> &FulfillmentEngine {
        &self.engine
    }

    /// Process every product of `order_id` and return the order.
    ///
    /// The returned order carries each product's state after processing.
    pub fn process_order(&self, order_id: OrderId) -> FulfillmentResult<Order> {
        let mut order = self
            .orders
            .find_by_id(order_id)?
            .ok_or(FulfillmentError::NotFound(order_id))?;

        for record in order.items_mut() {
            let mut product = Product::try_from(record.clone())?;
            self.engine.process(&mut product)?;
            *record = product.into_record();
        }

        Ok(order)
    }
}
