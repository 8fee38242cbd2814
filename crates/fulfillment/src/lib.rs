//! Order fulfillment: per-product decisions and order orchestration.
//!
//! - `ports`: the collaborator traits the core calls (stores, notifications, clock)
//! - `engine`: the per-product decision rules (`FulfillmentEngine`)
//! - `processor`: loads an order and runs the engine over every product (`OrderProcessor`)
//!
//! Everything here is synchronous and performs IO only through the ports.

pub mod engine;
pub mod error;
pub mod ports;
pub mod processor;

#[cfg(test)]
pub(crate) mod testing;

pub use engine::FulfillmentEngine;
pub use error::{FulfillmentError, FulfillmentResult, NotificationError, StoreError};
pub use ports::{
    CatalogStore, Clock, FixedClock, Notification, NotificationGateway, OrderStore, SystemClock,
};
pub use processor::OrderProcessor;
