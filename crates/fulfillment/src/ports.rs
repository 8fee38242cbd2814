//! Collaborator traits used by the fulfillment core.
//!
//! Implementations live outside this crate (`orderflow-infra` for in-memory and
//! logging adapters). All calls are synchronous; failures are returned to the
//! caller as-is.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use orderflow_core::OrderId;
use orderflow_products::Product;
use orderflow_sales::Order;

use crate::error::{NotificationError, StoreError};

/// Lookup of orders by id.
pub trait OrderStore: Send + Sync {
    fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError>;
}

/// Persistence of catalog products.
pub trait CatalogStore: Send + Sync {
    /// Persist the product's current state. Saving the same state twice has
    /// the same effect as saving it once.
    fn save(&self, product: &Product) -> Result<(), StoreError>;
}

/// Outbound customer notifications.
pub trait NotificationGateway: Send + Sync {
    fn send_delay_notification(
        &self,
        lead_time: u32,
        product_name: &str,
    ) -> Result<(), NotificationError>;

    fn send_out_of_stock_notification(&self, product_name: &str) -> Result<(), NotificationError>;

    fn send_expiration_notification(
        &self,
        product_name: &str,
        expiry_date: NaiveDate,
    ) -> Result<(), NotificationError>;
}

/// Source of "today" for date-based rules.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Current UTC date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// A notification as issued through [`NotificationGateway`].
///
/// Gateways that record or log what they were asked to send use this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    Delay {
        lead_time: u32,
        product_name: String,
    },
    OutOfStock {
        product_name: String,
    },
    Expiration {
        product_name: String,
        expiry_date: NaiveDate,
    },
}

impl Notification {
    pub fn product_name(&self) -> &str {
        match self {
            Notification::Delay { product_name, .. }
            | Notification::OutOfStock { product_name }
            | Notification::Expiration { product_name, .. } => product_name,
        }
    }
}
