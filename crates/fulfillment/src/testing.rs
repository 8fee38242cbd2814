//! Recording test doubles for the fulfillment ports.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use orderflow_core::OrderId;
use orderflow_products::{Product, ProductRecord};
use orderflow_sales::Order;

use crate::engine::FulfillmentEngine;
use crate::error::{NotificationError, StoreError};
use crate::ports::{CatalogStore, FixedClock, Notification, NotificationGateway, OrderStore};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn product(record: ProductRecord) -> Product {
    Product::try_from(record).unwrap()
}

#[derive(Default)]
pub struct RecordingCatalog {
    saved: Mutex<Vec<ProductRecord>>,
    failure: Mutex<Option<StoreError>>,
}

impl RecordingCatalog {
    pub fn saved(&self) -> Vec<ProductRecord> {
        self.saved.lock().unwrap().clone()
    }

    pub fn saved_available(&self) -> Vec<u32> {
        self.saved().iter().map(|r| r.available).collect()
    }

    pub fn fail_with(&self, err: StoreError) {
        *self.failure.lock().unwrap() = Some(err);
    }
}

impl CatalogStore for RecordingCatalog {
    fn save(&self, product: &Product) -> Result<(), StoreError> {
        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }
        self.saved.lock().unwrap().push(product.record().clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
    failure: Mutex<Option<NotificationError>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }

    pub fn fail_with(&self, err: NotificationError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    fn record(&self, notification: Notification) -> Result<(), NotificationError> {
        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }
        self.sent.lock().unwrap().push(notification);
        Ok(())
    }
}

impl NotificationGateway for RecordingNotifier {
    fn send_delay_notification(
        &self,
        lead_time: u32,
        product_name: &str,
    ) -> Result<(), NotificationError> {
        self.record(Notification::Delay {
            lead_time,
            product_name: product_name.to_string(),
        })
    }

    fn send_out_of_stock_notification(&self, product_name: &str) -> Result<(), NotificationError> {
        self.record(Notification::OutOfStock {
            product_name: product_name.to_string(),
        })
    }

    fn send_expiration_notification(
        &self,
        product_name: &str,
        expiry_date: NaiveDate,
    ) -> Result<(), NotificationError> {
        self.record(Notification::Expiration {
            product_name: product_name.to_string(),
            expiry_date,
        })
    }
}

/// Order store backed by a map; counts lookups.
#[derive(Default)]
pub struct MapOrderStore {
    orders: Mutex<HashMap<OrderId, Order>>,
    lookups: Mutex<Vec<OrderId>>,
}

impl MapOrderStore {
    pub fn insert(&self, order: Order) {
        self.orders.lock().unwrap().insert(order.id_typed(), order);
    }

    pub fn lookups(&self) -> Vec<OrderId> {
        self.lookups.lock().unwrap().clone()
    }
}

impl OrderStore for MapOrderStore {
    fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        self.lookups.lock().unwrap().push(id);
        Ok(self.orders.lock().unwrap().get(&id).cloned())
    }
}

/// Recording doubles wired to a fixed date.
pub struct Harness {
    pub orders: Arc<MapOrderStore>,
    pub catalog: Arc<RecordingCatalog>,
    pub notifier: Arc<RecordingNotifier>,
    pub clock: FixedClock,
}

impl Harness {
    pub fn at(today: NaiveDate) -> Self {
        Self {
            orders: Arc::new(MapOrderStore::default()),
            catalog: Arc::new(RecordingCatalog::default()),
            notifier: Arc::new(RecordingNotifier::default()),
            clock: FixedClock::new(today),
        }
    }

    pub fn engine(&self) -> FulfillmentEngine {
        FulfillmentEngine::new(
            self.catalog.clone(),
            self.notifier.clone(),
            Arc::new(self.clock),
        )
    }
}
