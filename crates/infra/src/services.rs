//! In-memory service wiring (dev/test): stores, notifier, clock, processor.

use std::sync::Arc;

use orderflow_fulfillment::{
    Clock, FulfillmentEngine, NotificationGateway, OrderProcessor, SystemClock,
};

use crate::memory::{InMemoryCatalogStore, InMemoryOrderStore};
use crate::notifications::TracingNotificationGateway;
use crate::seed::{SeedData, SeedError};

/// Everything needed to process orders against in-memory stores.
pub struct InMemoryServices {
    pub catalog: Arc<InMemoryCatalogStore>,
    pub orders: Arc<InMemoryOrderStore>,
    pub processor: OrderProcessor,
}

impl InMemoryServices {
    /// Log-only notifications, system clock.
    pub fn new() -> Self {
        Self::with(Arc::new(TracingNotificationGateway), Arc::new(SystemClock))
    }

    pub fn with(notifier: Arc<dyn NotificationGateway>, clock: Arc<dyn Clock>) -> Self {
        let catalog = Arc::new(InMemoryCatalogStore::new());
        let orders = Arc::new(InMemoryOrderStore::new(catalog.clone()));
        let engine = FulfillmentEngine::new(catalog.clone(), notifier, clock);
        let processor = OrderProcessor::new(orders.clone(), engine);

        Self {
            catalog,
            orders,
            processor,
        }
    }

    pub fn seed(&self, seed: &SeedData) -> Result<(), SeedError> {
        seed.load_into(&self.catalog, &self.orders)
    }
}

impl Default for InMemoryServices {
    fn default() -> Self {
        Self::new()
    }
}
