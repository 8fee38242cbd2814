//! Per-product fulfillment decisions.
//!
//! For each product the engine either fulfills it now (one unit out of stock),
//! announces a delay, or hands it to the unavailable / expired handling. Every
//! outcome that changes or re-checks a product persists it through the
//! [`CatalogStore`]; customers hear about it through the [`NotificationGateway`].
//!
//! ```text
//! NORMAL     stock > 0                              -> decrement
//!            lead time > 0                          -> delay notice
//!            otherwise                              -> nothing
//! SEASONAL   in season && stock > 0                 -> decrement
//!            lead time > 0 && restock before end    -> delay notice
//!            otherwise                              -> seasonal unavailability
//! EXPIRABLE  stock > 0 && expiry after today        -> decrement
//!            otherwise                              -> expired handling
//! ```

use std::sync::Arc;

use chrono::NaiveDate;

use orderflow_core::Entity;
use orderflow_products::{Product, ProductKind, SeasonWindow};

use crate::error::{FulfillmentError, FulfillmentResult};
use crate::ports::{CatalogStore, Clock, NotificationGateway};

pub struct FulfillmentEngine {
    catalog: Arc<dyn CatalogStore>,
    notifier: Arc<dyn NotificationGateway>,
    clock: Arc<dyn Clock>,
}

impl FulfillmentEngine {
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        notifier: Arc<dyn NotificationGateway>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            catalog,
            notifier,
            clock,
        }
    }

    /// Decide and apply the fulfillment action for one product.
    pub fn process(&self, product: &mut Product) -> FulfillmentResult<()> {
        let today = self.clock.today();
        match *product.kind() {
            ProductKind::Normal => self.process_normal(product),
            ProductKind::Seasonal(window) => self.process_seasonal(product, window, today),
            ProductKind::Expirable { expiry_date } => {
                self.process_expirable(product, expiry_date, today)
            }
        }
    }

    /// Take one unit out of stock and persist.
    pub fn decrement_stock(&self, product: &mut Product) -> FulfillmentResult<()> {
        product.decrement_available();
        self.catalog.save(product)?;
        Ok(())
    }

    /// Record the expected lead time on the product, persist it and tell the
    /// customer about the delay.
    pub fn notify_delay(&self, lead_time: u32, product: &mut Product) -> FulfillmentResult<()> {
        product.set_lead_time(lead_time);
        self.catalog.save(product)?;
        self.notifier
            .send_delay_notification(lead_time, product.name())?;
        Ok(())
    }

    /// Final handling for a seasonal product that cannot be fulfilled.
    ///
    /// Out of season the customer gets an out-of-stock notice. In season the
    /// shortage is a restock issue, so they get a delay notice for the
    /// product's own lead time. The product is persisted either way.
    pub fn handle_seasonal_unavailability(&self, product: &mut Product) -> FulfillmentResult<()> {
        let ProductKind::Seasonal(window) = *product.kind() else {
            return Err(wrong_kind(product, "seasonal"));
        };

        if window.contains(self.clock.today()) {
            let lead_time = product.lead_time();
            return self.notify_delay(lead_time, product);
        }

        self.catalog.save(product)?;
        self.notifier.send_out_of_stock_notification(product.name())?;
        Ok(())
    }

    /// Persist an expirable product and, if its expiry date has passed, send an
    /// expiration notice. An expiry date equal to today is not yet expired.
    pub fn handle_expired(&self, product: &mut Product) -> FulfillmentResult<()> {
        let ProductKind::Expirable { expiry_date } = *product.kind() else {
            return Err(wrong_kind(product, "expirable"));
        };

        self.catalog.save(product)?;
        if expiry_date < self.clock.today() {
            self.notifier
                .send_expiration_notification(product.name(), expiry_date)?;
        }
        Ok(())
    }

    fn process_normal(&self, product: &mut Product) -> FulfillmentResult<()> {
        if product.has_stock() {
            return self.decrement_stock(product);
        }

        // Zero lead time means no restock is planned: nothing to tell the customer.
        let lead_time = product.lead_time();
        if lead_time > 0 {
            self.notify_delay(lead_time, product)?;
        }
        Ok(())
    }

    fn process_seasonal(
        &self,
        product: &mut Product,
        window: SeasonWindow,
        today: NaiveDate,
    ) -> FulfillmentResult<()> {
        if window.contains(today) && product.has_stock() {
            return self.decrement_stock(product);
        }

        let lead_time = product.lead_time();
        if lead_time > 0 && !window.is_over_for(today, lead_time) {
            self.notify_delay(lead_time, product)
        } else {
            self.handle_seasonal_unavailability(product)
        }
    }

    fn process_expirable(
        &self,
        product: &mut Product,
        expiry_date: NaiveDate,
        today: NaiveDate,
    ) -> FulfillmentResult<()> {
        if product.has_stock() && expiry_date > today {
            self.decrement_stock(product)
        } else {
            self.handle_expired(product)
        }
    }
}

fn wrong_kind(product: &Product, expected: &str) -> FulfillmentError {
    FulfillmentError::InvalidState(format!(
        "product {} is {}, expected {expected}",
        product.id(),
        product.product_type()
    ))
}
