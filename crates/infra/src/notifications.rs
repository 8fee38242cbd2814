//! Notification gateways: structured-log delivery and an in-memory recorder.

use std::sync::Mutex;

use chrono::NaiveDate;

use orderflow_fulfillment::{Notification, NotificationError, NotificationGateway};

/// Gateway that "delivers" notifications by emitting a structured log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotificationGateway;

impl NotificationGateway for TracingNotificationGateway {
    fn send_delay_notification(
        &self,
        lead_time: u32,
        product_name: &str,
    ) -> Result<(), NotificationError> {
        tracing::info!(kind = "delay", lead_time, product_name, "notification sent");
        Ok(())
    }

    fn send_out_of_stock_notification(&self, product_name: &str) -> Result<(), NotificationError> {
        tracing::info!(kind = "out_of_stock", product_name, "notification sent");
        Ok(())
    }

    fn send_expiration_notification(
        &self,
        product_name: &str,
        expiry_date: NaiveDate,
    ) -> Result<(), NotificationError> {
        tracing::info!(
            kind = "expiration",
            product_name,
            expiry_date = %expiry_date,
            "notification sent"
        );
        Ok(())
    }
}

/// Gateway that keeps every notification in memory, in send order.
#[derive(Debug, Default)]
pub struct RecordingNotificationGateway {
    inner: Mutex<Vec<Notification>>,
}

impl RecordingNotificationGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Notification> {
        match self.inner.lock() {
            Ok(sent) => sent.clone(),
            Err(_) => vec![],
        }
    }

    /// Return and clear everything recorded so far.
    pub fn take(&self) -> Vec<Notification> {
        match self.inner.lock() {
            Ok(mut sent) => std::mem::take(&mut *sent),
            Err(_) => vec![],
        }
    }

    fn push(&self, notification: Notification) -> Result<(), NotificationError> {
        let mut sent = self
            .inner
            .lock()
            .map_err(|_| NotificationError::Delivery("recorder lock poisoned".to_string()))?;
        sent.push(notification);
        Ok(())
    }
}

impl NotificationGateway for RecordingNotificationGateway {
    fn send_delay_notification(
        &self,
        lead_time: u32,
        product_name: &str,
    ) -> Result<(), NotificationError> {
        self.push(Notification::Delay {
            lead_time,
            product_name: product_name.to_string(),
        })
    }

    fn send_out_of_stock_notification(&self, product_name: &str) -> Result<(), NotificationError> {
        self.push(Notification::OutOfStock {
            product_name: product_name.to_string(),
        })
    }

    fn send_expiration_notification(
        &self,
        product_name: &str,
        expiry_date: NaiveDate,
    ) -> Result<(), NotificationError> {
        self.push(Notification::Expiration {
            product_name: product_name.to_string(),
            expiry_date,
        })
    }
}
