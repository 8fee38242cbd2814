//! Fulfillment error model.

use thiserror::Error;

use orderflow_core::{DomainError, OrderId};

pub type FulfillmentResult<T> = Result<T, FulfillmentError>;

/// Failure reported by an order or catalog store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached or its state could not be locked.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store answered but the operation failed.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Failure reported by a notification gateway.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("notification delivery failed: {0}")]
    Delivery(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FulfillmentError {
    /// No order exists for the requested id.
    #[error("order not found for id: {0}")]
    NotFound(OrderId),

    /// A product record cannot be interpreted (unknown type tag, missing dates),
    /// or an operation was called on a product of the wrong type.
    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error(transparent)]
    Domain(DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Notification(#[from] NotificationError),
}

impl From<DomainError> for FulfillmentError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::InvalidState(msg) => FulfillmentError::InvalidState(msg),
            other => FulfillmentError::Domain(other),
        }
    }
}
