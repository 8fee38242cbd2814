//! In-memory stores for tests/dev.

use std::sync::PoisonError;

use orderflow_fulfillment::StoreError;

pub mod catalog_store;
pub mod order_store;

pub use catalog_store::InMemoryCatalogStore;
pub use order_store::InMemoryOrderStore;

fn poisoned<T>(_: PoisonError<T>) -> StoreError {
    StoreError::Unavailable("in-memory store lock poisoned".to_string())
}
