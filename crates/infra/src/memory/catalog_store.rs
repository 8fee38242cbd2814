use std::collections::HashMap;
use std::sync::RwLock;

use orderflow_core::{Entity, ProductId};
use orderflow_fulfillment::{CatalogStore, StoreError};
use orderflow_products::{Product, ProductRecord};

use super::poisoned;

/// In-memory catalog keyed by product id.
#[derive(Debug)]
pub struct InMemoryCatalogStore {
    inner: RwLock<HashMap<ProductId, ProductRecord>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Insert or replace a record.
    pub fn upsert(&self, record: ProductRecord) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(poisoned)?;
        map.insert(record.id, record);
        Ok(())
    }

    pub fn get(&self, id: &ProductId) -> Result<Option<ProductRecord>, StoreError> {
        let map = self.inner.read().map_err(poisoned)?;
        Ok(map.get(id).cloned())
    }

    /// All records, ordered by product id.
    pub fn list(&self) -> Result<Vec<ProductRecord>, StoreError> {
        let map = self.inner.read().map_err(poisoned)?;
        let mut records: Vec<ProductRecord> = map.values().cloned().collect();
        records.sort_by_key(|r| r.id);
        Ok(records)
    }
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn save(&self, product: &Product) -> Result<(), StoreError> {
        self.upsert(product.record().clone())?;
        tracing::debug!(
            product_id = %product.id(),
            available = product.available(),
            lead_time = product.lead_time(),
            "product saved"
        );
        Ok(())
    }
}
