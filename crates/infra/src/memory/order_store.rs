use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use orderflow_core::{OrderId, ProductId};
use orderflow_fulfillment::{OrderStore, StoreError};
use orderflow_sales::Order;

use super::InMemoryCatalogStore;
use super::poisoned;

/// In-memory orders.
///
/// Orders hold product ids only; records are read from the shared catalog on
/// every lookup, so an order always reflects current stock.
#[derive(Debug)]
pub struct InMemoryOrderStore {
    catalog: Arc<InMemoryCatalogStore>,
    inner: RwLock<HashMap<OrderId, Vec<ProductId>>>,
}

impl InMemoryOrderStore {
    pub fn new(catalog: Arc<InMemoryCatalogStore>) -> Self {
        Self {
            catalog,
            inner: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert(
        &self,
        order_id: OrderId,
        product_ids: impl IntoIterator<Item = ProductId>,
    ) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(poisoned)?;
        map.insert(order_id, product_ids.into_iter().collect());
        Ok(())
    }
}

impl OrderStore for InMemoryOrderStore {
    fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        let product_ids = {
            let map = self.inner.read().map_err(poisoned)?;
            match map.get(&id) {
                Some(ids) => ids.clone(),
                None => return Ok(None),
            }
        };

        let mut order = Order::new(id);
        for product_id in product_ids {
            let record = self.catalog.get(&product_id)?.ok_or_else(|| {
                StoreError::Backend(format!(
                    "order {id} references unknown product {product_id}"
                ))
            })?;
            order.add_item(record);
        }
        Ok(Some(order))
    }
}
