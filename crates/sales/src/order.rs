use std::collections::BTreeMap;

use orderflow_core::{Entity, OrderId, ProductId};
use orderflow_products::ProductRecord;

/// Aggregate root: Order.
///
/// Items form a set keyed by product id. Iteration is in ascending product id
/// order, which is the order fulfillment processes them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    items: BTreeMap<ProductId, ProductRecord>,
}

impl Order {
    pub fn new(id: OrderId) -> Self {
        Self {
            id,
            items: BTreeMap::new(),
        }
    }

    /// Build an order from records. A later record with the same product id
    /// replaces an earlier one.
    pub fn with_items(id: OrderId, items: impl IntoIterator<Item = ProductRecord>) -> Self {
        let mut order = Self::new(id);
        for record in items {
            order.add_item(record);
        }
        order
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    /// Insert or replace the record for its product id, returning the replaced one.
    pub fn add_item(&mut self, record: ProductRecord) -> Option<ProductRecord> {
        self.items.insert(record.id, record)
    }

    pub fn item(&self, product_id: &ProductId) -> Option<&ProductRecord> {
        self.items.get(product_id)
    }

    pub fn items(&self) -> impl Iterator<Item = &ProductRecord> {
        self.items.values()
    }

    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut ProductRecord> {
        self.items.values_mut()
    }

    pub fn product_ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.items.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
