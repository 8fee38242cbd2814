//! Seed data for the in-memory stores.
//!
//! ```json
//! {
//!   "products": [{ "id": "...", "available": 30, "lead_time": 15,
//!                  "product_type": "NORMAL", "name": "USB Cable" }],
//!   "orders": [{ "id": "...", "product_ids": ["..."] }]
//! }
//! ```
//!
//! Product type tags are not checked here; an unknown tag surfaces when the
//! order containing it is processed.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use orderflow_core::{OrderId, ProductId};
use orderflow_fulfillment::StoreError;
use orderflow_products::ProductRecord;

use crate::memory::{InMemoryCatalogStore, InMemoryOrderStore};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("order {order} references unknown product {product}")]
    UnknownProduct { order: OrderId, product: ProductId },

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedOrder {
    pub id: OrderId,
    pub product_ids: Vec<ProductId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub products: Vec<ProductRecord>,
    #[serde(default)]
    pub orders: Vec<SeedOrder>,
}

impl SeedData {
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Check every order only references seeded products.
    pub fn validate(&self) -> Result<(), SeedError> {
        let known: HashSet<ProductId> = self.products.iter().map(|p| p.id).collect();
        for order in &self.orders {
            if let Some(missing) = order.product_ids.iter().find(|id| !known.contains(id)) {
                return Err(SeedError::UnknownProduct {
                    order: order.id,
                    product: *missing,
                });
            }
        }
        Ok(())
    }

    /// Validate, then write all products and orders into the given stores.
    pub fn load_into(
        &self,
        catalog: &InMemoryCatalogStore,
        orders: &InMemoryOrderStore,
    ) -> Result<(), SeedError> {
        self.validate()?;
        for record in &self.products {
            catalog.upsert(record.clone())?;
        }
        for order in &self.orders {
            orders.insert(order.id, order.product_ids.iter().copied())?;
        }
        tracing::info!(
            products = self.products.len(),
            orders = self.orders.len(),
            "seed data loaded"
        );
        Ok(())
    }
}
