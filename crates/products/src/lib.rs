//! Catalog products domain module.
//!
//! This crate contains the fulfillment-relevant shape of a catalog product and the
//! pure date rules attached to it (season windows, expiry), implemented as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod product;

pub use product::{Product, ProductKind, ProductRecord, ProductType, SeasonWindow};
