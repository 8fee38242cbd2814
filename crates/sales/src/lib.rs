//! Customer orders domain module.
//!
//! An order is a set of catalog records to fulfill. This crate only models the
//! aggregate; fulfillment decisions live in `orderflow-fulfillment`.

pub mod order;

pub use order::Order;
