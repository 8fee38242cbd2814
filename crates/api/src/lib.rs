//! HTTP API: routing and request/response mapping around the order processor.

pub mod app;
