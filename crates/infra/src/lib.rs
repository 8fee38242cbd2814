//! Infrastructure layer: in-memory stores, notification gateways, config, seed data.

pub mod config;
pub mod memory;
pub mod notifications;
pub mod seed;
pub mod services;


pub use config::AppConfig;
pub use memory::{InMemoryCatalogStore, InMemoryOrderStore};
pub use notifications::{RecordingNotificationGateway, TracingNotificationGateway};
pub use seed::{SeedData, SeedError, SeedOrder};
pub use services::InMemoryServices;
