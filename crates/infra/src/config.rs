//! Process configuration, read from environment variables.
//!
//! - `ORDERFLOW_BIND_ADDR`: listen address (default `0.0.0.0:8080`)
//! - `ORDERFLOW_SEED_FILE`: optional JSON seed file for the in-memory stores
//!
//! Log filtering is configured separately through `RUST_LOG`.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub const BIND_ADDR_VAR: &str = "ORDERFLOW_BIND_ADDR";
pub const SEED_FILE_VAR: &str = "ORDERFLOW_SEED_FILE";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_addr = get(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("{BIND_ADDR_VAR} is not a socket address: {raw_addr}"))?;

        Ok(Self {
            bind_addr,
            seed_file: get(SEED_FILE_VAR).map(PathBuf::from),
        })
    }
}
