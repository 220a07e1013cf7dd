//! Dashboard Configuration
//!
//! Connection settings for the article store and the HTTP surface.
//! Only the store URI can be overridden (via `MONGODB_URI`); everything else is fixed.

use anyhow::Result;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/";
pub const DATABASE_NAME: &str = "detik";
pub const COLLECTION_NAME: &str = "baskett_articless";
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
pub const BIND_ADDR: &str = "127.0.0.1:8501";

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub mongodb_uri: String,
    pub database: String,
    pub collection: String,
    pub connect_timeout: Duration,
    pub bind_addr: SocketAddr,
}

impl DashboardConfig {
    /// Reads the store URI from the environment, falling back to the local default.
    pub fn from_env() -> Result<Self> {
        let mongodb_uri =
            std::env::var("MONGODB_URI").unwrap_or_else(|_| DEFAULT_MONGODB_URI.to_string());
        Self::with_uri(mongodb_uri)
    }

    pub fn with_uri(mongodb_uri: impl Into<String>) -> Result<Self> {
        let mongodb_uri = mongodb_uri.into();
        let mongodb_uri = if mongodb_uri.trim().is_empty() {
            DEFAULT_MONGODB_URI.to_string()
        } else {
            mongodb_uri.trim().to_string()
        };

        Ok(Self {
            mongodb_uri,
            database: DATABASE_NAME.to_string(),
            collection: COLLECTION_NAME.to_string(),
            connect_timeout: CONNECT_TIMEOUT,
            bind_addr: BIND_ADDR.parse()?,
        })
    }
}
