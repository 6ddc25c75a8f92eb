//! Application state for the API server.

use std::sync::Arc;

use receipts_core::store::{MemoryStore, ReceiptStore};

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Scored-receipt store
    pub store: Arc<dyn ReceiptStore>,
    /// API version
    pub version: String,
}

impl AppState {
    /// Create app state backed by a fresh in-memory store.
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_cors: true,
        }
    }
}
