//! In-memory receipt store with content-based deduplication.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::canon::receipt_digest;
use crate::error::{ReceiptError, ReceiptResult};
use crate::types::{Receipt, ReceiptDigest};

/// Storage seam for scored receipts.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Record a scored receipt under a fresh identifier.
    ///
    /// Fails with [`ReceiptError::AlreadyExists`] when the same receipt
    /// content was inserted before; in that case no identifier is generated
    /// and nothing is stored.
    async fn insert(&self, receipt: &Receipt, points: u64) -> ReceiptResult<String>;

    /// Look up the points recorded under an identifier.
    async fn get(&self, id: &str) -> ReceiptResult<u64>;
}

/// The digest set and the id-to-points map share one lock: the dedup check
/// and the subsequent insertion form a single critical section.
#[derive(Debug, Default)]
struct StoreState {
    points: HashMap<String, u64>,
    seen: HashSet<ReceiptDigest>,
}

/// Process-lifetime in-memory store. Records are never mutated or deleted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReceiptStore for MemoryStore {
    async fn insert(&self, receipt: &Receipt, points: u64) -> ReceiptResult<String> {
        let digest = receipt_digest(receipt);

        let mut state = self.state.write().await;
        if state.seen.contains(&digest) {
            tracing::debug!(digest = %digest, "duplicate receipt rejected");
            return Err(ReceiptError::AlreadyExists(digest.to_hex()));
        }

        let id = Uuid::new_v4().to_string();
        state.points.insert(id.clone(), points);
        state.seen.insert(digest);
        tracing::debug!(id = %id, points, digest = %digest, "receipt stored");

        Ok(id)
    }

    async fn get(&self, id: &str) -> ReceiptResult<u64> {
        let state = self.state.read().await;
        state
            .points
            .get(id)
            .copied()
            .ok_or_else(|| ReceiptError::NotFound(id.to_string()))
    }
}
