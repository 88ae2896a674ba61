//! Latest-result-per-target state store.
//!
//! The store has exactly one [`StoreWriter`], owned by the poll orchestrator,
//! and any number of [`StoreReader`]s. Writer methods take `&mut self`, so
//! merges are serialised by ownership. Readers take copies and may do so
//! mid-cycle, in which case they see some targets already updated and the
//! rest still holding the previous cycle's result.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::types::{ProbeResult, Snapshot};

/// Create an empty store and split it into its writer and a reader.
pub fn state_store() -> (StoreWriter, StoreReader) {
    let shared = Arc::new(RwLock::new(Snapshot::default()));
    (StoreWriter { shared: Arc::clone(&shared) }, StoreReader { shared })
}

/// Sole writer of the state store
#[derive(Debug)]
pub struct StoreWriter {
    shared: Arc<RwLock<Snapshot>>,
}

impl StoreWriter {
    /// Replace the target's entry with `result` and return the previous one.
    pub async fn merge(&mut self, result: ProbeResult) -> Option<ProbeResult> {
        let mut state = self.shared.write().await;
        state.entries.insert(result.target.clone(), result)
    }

    /// Record a released cycle barrier and return the resulting snapshot.
    pub async fn complete_cycle(
        &mut self,
        cycle: u64,
        completed_at: DateTime<Utc>,
        elapsed: Duration,
    ) -> Snapshot {
        let mut state = self.shared.write().await;
        state.cycle = cycle;
        state.completed_at = Some(completed_at);
        state.elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        state.clone()
    }

    pub fn reader(&self) -> StoreReader {
        StoreReader { shared: Arc::clone(&self.shared) }
    }
}

/// Read handle onto the state store
#[derive(Debug, Clone)]
pub struct StoreReader {
    shared: Arc<RwLock<Snapshot>>,
}

impl StoreReader {
    /// Copy of the store's current contents
    pub async fn snapshot(&self) -> Snapshot {
        self.shared.read().await.clone()
    }

    pub async fn get(&self, target: &str) -> Option<ProbeResult> {
        self.shared.read().await.entries.get(target).cloned()
    }

    pub async fn len(&self) -> usize {
        self.shared.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
