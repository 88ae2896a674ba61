use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinSet;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, info, trace};

use crate::executor::Prober;
use crate::store::{StoreReader, StoreWriter, state_store};
use crate::types::{ProbeResult, Snapshot};

const SNAPSHOT_BUFFER: usize = 16;

/// Poll orchestrator - drives fixed-cadence poll cycles over every target
///
/// Each cycle spawns one probe task per target, merges results into the
/// state store as they arrive and publishes a snapshot once every probe has
/// reported. Cycles never overlap: a cycle that outlasts the interval delays
/// the next one instead of running alongside it.
pub struct PollOrchestrator {
    prober: Arc<Prober>,
    targets: Arc<[String]>,
    store: StoreWriter,
    interval: Duration,
    snapshot_tx: broadcast::Sender<Snapshot>,
    cycle: u64,
}

impl PollOrchestrator {
    /// Create a new orchestrator with an empty state store
    pub fn new(prober: Arc<Prober>, targets: Vec<String>, interval: Duration) -> Self {
        let (store, _reader) = state_store();
        let (snapshot_tx, _rx) = broadcast::channel(SNAPSHOT_BUFFER);

        Self {
            prober,
            targets: targets.into(),
            store,
            // tokio intervals must be non-zero
            interval: interval.max(Duration::from_millis(1)),
            snapshot_tx,
            cycle: 0,
        }
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Read handle onto the state store, valid for the orchestrator's lifetime and beyond
    pub fn reader(&self) -> StoreReader {
        self.store.reader()
    }

    /// Receive the snapshot of every cycle completed after this call
    pub fn subscribe(&self) -> broadcast::Receiver<Snapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Run one full cycle: probe every target once and wait for all of them.
    pub async fn run_cycle(&mut self) -> Snapshot {
        self.cycle += 1;
        let cycle = self.cycle;
        let started = Instant::now();
        debug!(cycle, targets = self.targets.len(), "Starting poll cycle");

        let (result_tx, mut result_rx) = mpsc::channel::<ProbeResult>(self.targets.len().max(1));
        let mut probes = JoinSet::new();

        for target in self.targets.iter() {
            let prober = Arc::clone(&self.prober);
            let result_tx = result_tx.clone();
            let target = target.clone();

            probes.spawn(async move {
                let result = prober.probe(&target).await;
                // Receiver outlives every sender
                let _ = result_tx.send(result).await;
            });
        }
        drop(result_tx);

        // Closes once the last probe task has dropped its sender
        let mut failures = 0usize;
        while let Some(result) = result_rx.recv().await {
            if result.error.is_some() {
                failures += 1;
            }
            trace!(cycle, endpoint = %result.target, status = result.status, "Merging probe result");
            self.store.merge(result).await;
        }

        while let Some(joined) = probes.join_next().await {
            if let Err(e) = joined {
                error!(cycle, "Probe task failed: {}", e);
            }
        }

        let elapsed = started.elapsed();
        let snapshot = self.store.complete_cycle(cycle, Utc::now(), elapsed).await;
        debug!(
            cycle,
            targets = self.targets.len(),
            failures,
            elapsed_ms = snapshot.elapsed_ms,
            "Poll cycle completed"
        );

        // No subscribers is fine
        let _ = self.snapshot_tx.send(snapshot.clone());
        snapshot
    }

    /// Poll forever. The first cycle starts immediately; later cycles start
    /// one interval after the previous start, or right after the previous
    /// cycle if it ran longer than the interval.
    pub async fn run(mut self) {
        info!(
            targets = self.targets.len(),
            interval_ms = self.interval.as_millis() as u64,
            "Polling started"
        );

        let mut timer = interval(self.interval);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            timer.tick().await;
            self.run_cycle().await;
        }
    }
}
