use chrono::{DateTime, Utc};
use prober::Snapshot;

use super::types::Spinner;
use crate::format::{Health, health};

/// Summary of the last completed cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleSummary {
    pub cycle: u64,
    pub elapsed_ms: u64,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Number of targets in each state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub up: usize,
    pub down: usize,
    pub pending: usize,
}

/// Application state
pub struct AppState {
    /// Targets in the order they were supplied
    pub targets: Vec<String>,
    /// Store contents as of the last redraw, possibly mid-cycle
    pub live: Snapshot,
    pub last_cycle: Option<CycleSummary>,
    pub spinner: Spinner,
}

impl AppState {
    pub fn new(targets: Vec<String>) -> Self {
        Self { targets, live: Snapshot::default(), last_cycle: None, spinner: Spinner::new() }
    }

    /// Take in the snapshot published at the end of a cycle
    pub fn apply_cycle(&mut self, snapshot: Snapshot) {
        self.last_cycle = Some(CycleSummary {
            cycle: snapshot.cycle,
            elapsed_ms: snapshot.elapsed_ms,
            completed_at: snapshot.completed_at,
        });
        self.live = snapshot;
    }

    /// Replace the live view with a fresh copy of the store
    pub fn refresh(&mut self, live: Snapshot) {
        self.live = live;
    }

    pub fn counts(&self) -> Counts {
        self.targets.iter().fold(Counts::default(), |mut counts, target| {
            match health(self.live.get(target)) {
                Health::Up => counts.up += 1,
                Health::Down => counts.down += 1,
                Health::Pending => counts.pending += 1,
            }
            counts
        })
    }
}
