use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::endpoint::Protocol;
use crate::error::ProbeError;

/// Result of a single probe of one target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeResult {
    /// Endpoint exactly as it was supplied
    pub target: String,

    /// Classified protocol; absent when classification failed
    pub protocol: Option<Protocol>,

    /// HTTP status code, [`crate::TCP_REACHABLE`] for TCP, 0 on failure
    pub status: u16,

    /// Error message (if the probe failed)
    pub error: Option<ProbeError>,

    /// When the probe was started
    pub observed_at: DateTime<Utc>,
}

impl ProbeResult {
    /// Create a new result stamped with the current time
    pub fn new(target: impl Into<String>) -> Self {
        Self::observed(target, Utc::now())
    }

    pub fn observed(target: impl Into<String>, observed_at: DateTime<Utc>) -> Self {
        Self { target: target.into(), protocol: None, status: 0, error: None, observed_at }
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = Some(protocol);
        self
    }

    /// Mark the probe as successful
    pub fn success(mut self, status: u16) -> Self {
        self.status = status;
        self.error = None;
        self
    }

    /// Mark the probe as failed
    pub fn failure(mut self, error: ProbeError) -> Self {
        self.status = 0;
        self.error = Some(error);
        self
    }

    /// Whether the target answered: no error and a non-zero status
    pub fn is_up(&self) -> bool {
        self.error.is_none() && self.status != 0
    }
}

/// Contents of the state store: the latest result for every target that has
/// completed at least one probe, plus bookkeeping about the last full cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    /// Number of completed cycles
    pub cycle: u64,

    /// When the last cycle's join barrier released
    pub completed_at: Option<DateTime<Utc>>,

    /// Wall time of the last cycle in milliseconds
    pub elapsed_ms: u64,

    pub entries: HashMap<String, ProbeResult>,
}

impl Snapshot {
    pub fn get(&self, target: &str) -> Option<&ProbeResult> {
        self.entries.get(target)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries currently up and down
    pub fn tally(&self) -> (usize, usize) {
        let up = self.entries.values().filter(|r| r.is_up()).count();
        (up, self.entries.len() - up)
    }
}

/// Canonical reason phrase of an HTTP status code, empty when unknown.
pub fn status_text(status: u16) -> &'static str {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("")
}
