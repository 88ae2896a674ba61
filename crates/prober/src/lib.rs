//! Prober - endpoint polling engine for impromon
//!
//! This library classifies endpoint strings, probes them over HTTP(S) or
//! raw TCP, and folds the results of every poll cycle into a shared state
//! store that presentation layers read from.

pub mod checker;
pub mod endpoint;
pub mod error;
pub mod executor;
pub mod scheduler;
pub mod store;
pub mod types;

use std::time::Duration;

// Re-export main types
pub use checker::{Checker, HttpChecker, TCP_REACHABLE, TcpChecker};
pub use endpoint::{Authority, Protocol};
pub use error::ProbeError;
pub use executor::Prober;
pub use scheduler::PollOrchestrator;
pub use store::{StoreReader, StoreWriter, state_store};
pub use types::{ProbeResult, Snapshot};

/// Cadence between the start of two poll cycles
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Timeout each checker applies to a single probe
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(1);
