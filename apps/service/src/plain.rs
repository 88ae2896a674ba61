//! Line-oriented output: one block of status lines per completed cycle.

use anyhow::Result;
use prober::Snapshot;
use tokio::signal;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{info, warn};

use crate::format::status_line;

/// Status lines for every target in input order
pub fn render(targets: &[String], snapshot: &Snapshot) -> String {
    let mut out = String::new();
    for target in targets {
        out.push_str(&status_line(target, snapshot.get(target)));
        out.push('\n');
    }
    out
}

/// Print every published snapshot until interrupted
pub async fn run(
    targets: &[String],
    mut snapshots: broadcast::Receiver<Snapshot>,
    json: bool,
) -> Result<()> {
    loop {
        tokio::select! {
            received = snapshots.recv() => match received {
                Ok(snapshot) if json => println!("{}", serde_json::to_string(&snapshot)?),
                Ok(snapshot) => println!("{}", render(targets, &snapshot)),
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "Output fell behind, skipping cycles"),
                Err(RecvError::Closed) => break,
            },
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    Ok(())
}
