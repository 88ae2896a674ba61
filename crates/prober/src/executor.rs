use std::sync::Arc;
use std::time::Duration;

use tracing::trace;

use crate::checker::{Checker, HttpChecker, TcpChecker};
use crate::endpoint::{self, Protocol};
use crate::types::ProbeResult;

/// Probe executor - classifies a target and runs the matching checker
pub struct Prober {
    http_checker: Arc<dyn Checker>,
    tcp_checker: Arc<dyn Checker>,
}

impl Prober {
    /// Create a prober whose checkers each enforce `timeout`
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        Ok(Self::with_checkers(
            Arc::new(HttpChecker::new(timeout)?),
            Arc::new(TcpChecker::new(timeout)),
        ))
    }

    pub fn with_checkers(http_checker: Arc<dyn Checker>, tcp_checker: Arc<dyn Checker>) -> Self {
        Self { http_checker, tcp_checker }
    }

    fn checker_for(&self, protocol: Protocol) -> &dyn Checker {
        match protocol {
            Protocol::Http | Protocol::Https => self.http_checker.as_ref(),
            Protocol::Tcp => self.tcp_checker.as_ref(),
        }
    }

    /// Probe one target. Never fails: every error ends up in the result.
    pub async fn probe(&self, target: &str) -> ProbeResult {
        let result = ProbeResult::new(target);

        let protocol = match endpoint::classify(target) {
            Ok(protocol) => protocol,
            Err(e) => {
                trace!(endpoint = target, error = %e, "Target not classified");
                return result.failure(e);
            }
        };

        let result = result.with_protocol(protocol);
        match self.checker_for(protocol).check(target).await {
            Ok(status) => result.success(status),
            Err(e) => result.failure(e),
        }
    }
}
