use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::endpoint::Authority;
use crate::error::ProbeError;

/// Status reported by the TCP checker for an endpoint that accepted a
/// connection. TCP has no application-level status code; this value only
/// means "reachable" and carries no other meaning.
pub const TCP_REACHABLE: u16 = 1;

/// Checker trait for the protocol-specific probes
#[async_trait::async_trait]
pub trait Checker: Send + Sync {
    /// Probe the target once and return its numeric status.
    ///
    /// Implementations enforce their own timeout.
    async fn check(&self, target: &str) -> Result<u16, ProbeError>;
}

/// HTTP/HTTPS checker
pub struct HttpChecker {
    client: reqwest::Client,
}

impl HttpChecker {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client })
    }

    /// Use a preconfigured client; its timeout is the probe timeout.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Checker for HttpChecker {
    async fn check(&self, target: &str) -> Result<u16, ProbeError> {
        let response = self.client.get(target).send().await.map_err(|e| ProbeError::network(&e))?;

        // Any response counts, the status code is reported as-is
        Ok(response.status().as_u16())
    }
}

/// TCP port checker
pub struct TcpChecker {
    timeout_duration: Duration,
}

impl TcpChecker {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout_duration: timeout }
    }
}

#[async_trait::async_trait]
impl Checker for TcpChecker {
    async fn check(&self, target: &str) -> Result<u16, ProbeError> {
        let address = Authority::parse(target)?.address();

        let stream = timeout(self.timeout_duration, TcpStream::connect(&address))
            .await
            .map_err(|_| ProbeError::Network(format!("dial tcp {address}: i/o timeout")))?
            .map_err(|e| ProbeError::Network(format!("dial tcp {address}: {e}")))?;

        // Reachability only, nothing is exchanged
        drop(stream);
        Ok(TCP_REACHABLE)
    }
}
