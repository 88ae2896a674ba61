use serde::Serialize;
use thiserror::Error;

/// Failure captured into a probe result.
///
/// None of these ever escape a poll cycle; they are stored alongside the
/// target they belong to and rendered by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum ProbeError {
    #[error("{0}")]
    Parse(String),

    #[error("unsupported protocol {0}")]
    UnsupportedProtocol(String),

    /// Any transport failure, timeouts included
    #[error("{0}")]
    Network(String),
}

impl ProbeError {
    /// Build a network error from a transport error and its whole source chain.
    pub fn network(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !message.contains(&cause_text) {
                message.push_str(": ");
                message.push_str(&cause_text);
            }
            source = cause.source();
        }
        Self::Network(message)
    }
}
