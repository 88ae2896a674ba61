//! Endpoint classification.
//!
//! Targets stay in their raw string form for the lifetime of the process and
//! are re-classified on every probe, so a malformed entry fails the same way
//! in every cycle.

use std::fmt;

use serde::Serialize;

use crate::error::ProbeError;

/// Protocols the prober knows how to check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
    Tcp,
}

impl Protocol {
    /// Map a protocol tag onto the supported set.
    pub fn from_tag(tag: &str) -> Result<Self, ProbeError> {
        match tag {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            "tcp" => Ok(Self::Tcp),
            other => Err(ProbeError::UnsupportedProtocol(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
            Self::Tcp => "tcp",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the protocol tag of an endpoint: everything before the first `:`.
///
/// e.g. `http://example.com:8080` returns `http`
pub fn scheme(raw: &str) -> Result<&str, ProbeError> {
    raw.split_once(':')
        .map(|(tag, _)| tag)
        .ok_or_else(|| ProbeError::Parse(format!("invalid url {raw}")))
}

/// Classify an endpoint into one of the supported protocols.
pub fn classify(raw: &str) -> Result<Protocol, ProbeError> {
    Protocol::from_tag(scheme(raw)?)
}

/// Host and port of a `proto://host:port` endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authority {
    pub protocol: String,
    pub host: String,
    pub port: u16,
}

impl Authority {
    /// Split an endpoint into protocol, host and port.
    ///
    /// The host is whatever sits between `://` and the last `:`; it is not
    /// checked any further and resolution is left to the transport. The
    /// port is the base-10 number after the last `:`.
    pub fn parse(raw: &str) -> Result<Self, ProbeError> {
        let scheme_end = raw
            .find("://")
            .ok_or_else(|| ProbeError::Parse(format!("missing \"://\" in url {raw}")))?;

        // "://" guarantees at least one colon
        let port_sep = raw.rfind(':').unwrap_or(scheme_end);
        let port_str = &raw[port_sep + 1..];
        if port_str.is_empty() || !port_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ProbeError::Parse(format!("error getting port from url {raw}")));
        }
        let port = port_str
            .parse::<u16>()
            .map_err(|_| ProbeError::Parse(format!("port out of range in url {raw}")))?;

        let host = raw
            .get(scheme_end + 3..port_sep)
            .filter(|host| !host.is_empty())
            .ok_or_else(|| ProbeError::Parse(format!("missing host in url {raw}")))?;

        Ok(Self { protocol: raw[..scheme_end].to_string(), host: host.to_string(), port })
    }

    /// `host:port` form accepted by the socket layer
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
