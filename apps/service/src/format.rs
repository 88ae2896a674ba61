//! Text of a single target's status line, shared by every output mode.

use chrono::{Local, SecondsFormat};
use prober::types::status_text;
use prober::{ProbeResult, Protocol};

/// How a target is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Up,
    Down,
    /// No probe has completed yet
    Pending,
}

pub fn health(entry: Option<&ProbeResult>) -> Health {
    match entry {
        None => Health::Pending,
        Some(result) if result.is_up() => Health::Up,
        Some(_) => Health::Down,
    }
}

/// RFC 3339 time of the probe in the local timezone
pub fn poll_time(result: &ProbeResult) -> String {
    result.observed_at.with_timezone(&Local).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// `<target> <code> <reason> at <time>` for HTTP, `<target> at <time>` for
/// TCP, `<target> <error> at <time>` when down and `<target> pending` before
/// the first result.
pub fn status_line(target: &str, entry: Option<&ProbeResult>) -> String {
    let Some(result) = entry else {
        return format!("{target} pending");
    };
    let at = poll_time(result);

    match (&result.error, result.protocol) {
        (Some(error), _) => format!("{target} {error} at {at}"),
        (None, Some(Protocol::Http | Protocol::Https)) => match status_text(result.status) {
            "" => format!("{target} {} at {at}", result.status),
            reason => format!("{target} {} {reason} at {at}", result.status),
        },
        (None, _) => format!("{target} at {at}"),
    }
}
