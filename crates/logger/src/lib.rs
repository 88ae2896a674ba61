//! Tracing subscriber setup shared by the impromon binaries

mod subscriber;

pub use subscriber::{LogTarget, LoggerError, init};
pub use tracing::level_filters::LevelFilter;
