use std::io;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::targets::read_target_list;

/// Used to quickly monitor web services on the fly.
#[derive(Debug, Parser)]
#[command(
    name = "impromon",
    version,
    long_about = "Impromon is a tool to monitor web services on the fly\n\
        For example:\n    \
        impromon -u http://example.com -u http://example2.com\n    \
        impromon -u tcp://db.internal:5432\n    \
        impromon -s serverlist.lst"
)]
pub struct Args {
    /// URL to monitor (repeatable, or comma separated)
    #[arg(short = 'u', long = "url", value_name = "URL", value_delimiter = ',')]
    pub urls: Vec<String>,

    /// File containing list of servers to monitor, one per line
    #[arg(short = 's', long = "server-list", value_name = "FILE")]
    pub server_list: Option<PathBuf>,

    /// Configuration file [default: $XDG_CONFIG_HOME/impromon/config.toml]
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print plain status lines after every cycle instead of the terminal UI
    #[arg(long)]
    pub plain: bool,

    /// Print one JSON snapshot per cycle (implies --plain)
    #[arg(long)]
    pub json: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Debug, Error)]
pub enum TargetError {
    #[error("No urls to monitor")]
    Empty,

    #[error("There was an error reading the server list file {}: {source}", path.display())]
    ServerList { path: PathBuf, source: io::Error },
}

impl Args {
    /// Targets to poll: the server list when one is given, the urls otherwise.
    pub fn resolve_targets(&self) -> Result<Vec<String>, TargetError> {
        let targets = match &self.server_list {
            Some(path) => read_target_list(path)
                .map_err(|source| TargetError::ServerList { path: path.clone(), source })?,
            None => self.urls.clone(),
        };

        if targets.is_empty() {
            return Err(TargetError::Empty);
        }
        Ok(targets)
    }

    pub fn plain_output(&self) -> bool {
        self.plain || self.json
    }
}
