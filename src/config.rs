use clap::Parser;
use std::time::Duration;

use crate::error::{RaceError, RaceResult};

pub const USAGE: &str = "Usage: ./duckrace -n <name1,name2,name3,...>\n\
                         Example: ./duckrace -n alice,bob,charlie,diana";

/// Randomized terminal duck race.
#[derive(Debug, Parser)]
#[command(name = "duckrace")]
#[command(about = "Randomized terminal duck race with a live leaderboard")]
pub struct Cli {
    /// Comma-separated duck names
    #[arg(short = 'n', value_name = "NAMES")]
    pub names: Option<String>,
}

/// Fixed timing of a race. Not exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Pause before each countdown line
    pub countdown_step: Duration,
    /// Pause after "GO!"
    pub go_pause: Duration,
    /// Sleep between frames
    pub frame: Duration,
    /// Wall-clock budget before the race is called on distance
    pub budget: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            countdown_step: Duration::from_secs(1),
            go_pause: Duration::from_millis(500),
            frame: Duration::from_millis(200),
            budget: Duration::from_secs(15),
        }
    }
}

#[cfg(test)]
impl Pacing {
    /// No sleeps and no time budget beyond what the race itself needs.
    pub fn instant(budget: Duration) -> Self {
        Self {
            countdown_step: Duration::ZERO,
            go_pause: Duration::ZERO,
            frame: Duration::ZERO,
            budget,
        }
    }
}

/// Resolved configuration after validating the CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub names: Vec<String>,
    pub pacing: Pacing,
}

impl AppConfig {
    pub fn resolve(cli: &Cli) -> RaceResult<Self> {
        let raw = cli.names.as_deref().unwrap_or("");
        Ok(Self {
            names: parse_names(raw)?,
            pacing: Pacing::default(),
        })
    }
}

/// Split a `-n` value into trimmed, non-empty names. Order and duplicates are kept.
pub fn parse_names(raw: &str) -> RaceResult<Vec<String>> {
    if raw.is_empty() {
        return Err(RaceError::InvalidArguments(
            "at least one name must be specified with -n".to_string(),
        ));
    }

    let names: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect();

    if names.is_empty() {
        return Err(RaceError::InvalidArguments(
            "at least one valid name must be provided".to_string(),
        ));
    }

    Ok(names)
}
