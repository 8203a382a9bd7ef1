//! Command-line and environment configuration.

use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::timing::DEFAULT_SAVE_INTERVAL;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "darts-score-tracker", version, about = "Keep score for a game of darts Cricket")]
pub struct Config {
    /// Directory the game is saved in.
    #[arg(long, env = "DARTS_SAVE_DIR", default_value = ".")]
    pub save_dir: PathBuf,

    /// Minimum time between saves, in milliseconds.
    #[arg(long, env = "DARTS_SAVE_INTERVAL_MS", default_value_t = DEFAULT_SAVE_INTERVAL.as_millis() as u64)]
    pub save_interval_ms: u64,

    /// Name for the left player. Overrides the saved name.
    #[arg(long)]
    pub left: Option<String>,

    /// Name for the right player. Overrides the saved name.
    #[arg(long)]
    pub right: Option<String>,

    /// Keep the game in memory only; nothing is read from or written to disk.
    #[arg(long)]
    pub ephemeral: bool,

    /// Draw the board without colors.
    #[arg(long)]
    pub plain: bool,
}

impl Config {
    pub fn save_interval(&self) -> Duration {
        Duration::from_millis(self.save_interval_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_dir: ".".into(),
            save_interval_ms: DEFAULT_SAVE_INTERVAL.as_millis() as u64,
            left: None,
            right: None,
            ephemeral: false,
            plain: false,
        }
    }
}
