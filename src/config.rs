use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::downloader::DEFAULT_WORKERS;

pub const DEFAULT_OUTPUT_DIR: &str = "assets/images";

/// Downloads the built-in celebrity image list. With no arguments it writes
/// to `assets/images` using 5 workers and no request timeout.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "celebrity-fetcher")]
pub struct Config {
    /// Directory the images are written to. Created if missing.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Maximum number of downloads in flight at once.
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Per-request timeout in seconds. Unset means requests may hang indefinitely.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Empty the output directory before downloading.
    #[arg(long)]
    pub clean: bool,
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            workers: DEFAULT_WORKERS,
            timeout_secs: None,
            clean: false,
        }
    }
}
