//! Command-line options for the headless runner.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "geowars")]
#[command(about = "Headless fixed-tick geometry shooter simulation")]
pub struct Cli {
    /// Config file to load.
    #[arg(long, default_value = "config.txt")]
    pub config: PathBuf,

    /// Seed for the random source. Same seed and script, same run.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Stop after this many frames. Runs until Escape or a closed window
    /// when omitted.
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Print a JSON snapshot every N frames. 0 disables snapshots.
    #[arg(long, default_value_t = 60)]
    pub snapshot_every: u64,

    /// JSON list of timed input events to play back.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Run as fast as possible instead of at the configured frame limit.
    #[arg(long)]
    pub unpaced: bool,
}
