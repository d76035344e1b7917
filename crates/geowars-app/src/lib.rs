//! Headless geowars runner.
//!
//! Wires the config loader, the engine and the collaborators together and
//! drives them from a game loop thread.

pub mod cli;
pub mod error;
pub mod game_loop;
pub mod headless;
pub mod script;
pub mod state;

use std::io::Write;

use geowars_core::config::GameConfig;
use geowars_core::events::{InputSource, NoInput};
use geowars_sim::{GameEngine, SimConfig};

pub use geowars_core as core;

use crate::cli::Cli;
use crate::error::AppResult;
use crate::game_loop::{LoopOptions, LoopSummary};
use crate::headless::HeadlessRenderer;
use crate::script::ScriptedInput;

/// Load everything `cli` names, run the loop to completion and report how it
/// ended. Snapshots go to `sink`.
pub fn run(cli: &Cli, sink: Box<dyn Write + Send>) -> AppResult<LoopSummary> {
    let config = GameConfig::load(&cli.config)?;
    tracing::info!(path = %cli.config.display(), "config loaded");

    let engine = GameEngine::new(config, SimConfig { seed: cli.seed });
    let mut renderer = HeadlessRenderer::new();
    engine.load_font(&mut renderer)?;

    let input: Box<dyn InputSource + Send> = match &cli.script {
        Some(path) => {
            let script = ScriptedInput::load(path)?;
            tracing::info!(path = %path.display(), events = script.remaining(), "input script loaded");
            Box::new(script)
        }
        None => Box::new(NoInput),
    };

    let options = LoopOptions {
        max_frames: cli.ticks,
        snapshot_every: cli.snapshot_every,
        paced: !cli.unpaced,
        ..LoopOptions::from_config(engine.config())
    };

    let handle = game_loop::spawn_game_loop(engine, input, Box::new(renderer), sink, options)?;
    let summary = handle.join()?;
    tracing::info!(
        frames = summary.frames,
        reason = ?summary.reason,
        score = summary.last_snapshot.as_ref().map_or(0, |s| s.score),
        "run finished"
    );
    Ok(summary)
}
