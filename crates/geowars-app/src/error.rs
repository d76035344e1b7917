//! Errors that stop the app before or while the game loop runs.

use std::path::PathBuf;

use thiserror::Error;

use geowars_core::error::ConfigError;
use geowars_core::render::RenderError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("cannot read input script {path}: {source}")]
    ScriptIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed input script {path}: {source}")]
    ScriptParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to start the game loop thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("game loop thread panicked")]
    LoopPanicked,
}

pub type AppResult<T> = Result<T, AppError>;
