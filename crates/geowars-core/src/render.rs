//! Drawing surface consumed by the render system.
//!
//! The core never talks to a window directly. It emits draw calls through
//! `Renderer`; backends decide what a frame looks like.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Color, Vec2};

/// Errors raised by a rendering backend.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to load font {path}: {source}")]
    FontLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One regular polygon, drawn centered at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleDraw {
    pub position: Vec2,
    pub radius: f32,
    pub sides: u32,
    pub fill: Color,
    pub outline: Color,
    pub outline_thickness: f32,
    /// Degrees.
    pub rotation: f32,
}

/// A single line of HUD text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextDraw {
    pub text: String,
    pub position: Vec2,
    pub size: u32,
    pub color: Color,
}

pub trait Renderer {
    /// Load the HUD font. Called once before the first frame; failure is fatal.
    fn load_font(&mut self, path: &Path) -> Result<(), RenderError>;
    fn clear(&mut self);
    fn draw_circle(&mut self, circle: &CircleDraw);
    fn draw_text(&mut self, text: &TextDraw);
    /// Finish the frame. Fire-and-forget.
    fn present(&mut self);
}

/// Keeps the draw calls of the most recently presented frame.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    pending_circles: Vec<CircleDraw>,
    pending_texts: Vec<TextDraw>,
    pub circles: Vec<CircleDraw>,
    pub texts: Vec<TextDraw>,
    pub frames_presented: u64,
    pub font: Option<PathBuf>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for RecordingRenderer {
    fn load_font(&mut self, path: &Path) -> Result<(), RenderError> {
        self.font = Some(path.to_path_buf());
        Ok(())
    }

    fn clear(&mut self) {
        self.pending_circles.clear();
        self.pending_texts.clear();
    }

    fn draw_circle(&mut self, circle: &CircleDraw) {
        self.pending_circles.push(*circle);
    }

    fn draw_text(&mut self, text: &TextDraw) {
        self.pending_texts.push(text.clone());
    }

    fn present(&mut self) {
        self.circles = std::mem::take(&mut self.pending_circles);
        self.texts = std::mem::take(&mut self.pending_texts);
        self.frames_presented += 1;
    }
}
