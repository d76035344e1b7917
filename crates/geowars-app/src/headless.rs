//! Renderer for running without a window.
//!
//! Nothing is drawn. The renderer checks that the configured font exists so
//! a broken config fails the same way it would with a real window, and
//! keeps per-frame draw statistics for logging.

use std::path::{Path, PathBuf};

use geowars_core::render::{CircleDraw, RenderError, Renderer, TextDraw};

#[derive(Debug, Default, Clone)]
pub struct HeadlessRenderer {
    font: Option<PathBuf>,
    pending_circles: usize,
    pending_texts: usize,
    /// Draw calls in the most recently presented frame.
    pub last_frame: FrameStats,
    pub frames_presented: u64,
    /// HUD line of the most recently presented frame.
    pub last_hud: Option<String>,
    pending_hud: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub circles: usize,
    pub texts: usize,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font(&self) -> Option<&Path> {
        self.font.as_deref()
    }
}

impl Renderer for HeadlessRenderer {
    fn load_font(&mut self, path: &Path) -> Result<(), RenderError> {
        std::fs::File::open(path).map_err(|source| RenderError::FontLoad {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "font found");
        self.font = Some(path.to_path_buf());
        Ok(())
    }

    fn clear(&mut self) {
        self.pending_circles = 0;
        self.pending_texts = 0;
        self.pending_hud = None;
    }

    fn draw_circle(&mut self, _circle: &CircleDraw) {
        self.pending_circles += 1;
    }

    fn draw_text(&mut self, text: &TextDraw) {
        self.pending_texts += 1;
        self.pending_hud = Some(text.text.clone());
    }

    fn present(&mut self) {
        self.last_frame = FrameStats {
            circles: self.pending_circles,
            texts: self.pending_texts,
        };
        self.last_hud = self.pending_hud.take();
        self.frames_presented += 1;
    }
}
