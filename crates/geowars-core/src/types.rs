//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

pub use glam::Vec2;

/// Discrete simulation step counter.
pub type Tick = u64;

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with the alpha channel set from a 0.0..=1.0 ratio.
    pub fn with_alpha_ratio(self, ratio: f32) -> Self {
        let a = (ratio.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Unit vector pointing along `radians` (0 = +x, counter-clockwise in math
/// coordinates, clockwise on screen since +y points down).
pub fn unit_from_radians(radians: f32) -> Vec2 {
    Vec2::new(radians.cos(), radians.sin())
}

/// Unit vector pointing along `degrees`.
pub fn unit_from_degrees(degrees: f32) -> Vec2 {
    unit_from_radians(degrees.to_radians())
}

/// True when two circles overlap. Compares squared distances only.
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}

/// Axis-aligned viewport starting at the origin, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
