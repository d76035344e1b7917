//! Component records attached to entities.
//!
//! Components are plain data structs with no behavior.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::{Color, Tick, Vec2};

/// Position, velocity and cosmetic spin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    /// Pixels per tick.
    pub velocity: Vec2,
    /// Degrees. Only drives the visual rotation; grows without bound.
    pub angle: f32,
}

impl Transform {
    pub fn new(position: Vec2, velocity: Vec2, angle: f32) -> Self {
        Self {
            position,
            velocity,
            angle,
        }
    }
}

/// Regular polygon used for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub radius: f32,
    /// At least 3. Also the score multiplier and the fan-out factor.
    pub sides: u32,
    pub fill: Color,
    pub outline: Color,
    pub outline_thickness: f32,
}

/// Radius used for overlap tests, independent of the drawn radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collision {
    pub radius: f32,
}

/// Remaining ticks before the entity expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifespan {
    pub remaining: u32,
    pub total: u32,
}

impl Lifespan {
    pub fn new(total: u32) -> Self {
        Self {
            remaining: total,
            total,
        }
    }

    /// Fraction of the lifespan left, used as the fade alpha.
    pub fn ratio(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.remaining as f32 / self.total as f32
        }
    }
}

/// Points awarded when the entity is shot down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub points: u64,
}

/// Directional flags written by the input system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Input {
    /// Unit (or zero) direction in screen coordinates, +y pointing down.
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir.normalize_or_zero()
    }
}

/// Special weapon state: Available → (fire) → Cooldown → (timeout) → Available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Special {
    pub cooldown_ticks: Tick,
    pub last_fired_tick: Tick,
    pub available: bool,
}

impl Special {
    pub fn new(cooldown_ticks: Tick) -> Self {
        Self {
            cooldown_ticks,
            last_fired_tick: 0,
            available: true,
        }
    }
}

/// The full set of optional component slots an entity can carry.
///
/// A `None` slot means the entity does not take part in the systems that
/// read that component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    pub transform: Option<Transform>,
    pub shape: Option<Shape>,
    pub collision: Option<Collision>,
    pub lifespan: Option<Lifespan>,
    pub score: Option<Score>,
    pub input: Option<Input>,
    pub special: Option<Special>,
}
