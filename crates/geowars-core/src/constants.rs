//! Gameplay tuning that is not read from the config file.

use crate::types::Tick;

/// Default fixed tick rate (Hz) when the config frame limit is 0.
pub const DEFAULT_TICK_RATE: u32 = 60;

/// Cosmetic spin added to every transform each tick (degrees).
pub const SPIN_DEGREES_PER_TICK: f32 = 2.0;

// --- Scoring ---

/// Points per side for an enemy.
pub const ENEMY_POINTS_PER_SIDE: u64 = 100;

/// Points per side for a small enemy (double the parent rate).
pub const SMALL_ENEMY_POINTS_PER_SIDE: u64 = 200;

/// Small enemies are drawn and collide at this fraction of the parent.
pub const SMALL_ENEMY_SCALE: f32 = 0.5;

// --- Special weapon ---

/// Ticks the special weapon stays unavailable after firing (5s at 60Hz).
pub const SPECIAL_COOLDOWN_TICKS: Tick = 300;

/// Distance from the player at which allies lock onto their orbit.
pub const ORBIT_RADIUS: f32 = 100.0;

/// Outward speed of freshly launched allies (pixels per tick).
pub const SMALL_ALLY_SPEED: f32 = 4.0;

/// Allies are drawn and collide at this fraction of the player.
pub const SMALL_ALLY_SCALE: f32 = 0.4;

/// Ticks an ally lives before it fades out.
pub const SMALL_ALLY_LIFESPAN: u32 = 240;

/// Ticks between volleys fired by each orbiting ally.
pub const ALLY_FIRE_INTERVAL_TICKS: Tick = 30;

// --- HUD ---

pub const HUD_MARGIN: f32 = 10.0;
