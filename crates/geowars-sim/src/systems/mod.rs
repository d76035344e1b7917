//! Systems that operate on the entity registry each tick.
//!
//! Systems are plain functions over `&mut EntityRegistry` (or `&` for
//! read-only). They keep no state of their own; per-run counters live in the
//! engine and are passed in.

pub mod collision;
pub mod cooldown;
pub mod input;
pub mod lifespan;
pub mod movement;
pub mod render;
pub mod snapshot;
pub mod spawner;

