//! Simulation engine for geowars.
//!
//! Owns the entity registry, runs the systems in a fixed order each tick,
//! and produces `FrameSnapshot`s for the frontend.

pub mod engine;
pub mod entity;
pub mod registry;
pub mod systems;

pub use engine::{GameEngine, SimConfig, SystemToggles};
pub use entity::{Entity, EntityId};
pub use geowars_core as core;
pub use registry::EntityRegistry;
