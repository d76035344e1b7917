//! Core types and definitions for the geowars simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, tags, configuration, snapshots, constants, and the traits
//! for the collaborators the simulation drives (random source, renderer,
//! input source, clock). It has no dependency on any windowing backend.

pub mod clock;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod random;
pub mod render;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
