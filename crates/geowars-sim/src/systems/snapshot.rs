//! Snapshot system: summarizes the registry into a `FrameSnapshot`.
//!
//! Read-only; never modifies the registry.

use geowars_core::enums::Tag;
use geowars_core::state::{FrameSnapshot, PlayerView, TagCounts};
use geowars_core::types::Tick;

use crate::registry::EntityRegistry;

/// Build the snapshot for the frame that just ran.
pub fn build_snapshot(registry: &EntityRegistry, tick: Tick, score: u64, paused: bool) -> FrameSnapshot {
    FrameSnapshot {
        tick,
        score,
        paused,
        player: build_player(registry),
        counts: build_counts(registry),
    }
}

fn build_player(registry: &EntityRegistry) -> Option<PlayerView> {
    let entity = registry.get(registry.first_alive(Tag::Player)?)?;
    let transform = entity.components.transform?;
    Some(PlayerView {
        position: transform.position,
        velocity: transform.velocity,
        special_ready: entity.components.special.is_some_and(|s| s.available),
    })
}

/// Count entities that are in the live views and not flagged dead.
fn build_counts(registry: &EntityRegistry) -> TagCounts {
    let mut counts = TagCounts::default();
    for tag in Tag::ALL {
        let alive = registry
            .entities_by_tag(tag)
            .iter()
            .filter(|id| registry.is_alive(**id))
            .count();
        counts.set(tag, alive);
    }
    counts
}
