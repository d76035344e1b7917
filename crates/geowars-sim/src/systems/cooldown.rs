//! Special weapon cooldown system.

use geowars_core::enums::Tag;
use geowars_core::types::Tick;

use crate::registry::EntityRegistry;

/// Re-arm the player's special once more than `cooldown_ticks` have passed
/// since it fired. Returns true on the tick it becomes available again.
pub fn run(registry: &mut EntityRegistry, current_tick: Tick) -> bool {
    let Some(special) = registry
        .first_alive(Tag::Player)
        .and_then(|id| registry.get_mut(id))
        .and_then(|entity| entity.components.special.as_mut())
    else {
        return false;
    };

    if special.available {
        return false;
    }
    if current_tick.saturating_sub(special.last_fired_tick) > special.cooldown_ticks {
        special.available = true;
        tracing::debug!(tick = current_tick, "special weapon ready");
        return true;
    }
    false
}
