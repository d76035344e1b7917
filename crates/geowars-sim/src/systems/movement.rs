//! Kinematic integration system.
//!
//! Sets the player's velocity from its input flags, then advances every live
//! entity by position += velocity and spins it. Allies that have flown past
//! the orbit radius are pinned to the orbit around the moved player, and stay
//! pinned on every later tick so they ride along with it.

use geowars_core::config::GameConfig;
use geowars_core::constants::{ORBIT_RADIUS, SPIN_DEGREES_PER_TICK};
use geowars_core::enums::Tag;
use geowars_core::types::{unit_from_degrees, Vec2};

use crate::registry::EntityRegistry;

/// Run movement for all live entities with a Transform.
pub fn run(registry: &mut EntityRegistry, config: &GameConfig) {
    let player = registry.first_alive(Tag::Player);

    if let Some(entity) = player.and_then(|id| registry.get_mut(id)) {
        if let (Some(transform), Some(input)) =
            (entity.components.transform.as_mut(), entity.components.input)
        {
            transform.velocity = input.direction() * config.player.speed;
        }
    }

    let ids = registry.entities().to_vec();
    for id in &ids {
        let Some(entity) = registry.get_mut(*id) else {
            continue;
        };
        if !entity.is_alive() {
            continue;
        }
        if let Some(transform) = entity.components.transform.as_mut() {
            transform.position += transform.velocity;
            transform.angle += SPIN_DEGREES_PER_TICK;
        }
    }

    let Some(center) = player
        .and_then(|id| registry.get(id))
        .and_then(|entity| entity.components.transform)
        .map(|t| t.position)
    else {
        return;
    };
    let allies = registry.entities_by_tag(Tag::SmallAlly).to_vec();
    for id in allies {
        let Some(entity) = registry.get_mut(id) else {
            continue;
        };
        if !entity.is_alive() {
            continue;
        }
        if let Some(transform) = entity.components.transform.as_mut() {
            // Zero velocity marks an ally that already locked on.
            let locked = transform.velocity == Vec2::ZERO;
            if locked || transform.position.distance(center) > ORBIT_RADIUS {
                transform.position = orbit_point(center, transform.angle);
                transform.velocity = Vec2::ZERO;
            }
        }
    }
}

/// Point on the orbit circle around `center` at `angle` degrees.
pub fn orbit_point(center: Vec2, angle: f32) -> Vec2 {
    center + unit_from_degrees(angle) * ORBIT_RADIUS
}
