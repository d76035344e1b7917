//! Collision resolution system.
//!
//! Circle-circle overlap on collision radii, resolved in a fixed order:
//! enemy walls, player hits, enemy kills, small enemy kills, player walls.
//! Anything destroyed earlier in the pass is skipped by every later check.

use geowars_core::config::GameConfig;
use geowars_core::enums::Tag;
use geowars_core::random::RandomSource;
use geowars_core::types::{circles_overlap, Vec2, Viewport};

use crate::entity::EntityId;
use crate::registry::EntityRegistry;
use crate::systems::spawner;

/// What happened during one collision pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    pub player_killed: bool,
    pub enemies_destroyed: usize,
    pub small_enemies_destroyed: usize,
}

/// Run all collision checks for this tick. `score` is reset on player death
/// and credited for every kill.
pub fn run(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    rng: &mut dyn RandomSource,
    score: &mut u64,
) -> CollisionOutcome {
    let view = config.viewport();
    let mut outcome = CollisionOutcome::default();

    bounce_enemies(registry, view);
    outcome.player_killed = resolve_player_hits(registry, config, score);

    outcome.enemies_destroyed += resolve_kills(registry, config, rng, score, Tag::Enemy, Tag::Bullet);
    outcome.enemies_destroyed +=
        resolve_kills(registry, config, rng, score, Tag::Enemy, Tag::SmallAlly);
    outcome.small_enemies_destroyed +=
        resolve_kills(registry, config, rng, score, Tag::SmallEnemy, Tag::Bullet);
    outcome.small_enemies_destroyed +=
        resolve_kills(registry, config, rng, score, Tag::SmallEnemy, Tag::SmallAlly);

    keep_player_inside(registry, view);
    outcome
}

/// Position and collision radius of a live entity that has both.
fn body(registry: &EntityRegistry, id: EntityId) -> Option<(Vec2, f32)> {
    let entity = registry.get(id)?;
    if !entity.is_alive() {
        return None;
    }
    Some((
        entity.components.transform?.position,
        entity.components.collision?.radius,
    ))
}

/// Reflect enemy velocity on each axis where the enemy pokes out of the
/// viewport, always pointing it back inside.
fn bounce_enemies(registry: &mut EntityRegistry, view: Viewport) {
    let enemies = registry.entities_by_tag(Tag::Enemy).to_vec();
    for id in enemies {
        let Some((_, radius)) = body(registry, id) else {
            continue;
        };
        let Some(transform) = registry
            .get_mut(id)
            .and_then(|entity| entity.components.transform.as_mut())
        else {
            continue;
        };
        let p = transform.position;
        let v = &mut transform.velocity;
        if p.x - radius < 0.0 {
            v.x = v.x.abs();
        } else if p.x + radius > view.width {
            v.x = -v.x.abs();
        }
        if p.y - radius < 0.0 {
            v.y = v.y.abs();
        } else if p.y + radius > view.height {
            v.y = -v.y.abs();
        }
    }
}

/// First enemy or small enemy touching the player kills it. The player and
/// every ally are destroyed, the score resets, the attacker is destroyed and
/// a fresh player is spawned.
fn resolve_player_hits(registry: &mut EntityRegistry, config: &GameConfig, score: &mut u64) -> bool {
    let Some(player) = registry.first_alive(Tag::Player) else {
        return false;
    };
    let Some((player_pos, player_radius)) = body(registry, player) else {
        return false;
    };

    let attackers: Vec<EntityId> = registry
        .entities_by_tag(Tag::Enemy)
        .iter()
        .chain(registry.entities_by_tag(Tag::SmallEnemy))
        .copied()
        .collect();

    let Some(attacker) = attackers.into_iter().find(|id| {
        body(registry, *id)
            .is_some_and(|(pos, radius)| circles_overlap(pos, radius, player_pos, player_radius))
    }) else {
        return false;
    };

    registry.destroy(player);
    let allies = registry.entities_by_tag(Tag::SmallAlly).to_vec();
    for ally in allies {
        registry.destroy(ally);
    }
    let lost = std::mem::take(score);
    registry.destroy(attacker);
    let respawned = spawner::spawn_player(registry, config);
    tracing::info!(%player, %attacker, %respawned, lost_score = lost, "player destroyed");
    true
}

/// Match each live `target` against the live `hitters`. The first hitter
/// that overlaps kills the target: bullets are consumed, allies are not.
/// Enemies fan out into small enemies; small enemies just die. Returns the
/// number of targets destroyed.
fn resolve_kills(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    rng: &mut dyn RandomSource,
    score: &mut u64,
    target_tag: Tag,
    hitter_tag: Tag,
) -> usize {
    let targets = registry.entities_by_tag(target_tag).to_vec();
    let hitters = registry.entities_by_tag(hitter_tag).to_vec();
    let mut destroyed = 0;

    for target in targets {
        let Some((target_pos, target_radius)) = body(registry, target) else {
            continue;
        };
        let Some(hitter) = hitters.iter().copied().find(|id| {
            body(registry, *id)
                .is_some_and(|(pos, radius)| circles_overlap(pos, radius, target_pos, target_radius))
        }) else {
            continue;
        };

        if hitter_tag == Tag::Bullet {
            registry.destroy(hitter);
        }
        if target_tag == Tag::Enemy {
            let children = spawner::spawn_small_enemies(registry, config, rng, target);
            tracing::debug!(%target, %hitter, children = children.len(), "enemy destroyed");
        }
        let points = registry
            .get(target)
            .and_then(|entity| entity.components.score)
            .map_or(0, |s| s.points);
        *score += points;
        registry.destroy(target);
        destroyed += 1;
    }
    destroyed
}

/// Undo the player's last step on any axis where it left the viewport.
fn keep_player_inside(registry: &mut EntityRegistry, view: Viewport) {
    let Some(player) = registry.first_alive(Tag::Player) else {
        return;
    };
    let Some((_, radius)) = body(registry, player) else {
        return;
    };
    let Some(transform) = registry
        .get_mut(player)
        .and_then(|entity| entity.components.transform.as_mut())
    else {
        return;
    };

    let p = transform.position;
    if p.x - radius < 0.0 || p.x + radius > view.width {
        transform.position.x -= transform.velocity.x;
    }
    if p.y - radius < 0.0 || p.y + radius > view.height {
        transform.position.y -= transform.velocity.y;
    }
}
