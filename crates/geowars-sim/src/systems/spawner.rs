//! Entity spawn factories and the throttled enemy spawner.
//!
//! Every factory goes through `EntityRegistry::create_entity`, so new
//! entities join the live views at the next reconcile.

use std::f32::consts::TAU;

use geowars_core::components::*;
use geowars_core::config::GameConfig;
use geowars_core::constants::*;
use geowars_core::enums::Tag;
use geowars_core::random::RandomSource;
use geowars_core::types::{unit_from_degrees, unit_from_radians, Color, Tick, Vec2};

use crate::entity::EntityId;
use crate::registry::EntityRegistry;

/// Spawn the player at the center of the viewport, standing still.
pub fn spawn_player(registry: &mut EntityRegistry, config: &GameConfig) -> EntityId {
    let pc = &config.player;
    let id = registry.create_entity(
        Tag::Player,
        Components {
            transform: Some(Transform::new(config.viewport().center(), Vec2::ZERO, 0.0)),
            shape: Some(Shape {
                radius: pc.shape_radius,
                sides: pc.vertices,
                fill: pc.fill,
                outline: pc.outline,
                outline_thickness: pc.outline_thickness,
            }),
            collision: Some(Collision {
                radius: pc.collision_radius,
            }),
            input: Some(Input::default()),
            special: Some(Special::new(SPECIAL_COOLDOWN_TICKS)),
            ..Default::default()
        },
    );
    tracing::debug!(%id, "spawned player");
    id
}

/// Spawn one enemy at a random position fully inside the viewport, heading
/// in a random direction at a random speed.
pub fn spawn_enemy(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    rng: &mut dyn RandomSource,
) -> EntityId {
    let ec = &config.enemy;
    let view = config.viewport();
    let r = ec.shape_radius;

    let position = Vec2::new(
        rng.uniform_float(r, view.width - r),
        rng.uniform_float(r, view.height - r),
    );
    let sides = rng.uniform_int(ec.min_vertices as i64, ec.max_vertices as i64) as u32;
    let speed = rng.uniform_float(ec.min_speed, ec.max_speed);
    let heading = rng.uniform_float(0.0, TAU);
    let fill = random_color(rng);

    let id = registry.create_entity(
        Tag::Enemy,
        Components {
            transform: Some(Transform::new(position, unit_from_radians(heading) * speed, 0.0)),
            shape: Some(Shape {
                radius: r,
                sides,
                fill,
                outline: ec.outline,
                outline_thickness: ec.outline_thickness,
            }),
            collision: Some(Collision {
                radius: ec.collision_radius,
            }),
            score: Some(Score {
                points: sides as u64 * ENEMY_POINTS_PER_SIDE,
            }),
            ..Default::default()
        },
    );
    tracing::debug!(%id, sides, speed, "spawned enemy");
    id
}

/// Spawn an enemy when more than `spawn_interval` ticks have passed since
/// the last one. Records the spawn tick.
pub fn run_enemy_spawner(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    rng: &mut dyn RandomSource,
    spawn_interval: Tick,
    last_spawn_tick: &mut Tick,
    current_tick: Tick,
) -> Option<EntityId> {
    if current_tick.saturating_sub(*last_spawn_tick) <= spawn_interval {
        return None;
    }
    *last_spawn_tick = current_tick;
    Some(spawn_enemy(registry, config, rng))
}

/// Split a destroyed enemy into `sides` small enemies flying outward, evenly
/// spaced around a circle with a random phase. Returns the new ids; empty if
/// the parent lacks a transform or shape.
pub fn spawn_small_enemies(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    rng: &mut dyn RandomSource,
    parent: EntityId,
) -> Vec<EntityId> {
    let Some(entity) = registry.get(parent) else {
        return Vec::new();
    };
    let (Some(transform), Some(shape)) = (entity.components.transform, entity.components.shape)
    else {
        return Vec::new();
    };
    let collision_radius = entity
        .components
        .collision
        .map_or(config.enemy.collision_radius, |c| c.radius);

    let speed = transform.velocity.length();
    let step = TAU / shape.sides as f32;
    let phase = rng.uniform_float(0.0, TAU);

    (0..shape.sides)
        .map(|i| {
            let heading = phase + step * i as f32;
            registry.create_entity(
                Tag::SmallEnemy,
                Components {
                    transform: Some(Transform::new(
                        transform.position,
                        unit_from_radians(heading) * speed,
                        transform.angle,
                    )),
                    shape: Some(Shape {
                        radius: shape.radius * SMALL_ENEMY_SCALE,
                        ..shape
                    }),
                    collision: Some(Collision {
                        radius: collision_radius * SMALL_ENEMY_SCALE,
                    }),
                    lifespan: Some(Lifespan::new(config.enemy.small_lifespan)),
                    score: Some(Score {
                        points: shape.sides as u64 * SMALL_ENEMY_POINTS_PER_SIDE,
                    }),
                    ..Default::default()
                },
            )
        })
        .collect()
}

/// Fire a bullet from `source` toward `target`. Returns `None` when the
/// source has no transform.
pub fn spawn_bullet(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    source: EntityId,
    target: Vec2,
) -> Option<EntityId> {
    let origin = registry.get(source)?.components.transform?.position;
    let bc = &config.bullet;
    let velocity = (target - origin).normalize_or_zero() * bc.speed;

    Some(registry.create_entity(
        Tag::Bullet,
        Components {
            transform: Some(Transform::new(origin, velocity, 0.0)),
            shape: Some(Shape {
                radius: bc.shape_radius,
                sides: bc.vertices,
                fill: bc.fill,
                outline: bc.outline,
                outline_thickness: bc.outline_thickness,
            }),
            collision: Some(Collision {
                radius: bc.collision_radius,
            }),
            lifespan: Some(Lifespan::new(bc.lifespan)),
            ..Default::default()
        },
    ))
}

/// Launch the special weapon: `sides` allies fly outward from the source and
/// lock into orbit once far enough away. Only fires while the source's
/// special is available; moves it into cooldown.
pub fn spawn_special_weapon(
    registry: &mut EntityRegistry,
    source: EntityId,
    current_tick: Tick,
) -> bool {
    let Some(entity) = registry.get_mut(source) else {
        return false;
    };
    let (Some(transform), Some(shape)) = (entity.components.transform, entity.components.shape)
    else {
        return false;
    };
    let collision_radius = entity.components.collision.map_or(0.0, |c| c.radius);
    let Some(special) = entity.components.special.as_mut() else {
        return false;
    };
    if !special.available {
        return false;
    }
    special.available = false;
    special.last_fired_tick = current_tick;

    let step = 360.0 / shape.sides as f32;
    for i in 0..shape.sides {
        let angle = step * i as f32;
        registry.create_entity(
            Tag::SmallAlly,
            Components {
                transform: Some(Transform::new(
                    transform.position,
                    unit_from_degrees(angle) * SMALL_ALLY_SPEED,
                    angle,
                )),
                shape: Some(Shape {
                    radius: shape.radius * SMALL_ALLY_SCALE,
                    ..shape
                }),
                collision: Some(Collision {
                    radius: collision_radius * SMALL_ALLY_SCALE,
                }),
                lifespan: Some(Lifespan::new(SMALL_ALLY_LIFESPAN)),
                ..Default::default()
            },
        );
    }
    tracing::info!(allies = shape.sides, tick = current_tick, "special weapon fired");
    true
}

/// Every `ALLY_FIRE_INTERVAL_TICKS`, each live ally shoots at the nearest
/// live enemy or small enemy. Returns the number of bullets fired.
pub fn run_ally_fire(registry: &mut EntityRegistry, config: &GameConfig, current_tick: Tick) -> usize {
    if current_tick == 0 || current_tick % ALLY_FIRE_INTERVAL_TICKS != 0 {
        return 0;
    }

    let targets: Vec<Vec2> = [Tag::Enemy, Tag::SmallEnemy]
        .iter()
        .flat_map(|tag| registry.entities_by_tag(*tag).iter())
        .filter_map(|id| {
            let entity = registry.get(*id)?;
            if !entity.is_alive() {
                return None;
            }
            entity.components.transform.map(|t| t.position)
        })
        .collect();
    if targets.is_empty() {
        return 0;
    }

    let shots: Vec<(EntityId, Vec2)> = registry
        .entities_by_tag(Tag::SmallAlly)
        .iter()
        .filter_map(|id| {
            let entity = registry.get(*id)?;
            if !entity.is_alive() {
                return None;
            }
            let origin = entity.components.transform?.position;
            let nearest = targets.iter().copied().min_by(|a, b| {
                origin
                    .distance_squared(*a)
                    .total_cmp(&origin.distance_squared(*b))
            })?;
            Some((*id, nearest))
        })
        .collect();

    shots
        .into_iter()
        .filter_map(|(ally, target)| spawn_bullet(registry, config, ally, target))
        .count()
}

fn random_color(rng: &mut dyn RandomSource) -> Color {
    Color::rgb(
        rng.uniform_int(0, 255) as u8,
        rng.uniform_int(0, 255) as u8,
        rng.uniform_int(0, 255) as u8,
    )
}
