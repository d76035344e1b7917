//! Render system: turns live entities and the score into draw calls.

use geowars_core::config::GameConfig;
use geowars_core::constants::HUD_MARGIN;
use geowars_core::render::{CircleDraw, Renderer, TextDraw};
use geowars_core::types::Vec2;

use crate::registry::EntityRegistry;

/// Draw one frame: every live entity with a Transform and Shape, then the
/// score line.
pub fn run(registry: &EntityRegistry, renderer: &mut dyn Renderer, config: &GameConfig, score: u64) {
    renderer.clear();

    for entity in registry.iter_alive() {
        let (Some(transform), Some(shape)) = (entity.components.transform, entity.components.shape)
        else {
            continue;
        };
        renderer.draw_circle(&CircleDraw {
            position: transform.position,
            radius: shape.radius,
            sides: shape.sides,
            fill: shape.fill,
            outline: shape.outline,
            outline_thickness: shape.outline_thickness,
            rotation: transform.angle,
        });
    }

    renderer.draw_text(&TextDraw {
        text: format!("Score: {score}"),
        position: Vec2::splat(HUD_MARGIN),
        size: config.font.size,
        color: config.font.color,
    });
    renderer.present();
}
