//! Lifespan decay system.
//!
//! Counts down every live entity that carries a Lifespan, fades its colors
//! with the remaining fraction, and destroys it on the tick it reaches zero.

use crate::registry::EntityRegistry;

/// Run lifespan decay. Returns the number of entities that expired.
pub fn run(registry: &mut EntityRegistry) -> usize {
    let ids = registry.entities().to_vec();
    let mut expired = Vec::new();

    for id in ids {
        let Some(entity) = registry.get_mut(id) else {
            continue;
        };
        if !entity.is_alive() {
            continue;
        }
        let Some(lifespan) = entity.components.lifespan.as_mut() else {
            continue;
        };

        if lifespan.remaining > 0 {
            lifespan.remaining -= 1;
            let ratio = lifespan.ratio();
            let remaining = lifespan.remaining;
            if let Some(shape) = entity.components.shape.as_mut() {
                shape.fill = shape.fill.with_alpha_ratio(ratio);
                shape.outline = shape.outline.with_alpha_ratio(ratio);
            }
            if remaining == 0 {
                expired.push(id);
            }
        } else {
            expired.push(id);
        }
    }

    for id in &expired {
        registry.destroy(*id);
    }
    expired.len()
}
