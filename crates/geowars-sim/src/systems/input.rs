//! User input system.
//!
//! Applies the events drained from the input source this tick: movement keys
//! update the player's Input flags, mouse buttons fire, P toggles pause and
//! Escape or a closed window stop the run.
//!
//! Held movement keys live in `RunState`, so they survive a player death and
//! carry over to the respawned player once it is live.

use geowars_core::components::Input;
use geowars_core::config::GameConfig;
use geowars_core::enums::{Key, MouseButton, Tag};
use geowars_core::events::InputEvent;
use geowars_core::types::Tick;

use crate::registry::EntityRegistry;
use crate::systems::spawner;

/// Run-level flags the input system can flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunState {
    pub running: bool,
    pub paused: bool,
    /// Movement keys currently held down.
    pub held: Input,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            running: true,
            paused: false,
            held: Input::default(),
        }
    }
}

/// Apply `events` in order.
pub fn run(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    events: &[InputEvent],
    current_tick: Tick,
    state: &mut RunState,
) {
    for event in events {
        match *event {
            InputEvent::KeyDown { key } => match key {
                Key::P => {
                    state.paused = !state.paused;
                    tracing::info!(paused = state.paused, tick = current_tick, "pause toggled");
                }
                Key::Escape => stop(state, "escape pressed"),
                _ => set_direction(&mut state.held, key, true),
            },
            InputEvent::KeyUp { key } => set_direction(&mut state.held, key, false),
            InputEvent::MouseDown { button, position } => {
                if state.paused {
                    continue;
                }
                let Some(player) = registry.first_alive(Tag::Player) else {
                    tracing::warn!(?button, "no player to fire from");
                    continue;
                };
                match button {
                    MouseButton::Left => {
                        spawner::spawn_bullet(registry, config, player, position);
                    }
                    MouseButton::Right => {
                        spawner::spawn_special_weapon(registry, player, current_tick);
                    }
                    MouseButton::Middle => {}
                }
            }
            InputEvent::WindowClosed => stop(state, "window closed"),
        }
    }

    if let Some(input) = registry
        .first_alive(Tag::Player)
        .and_then(|id| registry.get_mut(id))
        .and_then(|entity| entity.components.input.as_mut())
    {
        *input = state.held;
    }
}

fn stop(state: &mut RunState, reason: &str) {
    if state.running {
        tracing::info!(reason, "stopping run");
    }
    state.running = false;
}

fn set_direction(input: &mut Input, key: Key, pressed: bool) {
    match key {
        Key::W => input.up = pressed,
        Key::S => input.down = pressed,
        Key::A => input.left = pressed,
        Key::D => input.right = pressed,
        _ => {}
    }
}
