//! Game engine: the fixed-order tick pipeline.
//!
//! `GameEngine` owns the configuration, the entity registry, the random
//! source and the per-run counters. Each tick reconciles the registry, runs
//! the simulation systems (unless paused), applies input, renders, and
//! returns a `FrameSnapshot`. Completely headless, so runs with the same
//! seed and the same input are identical.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use geowars_core::config::GameConfig;
use geowars_core::enums::{SystemKind, Tag};
use geowars_core::events::{InputEvent, InputSource};
use geowars_core::random::RandomSource;
use geowars_core::render::{RenderError, Renderer};
use geowars_core::state::FrameSnapshot;
use geowars_core::types::Tick;

use crate::entity::EntityId;
use crate::registry::EntityRegistry;
use crate::systems;
use crate::systems::input::RunState;

/// Options for starting a new run.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same run.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Per-system switches. Pausing overrides every simulation stage but leaves
/// render alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemToggles {
    pub spawning: bool,
    pub lifespan: bool,
    pub movement: bool,
    pub collision: bool,
    pub cooldown: bool,
    pub render: bool,
}

impl Default for SystemToggles {
    fn default() -> Self {
        Self {
            spawning: true,
            lifespan: true,
            movement: true,
            collision: true,
            cooldown: true,
            render: true,
        }
    }
}

impl SystemToggles {
    pub fn is_enabled(&self, kind: SystemKind) -> bool {
        match kind {
            SystemKind::Spawning => self.spawning,
            SystemKind::Lifespan => self.lifespan,
            SystemKind::Movement => self.movement,
            SystemKind::Collision => self.collision,
            SystemKind::Cooldown => self.cooldown,
            SystemKind::Render => self.render,
        }
    }

    pub fn set(&mut self, kind: SystemKind, enabled: bool) {
        let slot = match kind {
            SystemKind::Spawning => &mut self.spawning,
            SystemKind::Lifespan => &mut self.lifespan,
            SystemKind::Movement => &mut self.movement,
            SystemKind::Collision => &mut self.collision,
            SystemKind::Cooldown => &mut self.cooldown,
            SystemKind::Render => &mut self.render,
        };
        *slot = enabled;
    }
}

/// The game engine. Owns the registry and all run state.
pub struct GameEngine {
    config: GameConfig,
    registry: EntityRegistry,
    rng: Box<dyn RandomSource + Send>,
    current_tick: Tick,
    score: u64,
    last_enemy_spawn_tick: Tick,
    spawn_interval: Tick,
    state: RunState,
    toggles: SystemToggles,
    input_queue: VecDeque<InputEvent>,
}

impl GameEngine {
    /// Create an engine seeded from `sim`. The player is queued right away
    /// and becomes visible on the first tick.
    pub fn new(config: GameConfig, sim: SimConfig) -> Self {
        Self::with_random(config, Box::new(ChaCha8Rng::seed_from_u64(sim.seed)))
    }

    /// Create an engine around an injected random source.
    pub fn with_random(config: GameConfig, rng: Box<dyn RandomSource + Send>) -> Self {
        let mut engine = Self {
            spawn_interval: config.enemy.spawn_interval,
            config,
            registry: EntityRegistry::new(),
            rng,
            current_tick: 0,
            score: 0,
            last_enemy_spawn_tick: 0,
            state: RunState::default(),
            toggles: SystemToggles::default(),
            input_queue: VecDeque::new(),
        };
        systems::spawner::spawn_player(&mut engine.registry, &engine.config);
        tracing::info!(
            width = engine.config.window.width,
            height = engine.config.window.height,
            spawn_interval = engine.spawn_interval,
            "engine started"
        );
        engine
    }

    /// Hand the configured font to `renderer`. Call once before the first
    /// rendered tick.
    pub fn load_font(&self, renderer: &mut dyn Renderer) -> Result<(), RenderError> {
        renderer.load_font(&self.config.font.path)
    }

    /// Queue an event for the next tick, ahead of anything the input source
    /// produces.
    pub fn queue_input(&mut self, event: InputEvent) {
        self.input_queue.push_back(event);
    }

    /// Advance one tick without rendering, applying only queued input.
    pub fn tick(&mut self) -> FrameSnapshot {
        self.step(Vec::new(), None)
    }

    /// Advance one tick, polling `input` once and drawing into `renderer`.
    pub fn tick_with(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
    ) -> FrameSnapshot {
        let polled = input.poll_events();
        self.step(polled, Some(renderer))
    }

    /// Drop every entity and counter and start over with a fresh player.
    pub fn restart(&mut self) {
        self.registry.clear();
        self.current_tick = 0;
        self.score = 0;
        self.last_enemy_spawn_tick = 0;
        self.state = RunState::default();
        self.input_queue.clear();
        systems::spawner::spawn_player(&mut self.registry, &self.config);
        tracing::info!("run restarted");
    }

    /// Spawn an enemy immediately, bypassing the throttle.
    pub fn spawn_enemy_now(&mut self) -> EntityId {
        systems::spawner::spawn_enemy(&mut self.registry, &self.config, &mut *self.rng)
    }

    pub fn set_spawn_interval(&mut self, interval: Tick) {
        self.spawn_interval = interval;
    }

    pub fn spawn_interval(&self) -> Tick {
        self.spawn_interval
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    /// False once Escape or a window close has been seen.
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn toggles(&self) -> SystemToggles {
        self.toggles
    }

    pub fn toggles_mut(&mut self) -> &mut SystemToggles {
        &mut self.toggles
    }

    /// The live player, if any.
    pub fn player_id(&self) -> Option<EntityId> {
        self.registry.first_alive(Tag::Player)
    }

    fn step(&mut self, polled: Vec<InputEvent>, renderer: Option<&mut dyn Renderer>) -> FrameSnapshot {
        self.registry.reconcile();

        let simulated = !self.state.paused;
        if simulated {
            self.run_systems();
        }

        let mut events: Vec<InputEvent> = self.input_queue.drain(..).collect();
        events.extend(polled);
        systems::input::run(
            &mut self.registry,
            &self.config,
            &events,
            self.current_tick,
            &mut self.state,
        );

        if self.toggles.render {
            if let Some(renderer) = renderer {
                systems::render::run(&self.registry, renderer, &self.config, self.score);
            }
        }

        if simulated {
            self.current_tick += 1;
        }
        systems::snapshot::build_snapshot(
            &self.registry,
            self.current_tick,
            self.score,
            self.state.paused,
        )
    }

    /// Run the simulation systems in order.
    fn run_systems(&mut self) {
        // 1. Spawning (throttled enemies, ally volleys)
        if self.toggles.spawning {
            systems::spawner::run_enemy_spawner(
                &mut self.registry,
                &self.config,
                &mut *self.rng,
                self.spawn_interval,
                &mut self.last_enemy_spawn_tick,
                self.current_tick,
            );
            systems::spawner::run_ally_fire(&mut self.registry, &self.config, self.current_tick);
        }
        // 2. Lifespan decay
        if self.toggles.lifespan {
            systems::lifespan::run(&mut self.registry);
        }
        // 3. Movement integration
        if self.toggles.movement {
            systems::movement::run(&mut self.registry, &self.config);
        }
        // 4. Collision resolution
        if self.toggles.collision {
            let outcome = systems::collision::run(
                &mut self.registry,
                &self.config,
                &mut *self.rng,
                &mut self.score,
            );
            if outcome.enemies_destroyed + outcome.small_enemies_destroyed > 0 {
                tracing::debug!(
                    tick = self.current_tick,
                    enemies = outcome.enemies_destroyed,
                    small_enemies = outcome.small_enemies_destroyed,
                    score = self.score,
                    "kills resolved"
                );
            }
        }
        // 5. Special weapon cooldown
        if self.toggles.cooldown {
            systems::cooldown::run(&mut self.registry, self.current_tick);
        }
    }
}
