//! Game loop thread: runs the engine at the configured frame limit and
//! emits snapshots.
//!
//! The engine moves into the thread. Input arrives via an `mpsc` channel
//! and from the injected input source; snapshots go to a JSON-lines sink
//! and to shared state for polling.

use std::io::Write;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use geowars_core::clock::{Clock, SystemClock};
use geowars_core::config::GameConfig;
use geowars_core::constants::DEFAULT_TICK_RATE;
use geowars_core::events::InputSource;
use geowars_core::render::Renderer;
use geowars_core::state::FrameSnapshot;
use geowars_sim::GameEngine;

use crate::error::{AppError, AppResult};
use crate::state::{GameLoopCommand, LoopHandle, SharedSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOptions {
    pub tick_rate: u32,
    /// Stop after this many frames.
    pub max_frames: Option<u64>,
    /// Emit a snapshot every N frames; 0 disables.
    pub snapshot_every: u64,
    /// Sleep to hold the tick rate. Off for tests and batch runs.
    pub paced: bool,
}

impl LoopOptions {
    /// Tick at the config's frame limit, or `DEFAULT_TICK_RATE` when it is 0.
    pub fn from_config(config: &GameConfig) -> Self {
        let tick_rate = match config.window.frame_limit {
            0 => DEFAULT_TICK_RATE,
            limit => limit,
        };
        Self {
            tick_rate,
            max_frames: None,
            snapshot_every: 0,
            paced: true,
        }
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / self.tick_rate.max(1) as u64)
    }
}

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Escape or a closed window.
    Quit,
    FrameLimit,
    Shutdown,
    Disconnected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoopSummary {
    pub frames: u64,
    pub reason: StopReason,
    pub last_snapshot: Option<FrameSnapshot>,
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(
    engine: GameEngine,
    input: Box<dyn InputSource + Send>,
    renderer: Box<dyn Renderer + Send>,
    sink: Box<dyn Write + Send>,
    options: LoopOptions,
) -> AppResult<LoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let join = std::thread::Builder::new()
        .name("geowars-game-loop".into())
        .spawn(move || run_game_loop(engine, cmd_rx, input, renderer, sink, options, &shared))
        .map_err(AppError::Spawn)?;

    Ok(LoopHandle::new(cmd_tx, latest_snapshot, join))
}

/// The game loop. Runs until the player quits, the frame limit is hit, or a
/// Shutdown command / channel disconnect arrives.
fn run_game_loop(
    mut engine: GameEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    mut input: Box<dyn InputSource + Send>,
    mut renderer: Box<dyn Renderer + Send>,
    mut sink: Box<dyn Write + Send>,
    options: LoopOptions,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) -> LoopSummary {
    let tick_duration = options.tick_duration();
    let mut clock = SystemClock::new();
    let mut frames = 0;
    let mut last_snapshot = None;

    tracing::info!(tick_rate = options.tick_rate, paced = options.paced, "game loop started");

    let reason = 'frames: loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(event)) => engine.queue_input(event),
                Ok(GameLoopCommand::Shutdown) => break 'frames StopReason::Shutdown,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break 'frames StopReason::Disconnected,
            }
        }

        // 2. Advance one tick (the engine handles pause internally)
        let snapshot = engine.tick_with(input.as_mut(), renderer.as_mut());
        frames += 1;

        // 3. Emit every Nth snapshot
        if options.snapshot_every > 0 && frames % options.snapshot_every == 0 {
            if let Err(err) = write_snapshot(&mut sink, &snapshot) {
                tracing::warn!(%err, frame = frames, "failed to write snapshot");
            }
        }

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }
        last_snapshot = Some(snapshot);

        if !engine.is_running() {
            break StopReason::Quit;
        }
        if options.max_frames.is_some_and(|max| frames >= max) {
            break StopReason::FrameLimit;
        }

        // 5. Sleep off the rest of the frame
        if options.paced {
            let spent = clock.elapsed_since_last_tick();
            if spent < tick_duration {
                std::thread::sleep(tick_duration - spent);
            }
            clock.elapsed_since_last_tick();
        }
    };

    if let Err(err) = sink.flush() {
        tracing::warn!(%err, "failed to flush snapshot output");
    }
    tracing::info!(frames, ?reason, "game loop stopped");

    LoopSummary {
        frames,
        reason,
        last_snapshot,
    }
}

fn write_snapshot(sink: &mut dyn Write, snapshot: &FrameSnapshot) -> std::io::Result<()> {
    serde_json::to_writer(&mut *sink, snapshot)?;
    sink.write_all(b"\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use geowars_core::enums::Key;
    use geowars_core::events::{InputEvent, NoInput, QueuedInput};
    use geowars_core::render::RecordingRenderer;
    use geowars_sim::SimConfig;

    const CONFIG: &str = "\
Window 640 480 0 0
Font fonts/tech.ttf 24 255 255 255
Player 32 32 5 5 5 5 255 0 0 4 8
Enemy 32 32 3 3 255 255 255 2 3 8 90 60
Bullet 10 10 20 255 255 255 255 255 255 2 20 90
";

    /// Sink that keeps what was written so the test can read it back.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn engine() -> GameEngine {
        GameEngine::new(CONFIG.parse().unwrap(), SimConfig::default())
    }

    fn unpaced(max_frames: Option<u64>, snapshot_every: u64) -> LoopOptions {
        LoopOptions {
            tick_rate: 60,
            max_frames,
            snapshot_every,
            paced: false,
        }
    }

    #[test]
    fn test_frame_limit_and_snapshot_output() {
        let buf = SharedBuf::default();
        let handle = spawn_game_loop(
            engine(),
            Box::new(NoInput),
            Box::new(RecordingRenderer::new()),
            Box::new(buf.clone()),
            unpaced(Some(10), 4),
        )
        .unwrap();
        let summary = handle.join().unwrap();

        assert_eq!(summary.frames, 10);
        assert_eq!(summary.reason, StopReason::FrameLimit);
        assert_eq!(summary.last_snapshot.unwrap().tick, 10);

        let text = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        let ticks: Vec<u64> = text
            .lines()
            .map(|line| serde_json::from_str::<FrameSnapshot>(line).unwrap().tick)
            .collect();
        assert_eq!(ticks, vec![4, 8]);
    }

    #[test]
    fn test_escape_from_input_source_ends_loop() {
        let mut input = QueuedInput::new();
        input.push_batch(Vec::new());
        input.push_batch([InputEvent::KeyDown { key: Key::Escape }]);
        let handle = spawn_game_loop(
            engine(),
            Box::new(input),
            Box::new(RecordingRenderer::new()),
            Box::new(io::sink()),
            unpaced(Some(1000), 0),
        )
        .unwrap();
        let summary = handle.join().unwrap();
        assert_eq!(summary.reason, StopReason::Quit);
        assert_eq!(summary.frames, 2);
    }

    #[test]
    fn test_shutdown_command_stops_loop() {
        let handle = spawn_game_loop(
            engine(),
            Box::new(NoInput),
            Box::new(RecordingRenderer::new()),
            Box::new(io::sink()),
            LoopOptions {
                paced: true,
                ..unpaced(None, 0)
            },
        )
        .unwrap();
        assert!(handle.send_input(InputEvent::KeyDown { key: Key::D }));
        std::thread::sleep(Duration::from_millis(50));
        let summary = handle.shutdown().unwrap();
        assert_eq!(summary.reason, StopReason::Shutdown);
        assert!(summary.frames >= 1);
    }

    #[test]
    fn test_latest_snapshot_tracks_running_loop() {
        let handle = spawn_game_loop(
            engine(),
            Box::new(NoInput),
            Box::new(RecordingRenderer::new()),
            Box::new(io::sink()),
            LoopOptions {
                paced: true,
                ..unpaced(None, 0)
            },
        )
        .unwrap();

        let mut seen = None;
        for _ in 0..200 {
            seen = handle.latest_snapshot();
            if seen.as_ref().is_some_and(|s| s.tick >= 2) {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        let seen = seen.unwrap();
        assert!(seen.tick >= 2);
        assert_eq!(seen.counts.player, 1);

        let summary = handle.shutdown().unwrap();
        assert!(summary.last_snapshot.unwrap().tick >= seen.tick);
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        tx.send(GameLoopCommand::Input(InputEvent::KeyDown { key: Key::P }))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            commands,
            vec![
                GameLoopCommand::Input(InputEvent::KeyDown { key: Key::P }),
                GameLoopCommand::Shutdown,
            ]
        );
    }

    #[test]
    fn test_tick_rate_falls_back_when_unlimited() {
        let config: GameConfig = CONFIG.parse().unwrap();
        let options = LoopOptions::from_config(&config);
        assert_eq!(options.tick_rate, DEFAULT_TICK_RATE);
        assert_eq!(
            options.tick_duration().as_nanos(),
            (1_000_000_000u64 / 60) as u128
        );
    }
}
