//! State shared between the caller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use geowars_core::events::InputEvent;
use geowars_core::state::FrameSnapshot;

use crate::error::{AppError, AppResult};
use crate::game_loop::LoopSummary;

/// Messages sent to the game loop thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameLoopCommand {
    /// An input event to apply on the next tick.
    Input(InputEvent),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, updated by the game loop after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<FrameSnapshot>>>;

/// Owner's side of a running game loop.
pub struct LoopHandle {
    command_tx: mpsc::Sender<GameLoopCommand>,
    latest_snapshot: SharedSnapshot,
    join: JoinHandle<LoopSummary>,
}

impl LoopHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<GameLoopCommand>,
        latest_snapshot: SharedSnapshot,
        join: JoinHandle<LoopSummary>,
    ) -> Self {
        Self {
            command_tx,
            latest_snapshot,
            join,
        }
    }

    /// Forward an input event. Returns false once the loop has exited.
    pub fn send_input(&self, event: InputEvent) -> bool {
        self.command_tx.send(GameLoopCommand::Input(event)).is_ok()
    }

    /// The snapshot from the most recent tick, `None` before the first one.
    pub fn latest_snapshot(&self) -> Option<FrameSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Ask the loop to stop and wait for it.
    pub fn shutdown(self) -> AppResult<LoopSummary> {
        // The loop may already be gone; joining below reports how it ended.
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        self.join()
    }

    /// Wait for the loop to stop on its own.
    pub fn join(self) -> AppResult<LoopSummary> {
        self.join.join().map_err(|_| AppError::LoopPanicked)
    }
}
