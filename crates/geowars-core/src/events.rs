//! Input events delivered by the window collaborator.

use serde::{Deserialize, Serialize};

use crate::enums::{Key, MouseButton};
use crate::types::Vec2;

/// A discrete input event. Drained once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    KeyDown { key: Key },
    KeyUp { key: Key },
    /// Mouse press at a position in viewport pixels.
    MouseDown { button: MouseButton, position: Vec2 },
    WindowClosed,
}

/// Source of input events. `poll_events` must not block and returns only the
/// events that arrived since the previous call.
pub trait InputSource {
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// An input source that never produces events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInput;

impl InputSource for NoInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        Vec::new()
    }
}

/// Plays back a fixed list of events, a batch per poll.
#[derive(Debug, Default, Clone)]
pub struct QueuedInput {
    batches: std::collections::VecDeque<Vec<InputEvent>>,
}

impl QueuedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a batch that will be returned by one future `poll_events` call.
    pub fn push_batch(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.batches.push_back(events.into_iter().collect());
    }
}

impl InputSource for QueuedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.batches.pop_front().unwrap_or_default()
    }
}
