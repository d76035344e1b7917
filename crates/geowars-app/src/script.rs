//! Scripted input: a JSON list of events, each tagged with the frame it
//! arrives on.
//!
//! ```json
//! [
//!   { "frame": 0,  "event": { "type": "KeyDown", "key": "D" } },
//!   { "frame": 30, "event": { "type": "MouseDown", "button": "Left", "position": [900.0, 360.0] } },
//!   { "frame": 600, "event": { "type": "KeyDown", "key": "Escape" } }
//! ]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use geowars_core::events::{InputEvent, InputSource};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptedEvent {
    /// Zero-based index of the poll (one per frame) that delivers the event.
    pub frame: u64,
    pub event: InputEvent,
}

/// Plays scripted events back, one poll per frame.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: Vec<ScriptedEvent>,
    cursor: usize,
    frame: u64,
}

impl ScriptedInput {
    /// Events are delivered in frame order; events sharing a frame keep
    /// their listed order.
    pub fn new(mut events: Vec<ScriptedEvent>) -> Self {
        events.sort_by_key(|e| e.frame);
        Self {
            events,
            cursor: 0,
            frame: 0,
        }
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| AppError::ScriptIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| AppError::ScriptParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(text)?))
    }

    /// Events not yet delivered.
    pub fn remaining(&self) -> usize {
        self.events.len() - self.cursor
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let start = self.cursor;
        while self
            .events
            .get(self.cursor)
            .is_some_and(|e| e.frame <= self.frame)
        {
            self.cursor += 1;
        }
        self.frame += 1;
        self.events[start..self.cursor].iter().map(|e| e.event).collect()
    }
}
