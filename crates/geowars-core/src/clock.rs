//! Wall-clock source used for frame pacing outside the simulation.

use std::time::{Duration, Instant};

pub trait Clock {
    /// Time since the previous call (or since construction on the first call).
    fn elapsed_since_last_tick(&mut self) -> Duration;
}

#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    last: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed_since_last_tick(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now - self.last;
        self.last = now;
        elapsed
    }
}
