//! Elapsed-time accumulator.
//!
//! Elapsed time is the number of ticks seen while running multiplied by the
//! tick interval. It is frozen while stopped and zeroed on reset.

use super::automaton::State;
use std::time::Duration;

#[derive(Debug)]
pub struct Clock {
    interval: Duration,
    elapsed: Duration,
}

impl Clock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// React to the automaton entering `state`.
    pub fn on_state(&mut self, state: State) {
        if state == State::Reset {
            self.elapsed = Duration::ZERO;
        }
    }

    /// Advance one interval. Ticks that arrive while not running (e.g. queued
    /// just before the ticker was aborted) are dropped.
    pub fn on_tick(&mut self, state: State) -> bool {
        if state != State::Running {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(self.interval);
        true
    }
}
