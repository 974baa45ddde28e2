//! Lap recorder.
//!
//! Laps are kept newest first. Each lap is the difference between the
//! elapsed-time sample taken at the lap tap and the previous sample, so the
//! recorded durations always add up to the elapsed time of the latest tap.

use super::automaton::{State, Transition};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lap {
    /// 1-based, in recording order.
    pub number: usize,
    pub label: String,
    pub duration: Duration,
}

#[derive(Debug)]
pub struct LapRecorder {
    laps: Vec<Lap>,
    /// Elapsed-time sample the open lap started at; `None` when no lap
    /// window is open.
    window_start: Option<Duration>,
    max_laps: usize,
    fastest: Option<usize>,
    slowest: Option<usize>,
}

impl LapRecorder {
    pub fn new(max_laps: usize) -> Self {
        Self {
            laps: Vec::new(),
            window_start: None,
            max_laps,
            fastest: None,
            slowest: None,
        }
    }

    /// Newest first.
    pub fn laps(&self) -> &[Lap] {
        &self.laps
    }

    pub fn len(&self) -> usize {
        self.laps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laps.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.laps.len() >= self.max_laps
    }

    /// React to an automaton edge: entering Running opens a window if none is
    /// open, entering Reset drops everything.
    pub fn on_transition(&mut self, transition: &Transition) {
        match transition.to {
            State::Running => {
                if self.window_start.is_none() {
                    self.window_start = Some(self.total());
                }
            }
            State::Reset => self.clear(),
            State::Stopped => {}
        }
    }

    /// Close the open lap at `sample` and prepend it. Returns the new lap, or
    /// `None` when no window is open or the cap is reached.
    pub fn record(&mut self, sample: Duration) -> Option<&Lap> {
        let start = self.window_start?;
        if self.is_full() {
            warn!(max_laps = self.max_laps, "lap limit reached, ignoring lap");
            return None;
        }

        let number = self.laps.len() + 1;
        let lap = Lap {
            number,
            label: format!("Lap {}", number),
            duration: sample.saturating_sub(start),
        };
        debug!(number, duration_ms = lap.duration.as_millis() as u64, "lap recorded");

        // Strict comparisons keep the earlier lap on ties.
        let faster = self
            .lap_by_number(self.fastest)
            .is_none_or(|f| lap.duration < f.duration);
        if faster {
            self.fastest = Some(number);
        }
        let slower = self
            .lap_by_number(self.slowest)
            .is_none_or(|s| lap.duration > s.duration);
        if slower {
            self.slowest = Some(number);
        }

        self.laps.insert(0, lap);
        self.window_start = Some(sample);
        self.laps.first()
    }

    /// Duration of the lap in progress.
    pub fn current_lap(&self, elapsed: Duration) -> Option<Duration> {
        self.window_start.map(|start| elapsed.saturating_sub(start))
    }

    /// Sum of all recorded laps.
    pub fn total(&self) -> Duration {
        self.laps.iter().map(|l| l.duration).sum()
    }

    /// Number of the fastest lap, once there is something to compare.
    pub fn fastest(&self) -> Option<usize> {
        if self.laps.len() < 2 {
            return None;
        }
        self.fastest
    }

    /// Number of the slowest lap, once there is something to compare.
    pub fn slowest(&self) -> Option<usize> {
        if self.laps.len() < 2 {
            return None;
        }
        self.slowest
    }

    pub fn clear(&mut self) {
        self.laps.clear();
        self.window_start = None;
        self.fastest = None;
        self.slowest = None;
    }

    fn lap_by_number(&self, number: Option<usize>) -> Option<&Lap> {
        // laps[0] is the newest, i.e. number == len
        let number = number?;
        self.laps.get(self.laps.len().checked_sub(number)?)
    }
}
