use crate::app::action::Action;
use crate::config::keys::KeyMap;
use crate::config::AppConfig;
use crate::stopwatch::{Automaton, Button, Clock, Input, LapRecorder, State, Transition};
use chrono::{DateTime, Local};
use ratatui::layout::Rect;
use std::fmt::Write;
use std::time::Duration;
use tracing::info;

#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub keys: KeyMap,
    pub automaton: Automaton,
    pub clock: Clock,
    pub laps: LapRecorder,
    pub lap_scroll_offset: usize,
    /// Wall-clock time the current run left Reset.
    pub started_at: Option<DateTime<Local>>,
    /// Last known terminal area, for mouse hit-testing.
    pub viewport: Rect,
    pub notice: Option<String>,
    pub dirty: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let keys = KeyMap::from_config(&config.keys);
        let clock = Clock::new(config.clock.tick_interval());
        let laps = LapRecorder::new(config.clock.max_laps);
        Self {
            config,
            keys,
            automaton: Automaton::new(),
            clock,
            laps,
            lap_scroll_offset: 0,
            started_at: None,
            viewport: Rect::default(),
            notice: None,
            dirty: true,
            should_quit: false,
        }
    }

    pub fn state(&self) -> State {
        self.automaton.state()
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    /// Lap in progress, if one is open and the state warrants showing it.
    pub fn current_lap(&self) -> Option<Duration> {
        if self.state() == State::Reset {
            return None;
        }
        self.laps.current_lap(self.elapsed())
    }

    /// A tap on one of the two buttons.
    pub fn press(&mut self, button: Button) -> Vec<Action> {
        let Some(input) = button.input_for(self.state()) else {
            return vec![];
        };
        self.dirty = true;
        self.apply(input)
    }

    pub fn apply(&mut self, input: Input) -> Vec<Action> {
        if input == Input::Lap {
            self.lap();
            return vec![];
        }
        match self.automaton.send(input) {
            Some(transition) => self.on_transition(transition),
            None => vec![],
        }
    }

    /// One ticker period elapsed.
    pub fn tick(&mut self) {
        if self.clock.on_tick(self.state()) {
            self.dirty = true;
        }
    }

    pub fn scroll_laps(&mut self, delta: isize) {
        let max = self.laps.len().saturating_sub(1);
        self.lap_scroll_offset = self
            .lap_scroll_offset
            .saturating_add_signed(delta)
            .min(max);
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some(notice) = &self.notice {
            return notice.clone();
        }
        match (self.state(), self.started_at) {
            (State::Reset, _) | (_, None) => "Ready".to_string(),
            (_, Some(at)) if self.config.ui.show_wall_clock => {
                let mut line = String::new();
                // A bad strftime pattern makes the Display impl fail
                let started = at.format(&self.config.ui.wall_clock_format);
                if write!(line, "Started {}", started).is_err() {
                    line = "Started".to_string();
                }
                line
            }
            (State::Running, _) => "Running".to_string(),
            (State::Stopped, _) => "Stopped".to_string(),
        }
    }

    fn lap(&mut self) {
        if self.state() != State::Running {
            return;
        }
        let sample = self.clock.elapsed();
        if self.laps.record(sample).is_some() {
            // Keep the newest lap in view.
            self.lap_scroll_offset = 0;
        } else if self.laps.is_full() {
            self.notice = Some(format!("Lap limit reached ({})", self.config.clock.max_laps));
        }
    }

    fn on_transition(&mut self, transition: Transition) -> Vec<Action> {
        self.clock.on_state(transition.to);
        self.laps.on_transition(&transition);
        info!(from = ?transition.from, to = ?transition.to, "stopwatch {:?}", transition.to);

        let mut actions = Vec::new();
        if transition.from == State::Running {
            actions.push(Action::StopTicker);
        }
        match transition.to {
            State::Running => {
                if transition.from == State::Reset {
                    self.started_at = Some(Local::now());
                }
                actions.push(Action::StartTicker {
                    period: self.clock.interval(),
                });
            }
            State::Reset => {
                self.started_at = None;
                self.lap_scroll_offset = 0;
                self.notice = None;
            }
            State::Stopped => {}
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn ticks(state: &mut AppState, n: usize) {
        for _ in 0..n {
            state.tick();
        }
    }

    #[test]
    fn test_start_emits_ticker() {
        let mut state = AppState::new(AppConfig::default());
        let actions = state.press(Button::Primary);
        assert_eq!(actions, vec![Action::StartTicker { period: ms(10) }]);
        assert_eq!(state.state(), State::Running);
        assert!(state.started_at.is_some());

        let actions = state.press(Button::Primary);
        assert_eq!(actions, vec![Action::StopTicker]);
        assert_eq!(state.state(), State::Stopped);
    }

    #[test]
    fn test_secondary_disabled_in_reset() {
        let mut state = AppState::new(AppConfig::default());
        assert!(state.press(Button::Secondary).is_empty());
        assert_eq!(state.state(), State::Reset);
        assert!(state.laps.is_empty());
    }

    #[test]
    fn test_full_session() {
        let mut state = AppState::new(AppConfig::default());
        state.press(Button::Primary);
        ticks(&mut state, 100);
        state.press(Button::Secondary); // lap 1 at 1s
        ticks(&mut state, 50);
        state.press(Button::Secondary); // lap 2 at 1.5s
        ticks(&mut state, 7);
        assert_eq!(state.elapsed(), ms(1570));
        assert_eq!(state.current_lap(), Some(ms(70)));
        assert_eq!(state.laps.total(), ms(1500));

        state.press(Button::Primary); // stop
        ticks(&mut state, 30); // stale ticks are dropped
        assert_eq!(state.elapsed(), ms(1570));

        state.press(Button::Secondary); // reset
        assert_eq!(state.state(), State::Reset);
        assert_eq!(state.elapsed(), Duration::ZERO);
        assert!(state.laps.is_empty());
        assert_eq!(state.current_lap(), None);
        assert!(state.started_at.is_none());
    }

    #[test]
    fn test_laps_sum_to_elapsed_across_pauses() {
        let mut state = AppState::new(AppConfig::default());
        state.press(Button::Primary);
        ticks(&mut state, 13);
        state.press(Button::Secondary);
        ticks(&mut state, 4);
        state.press(Button::Primary); // stop
        state.press(Button::Primary); // resume
        ticks(&mut state, 21);
        state.press(Button::Secondary);
        assert_eq!(state.laps.total(), state.elapsed());
        assert_eq!(state.laps.laps()[0].duration, ms(250));
    }

    #[test]
    fn test_lap_limit_sets_notice() {
        let mut config = AppConfig::default();
        config.clock.max_laps = 1;
        let mut state = AppState::new(config);
        state.press(Button::Primary);
        state.tick();
        state.press(Button::Secondary);
        state.tick();
        state.press(Button::Secondary);
        assert_eq!(state.laps.len(), 1);
        assert_eq!(state.status_line(), "Lap limit reached (1)");

        state.press(Button::Primary);
        state.press(Button::Secondary);
        assert_eq!(state.notice, None);
    }

    #[test]
    fn test_status_line_shows_start_time() {
        let mut config = AppConfig::default();
        config.ui.wall_clock_format = "%Y".to_string();
        let mut state = AppState::new(config);
        assert_eq!(state.status_line(), "Ready");

        state.press(Button::Primary);
        let year = state.started_at.unwrap().format("%Y").to_string();
        assert_eq!(state.status_line(), format!("Started {}", year));

        state.config.ui.show_wall_clock = false;
        assert_eq!(state.status_line(), "Running");
        state.press(Button::Primary);
        assert_eq!(state.status_line(), "Stopped");
    }

    #[test]
    fn test_status_line_survives_bad_format() {
        let mut state = AppState::new(AppConfig::default());
        state.press(Button::Primary);
        state.config.ui.wall_clock_format = "%Q".to_string();
        assert_eq!(state.status_line(), "Started");
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = AppState::new(AppConfig::default());
        state.scroll_laps(5);
        assert_eq!(state.lap_scroll_offset, 0);

        state.press(Button::Primary);
        for _ in 0..3 {
            state.tick();
            state.press(Button::Secondary);
        }
        state.scroll_laps(10);
        assert_eq!(state.lap_scroll_offset, 2);
        state.scroll_laps(-1);
        assert_eq!(state.lap_scroll_offset, 1);
        state.scroll_laps(-5);
        assert_eq!(state.lap_scroll_offset, 0);
    }
}
