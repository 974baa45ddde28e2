//! The two on-screen buttons and what a tap on each means in a given state.

use super::automaton::{Input, State};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Start / Stop
    Primary,
    /// Lap / Reset
    Secondary,
}

/// Colour family a button is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Go,
    Halt,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonFace {
    pub label: &'static str,
    pub enabled: bool,
    pub tone: Tone,
}

impl Button {
    /// Translate a tap into an automaton input based on the current state.
    /// A tap on a disabled button yields nothing.
    pub fn input_for(self, state: State) -> Option<Input> {
        match (self, state) {
            (Button::Primary, State::Reset | State::Stopped) => Some(Input::Start),
            (Button::Primary, State::Running) => Some(Input::Stop),
            (Button::Secondary, State::Running) => Some(Input::Lap),
            (Button::Secondary, State::Stopped) => Some(Input::Reset),
            (Button::Secondary, State::Reset) => None,
        }
    }

    pub fn face(self, state: State) -> ButtonFace {
        match (self, state) {
            (Button::Primary, State::Running) => ButtonFace {
                label: "Stop",
                enabled: true,
                tone: Tone::Halt,
            },
            (Button::Primary, _) => ButtonFace {
                label: "Start",
                enabled: true,
                tone: Tone::Go,
            },
            (Button::Secondary, State::Stopped) => ButtonFace {
                label: "Reset",
                enabled: true,
                tone: Tone::Neutral,
            },
            (Button::Secondary, state) => ButtonFace {
                label: "Lap",
                enabled: state == State::Running,
                tone: Tone::Neutral,
            },
        }
    }
}
