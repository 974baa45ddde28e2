//! Timing state machine.
//!
//! The whole behavior lives in [`next_state`]:
//!
//! ```text
//!  Input  | from state        => to state
//!  -------+---------------------------------
//!  Start  | Reset | Stopped   => Running
//!  Stop   | Running           => Stopped
//!  Reset  | Stopped           => Reset
//! ```
//!
//! Anything not in the table is dropped without changing state.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Reset,
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    Start,
    Stop,
    /// Feeds the lap recorder; never moves the automaton.
    Lap,
    Reset,
}

/// An accepted input and the edge it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: State,
    pub to: State,
    pub input: Input,
}

pub fn next_state(state: State, input: Input) -> Option<State> {
    match (input, state) {
        (Input::Start, State::Reset | State::Stopped) => Some(State::Running),
        (Input::Stop, State::Running) => Some(State::Stopped),
        (Input::Reset, State::Stopped) => Some(State::Reset),
        _ => None,
    }
}

#[derive(Debug)]
pub struct Automaton {
    state: State,
}

impl Automaton {
    pub fn new() -> Self {
        Self {
            state: State::Reset,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Feed one input. Returns the transition when the input is valid for the
    /// current state, `None` when it was ignored.
    pub fn send(&mut self, input: Input) -> Option<Transition> {
        let Some(to) = next_state(self.state, input) else {
            debug!(state = ?self.state, ?input, "input ignored");
            return None;
        };
        let transition = Transition {
            from: self.state,
            to,
            input,
        };
        self.state = to;
        debug!(from = ?transition.from, to = ?transition.to, ?input, "transition");
        Some(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATES: [State; 3] = [State::Reset, State::Running, State::Stopped];
    const INPUTS: [Input; 4] = [Input::Start, Input::Stop, Input::Lap, Input::Reset];

    #[test]
    fn test_starts_in_reset() {
        assert_eq!(Automaton::new().state(), State::Reset);
    }

    #[test]
    fn test_transition_table() {
        assert_eq!(next_state(State::Reset, Input::Start), Some(State::Running));
        assert_eq!(next_state(State::Stopped, Input::Start), Some(State::Running));
        assert_eq!(next_state(State::Running, Input::Stop), Some(State::Stopped));
        assert_eq!(next_state(State::Stopped, Input::Reset), Some(State::Reset));

        assert_eq!(next_state(State::Running, Input::Start), None);
        assert_eq!(next_state(State::Reset, Input::Stop), None);
        assert_eq!(next_state(State::Stopped, Input::Stop), None);
        assert_eq!(next_state(State::Reset, Input::Reset), None);
        assert_eq!(next_state(State::Running, Input::Reset), None);
        for state in STATES {
            assert_eq!(next_state(state, Input::Lap), None);
        }
    }

    #[test]
    fn test_invalid_input_is_noop() {
        let mut automaton = Automaton::new();
        assert_eq!(automaton.send(Input::Stop), None);
        assert_eq!(automaton.send(Input::Reset), None);
        assert_eq!(automaton.send(Input::Lap), None);
        assert_eq!(automaton.state(), State::Reset);
    }

    #[test]
    fn test_send_reports_edge() {
        let mut automaton = Automaton::new();
        let t = automaton.send(Input::Start).unwrap();
        assert_eq!(t.from, State::Reset);
        assert_eq!(t.to, State::Running);
        assert_eq!(t.input, Input::Start);

        let t = automaton.send(Input::Stop).unwrap();
        assert_eq!((t.from, t.to), (State::Running, State::Stopped));

        let t = automaton.send(Input::Reset).unwrap();
        assert_eq!((t.from, t.to), (State::Stopped, State::Reset));
    }

    fn reference(state: State, input: Input) -> State {
        if input == Input::Start && state != State::Running {
            return State::Running;
        }
        if input == Input::Stop && state == State::Running {
            return State::Stopped;
        }
        if input == Input::Reset && state == State::Stopped {
            return State::Reset;
        }
        state
    }

    /// Every input sequence up to length 6 lands where the hand-written
    /// reference says it should.
    #[test]
    fn test_all_short_sequences_follow_table() {
        let mut sequences: Vec<Vec<Input>> = vec![vec![]];
        for _ in 0..6 {
            let mut next = Vec::new();
            for seq in &sequences {
                for input in INPUTS {
                    let mut s = seq.clone();
                    s.push(input);
                    next.push(s);
                }
            }
            for seq in &next {
                let mut automaton = Automaton::new();
                let mut expected = State::Reset;
                for &input in seq {
                    let before = expected;
                    expected = reference(expected, input);
                    let accepted = automaton.send(input);
                    if expected == before {
                        assert!(accepted.is_none());
                    } else {
                        assert_eq!(accepted.map(|t| t.to), Some(expected));
                    }
                }
                assert_eq!(automaton.state(), expected, "sequence {:?}", seq);
            }
            sequences = next;
        }
    }
}
