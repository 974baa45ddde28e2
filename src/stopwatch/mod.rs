//! Pure stopwatch logic: the timing state machine and the elapsed-time and
//! lap derivations that hang off its transitions.
//!
//! Nothing here touches the terminal or the async runtime, so every piece is
//! driven directly from tests.

pub mod automaton;
pub mod buttons;
pub mod clock;
pub mod format;
pub mod laps;

pub use automaton::{Automaton, Input, State, Transition};
pub use buttons::{Button, Tone};
pub use clock::Clock;
pub use format::format_elapsed;
pub use laps::{Lap, LapRecorder};
