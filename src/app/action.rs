use std::time::Duration;

/// Side effects the event loop performs after the state has been updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    StartTicker { period: Duration },
    StopTicker,
    Quit,
}
