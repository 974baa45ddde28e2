//! Periodic tick source. The task only exists while the stopwatch runs.

use crate::app::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::debug;

pub struct Ticker {
    tx: mpsc::UnboundedSender<AppEvent>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn new(tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { tx, handle: None }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Spawn the tick task. The first tick fires one full period from now.
    /// Any previous task is replaced.
    pub fn start(&mut self, period: Duration) {
        self.stop();
        debug!(period_ms = period.as_millis() as u64, "ticker started");
        let tx = self.tx.clone();
        self.handle = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("ticker stopped");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
