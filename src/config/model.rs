//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the stopwatch runs without a config file.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::keys::parse_key;
use super::ConfigError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keys: KeyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clock.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.clock.max_laps == 0 {
            return Err(ConfigError::ZeroMaxLaps);
        }
        for (binding, names) in [
            ("primary", &self.keys.primary),
            ("secondary", &self.keys.secondary),
            ("quit", &self.keys.quit),
        ] {
            for name in names {
                if parse_key(name).is_none() {
                    return Err(ConfigError::UnknownKey {
                        binding,
                        name: name.clone(),
                    });
                }
            }
        }
        let format = &self.ui.wall_clock_format;
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidWallClockFormat(format.clone()));
        }
        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::UnknownLogLevel(self.logging.level.clone()));
        }
        Ok(())
    }
}

/// Timing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Period of the running ticker; each tick adds exactly this much.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_max_laps")]
    pub max_laps: usize,
}

impl ClockConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            max_laps: default_max_laps(),
        }
    }
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Colour the fastest lap green and the slowest red.
    #[serde(default = "default_true")]
    pub highlight_extremes: bool,
    /// Show the lap in progress as the top row of the lap table.
    #[serde(default = "default_true")]
    pub show_current_lap: bool,
    /// Show the wall-clock time the current run started in the status bar.
    #[serde(default = "default_true")]
    pub show_wall_clock: bool,
    #[serde(default = "default_wall_clock_format")]
    pub wall_clock_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            highlight_extremes: true,
            show_current_lap: true,
            show_wall_clock: true,
            wall_clock_format: default_wall_clock_format(),
        }
    }
}

/// Key names bound to each button. See [`super::keys::parse_key`] for the
/// accepted spellings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyConfig {
    #[serde(default = "default_primary_keys")]
    pub primary: Vec<String>,
    #[serde(default = "default_secondary_keys")]
    pub secondary: Vec<String>,
    #[serde(default = "default_quit_keys")]
    pub quit: Vec<String>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            primary: default_primary_keys(),
            secondary: default_secondary_keys(),
            quit: default_quit_keys(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            log_dir: default_log_dir(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_tick_interval_ms() -> u64 {
    10
}
fn default_max_laps() -> usize {
    99
}
fn default_wall_clock_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_primary_keys() -> Vec<String> {
    vec!["space".into(), "enter".into()]
}
fn default_secondary_keys() -> Vec<String> {
    vec!["l".into(), "r".into()]
}
fn default_quit_keys() -> Vec<String> {
    vec!["q".into(), "esc".into()]
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/lapwatch".to_string()
}
