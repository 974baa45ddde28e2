pub mod keys;
pub mod model;

use anyhow::{Context, Result};
use std::path::PathBuf;

pub use model::AppConfig;

/// Semantic problems in an otherwise well-formed config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("clock.tick_interval_ms must be greater than zero")]
    ZeroTickInterval,
    #[error("clock.max_laps must be greater than zero")]
    ZeroMaxLaps,
    #[error("unknown key name {name:?} in [keys].{binding}")]
    UnknownKey { binding: &'static str, name: String },
    #[error("invalid ui.wall_clock_format {0:?}")]
    InvalidWallClockFormat(String),
    #[error("unknown log level {0:?} (expected trace, debug, info, warn or error)")]
    UnknownLogLevel(String),
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lapwatch")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config = parse_config(&contents)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig =
        toml::from_str(contents).with_context(|| "Failed to parse config file")?;
    config.validate()?;
    Ok(config)
}

pub fn save_config(config: &AppConfig) -> Result<PathBuf> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.clock.tick_interval_ms, 10);
        assert_eq!(config.clock.max_laps, 99);
        assert!(config.ui.highlight_extremes);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn test_partial_section() {
        let config = parse_config("[clock]\ntick_interval_ms = 50\n").unwrap();
        assert_eq!(config.clock.tick_interval_ms, 50);
        assert_eq!(config.clock.max_laps, 99);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let err = parse_config("[clock]\ntick_interval_ms = 0\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::ZeroTickInterval)
        ));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = parse_config("[keys]\nprimary = [\"hyper\"]\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::UnknownKey { binding: "primary", .. })
        ));
    }

    #[test]
    fn test_bad_wall_clock_format_rejected() {
        let err = parse_config("[ui]\nwall_clock_format = \"%Q\"\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::InvalidWallClockFormat(f)) if f == "%Q"
        ));

        let config = parse_config("[ui]\nwall_clock_format = \"%H:%M\"\n").unwrap();
        assert_eq!(config.ui.wall_clock_format, "%H:%M");
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let err = parse_config("[logging]\nlevel = \"loud\"\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::UnknownLogLevel(_))
        ));
    }

    #[test]
    fn test_defaults_survive_toml_round_trip() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let config = parse_config(&text).unwrap();
        assert_eq!(config.keys.primary, AppConfig::default().keys.primary);
    }
}
