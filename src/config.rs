//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and `SALON_DESK_*` environment overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub schedule: ScheduleConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the day's appointments come from
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Path to a `.json` or `.csv` schedule file
    pub source: Option<String>,

    /// Only show appointments starting today
    #[serde(default = "default_today_only")]
    pub today_only: bool,
}

fn default_today_only() -> bool {
    true
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            source: None,
            today_only: default_today_only(),
        }
    }
}

/// How views are shown
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Fixed UTC offset for start times; the host's local zone when unset
    pub utc_offset_minutes: Option<i32>,

    #[serde(default = "default_display_format")]
    pub format: String,
}

fn default_display_format() -> String {
    "text".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: None,
            format: default_display_format(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("salon-desk").join("config.toml")),
            Some(PathBuf::from("/etc/salon-desk/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a variable lookup
    fn apply_overrides<F: Fn(&str) -> Option<String>>(&mut self, var: F) {
        // Schedule overrides
        if let Some(source) = var("SALON_DESK_SCHEDULE") {
            self.schedule.source = Some(source);
        }
        if let Some(today_only) = var("SALON_DESK_TODAY_ONLY") {
            if let Ok(b) = today_only.parse() {
                self.schedule.today_only = b;
            }
        }

        // Display overrides
        if let Some(offset) = var("SALON_DESK_UTC_OFFSET_MINUTES") {
            if let Ok(m) = offset.parse() {
                self.display.utc_offset_minutes = Some(m);
            }
        }
        if let Some(format) = var("SALON_DESK_FORMAT") {
            self.display.format = format;
        }

        // Logging overrides
        if let Some(level) = var("SALON_DESK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("SALON_DESK_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Salon Desk Configuration
#
# Environment variables override these settings:
# - SALON_DESK_SCHEDULE
# - SALON_DESK_TODAY_ONLY
# - SALON_DESK_UTC_OFFSET_MINUTES
# - SALON_DESK_FORMAT
# - SALON_DESK_LOG_LEVEL
# - SALON_DESK_LOG_FORMAT

[schedule]
# Schedule file (.json or .csv)
# source = "~/salon/today.csv"

# Only show appointments starting today
today_only = true

[display]
# Fixed UTC offset for start times, in minutes (default: local time)
# utc_offset_minutes = 60

# View output format (text, html)
format = "text"

[logging]
# Log level (trace, debug, info, warn, error)
level = "info"

# Log format (pretty, json)
format = "pretty"
"#
    .to_string()
}
