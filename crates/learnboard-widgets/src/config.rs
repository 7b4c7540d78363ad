//! TOML configuration for the dashboard widgets.

use learnboard_core::Theme;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a dashboard configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document failed to parse.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field held a value outside its valid range.
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// Theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Light palette
    #[default]
    Light,
    /// Dark palette
    Dark,
}

impl ThemeChoice {
    /// Resolve the choice to a concrete theme.
    #[must_use]
    pub fn theme(self) -> Theme {
        match self {
            Self::Light => Theme::light(),
            Self::Dark => Theme::dark(),
        }
    }
}

/// Performance monitor panel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Whether the panel starts visible
    pub enabled: bool,
    /// Simulation tick interval in milliseconds
    pub tick_interval_ms: u32,
    /// Random seed; omit for the library default
    pub seed: Option<u64>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tick_interval_ms: 1000,
            seed: None,
        }
    }
}

/// Notification stack configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Maximum queue depth; omit for unbounded
    pub max_depth: Option<usize>,
    /// Default display duration in milliseconds applied by the host;
    /// omit for sticky notifications
    pub default_duration_ms: Option<u32>,
}

/// Top-level dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Theme selection
    pub theme: ThemeChoice,
    /// Monitor panel settings
    pub monitor: MonitorConfig,
    /// Notification stack settings
    pub notifications: NotificationConfig,
}

impl DashboardConfig {
    /// Parse a configuration from a TOML document and validate it.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.monitor.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "monitor.tick_interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.notifications.max_depth == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "notifications.max_depth",
                reason: "must be at least 1 when set".to_string(),
            });
        }
        Ok(())
    }
}
