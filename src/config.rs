use serde::{Deserialize, Serialize};

use crate::core::error::Result;

/// Key under which the selection list is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "selectedProperties";

/// Top-level site configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub cart: CartConfig,
    pub logging: LoggingConfig,
}

/// Cart panel configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Storage key for the persisted selection.
    pub storage_key: String,
    /// Toggle button label while the card is not selected.
    pub select_label: String,
    /// Toggle button label while the card is selected.
    pub unselect_label: String,
    /// CSS class added to a toggle button of a selected card.
    pub selected_class: String,
    /// Placeholder shown when nothing is selected.
    pub empty_message: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level: `error`, `warn`, `info`, `debug` or `trace`.
    pub level: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            select_label: "Select".to_string(),
            unselect_label: "Unselect".to_string(),
            selected_class: "selected".to_string(),
            empty_message: "No properties selected yet.".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from optional page-embedded TOML.
    /// Returns `Default` if the source is missing or unparseable.
    pub fn load(source: Option<&str>) -> Self {
        match source.map(str::trim).filter(|s| !s.is_empty()) {
            Some(contents) => match Self::from_toml_str(contents) {
                Ok(config) => {
                    log::info!("Loaded site config");
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse site config: {e}; using defaults");
                    Self::default()
                }
            },
            None => {
                log::debug!("No site config on page; using defaults");
                Self::default()
            }
        }
    }

    /// Parsed log level, falling back to `Info` for unknown names.
    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Info)
    }
}
