//! Tally configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tally_app::WidgetConfig;
use tally_core::counter::{ParsePolicy, COUNTER_SLOT};

/// Top-level Tally configuration (tally.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TallyConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub counter: CounterConfig,
}

/// Storage backend configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Store file path (relative to the working directory)
    #[serde(default = "default_store_path")]
    pub path: String,
}

fn default_store_path() -> String {
    "tally_store.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

/// Counter widget configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct CounterConfig {
    /// Slot the count persists under
    #[serde(default = "default_slot")]
    pub slot: String,
    /// Display element name
    #[serde(default = "default_display")]
    pub display: String,
    /// Trigger element name
    #[serde(default = "default_trigger")]
    pub trigger: String,
    /// Reject unparseable persisted text instead of resetting to zero
    #[serde(default)]
    pub strict: bool,
}

fn default_slot() -> String {
    COUNTER_SLOT.to_string()
}

fn default_display() -> String {
    "count-heading".to_string()
}

fn default_trigger() -> String {
    "count-button".to_string()
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            slot: default_slot(),
            display: default_display(),
            trigger: default_trigger(),
            strict: false,
        }
    }
}

impl TallyConfig {
    /// Load configuration, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: TallyConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Widget configuration derived from the file settings.
    pub fn widget_config(&self) -> WidgetConfig {
        WidgetConfig {
            slot: self.counter.slot.clone(),
            display: self.counter.display.clone(),
            trigger: self.counter.trigger.clone(),
            policy: if self.counter.strict {
                ParsePolicy::Strict
            } else {
                ParsePolicy::ResetToZero
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TallyConfig::default();
        assert_eq!(config.storage.path, "tally_store.json");
        assert_eq!(config.counter.slot, "counter");
        assert!(!config.counter.strict);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: TallyConfig = toml::from_str(
            r#"
            [counter]
            strict = true
            "#,
        )
        .unwrap();
        assert!(config.counter.strict);
        assert_eq!(config.counter.slot, "counter");
        assert_eq!(config.storage.path, "tally_store.json");
    }

    #[test]
    fn test_widget_config_maps_policy() {
        let mut config = TallyConfig::default();
        assert_eq!(config.widget_config().policy, ParsePolicy::ResetToZero);
        config.counter.strict = true;
        assert_eq!(config.widget_config().policy, ParsePolicy::Strict);
    }
}
