//! Configuration handling for form controllers

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Placeholder replaced by the field name in message templates
pub const NAME_PLACEHOLDER: &str = "{name}";

const DEFAULT_INVALID_MESSAGE_TEMPLATE: &str = "{name} invalid";

/// User configuration for form controllers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Message used when a per-field validator fails without its own message
    pub invalid_message_template: String,
    /// Deliver change notifications to subscribed observers
    pub notify_observers: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            invalid_message_template: DEFAULT_INVALID_MESSAGE_TEMPLATE.to_string(),
            notify_observers: true,
        }
    }
}

impl FormConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formbind", "formbind")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FormConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform config directory
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Default failure message for a field
    pub fn invalid_message(&self, field: &str) -> String {
        self.invalid_message_template
            .replace(NAME_PLACEHOLDER, field)
    }
}
