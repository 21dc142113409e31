//! # Settings
//!
//! Persistent settings live in `config.json` inside the scope directory: `.matform/` in the
//! working directory for the project scope, the platform data directory for the global scope.
//! A missing file means defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `conflict-policy` | `precedence` | What to do when a text box is both a text area and a date picker |
//! | `attribute-per-line` | `false` | Write one attribute per line in rendered markup |

use crate::controls::ConflictPolicy;
use crate::error::{MatformError, Result};
use crate::render::MarkupLayout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_CONFLICT_POLICY: &str = "conflict-policy";
pub const KEY_ATTRIBUTE_PER_LINE: &str = "attribute-per-line";

/// Every settable key, in display order.
pub const CONFIG_KEYS: &[&str] = &[KEY_CONFLICT_POLICY, KEY_ATTRIBUTE_PER_LINE];

/// Configuration for matform, stored in .matform/config.json
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatformConfig {
    #[serde(default)]
    pub conflict_policy: ConflictPolicy,

    #[serde(default)]
    pub attribute_per_line: bool,
}

impl MatformConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MatformError::Io)?;
        let config: MatformConfig =
            serde_json::from_str(&content).map_err(MatformError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MatformError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MatformError::Serialization)?;
        fs::write(config_path, content).map_err(MatformError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_CONFLICT_POLICY => Some(self.conflict_policy.to_string()),
            KEY_ATTRIBUTE_PER_LINE => Some(self.attribute_per_line.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            KEY_CONFLICT_POLICY => {
                self.conflict_policy = value.parse()?;
            }
            KEY_ATTRIBUTE_PER_LINE => {
                self.attribute_per_line = parse_bool(value)
                    .ok_or_else(|| format!("Invalid boolean for {}: {}", key, value))?;
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// `(key, value)` pairs for display.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }

    pub fn layout(&self) -> MarkupLayout {
        if self.attribute_per_line {
            MarkupLayout::AttributePerLine
        } else {
            MarkupLayout::Inline
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
