//! # Form Declarations
//!
//! The inbound format: a JSON document listing controls by kind, each followed by its
//! properties under their key names.
//!
//! ```json
//! { "controls": [
//!     { "kind": "textbox", "Name": "email", "Type": "email", "EmailMessage": "bad" },
//!     { "kind": "textbox", "IsTextArea": true, "MinRows": 3, "MaxRows": 6 },
//!     { "kind": "button", "Text": "Save", "Type": "submit", "Styles": "raised" } ] }
//! ```
//!
//! Resolving a text box declaration reads the two discriminator flags first and picks the
//! variant under the [`ConflictPolicy`]. Every other property then goes through
//! [`ConfigStore::set`]. Unknown keys and values of the wrong kind are errors; keys that exist
//! but do not apply to the chosen control are skipped with a warning.

use crate::controls::{
    key_spec, select_variant, ButtonConfig, ConfigKey, ConfigStore, ConfigValue, ConflictPolicy,
    ControlConfig, TextBoxConfig, VariantFlags,
};
use crate::error::{MatformError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct FormDeclaration {
    pub controls: Vec<ControlDeclaration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    TextBox,
    Button,
}

/// One declared control: its kind plus raw properties keyed by config key name.
#[derive(Debug, Clone, Deserialize)]
pub struct ControlDeclaration {
    pub kind: ControlKind,
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

/// A control config built from a declaration, with the keys that were skipped.
#[derive(Debug, Clone)]
pub struct ResolvedControl {
    pub config: ControlConfig,
    pub warnings: Vec<String>,
}

impl FormDeclaration {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(MatformError::Io)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(MatformError::Serialization)
    }
}

impl ControlDeclaration {
    pub fn resolve(&self, policy: ConflictPolicy) -> Result<ResolvedControl> {
        let mut warnings = Vec::new();
        let mut config = match self.kind {
            ControlKind::TextBox => {
                let flags = VariantFlags {
                    is_text_area: self.flag(ConfigKey::IsTextArea)?,
                    is_date_picker: self.flag(ConfigKey::IsDatePicker)?,
                };
                let kind = select_variant(flags, policy)?;
                if flags.is_conflicting() {
                    warnings.push(format!(
                        "IsTextArea and IsDatePicker are both set; rendered as a {}",
                        kind.label()
                    ));
                }
                ControlConfig::from(TextBoxConfig::new(kind))
            }
            ControlKind::Button => ControlConfig::from(ButtonConfig::default()),
        };

        for (name, raw) in &self.properties {
            let key: ConfigKey = name.parse()?;
            if self.kind == ControlKind::TextBox && is_discriminator(key) {
                continue;
            }
            let Some(value) = ConfigValue::from_json(key_spec(key), raw)? else {
                continue;
            };
            match config.set(key, value) {
                Ok(()) => {}
                Err(MatformError::NotApplicable { key, control }) => {
                    tracing::warn!(%key, %control, "skipping key that does not apply");
                    warnings.push(format!("{} does not apply to a {}; skipped", key, control));
                }
                Err(e) => return Err(e),
            }
        }

        Ok(ResolvedControl { config, warnings })
    }

    fn flag(&self, key: ConfigKey) -> Result<bool> {
        let value = match self.properties.get(key.name()) {
            Some(raw) => ConfigValue::from_json(key_spec(key), raw)?,
            None => None,
        };
        Ok(value.and_then(|v| v.as_bool()).unwrap_or(false))
    }
}

fn is_discriminator(key: ConfigKey) -> bool {
    matches!(key, ConfigKey::IsTextArea | ConfigKey::IsDatePicker)
}
