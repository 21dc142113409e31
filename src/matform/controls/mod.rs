//! # Controls
//!
//! Typed configuration records for every control matform renders.
//!
//! A control is configured through a plain struct with one `Option` field per property
//! ([`TextBoxConfig`], [`ButtonConfig`]). The text box variant is a tagged enum chosen once,
//! when the config is built ([`select_variant`]); variant-only options live inside the variant
//! so a plain text box simply has no place to store `MinRows`.
//!
//! ## The Key-Value View
//!
//! Declarations address properties by name (`"MinLength"`, `"IsDatePicker"`). The
//! [`ConfigStore`] trait is that view over the typed record:
//!
//! - `get(key)`: the value, if present
//! - `get_typed::<T>(key)`: the value converted to `T`, `None` if absent or of another kind
//! - `get_bool(key)`: absent reads as `false`
//! - `set(key, value)`: checks the value kind and whether the key applies to this control
//!
//! Keys themselves are described by the registry in [`spec`].

use crate::error::{MatformError, Result};
use chrono::NaiveDate;
use std::str::FromStr;

mod button;
pub mod spec;
mod textbox;
mod value;
pub mod variant;

pub use button::ButtonConfig;
pub use spec::{key_spec, keys_for, Applies, ConfigKey, KeySpec, ValueKind, KEYS};
pub use textbox::{
    DatePickerOptions, FormControlOptions, TextAreaOptions, TextBoxConfig, TextBoxVariant,
};
pub use value::{ConfigValue, FromConfigValue};
pub use variant::{select_variant, ConflictPolicy, VariantFlags, VariantKind};

/// Key-value access to a control configuration.
pub trait ConfigStore {
    fn get(&self, key: ConfigKey) -> Option<ConfigValue>;

    fn set(&mut self, key: ConfigKey, value: ConfigValue) -> Result<()>;

    fn get_typed<T: FromConfigValue>(&self, key: ConfigKey) -> Option<T>
    where
        Self: Sized,
    {
        let value = self.get(key)?;
        let kind = value.kind();
        let typed = T::from_config_value(value);
        if typed.is_none() {
            tracing::debug!(key = %key, kind = kind.label(), "typed lookup did not match value kind");
        }
        typed
    }

    fn get_bool(&self, key: ConfigKey) -> bool
    where
        Self: Sized,
    {
        self.get_typed::<bool>(key).unwrap_or(false)
    }
}

fn mismatch(key: ConfigKey, expected: &'static str) -> MatformError {
    MatformError::TypeMismatch {
        key: key.name().to_string(),
        expected,
    }
}

pub(crate) fn expect_text(key: ConfigKey, value: ConfigValue) -> Result<String> {
    match value {
        ConfigValue::Text(s) => Ok(s),
        _ => Err(mismatch(key, ValueKind::Text.label())),
    }
}

/// Whether `id` can be used as a `#<id>` template reference: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_reference_name(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Text for the `Id` key. Empty text is kept and later treated as absent.
pub(crate) fn expect_reference(key: ConfigKey, value: ConfigValue) -> Result<String> {
    let id = expect_text(key, value)?;
    if id.is_empty() || is_reference_name(&id) {
        Ok(id)
    } else {
        Err(mismatch(key, "identifier ([A-Za-z_][A-Za-z0-9_]*)"))
    }
}

pub(crate) fn expect_bool(key: ConfigKey, value: ConfigValue) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| mismatch(key, ValueKind::Bool.label()))
}

/// Integer values feeding lengths and row counts; negatives are rejected.
pub(crate) fn expect_u32(key: ConfigKey, value: ConfigValue) -> Result<u32> {
    value
        .as_integer()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| mismatch(key, "non-negative integer"))
}

pub(crate) fn expect_enum<T: FromStr>(
    key: ConfigKey,
    value: ConfigValue,
    expected: &'static str,
) -> Result<T> {
    match value {
        ConfigValue::Enum(s) | ConfigValue::Text(s) => {
            s.parse().map_err(|_| mismatch(key, expected))
        }
        _ => Err(mismatch(key, expected)),
    }
}

pub(crate) fn expect_date(key: ConfigKey, value: ConfigValue) -> Result<NaiveDate> {
    value
        .as_date()
        .ok_or_else(|| mismatch(key, ValueKind::Date.label()))
}

/// Any renderable control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlConfig {
    TextBox(TextBoxConfig),
    Button(ButtonConfig),
}

impl ControlConfig {
    /// Human label of the control, e.g. "date picker" or "button".
    pub fn label(&self) -> &'static str {
        match self {
            ControlConfig::TextBox(config) => config.variant.kind().label(),
            ControlConfig::Button(_) => "button",
        }
    }
}

impl From<TextBoxConfig> for ControlConfig {
    fn from(config: TextBoxConfig) -> Self {
        ControlConfig::TextBox(config)
    }
}

impl From<ButtonConfig> for ControlConfig {
    fn from(config: ButtonConfig) -> Self {
        ControlConfig::Button(config)
    }
}

impl ConfigStore for ControlConfig {
    fn get(&self, key: ConfigKey) -> Option<ConfigValue> {
        match self {
            ControlConfig::TextBox(config) => config.get(key),
            ControlConfig::Button(config) => config.get(key),
        }
    }

    fn set(&mut self, key: ConfigKey, value: ConfigValue) -> Result<()> {
        match self {
            ControlConfig::TextBox(config) => config.set(key, value),
            ControlConfig::Button(config) => config.set(key, value),
        }
    }
}
