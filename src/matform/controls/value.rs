//! Config value types.
//!
//! [`ConfigValue`] is the loosely typed form a value takes at the edges (declaration files, the
//! key-value view of a config). Inside the typed config records values live in plain
//! `Option<T>` fields; [`FromConfigValue`] converts between the two.

use super::spec::{KeySpec, ValueKind};
use crate::attributes::DATE_FORMAT;
use crate::error::{MatformError, Result};
use crate::model::{ButtonStyle, ButtonType, DateView, TextBoxType};
use chrono::NaiveDate;
use serde_json::Value;
use std::fmt;

/// Runtime representation of a config value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Text(String),
    Bool(bool),
    Integer(i64),
    /// Enum value by its description (e.g. "email", "multi-year")
    Enum(String),
    Date(NaiveDate),
}

impl ConfigValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            ConfigValue::Text(_) => ValueKind::Text,
            ConfigValue::Bool(_) => ValueKind::Bool,
            ConfigValue::Integer(_) => ValueKind::Integer,
            ConfigValue::Enum(_) => ValueKind::Enum,
            ConfigValue::Date(_) => ValueKind::Date,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The string inside a Text or Enum value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) | ConfigValue::Enum(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            ConfigValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Coerces a declaration's JSON value into the kind `spec` expects.
    ///
    /// Returns `Ok(None)` for JSON `null`, which declarations use to spell "absent".
    pub fn from_json(spec: &KeySpec, value: &Value) -> Result<Option<ConfigValue>> {
        if value.is_null() {
            return Ok(None);
        }
        let mismatch = || MatformError::TypeMismatch {
            key: spec.name.to_string(),
            expected: spec.kind.label(),
        };
        let converted = match spec.kind {
            ValueKind::Text => match value {
                Value::String(s) => ConfigValue::Text(s.clone()),
                Value::Number(n) => ConfigValue::Text(n.to_string()),
                _ => return Err(mismatch()),
            },
            ValueKind::Bool => ConfigValue::Bool(value.as_bool().ok_or_else(mismatch)?),
            ValueKind::Integer => match value {
                Value::Number(n) => ConfigValue::Integer(n.as_i64().ok_or_else(mismatch)?),
                Value::String(s) => {
                    ConfigValue::Integer(s.trim().parse().map_err(|_| mismatch())?)
                }
                _ => return Err(mismatch()),
            },
            ValueKind::Enum => ConfigValue::Enum(value.as_str().ok_or_else(mismatch)?.to_string()),
            ValueKind::Date => {
                let s = value.as_str().ok_or_else(mismatch)?;
                ConfigValue::Date(
                    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| mismatch())?,
                )
            }
        };
        Ok(Some(converted))
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Text(s) | ConfigValue::Enum(s) => f.write_str(s),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Integer(n) => write!(f, "{}", n),
            ConfigValue::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
        }
    }
}

/// Conversion out of a [`ConfigValue`], used by typed lookups.
///
/// A value of the wrong kind converts to `None`.
pub trait FromConfigValue: Sized {
    fn from_config_value(value: ConfigValue) -> Option<Self>;
}

impl FromConfigValue for ConfigValue {
    fn from_config_value(value: ConfigValue) -> Option<Self> {
        Some(value)
    }
}

impl FromConfigValue for String {
    fn from_config_value(value: ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Text(s) | ConfigValue::Enum(s) => Some(s),
            _ => None,
        }
    }
}

impl FromConfigValue for bool {
    fn from_config_value(value: ConfigValue) -> Option<Self> {
        value.as_bool()
    }
}

impl FromConfigValue for i64 {
    fn from_config_value(value: ConfigValue) -> Option<Self> {
        value.as_integer()
    }
}

impl FromConfigValue for u32 {
    fn from_config_value(value: ConfigValue) -> Option<Self> {
        value.as_integer().and_then(|n| u32::try_from(n).ok())
    }
}

impl FromConfigValue for NaiveDate {
    fn from_config_value(value: ConfigValue) -> Option<Self> {
        value.as_date()
    }
}

impl FromConfigValue for TextBoxType {
    fn from_config_value(value: ConfigValue) -> Option<Self> {
        value.as_str().and_then(|s| s.parse().ok())
    }
}

impl FromConfigValue for DateView {
    fn from_config_value(value: ConfigValue) -> Option<Self> {
        value.as_str().and_then(|s| s.parse().ok())
    }
}

impl FromConfigValue for ButtonType {
    fn from_config_value(value: ConfigValue) -> Option<Self> {
        value.as_str().and_then(|s| s.parse().ok())
    }
}

impl FromConfigValue for ButtonStyle {
    fn from_config_value(value: ConfigValue) -> Option<Self> {
        value.as_str().and_then(|s| s.parse().ok())
    }
}
