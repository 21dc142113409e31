//! Attribute value types.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// Date format used for `minDate` / `maxDate`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Runtime representation of a markup attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Plain text, written quoted and escaped.
    Text(String),

    /// Boolean, written as `"true"` / `"false"` (used by `[readonly]`, `[touchUi]`, ...).
    Bool(bool),

    /// Integer, written in decimal (used by `[minLength]`, `[minRows]`, ...).
    Integer(i64),

    /// Valueless attribute such as `mat-raised-button` or `#email`.
    Flag,
}

impl AttrValue {
    /// Rendered value text, `None` for valueless flags.
    pub fn render(&self) -> Option<String> {
        match self {
            AttrValue::Text(s) => Some(s.clone()),
            AttrValue::Bool(b) => Some(b.to_string()),
            AttrValue::Integer(n) => Some(n.to_string()),
            AttrValue::Flag => None,
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, AttrValue::Flag)
    }

    /// True for text values with nothing in them; those are never emitted.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, AttrValue::Text(s) if s.is_empty())
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Some(s) => f.write_str(&s),
            None => Ok(()),
        }
    }
}

impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttrValue::Text(s) => serializer.serialize_str(s),
            AttrValue::Bool(b) => serializer.serialize_bool(*b),
            AttrValue::Integer(n) => serializer.serialize_i64(*n),
            AttrValue::Flag => serializer.serialize_unit(),
        }
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Text(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Integer(value)
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        AttrValue::Integer(i64::from(value))
    }
}

impl From<NaiveDate> for AttrValue {
    fn from(value: NaiveDate) -> Self {
        AttrValue::Text(value.format(DATE_FORMAT).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_text_bool_integer() {
        assert_eq!(AttrValue::from("abc").render(), Some("abc".to_string()));
        assert_eq!(AttrValue::from(true).render(), Some("true".to_string()));
        assert_eq!(AttrValue::from(5u32).render(), Some("5".to_string()));
    }

    #[test]
    fn flag_has_no_rendered_value() {
        assert_eq!(AttrValue::Flag.render(), None);
        assert!(AttrValue::Flag.is_flag());
        assert_eq!(AttrValue::Flag.to_string(), "");
    }

    #[test]
    fn date_uses_iso_format() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(AttrValue::from(date), AttrValue::Text("2020-01-01".into()));
    }

    #[test]
    fn empty_text_detection() {
        assert!(AttrValue::from("").is_empty_text());
        assert!(!AttrValue::from(" ").is_empty_text());
        assert!(!AttrValue::from(false).is_empty_text());
    }

    #[test]
    fn serializes_as_plain_json_values() {
        assert_eq!(serde_json::to_string(&AttrValue::from(3u32)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&AttrValue::from(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&AttrValue::from("x")).unwrap(), "\"x\"");
    }
}
