//! Config key specifications and registry.
//!
//! Every key a declaration may use is listed in [`KEYS`], together with the kind of value it
//! holds, the markup attribute it feeds and the controls it applies to.

use crate::error::MatformError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Well-known configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConfigKey {
    Id,
    Name,
    Placeholder,
    Model,
    Required,
    RequiredMessage,
    Disabled,
    IsTextArea,
    MinRows,
    MaxRows,
    IsDatePicker,
    Width,
    StartView,
    TouchUi,
    MinDate,
    MaxDate,
    Type,
    ReadOnly,
    ShowClearButton,
    EmailMessage,
    MinLength,
    MinLengthMessage,
    MaxLength,
    Text,
    Styles,
    Link,
}

impl ConfigKey {
    /// The key as written in declarations.
    pub fn name(&self) -> &'static str {
        key_spec(*self).name
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigKey {
    type Err = MatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KEYS.iter()
            .find(|spec| spec.name == s)
            .map(|spec| spec.key)
            .ok_or_else(|| MatformError::UnknownKey(s.to_string()))
    }
}

/// The kind of value a key holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Text,
    Bool,
    Integer,
    /// Closed set of names, e.g. `Type` or `StartView`
    Enum,
    /// Calendar date, `YYYY-MM-DD`
    Date,
}

impl ValueKind {
    pub fn label(&self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::Bool => "bool",
            ValueKind::Integer => "integer",
            ValueKind::Enum => "enum",
            ValueKind::Date => "date",
        }
    }
}

/// Which controls a key is meaningful for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Applies {
    /// Every text box variant
    FormControl,
    /// Only the multi-line variant
    TextArea,
    /// Only the date picker variant
    DatePicker,
    Button,
    /// Form controls and buttons alike
    Shared,
}

impl Applies {
    pub fn label(&self) -> &'static str {
        match self {
            Applies::FormControl => "form control",
            Applies::TextArea => "text area",
            Applies::DatePicker => "date picker",
            Applies::Button => "button",
            Applies::Shared => "any",
        }
    }

    /// Whether a key marked `self` can be set on a control of kind `control`.
    ///
    /// Text areas and date pickers are form controls, so they take every form-control key on
    /// top of their own.
    pub fn covers(&self, control: Applies) -> bool {
        match (self, control) {
            (Applies::Shared, _) => true,
            (Applies::FormControl, Applies::TextArea | Applies::DatePicker) => true,
            (key, control) => *key == control,
        }
    }
}

/// Specification for a single key.
#[derive(Debug, Clone, Serialize)]
pub struct KeySpec {
    pub key: ConfigKey,

    /// The key name used in declarations (e.g. "MinLength")
    pub name: &'static str,

    pub kind: ValueKind,

    pub applies: Applies,

    /// The markup attribute fed by this key, if any.
    ///
    /// Discriminator flags (`IsTextArea`, `IsDatePicker`) pick the wrapper element instead of
    /// emitting an attribute; `Text` becomes element content.
    pub attribute: Option<&'static str>,
}

impl KeySpec {
    const fn new(key: ConfigKey, name: &'static str, kind: ValueKind, applies: Applies) -> Self {
        Self {
            key,
            name,
            kind,
            applies,
            attribute: None,
        }
    }

    const fn attribute(mut self, attribute: &'static str) -> Self {
        self.attribute = Some(attribute);
        self
    }
}

use Applies as A;
use ConfigKey as K;
use ValueKind as V;

/// Registry of all config keys, in emission order.
///
/// Entries are laid out in `ConfigKey` declaration order so a key indexes its own spec.
pub const KEYS: &[KeySpec] = &[
    // Shared by every form control
    KeySpec::new(K::Id, "Id", V::Text, A::Shared).attribute("#id"),
    KeySpec::new(K::Name, "Name", V::Text, A::FormControl).attribute("name"),
    KeySpec::new(K::Placeholder, "Placeholder", V::Text, A::FormControl).attribute("placeholder"),
    KeySpec::new(K::Model, "Model", V::Text, A::FormControl).attribute("[(model)]"),
    KeySpec::new(K::Required, "Required", V::Bool, A::FormControl).attribute("[required]"),
    KeySpec::new(K::RequiredMessage, "RequiredMessage", V::Text, A::FormControl)
        .attribute("requiredMessage"),
    KeySpec::new(K::Disabled, "Disabled", V::Bool, A::Shared).attribute("[disabled]"),
    // Variant discriminators and variant-specific keys
    KeySpec::new(K::IsTextArea, "IsTextArea", V::Bool, A::FormControl),
    KeySpec::new(K::MinRows, "MinRows", V::Integer, A::TextArea).attribute("[minRows]"),
    KeySpec::new(K::MaxRows, "MaxRows", V::Integer, A::TextArea).attribute("[maxRows]"),
    KeySpec::new(K::IsDatePicker, "IsDatePicker", V::Bool, A::FormControl),
    KeySpec::new(K::Width, "Width", V::Text, A::DatePicker).attribute("[width]"),
    KeySpec::new(K::StartView, "StartView", V::Enum, A::DatePicker).attribute("startView"),
    KeySpec::new(K::TouchUi, "TouchUi", V::Bool, A::DatePicker).attribute("[touchUi]"),
    KeySpec::new(K::MinDate, "MinDate", V::Date, A::DatePicker).attribute("minDate"),
    KeySpec::new(K::MaxDate, "MaxDate", V::Date, A::DatePicker).attribute("maxDate"),
    // Text box
    KeySpec::new(K::Type, "Type", V::Enum, A::Shared).attribute("type"),
    KeySpec::new(K::ReadOnly, "ReadOnly", V::Bool, A::FormControl).attribute("[readonly]"),
    KeySpec::new(K::ShowClearButton, "ShowClearButton", V::Bool, A::FormControl)
        .attribute("[showClearButton]"),
    // Validation
    KeySpec::new(K::EmailMessage, "EmailMessage", V::Text, A::FormControl)
        .attribute("emailMessage"),
    KeySpec::new(K::MinLength, "MinLength", V::Integer, A::FormControl).attribute("[minLength]"),
    KeySpec::new(K::MinLengthMessage, "MinLengthMessage", V::Text, A::FormControl)
        .attribute("minLengthMessage"),
    KeySpec::new(K::MaxLength, "MaxLength", V::Integer, A::FormControl).attribute("[maxLength]"),
    // Buttons
    KeySpec::new(K::Text, "Text", V::Text, A::Button),
    KeySpec::new(K::Styles, "Styles", V::Enum, A::Button),
    KeySpec::new(K::Link, "Link", V::Text, A::Button).attribute("routerLink"),
];

/// Look up the spec for a key.
pub fn key_spec(key: ConfigKey) -> &'static KeySpec {
    &KEYS[key as usize]
}

/// Keys usable on a control of kind `control`, in registry order.
pub fn keys_for(control: Applies) -> impl Iterator<Item = &'static KeySpec> {
    KEYS.iter().filter(move |spec| spec.applies.covers(control))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_is_registered_once() {
        let all = [
            K::Id,
            K::Name,
            K::Placeholder,
            K::Model,
            K::Required,
            K::RequiredMessage,
            K::Disabled,
            K::Type,
            K::ReadOnly,
            K::ShowClearButton,
            K::EmailMessage,
            K::MinLength,
            K::MinLengthMessage,
            K::MaxLength,
            K::IsTextArea,
            K::MinRows,
            K::MaxRows,
            K::IsDatePicker,
            K::Width,
            K::StartView,
            K::TouchUi,
            K::MinDate,
            K::MaxDate,
            K::Text,
            K::Styles,
            K::Link,
        ];
        assert_eq!(all.len(), KEYS.len());
        for key in all {
            assert_eq!(KEYS.iter().filter(|s| s.key == key).count(), 1, "{key:?}");
        }
    }

    #[test]
    fn registry_is_indexed_by_key() {
        for (i, spec) in KEYS.iter().enumerate() {
            assert_eq!(spec.key as usize, i, "{}", spec.name);
        }
    }

    #[test]
    fn parse_key_names() {
        assert_eq!("MinLength".parse::<ConfigKey>().unwrap(), K::MinLength);
        assert_eq!("IsDatePicker".parse::<ConfigKey>().unwrap(), K::IsDatePicker);
    }

    #[test]
    fn key_names_are_case_sensitive() {
        let err = "minlength".parse::<ConfigKey>().unwrap_err();
        assert!(matches!(err, MatformError::UnknownKey(k) if k == "minlength"));
    }

    #[test]
    fn min_rows_spec_is_correct() {
        let spec = key_spec(K::MinRows);
        assert_eq!(spec.name, "MinRows");
        assert_eq!(spec.kind, V::Integer);
        assert_eq!(spec.applies, A::TextArea);
        assert_eq!(spec.attribute, Some("[minRows]"));
    }

    #[test]
    fn discriminators_have_no_attribute() {
        assert_eq!(key_spec(K::IsTextArea).attribute, None);
        assert_eq!(key_spec(K::IsDatePicker).attribute, None);
    }

    #[test]
    fn keys_for_button_include_shared() {
        let names: Vec<_> = keys_for(A::Button).map(|s| s.name).collect();
        assert!(names.contains(&"Text"));
        assert!(names.contains(&"Type"));
        assert!(names.contains(&"Disabled"));
        assert!(!names.contains(&"MinLength"));
    }

    #[test]
    fn keys_for_variants_include_form_control_keys() {
        let names: Vec<_> = keys_for(A::DatePicker).map(|s| s.name).collect();
        assert!(names.contains(&"MinLength"));
        assert!(names.contains(&"Name"));
        assert!(names.contains(&"ReadOnly"));
        assert!(names.contains(&"StartView"));
        assert!(!names.contains(&"MinRows"));
        assert!(!names.contains(&"Text"));

        let names: Vec<_> = keys_for(A::TextArea).map(|s| s.name).collect();
        assert!(names.contains(&"Placeholder"));
        assert!(names.contains(&"MaxRows"));
        assert!(!names.contains(&"MinDate"));
    }

    #[test]
    fn keys_for_plain_form_control_excludes_variant_keys() {
        let names: Vec<_> = keys_for(A::FormControl).map(|s| s.name).collect();
        assert!(names.contains(&"Name"));
        assert!(!names.contains(&"MinRows"));
        assert!(!names.contains(&"Width"));
    }
}
