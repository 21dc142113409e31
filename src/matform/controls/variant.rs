//! Text box variant selection.
//!
//! Declarations describe the variant with two independent flags, `IsTextArea` and
//! `IsDatePicker`. They are turned into a [`VariantKind`] exactly once, when a config is built;
//! from then on the variant is a tagged enum and a control cannot be two things at once.
//!
//! Both flags set is resolved by [`ConflictPolicy`]:
//! - `Precedence` (default): the text area wins, as it always has, and a warning is logged
//! - `Reject`: the declaration is refused with [`MatformError::ConflictingVariant`]

use crate::error::{MatformError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How to resolve a declaration that sets both discriminator flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    #[default]
    Precedence,
    Reject,
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictPolicy::Precedence => f.write_str("precedence"),
            ConflictPolicy::Reject => f.write_str("reject"),
        }
    }
}

impl FromStr for ConflictPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "precedence" => Ok(ConflictPolicy::Precedence),
            "reject" => Ok(ConflictPolicy::Reject),
            other => Err(format!(
                "Invalid conflict policy: {} (expected precedence or reject)",
                other
            )),
        }
    }
}

/// The three mutually exclusive text box variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariantKind {
    TextBox,
    TextArea,
    DatePicker,
}

impl VariantKind {
    pub fn label(&self) -> &'static str {
        match self {
            VariantKind::TextBox => "text box",
            VariantKind::TextArea => "text area",
            VariantKind::DatePicker => "date picker",
        }
    }
}

/// The raw discriminator flags as declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VariantFlags {
    pub is_text_area: bool,
    pub is_date_picker: bool,
}

impl VariantFlags {
    pub fn is_conflicting(&self) -> bool {
        self.is_text_area && self.is_date_picker
    }
}

/// Picks the variant: text area if flagged, else date picker if flagged, else plain text box.
pub fn select_variant(flags: VariantFlags, policy: ConflictPolicy) -> Result<VariantKind> {
    if flags.is_conflicting() {
        match policy {
            ConflictPolicy::Reject => return Err(MatformError::ConflictingVariant),
            ConflictPolicy::Precedence => {
                tracing::warn!("both IsTextArea and IsDatePicker are set; rendering a text area");
            }
        }
    }

    if flags.is_text_area {
        return Ok(VariantKind::TextArea);
    }
    if flags.is_date_picker {
        return Ok(VariantKind::DatePicker);
    }
    Ok(VariantKind::TextBox)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(is_text_area: bool, is_date_picker: bool) -> VariantFlags {
        VariantFlags {
            is_text_area,
            is_date_picker,
        }
    }

    #[test]
    fn test_no_flags_is_text_box() {
        let kind = select_variant(flags(false, false), ConflictPolicy::Precedence).unwrap();
        assert_eq!(kind, VariantKind::TextBox);
    }

    #[test]
    fn test_text_area_flag() {
        let kind = select_variant(flags(true, false), ConflictPolicy::Reject).unwrap();
        assert_eq!(kind, VariantKind::TextArea);
    }

    #[test]
    fn test_date_picker_flag() {
        let kind = select_variant(flags(false, true), ConflictPolicy::Reject).unwrap();
        assert_eq!(kind, VariantKind::DatePicker);
    }

    #[test]
    fn test_conflict_precedence_prefers_text_area() {
        let kind = select_variant(flags(true, true), ConflictPolicy::Precedence).unwrap();
        assert_eq!(kind, VariantKind::TextArea);
    }

    #[test]
    fn test_conflict_reject() {
        let result = select_variant(flags(true, true), ConflictPolicy::Reject);
        assert!(matches!(result, Err(MatformError::ConflictingVariant)));
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!(
            "Reject".parse::<ConflictPolicy>().unwrap(),
            ConflictPolicy::Reject
        );
        assert_eq!(ConflictPolicy::default(), ConflictPolicy::Precedence);
        assert!("strict".parse::<ConflictPolicy>().is_err());
    }
}
