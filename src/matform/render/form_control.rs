//! Attributes shared by every form control.

use super::attribute_name;
use crate::attributes::AttributeSet;
use crate::controls::{is_reference_name, ConfigKey, FormControlOptions};

/// Appends the common form-control attributes: template reference, name, placeholder, model
/// binding, required state and message, disabled state.
pub(crate) fn add_common(attrs: &mut AttributeSet, control: &FormControlOptions) {
    add_reference(attrs, control.id.as_deref());
    attrs
        .add(attribute_name(ConfigKey::Name), control.name.as_ref())
        .add(attribute_name(ConfigKey::Placeholder), control.placeholder.as_ref())
        .add(attribute_name(ConfigKey::Model), control.model.as_ref())
        .add(attribute_name(ConfigKey::Required), control.required)
        .add(
            attribute_name(ConfigKey::RequiredMessage),
            control.required_message.as_ref(),
        )
        .add(attribute_name(ConfigKey::Disabled), control.disabled);
}

/// Appends the `#<id>` template reference variable when an id is set.
///
/// The id lands in the attribute name, where nothing is escaped, so anything that is not a
/// plain identifier is dropped.
pub(crate) fn add_reference(attrs: &mut AttributeSet, id: Option<&str>) {
    let Some(id) = id.filter(|id| !id.is_empty()) else {
        return;
    };
    if is_reference_name(id) {
        attrs.add_flag(&format!("#{}", id), true);
    } else {
        tracing::warn!(%id, "dropping template reference that is not an identifier");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttrValue;

    #[test]
    fn test_common_order() {
        let control = FormControlOptions {
            id: Some("email".into()),
            name: Some("email".into()),
            placeholder: Some("Email".into()),
            model: Some("user.email".into()),
            required: Some(true),
            required_message: Some("needed".into()),
            disabled: Some(false),
        };
        let mut attrs = AttributeSet::new();
        add_common(&mut attrs, &control);
        let names: Vec<_> = attrs.names().collect();
        assert_eq!(
            names,
            vec![
                "#email",
                "name",
                "placeholder",
                "[(model)]",
                "[required]",
                "requiredMessage",
                "[disabled]"
            ]
        );
        assert_eq!(attrs.get("#email"), Some(&AttrValue::Flag));
        assert_eq!(attrs.get("[disabled]"), Some(&AttrValue::Bool(false)));
    }

    #[test]
    fn test_nothing_set_emits_nothing() {
        let mut attrs = AttributeSet::new();
        add_common(&mut attrs, &FormControlOptions::default());
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_empty_id_is_skipped() {
        let mut attrs = AttributeSet::new();
        add_reference(&mut attrs, Some(""));
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_non_identifier_id_is_dropped() {
        let control = FormControlOptions {
            id: Some("x onfocus=\"alert(1)\" y".into()),
            name: Some("email".into()),
            ..FormControlOptions::default()
        };
        let mut attrs = AttributeSet::new();
        add_common(&mut attrs, &control);
        let names: Vec<_> = attrs.names().collect();
        assert_eq!(names, vec!["name"]);
    }
}
