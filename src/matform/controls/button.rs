use super::spec::ConfigKey;
use super::value::ConfigValue;
use super::{expect_bool, expect_enum, expect_reference, expect_text, ConfigStore};
use crate::error::{MatformError, Result};
use crate::model::{ButtonStyle, ButtonType};

/// Configuration of a Material button or router-link anchor.
///
/// The chaining helpers mirror how buttons are usually declared:
///
/// ```
/// use matform::controls::ButtonConfig;
/// use matform::model::ButtonStyle;
///
/// let save = ButtonConfig::new("Save").submit().style(ButtonStyle::Raised);
/// let back = ButtonConfig::new("Back").link("/home");
/// assert!(back.is_anchor());
/// assert!(!save.is_anchor());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonConfig {
    pub id: Option<String>,
    pub text: Option<String>,
    pub button_type: Option<ButtonType>,
    pub style: Option<ButtonStyle>,
    /// Router link; turns the button into an anchor
    pub link: Option<String>,
    pub disabled: Option<bool>,
}

impl ButtonConfig {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Makes this a form reset button.
    pub fn reset(mut self) -> Self {
        self.button_type = Some(ButtonType::Reset);
        self
    }

    /// Makes this a form submit button.
    pub fn submit(mut self) -> Self {
        self.button_type = Some(ButtonType::Submit);
        self
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the router link address.
    pub fn link(mut self, router_link: impl Into<String>) -> Self {
        self.link = Some(router_link.into());
        self
    }

    pub fn is_anchor(&self) -> bool {
        self.link.as_deref().is_some_and(|l| !l.is_empty())
    }
}

impl ConfigStore for ButtonConfig {
    fn get(&self, key: ConfigKey) -> Option<ConfigValue> {
        match key {
            ConfigKey::Id => self.id.clone().map(ConfigValue::Text),
            ConfigKey::Text => self.text.clone().map(ConfigValue::Text),
            ConfigKey::Type => self
                .button_type
                .map(|t| ConfigValue::Enum(t.description().to_string())),
            ConfigKey::Styles => self
                .style
                .map(|s| ConfigValue::Enum(s.description().to_string())),
            ConfigKey::Link => self.link.clone().map(ConfigValue::Text),
            ConfigKey::Disabled => self.disabled.map(ConfigValue::Bool),
            _ => None,
        }
    }

    fn set(&mut self, key: ConfigKey, value: ConfigValue) -> Result<()> {
        match key {
            ConfigKey::Id => self.id = Some(expect_reference(key, value)?),
            ConfigKey::Text => self.text = Some(expect_text(key, value)?),
            ConfigKey::Type => self.button_type = Some(expect_enum(key, value, "button type")?),
            ConfigKey::Styles => self.style = Some(expect_enum(key, value, "button style")?),
            ConfigKey::Link => self.link = Some(expect_text(key, value)?),
            ConfigKey::Disabled => self.disabled = Some(expect_bool(key, value)?),
            _ => {
                return Err(MatformError::NotApplicable {
                    key: key.name().to_string(),
                    control: "button".to_string(),
                })
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_and_reset() {
        assert_eq!(
            ButtonConfig::new("Go").submit().button_type,
            Some(ButtonType::Submit)
        );
        assert_eq!(
            ButtonConfig::new("Clear").reset().button_type,
            Some(ButtonType::Reset)
        );
    }

    #[test]
    fn test_last_helper_wins() {
        let config = ButtonConfig::new("x").submit().reset();
        assert_eq!(config.button_type, Some(ButtonType::Reset));
    }

    #[test]
    fn test_style_and_link() {
        let config = ButtonConfig::new("Home")
            .style(ButtonStyle::Stroked)
            .link("/home");
        assert_eq!(config.style, Some(ButtonStyle::Stroked));
        assert!(config.is_anchor());
        assert_eq!(
            config.get(ConfigKey::Link),
            Some(ConfigValue::Text("/home".into()))
        );
    }

    #[test]
    fn test_empty_link_is_not_an_anchor() {
        assert!(!ButtonConfig::new("x").link("").is_anchor());
    }

    #[test]
    fn test_set_through_store() {
        let mut config = ButtonConfig::default();
        config
            .set(ConfigKey::Styles, ConfigValue::Enum("mini-fab".into()))
            .unwrap();
        config
            .set(ConfigKey::Type, ConfigValue::Enum("submit".into()))
            .unwrap();
        assert_eq!(config.style, Some(ButtonStyle::MiniFab));
        assert_eq!(
            config.get_typed::<ButtonType>(ConfigKey::Type),
            Some(ButtonType::Submit)
        );
    }

    #[test]
    fn test_textbox_keys_not_applicable() {
        let mut config = ButtonConfig::default();
        let err = config
            .set(ConfigKey::MinLength, ConfigValue::Integer(2))
            .unwrap_err();
        assert!(matches!(err, MatformError::NotApplicable { control, .. } if control == "button"));
    }

    #[test]
    fn test_invalid_style() {
        let mut config = ButtonConfig::default();
        let result = config.set(ConfigKey::Styles, ConfigValue::Enum("glossy".into()));
        assert!(matches!(result, Err(MatformError::TypeMismatch { .. })));
    }
}
