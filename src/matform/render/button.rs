use super::form_control::add_reference;
use super::{attribute_name, Render, TagBuilder};
use crate::controls::{ButtonConfig, ConfigKey};

pub const BUTTON_ELEMENT: &str = "button";
pub const LINK_ELEMENT: &str = "a";

/// Render pipeline for buttons. A button with a router link renders as an anchor.
pub struct ButtonRender<'a> {
    config: &'a ButtonConfig,
}

impl<'a> ButtonRender<'a> {
    pub fn new(config: &'a ButtonConfig) -> Self {
        Self { config }
    }
}

impl Render for ButtonRender<'_> {
    fn tag_builder(&self) -> TagBuilder {
        let config = self.config;
        let element = if config.is_anchor() {
            LINK_ELEMENT
        } else {
            BUTTON_ELEMENT
        };
        let mut builder = TagBuilder::new(element);

        let attrs = builder.attributes_mut();
        if let Some(style) = config.style {
            attrs.add_flag(style.directive(), true);
        }
        attrs
            .add(
                attribute_name(ConfigKey::Type),
                config.button_type.map(|t| t.description()),
            )
            .add(attribute_name(ConfigKey::Link), config.link.as_ref())
            .add(attribute_name(ConfigKey::Disabled), config.disabled);
        add_reference(attrs, config.id.as_deref());

        builder.set_text(config.text.as_deref());
        builder
    }
}
