//! # Rendering
//!
//! A render pass turns one control config into one [`TagBuilder`]. Each control type has a
//! render struct borrowing its config ([`TextBoxRender`], [`ButtonRender`]); both implement
//! [`Render`].
//!
//! Rules run in a fixed order and each appends at most one attribute. A pass owns nothing but
//! its output, reads the config without touching it, and cannot fail.

mod button;
mod form_control;
mod tag;
mod textbox;

pub use button::{ButtonRender, BUTTON_ELEMENT, LINK_ELEMENT};
pub use tag::{MarkupLayout, TagBuilder};
pub use textbox::{
    wrapper_element, TextBoxRender, DATEPICKER_WRAPPER, TEXTAREA_WRAPPER, TEXTBOX_WRAPPER,
};

use crate::controls::{key_spec, ConfigKey, ControlConfig};

pub trait Render {
    /// Builds the element with its attributes in emission order.
    fn tag_builder(&self) -> TagBuilder;

    fn render(&self, layout: MarkupLayout) -> String {
        self.tag_builder().to_markup(layout)
    }
}

/// Renders any control.
pub fn render_control(control: &ControlConfig) -> TagBuilder {
    let tag = match control {
        ControlConfig::TextBox(config) => TextBoxRender::new(config).tag_builder(),
        ControlConfig::Button(config) => ButtonRender::new(config).tag_builder(),
    };
    tracing::debug!(
        control = control.label(),
        element = %tag.element,
        attributes = tag.attributes.len(),
        "rendered control"
    );
    tag
}

/// Markup attribute fed by `key`, falling back to the key name.
fn attribute_name(key: ConfigKey) -> &'static str {
    let spec = key_spec(key);
    spec.attribute.unwrap_or(spec.name)
}
