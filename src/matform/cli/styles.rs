//! Styles for the matform CLI.
//!
//! Templates refer to styles by semantic name (`attr-name`, `warning`, ...) and never to raw
//! colors. The names live in [`names`]; [`MATFORM_THEME`] maps each one to a `console::Style`
//! and is built once through `once_cell::sync::Lazy`.
//!
//! A style name the theme does not know is rendered with a `(!?)` prefix so typos in templates
//! show up in the output instead of silently rendering plain.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const MUTED: &str = "muted";
    pub const TITLE: &str = "title";
    pub const INDEX: &str = "index";
    pub const ATTR_NAME: &str = "attr-name";
    pub const ATTR_VALUE: &str = "attr-value";
    pub const KEY_NAME: &str = "key-name";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

/// A named collection of styles.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, replacing any previous one with that name.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies a named style. Without color the text is returned as is.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static MATFORM_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(245);
    Theme::new()
        .add(names::MUTED, muted.clone())
        .add(names::TITLE, Style::new().bold())
        .add(names::INDEX, Style::new().yellow())
        .add(names::ATTR_NAME, Style::new().cyan())
        .add(names::ATTR_VALUE, Style::new().green())
        .add(names::KEY_NAME, Style::new().bold())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted)
});
