//! # Rendering Module
//!
//! Turns `CmdResult` data into terminal text through the templates in [`super::templates`].
//!
//! Column alignment stays in Rust because it needs Unicode-aware widths; templates receive
//! pre-padded strings and only decide which style each piece gets. Every `render_*` function
//! has a `*_with_color` twin so tests can pin the color decision instead of depending on the
//! terminal.

use super::styles::{names, MATFORM_THEME};
use super::templates::{
    ATTRS_TEMPLATE, CONFIG_TEMPLATE, KEYS_TEMPLATE, MARKUP_TEMPLATE, MESSAGES_TEMPLATE,
};
use console::Term;
use matform::api::{CmdMessage, MessageLevel, RenderedControl};
use matform::config::MatformConfig;
use matform::controls::KeySpec;
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Renders `template` with the theme's `style` filter.
fn render_template<T: Serialize>(
    template: &str,
    data: &T,
    use_color: bool,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        MATFORM_THEME.apply(&name, &value.to_string(), use_color)
    });
    env.add_template("_inline", template)?;
    env.get_template("_inline")?.render(data)
}

fn stdout_colors() -> bool {
    Term::stdout().features().colors_supported()
}

fn stderr_colors() -> bool {
    Term::stderr().features().colors_supported()
}

/// Spaces needed to bring `s` up to `width` display columns.
fn padding(s: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(s.width()))
}

#[derive(Serialize)]
struct MarkupData<'a> {
    controls: &'a [RenderedControl],
}

/// Rendered markup, one control per line. Never styled: the output is meant to be pasted.
pub fn render_markup(controls: &[RenderedControl]) -> String {
    render_template(MARKUP_TEMPLATE, &MarkupData { controls }, false).unwrap_or_else(|_| {
        controls
            .iter()
            .map(|c| format!("{}\n", c.markup))
            .collect()
    })
}

#[derive(Serialize)]
struct AttrLine {
    name: String,
    padding: String,
    value: String,
}

#[derive(Serialize)]
struct ControlAttrs {
    index: String,
    label: String,
    element: String,
    attrs: Vec<AttrLine>,
}

#[derive(Serialize)]
struct AttrsData {
    controls: Vec<ControlAttrs>,
}

pub fn render_attrs(controls: &[RenderedControl]) -> String {
    render_attrs_with_color(controls, stdout_colors())
}

pub fn render_attrs_with_color(controls: &[RenderedControl], use_color: bool) -> String {
    let data = AttrsData {
        controls: controls
            .iter()
            .map(|control| {
                let width = control
                    .tag
                    .attributes
                    .names()
                    .map(|n| n.width())
                    .max()
                    .unwrap_or(0);
                ControlAttrs {
                    index: format!("[{}]", control.index),
                    label: control.label.to_string(),
                    element: format!("<{}>", control.tag.element),
                    attrs: control
                        .tag
                        .attributes
                        .iter()
                        .map(|attr| AttrLine {
                            name: attr.name.clone(),
                            padding: padding(&attr.name, width),
                            value: attr.value.render().unwrap_or_default(),
                        })
                        .collect(),
                }
            })
            .collect(),
    };

    render_template(ATTRS_TEMPLATE, &data, use_color).unwrap_or_else(|_| render_markup(controls))
}

#[derive(Serialize)]
struct KeyLine {
    name: &'static str,
    name_padding: String,
    kind: &'static str,
    kind_padding: String,
    applies: &'static str,
    applies_padding: String,
    attribute: &'static str,
}

#[derive(Serialize)]
struct KeysData {
    keys: Vec<KeyLine>,
}

pub fn render_keys(keys: &[&KeySpec]) -> String {
    render_keys_with_color(keys, stdout_colors())
}

pub fn render_keys_with_color(keys: &[&KeySpec], use_color: bool) -> String {
    let name_width = keys.iter().map(|k| k.name.width()).max().unwrap_or(0);
    let kind_width = keys.iter().map(|k| k.kind.label().width()).max().unwrap_or(0);
    let applies_width = keys
        .iter()
        .map(|k| k.applies.label().width())
        .max()
        .unwrap_or(0);

    let data = KeysData {
        keys: keys
            .iter()
            .map(|k| KeyLine {
                name: k.name,
                name_padding: padding(k.name, name_width),
                kind: k.kind.label(),
                kind_padding: padding(k.kind.label(), kind_width),
                applies: k.applies.label(),
                applies_padding: padding(k.applies.label(), applies_width),
                attribute: k.attribute.unwrap_or("-"),
            })
            .collect(),
    };

    render_template(KEYS_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        keys.iter().map(|k| format!("{}\n", k.name)).collect()
    })
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

pub fn render_config(config: &MatformConfig) -> String {
    render_config_with_color(config, stdout_colors())
}

pub fn render_config_with_color(config: &MatformConfig, use_color: bool) -> String {
    let entries: Vec<ConfigEntry> = config
        .entries()
        .into_iter()
        .map(|(key, value)| ConfigEntry { key, value })
        .collect();
    let fallback: String = entries
        .iter()
        .map(|e| format!("{} = {}\n", e.key, e.value))
        .collect();

    render_template(CONFIG_TEMPLATE, &ConfigData { entries }, use_color).unwrap_or(fallback)
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

pub fn render_messages_with_color(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// Prints command messages to stdout.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages_with_color(messages, stdout_colors());
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Prints command messages to stderr, keeping stdout for data.
pub fn eprint_messages(messages: &[CmdMessage]) {
    let output = render_messages_with_color(messages, stderr_colors());
    if !output.is_empty() {
        eprint!("{}", output);
    }
}
