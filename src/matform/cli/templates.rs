//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept in `templates/*.tmp` and embedded
//! here as string constants.
//!
//! Templates spell out their own line breaks: every loop body ends with the newline it wants
//! and the single trailing newline of each file is dropped by minijinja. Layout math (column
//! padding) is done in Rust and handed to the templates as plain strings; templates only pick
//! styles through the `style` filter.

pub const MARKUP_TEMPLATE: &str = include_str!("templates/markup.tmp");
pub const ATTRS_TEMPLATE: &str = include_str!("templates/attrs.tmp");
pub const KEYS_TEMPLATE: &str = include_str!("templates/keys.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
