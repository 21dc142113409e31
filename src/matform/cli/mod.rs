//! # CLI
//!
//! One client of the matform library: argument parsing, logging setup, dispatch to the API
//! and terminal output. Nothing below this module prints.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `logging`: tracing subscriber setup
//! - `render`: Output formatting through templates
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling
//! - `templates`: Output templates

mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
