//! # Matform Architecture
//!
//! Matform turns declarations of Angular Material form controls into the markup consumed by the
//! client-side wrapper components (`<mat-textbox-wrapper>`, `<mat-datepicker-wrapper>`, ...).
//! Like any good library-first tool, the CLI is just one client of the library.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Command Layer (commands/*.rs)         │
//! │  - Loads settings and declarations, returns CmdResult       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (controls/, attributes/, render/)                     │
//! │  - Typed control configs, variant selection                 │
//! │  - Ordered attribute emission, tag serialization            │
//! │  - Pure: no I/O, no shared state, cannot fail               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rendering Pipeline
//!
//! A render pass takes one [`controls::ControlConfig`] and produces one
//! [`render::TagBuilder`]:
//!
//! 1. The wrapper element is picked from the control variant (text box, text area, date picker)
//!    or, for buttons, from whether a router link is present.
//! 2. A fixed, ordered list of rules runs. Each rule appends one attribute when its source value
//!    is present and does nothing otherwise.
//! 3. The tag is serialized with [`render::TagBuilder::to_markup`].
//!
//! Absent values are never emitted, not even as empty strings. Rendering the same config twice
//! yields the same attributes in the same order.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`controls`]: Control configs, the key-value store view, key registry, variant selection
//! - [`attributes`]: Attribute values and the ordered attribute set
//! - [`render`]: Tag builder and the per-control render pipelines
//! - [`declaration`]: JSON form declarations (the inbound format)
//! - [`model`]: Display enums (input type, date view, button type/style) and `Scope`
//! - [`config`]: Persistent settings
//! - [`error`]: Error types

pub mod api;
pub mod attributes;
pub mod commands;
pub mod config;
pub mod controls;
pub mod declaration;
pub mod error;
pub mod model;
pub mod render;
