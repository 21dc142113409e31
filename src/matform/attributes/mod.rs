//! # Markup Attributes
//!
//! The output side of a render pass: an ordered, append-only list of `(name, value)` pairs.
//!
//! - [`AttrValue`]: what a single attribute carries (text, bool, integer, or nothing at all)
//! - [`AttributeSet`]: the ordered collection a render pass appends to
//!
//! ## Omission
//!
//! Every emission goes through [`AttributeSet::add`], which takes an `Option`. `None` and empty
//! text are dropped, so a missing config value can never show up as `name=""` in the markup.
//!
//! ```
//! use matform::attributes::AttributeSet;
//!
//! let mut attrs = AttributeSet::new();
//! attrs.add("[minRows]", Some(3u32));
//! attrs.add("[maxRows]", None::<u32>); // skipped
//! assert_eq!(attrs.len(), 1);
//! ```

mod set;
mod value;

pub use set::{Attribute, AttributeSet};
pub use value::{AttrValue, DATE_FORMAT};
