use crate::attributes::AttributeSet;
use serde::{Deserialize, Serialize};

/// How `to_markup` lays out attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkupLayout {
    /// `<el a="1" b="2"></el>`
    #[default]
    Inline,
    /// One attribute per line, indented by two spaces
    AttributePerLine,
}

/// An element under construction: its name, ordered attributes and optional text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagBuilder {
    pub element: String,
    pub attributes: AttributeSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl TagBuilder {
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            attributes: AttributeSet::new(),
            text: None,
        }
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeSet {
        &mut self.attributes
    }

    /// Sets element content. Empty text counts as no content.
    pub fn set_text(&mut self, text: Option<&str>) -> &mut Self {
        self.text = text.filter(|t| !t.is_empty()).map(str::to_string);
        self
    }

    /// Serializes the element. Values and text are HTML-escaped; flags render bare.
    pub fn to_markup(&self, layout: MarkupLayout) -> String {
        let mut out = format!("<{}", self.element);
        let separator = match layout {
            MarkupLayout::Inline => " ",
            MarkupLayout::AttributePerLine => "\n  ",
        };
        for attr in &self.attributes {
            out.push_str(separator);
            out.push_str(&attr.name);
            if let Some(value) = attr.value.render() {
                out.push_str("=\"");
                out.push_str(&escape(&value));
                out.push('"');
            }
        }
        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&escape(text));
        }
        out.push_str(&format!("</{}>", self.element));
        out
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
