use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// The `type` of a text box input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBoxType {
    Text,
    Password,
    Email,
    Number,
    Tel,
    Url,
    Search,
}

impl TextBoxType {
    pub const ALL: &'static [TextBoxType] = &[
        TextBoxType::Text,
        TextBoxType::Password,
        TextBoxType::Email,
        TextBoxType::Number,
        TextBoxType::Tel,
        TextBoxType::Url,
        TextBoxType::Search,
    ];

    /// The value written into the `type` attribute.
    pub fn description(&self) -> &'static str {
        match self {
            TextBoxType::Text => "text",
            TextBoxType::Password => "password",
            TextBoxType::Email => "email",
            TextBoxType::Number => "number",
            TextBoxType::Tel => "tel",
            TextBoxType::Url => "url",
            TextBoxType::Search => "search",
        }
    }
}

/// Initial view of a date picker calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateView {
    Month,
    Year,
    MultiYear,
}

impl DateView {
    pub const ALL: &'static [DateView] = &[DateView::Month, DateView::Year, DateView::MultiYear];

    /// The value written into the `startView` attribute.
    pub fn description(&self) -> &'static str {
        match self {
            DateView::Month => "month",
            DateView::Year => "year",
            DateView::MultiYear => "multi-year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub const ALL: &'static [ButtonType] =
        &[ButtonType::Button, ButtonType::Submit, ButtonType::Reset];

    pub fn description(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// Material button flavour, rendered as a valueless directive attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonStyle {
    Basic,
    Raised,
    Flat,
    Stroked,
    Icon,
    Fab,
    MiniFab,
}

impl ButtonStyle {
    pub const ALL: &'static [ButtonStyle] = &[
        ButtonStyle::Basic,
        ButtonStyle::Raised,
        ButtonStyle::Flat,
        ButtonStyle::Stroked,
        ButtonStyle::Icon,
        ButtonStyle::Fab,
        ButtonStyle::MiniFab,
    ];

    /// Name used in declarations (`"raised"`, `"mini-fab"`).
    pub fn description(&self) -> &'static str {
        match self {
            ButtonStyle::Basic => "basic",
            ButtonStyle::Raised => "raised",
            ButtonStyle::Flat => "flat",
            ButtonStyle::Stroked => "stroked",
            ButtonStyle::Icon => "icon",
            ButtonStyle::Fab => "fab",
            ButtonStyle::MiniFab => "mini-fab",
        }
    }

    /// The Material directive this style maps to.
    pub fn directive(&self) -> &'static str {
        match self {
            ButtonStyle::Basic => "mat-button",
            ButtonStyle::Raised => "mat-raised-button",
            ButtonStyle::Flat => "mat-flat-button",
            ButtonStyle::Stroked => "mat-stroked-button",
            ButtonStyle::Icon => "mat-icon-button",
            ButtonStyle::Fab => "mat-fab",
            ButtonStyle::MiniFab => "mat-mini-fab",
        }
    }
}

/// Finds the variant of `all` whose description matches `s`, ignoring ASCII case.
fn parse_described<T: Copy>(
    s: &str,
    all: &[T],
    describe: impl Fn(&T) -> &'static str,
    what: &str,
) -> Result<T, String> {
    all.iter()
        .find(|v| describe(*v).eq_ignore_ascii_case(s.trim()))
        .copied()
        .ok_or_else(|| format!("Unknown {}: {}", what, s))
}

impl FromStr for TextBoxType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_described(s, Self::ALL, Self::description, "text box type")
    }
}

impl FromStr for DateView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_described(s, Self::ALL, Self::description, "date view")
    }
}

impl FromStr for ButtonType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_described(s, Self::ALL, Self::description, "button type")
    }
}

impl FromStr for ButtonStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_described(s, Self::ALL, Self::description, "button style")
    }
}

impl fmt::Display for TextBoxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl fmt::Display for DateView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl fmt::Display for ButtonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl fmt::Display for ButtonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
