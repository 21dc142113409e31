use super::spec::ConfigKey;
use super::value::ConfigValue;
use super::variant::VariantKind;
use super::{
    expect_bool, expect_date, expect_enum, expect_reference, expect_text, expect_u32, ConfigStore,
};
use crate::error::{MatformError, Result};
use crate::model::{DateView, TextBoxType};
use chrono::NaiveDate;

/// Attributes every form control carries, whatever its variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormControlOptions {
    /// Template reference name, rendered as `#<id>`
    pub id: Option<String>,
    pub name: Option<String>,
    pub placeholder: Option<String>,
    /// Two-way model binding expression
    pub model: Option<String>,
    pub required: Option<bool>,
    pub required_message: Option<String>,
    pub disabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextAreaOptions {
    pub min_rows: Option<u32>,
    pub max_rows: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatePickerOptions {
    pub width: Option<String>,
    pub start_view: Option<DateView>,
    pub touch_ui: Option<bool>,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
}

/// A text box variant together with the options only that variant understands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TextBoxVariant {
    #[default]
    TextBox,
    TextArea(TextAreaOptions),
    DatePicker(DatePickerOptions),
}

impl TextBoxVariant {
    pub fn kind(&self) -> VariantKind {
        match self {
            TextBoxVariant::TextBox => VariantKind::TextBox,
            TextBoxVariant::TextArea(_) => VariantKind::TextArea,
            TextBoxVariant::DatePicker(_) => VariantKind::DatePicker,
        }
    }
}

impl From<VariantKind> for TextBoxVariant {
    fn from(kind: VariantKind) -> Self {
        match kind {
            VariantKind::TextBox => TextBoxVariant::TextBox,
            VariantKind::TextArea => TextBoxVariant::TextArea(TextAreaOptions::default()),
            VariantKind::DatePicker => TextBoxVariant::DatePicker(DatePickerOptions::default()),
        }
    }
}

/// Configuration of a text box, text area or date picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBoxConfig {
    pub control: FormControlOptions,
    pub variant: TextBoxVariant,
    pub input_type: Option<TextBoxType>,
    pub read_only: Option<bool>,
    pub show_clear_button: Option<bool>,
    pub email_message: Option<String>,
    pub min_length: Option<u32>,
    pub min_length_message: Option<String>,
    pub max_length: Option<u32>,
}

impl TextBoxConfig {
    pub fn new(kind: VariantKind) -> Self {
        Self {
            variant: kind.into(),
            ..Self::default()
        }
    }

    pub fn text_box() -> Self {
        Self::new(VariantKind::TextBox)
    }

    pub fn text_area() -> Self {
        Self::new(VariantKind::TextArea)
    }

    pub fn date_picker() -> Self {
        Self::new(VariantKind::DatePicker)
    }

    pub fn is_text_area(&self) -> bool {
        matches!(self.variant, TextBoxVariant::TextArea(_))
    }

    pub fn is_date_picker(&self) -> bool {
        matches!(self.variant, TextBoxVariant::DatePicker(_))
    }

    fn not_applicable(&self, key: ConfigKey) -> MatformError {
        not_applicable(key, self.variant.kind())
    }

    fn text_area_mut(&mut self, key: ConfigKey) -> Result<&mut TextAreaOptions> {
        match &mut self.variant {
            TextBoxVariant::TextArea(options) => Ok(options),
            other => Err(not_applicable(key, other.kind())),
        }
    }

    fn date_picker_mut(&mut self, key: ConfigKey) -> Result<&mut DatePickerOptions> {
        match &mut self.variant {
            TextBoxVariant::DatePicker(options) => Ok(options),
            other => Err(not_applicable(key, other.kind())),
        }
    }

    /// Turns a discriminator flag on or off.
    ///
    /// Switching on a variant while the other special variant is active is a conflict; the
    /// config keeps its current variant.
    fn set_variant_flag(&mut self, target: VariantKind, on: bool) -> Result<()> {
        let current = self.variant.kind();
        match (on, current) {
            (true, VariantKind::TextBox) => self.variant = target.into(),
            (true, current) if current == target => {}
            (true, _) => return Err(MatformError::ConflictingVariant),
            (false, current) if current == target => self.variant = TextBoxVariant::TextBox,
            (false, _) => {}
        }
        Ok(())
    }
}

fn not_applicable(key: ConfigKey, kind: VariantKind) -> MatformError {
    MatformError::NotApplicable {
        key: key.name().to_string(),
        control: kind.label().to_string(),
    }
}

impl ConfigStore for TextBoxConfig {
    fn get(&self, key: ConfigKey) -> Option<ConfigValue> {
        let text = |s: &Option<String>| s.clone().map(ConfigValue::Text);
        let flag = |b: &Option<bool>| b.map(ConfigValue::Bool);
        let int = |n: &Option<u32>| n.map(|n| ConfigValue::Integer(i64::from(n)));

        let text_area = match &self.variant {
            TextBoxVariant::TextArea(options) => Some(options),
            _ => None,
        };
        let date_picker = match &self.variant {
            TextBoxVariant::DatePicker(options) => Some(options),
            _ => None,
        };

        match key {
            ConfigKey::Id => text(&self.control.id),
            ConfigKey::Name => text(&self.control.name),
            ConfigKey::Placeholder => text(&self.control.placeholder),
            ConfigKey::Model => text(&self.control.model),
            ConfigKey::Required => flag(&self.control.required),
            ConfigKey::RequiredMessage => text(&self.control.required_message),
            ConfigKey::Disabled => flag(&self.control.disabled),
            ConfigKey::IsTextArea => Some(ConfigValue::Bool(self.is_text_area())),
            ConfigKey::MinRows => text_area.and_then(|o| int(&o.min_rows)),
            ConfigKey::MaxRows => text_area.and_then(|o| int(&o.max_rows)),
            ConfigKey::IsDatePicker => Some(ConfigValue::Bool(self.is_date_picker())),
            ConfigKey::Width => date_picker.and_then(|o| text(&o.width)),
            ConfigKey::StartView => date_picker
                .and_then(|o| o.start_view)
                .map(|v| ConfigValue::Enum(v.description().to_string())),
            ConfigKey::TouchUi => date_picker.and_then(|o| flag(&o.touch_ui)),
            ConfigKey::MinDate => date_picker.and_then(|o| o.min_date).map(ConfigValue::Date),
            ConfigKey::MaxDate => date_picker.and_then(|o| o.max_date).map(ConfigValue::Date),
            ConfigKey::Type => self
                .input_type
                .map(|t| ConfigValue::Enum(t.description().to_string())),
            ConfigKey::ReadOnly => flag(&self.read_only),
            ConfigKey::ShowClearButton => flag(&self.show_clear_button),
            ConfigKey::EmailMessage => text(&self.email_message),
            ConfigKey::MinLength => int(&self.min_length),
            ConfigKey::MinLengthMessage => text(&self.min_length_message),
            ConfigKey::MaxLength => int(&self.max_length),
            ConfigKey::Text | ConfigKey::Styles | ConfigKey::Link => None,
        }
    }

    fn set(&mut self, key: ConfigKey, value: ConfigValue) -> Result<()> {
        match key {
            ConfigKey::Id => self.control.id = Some(expect_reference(key, value)?),
            ConfigKey::Name => self.control.name = Some(expect_text(key, value)?),
            ConfigKey::Placeholder => self.control.placeholder = Some(expect_text(key, value)?),
            ConfigKey::Model => self.control.model = Some(expect_text(key, value)?),
            ConfigKey::Required => self.control.required = Some(expect_bool(key, value)?),
            ConfigKey::RequiredMessage => {
                self.control.required_message = Some(expect_text(key, value)?)
            }
            ConfigKey::Disabled => self.control.disabled = Some(expect_bool(key, value)?),
            ConfigKey::IsTextArea => {
                let on = expect_bool(key, value)?;
                self.set_variant_flag(VariantKind::TextArea, on)?;
            }
            ConfigKey::MinRows => {
                let rows = expect_u32(key, value)?;
                self.text_area_mut(key)?.min_rows = Some(rows);
            }
            ConfigKey::MaxRows => {
                let rows = expect_u32(key, value)?;
                self.text_area_mut(key)?.max_rows = Some(rows);
            }
            ConfigKey::IsDatePicker => {
                let on = expect_bool(key, value)?;
                self.set_variant_flag(VariantKind::DatePicker, on)?;
            }
            ConfigKey::Width => {
                let width = expect_text(key, value)?;
                self.date_picker_mut(key)?.width = Some(width);
            }
            ConfigKey::StartView => {
                let view: DateView = expect_enum(key, value, "date view")?;
                self.date_picker_mut(key)?.start_view = Some(view);
            }
            ConfigKey::TouchUi => {
                let touch = expect_bool(key, value)?;
                self.date_picker_mut(key)?.touch_ui = Some(touch);
            }
            ConfigKey::MinDate => {
                let date = expect_date(key, value)?;
                self.date_picker_mut(key)?.min_date = Some(date);
            }
            ConfigKey::MaxDate => {
                let date = expect_date(key, value)?;
                self.date_picker_mut(key)?.max_date = Some(date);
            }
            ConfigKey::Type => {
                self.input_type = Some(expect_enum(key, value, "text box type")?);
            }
            ConfigKey::ReadOnly => self.read_only = Some(expect_bool(key, value)?),
            ConfigKey::ShowClearButton => self.show_clear_button = Some(expect_bool(key, value)?),
            ConfigKey::EmailMessage => self.email_message = Some(expect_text(key, value)?),
            ConfigKey::MinLength => self.min_length = Some(expect_u32(key, value)?),
            ConfigKey::MinLengthMessage => {
                self.min_length_message = Some(expect_text(key, value)?)
            }
            ConfigKey::MaxLength => self.max_length = Some(expect_u32(key, value)?),
            ConfigKey::Text | ConfigKey::Styles | ConfigKey::Link => {
                return Err(self.not_applicable(key));
            }
        }
        Ok(())
    }
}
