use super::form_control::add_common;
use super::{attribute_name, Render, TagBuilder};
use crate::attributes::AttributeSet;
use crate::controls::{
    ConfigKey as K, DatePickerOptions, TextAreaOptions, TextBoxConfig, TextBoxVariant, VariantKind,
};

pub const TEXTBOX_WRAPPER: &str = "mat-textbox-wrapper";
pub const TEXTAREA_WRAPPER: &str = "mat-textarea-wrapper";
pub const DATEPICKER_WRAPPER: &str = "mat-datepicker-wrapper";

/// Wrapper element for a text box variant.
pub fn wrapper_element(kind: VariantKind) -> &'static str {
    match kind {
        VariantKind::TextBox => TEXTBOX_WRAPPER,
        VariantKind::TextArea => TEXTAREA_WRAPPER,
        VariantKind::DatePicker => DATEPICKER_WRAPPER,
    }
}

/// Render pipeline for text boxes, text areas and date pickers.
pub struct TextBoxRender<'a> {
    config: &'a TextBoxConfig,
}

impl<'a> TextBoxRender<'a> {
    pub fn new(config: &'a TextBoxConfig) -> Self {
        Self { config }
    }

    fn add_text_area(attrs: &mut AttributeSet, options: &TextAreaOptions) {
        attrs
            .add(attribute_name(K::MinRows), options.min_rows)
            .add(attribute_name(K::MaxRows), options.max_rows);
    }

    fn add_date_picker(attrs: &mut AttributeSet, options: &DatePickerOptions) {
        attrs
            .add(attribute_name(K::Width), options.width.as_ref())
            .add(
                attribute_name(K::StartView),
                options.start_view.map(|v| v.description()),
            )
            .add(attribute_name(K::TouchUi), options.touch_ui)
            .add(attribute_name(K::MinDate), options.min_date)
            .add(attribute_name(K::MaxDate), options.max_date);
    }

    fn add_text_box(&self, attrs: &mut AttributeSet) {
        let config = self.config;
        attrs
            .add(
                attribute_name(K::Type),
                config.input_type.map(|t| t.description()),
            )
            .add(attribute_name(K::ReadOnly), config.read_only)
            .add(attribute_name(K::ShowClearButton), config.show_clear_button);
        self.add_validations(attrs);
    }

    fn add_validations(&self, attrs: &mut AttributeSet) {
        let config = self.config;
        attrs
            .add(attribute_name(K::EmailMessage), config.email_message.as_ref())
            .add(attribute_name(K::MinLength), config.min_length)
            .add(
                attribute_name(K::MinLengthMessage),
                config.min_length_message.as_ref(),
            )
            .add(attribute_name(K::MaxLength), config.max_length);
    }
}

impl Render for TextBoxRender<'_> {
    fn tag_builder(&self) -> TagBuilder {
        let mut builder = TagBuilder::new(wrapper_element(self.config.variant.kind()));
        let attrs = builder.attributes_mut();

        add_common(attrs, &self.config.control);
        match &self.config.variant {
            TextBoxVariant::TextArea(options) => Self::add_text_area(attrs, options),
            TextBoxVariant::DatePicker(options) => Self::add_date_picker(attrs, options),
            TextBoxVariant::TextBox => {}
        }
        self.add_text_box(attrs);

        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttrValue;
    use crate::controls::{ConfigStore, ConfigValue, FormControlOptions};
    use crate::model::{DateView, TextBoxType};
    use crate::render::MarkupLayout;
    use chrono::NaiveDate;

    const ROW_ATTRS: [&str; 2] = ["[minRows]", "[maxRows]"];
    const DATE_ATTRS: [&str; 5] = ["[width]", "startView", "[touchUi]", "minDate", "maxDate"];

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn attrs_of(config: &TextBoxConfig) -> AttributeSet {
        TextBoxRender::new(config).tag_builder().attributes
    }

    #[test]
    fn text_area_rows() {
        let mut config = TextBoxConfig::text_area();
        config.set(K::MinRows, ConfigValue::Integer(3)).unwrap();
        config.set(K::MaxRows, ConfigValue::Integer(6)).unwrap();

        let tag = TextBoxRender::new(&config).tag_builder();
        assert_eq!(tag.element, TEXTAREA_WRAPPER);
        assert_eq!(tag.attributes.get("[minRows]"), Some(&AttrValue::Integer(3)));
        assert_eq!(tag.attributes.get("[maxRows]"), Some(&AttrValue::Integer(6)));
        assert!(!tag.attributes.contains("[width]"));
        assert!(!tag.attributes.contains("startView"));
        assert_eq!(
            tag.to_markup(MarkupLayout::Inline),
            r#"<mat-textarea-wrapper [minRows]="3" [maxRows]="6"></mat-textarea-wrapper>"#
        );
    }

    #[test]
    fn text_area_never_emits_date_attributes() {
        let config = TextBoxConfig {
            variant: TextBoxVariant::TextArea(TextAreaOptions {
                min_rows: Some(1),
                max_rows: None,
            }),
            ..TextBoxConfig::default()
        };
        let attrs = attrs_of(&config);
        for name in DATE_ATTRS {
            assert!(!attrs.contains(name), "{name}");
        }
        assert!(!attrs.contains("[maxRows]"));
    }

    #[test]
    fn date_picker_min_date_only() {
        let mut config = TextBoxConfig::date_picker();
        config
            .set(K::MinDate, ConfigValue::Date(date(2020, 1, 1)))
            .unwrap();

        let tag = TextBoxRender::new(&config).tag_builder();
        assert_eq!(tag.element, DATEPICKER_WRAPPER);
        assert_eq!(
            tag.attributes.get("minDate"),
            Some(&AttrValue::Text("2020-01-01".into()))
        );
        assert!(!tag.attributes.contains("maxDate"));
        for name in ROW_ATTRS {
            assert!(!tag.attributes.contains(name), "{name}");
        }
    }

    #[test]
    fn date_picker_attributes_each_present_iff_set() {
        let options = DatePickerOptions {
            width: Some("300".into()),
            start_view: Some(DateView::MultiYear),
            touch_ui: Some(true),
            min_date: Some(date(2020, 1, 1)),
            max_date: Some(date(2021, 12, 31)),
        };
        let config = TextBoxConfig {
            variant: TextBoxVariant::DatePicker(options),
            ..TextBoxConfig::default()
        };
        let attrs = attrs_of(&config);
        let names: Vec<_> = attrs.names().collect();
        assert_eq!(names, DATE_ATTRS.to_vec());
        assert_eq!(
            attrs.get("startView"),
            Some(&AttrValue::Text("multi-year".into()))
        );

        let config = TextBoxConfig {
            variant: TextBoxVariant::DatePicker(DatePickerOptions {
                touch_ui: Some(false),
                ..DatePickerOptions::default()
            }),
            ..TextBoxConfig::default()
        };
        let attrs = attrs_of(&config);
        assert_eq!(attrs.names().collect::<Vec<_>>(), vec!["[touchUi]"]);
    }

    #[test]
    fn plain_text_box_has_only_variant_independent_attributes() {
        let config = TextBoxConfig {
            input_type: Some(TextBoxType::Email),
            email_message: Some("bad address".into()),
            ..TextBoxConfig::text_box()
        };
        let tag = TextBoxRender::new(&config).tag_builder();
        assert_eq!(tag.element, TEXTBOX_WRAPPER);
        for name in ROW_ATTRS.iter().chain(DATE_ATTRS.iter()) {
            assert!(!tag.attributes.contains(name), "{name}");
        }
        assert_eq!(
            tag.to_markup(MarkupLayout::Inline),
            r#"<mat-textbox-wrapper type="email" emailMessage="bad address"></mat-textbox-wrapper>"#
        );
    }

    #[test]
    fn read_only_and_min_length() {
        let mut config = TextBoxConfig::text_box();
        config.set(K::ReadOnly, ConfigValue::Bool(true)).unwrap();
        config.set(K::MinLength, ConfigValue::Integer(5)).unwrap();
        config
            .set(K::MinLengthMessage, ConfigValue::Text("too short".into()))
            .unwrap();

        let attrs = attrs_of(&config);
        assert_eq!(attrs.get("[readonly]"), Some(&AttrValue::Bool(true)));
        assert_eq!(attrs.get("[minLength]"), Some(&AttrValue::Integer(5)));
        assert_eq!(
            attrs.get("minLengthMessage"),
            Some(&AttrValue::Text("too short".into()))
        );
        assert_eq!(attrs.len(), 3);
    }

    #[test]
    fn full_emission_order() {
        let config = TextBoxConfig {
            control: FormControlOptions {
                name: Some("bio".into()),
                ..FormControlOptions::default()
            },
            variant: TextBoxVariant::TextArea(TextAreaOptions {
                min_rows: Some(2),
                max_rows: Some(4),
            }),
            input_type: Some(TextBoxType::Text),
            read_only: Some(false),
            show_clear_button: Some(true),
            email_message: Some("e".into()),
            min_length: Some(1),
            min_length_message: Some("m".into()),
            max_length: Some(10),
        };
        let attrs = attrs_of(&config);
        let names: Vec<_> = attrs.names().collect();
        assert_eq!(
            names,
            vec![
                "name",
                "[minRows]",
                "[maxRows]",
                "type",
                "[readonly]",
                "[showClearButton]",
                "emailMessage",
                "[minLength]",
                "minLengthMessage",
                "[maxLength]"
            ]
        );
    }

    #[test]
    fn omission_law() {
        let attrs = attrs_of(&TextBoxConfig::text_box());
        assert!(attrs.is_empty());

        let config = TextBoxConfig {
            email_message: Some(String::new()),
            ..TextBoxConfig::text_box()
        };
        assert!(attrs_of(&config).is_empty());
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut config = TextBoxConfig::date_picker();
        config
            .set(K::StartView, ConfigValue::Enum("year".into()))
            .unwrap();
        config.set(K::MaxLength, ConfigValue::Integer(8)).unwrap();

        let render = TextBoxRender::new(&config);
        assert_eq!(render.tag_builder(), render.tag_builder());
        assert_eq!(
            render.render(MarkupLayout::Inline),
            render.render(MarkupLayout::Inline)
        );
    }
}
