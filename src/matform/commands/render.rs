use crate::commands::{CmdMessage, CmdResult, RenderedControl};
use crate::config::MatformConfig;
use crate::declaration::{ControlDeclaration, FormDeclaration};
use crate::error::{MatformError, Result};
use crate::render::render_control;

/// Renders every control of `decl`, or only the `selection`-th (1-based) one.
///
/// The first control that fails to resolve aborts the command. Skipped keys are reported as
/// warnings.
pub fn run(
    decl: &FormDeclaration,
    selection: Option<usize>,
    settings: &MatformConfig,
) -> Result<CmdResult> {
    let selected = select(decl, selection)?;
    let layout = settings.layout();

    let mut result = CmdResult::default();
    let mut rendered = Vec::with_capacity(selected.len());
    for (index, control) in selected {
        let resolved = control
            .resolve(settings.conflict_policy)
            .map_err(|e| MatformError::InvalidControl {
                index,
                source: Box::new(e),
            })?;
        for warning in resolved.warnings {
            result.add_message(CmdMessage::warning(format!("Control {}: {}", index, warning)));
        }

        let tag = render_control(&resolved.config);
        rendered.push(RenderedControl {
            index,
            label: resolved.config.label(),
            markup: tag.to_markup(layout),
            tag,
        });
    }

    Ok(result.with_rendered(rendered))
}

fn select(
    decl: &FormDeclaration,
    selection: Option<usize>,
) -> Result<Vec<(usize, &ControlDeclaration)>> {
    let all = decl.controls.iter().enumerate().map(|(i, c)| (i + 1, c));
    match selection {
        None => Ok(all.collect()),
        Some(n) if n >= 1 && n <= decl.controls.len() => Ok(all.filter(|(i, _)| *i == n).collect()),
        Some(n) => Err(MatformError::Api(format!(
            "No control {} (declaration has {})",
            n,
            decl.controls.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::controls::ConflictPolicy;

    const FORM: &str = r#"{"controls":[
        {"kind":"textbox","Name":"email","Type":"email"},
        {"kind":"textbox","IsTextArea":true,"MinRows":3,"MaxRows":6},
        {"kind":"button","Text":"Save","Type":"submit","Styles":"raised"}
    ]}"#;

    fn form() -> FormDeclaration {
        FormDeclaration::from_json(FORM).unwrap()
    }

    #[test]
    fn test_render_all() {
        let result = run(&form(), None, &MatformConfig::default()).unwrap();
        assert_eq!(result.rendered.len(), 3);
        assert!(result.messages.is_empty());
        assert_eq!(
            result.rendered[0].markup,
            r#"<mat-textbox-wrapper name="email" type="email"></mat-textbox-wrapper>"#
        );
        assert_eq!(result.rendered[1].label, "text area");
        assert_eq!(
            result.rendered[2].markup,
            r#"<button mat-raised-button type="submit">Save</button>"#
        );
    }

    #[test]
    fn test_render_selection() {
        let result = run(&form(), Some(2), &MatformConfig::default()).unwrap();
        assert_eq!(result.rendered.len(), 1);
        assert_eq!(result.rendered[0].index, 2);
        assert_eq!(result.rendered[0].tag.element, "mat-textarea-wrapper");
    }

    #[test]
    fn test_selection_out_of_range() {
        assert!(matches!(
            run(&form(), Some(4), &MatformConfig::default()),
            Err(MatformError::Api(_))
        ));
        assert!(run(&form(), Some(0), &MatformConfig::default()).is_err());
    }

    #[test]
    fn test_attribute_per_line_setting() {
        let settings = MatformConfig {
            attribute_per_line: true,
            ..MatformConfig::default()
        };
        let result = run(&form(), Some(1), &settings).unwrap();
        assert_eq!(
            result.rendered[0].markup,
            "<mat-textbox-wrapper\n  name=\"email\"\n  type=\"email\"></mat-textbox-wrapper>"
        );
    }

    #[test]
    fn test_warnings_become_messages() {
        let decl =
            FormDeclaration::from_json(r#"{"controls":[{"kind":"textbox","MaxRows":2}]}"#).unwrap();
        let result = run(&decl, None, &MatformConfig::default()).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.starts_with("Control 1:"));
    }

    #[test]
    fn test_reject_policy_fails_with_index() {
        let decl = FormDeclaration::from_json(
            r#"{"controls":[{"kind":"button"},{"kind":"textbox","IsTextArea":true,"IsDatePicker":true}]}"#,
        )
        .unwrap();
        let settings = MatformConfig {
            conflict_policy: ConflictPolicy::Reject,
            ..MatformConfig::default()
        };
        match run(&decl, None, &settings) {
            Err(MatformError::InvalidControl { index, source }) => {
                assert_eq!(index, 2);
                assert!(matches!(*source, MatformError::ConflictingVariant));
            }
            other => panic!("Expected InvalidControl, got {other:?}"),
        }
    }
}
