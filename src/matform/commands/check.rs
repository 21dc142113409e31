use crate::commands::{CmdMessage, CmdResult};
use crate::config::MatformConfig;
use crate::declaration::FormDeclaration;
use crate::error::Result;

/// Resolves every control without rendering and reports what it finds.
///
/// Problems are returned as messages rather than errors so that one bad control does not hide
/// the others.
pub fn run(decl: &FormDeclaration, settings: &MatformConfig) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut failed = 0;

    for (i, control) in decl.controls.iter().enumerate() {
        let index = i + 1;
        match control.resolve(settings.conflict_policy) {
            Ok(resolved) => {
                for warning in &resolved.warnings {
                    result.add_message(CmdMessage::warning(format!(
                        "Control {}: {}",
                        index, warning
                    )));
                }
                result.add_message(CmdMessage::info(format!(
                    "Control {}: {} ok",
                    index,
                    resolved.config.label()
                )));
            }
            Err(e) => {
                failed += 1;
                result.add_message(CmdMessage::error(format!("Control {}: {}", index, e)));
            }
        }
    }

    let total = decl.controls.len();
    let noun = if total == 1 { "control" } else { "controls" };
    if failed == 0 {
        result.add_message(CmdMessage::success(format!(
            "{} {} checked, no errors",
            total, noun
        )));
    } else {
        result.add_message(CmdMessage::error(format!(
            "{} of {} {} failed",
            failed, total, noun
        )));
    }
    Ok(result)
}
