use crate::commands::{CmdMessage, CmdResult, MatformPaths};
use crate::config::MatformConfig;
use crate::error::Result;
use crate::model::Scope;
use std::fs;

/// Creates the settings directory, writing a default config unless one already exists.
pub fn run(paths: &MatformPaths, scope: Scope) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    fs::create_dir_all(&dir)?;

    // load returns the file's contents when present, so saving it back keeps existing values
    let config = MatformConfig::load(&dir)?;
    config.save(&dir)?;

    let mut result = CmdResult::default().with_config(config);
    result.add_message(CmdMessage::success(format!(
        "Initialized matform settings at {}",
        dir.display()
    )));
    Ok(result)
}
