use crate::commands::CmdResult;
use crate::controls::{keys_for, Applies, KEYS};
use crate::error::Result;

/// Lists the key registry, optionally only the keys usable on one kind of control.
pub fn run(applies: Option<Applies>) -> Result<CmdResult> {
    let keys = match applies {
        Some(applies) => keys_for(applies).collect(),
        None => KEYS.iter().collect(),
    };
    Ok(CmdResult::default().with_keys(keys))
}
