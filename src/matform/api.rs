//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point for
//! every matform operation, whatever the client.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Loads settings** for the requested scope, so commands receive a ready `MatformConfig`
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints, never formats, and holds no business logic of its own.

use crate::commands;
use crate::config::MatformConfig;
use crate::controls::Applies;
use crate::declaration::FormDeclaration;
use crate::error::Result;
use crate::model::Scope;
use std::path::Path;

/// The main API facade for matform operations.
pub struct MatformApi {
    paths: commands::MatformPaths,
}

impl MatformApi {
    pub fn new(paths: commands::MatformPaths) -> Self {
        Self { paths }
    }

    /// Settings for `scope`, defaults when none were saved.
    pub fn settings(&self, scope: Scope) -> Result<MatformConfig> {
        MatformConfig::load(self.paths.scope_dir(scope)?)
    }

    pub fn load_declaration<P: AsRef<Path>>(&self, path: P) -> Result<FormDeclaration> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading declaration");
        FormDeclaration::load(path)
    }

    /// Renders the declared controls, or only the `selection`-th one (1-based).
    pub fn render(
        &self,
        scope: Scope,
        decl: &FormDeclaration,
        selection: Option<usize>,
    ) -> Result<commands::CmdResult> {
        let settings = self.settings(scope)?;
        commands::render::run(decl, selection, &settings)
    }

    pub fn check(&self, scope: Scope, decl: &FormDeclaration) -> Result<commands::CmdResult> {
        let settings = self.settings(scope)?;
        commands::check::run(decl, &settings)
    }

    pub fn keys(&self, applies: Option<Applies>) -> Result<commands::CmdResult> {
        commands::keys::run(applies)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn init(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths, scope)
    }

    pub fn paths(&self) -> &commands::MatformPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MatformPaths, MessageLevel, RenderedControl};

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn api() -> (TempDir, MatformApi) {
        let dir = tempdir().unwrap();
        let paths = MatformPaths {
            project: Some(dir.path().join(".matform")),
            global: dir.path().join("global"),
        };
        (dir, MatformApi::new(paths))
    }

    #[test]
    fn test_render_uses_scope_settings() {
        let (_dir, api) = api();
        api.config(
            Scope::Project,
            ConfigAction::Set("attribute-per-line".into(), "true".into()),
        )
        .unwrap();

        let decl = FormDeclaration::from_json(
            r#"{"controls":[{"kind":"textbox","Name":"a","ReadOnly":true}]}"#,
        )
        .unwrap();

        let project = api.render(Scope::Project, &decl, None).unwrap();
        assert!(project.rendered[0].markup.contains('\n'));

        let global = api.render(Scope::Global, &decl, None).unwrap();
        assert!(!global.rendered[0].markup.contains('\n'));
    }

    #[test]
    fn test_check_uses_scope_policy() {
        let (_dir, api) = api();
        api.config(
            Scope::Global,
            ConfigAction::Set("conflict-policy".into(), "reject".into()),
        )
        .unwrap();

        let decl = FormDeclaration::from_json(
            r#"{"controls":[{"kind":"textbox","IsTextArea":true,"IsDatePicker":true}]}"#,
        )
        .unwrap();
        assert!(api.check(Scope::Global, &decl).unwrap().has_errors());
        assert!(!api.check(Scope::Project, &decl).unwrap().has_errors());
    }

    #[test]
    fn test_keys_and_init() {
        let (dir, api) = api();
        assert!(!api.keys(None).unwrap().keys.is_empty());
        api.init(Scope::Project).unwrap();
        assert!(dir.path().join(".matform").is_dir());
    }
}
