use crate::config::MatformConfig;
use crate::controls::KeySpec;
use crate::error::{MatformError, Result};
use crate::model::Scope;
use crate::render::TagBuilder;
use serde::Serialize;
use std::path::PathBuf;

pub mod check;
pub mod config;
pub mod init;
pub mod keys;
pub mod render;

#[derive(Debug, Clone)]
pub struct MatformPaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl MatformPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| MatformError::Config("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One control after a render pass.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedControl {
    /// 1-based position in the declaration
    pub index: usize,
    pub label: &'static str,
    pub markup: String,
    pub tag: TagBuilder,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub rendered: Vec<RenderedControl>,
    pub keys: Vec<&'static KeySpec>,
    pub config: Option<MatformConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_rendered(mut self, rendered: Vec<RenderedControl>) -> Self {
        self.rendered = rendered;
        self
    }

    pub fn with_keys(mut self, keys: Vec<&'static KeySpec>) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_config(mut self, config: MatformConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
