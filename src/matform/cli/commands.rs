//! # CLI Layer
//!
//! The CLI is **one possible client** of matform and the only place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the API and scope
//! - `handle_*()`: Per-command handlers that call the API and print the result
//!
//! `render` writes markup to stdout and everything else (warnings, notices) to stderr, so its
//! output can be redirected straight into a template file.

use super::logging;
use super::render::{
    eprint_messages, print_messages, render_attrs, render_config, render_keys, render_markup,
};
use super::setup::{Cli, Commands, KeyScope, OutputFormat};
use clap::Parser;
use directories::ProjectDirs;
use matform::api::{ConfigAction, MatformApi, MatformPaths};
use matform::error::{MatformError, Result};
use matform::model::Scope;
use serde_json::json;
use std::path::{Path, PathBuf};

const PROJECT_DIR: &str = ".matform";
const GLOBAL_DATA_ENV: &str = "MATFORM_GLOBAL_DATA";

struct AppContext {
    api: MatformApi,
    scope: Scope,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Commands::Render {
            file,
            control,
            output,
        } => handle_render(&ctx, &file, control, output),
        Commands::Check { file } => handle_check(&ctx, &file),
        Commands::Keys { for_control } => handle_keys(&ctx, for_control),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
        Commands::Init => handle_init(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let paths = MatformPaths {
        project: Some(cwd.join(PROJECT_DIR)),
        global: global_data_dir()?,
    };

    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Project
    };
    tracing::debug!(?scope, ?paths, "initialized context");

    Ok(AppContext {
        api: MatformApi::new(paths),
        scope,
    })
}

fn global_data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(GLOBAL_DATA_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "matform", "matform")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| MatformError::Config("Could not determine the data directory".into()))
}

fn handle_render(
    ctx: &AppContext,
    file: &Path,
    control: Option<usize>,
    output: OutputFormat,
) -> Result<()> {
    let decl = ctx.api.load_declaration(file)?;
    let result = ctx.api.render(ctx.scope, &decl, control)?;

    match output {
        OutputFormat::Markup => print!("{}", render_markup(&result.rendered)),
        OutputFormat::Attrs => print!("{}", render_attrs(&result.rendered)),
        OutputFormat::Json => {
            let value = json!({
                "controls": result.rendered,
                "messages": result.messages,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
            return Ok(());
        }
    }
    eprint_messages(&result.messages);
    Ok(())
}

fn handle_check(ctx: &AppContext, file: &Path) -> Result<()> {
    let decl = ctx.api.load_declaration(file)?;
    let result = ctx.api.check(ctx.scope, &decl)?;
    print_messages(&result.messages);
    if result.has_errors() {
        return Err(MatformError::Api(format!(
            "{} has invalid controls",
            file.display()
        )));
    }
    Ok(())
}

fn handle_keys(ctx: &AppContext, for_control: Option<KeyScope>) -> Result<()> {
    let result = ctx.api.keys(for_control.map(Into::into))?;
    print!("{}", render_keys(&result.keys));
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(ctx.scope, action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    if result.has_errors() {
        return Err(MatformError::Config("invalid setting".into()));
    }
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init(ctx.scope)?;
    print_messages(&result.messages);
    Ok(())
}
