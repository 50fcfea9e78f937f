//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads configuration where it needs it
//! 2. Calls into `core` or `host`
//! 3. Formats and displays output
//!
//! Handlers return `anyhow::Result`. Only `action` decides its own exit code,
//! because it has already reported the failure through the host.

mod action;
mod check;
mod completion;
mod config_cmd;
mod normalize;

// Re-export command functions for testing and direct invocation
pub use action::action;
pub use check::check;
pub use completion::completion;
pub use config_cmd::show as config_show;
pub use normalize::normalize;

use std::process::ExitCode;

use anyhow::{Context as _, Result};

use super::args::Command;
use super::Context;
use crate::core::config::{Config, ConfigLoadResult, ConfigWarning};
use crate::ui::output;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<ExitCode> {
    match command {
        Command::Normalize {
            branch,
            strip_prefix,
            safe_prefix,
            json,
        } => normalize(
            ctx,
            &branch,
            strip_prefix.as_deref(),
            safe_prefix.as_deref(),
            json,
        )
        .map(|_| ExitCode::SUCCESS),
        Command::Action => action(ctx),
        Command::Check { slug } => check(ctx, &slug).map(|_| ExitCode::SUCCESS),
        Command::Config => config_show(ctx).map(|_| ExitCode::SUCCESS),
        Command::Completion { shell } => completion(shell).map(|_| ExitCode::SUCCESS),
    }
}

/// Load configuration for `ctx`, leaving warnings to the caller.
pub(crate) fn load_config_result(ctx: &Context) -> Result<ConfigLoadResult> {
    let project_dir = match &ctx.cwd {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let result = Config::load(Some(&project_dir), ctx.config.as_deref())
        .context("Failed to load config")?;

    let verbosity = ctx.verbosity();
    if let Some(path) = result.config.global_config_loaded_from() {
        output::debug(format!("loaded config {}", path.display()), verbosity);
    }
    if let Some(path) = result.config.project_config_loaded_from() {
        output::debug(format!("loaded config {}", path.display()), verbosity);
    }

    Ok(result)
}

/// Load configuration for `ctx`, printing any warnings.
pub(crate) fn load_config(ctx: &Context) -> Result<Config> {
    let result = load_config_result(ctx)?;

    let verbosity = ctx.verbosity();
    for warning in &result.warnings {
        output::warn(format_warning(warning), verbosity);
    }

    Ok(result.config)
}

/// A config warning with the file it came from.
pub(crate) fn format_warning(warning: &ConfigWarning) -> String {
    format!("{} ({})", warning.message, warning.path.display())
}
