//! config command - Show the effective configuration

use anyhow::{Context as _, Result};

use super::load_config;
use crate::cli::Context;
use crate::ui::output;

/// Print the effective configuration as TOML.
///
/// The files it was loaded from are listed on stderr.
pub fn show(ctx: &Context) -> Result<()> {
    let verbosity = ctx.verbosity();
    let config = load_config(ctx)?;

    let sources: Vec<_> = [
        config.global_config_loaded_from(),
        config.project_config_loaded_from(),
    ]
    .into_iter()
    .flatten()
    .map(|p| p.display().to_string())
    .collect();

    if sources.is_empty() {
        output::status("# no config files found, using defaults", verbosity);
    } else {
        output::status(
            format!("# loaded from:\n{}", output::format_list(&sources, "#   ")),
            verbosity,
        );
    }

    let rendered =
        toml::to_string_pretty(&config.effective()).context("Failed to serialize config")?;
    output::result(rendered.trim_end());

    Ok(())
}
