//! action command - Run as a GitHub Actions step

use std::process::ExitCode;

use anyhow::Result;

use super::{format_warning, load_config_result};
use crate::cli::Context;
use crate::host::github::ActionsHost;
use crate::host::{self, Host};
use crate::ui::output;

/// Run one normalization against the GitHub Actions environment.
///
/// Failures are reported as `::error::` commands and turned into exit code 1
/// rather than an `Err`, so `main` does not print them a second time. Config
/// warnings become `::warning::` annotations.
pub fn action(ctx: &Context) -> Result<ExitCode> {
    let verbosity = ctx.verbosity();
    let mut actions = ActionsHost::from_env();

    let config = match load_config_result(ctx) {
        Ok(result) => {
            for warning in &result.warnings {
                actions.warning(&format_warning(warning));
            }
            result.config
        }
        Err(err) => {
            actions.report_failure(&format!("{err:#}"));
            return Ok(ExitCode::FAILURE);
        }
    };

    match host::run(&mut actions, &config) {
        Ok(slug) => {
            output::debug(format!("published branch_name={slug:?}"), verbosity);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            output::debug(format!("action failed: {err:?}"), verbosity);
            Ok(ExitCode::FAILURE)
        }
    }
}
