//! normalize command - Derive a multi-dev slug from a branch name

use anyhow::{Context as _, Result};
use serde::Serialize;

use super::load_config;
use crate::cli::Context;
use crate::core::config::safe_prefix_concern;
use crate::core::naming::{self, MAX_SLUG_LEN};
use crate::host::summary_line;
use crate::ui::output::{self, Verbosity};

/// JSON shape printed by `--json`.
#[derive(Debug, Serialize)]
struct NormalizeOutput<'a> {
    branch_name: &'a str,
    source: &'a str,
}

/// Normalize `branch` and print the slug.
///
/// Prefix flags override the configured prefixes.
pub fn normalize(
    ctx: &Context,
    branch: &str,
    strip_prefix: Option<&str>,
    safe_prefix: Option<&str>,
    json: bool,
) -> Result<()> {
    let verbosity = ctx.verbosity();
    let config = load_config(ctx)?;

    let strip = strip_prefix.unwrap_or(config.strip_prefix());
    let safe = safe_prefix.unwrap_or(config.safe_prefix());

    // Configured prefixes were already checked while loading.
    if let Some(concern) = safe_prefix.and_then(safe_prefix_concern) {
        output::warn(concern, verbosity);
    }

    trace_steps(branch, strip, safe, verbosity);
    let slug = naming::normalize(branch, strip, safe);

    if json {
        let rendered = serde_json::to_string(&NormalizeOutput {
            branch_name: &slug,
            source: branch,
        })
        .context("Failed to serialize output")?;
        output::result(rendered);
    } else {
        output::result(&slug);
    }
    output::status(summary_line(&slug, branch), verbosity);

    Ok(())
}

/// Print every intermediate value in debug mode.
fn trace_steps(branch: &str, strip: &str, safe: &str, verbosity: Verbosity) {
    if verbosity != Verbosity::Debug {
        return;
    }

    let stripped = naming::strip_prefix(branch, strip);
    output::debug(format!("strip {strip:?}: {stripped:?}"), verbosity);

    let sanitized = naming::sanitize(stripped);
    output::debug(format!("sanitize: {sanitized:?}"), verbosity);

    let led = naming::ensure_leading_letter(sanitized, safe);
    output::debug(format!("leading letter ({safe:?}): {led:?}"), verbosity);

    let truncated = naming::truncate(&led, MAX_SLUG_LEN);
    output::debug(format!("truncate {MAX_SLUG_LEN}: {truncated:?}"), verbosity);

    let lowered = truncated.to_ascii_lowercase();
    output::debug(format!("lowercase: {lowered:?}"), verbosity);

    output::debug(
        format!("trim: {:?}", naming::trim_trailing_hyphens(&lowered)),
        verbosity,
    );
}
