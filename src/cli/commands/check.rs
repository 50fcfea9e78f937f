//! check command - Validate a multi-dev slug

use anyhow::{bail, Result};

use crate::cli::Context;
use crate::core::types::BranchSlug;
use crate::ui::output;

/// Check `slug` against the multi-dev naming rules.
///
/// Prints `ok` on success. Fails listing every broken rule otherwise.
pub fn check(ctx: &Context, slug: &str) -> Result<()> {
    let violations = BranchSlug::violations(slug);
    if !violations.is_empty() {
        bail!(
            "'{}' is not a valid multi-dev slug:\n{}",
            slug,
            output::format_list(&violations, "  - ")
        );
    }

    output::debug(format!("{slug:?} passed all rules"), ctx.verbosity());
    output::result("ok");
    Ok(())
}
