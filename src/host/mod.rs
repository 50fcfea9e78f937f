//! host
//!
//! Adapter between a CI host and the branch normalizer.
//!
//! # Architecture
//!
//! The [`Host`] trait is the only way a run touches its environment. [`run`]
//! reads the three inputs, normalizes, publishes the result and logs the
//! summary line. A safe prefix supplied as an input that cannot yield a
//! valid slug is raised through [`Host::warning`] and still used. Any [`HostError`] is caught once, reported through
//! [`Host::report_failure`], and returned; nothing is published on failure.
//!
//! # Modules
//!
//! - `traits`: Core `Host` trait and `HostError`
//! - [`github`]: GitHub Actions implementation (env inputs, `$GITHUB_OUTPUT`)
//! - [`mock`]: In-memory implementation for deterministic testing
//!
//! # Example
//!
//! ```
//! use safebranch::core::config::Config;
//! use safebranch::host::{self, mock::MemoryHost};
//!
//! let mut host = MemoryHost::new()
//!     .with_input("branch_name", "feature/ABC-123")
//!     .with_input("strip_prefix", "feature/");
//!
//! let slug = host::run(&mut host, &Config::default()).unwrap();
//! assert_eq!(slug, "abc-123");
//! assert_eq!(host.output("branch_name"), Some("abc-123"));
//! ```

pub mod github;
pub mod mock;
mod traits;

pub use traits::{Host, HostError};

use crate::core::config::{safe_prefix_concern, Config};
use crate::core::naming::normalize;

/// Input holding the source branch name. Required.
pub const INPUT_BRANCH_NAME: &str = "branch_name";
/// Input holding the prefix to strip.
pub const INPUT_STRIP_PREFIX: &str = "strip_prefix";
/// Input holding the safe prefix.
pub const INPUT_SAFE_PREFIX: &str = "safe_prefix";
/// Output receiving the normalized branch name.
pub const OUTPUT_BRANCH_NAME: &str = "branch_name";

/// Resolved inputs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    /// Raw branch name as supplied.
    pub source: String,
    pub strip_prefix: String,
    pub safe_prefix: String,
    /// Whether `safe_prefix` came from the host rather than config.
    pub safe_prefix_from_input: bool,
}

/// Read the run inputs from `host`.
///
/// Absent prefixes fall back to `config`. An absent branch name is an error.
pub fn read_inputs<H: Host + ?Sized>(host: &H, config: &Config) -> Result<Inputs, HostError> {
    let source = host
        .read_config(INPUT_BRANCH_NAME)?
        .ok_or_else(|| HostError::MissingInput(INPUT_BRANCH_NAME.to_string()))?;
    let strip_prefix = host
        .read_config(INPUT_STRIP_PREFIX)?
        .unwrap_or_else(|| config.strip_prefix().to_string());
    let (safe_prefix, safe_prefix_from_input) = match host.read_config(INPUT_SAFE_PREFIX)? {
        Some(prefix) => (prefix, true),
        None => (config.safe_prefix().to_string(), false),
    };

    Ok(Inputs {
        source,
        strip_prefix,
        safe_prefix,
        safe_prefix_from_input,
    })
}

/// Run one normalization against `host`.
///
/// # Errors
///
/// Returns the `HostError` that stopped the run, after reporting it to the host.
pub fn run<H: Host + ?Sized>(host: &mut H, config: &Config) -> Result<String, HostError> {
    match execute(host, config) {
        Ok(slug) => Ok(slug),
        Err(err) => {
            host.report_failure(&err.to_string());
            Err(err)
        }
    }
}

fn execute<H: Host + ?Sized>(host: &mut H, config: &Config) -> Result<String, HostError> {
    let inputs = read_inputs(host, config)?;
    // Config-file prefixes are checked when the config is loaded. Runners
    // pass undeclared inputs as empty strings, so an empty prefix is quiet.
    if inputs.safe_prefix_from_input && !inputs.safe_prefix.is_empty() {
        if let Some(concern) = safe_prefix_concern(&inputs.safe_prefix) {
            host.warning(&concern);
        }
    }
    let slug = normalize(&inputs.source, &inputs.strip_prefix, &inputs.safe_prefix);

    host.write_result(OUTPUT_BRANCH_NAME, &slug)?;
    host.info(&summary_line(&slug, &inputs.source));

    Ok(slug)
}

/// The diagnostic line logged after a successful run.
pub fn summary_line(slug: &str, source: &str) -> String {
    format!("Multi-dev safe branch name {slug} [from {source}]")
}
