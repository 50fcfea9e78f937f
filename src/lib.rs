//! safebranch - derive multi-dev safe branch names
//!
//! Ephemeral "multi-dev" deployment environments need short, lowercase,
//! letter-first names. safebranch turns a CI source branch into such a name,
//! either from the command line or as a GitHub Actions step.
//!
//! # Architecture
//!
//! - [`core`] - Naming rules, the validated slug type, configuration
//! - [`host`] - CI host capabilities and the adapter that runs the normalizer
//! - [`cli`] - Command-line interface layer
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use safebranch::core::naming::normalize;
//!
//! assert_eq!(normalize("feature/JIRA-42_login", "feature/", "md"), "jira-42-log");
//! ```

pub mod cli;
pub mod core;
pub mod host;
pub mod ui;
