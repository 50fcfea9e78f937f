//! host::traits
//!
//! Host capability trait and error types.
//!
//! # Design
//!
//! A host is whatever invoked safebranch as a CI step. It supplies named
//! inputs, accepts named outputs, receives the failure message when a run
//! fails, and carries warnings and the diagnostic log line. The normalizer never talks to
//! the host directly; [`super::run`] performs these calls around it.

use thiserror::Error;

/// Errors raised while talking to the host.
///
/// `MissingInput` and `InvalidInput` are input errors. `WriteOutput`
/// covers a host that cannot accept the result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// A required input was not supplied.
    #[error("Input required and not supplied: {0}")]
    MissingInput(String),

    /// An input was supplied but is not usable text.
    #[error("Input '{name}' is invalid: {reason}")]
    InvalidInput { name: String, reason: String },

    /// The host rejected an output.
    #[error("Unable to set output '{name}': {reason}")]
    WriteOutput { name: String, reason: String },
}

/// Capabilities a CI host provides to a run.
pub trait Host {
    /// Read a named input.
    ///
    /// Returns `Ok(None)` when the input is absent. A present but empty
    /// input is `Ok(Some(String::new()))`.
    fn read_config(&self, name: &str) -> Result<Option<String>, HostError>;

    /// Publish a named output.
    fn write_result(&mut self, name: &str, value: &str) -> Result<(), HostError>;

    /// Mark the invocation as failed with `message`.
    fn report_failure(&mut self, message: &str);

    /// Write a line to the host's log stream.
    fn info(&mut self, line: &str);

    /// Surface a non-fatal problem with the run's settings.
    fn warning(&mut self, message: &str);
}
