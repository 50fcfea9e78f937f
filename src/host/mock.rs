//! host::mock
//!
//! In-memory host for deterministic testing.
//!
//! # Design
//!
//! `MemoryHost` keeps inputs, outputs, failure messages and log lines in
//! memory and can be told to fail a specific capability.
//!
//! # Example
//!
//! ```
//! use safebranch::host::{Host, mock::MemoryHost};
//!
//! let mut host = MemoryHost::new().with_input("branch_name", "main");
//! assert_eq!(host.read_config("branch_name").unwrap().as_deref(), Some("main"));
//! assert_eq!(host.read_config("safe_prefix").unwrap(), None);
//!
//! host.write_result("branch_name", "main").unwrap();
//! assert_eq!(host.output("branch_name"), Some("main"));
//! ```

use std::collections::HashMap;

use super::traits::{Host, HostError};

/// Which capability should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail every `read_config` with the given error.
    ReadConfig(HostError),
    /// Fail every `write_result` with the given error.
    WriteResult(HostError),
}

/// In-memory host.
#[derive(Debug, Default, Clone)]
pub struct MemoryHost {
    inputs: HashMap<String, String>,
    outputs: HashMap<String, String>,
    failures: Vec<String>,
    warnings: Vec<String>,
    logs: Vec<String>,
    fail_on: Option<FailOn>,
}

impl MemoryHost {
    /// Create a host with no inputs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an input.
    pub fn with_input(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.inputs.insert(name.into(), value.into());
        self
    }

    /// Configure a capability to fail.
    pub fn fail_on(mut self, fail_on: FailOn) -> Self {
        self.fail_on = Some(fail_on);
        self
    }

    /// Get a published output.
    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs.get(name).map(String::as_str)
    }

    /// Failure messages reported so far.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Warnings raised so far.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Log lines written so far.
    pub fn logs(&self) -> &[String] {
        &self.logs
    }
}

impl Host for MemoryHost {
    fn read_config(&self, name: &str) -> Result<Option<String>, HostError> {
        if let Some(FailOn::ReadConfig(err)) = &self.fail_on {
            return Err(err.clone());
        }
        Ok(self.inputs.get(name).cloned())
    }

    fn write_result(&mut self, name: &str, value: &str) -> Result<(), HostError> {
        if let Some(FailOn::WriteResult(err)) = &self.fail_on {
            return Err(err.clone());
        }
        self.outputs.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn report_failure(&mut self, message: &str) {
        self.failures.push(message.to_string());
    }

    fn info(&mut self, line: &str) {
        self.logs.push(line.to_string());
    }

    fn warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
