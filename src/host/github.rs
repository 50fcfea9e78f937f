//! host::github
//!
//! GitHub Actions host.
//!
//! # Protocol
//!
//! - Inputs arrive as `INPUT_<NAME>` environment variables (name upper-cased,
//!   spaces replaced by `_`). Values are trimmed. An unset variable is an
//!   absent input.
//! - Outputs are appended to the file named by `$GITHUB_OUTPUT` using the
//!   `name<<DELIMITER` block form with a random delimiter. Without
//!   `$GITHUB_OUTPUT` the legacy `::set-output` workflow command is printed.
//! - Failures are printed as `::error::` workflow commands. The caller is
//!   responsible for the non-zero exit code.
//! - Warnings are printed as `::warning::` workflow commands.
//! - Log lines go to stdout verbatim.

use std::collections::HashMap;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::traits::{Host, HostError};

/// Env var naming the step output file.
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// GitHub Actions host writing workflow commands to `W`.
pub struct ActionsHost<W: Write = io::Stdout> {
    env: HashMap<OsString, OsString>,
    output_file: Option<PathBuf>,
    out: W,
}

impl ActionsHost<io::Stdout> {
    /// Create a host from the process environment and stdout.
    pub fn from_env() -> Self {
        Self::new(std::env::vars_os(), io::stdout())
    }
}

impl<W: Write> ActionsHost<W> {
    /// Create a host from explicit environment variables and writer.
    pub fn new<I, K, V>(vars: I, out: W) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let env: HashMap<OsString, OsString> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let output_file = env
            .get(&OsString::from(GITHUB_OUTPUT_ENV))
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Self {
            env,
            output_file,
            out,
        }
    }

    /// Consume the host and return its writer.
    pub fn into_writer(self) -> W {
        self.out
    }

    fn append_output_file(&self, path: &Path, name: &str, value: &str) -> Result<(), HostError> {
        let write_err = |reason: String| HostError::WriteOutput {
            name: name.to_string(),
            reason,
        };

        let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
        if name.contains(&delimiter) || value.contains(&delimiter) {
            return Err(write_err(format!(
                "value must not contain the delimiter '{delimiter}'"
            )));
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| write_err(format!("{}: {e}", path.display())))?;

        write!(file, "{name}<<{delimiter}\n{value}\n{delimiter}\n")
            .map_err(|e| write_err(format!("{}: {e}", path.display())))
    }
}

impl<W: Write> Host for ActionsHost<W> {
    fn read_config(&self, name: &str) -> Result<Option<String>, HostError> {
        let key = input_env_key(name);
        match self.env.get(&OsString::from(&key)) {
            None => Ok(None),
            Some(raw) => {
                let value = raw
                    .clone()
                    .into_string()
                    .map_err(|_| HostError::InvalidInput {
                        name: name.to_string(),
                        reason: format!("{key} is not valid UTF-8"),
                    })?;
                Ok(Some(value.trim().to_string()))
            }
        }
    }

    fn write_result(&mut self, name: &str, value: &str) -> Result<(), HostError> {
        match self.output_file.clone() {
            Some(path) => self.append_output_file(&path, name, value),
            None => writeln!(
                self.out,
                "::set-output name={}::{}",
                escape_property(name),
                escape_data(value)
            )
            .map_err(|e| HostError::WriteOutput {
                name: name.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn report_failure(&mut self, message: &str) {
        // Nowhere left to report a broken stdout.
        let _ = writeln!(self.out, "::error::{}", escape_data(message));
    }

    fn info(&mut self, line: &str) {
        let _ = writeln!(self.out, "{line}");
    }

    fn warning(&mut self, message: &str) {
        let _ = writeln!(self.out, "::warning::{}", escape_data(message));
    }
}

/// Environment variable holding input `name`.
pub fn input_env_key(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Escape a workflow command message.
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property value.
pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
