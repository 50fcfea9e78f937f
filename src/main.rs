//! safebranch binary entry point.

use std::process::ExitCode;

use safebranch::cli;
use safebranch::ui::output;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(err) => {
            output::error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
