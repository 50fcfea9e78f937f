//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Look for the project config in that directory
//! - `--config <path>`: Use this config file instead of the search path
//! - `--debug`: Trace each normalization step
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// safebranch - derive multi-dev safe branch names
#[derive(Parser, Debug)]
#[command(name = "safebranch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Look for the project config in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Use this config file instead of the global and project files
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize a branch name into a multi-dev slug
    #[command(
        name = "normalize",
        long_about = "Normalize a branch name into a multi-dev slug.\n\n\
            Strips the configured prefix, replaces anything outside a-z, 0-9 and '-' \
            with '-', prepends the safe prefix if the name does not start with a letter, \
            keeps the first 11 characters, lowercases, and trims trailing hyphens.\n\n\
            The slug is printed on stdout. The summary line goes to stderr.",
        after_help = "\
EXAMPLES:
    safebranch normalize Feature/ABC-123 --strip-prefix Feature/
    abc-123

    safebranch normalize 123-build --safe-prefix z
    z123-build

    # Branch names starting with '-' are accepted as-is
    safebranch normalize --safe-prefix q ---
    q"
    )]
    Normalize {
        /// Source branch name
        #[arg(allow_hyphen_values = true)]
        branch: String,

        /// Prefix to strip from the front of the branch (overrides config)
        #[arg(long, value_name = "PREFIX")]
        strip_prefix: Option<String>,

        /// Prefix to prepend when the branch does not start with a letter (overrides config)
        #[arg(long, value_name = "PREFIX")]
        safe_prefix: Option<String>,

        /// Print a JSON object instead of the bare slug
        #[arg(long)]
        json: bool,
    },

    /// Run as a GitHub Actions step
    #[command(
        name = "action",
        long_about = "Run as a GitHub Actions step.\n\n\
            Reads the branch_name, strip_prefix and safe_prefix inputs from INPUT_* \
            environment variables, writes the branch_name output to $GITHUB_OUTPUT, \
            and logs the summary line. On failure an ::error:: command is printed and \
            the exit code is 1.",
        after_help = "\
WORKFLOW EXAMPLE:
    - id: slug
      run: safebranch action
      env:
        INPUT_BRANCH_NAME: ${{ github.head_ref }}
        INPUT_STRIP_PREFIX: feature/
        INPUT_SAFE_PREFIX: md
    - run: echo \"${{ steps.slug.outputs.branch_name }}\""
    )]
    Action,

    /// Check whether a string is a valid multi-dev slug
    Check {
        /// Candidate slug
        #[arg(allow_hyphen_values = true)]
        slug: String,
    },

    /// Show the effective configuration
    Config,

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
INSTALLATION:
    # Bash
    safebranch completion bash > /etc/bash_completion.d/safebranch

    # Zsh
    safebranch completion zsh > \"${fpath[1]}/_safebranch\"

    # Fish
    safebranch completion fish > ~/.config/fish/completions/safebranch.fish

    # PowerShell
    safebranch completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
