//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! safebranch has two configuration scopes:
//! - **Global**: User-level settings
//! - **Project**: Settings checked into the working tree
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values (both prefixes empty)
//! 2. Global config file
//! 3. Project config file
//! 4. Invocation inputs and CLI flags (not handled here)
//!
//! An explicit config path replaces steps 2 and 3.
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$SAFEBRANCH_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/safebranch/config.toml`
//! 3. `~/.safebranch/config.toml`
//!
//! # Project Config Location
//!
//! `.safebranch.toml` in the working directory.
//!
//! # Example
//!
//! ```no_run
//! use safebranch::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(Some(Path::new("/path/to/project")), None).unwrap();
//! let config = result.config;
//!
//! println!("strip: {}", config.strip_prefix());
//! println!("safe: {}", config.safe_prefix());
//! ```

pub mod schema;

pub use schema::{safe_prefix_concern, SlugSettings};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the project-scope config.
pub const PROJECT_CONFIG_FILE: &str = ".safebranch.toml";

/// Env var naming an explicit global config file.
pub const CONFIG_ENV: &str = "SAFEBRANCH_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence: project overrides global, and unset values
/// fall back to the empty string.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: SlugSettings,
    /// Project configuration (if found)
    pub project: Option<SlugSettings>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the project config file (if loaded)
    project_path: Option<PathBuf>,
}

impl Config {
    /// Build a configuration from in-memory settings, with no backing files.
    pub fn from_settings(global: SlugSettings, project: Option<SlugSettings>) -> Self {
        Config {
            global,
            project,
            global_path: None,
            project_path: None,
        }
    }

    /// Load configuration.
    ///
    /// With `explicit`, only that file is read and it must exist. Otherwise
    /// the global locations are searched, and `project_dir` (if given) is
    /// checked for a project file.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed
    /// or validated. Missing files are not an error (defaults are used).
    pub fn load(
        project_dir: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let (global, global_path, project, project_path) = match explicit {
            Some(path) => (Self::read_settings(path)?, Some(path.to_path_buf()), None, None),
            None => {
                let (global, global_path) = Self::load_global()?;
                let (project, project_path) = match project_dir {
                    Some(dir) => Self::load_project(dir)?,
                    None => (None, None),
                };
                (global, global_path, project, project_path)
            }
        };

        global.validate()?;
        if let Some(ref p) = project {
            p.validate()?;
        }

        let mut warnings = Vec::new();
        for (settings, path) in [(Some(&global), &global_path), (project.as_ref(), &project_path)]
        {
            if let (Some(settings), Some(path)) = (settings, path) {
                if let Some(message) = settings.safe_prefix.as_deref().and_then(safe_prefix_concern)
                {
                    warnings.push(ConfigWarning {
                        message,
                        path: path.clone(),
                    });
                }
            }
        }

        Ok(ConfigLoadResult {
            config: Config {
                global,
                project,
                global_path,
                project_path,
            },
            warnings,
        })
    }

    /// Load global configuration from standard locations.
    fn load_global() -> Result<(SlugSettings, Option<PathBuf>), ConfigError> {
        if let Some(path) = Self::global_candidates()
            .into_iter()
            .find(|path| path.exists())
        {
            let settings = Self::read_settings(&path)?;
            return Ok((settings, Some(path)));
        }

        Ok((SlugSettings::default(), None))
    }

    /// Global config locations in search order.
    fn global_candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            candidates.push(PathBuf::from(path));
        }
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            candidates.push(PathBuf::from(xdg_home).join("safebranch/config.toml"));
        }
        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join(".safebranch/config.toml"));
        }

        candidates
    }

    /// Load project configuration from `dir`.
    fn load_project(dir: &Path) -> Result<(Option<SlugSettings>, Option<PathBuf>), ConfigError> {
        let path = dir.join(PROJECT_CONFIG_FILE);
        if !path.exists() {
            return Ok((None, None));
        }
        let settings = Self::read_settings(&path)?;
        Ok((Some(settings), Some(path)))
    }

    /// Read and parse a config file.
    fn read_settings(path: &Path) -> Result<SlugSettings, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Get the prefix stripped from source branches.
    ///
    /// Defaults to `""` if not configured.
    pub fn strip_prefix(&self) -> &str {
        self.project
            .as_ref()
            .and_then(|p| p.strip_prefix.as_deref())
            .or(self.global.strip_prefix.as_deref())
            .unwrap_or("")
    }

    /// Get the prefix prepended to branches that do not start with a letter.
    ///
    /// Defaults to `""` if not configured.
    pub fn safe_prefix(&self) -> &str {
        self.project
            .as_ref()
            .and_then(|p| p.safe_prefix.as_deref())
            .or(self.global.safe_prefix.as_deref())
            .unwrap_or("")
    }

    /// The effective settings with every value resolved.
    pub fn effective(&self) -> SlugSettings {
        SlugSettings {
            strip_prefix: Some(self.strip_prefix().to_string()),
            safe_prefix: Some(self.safe_prefix().to_string()),
        }
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded project config file.
    pub fn project_config_loaded_from(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }
}
