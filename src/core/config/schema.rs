//! core::config::schema
//!
//! Configuration schema types.
//!
//! Both the global and the project config files share [`SlugSettings`].
//!
//! # Validation
//!
//! Prefixes containing control characters are rejected. A safe prefix that
//! would let a slug break the naming contract only produces a warning, since
//! the normalizer applies it verbatim either way.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::naming::{is_slug_char, starts_with_letter};

/// Slug settings (global or project scope).
///
/// # Example
///
/// ```toml
/// strip_prefix = "feature/"
/// safe_prefix = "md"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SlugSettings {
    /// Literal text removed from the front of the source branch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strip_prefix: Option<String>,

    /// Literal text prepended when the branch does not start with a letter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe_prefix: Option<String>,
}

impl SlugSettings {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a prefix contains control characters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("strip_prefix", &self.strip_prefix),
            ("safe_prefix", &self.safe_prefix),
        ] {
            if let Some(value) = value {
                if value.chars().any(|c| c.is_control()) {
                    return Err(ConfigError::InvalidValue(format!(
                        "{key} cannot contain control characters"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Explain why `safe_prefix` may yield slugs outside the naming contract.
///
/// Returns `None` when the prefix is harmless.
pub fn safe_prefix_concern(safe_prefix: &str) -> Option<String> {
    if !starts_with_letter(safe_prefix) {
        return Some(format!(
            "safe_prefix '{safe_prefix}' does not start with a letter; \
             branches starting with a digit or symbol will not either"
        ));
    }
    if let Some(c) = safe_prefix.chars().find(|&c| !is_slug_char(c)) {
        return Some(format!(
            "safe_prefix '{safe_prefix}' contains '{c}', which is not allowed in a slug"
        ));
    }
    None
}
