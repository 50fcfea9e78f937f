//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`BranchSlug`] - Validated multi-dev environment name
//!
//! # Validation
//!
//! [`BranchSlug`] enforces the multi-dev naming contract at construction
//! time. [`crate::core::naming::normalize`] returns a plain `String` instead,
//! because a misconfigured safe prefix can produce a name that breaks the
//! contract and that outcome is reported, not corrected.
//!
//! # Examples
//!
//! ```
//! use safebranch::core::types::{BranchSlug, SlugViolation};
//!
//! let slug = BranchSlug::new("abc-123").unwrap();
//! assert_eq!(slug.as_str(), "abc-123");
//!
//! assert_eq!(BranchSlug::new("abc-"), Err(SlugViolation::TrailingHyphen));
//! assert!(BranchSlug::new("Abc").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::naming::MAX_SLUG_LEN;

/// A reason a string is not a valid multi-dev slug.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlugViolation {
    #[error("slug is {len} characters long, at most {max} allowed", max = MAX_SLUG_LEN)]
    TooLong { len: usize },

    #[error("slug contains '{ch}' at position {index}; only a-z, 0-9 and '-' are allowed")]
    InvalidChar { ch: char, index: usize },

    #[error("slug must start with a lowercase letter, found '{0}'")]
    LeadingNonLetter(char),

    #[error("slug cannot end with '-'")]
    TrailingHyphen,
}

/// A validated multi-dev slug.
///
/// Rules:
/// - At most [`MAX_SLUG_LEN`] characters
/// - Only lowercase ASCII letters, digits and `-`
/// - Starts with a lowercase letter
/// - Does not end with `-`
///
/// The empty string is accepted; it is a legitimate result of normalizing
/// an empty branch name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchSlug(String);

impl BranchSlug {
    /// Create a new validated slug.
    ///
    /// # Errors
    ///
    /// Returns the first [`SlugViolation`] found.
    pub fn new(slug: impl Into<String>) -> Result<Self, SlugViolation> {
        let slug = slug.into();
        match Self::violations(&slug).into_iter().next() {
            Some(violation) => Err(violation),
            None => Ok(Self(slug)),
        }
    }

    /// Every rule `slug` breaks, in rule order.
    ///
    /// Only the first disallowed character is listed.
    pub fn violations(slug: &str) -> Vec<SlugViolation> {
        let mut found = Vec::new();

        let len = slug.chars().count();
        if len > MAX_SLUG_LEN {
            found.push(SlugViolation::TooLong { len });
        }

        if let Some((index, ch)) = slug
            .chars()
            .enumerate()
            .find(|&(_, c)| !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'))
        {
            found.push(SlugViolation::InvalidChar { ch, index });
        }

        if let Some(first) = slug.chars().next() {
            if !first.is_ascii_lowercase() {
                found.push(SlugViolation::LeadingNonLetter(first));
            }
        }

        if slug.ends_with('-') {
            found.push(SlugViolation::TrailingHyphen);
        }

        found
    }

    /// Get the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BranchSlug {
    type Error = SlugViolation;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BranchSlug> for String {
    fn from(slug: BranchSlug) -> Self {
        slug.0
    }
}

impl AsRef<str> for BranchSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
