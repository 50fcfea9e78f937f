//! core::naming
//!
//! Multi-dev branch naming rules.
//!
//! # Overview
//!
//! Ephemeral multi-dev environments are named after the branch that spawned
//! them, but environment names are far more restricted than Git branch names.
//! [`normalize`] derives a short slug from a branch name by applying, in order:
//!
//! 1. [`strip_prefix`] - remove a configured leading prefix (once, exact match)
//! 2. [`sanitize`] - replace every character outside `[A-Za-z0-9-]` with `-`
//! 3. [`ensure_leading_letter`] - prepend the safe prefix if needed
//! 4. [`truncate`] - keep the first [`MAX_SLUG_LEN`] characters
//! 5. ASCII lowercase
//! 6. [`trim_trailing_hyphens`]
//!
//! Truncation runs before lowercasing and trimming, so a slug may end up
//! shorter than [`MAX_SLUG_LEN`] once trailing hyphens are dropped. Case
//! folding is ASCII-only so it can never lengthen the truncated string.
//!
//! The safe prefix is inserted verbatim and the result is not re-checked.
//! A safe prefix that does not start with a letter yields a slug that does
//! not start with a letter either.

/// Maximum number of characters in a multi-dev slug.
pub const MAX_SLUG_LEN: usize = 11;

/// Derive a multi-dev safe branch name.
///
/// # Example
///
/// ```
/// use safebranch::core::naming::normalize;
///
/// assert_eq!(normalize("Feature/ABC-123", "Feature/", "z"), "abc-123");
/// assert_eq!(normalize("123-build", "", "z"), "z123-build");
/// assert_eq!(normalize("feat/long-branch-name-here", "feat/", "z"), "long-branch");
/// assert_eq!(normalize("---", "", "q"), "q");
/// assert_eq!(normalize("", "", ""), "");
/// ```
pub fn normalize(source: &str, strip: &str, safe: &str) -> String {
    let branch = strip_prefix(source, strip);
    let branch = sanitize(branch);
    let branch = ensure_leading_letter(branch, safe);
    let branch = truncate(&branch, MAX_SLUG_LEN).to_ascii_lowercase();
    trim_trailing_hyphens(&branch).to_string()
}

/// Remove `prefix` from the front of `branch`, once.
///
/// An empty prefix, or one that only occurs later in the string, leaves the
/// branch untouched. Matching is case-sensitive.
pub fn strip_prefix<'a>(branch: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return branch;
    }
    branch.strip_prefix(prefix).unwrap_or(branch)
}

/// Replace every character outside `[A-Za-z0-9-]` with a hyphen.
///
/// Uppercase letters pass through; they are folded later.
pub fn sanitize(branch: &str) -> String {
    branch
        .chars()
        .map(|c| if is_slug_char(c) { c } else { '-' })
        .collect()
}

/// Prepend `safe` unless `branch` already starts with an ASCII letter.
pub fn ensure_leading_letter(branch: String, safe: &str) -> String {
    if starts_with_letter(&branch) {
        branch
    } else {
        format!("{safe}{branch}")
    }
}

/// Keep at most the first `max` characters of `s`.
pub fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Drop any run of hyphens at the end of `s`.
pub fn trim_trailing_hyphens(s: &str) -> &str {
    s.trim_end_matches('-')
}

/// Whether `c` survives sanitization unchanged.
pub fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Whether `s` begins with an ASCII letter (either case).
pub fn starts_with_letter(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}
