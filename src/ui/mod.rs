//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! All terminal output from CLI commands goes through this module so quiet
//! and debug modes behave the same everywhere. The action adapter is the
//! exception: it speaks the host's own protocol through [`crate::host`].

pub mod output;
