//! core
//!
//! Core domain types, naming rules, and configuration for safebranch.
//!
//! # Modules
//!
//! - [`naming`] - Multi-dev branch name normalization
//! - [`types`] - Strong types: BranchSlug
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Normalization is a pure function of its three inputs
//! - Schemas are strict and self-describing
//! - Nothing in this layer performs process I/O beyond reading config files

pub mod config;
pub mod naming;
pub mod types;
