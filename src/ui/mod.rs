//! ui
//!
//! User-facing output for the command-line front end.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! All CLI output goes through this module to ensure consistent
//! formatting and proper handling of quiet and JSON modes.

pub mod output;
