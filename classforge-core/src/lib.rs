//! Core utilities and types for the classforge source generator.
//!
//! This crate provides fundamental string helpers and generated-file
//! output management used by the language-specific generator crates.

mod file;
mod utils;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult, write_file};
// String utilities
pub use utils::{capitalize_first, generic_argument, is_container_type};
