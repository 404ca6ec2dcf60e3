//! Core utilities and types for the qcgen strategy generator.
//!
//! This crate provides the file persistence rules and string helpers shared
//! by the generator crates.

mod file;
mod utils;

// File operations
pub use file::{GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{is_identifier, to_pascal_case};
