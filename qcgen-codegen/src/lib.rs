//! Indentation-aware source builder for qcgen.
//!
//! This crate is language-agnostic: it knows nothing about the grammar of the
//! code it produces. Callers feed it lines, indented blocks and doc comments
//! and get back a single string.
//!
//! # Module Organization
//!
//! - [`IndentManager`] - Nesting depth and indent prefix rendering
//! - [`SourceBuilder`] - Line-oriented buffer with scoped indentation
//! - [`IndentGuard`] - Scope handle that restores the depth on drop
//! - [`BuilderConfig`] - Indent unit, docstring width and delimiter
//!
//! # Example
//!
//! ```
//! use qcgen_codegen::SourceBuilder;
//!
//! let mut sb = SourceBuilder::default();
//! {
//!     let mut body = sb.block("def hello_world():", 0);
//!     body.writeln("print('Hello World')");
//! }
//! sb.writeln("hello_world()");
//!
//! assert_eq!(
//!     sb.end(),
//!     "def hello_world():\n    print('Hello World')\nhello_world()\n"
//! );
//! ```

mod block;
mod config;
mod docstring;
mod error;
mod indent;
mod source_builder;
pub mod text;

pub use config::BuilderConfig;
pub use error::{Error, Result};
pub use indent::IndentManager;
pub use source_builder::{IndentGuard, SourceBuilder};
