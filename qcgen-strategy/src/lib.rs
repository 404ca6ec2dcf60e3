//! Strategy catalog, manifest and algorithm renderer for qcgen.
//!
//! # Module Organization
//!
//! - [`catalog`] - The framework models a strategy is assembled from
//! - [`Strategy`] - A complete set of selections
//! - [`StrategyManifest`] - Partial selections read from `strategy.toml`
//! - [`AlgorithmRenderer`] - Turns a strategy into algorithm source
//! - [`StrategyPy`] - The generated `strategy.py` file

mod algorithm;
pub mod catalog;
mod error;
mod files;
mod manifest;
mod strategy;

pub use algorithm::{AlgorithmRenderer, render};
pub use error::{Error, Result, SourceContext, ValueError};
pub use files::{STRATEGY_FILE, StrategyPy};
pub use manifest::{MANIFEST_FILE, StrategyManifest, parse_manifest};
pub use strategy::{Cash, DEFAULT_NAME, StartDate, Strategy, class_name};
