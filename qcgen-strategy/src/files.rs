use qcgen_codegen::BuilderConfig;
use qcgen_core::{GeneratedFile, Overwrite};

use crate::{AlgorithmRenderer, Strategy};

/// Default output filename.
pub const STRATEGY_FILE: &str = "strategy.py";

const GENERATED_HEADER: &str = "# Generated by qcgen";

/// The generated algorithm file.
///
/// An existing file is left alone unless [`force`](Self::force) is set.
/// The first line marks the file as generated.
pub struct StrategyPy<'a> {
    strategy: &'a Strategy,
    config: BuilderConfig,
    file_name: String,
    force: bool,
}

impl<'a> StrategyPy<'a> {
    pub fn new(strategy: &'a Strategy) -> Self {
        Self {
            strategy,
            config: BuilderConfig::default(),
            file_name: STRATEGY_FILE.to_string(),
            force: false,
        }
    }

    pub fn with_config(mut self, config: BuilderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Overwrite an existing file.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

impl GeneratedFile for StrategyPy<'_> {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn render(&self) -> String {
        AlgorithmRenderer::new(self.strategy)
            .with_config(self.config.clone())
            .render()
    }

    fn overwrite(&self) -> Overwrite {
        if self.force {
            Overwrite::Always
        } else {
            Overwrite::Never
        }
    }

    fn header(&self) -> Option<&str> {
        Some(GENERATED_HEADER)
    }
}
