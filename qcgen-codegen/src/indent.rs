//! Indentation level tracking.

use std::fmt;

use crate::{Error, Result, config::DEFAULT_INDENT};

/// Tracks the current nesting depth and renders its indent prefix.
///
/// The depth never goes below zero: [`dedent`](Self::dedent) at depth zero
/// returns [`Error::DedentUnderflow`] and leaves the depth untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentManager {
    unit: String,
    level: usize,
}

impl IndentManager {
    /// Create a manager at depth zero using `unit` for each level.
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            level: 0,
        }
    }

    /// Raise the indentation level by one.
    pub fn indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    /// Lower the indentation level by one.
    pub fn dedent(&mut self) -> Result<&mut Self> {
        if self.level == 0 {
            return Err(Error::DedentUnderflow);
        }
        self.level -= 1;
        Ok(self)
    }

    /// Reset the indentation level to zero.
    pub fn reset(&mut self) {
        self.level = 0;
    }

    /// The indent unit repeated once per level.
    pub fn render(&self) -> String {
        self.unit.repeat(self.level)
    }

    /// Number of characters in the rendered prefix.
    pub fn width(&self) -> usize {
        self.unit.chars().count() * self.level
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }
}

impl Default for IndentManager {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT)
    }
}

impl fmt::Display for IndentManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.level {
            f.write_str(&self.unit)?;
        }
        Ok(())
    }
}
