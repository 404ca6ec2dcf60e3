//! Line-oriented source builder with scoped indentation.

use std::ops::{Deref, DerefMut};

use crate::{BuilderConfig, IndentManager, Result};

/// Accumulates lines of generated source with automatic indentation.
///
/// Every line written with [`write`](Self::write) or
/// [`writeln`](Self::writeln) is prefixed with the indent unit repeated once
/// per level. Blank lines are never indented.
///
/// Indentation is normally raised with [`indent`](Self::indent), which returns
/// an [`IndentGuard`]. The guard restores the level when dropped, so the depth
/// stays balanced when the body returns early with `?` or panics.
///
/// ```
/// use qcgen_codegen::SourceBuilder;
///
/// let mut sb = SourceBuilder::default();
/// sb.writeln("def hello_world():");
/// {
///     let mut body = sb.indent();
///     body.writeln("print('Hello World')");
/// }
/// sb.writeln("hello_world()");
///
/// assert_eq!(sb.end(), "def hello_world():\n    print('Hello World')\nhello_world()\n");
/// ```
///
/// When a guard cannot be threaded through the code, use
/// [`push_indent`](Self::push_indent) and [`dedent`](Self::dedent) instead.
/// Mixing both styles on the same level is not advised.
#[derive(Debug, Clone)]
pub struct SourceBuilder {
    config: BuilderConfig,
    indent: IndentManager,
    buffer: String,
}

impl SourceBuilder {
    /// Create an empty builder with the given configuration.
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            indent: IndentManager::new(config.indent_unit.clone()),
            config,
            buffer: String::new(),
        }
    }

    /// Create an empty builder with a custom indent unit.
    pub fn with_indent_unit(unit: impl Into<String>) -> Self {
        Self::new(BuilderConfig::default().with_indent_unit(unit))
    }

    /// Write `text` at the current indentation level, without a newline.
    pub fn write(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(&self.indent.render());
        self.buffer.push_str(text);
        self
    }

    /// Write a line at the current indentation level.
    ///
    /// An empty `text` writes only a newline, without indentation.
    pub fn writeln(&mut self, text: &str) -> &mut Self {
        if !text.is_empty() {
            self.write(text);
        }
        self.buffer.push('\n');
        self
    }

    /// Write a blank line.
    pub fn blank(&mut self) -> &mut Self {
        self.writeln("")
    }

    /// Raise the indentation level until the returned guard is dropped.
    pub fn indent(&mut self) -> IndentGuard<'_> {
        self.indent.indent();
        IndentGuard { builder: self }
    }

    /// Raise the indentation level without a guard.
    ///
    /// Pair every call with a [`dedent`](Self::dedent).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent.indent();
        self
    }

    /// Lower the indentation level.
    ///
    /// Fails with [`Error::DedentUnderflow`](crate::Error::DedentUnderflow)
    /// when the level is already zero.
    pub fn dedent(&mut self) -> Result<&mut Self> {
        self.indent.dedent()?;
        Ok(self)
    }

    /// Return everything written so far and reset the indentation level.
    ///
    /// The buffer is kept: a later call returns the whole history again, not
    /// just what was written in between. Use [`truncate`](Self::truncate) to
    /// start over.
    pub fn end(&mut self) -> String {
        self.indent.reset();
        self.buffer.clone()
    }

    /// Discard the buffer and reset the indentation level.
    pub fn truncate(&mut self) {
        tracing::debug!(discarded = self.buffer.len(), "truncating source buffer");
        self.buffer = String::new();
        self.indent.reset();
    }

    /// Release the builder at the end of a generation session.
    ///
    /// Same as [`truncate`](Self::truncate).
    pub fn close(&mut self) {
        self.truncate();
    }

    /// Current indentation level.
    pub fn depth(&self) -> usize {
        self.indent.level()
    }

    /// Number of characters taken by the current indent prefix.
    pub(crate) fn indent_width(&self) -> usize {
        self.indent.width()
    }

    /// String repeated once per indentation level.
    pub fn indent_unit(&self) -> &str {
        self.indent.unit()
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for SourceBuilder {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}

/// Scope handle returned by [`SourceBuilder::indent`] and
/// [`SourceBuilder::block`].
///
/// Dereferences to the builder, so the body is written through the guard.
/// Dropping it lowers the indentation level by exactly one.
#[derive(Debug)]
#[must_use = "the indentation is lowered again as soon as the guard is dropped"]
pub struct IndentGuard<'a> {
    builder: &'a mut SourceBuilder,
}

impl Deref for IndentGuard<'_> {
    type Target = SourceBuilder;

    fn deref(&self) -> &Self::Target {
        self.builder
    }
}

impl DerefMut for IndentGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.builder
    }
}

impl Drop for IndentGuard<'_> {
    fn drop(&mut self) {
        // A manual dedent (or end/truncate) inside the scope already took
        // this level; there is nothing left to release.
        if self.builder.indent.dedent().is_err() {
            tracing::warn!("indent guard released at level zero");
        }
    }
}
