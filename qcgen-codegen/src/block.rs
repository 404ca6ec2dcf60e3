//! Header-plus-indented-body blocks.

use crate::{IndentGuard, SourceBuilder};

impl SourceBuilder {
    /// Start a block structure (class, function, `if`, `for`, ...).
    ///
    /// Writes `blank_lines_before` blank lines and the `header` at the current
    /// level, then raises the indentation until the returned guard is dropped.
    ///
    /// ```
    /// use qcgen_codegen::SourceBuilder;
    ///
    /// let mut sb = SourceBuilder::default();
    /// {
    ///     let mut class = sb.block("class Hello(object):", 2);
    ///     let mut init = class.block("def __init__(self, what='World'):", 1);
    ///     init.writeln("pass");
    /// }
    ///
    /// assert_eq!(
    ///     sb.end(),
    ///     "\n\nclass Hello(object):\n\n    def __init__(self, what='World'):\n        pass\n"
    /// );
    /// ```
    pub fn block(&mut self, header: &str, blank_lines_before: usize) -> IndentGuard<'_> {
        for _ in 0..blank_lines_before {
            self.blank();
        }
        self.writeln(header);
        self.indent()
    }

    /// Write a block whose body is produced by `f`.
    ///
    /// The indentation is restored before the result of `f` is returned, so an
    /// error from the body leaves the level where it was before the block.
    pub fn with_block<T, E, F>(
        &mut self,
        header: &str,
        blank_lines_before: usize,
        f: F,
    ) -> Result<T, E>
    where
        F: FnOnce(&mut SourceBuilder) -> Result<T, E>,
    {
        let mut body = self.block(header, blank_lines_before);
        f(&mut *body)
    }
}
