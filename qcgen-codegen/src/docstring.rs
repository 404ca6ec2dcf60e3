//! Width-aware documentation comments.

use crate::{SourceBuilder, text};

impl SourceBuilder {
    /// Write a docstring using the configured delimiter and width.
    ///
    /// See [`docstring_with`](Self::docstring_with).
    pub fn docstring(&mut self, doc: &str) -> &mut Self {
        let delimiter = self.config().doc_delimiter.clone();
        let width = self.config().doc_width;
        self.docstring_with(doc, &delimiter, width)
    }

    /// Write `doc` surrounded by `delimiter`, kept within `width` columns
    /// including the current indentation.
    ///
    /// The text is dedented and trimmed first. A single short line is written
    /// inline; anything else gets the delimiter on its own opening and closing
    /// lines, with every paragraph line word-wrapped and a blank line before
    /// the closing delimiter.
    ///
    /// ```
    /// use qcgen_codegen::SourceBuilder;
    ///
    /// let mut sb = SourceBuilder::default();
    /// sb.docstring_with("Hello world", "###", 72);
    /// assert_eq!(sb.end(), "###Hello world###\n");
    /// ```
    pub fn docstring_with(&mut self, doc: &str, delimiter: &str, width: usize) -> &mut Self {
        let doc = text::normalize(doc);
        let max_width = width.saturating_sub(self.indent_width());
        let lines: Vec<&str> = doc.lines().collect();

        if lines.len() == 1
            && delimiter.chars().count() * 2 + lines[0].chars().count() < max_width
        {
            let line = lines[0];
            return self.writeln(&format!("{delimiter}{line}{delimiter}"));
        }

        self.writeln(delimiter);
        for line in lines {
            if line.trim().is_empty() {
                self.blank();
                continue;
            }
            for segment in text::wrap(line, max_width) {
                self.writeln(&segment);
            }
        }
        self.blank();
        self.writeln(delimiter)
    }
}
