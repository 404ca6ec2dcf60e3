//! Writing generated files into an output directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};

/// What to do when the target file already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Leave the existing file untouched.
    #[default]
    Never,
    /// Replace the existing file.
    Always,
}

/// Outcome of [`GeneratedFile::write`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    Created(PathBuf),
    Replaced(PathBuf),
    /// The file existed and [`Overwrite::Never`] applied.
    Skipped(PathBuf),
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            Self::Created(path) | Self::Replaced(path) | Self::Skipped(path) => path,
        }
    }

    pub fn is_written(&self) -> bool {
        !matches!(self, Self::Skipped(_))
    }
}

/// A file produced by the generator.
pub trait GeneratedFile {
    /// Name of the file inside the output directory.
    fn file_name(&self) -> &str;

    fn render(&self) -> String;

    fn overwrite(&self) -> Overwrite {
        Overwrite::Never
    }

    /// Line written above the rendered content.
    fn header(&self) -> Option<&str> {
        None
    }

    /// Exactly what [`write`](Self::write) puts on disk.
    fn contents(&self) -> String {
        match self.header() {
            Some(header) => format!("{header}\n{}", self.render()),
            None => self.render(),
        }
    }

    /// Write into `dir`, creating it when needed.
    fn write(&self, dir: &Path) -> Result<WriteResult> {
        let path = dir.join(self.file_name());
        let existed = path.exists();

        if existed && self.overwrite() == Overwrite::Never {
            tracing::info!(path = %path.display(), "file exists, skipping");
            return Ok(WriteResult::Skipped(path));
        }

        let contents = self.contents();
        write_file(&path, &contents)?;
        tracing::debug!(
            path = %path.display(),
            bytes = contents.len(),
            replaced = existed,
            "wrote file"
        );

        Ok(if existed {
            WriteResult::Replaced(path)
        } else {
            WriteResult::Created(path)
        })
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, contents).wrap_err_with(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    struct Notes {
        overwrite: Overwrite,
        header: Option<&'static str>,
    }

    impl Notes {
        fn new() -> Self {
            Self {
                overwrite: Overwrite::Never,
                header: None,
            }
        }
    }

    impl GeneratedFile for Notes {
        fn file_name(&self) -> &str {
            "notes.txt"
        }

        fn render(&self) -> String {
            "hello\n".to_string()
        }

        fn overwrite(&self) -> Overwrite {
            self.overwrite
        }

        fn header(&self) -> Option<&str> {
            self.header
        }
    }

    #[test]
    fn test_creates_missing_directories() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a").join("b");

        let result = Notes::new().write(&dir).unwrap();

        assert_eq!(result, WriteResult::Created(dir.join("notes.txt")));
        assert_eq!(fs::read_to_string(dir.join("notes.txt")).unwrap(), "hello\n");
    }

    #[test]
    fn test_existing_file_is_skipped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");
        fs::write(&path, "original").unwrap();

        let result = Notes::new().write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Skipped(path.clone()));
        assert!(!result.is_written());
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_existing_file_is_replaced() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");
        fs::write(&path, "original").unwrap();

        let notes = Notes {
            overwrite: Overwrite::Always,
            ..Notes::new()
        };
        let result = notes.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Replaced(path.clone()));
        assert_eq!(result.path(), path.as_path());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_header_is_prepended() {
        let notes = Notes {
            header: Some("# generated"),
            ..Notes::new()
        };
        assert_eq!(notes.contents(), "# generated\nhello\n");

        let temp = TempDir::new().unwrap();
        notes.write(temp.path()).unwrap();
        assert_eq!(
            fs::read_to_string(temp.path().join("notes.txt")).unwrap(),
            "# generated\nhello\n"
        );
    }
}
