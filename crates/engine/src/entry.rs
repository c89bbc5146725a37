use crate::error::{EngineError, Result};
use std::path::{Path, PathBuf};

/// A file found by the walker: the directory containing it and its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileEntry {
    pub dir: PathBuf,
    pub name: String,
}

impl FileEntry {
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
        }
    }

    /// Build an entry from a full path as reported by the walker.
    ///
    /// Returns `Ok(None)` for paths without a file name component (`/`, `..`).
    ///
    /// # Errors
    /// Returns [`EngineError::NonUtf8Path`] if any part of `path` is not UTF-8;
    /// printing it would produce a path that does not exist.
    pub fn from_path(path: &Path) -> Result<Option<Self>> {
        if path.to_str().is_none() {
            return Err(EngineError::NonUtf8Path(path.to_path_buf()));
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            return Ok(None);
        };
        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(Some(Self {
            dir,
            name: name.to_string(),
        }))
    }

    /// Directory joined with the file name; used verbatim as a link target.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }

    /// File name with `suffix` stripped, or `None` if the name does not end with it.
    ///
    /// The match is a literal string comparison, not an extension check.
    pub fn label(&self, suffix: &str) -> Option<&str> {
        self.name.strip_suffix(suffix)
    }
}
