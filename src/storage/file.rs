//! Single-file storage backend.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ToolcatError};

use super::StorageBackend;

/// Backend persisting the collection to one JSON file on disk.
///
/// Writes go through a temp file in the same directory followed by a
/// rename, so a concurrent reader never observes a partially written
/// collection. This does not make concurrent writers safe: two
/// processes writing the same path still race at whole-collection
/// granularity (last write wins).
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Create a backend for the given file path, creating parent
    /// directories as needed.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileBackend {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(Some(data))
    }

    fn write(&mut self, data: &str) -> Result<()> {
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, data)
            .map_err(|e| ToolcatError::Persistence(format!("write {}: {}", tmp_path.display(), e)))?;
        fs::rename(&tmp_path, &self.path)
            .map_err(|e| ToolcatError::Persistence(format!("rename {}: {}", self.path.display(), e)))?;
        Ok(())
    }
}
