//! In-memory storage backend for tests and ephemeral use.

use crate::error::{Result, ToolcatError};

use super::StorageBackend;

/// Backend holding the collection in a plain string.
///
/// `fail_writes` lets tests exercise the fail-loud write path without a
/// real full or unavailable medium.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    data: Option<String>,
    fail_writes: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-seeded content, e.g. corrupt data for read tests.
    pub fn with_data(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            fail_writes: false,
        }
    }

    /// Make every subsequent write fail with a persistence error.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.data.clone())
    }

    fn write(&mut self, data: &str) -> Result<()> {
        if self.fail_writes {
            return Err(ToolcatError::Persistence("medium unavailable".to_string()));
        }
        self.data = Some(data.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_backend_reads_none() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.read().unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let mut backend = MemoryBackend::new();
        backend.write("hello").unwrap();
        assert_eq!(backend.read().unwrap(), Some("hello".to_string()));
    }

    #[test]
    fn test_with_data_seeds_content() {
        let backend = MemoryBackend::with_data("not json");
        assert_eq!(backend.read().unwrap(), Some("not json".to_string()));
    }

    #[test]
    fn test_fail_writes() {
        let mut backend = MemoryBackend::new();
        backend.write("before").unwrap();
        backend.set_fail_writes(true);

        let result = backend.write("after");
        assert!(matches!(result, Err(ToolcatError::Persistence(_))));
        // Failed write leaves the previous value intact
        assert_eq!(backend.read().unwrap(), Some("before".to_string()));
    }
}
