//! Persistence backends for the submission store.
//!
//! The store is constructed with an injected `StorageBackend` so the
//! medium (file on disk, in-memory buffer) is swappable and testable.
//! A backend holds the entire serialized collection under one logical
//! key; there is no per-record addressing at this layer.

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::error::Result;

/// A key-value string medium holding one serialized collection.
///
/// Reads distinguish "nothing stored yet" (`Ok(None)`) from an actual
/// medium failure (`Err`); callers decide how lenient to be. Writes
/// replace the whole stored value and must be atomic from a reader's
/// point of view.
pub trait StorageBackend {
    /// Read the stored collection text, or None if nothing was written.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored collection text.
    fn write(&mut self, data: &str) -> Result<()>;
}
