//! Persistence slot implementations.
//!
//! The external persistence boundary is a single key-value slot holding the
//! entire record collection as serialized text. It is read once at session
//! start and overwritten wholesale after every mutation; last-write-wins.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A single slot of persisted text.
///
/// Implementors provide the storage mechanism; callers treat the slot as
/// always-available and synchronous. There is no partial-write or
/// transaction semantics.
pub trait RecordSlot: fmt::Debug + Send {
    /// Read the slot contents, `None` if nothing has been written yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn read(&self) -> Result<Option<String>>;

    /// Overwrite the slot with the given payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be written.
    fn write(&mut self, payload: &str) -> Result<()>;
}

/// A slot backed by a plain text file on disk.
#[derive(Debug)]
pub struct FileSlot {
    /// Path to the slot file.
    path: PathBuf,
}

impl FileSlot {
    /// Create a file-backed slot at the given path.
    ///
    /// The file (and its parent directories) are created lazily on the
    /// first write.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the path to the slot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSlot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path).map_err(|source| Error::SlotRead {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(contents))
    }

    fn write(&mut self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        std::fs::write(&self.path, payload).map_err(|source| Error::SlotWrite {
            path: self.path.clone(),
            source,
        })
    }
}

/// An in-memory slot, primarily for tests.
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: Option<String>,
}

impl MemorySlot {
    /// Create an empty in-memory slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an in-memory slot pre-seeded with a payload.
    #[must_use]
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            value: Some(payload.into()),
        }
    }
}

impl RecordSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.value.clone())
    }

    fn write(&mut self, payload: &str) -> Result<()> {
        self.value = Some(payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_slot_starts_empty() {
        let slot = MemorySlot::new();
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn test_memory_slot_write_then_read() {
        let mut slot = MemorySlot::new();
        slot.write("[]").unwrap();
        assert_eq!(slot.read().unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_memory_slot_overwrite() {
        let mut slot = MemorySlot::with_payload("old");
        slot.write("new").unwrap();
        assert_eq!(slot.read().unwrap(), Some("new".to_string()));
    }

    #[test]
    fn test_file_slot_missing_file_reads_none() {
        let slot = FileSlot::new("/nonexistent/railkeeper/records.json");
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn test_file_slot_write_then_read() {
        let path = std::env::temp_dir().join(format!("railkeeper_slot_{}.json", std::process::id()));

        let mut slot = FileSlot::new(&path);
        slot.write("[1,2,3]").unwrap();
        assert_eq!(slot.read().unwrap(), Some("[1,2,3]".to_string()));
        assert_eq!(slot.path(), path);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_file_slot_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("railkeeper_slot_dirs_{}", std::process::id()));
        let path = dir.join("nested").join("records.json");

        let _ = std::fs::remove_dir_all(&dir);

        let mut slot = FileSlot::new(&path);
        slot.write("[]").unwrap();
        assert!(path.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
