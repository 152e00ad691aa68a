//! Record store for railkeeper.
//!
//! This module holds the ordered in-memory record collection and its
//! load/save against the external persistence slot. The collection is
//! most-recent-first: new records are prepended, and no secondary sort
//! is ever applied.

pub mod slot;

use std::path::Path;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::Result;
use crate::record::MaintenanceRecord;

pub use slot::{FileSlot, MemorySlot, RecordSlot};

/// The ordered collection of maintenance records, backed by a persistence
/// slot.
///
/// The slot is read once when the store is opened; every mutation rewrites
/// it wholesale. Missing or malformed slot contents load as an empty
/// collection and are never surfaced as an error to the caller (corruption
/// is logged as a warning and discarded).
#[derive(Debug)]
pub struct RecordStore {
    slot: Box<dyn RecordSlot>,
    records: Vec<MaintenanceRecord>,
}

impl RecordStore {
    /// Open a store backed by a JSON file at the given path.
    #[must_use]
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::with_slot(Box::new(FileSlot::new(path)))
    }

    /// Create an in-memory store, primarily for tests.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_slot(Box::new(MemorySlot::new()))
    }

    /// Open a store over an arbitrary slot implementation.
    #[must_use]
    pub fn with_slot(slot: Box<dyn RecordSlot>) -> Self {
        let records = Self::load(slot.as_ref());
        debug!("Loaded {} records from slot", records.len());
        Self { slot, records }
    }

    /// Read and deserialize the slot, treating any failure as empty.
    fn load(slot: &dyn RecordSlot) -> Vec<MaintenanceRecord> {
        let raw = match slot.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Record slot unreadable, starting empty: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("Persisted record collection is malformed, discarding: {e}");
                Vec::new()
            }
        }
    }

    /// Serialize the full collection and overwrite the slot.
    fn save(&mut self) -> Result<()> {
        let payload = serde_json::to_string(&self.records)?;
        self.slot.write(&payload)
    }

    /// The current ordered collection, most-recent-first.
    #[must_use]
    pub fn records(&self) -> &[MaintenanceRecord] {
        &self.records
    }

    /// Number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Prepend a record and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be written.
    pub fn add(&mut self, record: MaintenanceRecord) -> Result<()> {
        debug!("Adding record for train {}", record.train_number);
        self.records.insert(0, record);
        self.save()
    }

    /// Prepend a block of records (preserving their given order) and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be written.
    pub fn add_all(&mut self, records: Vec<MaintenanceRecord>) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }
        info!("Adding {} records", records.len());
        self.records.splice(0..0, records);
        self.save()
    }

    /// Remove the record with the given identifier and persist.
    ///
    /// Returns `true` if a record was removed; removing an absent
    /// identifier is a no-op and reports no failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be written.
    pub fn remove(&mut self, id: &Uuid) -> Result<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != *id);

        if self.records.len() == before {
            return Ok(false);
        }
        debug!("Removed record {id}");
        self.save()?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(train: &str, kind: &str, status: &str) -> MaintenanceRecord {
        MaintenanceRecord::new(train, kind, status, "2026-01-01", "")
    }

    #[test]
    fn test_in_memory_starts_empty() {
        let store = RecordStore::in_memory();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_add_prepends() {
        let mut store = RecordStore::in_memory();
        store.add(record("T1", "Express", "OK")).unwrap();
        store.add(record("T2", "Local", "Delayed")).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].train_number, "T2");
        assert_eq!(store.records()[1].train_number, "T1");
    }

    #[test]
    fn test_add_all_prepends_block_in_order() {
        let mut store = RecordStore::in_memory();
        store.add(record("T1", "Express", "OK")).unwrap();

        store
            .add_all(vec![record("T2", "Local", "OK"), record("T3", "Local", "OK")])
            .unwrap();

        let trains: Vec<_> = store.records().iter().map(|r| r.train_number.as_str()).collect();
        assert_eq!(trains, ["T2", "T3", "T1"]);
    }

    #[test]
    fn test_add_all_empty_is_noop() {
        let mut store = RecordStore::in_memory();
        store.add_all(Vec::new()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_existing() {
        let mut store = RecordStore::in_memory();
        let r = record("T1", "Express", "OK");
        let id = r.id;
        store.add(r).unwrap();

        assert!(store.remove(&id).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = RecordStore::in_memory();
        store.add(record("T1", "Express", "OK")).unwrap();

        let removed = store.remove(&Uuid::now_v7()).unwrap();
        assert!(!removed);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_malformed_slot_loads_empty() {
        let slot = MemorySlot::with_payload("{not valid json");
        let store = RecordStore::with_slot(Box::new(slot));
        assert!(store.is_empty());
    }

    #[test]
    fn test_unexpected_shape_loads_empty() {
        let slot = MemorySlot::with_payload(r#"{"records": 3}"#);
        let store = RecordStore::with_slot(Box::new(slot));
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let path = std::env::temp_dir().join(format!("railkeeper_store_{}.json", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let mut store = RecordStore::open(&path);
        store.add(record("T1", "Express", "OK")).unwrap();
        store.add(record("T2", "Local", "Delayed")).unwrap();
        let saved: Vec<_> = store.records().to_vec();
        drop(store);

        let reloaded = RecordStore::open(&path);
        assert_eq!(reloaded.records(), saved.as_slice());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_mutations_persist_immediately() {
        let path = std::env::temp_dir().join(format!("railkeeper_persist_{}.json", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let mut store = RecordStore::open(&path);
        let r = record("T9", "Express", "OK");
        let id = r.id;
        store.add(r).unwrap();

        // A second session sees the add.
        assert_eq!(RecordStore::open(&path).len(), 1);

        store.remove(&id).unwrap();
        assert_eq!(RecordStore::open(&path).len(), 0);

        let _ = std::fs::remove_file(&path);
    }
}
