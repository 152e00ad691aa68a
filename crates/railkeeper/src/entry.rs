//! Manual entry validation.
//!
//! Enforces minimal required-field presence before a record is appended:
//! train number, type, and status must all be non-empty after trimming.
//! Date and notes are optional and default like imported rows do.

use crate::error::{Error, Result};
use crate::record::MaintenanceRecord;

/// Candidate field values for a manually entered record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualEntry {
    /// Text identifying the train; required.
    pub train_number: String,
    /// Free-text category; required.
    pub kind: String,
    /// Free-text maintenance state; required.
    pub status: String,
    /// Calendar date as text; blank defaults to today.
    pub date: String,
    /// Optional free-text notes.
    pub notes: String,
}

impl ManualEntry {
    /// Check that all required fields are present.
    ///
    /// The first missing field (in train number, type, status order) is
    /// reported; nothing is mutated on failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] naming the first blank required
    /// field.
    pub fn validate(&self) -> Result<()> {
        if self.train_number.trim().is_empty() {
            return Err(Error::missing_field("train number"));
        }
        if self.kind.trim().is_empty() {
            return Err(Error::missing_field("type"));
        }
        if self.status.trim().is_empty() {
            return Err(Error::missing_field("status"));
        }
        Ok(())
    }

    /// Validate and construct a new record with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if validation fails; no record is
    /// constructed.
    pub fn into_record(self) -> Result<MaintenanceRecord> {
        self.validate()?;
        Ok(MaintenanceRecord::new(
            self.train_number,
            self.kind,
            self.status,
            self.date,
            self.notes,
        ))
    }
}
