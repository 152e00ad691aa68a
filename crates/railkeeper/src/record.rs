//! Core record types for railkeeper.
//!
//! This module defines the sole entity of the system: the maintenance record
//! for a single train, together with its construction rules.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single train maintenance record.
///
/// Records are immutable once created; the only lifecycle operations are
/// creation (manual entry or spreadsheet import) and deletion. Serialized
/// field names follow the persisted JSON format (`trainNumber`, `type`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    /// Unique identifier, generated at creation, never reused or mutated.
    pub id: Uuid,

    /// Non-empty text identifying the train.
    pub train_number: String,

    /// Free-text category, e.g. "Express" or "Local".
    #[serde(rename = "type")]
    pub kind: String,

    /// Free-text maintenance state, e.g. "On time" or "Delayed".
    pub status: String,

    /// Calendar date as text (`YYYY-MM-DD`).
    pub date: String,

    /// Optional free-text notes.
    #[serde(default)]
    pub notes: String,
}

impl MaintenanceRecord {
    /// Create a new record with a freshly generated identifier.
    ///
    /// A blank `date` defaults to today; `notes` is stored as given.
    /// Required-field enforcement happens at the entry/import boundary,
    /// not here.
    #[must_use]
    pub fn new(
        train_number: impl Into<String>,
        kind: impl Into<String>,
        status: impl Into<String>,
        date: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        let date = date.into();
        let date = if date.trim().is_empty() {
            Self::today()
        } else {
            date
        };

        Self {
            id: Uuid::now_v7(),
            train_number: train_number.into(),
            kind: kind.into(),
            status: status.into(),
            date,
            notes: notes.into(),
        }
    }

    /// Today's date as `YYYY-MM-DD` in local time.
    #[must_use]
    pub fn today() -> String {
        chrono::Local::now().format("%Y-%m-%d").to_string()
    }

    /// Check whether the train number is blank after trimming.
    #[must_use]
    pub fn has_blank_train_number(&self) -> bool {
        self.train_number.trim().is_empty()
    }
}
