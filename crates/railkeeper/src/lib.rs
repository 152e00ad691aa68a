//! `railkeeper` - a record-keeping core for tracking train maintenance status
//!
//! This library provides the reviewable logic behind a small maintenance
//! tracker: an ordered record store persisted to a single slot, a
//! spreadsheet importer with heuristic column matching, a query/filter
//! engine for guest search, and manual-entry validation, all tied together
//! by a session-aware tracker facade.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod config;
pub mod entry;
pub mod error;
pub mod import;
pub mod logging;
pub mod query;
pub mod record;
pub mod session;
pub mod store;
pub mod tracker;

pub use config::Config;
pub use entry::ManualEntry;
pub use error::{Error, Result};
pub use import::ImportReport;
pub use logging::init_logging;
pub use query::TypeFilter;
pub use record::MaintenanceRecord;
pub use session::{CredentialVerifier, Role, Session, StaticCredentials};
pub use store::RecordStore;
pub use tracker::Tracker;
