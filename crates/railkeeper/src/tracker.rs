//! The tracker facade tying the components together.
//!
//! Owns the record store and the session context, gates mutations on the
//! admin role, and wires importer output into the store. Guest operations
//! (search/filter, type options) never require authentication.

use std::path::Path;

use uuid::Uuid;

use crate::entry::ManualEntry;
use crate::error::Result;
use crate::query::{self, TypeFilter};
use crate::record::MaintenanceRecord;
use crate::session::{CredentialVerifier, Session};
use crate::store::RecordStore;
use crate::{import, Error};

/// The maintenance tracker for a single user session.
#[derive(Debug)]
pub struct Tracker {
    store: RecordStore,
    session: Session,
}

impl Tracker {
    /// Create a tracker over the given store, starting as a guest session.
    #[must_use]
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            session: Session::guest(),
        }
    }

    /// The current session context.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The full record collection, most-recent-first.
    #[must_use]
    pub fn records(&self) -> &[MaintenanceRecord] {
        self.store.records()
    }

    /// Authenticate this session as admin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthFailure`] on credential mismatch; no state
    /// changes.
    pub fn login(
        &mut self,
        verifier: &dyn CredentialVerifier,
        username: &str,
        password: &str,
    ) -> Result<()> {
        self.session.login(verifier, username, password)
    }

    /// Drop back to the guest role.
    pub fn logout(&mut self) {
        self.session.logout();
    }

    /// Validate a manual entry and append the resulting record.
    ///
    /// Returns the identifier of the new record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AdminRequired`] for guest sessions,
    /// [`Error::MissingField`] when validation fails (no mutation), or a
    /// persistence error if the save fails.
    pub fn add_manual(&mut self, entry: ManualEntry) -> Result<Uuid> {
        self.require_admin("add records")?;
        let record = entry.into_record()?;
        let id = record.id;
        self.store.add(record)?;
        Ok(id)
    }

    /// Import records from raw spreadsheet bytes and append them.
    ///
    /// Returns the count of accepted rows. On any import failure nothing
    /// is appended.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AdminRequired`] for guest sessions, or the
    /// importer's [`Error::ImportEmpty`] / [`Error::ImportUnreadable`].
    pub fn import_bytes(&mut self, bytes: &[u8]) -> Result<usize> {
        self.require_admin("import records")?;
        let report = import::import_bytes(bytes)?;
        let accepted = report.accepted;
        self.store.add_all(report.records)?;
        Ok(accepted)
    }

    /// Import records from a file on disk and append them.
    ///
    /// # Errors
    ///
    /// Same as [`Tracker::import_bytes`].
    pub async fn import_path(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        self.require_admin("import records")?;
        let report = import::import_path(path).await?;
        let accepted = report.accepted;
        self.store.add_all(report.records)?;
        Ok(accepted)
    }

    /// Delete the record with the given identifier.
    ///
    /// Deleting an absent identifier is a no-op that reports no failure;
    /// the returned flag tells whether a record was removed. Confirmation
    /// prompts belong to the UI layer, not here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AdminRequired`] for guest sessions or a persistence
    /// error if the save fails.
    pub fn delete(&mut self, id: &Uuid) -> Result<bool> {
        self.require_admin("delete records")?;
        self.store.remove(id)
    }

    /// Guest search: filter by train-number substring and type.
    #[must_use]
    pub fn search(&self, query: &str, type_filter: &TypeFilter) -> Vec<&MaintenanceRecord> {
        query::filter(self.store.records(), query, type_filter)
    }

    /// The selectable type filters for the current collection.
    #[must_use]
    pub fn type_options(&self) -> Vec<TypeFilter> {
        query::type_options(self.store.records())
    }

    fn require_admin(&self, action: &'static str) -> Result<()> {
        if self.session.is_admin() {
            Ok(())
        } else {
            Err(Error::admin_required(action))
        }
    }
}
