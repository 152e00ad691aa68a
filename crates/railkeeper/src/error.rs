//! Error types for railkeeper.
//!
//! This module defines all error types used throughout the railkeeper crate.
//! Every failure is terminal for the single user action that caused it; no
//! operation retries automatically.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for railkeeper operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Validation Errors ===
    /// A required manual-entry field is missing or blank.
    #[error("missing required field: {field}")]
    MissingField {
        /// User-facing name of the missing field.
        field: &'static str,
    },

    // === Import Errors ===
    /// The file parsed as tabular data but no row survived filtering.
    #[error("no valid rows found in the file")]
    ImportEmpty,

    /// The file could not be read as tabular data at all.
    #[error("failed to read the file as a spreadsheet: {message}")]
    ImportUnreadable {
        /// Description of the parse failure (not shown verbatim to users).
        message: String,
    },

    // === Auth Errors ===
    /// The supplied credentials did not match.
    #[error("invalid credentials")]
    AuthFailure,

    /// The current session lacks the admin role for this action.
    #[error("admin role required to {action}")]
    AdminRequired {
        /// The action that was refused.
        action: &'static str,
    },

    // === Persistence Errors ===
    /// Failed to read the record slot.
    #[error("failed to read record slot at {path}: {source}")]
    SlotRead {
        /// Path to the slot file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to overwrite the record slot.
    #[error("failed to write record slot at {path}: {source}")]
    SlotWrite {
        /// Path to the slot file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for railkeeper operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a missing-field validation error.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Create an import-unreadable error.
    #[must_use]
    pub fn import_unreadable(message: impl Into<String>) -> Self {
        Self::ImportUnreadable {
            message: message.into(),
        }
    }

    /// Create an admin-required error for the given action.
    #[must_use]
    pub fn admin_required(action: &'static str) -> Self {
        Self::AdminRequired { action }
    }

    /// Check if this error is a manual-entry validation failure.
    #[must_use]
    pub fn is_validation_failure(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }

    /// Check if this error is either of the two import failure conditions.
    #[must_use]
    pub fn is_import_failure(&self) -> bool {
        matches!(self, Self::ImportEmpty | Self::ImportUnreadable { .. })
    }

    /// Check if this error is an authentication failure.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::AuthFailure)
    }
}
