//! Query/filter engine for guest search.
//!
//! Derives the visible subset of records for a free-text query and a
//! selected type filter. Results keep the record store's order
//! (most-recent-first); no additional sorting is applied.

use std::collections::BTreeSet;
use std::fmt;

use crate::record::MaintenanceRecord;

/// A selectable type filter: the `All` sentinel or one concrete type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    /// Match every record type.
    #[default]
    All,
    /// Match records whose type equals this value exactly.
    Kind(String),
}

impl TypeFilter {
    /// Check whether a record's type passes this filter.
    #[must_use]
    pub fn matches(&self, kind: &str) -> bool {
        match self {
            Self::All => true,
            Self::Kind(k) => k == kind,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Kind(k) => write!(f, "{k}"),
        }
    }
}

/// Filter records by train-number substring and type equality.
///
/// The query matches case-insensitively against the train number; an empty
/// query matches everything. The returned subsequence preserves the input
/// order.
#[must_use]
pub fn filter<'a>(
    records: &'a [MaintenanceRecord],
    query: &str,
    type_filter: &TypeFilter,
) -> Vec<&'a MaintenanceRecord> {
    let query = query.to_lowercase();
    records
        .iter()
        .filter(|r| r.train_number.to_lowercase().contains(&query))
        .filter(|r| type_filter.matches(&r.kind))
        .collect()
}

/// The selectable type filters for the given collection.
///
/// Distinct `type` values sorted ascending, with the `All` sentinel always
/// first.
#[must_use]
pub fn type_options(records: &[MaintenanceRecord]) -> Vec<TypeFilter> {
    let kinds: BTreeSet<&str> = records.iter().map(|r| r.kind.as_str()).collect();

    let mut options = Vec::with_capacity(kinds.len() + 1);
    options.push(TypeFilter::All);
    options.extend(kinds.into_iter().map(|k| TypeFilter::Kind(k.to_string())));
    options
}
