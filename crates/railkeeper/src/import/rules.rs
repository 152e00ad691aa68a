//! Column-matching rules for spreadsheet import.
//!
//! Source spreadsheets are expected to have inconsistent, human-authored
//! column names, so headers are matched by loose substring/equality
//! heuristics rather than a fixed schema. The rules form an ordered table
//! evaluated top-to-bottom per cell; the first matching rule wins. This
//! trades strict validation for import convenience.

/// A record field that a spreadsheet column can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetField {
    /// The train number column.
    TrainNumber,
    /// The record type/category column.
    Kind,
    /// The maintenance status column.
    Status,
    /// The date column.
    Date,
    /// The free-text notes column.
    Notes,
}

/// A single header-matching rule.
#[derive(Debug)]
pub struct ColumnRule {
    /// Name of the rule for identification.
    pub name: &'static str,

    /// The field a matching column maps to.
    pub target: TargetField,

    /// Predicate over the trimmed, lowercased header text.
    matcher: fn(&str) -> bool,
}

impl ColumnRule {
    /// Check if the given lowercased header matches this rule.
    #[must_use]
    pub fn matches(&self, lowered_header: &str) -> bool {
        (self.matcher)(lowered_header)
    }
}

fn header_is_train(h: &str) -> bool {
    h.contains("train")
}

fn header_is_kind(h: &str) -> bool {
    h == "type" || h.contains("class")
}

fn header_is_status(h: &str) -> bool {
    h == "status" || h.contains("state")
}

fn header_is_date(h: &str) -> bool {
    h == "date"
}

fn header_is_notes(h: &str) -> bool {
    h == "notes" || h.contains("remark")
}

/// The ordered column-matching rule table.
///
/// Order matters: e.g. a header of `"train state"` maps to the train number,
/// not the status, because the train rule is evaluated first.
pub const COLUMN_RULES: &[ColumnRule] = &[
    ColumnRule {
        name: "train_number",
        target: TargetField::TrainNumber,
        matcher: header_is_train,
    },
    ColumnRule {
        name: "kind",
        target: TargetField::Kind,
        matcher: header_is_kind,
    },
    ColumnRule {
        name: "status",
        target: TargetField::Status,
        matcher: header_is_status,
    },
    ColumnRule {
        name: "date",
        target: TargetField::Date,
        matcher: header_is_date,
    },
    ColumnRule {
        name: "notes",
        target: TargetField::Notes,
        matcher: header_is_notes,
    },
];

/// Resolve a raw header to its target field, if any rule matches.
///
/// Returns `None` for unmatched headers; the importer then applies its
/// row-level fallback (assign to the train number when it is still unset).
#[must_use]
pub fn resolve(header: &str) -> Option<TargetField> {
    let lowered = header.trim().to_lowercase();
    COLUMN_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.target)
}
