//! # Defects
//!
//! A `Defect` is one way a collection document fails to conform to its
//! record schema. Defects carry enough context to locate the problem
//! (file, row index, record id) and render as one self-contained line.

use std::fmt;

/// A single conformance failure found while scanning a collection document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Defect {
    /// The document has no record array under the expected key. No rows
    /// were checked.
    MalformedContainer {
        /// Data file name.
        file: String,
        /// Key that should hold the record array.
        list_key: String,
    },

    /// An array element is not a JSON object.
    RowNotObject {
        /// Data file name.
        file: String,
        /// Zero-based index in the record array.
        row: usize,
        /// JSON type name of the element actually found.
        actual_type: &'static str,
    },

    /// The row's id was already used by an earlier row in the same file.
    DuplicateId {
        /// Data file name.
        file: String,
        /// Zero-based index of the repeated occurrence.
        row: usize,
        /// The repeated id.
        id: String,
    },

    /// The row failed its record schema.
    Schema {
        /// Data file name.
        file: String,
        /// Zero-based index in the record array.
        row: usize,
        /// Record id, or a `<missing-id:N>` placeholder.
        id: String,
        /// Human-readable reason from the record validator.
        reason: String,
        /// Compact JSON rendering of the offending row.
        raw_row: String,
    },
}

impl Defect {
    /// Data file the defect was found in.
    pub fn file(&self) -> &str {
        match self {
            Self::MalformedContainer { file, .. }
            | Self::RowNotObject { file, .. }
            | Self::DuplicateId { file, .. }
            | Self::Schema { file, .. } => file,
        }
    }

    /// Row index, if the defect is attached to a row.
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::MalformedContainer { .. } => None,
            Self::RowNotObject { row, .. }
            | Self::DuplicateId { row, .. }
            | Self::Schema { row, .. } => Some(*row),
        }
    }

    /// Record id, if one could be determined.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::DuplicateId { id, .. } | Self::Schema { id, .. } => Some(id),
            Self::MalformedContainer { .. } | Self::RowNotObject { .. } => None,
        }
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedContainer { file, list_key } => {
                write!(f, "[{file}] '{list_key}' must be an array")
            }
            Self::RowNotObject {
                file,
                row,
                actual_type,
            } => write!(f, "[{file}] row {row}: row must be object, got {actual_type}"),
            Self::DuplicateId { file, row, id } => {
                write!(f, "[{file}] row {row} id={id}: duplicate id")
            }
            Self::Schema {
                file,
                row,
                id,
                reason,
                raw_row,
            } => write!(f, "[{file}] row {row} id={id}: {reason}; row={raw_row}"),
        }
    }
}
