//! # File-level Driver
//!
//! Loads one collection document, finds its record array, and runs a
//! record validator over every row. The scan is exhaustive: every row is
//! visited regardless of earlier defects, and defects are returned in
//! discovery order.
//!
//! Loading is the only fallible step. An unreadable file or invalid JSON
//! is a [`LoadError`]; everything past that point is a [`Defect`].

use std::collections::HashSet;
use std::path::Path;

use serde_json::{Map, Value};

use gamedata_core::{Defect, LoadError};

use crate::checks::json_type_name;
use crate::records::RecordValidator;

/// Result of scanning one collection document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// Data file name, as reported in defects.
    pub file: String,
    /// Number of array elements visited.
    pub rows_checked: usize,
    /// Defects in discovery order.
    pub defects: Vec<Defect>,
}

impl FileOutcome {
    pub fn is_clean(&self) -> bool {
        self.defects.is_empty()
    }
}

/// Read and parse the JSON document at `path`.
///
/// # Errors
///
/// `LoadError::Read` if the file cannot be read, `LoadError::Parse` if its
/// contents are not JSON.
pub fn load_document(path: &Path) -> Result<Value, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reportable id of a row: the `id` field as text, or a placeholder
/// embedding the row index when the field is absent.
///
/// String ids are used verbatim; any other JSON value is rendered compactly,
/// so `5` and `"5"` share the key `5`.
pub fn row_id(row: &Map<String, Value>, index: usize) -> String {
    match row.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(other) => other.to_string(),
        None => format!("<missing-id:{index}>"),
    }
}

/// Scan an already-parsed collection document.
pub fn validate_document(
    file_name: &str,
    root: &Value,
    list_key: &str,
    validator: RecordValidator,
) -> FileOutcome {
    let Some(rows) = root.get(list_key).and_then(Value::as_array) else {
        return FileOutcome {
            file: file_name.to_string(),
            rows_checked: 0,
            defects: vec![Defect::MalformedContainer {
                file: file_name.to_string(),
                list_key: list_key.to_string(),
            }],
        };
    };

    let mut defects = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (index, row) in rows.iter().enumerate() {
        let Some(record) = row.as_object() else {
            defects.push(Defect::RowNotObject {
                file: file_name.to_string(),
                row: index,
                actual_type: json_type_name(row),
            });
            continue;
        };

        let id = row_id(record, index);
        if !seen.insert(id.clone()) {
            tracing::trace!(file = file_name, row = index, id = %id, "duplicate id");
            defects.push(Defect::DuplicateId {
                file: file_name.to_string(),
                row: index,
                id: id.clone(),
            });
        }

        if let Some(reason) = validator(record) {
            tracing::trace!(file = file_name, row = index, id = %id, %reason, "row rejected");
            defects.push(Defect::Schema {
                file: file_name.to_string(),
                row: index,
                id,
                reason,
                raw_row: row.to_string(),
            });
        }
    }

    FileOutcome {
        file: file_name.to_string(),
        rows_checked: rows.len(),
        defects,
    }
}

/// Load `data_root/file_name` and scan its `list_key` array.
///
/// # Errors
///
/// Returns a [`LoadError`] if the document cannot be read or parsed. Schema
/// problems are never errors; they are collected in the outcome.
pub fn validate_file(
    data_root: &Path,
    file_name: &str,
    list_key: &str,
    validator: RecordValidator,
) -> Result<FileOutcome, LoadError> {
    let path = data_root.join(file_name);
    tracing::debug!(file = file_name, list_key, path = %path.display(), "validating");

    let root = load_document(&path)?;
    let outcome = validate_document(file_name, &root, list_key, validator);

    tracing::info!(
        file = file_name,
        rows = outcome.rows_checked,
        defects = outcome.defects.len(),
        "validated"
    );
    Ok(outcome)
}
