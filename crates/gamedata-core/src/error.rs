//! # Error Types
//!
//! Errors here are the *fatal* class: conditions that stop the validator
//! from looking at a file at all. Row-level conformance failures are
//! [`crate::Defect`] values and never appear in this hierarchy.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for gameplay data validation.
#[derive(Error, Debug)]
pub enum GamedataError {
    /// A record kind name did not match any known collection.
    #[error("unknown record kind: {0:?} (expected one of: skill, enemy, passive, quest)")]
    UnknownRecordKind(String),
}

/// A data file could not be read or parsed. Aborts validation of that file
/// only.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("cannot read '{path}': {source}")]
    Read {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("invalid JSON in '{path}': {source}")]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// Parser error, including line and column.
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }

    /// True when the file was read but its contents are not JSON.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_names_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LoadError::Parse {
            path: PathBuf::from("data/json/Skill.json"),
            source,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("invalid JSON in 'data/json/Skill.json'"), "{msg}");
        assert!(err.is_syntax());
        assert_eq!(err.path(), std::path::Path::new("data/json/Skill.json"));
    }

    #[test]
    fn test_read_error_is_not_syntax() {
        let err = LoadError::Read {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(!err.is_syntax());
        assert!(err.to_string().contains("cannot read 'missing.json'"));
    }
}
