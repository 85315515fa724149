//! # Aggregator
//!
//! Runs the file-level driver over a list of targets and folds the results
//! into one [`ValidationReport`]. A load failure on one file does not stop
//! the others.

use std::path::Path;

use gamedata_core::{Defect, LoadError, RecordKind};

use crate::driver::{validate_file, FileOutcome};
use crate::records::{validator_for, RecordValidator};

/// Every record validated cleanly.
pub const EXIT_PASS: u8 = 0;
/// At least one defect was found.
pub const EXIT_DEFECTS: u8 = 1;
/// At least one data file could not be read or parsed.
pub const EXIT_UNREADABLE: u8 = 2;

/// One (file, list key, validator) entry of a run.
#[derive(Debug, Clone, Copy)]
pub struct Target {
    pub kind: RecordKind,
    pub file_name: &'static str,
    pub list_key: &'static str,
    pub validator: RecordValidator,
}

impl Target {
    pub fn for_kind(kind: RecordKind) -> Self {
        Self {
            kind,
            file_name: kind.file_name(),
            list_key: kind.list_key(),
            validator: validator_for(kind),
        }
    }
}

/// The fixed target list: Skill, Enemy, Passive, Quest.
pub fn default_targets() -> Vec<Target> {
    RecordKind::all().iter().copied().map(Target::for_kind).collect()
}

/// Targets for a subset of kinds, in validation order and without repeats.
/// An empty selection means all kinds.
pub fn targets_for(kinds: &[RecordKind]) -> Vec<Target> {
    if kinds.is_empty() {
        return default_targets();
    }
    RecordKind::all()
        .iter()
        .copied()
        .filter(|kind| kinds.contains(kind))
        .map(Target::for_kind)
        .collect()
}

/// Everything found by one run.
#[derive(Debug, Default)]
pub struct ValidationReport {
    outcomes: Vec<FileOutcome>,
    load_failures: Vec<LoadError>,
}

impl ValidationReport {
    /// All defects, per-file order preserved, files in target order.
    pub fn defects(&self) -> impl Iterator<Item = &Defect> {
        self.outcomes.iter().flat_map(|o| o.defects.iter())
    }

    pub fn defect_count(&self) -> usize {
        self.outcomes.iter().map(|o| o.defects.len()).sum()
    }

    /// Files that could not be validated at all.
    pub fn load_failures(&self) -> &[LoadError] {
        &self.load_failures
    }

    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    pub fn rows_checked(&self) -> usize {
        self.outcomes.iter().map(|o| o.rows_checked).sum()
    }

    /// Files that were loaded and scanned.
    pub fn files_checked(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> bool {
        self.load_failures.is_empty() && self.defect_count() == 0
    }

    /// Process exit status for this report. Unreadable files take
    /// precedence over defects.
    pub fn exit_code(&self) -> u8 {
        if !self.load_failures.is_empty() {
            EXIT_UNREADABLE
        } else if self.defect_count() > 0 {
            EXIT_DEFECTS
        } else {
            EXIT_PASS
        }
    }
}

/// Validate every target under `data_root`, in order.
pub fn run(targets: &[Target], data_root: &Path) -> ValidationReport {
    let mut report = ValidationReport::default();

    for target in targets {
        match validate_file(data_root, target.file_name, target.list_key, target.validator) {
            Ok(outcome) => report.outcomes.push(outcome),
            Err(e) => {
                tracing::warn!(kind = %target.kind, "{e}");
                report.load_failures.push(e);
            }
        }
    }

    tracing::info!(
        files = report.files_checked(),
        rows = report.rows_checked(),
        defects = report.defect_count(),
        unreadable = report.load_failures.len(),
        "validation finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::fixtures;
    use serde_json::json;

    fn write_clean_set(dir: &Path) {
        for kind in RecordKind::all() {
            let doc = json!({ kind.list_key(): [fixtures::for_kind(*kind)] });
            std::fs::write(dir.join(kind.file_name()), doc.to_string()).unwrap();
        }
    }

    #[test]
    fn default_targets_follow_declared_order() {
        let targets = default_targets();
        let files: Vec<_> = targets.iter().map(|t| t.file_name).collect();
        assert_eq!(files, vec!["Skill.json", "EnemyStat.json", "Passive.json", "Quest.json"]);
        let keys: Vec<_> = targets.iter().map(|t| t.list_key).collect();
        assert_eq!(keys, vec!["skills", "enemies", "passives", "quests"]);
    }

    #[test]
    fn targets_for_keeps_order_and_drops_repeats() {
        let targets = targets_for(&[RecordKind::Quest, RecordKind::Skill, RecordKind::Quest]);
        let kinds: Vec<_> = targets.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![RecordKind::Skill, RecordKind::Quest]);
    }

    #[test]
    fn targets_for_empty_selects_all() {
        assert_eq!(targets_for(&[]).len(), RecordKind::all().len());
    }

    #[test]
    fn clean_set_passes() {
        let dir = tempfile::tempdir().unwrap();
        write_clean_set(dir.path());
        let report = run(&default_targets(), dir.path());
        assert!(report.passed());
        assert_eq!(report.exit_code(), EXIT_PASS);
        assert_eq!(report.files_checked(), 4);
        assert_eq!(report.rows_checked(), 4);
    }

    #[test]
    fn defects_are_concatenated_in_target_order() {
        let dir = tempfile::tempdir().unwrap();
        write_clean_set(dir.path());
        std::fs::write(dir.path().join("Quest.json"), r#"{"quests": [1]}"#).unwrap();
        std::fs::write(dir.path().join("Skill.json"), r#"{"skills": "none"}"#).unwrap();

        let report = run(&default_targets(), dir.path());
        let files: Vec<_> = report.defects().map(|d| d.file()).collect();
        assert_eq!(files, vec!["Skill.json", "Quest.json"]);
        assert_eq!(report.exit_code(), EXIT_DEFECTS);
    }

    #[test]
    fn unreadable_file_does_not_stop_the_run() {
        let dir = tempfile::tempdir().unwrap();
        write_clean_set(dir.path());
        std::fs::write(dir.path().join("EnemyStat.json"), "not json").unwrap();
        std::fs::remove_file(dir.path().join("Passive.json")).unwrap();
        std::fs::write(dir.path().join("Quest.json"), r#"{"quests": [{}]}"#).unwrap();

        let report = run(&default_targets(), dir.path());
        assert_eq!(report.files_checked(), 2);
        assert_eq!(report.load_failures().len(), 2);
        assert!(report.load_failures()[0].is_syntax());
        assert!(!report.load_failures()[1].is_syntax());
        assert_eq!(report.defect_count(), 1);
        assert!(!report.passed());
        assert_eq!(report.exit_code(), EXIT_UNREADABLE);
    }
}
