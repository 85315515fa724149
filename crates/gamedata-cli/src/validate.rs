//! # Validate Subcommand
//!
//! Runs the schema engine over the configured targets and writes the
//! verdict to the given output (stdout from the binary):
//!
//! ```text
//! JSON validation FAILED
//! - [Skill.json] row 1 id=skill_heal: missing keys: [resource_cost]; row={...}
//! unreadable data files:
//! - invalid JSON in 'data/json/Quest.json': EOF while parsing ...
//! ```
//!
//! Exit status: 0 when everything validates, 1 on any defect, 2 when a
//! data file could not be read or parsed.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use gamedata_core::RecordKind;
use gamedata_schema::{run, targets_for, ValidationReport};

use crate::{resolve_data_root, DEFAULT_DATA_ROOT};

pub const PASS_MESSAGE: &str = "JSON validation PASSED: all rows satisfy the gameplay data schema.";
pub const FAIL_HEADER: &str = "JSON validation FAILED";

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Directory holding Skill.json, EnemyStat.json, Passive.json and Quest.json.
    #[arg(long, default_value = DEFAULT_DATA_ROOT)]
    pub data_root: PathBuf,

    /// Only validate these record kinds (skill, enemy, passive, quest).
    /// Repeatable. Defaults to all four.
    #[arg(long = "kind", value_name = "KIND")]
    pub kinds: Vec<RecordKind>,
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, cwd: &Path, out: &mut impl Write) -> Result<u8> {
    let data_root = resolve_data_root(&args.data_root, cwd);
    if !data_root.is_dir() {
        tracing::warn!(data_root = %data_root.display(), "data root is not a directory");
    }

    let targets = targets_for(&args.kinds);
    tracing::debug!(targets = targets.len(), data_root = %data_root.display(), "starting run");

    let report = run(&targets, &data_root);

    write_report(out, &report).context("failed to write validation report")?;

    Ok(report.exit_code())
}

/// Render `report` as the verdict plus one line per defect and per
/// unreadable file.
pub fn write_report(out: &mut impl Write, report: &ValidationReport) -> std::io::Result<()> {
    if report.passed() {
        writeln!(out, "{PASS_MESSAGE}")?;
        return Ok(());
    }

    writeln!(out, "{FAIL_HEADER}")?;
    for defect in report.defects() {
        writeln!(out, "- {defect}")?;
    }

    if !report.load_failures().is_empty() {
        writeln!(out, "unreadable data files:")?;
        for failure in report.load_failures() {
            writeln!(out, "- {failure}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamedata_schema::default_targets;
    use serde_json::json;

    fn valid_row(kind: RecordKind) -> serde_json::Value {
        match kind {
            RecordKind::Skill => json!({
                "id": "skill_guard", "name": "Guard", "type": "defense",
                "resource_cost": {"mp": 0, "ki": 2}, "status_effect": "none",
                "effect_value": 0, "description": "Raise your shield."
            }),
            RecordKind::Enemy => json!({
                "id": "enemy_bat", "name": "Bat", "rank": 1,
                "base_stats": {"STR": 2, "INT": 1, "DEX": 6, "VIT": 2},
                "skills": [], "passive_effects": [], "ai_pattern": ["attack"],
                "reward": {"gold": 2, "exp": 4}
            }),
            RecordKind::Passive => json!({
                "id": "passive_swift", "name": "Swift", "rarity": "common", "max_level": 3,
                "stat_bonus": {"STR": 0, "INT": 0, "DEX": 1, "VIT": 0},
                "active_effect": "none", "description": "Move faster."
            }),
            RecordKind::Quest => json!({
                "id": "quest_bats", "name": "Bat Cave", "type": "side",
                "objectives": [], "time_limit": 0, "rewards": {}, "branching_flags": []
            }),
        }
    }

    fn write_data(dir: &Path) {
        for kind in RecordKind::all() {
            let doc = json!({ kind.list_key(): [valid_row(*kind)] });
            std::fs::write(dir.join(kind.file_name()), doc.to_string()).unwrap();
        }
    }

    fn render(report: &ValidationReport) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn clean_data_prints_single_pass_line() {
        let dir = tempfile::tempdir().unwrap();
        write_data(dir.path());
        let report = run(&default_targets(), dir.path());
        assert_eq!(render(&report), format!("{PASS_MESSAGE}\n"));
    }

    #[test]
    fn defects_are_listed_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        write_data(dir.path());
        std::fs::write(dir.path().join("Quest.json"), r#"{"quests": [[], {"id": "q"}]}"#).unwrap();

        let report = run(&default_targets(), dir.path());
        let text = render(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], FAIL_HEADER);
        assert_eq!(lines[1], "- [Quest.json] row 0: row must be object, got array");
        assert!(lines[2].starts_with("- [Quest.json] row 1 id=q: missing keys: [name, type,"));
        assert!(lines[2].ends_with(r#"; row={"id":"q"}"#));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn unreadable_files_get_their_own_block() {
        let dir = tempfile::tempdir().unwrap();
        write_data(dir.path());
        std::fs::write(dir.path().join("Passive.json"), "{oops").unwrap();

        let report = run(&default_targets(), dir.path());
        let text = render(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], FAIL_HEADER);
        assert_eq!(lines[1], "unreadable data files:");
        assert!(lines[2].starts_with("- invalid JSON in '"), "{}", lines[2]);
        assert!(lines[2].contains("Passive.json"));
    }

    #[test]
    fn run_validate_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        write_data(dir.path());
        let args = ValidateArgs {
            data_root: PathBuf::from("."),
            kinds: vec![],
        };
        let mut out = Vec::new();
        assert_eq!(run_validate(&args, dir.path(), &mut out).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap(), format!("{PASS_MESSAGE}\n"));

        std::fs::write(dir.path().join("Skill.json"), r#"{"skills": {}}"#).unwrap();
        let mut out = Vec::new();
        assert_eq!(run_validate(&args, dir.path(), &mut out).unwrap(), 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(FAIL_HEADER), "{text}");
        assert!(text.contains("- [Skill.json]"), "{text}");

        std::fs::write(dir.path().join("Skill.json"), "").unwrap();
        let mut out = Vec::new();
        assert_eq!(run_validate(&args, dir.path(), &mut out).unwrap(), 2);
        assert!(String::from_utf8(out).unwrap().contains("unreadable data files:"));
    }

    #[test]
    fn kind_filter_skips_other_files() {
        let dir = tempfile::tempdir().unwrap();
        write_data(dir.path());
        std::fs::remove_file(dir.path().join("Skill.json")).unwrap();
        let args = ValidateArgs {
            data_root: dir.path().to_path_buf(),
            kinds: vec![RecordKind::Enemy, RecordKind::Quest],
        };
        let mut out = Vec::new();
        assert_eq!(run_validate(&args, Path::new("/nonexistent"), &mut out).unwrap(), 0);
    }
}
