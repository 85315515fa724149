//! # gamedata-schema: Gameplay Data Conformance Engine
//!
//! Checks the four gameplay collections (skills, enemies, passives,
//! quests) for structural and type conformance. Business rules such as
//! "gold must be positive" are not checked here.
//!
//! ## Layers
//!
//! - [`checks`]: primitive predicates (`is_integer`, `missing_keys`).
//! - [`blocks`]: shared integer blocks: stat block, resource cost, reward.
//! - [`records`]: one declarative schema per record kind and the
//!   `validate_*` functions built on them.
//! - [`driver`]: one file: load, locate the record array, scan every row,
//!   detect duplicate ids.
//! - [`run`]: all targets: concatenate defects, separate unreadable files,
//!   derive the exit status.
//!
//! ## Crate Policy
//!
//! - Depends only on `gamedata-core` internally.
//! - Row defects are accumulated, never returned as errors. Only a file
//!   that cannot be read or parsed produces an `Err`.
//! - Single-threaded. The seen-id set lives for one file scan.

pub mod blocks;
pub mod checks;
pub mod driver;
pub mod records;
pub mod run;

pub use blocks::{
    validate_resource_cost, validate_reward_block, validate_stat_block, BlockSchema,
};
pub use checks::{is_integer, json_type_name, missing_keys};
pub use driver::{load_document, row_id, validate_document, validate_file, FileOutcome};
pub use records::{
    validate_enemy, validate_passive, validate_quest, validate_skill, validator_for, RecordSchema,
    RecordValidator,
};
pub use run::{
    default_targets, run, targets_for, Target, ValidationReport, EXIT_DEFECTS, EXIT_PASS,
    EXIT_UNREADABLE,
};
