//! # gamedata-core: Foundational Types for Gameplay Data Validation
//!
//! Leaf crate of the workspace. Defines the vocabulary shared by the
//! validation engine and the CLI:
//!
//! 1. **`RecordKind`**: the closed set of record collections (Skill,
//!    Enemy, Passive, Quest). Each kind knows its data file name and the
//!    key of its record array. Exhaustive `match` everywhere, so adding a
//!    collection forces every consumer to handle it.
//!
//! 2. **`Defect`**: one row-level (or container-level) conformance
//!    failure. Defects are values, not errors: they are accumulated and
//!    reported together, never short-circuited.
//!
//! 3. **`LoadError`**: the fatal, per-file failure class (unreadable file,
//!    invalid JSON). Kept distinct from `Defect` so operators can tell bad
//!    syntax apart from bad schema conformance.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `gamedata-*` crates.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod defect;
pub mod error;
pub mod kind;

pub use defect::Defect;
pub use error::{GamedataError, LoadError};
pub use kind::{RecordKind, RECORD_KIND_COUNT};
