//! # Record Kinds
//!
//! Defines the `RecordKind` enum: the four gameplay record collections
//! checked by the validator. This is the one place that binds a collection
//! to its data file and to the key of its record array.

use std::str::FromStr;

use crate::error::GamedataError;

/// A gameplay record collection.
///
/// | Kind | File | List key |
/// |------|------|----------|
/// | Skill | `Skill.json` | `skills` |
/// | Enemy | `EnemyStat.json` | `enemies` |
/// | Passive | `Passive.json` | `passives` |
/// | Quest | `Quest.json` | `quests` |
///
/// Declaration order is the validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    /// Active skills with a resource cost.
    Skill,
    /// Enemy stat sheets.
    Enemy,
    /// Passive bonuses.
    Passive,
    /// Quest definitions.
    Quest,
}

/// Total number of record kinds.
pub const RECORD_KIND_COUNT: usize = 4;

impl RecordKind {
    /// All kinds, in validation order.
    pub fn all() -> &'static [RecordKind] {
        &[Self::Skill, Self::Enemy, Self::Passive, Self::Quest]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Skill => "skill",
            Self::Enemy => "enemy",
            Self::Passive => "passive",
            Self::Quest => "quest",
        }
    }

    /// Data file name, relative to the data root.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Skill => "Skill.json",
            Self::Enemy => "EnemyStat.json",
            Self::Passive => "Passive.json",
            Self::Quest => "Quest.json",
        }
    }

    /// Key of the record array inside the collection document.
    pub fn list_key(&self) -> &'static str {
        match self {
            Self::Skill => "skills",
            Self::Enemy => "enemies",
            Self::Passive => "passives",
            Self::Quest => "quests",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = GamedataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skill" => Ok(Self::Skill),
            "enemy" => Ok(Self::Enemy),
            "passive" => Ok(Self::Passive),
            "quest" => Ok(Self::Quest),
            other => Err(GamedataError::UnknownRecordKind(other.to_string())),
        }
    }
}
