//! # Record Validators
//!
//! One schema per record kind, expressed as a declarative field table.
//! Every record validator runs the same ladder and stops at the first
//! failing rung:
//!
//! 1. all required keys present (`missing keys: [...]`);
//! 2. scalar fields (string, integer) in declared order;
//! 3. nested blocks and object fields in declared order, with the nested
//!    reason prefixed by the containing field (`base_stats invalid: ...`);
//! 4. array fields in declared order.
//!
//! Validators take a record already known to be a JSON object and are total
//! over any such input.

use serde_json::{Map, Value};

use gamedata_core::RecordKind;

use crate::blocks::{BlockSchema, RESOURCE_COST, REWARD_BLOCK, STAT_BLOCK};
use crate::checks::{format_keys, is_integer, missing_keys};

/// Signature shared by every record validator. `None` means valid.
pub type RecordValidator = fn(&Map<String, Value>) -> Option<String>;

/// Expected type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Array,
    /// Any JSON object; contents are not inspected.
    Object,
    /// An integer block checked against a shared sub-schema.
    Block(&'static BlockSchema),
}

/// Rung of the validation ladder a field type is checked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Rung {
    Scalar,
    Nested,
    Sequence,
}

impl FieldType {
    fn rung(&self) -> Rung {
        match self {
            Self::String | Self::Integer => Rung::Scalar,
            Self::Object | Self::Block(_) => Rung::Nested,
            Self::Array => Rung::Sequence,
        }
    }
}

/// A required field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,
}

impl Field {
    const fn new(name: &'static str, ty: FieldType) -> Self {
        Self { name, ty }
    }

    fn check(&self, value: &Value) -> Option<String> {
        let name = self.name;
        match self.ty {
            FieldType::String if !value.is_string() => Some(format!("{name} must be string")),
            FieldType::Integer if !is_integer(value) => Some(format!("{name} must be int")),
            FieldType::Array if !value.is_array() => Some(format!("{name} must be array")),
            FieldType::Object if !value.is_object() => Some(format!("{name} must be object")),
            FieldType::Block(block) => block
                .validate(value)
                .map(|reason| format!("{name} invalid: {reason}")),
            _ => None,
        }
    }
}

/// Required shape of one record kind.
#[derive(Debug)]
pub struct RecordSchema {
    pub kind: RecordKind,
    /// Required fields, in declared order.
    pub fields: &'static [Field],
}

pub static SKILL: RecordSchema = RecordSchema {
    kind: RecordKind::Skill,
    fields: &[
        Field::new("id", FieldType::String),
        Field::new("name", FieldType::String),
        Field::new("type", FieldType::String),
        Field::new("resource_cost", FieldType::Block(&RESOURCE_COST)),
        Field::new("status_effect", FieldType::String),
        Field::new("effect_value", FieldType::Integer),
        Field::new("description", FieldType::String),
    ],
};

pub static ENEMY: RecordSchema = RecordSchema {
    kind: RecordKind::Enemy,
    fields: &[
        Field::new("id", FieldType::String),
        Field::new("name", FieldType::String),
        Field::new("rank", FieldType::Integer),
        Field::new("base_stats", FieldType::Block(&STAT_BLOCK)),
        Field::new("skills", FieldType::Array),
        Field::new("passive_effects", FieldType::Array),
        Field::new("ai_pattern", FieldType::Array),
        Field::new("reward", FieldType::Block(&REWARD_BLOCK)),
    ],
};

pub static PASSIVE: RecordSchema = RecordSchema {
    kind: RecordKind::Passive,
    fields: &[
        Field::new("id", FieldType::String),
        Field::new("name", FieldType::String),
        Field::new("rarity", FieldType::String),
        Field::new("max_level", FieldType::Integer),
        Field::new("stat_bonus", FieldType::Block(&STAT_BLOCK)),
        Field::new("active_effect", FieldType::String),
        Field::new("description", FieldType::String),
    ],
};

pub static QUEST: RecordSchema = RecordSchema {
    kind: RecordKind::Quest,
    fields: &[
        Field::new("id", FieldType::String),
        Field::new("name", FieldType::String),
        Field::new("type", FieldType::String),
        Field::new("objectives", FieldType::Array),
        Field::new("time_limit", FieldType::Integer),
        Field::new("rewards", FieldType::Object),
        Field::new("branching_flags", FieldType::Array),
    ],
};

impl RecordSchema {
    pub fn for_kind(kind: RecordKind) -> &'static RecordSchema {
        match kind {
            RecordKind::Skill => &SKILL,
            RecordKind::Enemy => &ENEMY,
            RecordKind::Passive => &PASSIVE,
            RecordKind::Quest => &QUEST,
        }
    }

    pub fn required_keys(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    /// Run the validation ladder over `record`.
    pub fn validate(&self, record: &Map<String, Value>) -> Option<String> {
        let missing = missing_keys(record, &self.required_keys());
        if !missing.is_empty() {
            return Some(format!("missing keys: {}", format_keys(&missing)));
        }

        for rung in [Rung::Scalar, Rung::Nested, Rung::Sequence] {
            for field in self.fields.iter().filter(|f| f.ty.rung() == rung) {
                let Some(value) = record.get(field.name) else {
                    continue;
                };
                if let Some(reason) = field.check(value) {
                    return Some(reason);
                }
            }
        }

        None
    }
}

pub fn validate_skill(record: &Map<String, Value>) -> Option<String> {
    SKILL.validate(record)
}

pub fn validate_enemy(record: &Map<String, Value>) -> Option<String> {
    ENEMY.validate(record)
}

pub fn validate_passive(record: &Map<String, Value>) -> Option<String> {
    PASSIVE.validate(record)
}

pub fn validate_quest(record: &Map<String, Value>) -> Option<String> {
    QUEST.validate(record)
}

/// The validator for a record kind.
pub fn validator_for(kind: RecordKind) -> RecordValidator {
    match kind {
        RecordKind::Skill => validate_skill,
        RecordKind::Enemy => validate_enemy,
        RecordKind::Passive => validate_passive,
        RecordKind::Quest => validate_quest,
    }
}
