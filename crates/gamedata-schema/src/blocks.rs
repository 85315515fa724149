//! # Sub-schemas
//!
//! Small integer-valued blocks shared across record types:
//!
//! | Block | Keys | Used by |
//! |-------|------|---------|
//! | stat | `STR`, `INT`, `DEX`, `VIT` | Enemy `base_stats`, Passive `stat_bonus` |
//! | cost | `mp`, `ki` | Skill `resource_cost` |
//! | reward | `gold`, `exp` | Enemy `reward` |
//!
//! A block check reports at most one reason. Shape is checked before key
//! presence, key presence before value types.

use serde_json::Value;

use crate::checks::{format_keys, is_integer, missing_keys};

/// A mapping whose required keys must all hold integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSchema {
    /// Short name used in reasons (`missing stat keys: ...`).
    pub label: &'static str,
    /// Required keys, in reporting order.
    pub keys: &'static [&'static str],
}

pub static STAT_BLOCK: BlockSchema = BlockSchema {
    label: "stat",
    keys: &["STR", "INT", "DEX", "VIT"],
};

pub static RESOURCE_COST: BlockSchema = BlockSchema {
    label: "cost",
    keys: &["mp", "ki"],
};

pub static REWARD_BLOCK: BlockSchema = BlockSchema {
    label: "reward",
    keys: &["gold", "exp"],
};

impl BlockSchema {
    /// Check `value` against this block. `None` means valid.
    pub fn validate(&self, value: &Value) -> Option<String> {
        let Some(map) = value.as_object() else {
            return Some(format!("{} block must be an object", self.label));
        };

        let missing = missing_keys(map, self.keys);
        if !missing.is_empty() {
            return Some(format!("missing {} keys: {}", self.label, format_keys(&missing)));
        }

        let wrong_types: Vec<&str> = self
            .keys
            .iter()
            .copied()
            .filter(|key| !map.get(*key).is_some_and(is_integer))
            .collect();
        if !wrong_types.is_empty() {
            return Some(format!(
                "{} values must be int for keys: {}",
                self.label,
                format_keys(&wrong_types)
            ));
        }

        None
    }
}

pub fn validate_stat_block(value: &Value) -> Option<String> {
    STAT_BLOCK.validate(value)
}

pub fn validate_resource_cost(value: &Value) -> Option<String> {
    RESOURCE_COST.validate(value)
}

pub fn validate_reward_block(value: &Value) -> Option<String> {
    REWARD_BLOCK.validate(value)
}
