//! Property merge primitive
//!
//! Every category rule writes through `merge_into`, so "create if absent" and
//! "overwrite only if present" behave the same everywhere.

use serde_json::{Map, Value};

/// When an override is allowed to write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Insert or overwrite the key
    Always,
    /// Overwrite the key only if the target already has it
    IfPresent,
}

/// A single property write
#[derive(Debug, Clone, PartialEq)]
pub struct Override {
    pub key: &'static str,
    pub value: Value,
    pub policy: WritePolicy,
}

impl Override {
    pub fn always(key: &'static str, value: impl Into<Value>) -> Self {
        Self {
            key,
            value: value.into(),
            policy: WritePolicy::Always,
        }
    }

    pub fn if_present(key: &'static str, value: impl Into<Value>) -> Self {
        Self {
            key,
            value: value.into(),
            policy: WritePolicy::IfPresent,
        }
    }
}

/// Apply overrides to a property mapping.
///
/// Existing keys keep their position; new keys are appended.
pub fn merge_into(target: &mut Map<String, Value>, overrides: &[Override]) {
    for item in overrides {
        match item.policy {
            WritePolicy::Always => {
                target.insert(item.key.to_string(), item.value.clone());
            }
            WritePolicy::IfPresent => {
                if let Some(slot) = target.get_mut(item.key) {
                    *slot = item.value.clone();
                }
            }
        }
    }
}

/// Apply overrides to the mapping stored under `container` in `fields`.
///
/// The container is created (or replaced, if it holds a non-object value) only
/// when at least one override must always be written.
pub fn merge_container(fields: &mut Map<String, Value>, container: &str, overrides: &[Override]) {
    if overrides.is_empty() {
        return;
    }

    if let Some(Value::Object(existing)) = fields.get_mut(container) {
        merge_into(existing, overrides);
        return;
    }

    let creates = overrides
        .iter()
        .any(|item| item.policy == WritePolicy::Always);
    if creates {
        let mut created = Map::new();
        merge_into(&mut created, overrides);
        fields.insert(container.to_string(), Value::Object(created));
    }
}
