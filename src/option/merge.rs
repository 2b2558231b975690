use serde_json::{Map, Value};

use crate::error::{ChartError, ChartResult};

use super::{ChartOption, ComponentId, ComponentKey, lenient};

/// How a patch is applied to the live option document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SetOptionMode {
    /// Deep merge; component entries match by `id`, else by position.
    #[default]
    Merge,
    /// Listed components are taken from the patch as-is (absent means
    /// cleared); every other component merges.
    Replace(Vec<ComponentKey>),
    /// The patch becomes the whole document.
    NotMerge,
}

impl SetOptionMode {
    #[must_use]
    pub fn replace(keys: impl IntoIterator<Item = ComponentKey>) -> Self {
        Self::Replace(keys.into_iter().collect())
    }
}

/// Applies `patch` onto `base` with engine-style `setOption` semantics.
pub fn merge_chart_option(
    base: &ChartOption,
    patch: &ChartOption,
    mode: &SetOptionMode,
) -> ChartResult<ChartOption> {
    let replaced: &[ComponentKey] = match mode {
        SetOptionMode::NotMerge => return Ok(patch.clone()),
        SetOptionMode::Merge => &[],
        SetOptionMode::Replace(keys) => keys,
    };

    let mut base_map = to_object(base)?;
    let patch_map = to_object(patch)?;

    for key in replaced {
        base_map.remove(key.as_str());
    }

    for (key, incoming) in patch_map {
        match base_map.get_mut(&key) {
            Some(Value::Array(existing)) => {
                if let Value::Array(incoming) = incoming {
                    merge_components(existing, incoming);
                } else {
                    *existing = vec![incoming];
                }
            }
            Some(existing) => merge_value(existing, incoming),
            None => {
                base_map.insert(key, incoming);
            }
        }
    }

    lenient::from_object(base_map)
        .map_err(|e| ChartError::InvalidData(format!("merged option is not a chart option: {e}")))
}

/// Replaces entries of `live` with the patch entry of the same `id`
/// (position for entries without one) and appends unmatched patch entries.
///
/// Unlike a deep merge, a matched entry is taken whole, so fields cleared in
/// the patch are cleared in the result.
#[must_use]
pub fn upsert_components<T: Clone + ComponentId>(live: &[T], patch: Vec<T>) -> Vec<T> {
    let mut merged = live.to_vec();
    for (index, entry) in patch.into_iter().enumerate() {
        let slot = match entry.component_id() {
            Some(id) => merged.iter().position(|c| c.component_id() == Some(id)),
            None if index < merged.len() && merged[index].component_id().is_none() => Some(index),
            None => None,
        };
        match slot {
            Some(slot) => merged[slot] = entry,
            None => merged.push(entry),
        }
    }
    merged
}

fn to_object(option: &ChartOption) -> ChartResult<Map<String, Value>> {
    match serde_json::to_value(option) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ChartError::InvalidData(format!(
            "chart option serialized to non-object: {other}"
        ))),
        Err(e) => Err(ChartError::InvalidData(format!(
            "failed to serialize chart option: {e}"
        ))),
    }
}

fn component_id(value: &Value) -> Option<&str> {
    value.get("id").and_then(Value::as_str)
}

fn merge_components(existing: &mut Vec<Value>, incoming: Vec<Value>) {
    for (index, item) in incoming.into_iter().enumerate() {
        let slot = match component_id(&item) {
            Some(id) => existing.iter().position(|c| component_id(c) == Some(id)),
            None if index < existing.len() => Some(index),
            None => None,
        };
        match slot {
            Some(slot) => merge_value(&mut existing[slot], item),
            None => existing.push(item),
        }
    }
}

fn merge_value(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(&key) {
                    Some(slot) => merge_value(slot, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, patch) => *target = patch,
    }
}
