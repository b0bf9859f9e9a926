//! Locked color slots
//!
//! Callers pin slots by index so a regeneration keeps those exact colors.
//! Raw lock records arrive untyped (straight from a JSON body); [`build`]
//! turns them into validated [`LockedColor`]s, dropping anything unusable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{hex, Palette, PALETTE_SIZE};

/// A slot pinned to an exact canonical hex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedColor {
    pub index: usize,
    pub hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl LockedColor {
    /// Validated constructor. `None` if the index is out of range or the hex
    /// does not normalize.
    pub fn new(index: usize, hex: &str, name: Option<&str>) -> Option<Self> {
        if index >= PALETTE_SIZE {
            return None;
        }
        let hex = hex::normalize(hex)?;
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        Some(Self { index, hex, name })
    }
}

/// Build the lock set from raw caller records.
///
/// Records with a non-integer or out-of-range `index`, or an invalid `hex`,
/// are dropped. When several records target the same slot the last valid one
/// wins. Output is ordered by index.
pub fn build(raw: &[Value]) -> Vec<LockedColor> {
    let mut by_index: BTreeMap<usize, LockedColor> = BTreeMap::new();

    for record in raw {
        match parse_record(record) {
            Some(lock) => {
                by_index.insert(lock.index, lock);
            }
            None => tracing::debug!(record = %record, "Dropping unusable lock record"),
        }
    }

    by_index.into_values().collect()
}

fn parse_record(record: &Value) -> Option<LockedColor> {
    let obj = record.as_object()?;
    let index = coerce_index(obj.get("index")?)?;
    let index = usize::try_from(index).ok()?;
    let hex = obj.get("hex")?.as_str()?;
    let name = obj.get("name").and_then(Value::as_str);
    LockedColor::new(index, hex, name)
}

/// Coerce a JSON value to an integer: integers, integral floats, and strings
/// holding either. Anything else (fractions, NaN text, bools, null) is `None`.
fn coerce_index(value: &Value) -> Option<i64> {
    let number = match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            n.as_f64()?
        }
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if number.is_finite() && number.fract() == 0.0 && number.abs() < i64::MAX as f64 {
        Some(number as i64)
    } else {
        None
    }
}

/// Caller-side lock state as a plain value.
///
/// Mirrors what an interactive client keeps between generations: click a
/// swatch to lock it, regenerate, then re-sync the locks from the answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockSnapshot {
    locked: BTreeMap<usize, LockedColor>,
}

impl LockSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock slot `index` to its current color, or unlock it if already locked.
    /// No-op for an out-of-range index or a slot without a usable hex.
    pub fn toggle(&mut self, palette: &Palette, index: usize) {
        if self.locked.remove(&index).is_some() {
            return;
        }
        let Some(color) = palette.colors.get(index) else {
            return;
        };
        if let Some(lock) = LockedColor::new(index, &color.hex, Some(&color.name)) {
            self.locked.insert(index, lock);
        }
    }

    /// Re-sync every locked slot's hex and name from a freshly returned palette
    pub fn refresh(&mut self, palette: &Palette) {
        for (index, lock) in self.locked.iter_mut() {
            let color = &palette.colors[*index];
            if let Some(updated) = LockedColor::new(*index, &color.hex, Some(&color.name)) {
                *lock = updated;
            }
        }
    }

    pub fn clear(&mut self) {
        self.locked.clear();
    }

    pub fn len(&self) -> usize {
        self.locked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locked.is_empty()
    }

    pub fn is_locked(&self, index: usize) -> bool {
        self.locked.contains_key(&index)
    }

    /// Locks ordered by index
    pub fn to_locks(&self) -> Vec<LockedColor> {
        self.locked.values().cloned().collect()
    }

    /// Wire form for the `lockedColors` request field
    pub fn to_raw(&self) -> Vec<Value> {
        self.locked
            .values()
            .filter_map(|lock| serde_json::to_value(lock).ok())
            .collect()
    }
}
