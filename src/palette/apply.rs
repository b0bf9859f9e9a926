//! Lock enforcement
//!
//! Runs last and unconditionally. After [`apply`], every locked slot holds
//! exactly the locked hex, whatever the model produced.

use super::locks::LockedColor;
use super::{fallback_name, Color, Palette, PALETTE_SIZE};

/// Overlay `locks` onto `palette`, in order. Later locks on the same slot win.
///
/// The name comes from the lock when it has one, otherwise the slot keeps the
/// name the sanitizer produced.
pub fn apply(mut palette: Palette, locks: &[LockedColor]) -> Palette {
    for lock in locks {
        if lock.index >= PALETTE_SIZE {
            tracing::warn!(index = lock.index, "Skipping lock outside palette range");
            continue;
        }

        let slot = &mut palette.colors[lock.index];
        let name = lock
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .or_else(|| Some(slot.name.trim()).filter(|n| !n.is_empty()))
            .map(str::to_string)
            .unwrap_or_else(|| fallback_name(lock.index));

        *slot = Color {
            name,
            hex: lock.hex.clone(),
        };
    }

    palette
}
