//! Timed effects manager.
//!
//! Each power-up kind owns one countdown slot. Activation loads the kind's
//! full window; `tick` drains the countdowns; a kind is active while its slot
//! is non-zero. Re-activation restarts the window, it never stacks. This
//! replaces the original's per-effect timer callbacks with per-tick
//! decrements, so expiry ordering relative to movement steps is fixed.

use crate::types::PowerUpKind;

#[derive(Debug, Clone, Default)]
pub struct ActiveEffects {
    remaining_ms: [u32; 3],
}

impl ActiveEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)start `kind`'s effect window at its full duration.
    pub fn activate(&mut self, kind: PowerUpKind) {
        self.remaining_ms[kind.slot()] = kind.duration_ms();
    }

    /// Drain all countdowns by `elapsed_ms`, clearing any that reach zero.
    pub fn tick(&mut self, elapsed_ms: u32) {
        for slot in self.remaining_ms.iter_mut() {
            *slot = slot.saturating_sub(elapsed_ms);
        }
    }

    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        self.remaining_ms[kind.slot()] > 0
    }

    pub fn remaining_ms(&self, kind: PowerUpKind) -> u32 {
        self.remaining_ms[kind.slot()]
    }

    /// Remaining whole seconds, rounded up, for the HUD countdown.
    ///
    /// Display-only: gameplay decisions always use `is_active`.
    pub fn remaining_secs(&self, kind: PowerUpKind) -> u32 {
        self.remaining_ms[kind.slot()].div_ceil(1000)
    }

    /// Cancel every effect (restart path; no stale windows may survive).
    pub fn clear(&mut self) {
        self.remaining_ms = [0; 3];
    }
}
