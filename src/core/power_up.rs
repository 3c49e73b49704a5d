//! Power-up entity and spawner.
//!
//! The spawner owns the weighted kind draw and the no-immediate-repeat rule:
//! SpeedUp 30%, GoThroughSelf 30%, DoublePoints 40%, redrawing while the
//! result matches the previously spawned kind. Placement is a uniform random
//! grid cell with no occupancy check, same as the original.

use crate::core::rng::SimpleRng;
use crate::types::{Position, PowerUpKind};

/// A placed, collectible power-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerUp {
    pub pos: Position,
    pub kind: PowerUpKind,
}

/// Chooses where and what to spawn, remembering the last kind spawned.
#[derive(Debug, Clone, Default)]
pub struct PowerUpSpawner {
    last_kind: Option<PowerUpKind>,
}

impl PowerUpSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn one power-up at a random cell.
    ///
    /// The kind draw loops until it differs from the previous spawn's kind;
    /// with three kinds this terminates quickly in practice.
    pub fn spawn(&mut self, rng: &mut SimpleRng) -> PowerUp {
        let pos = rng.next_cell();
        let kind = loop {
            let kind = weighted_kind(rng.next_range(100));
            if Some(kind) != self.last_kind {
                break kind;
            }
        };
        self.last_kind = Some(kind);
        PowerUp { pos, kind }
    }

    pub fn last_kind(&self) -> Option<PowerUpKind> {
        self.last_kind
    }

    /// Forget the previous spawn, so the next draw is unconstrained.
    pub fn reset(&mut self) {
        self.last_kind = None;
    }
}

fn weighted_kind(roll: u32) -> PowerUpKind {
    if roll < 30 {
        PowerUpKind::SpeedUp
    } else if roll < 60 {
        PowerUpKind::GoThroughSelf
    } else {
        PowerUpKind::DoublePoints
    }
}
