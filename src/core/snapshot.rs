//! Read-only view of the game state for render/HUD collaborators.

use arrayvec::ArrayVec;

use crate::core::power_up::PowerUp;
use crate::types::{Position, GAME_UNITS, MAX_POWER_UPS};

/// Everything the renderer needs for one frame.
///
/// Produced by `GameState::snapshot_into`; nothing written back through a
/// snapshot ever reaches game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Snake segments, head first.
    pub segments: ArrayVec<Position, GAME_UNITS>,
    pub apple: Position,
    pub power_ups: ArrayVec<PowerUp, MAX_POWER_UPS>,
    pub score: u32,
    pub high_score: u32,
    pub started: bool,
    pub game_over: bool,
    /// Remaining whole seconds per effect slot (HUD countdowns).
    pub effect_secs: [u32; 3],
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.segments.clear();
        self.apple = Position::default();
        self.power_ups.clear();
        self.score = 0;
        self.high_score = 0;
        self.started = false;
        self.game_over = false;
        self.effect_secs = [0; 3];
    }

    /// True while gameplay is live (past the welcome screen, not dead).
    pub fn playable(&self) -> bool {
        self.started && !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            segments: ArrayVec::new(),
            apple: Position::default(),
            power_ups: ArrayVec::new(),
            score: 0,
            high_score: 0,
            started: false,
            game_over: false,
            effect_secs: [0; 3],
        }
    }
}
