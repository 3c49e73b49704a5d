//! RNG module - deterministic random placement and kind draws
//!
//! A small seeded LCG keeps games reproducible: the same seed produces the
//! same apple and power-up sequence, which the scenario tests rely on.

use crate::types::{Position, GRID_HEIGHT, GRID_WIDTH, UNIT_SIZE};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Pick a uniformly random grid-aligned cell.
    ///
    /// Occupancy is not considered; overlap with the snake or other entities
    /// is legal for both apples and power-ups.
    pub fn next_cell(&mut self) -> Position {
        let col = self.next_range(GRID_WIDTH as u32) as i32;
        let row = self.next_range(GRID_HEIGHT as u32) as i32;
        Position::new(col * UNIT_SIZE, row * UNIT_SIZE)
    }

    /// Current state, usable as a seed to resume the stream.
    pub fn state(&self) -> u32 {
        self.state
    }
}
