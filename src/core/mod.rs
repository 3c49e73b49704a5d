//! Core module - pure game logic with no external dependencies
//!
//! All the game rules live here: snake movement with wraparound, apple and
//! power-up handling, timed effects, scoring, and the tick-driven state
//! machine. Zero dependencies on UI, terminal, or I/O, so every rule is unit
//! tested and a game replays deterministically from a seed.
//!
//! # Module Structure
//!
//! - [`snake`]: ordered segment sequence with advance/grow/self-hit
//! - [`power_up`]: power-up entity and weighted no-repeat spawner
//! - [`effects`]: per-kind countdown windows (the timed effects manager)
//! - [`game_state`]: the state machine driven by fixed-timestep ticks
//! - [`snapshot`]: read-only per-frame view for rendering
//! - [`rng`]: small seeded LCG for reproducible placement and draws

pub mod effects;
pub mod game_state;
pub mod power_up;
pub mod rng;
pub mod snake;
pub mod snapshot;

pub use effects::ActiveEffects;
pub use game_state::GameState;
pub use power_up::{PowerUp, PowerUpSpawner};
pub use rng::SimpleRng;
pub use snake::Snake;
pub use snapshot::GameSnapshot;
