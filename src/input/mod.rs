//! Terminal input module.
//!
//! Maps `crossterm` key events into logical [`crate::types::GameAction`]s.
//! The reversal rule lives in the core (it needs the authoritative heading);
//! this layer only decides which keys mean what.

pub mod map;

pub use map::{handle_key_event, should_quit};
