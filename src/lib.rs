//! Terminal snake with timed power-ups.
//!
//! The crate splits into a pure, deterministic game core (`core`), a keyboard
//! mapping layer (`input`), and a terminal frontend (`term`). The binary in
//! `main.rs` wires them into a fixed-timestep loop.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
