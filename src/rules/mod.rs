//! Lights Out rules.
//!
//! `BoardEngine` generates boards and applies flips. The win condition is
//! "every light off", reported as `GameStatus`. Move counting belongs to
//! the session, not the engine.

pub mod engine;

pub use engine::{BoardEngine, GameStatus};
