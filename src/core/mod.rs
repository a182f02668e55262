//! Core types: coordinates, configuration, RNG, errors.
//!
//! Nothing here knows about the flip rule; these are the building blocks
//! the board and session modules are made of.

pub mod config;
pub mod coord;
pub mod error;
pub mod rng;

pub use config::{BoardConfig, DEFAULT_CHANCE_LIT, DEFAULT_COLS, DEFAULT_ROWS, MAX_CELLS};
pub use coord::{Coord, PLUS_OFFSETS};
pub use error::{ConfigError, CoordParseError};
pub use rng::{GameRng, GameRngState};
