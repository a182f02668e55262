//! # lights-out
//!
//! Game-state engine for Lights Out: a grid of lights where flipping one
//! cell also flips its four orthogonal neighbors. The player wins when every
//! light is off.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No rendering or input handling. A presentation layer
//!    reads `SessionSnapshot`s and sends `flip` commands.
//!
//! 2. **Structured coordinates**: The engine takes `Coord { row, col }`.
//!    String keys such as `"2-3"` are parsed at the boundary.
//!
//! 3. **Derived win state**: Whether a board is won is always computed from
//!    its cells, never stored alongside them.
//!
//! ## Modules
//!
//! - `core`: Coordinates, configuration, seeded RNG, errors
//! - `board`: Board storage and the flip rule
//! - `rules`: `BoardEngine` (generation, flips) and `GameStatus`
//! - `session`: `GameSession` (move counting, flip policy, snapshots)
//!
//! ## Example
//!
//! ```
//! use lights_out::{BoardConfig, BoardEngine, Coord, GameSession};
//!
//! let mut engine = BoardEngine::new(42);
//! let config = BoardConfig::new(5, 5).with_chance(1.0);
//! let mut session = GameSession::new(&mut engine, config).unwrap();
//!
//! assert!(session.flip(Coord::new(2, 2)).is_accepted());
//! assert_eq!(session.move_count(), 1);
//! assert_eq!(session.lit_count(), 20);
//! ```

pub mod board;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{BoardConfig, ConfigError, Coord, CoordParseError, GameRng, GameRngState};

pub use crate::board::{count_lit, flip_cells_around, is_all_unlit, toggle_if_in_bounds, Board};

pub use crate::rules::{BoardEngine, GameStatus};

pub use crate::session::{FlipOutcome, GameSession, RejectReason, SessionSnapshot};
