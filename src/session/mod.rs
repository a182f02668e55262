//! Game sessions.
//!
//! A session is one playthrough: it owns a board, counts accepted flips and
//! answers the presentation layer's queries. Starting over is `reset`, which
//! asks the engine for a new board of the same configuration.

mod game;
mod snapshot;

pub use game::{FlipOutcome, GameSession, RejectReason};
pub use snapshot::SessionSnapshot;
