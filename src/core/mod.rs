//! Core types shared by every game: sides, scorekeeping, RNG, configuration.
//!
//! Nothing here knows about cards or boards. Games plug their own side type
//! and rules into these pieces.

pub mod config;
pub mod rng;
pub mod scoreboard;
pub mod side;

pub use config::{Pacing, Pause, ReplayPolicy, SessionConfig};
pub use rng::GameRng;
pub use scoreboard::Scoreboard;
pub use side::Side;
