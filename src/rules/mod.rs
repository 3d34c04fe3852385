//! Round engine trait for game implementations.
//!
//! Games implement `RoundEngine` to define:
//! - How each round starts
//! - How turns alternate
//! - Win/bust/tie conditions
//!
//! The session loop calls into `RoundEngine` but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::{RoundEngine, RoundResult};
