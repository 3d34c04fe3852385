//! Round engine trait for game implementations.
//!
//! Games implement `RoundEngine` to define their rules:
//! - How a fresh round is dealt or laid out
//! - How turns alternate until the round ends
//! - When a round is over and who won it

use std::io;

use crate::console::Console;
use crate::core::config::SessionConfig;
use crate::core::rng::GameRng;
use crate::core::side::Side;

/// Result of a completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum RoundResult<S> {
    /// Single winner.
    Winner(S),
    /// Level at the end (equal totals, full board).
    Tie,
}

impl<S: PartialEq + Copy> RoundResult<S> {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: S) -> bool {
        matches!(self, RoundResult::Winner(s) if *s == side)
    }

    /// The winning side, if the round was not a tie.
    #[must_use]
    pub fn winner(&self) -> Option<S> {
        match self {
            RoundResult::Winner(s) => Some(*s),
            RoundResult::Tie => None,
        }
    }
}

/// Round engine trait.
///
/// The session loop calls these methods once per round.
///
/// ## Implementation Notes
///
/// - `new_round`: All randomness comes from the passed RNG
/// - `play_round`: Drives turns through the console until `is_terminal` resolves
/// - `is_terminal`: Pure; return `None` while the round continues
pub trait RoundEngine {
    /// The participants of this game.
    type Side: Side;

    /// Mutable state of one round (deck and hands, or board).
    type Round;

    /// Session configuration (threshold, replay policy, pacing).
    fn session(&self) -> &SessionConfig;

    /// Print the rules banner shown once at startup.
    fn show_rules<C: Console>(&self, console: &mut C) -> io::Result<()>;

    /// Build a fresh round.
    fn new_round(&self, rng: &mut GameRng) -> Self::Round;

    /// Play `round` to completion, alternating human and computer turns.
    fn play_round<C: Console>(
        &self,
        round: &mut Self::Round,
        console: &mut C,
        rng: &mut GameRng,
    ) -> io::Result<RoundResult<Self::Side>>;

    /// Check if the round is over.
    ///
    /// Returns `Some(result)` if the round has ended, `None` if it continues.
    fn is_terminal(&self, round: &Self::Round) -> Option<RoundResult<Self::Side>>;
}
