//! Sides of a two-participant game.
//!
//! Each game names its own participants (`Seat` for Twenty-One, `Mark` for
//! Tic-Tac-Toe). The `Side` trait lets the scoreboard and session loop work
//! with either without knowing which game is running.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A participant that can win a round.
///
/// Ties are not a side; they are tracked separately by the scoreboard.
pub trait Side: Copy + Eq + Hash + Debug + Display + 'static {
    /// Every side, in display order. The human is listed first.
    const ALL: [Self; 2];

    /// Is this the human at the keyboard?
    fn is_human(self) -> bool;

    /// The other participant.
    #[must_use]
    fn opponent(self) -> Self {
        if self == Self::ALL[0] {
            Self::ALL[1]
        } else {
            Self::ALL[0]
        }
    }
}
