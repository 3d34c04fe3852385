//! Session scorekeeping.
//!
//! A `Scoreboard` counts round wins per side plus ties. It is owned by the
//! session loop, updated once per finished round, and replaced on replay.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::side::Side;
use crate::rules::RoundResult;

/// Round tallies for one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize",
    deserialize = "S: Deserialize<'de>"
))]
pub struct Scoreboard<S: Side> {
    wins: FxHashMap<S, u32>,
    ties: u32,
    threshold: u32,
    #[serde(default)]
    ties_can_win: bool,
}

impl<S: Side> Scoreboard<S> {
    /// Create an empty scoreboard whose grand winner needs `threshold` wins.
    pub fn new(threshold: u32) -> Self {
        assert!(threshold > 0, "Grand win threshold must be at least 1");

        let wins = S::ALL.iter().map(|&side| (side, 0)).collect();
        Self {
            wins,
            ties: 0,
            threshold,
            ties_can_win: false,
        }
    }

    /// Let the tie count end the match once it reaches the threshold.
    #[must_use]
    pub fn with_ties_can_win(mut self, ties_can_win: bool) -> Self {
        self.ties_can_win = ties_can_win;
        self
    }

    /// Count one finished round.
    pub fn update_score(&mut self, result: RoundResult<S>) {
        match result {
            RoundResult::Winner(side) => *self.wins.entry(side).or_insert(0) += 1,
            RoundResult::Tie => self.ties += 1,
        }
    }

    /// Rounds won by `side`.
    #[must_use]
    pub fn wins(&self, side: S) -> u32 {
        self.wins.get(&side).copied().unwrap_or(0)
    }

    /// Rounds that ended level.
    #[must_use]
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Total rounds recorded.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.wins.values().sum::<u32>() + self.ties
    }

    /// Wins needed to take the session.
    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// The tally that reached the threshold, if any.
    ///
    /// Sides are checked in `S::ALL` order, then ties when they can win.
    #[must_use]
    pub fn grand_winner(&self) -> Option<RoundResult<S>> {
        S::ALL
            .into_iter()
            .find(|&side| self.wins(side) >= self.threshold)
            .map(RoundResult::Winner)
            .or_else(|| (self.ties_can_win && self.ties >= self.threshold).then_some(RoundResult::Tie))
    }
}

impl<S: Side> fmt::Display for Scoreboard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SCOREBOARD")?;
        for side in S::ALL {
            writeln!(f, "{}: {}", side, self.wins(side))?;
        }
        write!(f, "Tie: {}", self.ties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::twenty_one::Seat;

    #[test]
    fn test_new_scoreboard_is_empty() {
        let board: Scoreboard<Seat> = Scoreboard::new(2);
        assert_eq!(board.wins(Seat::Player), 0);
        assert_eq!(board.wins(Seat::Dealer), 0);
        assert_eq!(board.ties(), 0);
        assert_eq!(board.rounds_played(), 0);
        assert_eq!(board.grand_winner(), None);
    }

    #[test]
    fn test_update_increments_one_key() {
        let mut board = Scoreboard::new(5);

        board.update_score(RoundResult::Winner(Seat::Dealer));
        assert_eq!(board.wins(Seat::Dealer), 1);
        assert_eq!(board.wins(Seat::Player), 0);
        assert_eq!(board.ties(), 0);

        board.update_score(RoundResult::Tie);
        assert_eq!(board.wins(Seat::Dealer), 1);
        assert_eq!(board.ties(), 1);
        assert_eq!(board.rounds_played(), 2);
    }

    #[test]
    fn test_grand_winner_at_threshold() {
        let mut board = Scoreboard::new(2);

        board.update_score(RoundResult::Winner(Seat::Player));
        assert_eq!(board.grand_winner(), None);

        board.update_score(RoundResult::Winner(Seat::Dealer));
        assert_eq!(board.grand_winner(), None);

        board.update_score(RoundResult::Winner(Seat::Player));
        assert_eq!(board.grand_winner(), Some(RoundResult::Winner(Seat::Player)));
    }

    #[test]
    fn test_ties_ignored_by_default() {
        let mut board: Scoreboard<Seat> = Scoreboard::new(2);
        for _ in 0..5 {
            board.update_score(RoundResult::Tie);
        }
        assert_eq!(board.grand_winner(), None);
        assert_eq!(board.ties(), 5);
    }

    #[test]
    fn test_two_ties_end_match_when_allowed() {
        let mut board: Scoreboard<Seat> = Scoreboard::new(2).with_ties_can_win(true);

        board.update_score(RoundResult::Tie);
        board.update_score(RoundResult::Winner(Seat::Dealer));
        assert_eq!(board.grand_winner(), None);

        board.update_score(RoundResult::Tie);
        assert_eq!(board.grand_winner(), Some(RoundResult::Tie));
    }

    #[test]
    fn test_display() {
        let mut board = Scoreboard::new(2);
        board.update_score(RoundResult::Winner(Seat::Player));
        board.update_score(RoundResult::Tie);

        assert_eq!(board.to_string(), "SCOREBOARD\nPlayer: 1\nDealer: 0\nTie: 1");
    }

    #[test]
    fn test_serialization() {
        let mut board = Scoreboard::new(3);
        board.update_score(RoundResult::Winner(Seat::Dealer));

        let json = serde_json::to_string(&board).unwrap();
        let restored: Scoreboard<Seat> = serde_json::from_str(&json).unwrap();
        assert_eq!(board, restored);
    }
}
