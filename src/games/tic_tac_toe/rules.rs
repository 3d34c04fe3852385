//! Tic-Tac-Toe rules and outcome evaluation.

use serde::{Deserialize, Serialize};

use super::board::{Board, CellId, Mark};
use crate::core::config::{ReplayPolicy, SessionConfig};
use crate::rules::RoundResult;

/// A winning line of three cells.
pub type Line = [CellId; 3];

/// Rows, then columns, then diagonals. Strategy tie-breaks follow this order.
pub const WINNING_LINES: [Line; 8] = [
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9],
    [1, 5, 9],
    [3, 5, 7],
];

/// Board rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeRules {
    /// Lines that win when one side fills them, in evaluation order.
    pub lines: Vec<Line>,

    /// Cell the computer prefers when nothing is urgent.
    pub center: CellId,
}

impl Default for TicTacToeRules {
    fn default() -> Self {
        Self {
            lines: WINNING_LINES.to_vec(),
            center: 5,
        }
    }
}

impl TicTacToeRules {
    /// The side owning a complete line, checked in line order.
    #[must_use]
    pub fn detect_winner(&self, board: &Board) -> Option<Mark> {
        self.lines.iter().find_map(|line| {
            let first = board.get(line[0])?;
            line.iter().all(|&cell| board.get(cell) == Some(first)).then_some(first)
        })
    }

    /// Round result if the board is finished, `None` while play continues.
    #[must_use]
    pub fn evaluate(&self, board: &Board) -> Option<RoundResult<Mark>> {
        match self.detect_winner(board) {
            Some(mark) => Some(RoundResult::Winner(mark)),
            None if board.is_full() => Some(RoundResult::Tie),
            None => None,
        }
    }
}

/// Complete Tic-Tac-Toe configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TicTacToeConfig {
    pub rules: TicTacToeRules,
    pub session: SessionConfig,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            rules: TicTacToeRules::default(),
            session: SessionConfig::new("Tic-Tac-Toe", 5, ReplayPolicy::OnlyIfConfirmed),
        }
    }
}

impl TicTacToeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the round wins needed for a grand winner.
    #[must_use]
    pub fn with_grand_win_threshold(mut self, threshold: u32) -> Self {
        self.session = self.session.with_grand_win_threshold(threshold);
        self
    }

    /// Disable display pauses.
    #[must_use]
    pub fn without_pauses(mut self) -> Self {
        self.session = self.session.without_pauses();
        self
    }
}
