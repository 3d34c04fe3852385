//! The computer's move choice.
//!
//! A one-ply heuristic, re-evaluated on every computer turn:
//! 1. Complete its own line
//! 2. Block the player's line
//! 3. Take the center
//! 4. Pick any empty cell at random

use super::board::{Board, CellId, Mark};
use super::rules::TicTacToeRules;
use crate::core::side::Side;
use crate::core::GameRng;

/// Why a cell was picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reason {
    Offense,
    Defense,
    Center,
    Random,
}

/// The empty cell of the first line holding two `mark`s and one empty cell.
#[must_use]
pub fn completing_cell(board: &Board, rules: &TicTacToeRules, mark: Mark) -> Option<CellId> {
    rules.lines.iter().find_map(|line| {
        let owned = line.iter().filter(|&&cell| board.get(cell) == Some(mark)).count();
        let mut empty = line.iter().copied().filter(|&cell| board.is_free(cell));

        match (owned, empty.next(), empty.next()) {
            (2, Some(cell), None) => Some(cell),
            _ => None,
        }
    })
}

/// Choose a cell for `me`. `None` only on a full board.
pub fn choose_cell(
    board: &Board,
    rules: &TicTacToeRules,
    me: Mark,
    rng: &mut GameRng,
) -> Option<(CellId, Reason)> {
    if let Some(cell) = completing_cell(board, rules, me) {
        return Some((cell, Reason::Offense));
    }
    if let Some(cell) = completing_cell(board, rules, me.opponent()) {
        return Some((cell, Reason::Defense));
    }
    if board.is_free(rules.center) {
        return Some((rules.center, Reason::Center));
    }

    let empty = board.empty_cells();
    rng.choose(&empty).map(|&cell| (cell, Reason::Random))
}
