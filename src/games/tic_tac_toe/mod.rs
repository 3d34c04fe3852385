//! Tic-Tac-Toe against the computer.
//!
//! ## Rules
//! - Players alternate placing marks; who opens is drawn at random each round
//! - Win: three in a row (horizontal, vertical, or diagonal)
//! - Tie: board full with no winner
//!
//! ## Computer
//! One-ply heuristic: win if possible, otherwise block, otherwise take the
//! center, otherwise any empty cell at random.

mod board;
mod game;
mod rules;
pub mod strategy;

pub use board::{Board, CellId, EmptyCells, Mark, CELL_COUNT};
pub use game::{parse_cell, TicTacToe, TicTacToeRound};
pub use rules::{Line, TicTacToeConfig, TicTacToeRules, WINNING_LINES};
pub use strategy::{choose_cell, completing_cell, Reason};
