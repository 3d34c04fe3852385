//! Tic-Tac-Toe round engine.

use std::io;

use tracing::{debug, warn};

use super::board::{Board, CellId, Mark};
use super::rules::{TicTacToeConfig, TicTacToeRules};
use super::strategy::choose_cell;
use crate::console::Console;
use crate::core::config::{Pause, SessionConfig};
use crate::core::side::Side;
use crate::core::GameRng;
use crate::display::join_words;
use crate::rules::{RoundEngine, RoundResult};

/// State of one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicTacToeRound {
    pub board: Board,
    /// Side that opened the round.
    pub first: Mark,
    /// Side to place the next marker.
    pub to_move: Mark,
}

impl TicTacToeRound {
    /// An empty board with `first` to move.
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            first,
            to_move: first,
        }
    }
}

/// Parse a cell answer. Surrounding whitespace is ignored.
#[must_use]
pub fn parse_cell(input: &str) -> Option<CellId> {
    input.trim().parse().ok()
}

/// The Tic-Tac-Toe game.
#[derive(Clone, Debug, Default)]
pub struct TicTacToe {
    config: TicTacToeConfig,
}

impl TicTacToe {
    pub fn new(config: TicTacToeConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn rules(&self) -> &TicTacToeRules {
        &self.config.rules
    }

    fn pause<C: Console>(&self, console: &mut C, pause: Pause) {
        console.pause(self.config.session.pacing.duration(pause));
    }

    fn show_board<C: Console>(&self, console: &mut C, board: &Board) -> io::Result<()> {
        console.clear()?;
        console.say(&board.to_string())
    }

    /// Ask for an empty cell until one is given, then mark it for the player.
    pub fn player_turn<C: Console>(&self, board: &mut Board, console: &mut C) -> io::Result<CellId> {
        loop {
            let empty: Vec<String> = board.empty_cells().iter().map(ToString::to_string).collect();
            let answer = console.ask(&format!("Please select a square: {}", join_words(&empty, "or")))?;

            if let Some(cell) = parse_cell(&answer).filter(|&cell| board.is_free(cell)) {
                board.place(cell, Mark::Player);
                debug!(cell, "player placed");
                return Ok(cell);
            }
            console.prompt("Please enter a valid square.")?;
        }
    }

    /// Mark the strategy's chosen cell for the computer.
    ///
    /// Returns `None` on a full board.
    pub fn computer_turn(&self, board: &mut Board, rng: &mut GameRng) -> Option<CellId> {
        let (cell, reason) = choose_cell(board, self.rules(), Mark::Computer, rng)?;
        board.place(cell, Mark::Computer);
        debug!(cell, ?reason, "computer placed");
        Some(cell)
    }

    /// Pick who opens the round, uniformly.
    pub fn choose_first(rng: &mut GameRng) -> Mark {
        rng.choose(&Mark::ALL).copied().unwrap_or(Mark::Player)
    }

    fn announce_winner<C: Console>(console: &mut C, result: RoundResult<Mark>) -> io::Result<()> {
        match result {
            RoundResult::Winner(mark) => console.prompt(&format!("{mark} won!")),
            RoundResult::Tie => console.prompt("It's a tie!"),
        }
    }
}

impl RoundEngine for TicTacToe {
    type Side = Mark;
    type Round = TicTacToeRound;

    fn session(&self) -> &SessionConfig {
        &self.config.session
    }

    fn show_rules<C: Console>(&self, console: &mut C) -> io::Result<()> {
        let session = self.session();

        console.clear()?;
        console.say(&format!("Welcome to {}!", session.title))?;
        console.say("Here are the rules for the game:")?;
        console.say("1) The game is played on a 3x3 board")?;
        console.say(&format!(
            "2) Player is '{}' and computer is '{}'",
            Mark::Player.symbol(),
            Mark::Computer.symbol()
        ))?;
        console.say("3) First player to reach 3 marks (row, column, or diagonal) wins")?;
        console.say(&format!(
            "4) First player to reach {} wins is the grand winner",
            session.grand_win_threshold
        ))?;
        console.say("5) Enjoy the game!")?;
        self.pause(console, Pause::Long);
        console.clear()
    }

    fn new_round(&self, rng: &mut GameRng) -> TicTacToeRound {
        TicTacToeRound::new(Self::choose_first(rng))
    }

    fn play_round<C: Console>(
        &self,
        round: &mut TicTacToeRound,
        console: &mut C,
        rng: &mut GameRng,
    ) -> io::Result<RoundResult<Mark>> {
        console.prompt("Let's see who is going first...")?;
        self.pause(console, Pause::Short);
        console.prompt(&format!("{} will go first!", round.first))?;
        self.pause(console, Pause::Medium);
        self.show_board(console, &round.board)?;

        let result = loop {
            if let Some(result) = self.is_terminal(round) {
                break result;
            }

            match round.to_move {
                Mark::Player => {
                    self.player_turn(&mut round.board, console)?;
                }
                Mark::Computer => {
                    if self.computer_turn(&mut round.board, rng).is_none() {
                        // Unreachable: a full board is terminal.
                        warn!("computer found no empty cell");
                        break RoundResult::Tie;
                    }
                }
            }
            round.to_move = round.to_move.opponent();
            self.show_board(console, &round.board)?;
        };

        debug!(?result, moves = round.board.fill_count(), "round settled");
        Self::announce_winner(console, result)?;
        Ok(result)
    }

    fn is_terminal(&self, round: &TicTacToeRound) -> Option<RoundResult<Mark>> {
        self.rules().evaluate(&round.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Terminal;
    use std::io::Cursor;

    fn game() -> TicTacToe {
        TicTacToe::new(TicTacToeConfig::default().without_pauses())
    }

    fn console(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("5"), Some(5));
        assert_eq!(parse_cell(" 7 "), Some(7));
        assert_eq!(parse_cell("x"), None);
        assert_eq!(parse_cell(""), None);
        assert_eq!(parse_cell("-1"), None);
    }

    #[test]
    fn test_player_turn_reprompts() {
        let game = game();
        let mut board = Board::from_marks(&[], &[5]);
        let mut console = console("abc\n5\n0\n10\n3\n");

        assert_eq!(game.player_turn(&mut board, &mut console).unwrap(), 3);
        assert_eq!(board.get(3), Some(Mark::Player));

        let out = console.output_text();
        assert_eq!(out.matches("Please enter a valid square.").count(), 4);
        assert!(out.contains("Please select a square: 1, 2, 3, 4, 6, 7, 8, or 9"));
    }

    #[test]
    fn test_computer_turn_uses_strategy() {
        let game = game();
        let mut board = Board::from_marks(&[4, 5], &[1]);

        assert_eq!(game.computer_turn(&mut board, &mut GameRng::new(0)), Some(6));
        assert_eq!(board.get(6), Some(Mark::Computer));
    }

    #[test]
    fn test_choose_first_is_seeded_and_varies() {
        let picks: Vec<Mark> = (0..32).map(|seed| TicTacToe::choose_first(&mut GameRng::new(seed))).collect();
        assert!(picks.contains(&Mark::Player));
        assert!(picks.contains(&Mark::Computer));
        assert_eq!(TicTacToe::choose_first(&mut GameRng::new(3)), TicTacToe::choose_first(&mut GameRng::new(3)));
    }

    #[test]
    fn test_computer_blocks_then_wins() {
        let game = game();
        let mut round = TicTacToeRound {
            board: Board::from_marks(&[1, 2], &[5]),
            first: Mark::Computer,
            to_move: Mark::Computer,
        };
        let mut console = console("9\n");

        // O blocks at 3, X ignores the [3, 5, 7] threat, O completes it at 7
        let result = game.play_round(&mut round, &mut console, &mut GameRng::new(0)).unwrap();
        assert_eq!(result, RoundResult::Winner(Mark::Computer));
        assert_eq!(round.board.get(3), Some(Mark::Computer));
        assert_eq!(round.board.get(7), Some(Mark::Computer));
        assert_eq!(round.board.fill_count(), 6);

        let out = console.output_text();
        assert!(out.contains("Computer will go first!"));
        assert!(out.contains("Computer won!"));
    }

    #[test]
    fn test_player_can_win() {
        let game = game();
        // Player holds 1 and 2 with 3 open; computer must not move first
        let mut round = TicTacToeRound {
            board: Board::from_marks(&[1, 2], &[4, 5]),
            first: Mark::Player,
            to_move: Mark::Player,
        };
        let mut console = console("3\n");

        let result = game.play_round(&mut round, &mut console, &mut GameRng::new(0)).unwrap();
        assert_eq!(result, RoundResult::Winner(Mark::Player));
        assert!(console.output_text().contains("Player won!"));
    }

    #[test]
    fn test_tie_round() {
        let game = game();
        // X | X | O
        // O | O | X
        // X | _ | X    computer to move, only 8 left
        let mut round = TicTacToeRound {
            board: Board::from_marks(&[1, 2, 6, 7, 9], &[3, 4, 5]),
            first: Mark::Player,
            to_move: Mark::Computer,
        };
        let mut console = console("");

        let result = game.play_round(&mut round, &mut console, &mut GameRng::new(0)).unwrap();
        assert_eq!(result, RoundResult::Tie);
        assert!(round.board.is_full());
        assert!(console.output_text().contains("It's a tie!"));
    }

    #[test]
    fn test_is_terminal_matches_rules() {
        let game = game();
        let round = TicTacToeRound::new(Mark::Player);
        assert_eq!(game.is_terminal(&round), None);
    }
}
