//! # parlor-games
//!
//! Two turn-based console games played against the computer, with
//! scorekeeping across rounds: Twenty-One and Tic-Tac-Toe.
//!
//! ## Design Principles
//!
//! 1. **One Engine Shape**: Both games implement `RoundEngine`. State is
//!    built fresh each round, turns advance it, and a pure evaluator decides
//!    when it is over.
//!
//! 2. **Explicit State**: Decks, boards and scoreboards are owned values
//!    threaded through each round. Rule constants live in config structs.
//!
//! 3. **Injected Randomness**: Shuffles, first-mover draws and the computer's
//!    random fallback all take a `GameRng`, so any session replays from its
//!    seed.
//!
//! ## Modules
//!
//! - `core`: Sides, scoreboard, RNG, configuration
//! - `rules`: `RoundEngine` trait and `RoundResult`
//! - `games`: Twenty-One and Tic-Tac-Toe
//! - `session`: Match and replay loop
//! - `console`: Line-oriented text I/O
//! - `display`: Shared text helpers
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use parlor_games::{GameRng, Session, Terminal, TicTacToe, TicTacToeConfig};
//!
//! let game = TicTacToe::new(TicTacToeConfig::default().without_pauses().with_grand_win_threshold(1));
//! let mut session = Session::new(game, GameRng::new(7));
//!
//! // Try every cell in order on each turn; invalid picks are re-prompted.
//! let input = "1\n2\n3\n4\n5\n6\n7\n8\n9\n".repeat(200);
//! let mut console = Terminal::new(Cursor::new(input), Vec::new());
//!
//! let matches = session.run(&mut console).unwrap();
//! assert_eq!(matches.len(), 1);
//! assert!(matches[0].grand_winner().is_some());
//! ```

pub mod console;
pub mod core;
pub mod display;
pub mod games;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameRng, Pacing, Pause, ReplayPolicy, Scoreboard, SessionConfig, Side};

pub use crate::rules::{RoundEngine, RoundResult};

pub use crate::console::{Console, StdioTerminal, Terminal};

pub use crate::session::Session;

pub use crate::games::tic_tac_toe::{Board, Mark, TicTacToe, TicTacToeConfig, TicTacToeRules};
pub use crate::games::twenty_one::{Card, Deck, Hand, Seat, TwentyOne, TwentyOneConfig, TwentyOneRules};
