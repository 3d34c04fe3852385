//! Twenty-One against a dealer.
//!
//! - A fresh 52-card deck is shuffled every round
//! - Player and dealer are dealt two cards; one dealer card is shown
//! - The player hits or stays; going over 21 loses immediately
//! - The dealer hits below 17 and stays otherwise
//! - Higher total wins, equal totals tie

mod card;
mod deck;
mod game;
mod hand;
mod rules;

pub use card::{Card, Rank, Suit};
pub use deck::{Dealt, Deck, DECK_SIZE};
pub use game::{Phase, TwentyOne, TwentyOneRound};
pub use hand::{hand_value, Hand};
pub use rules::{Move, Seat, TwentyOneConfig, TwentyOneRules};
