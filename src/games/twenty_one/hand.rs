//! Hands and their values.

use smallvec::SmallVec;

use super::card::Card;
use crate::display::join_words;

/// Total of `cards` against `target`.
///
/// Aces start at 11. Then, once per Ace, the total drops by 10 while it is
/// still above `target`.
///
/// ```
/// use parlor_games::games::twenty_one::{hand_value, Card, Rank, Suit};
///
/// let hand = [
///     Card::new(Rank::Ace, Suit::Heart),
///     Card::new(Rank::Ace, Suit::Club),
///     Card::new(Rank::King, Suit::Spade),
/// ];
/// assert_eq!(hand_value(&hand, 21), 12);
/// ```
pub fn hand_value(cards: &[Card], target: u32) -> u32 {
    let mut total: u32 = cards.iter().map(|c| c.rank.base_value()).sum();

    for _ in cards.iter().filter(|c| c.rank.is_ace()) {
        if total > target {
            total -= 10;
        }
    }

    total
}

/// Cards held by the player or the dealer, in the order received.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The first card, shown face up before the dealer's turn.
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    #[must_use]
    pub fn total(&self, target: u32) -> u32 {
        hand_value(&self.cards, target)
    }

    /// Cards as a sentence: "2 of Club, 9 of Heart, and K of Spade".
    #[must_use]
    pub fn describe(&self) -> String {
        let names: Vec<String> = self.cards.iter().map(ToString::to_string).collect();
        join_words(&names, "and")
    }
}
