//! The 52-card deck, consumed from the tail.

use std::ops::RangeInclusive;

use im::Vector;
use smallvec::SmallVec;

use super::card::{Card, Rank, Suit};
use crate::core::GameRng;

/// Cards handed out by one deal.
pub type Dealt = SmallVec<[Card; 2]>;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// A shuffled deck. Cards are drawn from the back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Build every (rank, suit) combination and shuffle it with `rng`.
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = Rank::ALL
            .iter()
            .flat_map(|&rank| Suit::ALL.iter().map(move |&suit| Card::new(rank, suit)))
            .collect();
        rng.shuffle(&mut cards);

        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// A deck in a known order. The last card is dealt first.
    pub fn stacked(cards: impl IntoIterator<Item = Card>) -> Self {
        let cards: Vector<Card> = cards.into_iter().collect();
        assert!(cards.len() <= DECK_SIZE, "A deck holds at most 52 cards");
        Self { cards }
    }

    /// Remove `count` cards from the back and return them in deck order.
    ///
    /// Returns `None`, dealing nothing, if fewer than `count` remain.
    pub fn deal(&mut self, count: usize) -> Option<Dealt> {
        if count > self.cards.len() {
            return None;
        }
        let tail = self.cards.split_off(self.cards.len() - count);
        Some(tail.into_iter().collect())
    }

    /// Deal two cards while the remaining size is inside `double_window`,
    /// otherwise one.
    ///
    /// With the standard `49..=52` window this gives both opening hands two
    /// cards and every later hit a single card.
    pub fn deal_next(&mut self, double_window: &RangeInclusive<usize>) -> Option<Dealt> {
        let count = if double_window.contains(&self.cards.len()) { 2 } else { 1 };
        self.deal(count)
    }

    /// Cards left to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the remaining cards, next-to-deal last.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
