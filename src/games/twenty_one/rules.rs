//! Twenty-One rules: thresholds, outcome evaluation, and the dealer policy.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::core::config::{Pacing, ReplayPolicy, SessionConfig};
use crate::core::side::Side;
use crate::rules::RoundResult;

/// Participants at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Player,
    Dealer,
}

impl Side for Seat {
    const ALL: [Self; 2] = [Seat::Player, Seat::Dealer];

    fn is_human(self) -> bool {
        self == Seat::Player
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Player => write!(f, "Player"),
            Seat::Dealer => write!(f, "Dealer"),
        }
    }
}

/// A human decision at the hit-or-stay prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Hit,
    Stay,
}

impl Move {
    /// Parse an exact answer: `hit`, `h`, `stay` or `s`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "hit" | "h" => Some(Move::Hit),
            "stay" | "s" => Some(Move::Stay),
            _ => None,
        }
    }
}

/// Table rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwentyOneRules {
    /// Best possible total; anything above busts.
    pub target: u32,

    /// The dealer hits below this total and stays at or above it.
    pub dealer_stay: u32,

    /// Deck sizes at which one deal hands out two cards.
    pub double_deal_window: RangeInclusive<usize>,
}

impl Default for TwentyOneRules {
    fn default() -> Self {
        Self {
            target: 21,
            dealer_stay: 17,
            double_deal_window: 49..=52,
        }
    }
}

impl TwentyOneRules {
    #[must_use]
    pub fn busted(&self, total: u32) -> bool {
        total > self.target
    }

    /// Should the dealer take another card at `total`?
    #[must_use]
    pub fn dealer_should_hit(&self, total: u32) -> bool {
        total < self.dealer_stay
    }

    /// Decide a finished round from both totals.
    ///
    /// A player bust loses even if the dealer would also have busted.
    #[must_use]
    pub fn detect_winner(&self, player_total: u32, dealer_total: u32) -> RoundResult<Seat> {
        if self.busted(player_total) {
            RoundResult::Winner(Seat::Dealer)
        } else if self.busted(dealer_total) {
            RoundResult::Winner(Seat::Player)
        } else if player_total > dealer_total {
            RoundResult::Winner(Seat::Player)
        } else if dealer_total > player_total {
            RoundResult::Winner(Seat::Dealer)
        } else {
            RoundResult::Tie
        }
    }
}

/// Complete Twenty-One configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TwentyOneConfig {
    pub rules: TwentyOneRules,
    pub session: SessionConfig,
}

impl Default for TwentyOneConfig {
    fn default() -> Self {
        Self {
            rules: TwentyOneRules::default(),
            session: SessionConfig::new("Twenty-One", 2, ReplayPolicy::UnlessDeclined)
                .with_ties_can_win(true)
                .with_pacing(Pacing::default().with_long(std::time::Duration::from_secs(10))),
        }
    }
}

impl TwentyOneConfig {
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
