//! Session configuration types.
//!
//! Each game builds a `SessionConfig` at startup:
//! - `grand_win_threshold`: round wins needed to take the session
//! - `ReplayPolicy`: how the "play again?" answer is read
//! - `Pacing`: display pauses between steps
//!
//! Rules specific to one game (targets, winning lines) live next to that
//! game and are passed explicitly into its engine functions.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How the answer to "play again?" is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplayPolicy {
    /// Keep playing unless the answer starts with `n`/`N`.
    UnlessDeclined,
    /// Stop unless the answer starts with `y`/`Y`.
    OnlyIfConfirmed,
}

impl ReplayPolicy {
    /// Does `answer` ask for another session?
    #[must_use]
    pub fn wants_another(self, answer: &str) -> bool {
        let first = answer.chars().next().map(|c| c.to_ascii_lowercase());
        match self {
            ReplayPolicy::UnlessDeclined => first != Some('n'),
            ReplayPolicy::OnlyIfConfirmed => first == Some('y'),
        }
    }
}

/// Length of a display pause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pause {
    /// Between individual deals and moves.
    Short,
    /// After a round result or banner.
    Medium,
    /// While the rules banner is on screen.
    Long,
}

/// Display pacing.
///
/// Pauses are cosmetic; `Pacing::none()` turns them all into no-ops.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pacing {
    /// Are pauses honoured at all?
    pub enabled: bool,
    pub short: Duration,
    pub medium: Duration,
    pub long: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            enabled: true,
            short: Duration::from_secs(2),
            medium: Duration::from_secs(3),
            long: Duration::from_secs(6),
        }
    }
}

impl Pacing {
    /// Pacing with every pause disabled.
    #[must_use]
    pub fn none() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Set the rules-banner pause.
    #[must_use]
    pub fn with_long(mut self, long: Duration) -> Self {
        self.long = long;
        self
    }

    /// The duration to wait for `pause`, zero when pacing is disabled.
    #[must_use]
    pub fn duration(&self, pause: Pause) -> Duration {
        if !self.enabled {
            return Duration::ZERO;
        }
        match pause {
            Pause::Short => self.short,
            Pause::Medium => self.medium,
            Pause::Long => self.long,
        }
    }
}

/// Configuration shared by every game's session loop.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Game name used in banners ("Twenty-One").
    pub title: String,

    /// Round wins a side needs to become grand winner.
    pub grand_win_threshold: u32,

    /// How the replay prompt is answered.
    pub replay: ReplayPolicy,

    /// Can the tie count reach the threshold and end a match?
    #[serde(default)]
    pub ties_can_win: bool,

    /// Display pauses.
    pub pacing: Pacing,
}

impl SessionConfig {
    /// Create a session config with default pacing.
    pub fn new(title: impl Into<String>, grand_win_threshold: u32, replay: ReplayPolicy) -> Self {
        assert!(grand_win_threshold > 0, "Grand win threshold must be at least 1");

        Self {
            title: title.into(),
            grand_win_threshold,
            replay,
            ties_can_win: false,
            pacing: Pacing::default(),
        }
    }

    /// Let ties end a match the way a side's wins do.
    #[must_use]
    pub fn with_ties_can_win(mut self, ties_can_win: bool) -> Self {
        self.ties_can_win = ties_can_win;
        self
    }

    /// Set the grand win threshold.
    #[must_use]
    pub fn with_grand_win_threshold(mut self, threshold: u32) -> Self {
        assert!(threshold > 0, "Grand win threshold must be at least 1");
        self.grand_win_threshold = threshold;
        self
    }

    /// Set the pacing.
    #[must_use]
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Disable every pause (tests, scripted play).
    #[must_use]
    pub fn without_pauses(self) -> Self {
        self.with_pacing(Pacing::none())
    }
}
