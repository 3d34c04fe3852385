//! Session loop shared by both games.
//!
//! A session repeats rounds until one side reaches the grand-win threshold,
//! announces the grand winner, and asks whether to play again. Replaying
//! starts a new scoreboard; declining ends the session.

use std::io;

use tracing::{debug, info, instrument};

use crate::console::Console;
use crate::core::config::{Pause, ReplayPolicy};
use crate::core::scoreboard::Scoreboard;
use crate::core::side::Side;
use crate::core::GameRng;
use crate::display::SEPARATOR;
use crate::rules::{RoundEngine, RoundResult};

/// Drives an engine through matches, owning the session RNG.
pub struct Session<E: RoundEngine> {
    engine: E,
    rng: GameRng,
}

impl<E: RoundEngine> Session<E> {
    /// Create a session. Each round forks its own stream from `rng`.
    pub fn new(engine: E, rng: GameRng) -> Self {
        Self { engine, rng }
    }

    /// The game being played.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    fn pause<C: Console>(&self, console: &mut C, pause: Pause) {
        console.pause(self.engine.session().pacing.duration(pause));
    }

    /// Show the rules, then play matches until the human declines a replay.
    ///
    /// Returns the final scoreboard of every match played.
    #[instrument(skip_all, fields(game = %self.engine.session().title, seed = self.rng.seed()))]
    pub fn run<C: Console>(&mut self, console: &mut C) -> io::Result<Vec<Scoreboard<E::Side>>> {
        info!("session started");
        self.engine.show_rules(console)?;

        let mut matches = Vec::new();
        loop {
            let scoreboard = self.play_match(console)?;
            matches.push(scoreboard);

            if !self.play_again(console)? {
                break;
            }
            console.clear()?;
        }

        console.prompt(&format!("Thank you for playing {}!", self.engine.session().title))?;
        info!(matches = matches.len(), "session ended");
        Ok(matches)
    }

    /// Play rounds on a fresh scoreboard until there is a grand winner.
    pub fn play_match<C: Console>(&mut self, console: &mut C) -> io::Result<Scoreboard<E::Side>> {
        let config = self.engine.session();
        let mut scoreboard = Scoreboard::new(config.grand_win_threshold).with_ties_can_win(config.ties_can_win);

        let outcome = loop {
            let result = self.play_round(console)?;
            scoreboard.update_score(result);
            debug!(?result, rounds = scoreboard.rounds_played(), "score updated");

            self.pause(console, Pause::Medium);
            console.clear()?;
            console.say(&scoreboard.to_string())?;
            self.pause(console, Pause::Medium);

            if let Some(outcome) = scoreboard.grand_winner() {
                break outcome;
            }
        };

        console.clear()?;
        console.say(&scoreboard.to_string())?;
        console.blank_line()?;
        match outcome {
            RoundResult::Winner(side) => {
                console.prompt(&format!("{side} is the grand winner!"))?;
                info!(%side, human = side.is_human(), rounds = scoreboard.rounds_played(), "grand winner");
            }
            RoundResult::Tie => {
                console.prompt("Tie is the grand winner!")?;
                info!(rounds = scoreboard.rounds_played(), "match ended on ties");
            }
        }

        Ok(scoreboard)
    }

    /// Play one round on a fresh deck or board.
    pub fn play_round<C: Console>(&mut self, console: &mut C) -> io::Result<RoundResult<E::Side>> {
        let mut rng = self.rng.fork();
        let mut round = self.engine.new_round(&mut rng);
        self.engine.play_round(&mut round, console, &mut rng)
    }

    /// Ask whether to start a new match.
    pub fn play_again<C: Console>(&mut self, console: &mut C) -> io::Result<bool> {
        let replay = self.engine.session().replay;
        console.say(SEPARATOR)?;
        let question = match replay {
            ReplayPolicy::UnlessDeclined => "Do you want to play again?",
            ReplayPolicy::OnlyIfConfirmed => "Do you want to play again? (y/n)",
        };
        let answer = console.ask(question)?;
        Ok(replay.wants_another(&answer))
    }
}
