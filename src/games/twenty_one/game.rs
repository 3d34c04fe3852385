//! Twenty-One round engine.

use std::io;

use tracing::{debug, warn};

use super::deck::{Dealt, Deck};
use super::hand::Hand;
use super::rules::{Move, Seat, TwentyOneConfig, TwentyOneRules};
use crate::console::Console;
use crate::core::config::{Pause, SessionConfig};
use crate::core::GameRng;
use crate::display::{boxed, SEPARATOR};
use crate::rules::{RoundEngine, RoundResult};

/// Where a round is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    PlayerTurn,
    DealerTurn,
    Settled,
}

/// State of one round: the deck and both hands.
#[derive(Clone, Debug)]
pub struct TwentyOneRound {
    pub deck: Deck,
    pub player: Hand,
    pub dealer: Hand,
    pub phase: Phase,
}

impl TwentyOneRound {
    /// Deal both opening hands from `deck`.
    pub fn deal(mut deck: Deck, rules: &TwentyOneRules) -> Self {
        let mut player = Hand::new();
        let mut dealer = Hand::new();
        player.extend(deck.deal_next(&rules.double_deal_window).unwrap_or_default());
        dealer.extend(deck.deal_next(&rules.double_deal_window).unwrap_or_default());

        Self {
            deck,
            player,
            dealer,
            phase: Phase::PlayerTurn,
        }
    }
}

/// The Twenty-One game.
#[derive(Clone, Debug, Default)]
pub struct TwentyOne {
    config: TwentyOneConfig,
}

impl TwentyOne {
    pub fn new(config: TwentyOneConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn rules(&self) -> &TwentyOneRules {
        &self.config.rules
    }

    fn pause<C: Console>(&self, console: &mut C, pause: Pause) {
        console.pause(self.config.session.pacing.duration(pause));
    }

    /// Draw one card for `seat`. `None` if the deck has run out.
    fn hit(deck: &mut Deck, seat: Seat) -> Option<Dealt> {
        let dealt = deck.deal(1);
        if dealt.is_none() {
            warn!(%seat, "deck exhausted, turn ends");
        }
        dealt
    }

    /// Ask hit-or-stay until a recognised answer arrives.
    pub fn hit_or_stay<C: Console>(&self, console: &mut C) -> io::Result<Move> {
        loop {
            let answer = console.ask("Do you want to (h)it or (s)tay?")?;
            if let Some(choice) = Move::parse(&answer) {
                return Ok(choice);
            }
            console.prompt("Please input a valid choice.")?;
        }
    }

    /// The player's turn. Returns the final total.
    ///
    /// Ends at the target or above without asking, on "stay", or when the
    /// deck runs out.
    pub fn player_turn<C: Console>(&self, round: &mut TwentyOneRound, console: &mut C) -> io::Result<u32> {
        let target = self.rules().target;
        let mut total = round.player.total(target);

        loop {
            console.prompt(&format!("You have: {}", round.player.describe()))?;
            console.prompt(&format!("Your total: {total}"))?;
            if total >= target {
                break;
            }

            if self.hit_or_stay(console)? == Move::Stay {
                break;
            }

            let Some(dealt) = Self::hit(&mut round.deck, Seat::Player) else {
                break;
            };
            for card in &dealt {
                console.prompt(&format!("You received: {card}"))?;
            }
            round.player.extend(dealt);

            total = round.player.total(target);
            debug!(total, cards = round.player.len(), "player hit");
            self.pause(console, Pause::Short);
        }

        Ok(total)
    }

    /// The dealer's turn. Hits below the stay threshold. Returns the final total.
    pub fn dealer_turn<C: Console>(&self, round: &mut TwentyOneRound, console: &mut C) -> io::Result<u32> {
        let rules = self.rules();
        let mut total = round.dealer.total(rules.target);

        console.prompt(&format!("Dealer showing: {}", round.dealer.describe()))?;
        console.prompt(&format!("Dealer total: {total}"))?;

        while rules.dealer_should_hit(total) {
            self.pause(console, Pause::Short);
            console.prompt("Dealer hit")?;

            let Some(dealt) = Self::hit(&mut round.deck, Seat::Dealer) else {
                break;
            };
            self.pause(console, Pause::Short);
            for card in &dealt {
                console.prompt(&format!("Dealer received: {card}"))?;
            }
            round.dealer.extend(dealt);

            total = round.dealer.total(rules.target);
            debug!(total, cards = round.dealer.len(), "dealer hit");
            self.pause(console, Pause::Short);
            console.prompt(&format!("Dealer total: {total}"))?;
        }

        Ok(total)
    }

    fn announce_total<C: Console>(&self, console: &mut C, seat: Seat, total: u32) -> io::Result<()> {
        if self.rules().busted(total) {
            console.prompt(&format!("{seat} busted with {total}."))
        } else {
            console.prompt(&format!("{seat} stayed at: {total}"))
        }
    }

    fn announce_winner<C: Console>(console: &mut C, result: RoundResult<Seat>) -> io::Result<()> {
        match result {
            RoundResult::Winner(Seat::Player) => console.prompt("You win!"),
            RoundResult::Winner(Seat::Dealer) => console.prompt("Dealer win!"),
            RoundResult::Tie => console.prompt("It's a tie!"),
        }
    }
}

impl RoundEngine for TwentyOne {
    type Side = Seat;
    type Round = TwentyOneRound;

    fn session(&self) -> &SessionConfig {
        &self.config.session
    }

    fn show_rules<C: Console>(&self, console: &mut C) -> io::Result<()> {
        let rules = self.rules();
        let session = self.session();

        console.clear()?;
        console.say(&format!("Welcome to {}!", session.title))?;
        console.say("- You will be playing against a dealer")?;
        console.say("- Two cards will be dealt in the beginning")?;
        console.say("- You can only see one card from the dealer until your turn ended")?;
        console.say(&format!("- The goal is to get to {}", rules.target))?;
        console.say(&format!("- If you bust (over {}), dealer win", rules.target))?;
        console.say(&format!("- The dealer hits until reaching {}", rules.dealer_stay))?;
        console.say("- If the dealer bust, you win")?;
        console.say("- If no one bust, the player with the higher total will win")?;
        console.say(&format!(
            "- First player to win {} rounds is the grand winner",
            session.grand_win_threshold
        ))?;
        self.pause(console, Pause::Long);
        console.clear()
    }

    fn new_round(&self, rng: &mut GameRng) -> TwentyOneRound {
        TwentyOneRound::deal(Deck::shuffled(rng), self.rules())
    }

    fn play_round<C: Console>(
        &self,
        round: &mut TwentyOneRound,
        console: &mut C,
        _rng: &mut GameRng,
    ) -> io::Result<RoundResult<Seat>> {
        console.clear()?;
        console.say(&boxed("SHUFFLING DECK"))?;
        self.pause(console, Pause::Medium);
        console.clear()?;
        if let Some(card) = round.dealer.up_card() {
            console.prompt(&format!("Dealer showing: {card} and unknown card"))?;
        }
        self.pause(console, Pause::Short);

        let player_total = self.player_turn(round, console)?;
        self.announce_total(console, Seat::Player, player_total)?;
        console.say(SEPARATOR)?;

        if !self.rules().busted(player_total) {
            round.phase = Phase::DealerTurn;
            self.pause(console, Pause::Short);
            let dealer_total = self.dealer_turn(round, console)?;
            self.pause(console, Pause::Short);
            self.announce_total(console, Seat::Dealer, dealer_total)?;
            console.say(SEPARATOR)?;
            self.pause(console, Pause::Short);
        }
        round.phase = Phase::Settled;

        // Settled rounds always resolve.
        let result = self.is_terminal(round).unwrap_or(RoundResult::Tie);
        debug!(
            player = round.player.total(self.rules().target),
            dealer = round.dealer.total(self.rules().target),
            ?result,
            "round settled"
        );
        Self::announce_winner(console, result)?;
        Ok(result)
    }

    fn is_terminal(&self, round: &TwentyOneRound) -> Option<RoundResult<Seat>> {
        let rules = self.rules();
        let player_total = round.player.total(rules.target);
        let dealer_total = round.dealer.total(rules.target);

        match round.phase {
            Phase::Settled => Some(rules.detect_winner(player_total, dealer_total)),
            _ if rules.busted(player_total) => Some(RoundResult::Winner(Seat::Dealer)),
            Phase::DealerTurn if rules.busted(dealer_total) => Some(RoundResult::Winner(Seat::Player)),
            Phase::PlayerTurn | Phase::DealerTurn => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Terminal;
    use crate::games::twenty_one::card::{Card, Rank, Suit};
    use std::io::Cursor;

    fn game() -> TwentyOne {
        TwentyOne::new(TwentyOneConfig::default().without_pauses())
    }

    fn console(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Diamond)
    }

    /// A round with fixed hands. `next` lists the deck's next cards in draw order.
    fn round(player: &[Rank], dealer: &[Rank], next: &[Rank]) -> TwentyOneRound {
        TwentyOneRound {
            deck: Deck::stacked(next.iter().rev().map(|&r| card(r))),
            player: Hand::from_cards(player.iter().map(|&r| card(r))),
            dealer: Hand::from_cards(dealer.iter().map(|&r| card(r))),
            phase: Phase::PlayerTurn,
        }
    }

    #[test]
    fn test_opening_deal() {
        let game = game();
        let round = game.new_round(&mut GameRng::new(42));

        assert_eq!(round.player.len(), 2);
        assert_eq!(round.dealer.len(), 2);
        assert_eq!(round.deck.remaining(), 48);
        assert_eq!(round.phase, Phase::PlayerTurn);
    }

    #[test]
    fn test_player_stays() {
        let game = game();
        let mut round = round(&[Rank::Ten, Rank::Seven], &[Rank::Two, Rank::Three], &[Rank::Five]);
        let mut console = console("s\n");

        let total = game.player_turn(&mut round, &mut console).unwrap();
        assert_eq!(total, 17);
        assert_eq!(round.player.len(), 2);
        assert_eq!(round.deck.remaining(), 1);
    }

    #[test]
    fn test_player_reprompts_on_invalid_input() {
        let game = game();
        let mut round = round(&[Rank::Ten, Rank::Two], &[Rank::Two, Rank::Three], &[Rank::Five]);
        let mut console = console("maybe\nHIT\nh\nstay\n");

        let total = game.player_turn(&mut round, &mut console).unwrap();
        assert_eq!(total, 17);

        let out = console.output_text();
        assert_eq!(out.matches("Please input a valid choice.").count(), 2);
        assert!(out.contains("You received: 5 of Diamond"));
    }

    #[test]
    fn test_player_stops_at_twenty_one_without_prompt() {
        let game = game();
        let mut round = round(&[Rank::Ace, Rank::King], &[Rank::Two, Rank::Three], &[]);
        let mut console = console("");

        assert_eq!(game.player_turn(&mut round, &mut console).unwrap(), 21);
        assert!(!console.output_text().contains("(h)it"));
    }

    #[test]
    fn test_player_bust_ends_turn() {
        let game = game();
        let mut round = round(&[Rank::Ten, Rank::Six], &[Rank::Two, Rank::Three], &[Rank::Nine, Rank::Two]);
        let mut console = console("hit\n");

        assert_eq!(game.player_turn(&mut round, &mut console).unwrap(), 25);
        assert_eq!(round.deck.remaining(), 1);
    }

    #[test]
    fn test_player_turn_on_empty_deck() {
        let game = game();
        let mut round = round(&[Rank::Two, Rank::Three], &[Rank::Two, Rank::Three], &[]);
        let mut console = console("h\n");

        assert_eq!(game.player_turn(&mut round, &mut console).unwrap(), 5);
    }

    #[test]
    fn test_dealer_draws_from_sixteen() {
        let game = game();
        let mut round = round(&[Rank::Ten, Rank::Nine], &[Rank::Ten, Rank::Six], &[Rank::Ace, Rank::King]);
        let mut console = console("");

        // The Ace counts as 1 here: 27 reduces to 17.
        assert_eq!(game.dealer_turn(&mut round, &mut console).unwrap(), 17);
        assert_eq!(round.dealer.len(), 3);
        assert_eq!(round.deck.remaining(), 1);
    }

    #[test]
    fn test_dealer_stands_on_seventeen() {
        let game = game();
        let mut round = round(&[Rank::Ten, Rank::Nine], &[Rank::Ten, Rank::Seven], &[Rank::Two]);
        let mut console = console("");

        assert_eq!(game.dealer_turn(&mut round, &mut console).unwrap(), 17);
        assert!(!console.output_text().contains("Dealer hit"));
    }

    #[test]
    fn test_dealer_may_bust() {
        let game = game();
        let mut round = round(&[Rank::Ten, Rank::Nine], &[Rank::Ten, Rank::Six], &[Rank::Queen]);
        let mut console = console("");

        assert_eq!(game.dealer_turn(&mut round, &mut console).unwrap(), 26);
    }

    #[test]
    fn test_play_round_player_bust_skips_dealer() {
        let game = game();
        let mut round = round(&[Rank::Ten, Rank::Six], &[Rank::Two, Rank::Three], &[Rank::King]);
        let mut console = console("h\n");

        let result = game.play_round(&mut round, &mut console, &mut GameRng::new(0)).unwrap();
        assert_eq!(result, RoundResult::Winner(Seat::Dealer));
        assert_eq!(round.dealer.len(), 2);
        assert_eq!(round.phase, Phase::Settled);

        let out = console.output_text();
        assert!(out.contains("Dealer showing: 2 of Diamond and unknown card"));
        assert!(out.contains("Player busted with 26."));
        assert!(out.contains("Dealer win!"));
    }

    #[test]
    fn test_play_round_dealer_bust() {
        let game = game();
        let mut round = round(&[Rank::Ten, Rank::Eight], &[Rank::Ten, Rank::Five], &[Rank::Nine]);
        let mut console = console("s\n");

        let result = game.play_round(&mut round, &mut console, &mut GameRng::new(0)).unwrap();
        assert_eq!(result, RoundResult::Winner(Seat::Player));

        let out = console.output_text();
        assert!(out.contains("Player stayed at: 18"));
        assert!(out.contains("Dealer received: 9 of Diamond"));
        assert!(out.contains("Dealer busted with 24."));
        assert!(out.contains("You win!"));
    }

    #[test]
    fn test_play_round_tie() {
        let game = game();
        let mut round = round(&[Rank::Ten, Rank::Eight], &[Rank::Queen, Rank::Eight], &[]);
        let mut console = console("s\n");

        let result = game.play_round(&mut round, &mut console, &mut GameRng::new(0)).unwrap();
        assert_eq!(result, RoundResult::Tie);
        assert!(console.output_text().contains("It's a tie!"));
    }

    #[test]
    fn test_is_terminal() {
        let game = game();
        let mut r = round(&[Rank::Ten, Rank::Eight], &[Rank::Ten, Rank::Nine], &[]);
        assert_eq!(game.is_terminal(&r), None);

        r.phase = Phase::Settled;
        assert_eq!(game.is_terminal(&r), Some(RoundResult::Winner(Seat::Dealer)));

        let busted = round(&[Rank::Ten, Rank::Eight, Rank::Five], &[Rank::Ten, Rank::Nine], &[]);
        assert_eq!(game.is_terminal(&busted), Some(RoundResult::Winner(Seat::Dealer)));
    }

    #[test]
    fn test_dealer_bust_ends_dealer_turn() {
        let game = game();
        let mut r = round(&[Rank::Ten, Rank::Eight], &[Rank::Ten, Rank::Six], &[Rank::Queen]);
        r.phase = Phase::DealerTurn;
        assert_eq!(game.is_terminal(&r), None);

        game.dealer_turn(&mut r, &mut console("")).unwrap();
        assert_eq!(r.phase, Phase::DealerTurn);
        assert_eq!(game.is_terminal(&r), Some(RoundResult::Winner(Seat::Player)));
    }

    #[test]
    fn test_eof_propagates() {
        let game = game();
        let mut round = round(&[Rank::Two, Rank::Three], &[Rank::Two, Rank::Three], &[Rank::Four]);
        let mut console = console("");

        let err = game.player_turn(&mut round, &mut console).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
