//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::{Hand, Participant, evaluate_cards};
use crate::options::EngineOptions;
use crate::result::{Outcome, RoundSnapshot};

mod actions;
mod dealer;
pub mod state;

pub use state::RoundState;

/// A single-player blackjack engine.
///
/// The engine owns the deck, both hands and the round state. Every mutating
/// operation runs to completion before returning, so the front-end can read
/// a consistent [`RoundSnapshot`] after each call.
#[derive(Debug, Clone)]
pub struct GameEngine {
    /// Cards not yet dealt.
    deck: Deck,
    /// Rule options.
    options: EngineOptions,
    /// Current round state.
    state: RoundState,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: Hand,
    /// Outcome of the last finished round.
    outcome: Option<Outcome>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl GameEngine {
    /// Creates an engine with a freshly shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::{EngineOptions, GameEngine, RoundState};
    ///
    /// let mut game = GameEngine::new(EngineOptions::default(), 42);
    /// game.new_game().unwrap();
    /// assert_eq!(game.state(), RoundState::PlayerTurn);
    /// ```
    #[must_use]
    pub fn new(options: EngineOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);
        Self::build(options, deck, rng)
    }

    /// Creates an engine that deals from `deck` in the given order.
    ///
    /// The seed drives later shuffles and rebuilds.
    #[must_use]
    pub fn with_deck(options: EngineOptions, seed: u64, deck: Deck) -> Self {
        Self::build(options, deck, ChaCha8Rng::seed_from_u64(seed))
    }

    const fn build(options: EngineOptions, deck: Deck, rng: ChaCha8Rng) -> Self {
        Self {
            deck,
            options,
            state: RoundState::NotStarted,
            player: Hand::new(),
            dealer: Hand::new(),
            outcome: None,
            rng,
        }
    }

    /// Shuffles the remaining cards.
    ///
    /// An empty deck is first rebuilt to the full 52 cards. While the player
    /// is acting, cards held in either hand are left out of the rebuild.
    /// Hands already dealt are never touched.
    pub fn shuffle(&mut self) {
        if self.deck.is_empty() {
            let in_play = if self.state == RoundState::PlayerTurn {
                self.in_play()
            } else {
                Vec::new()
            };
            self.deck.rebuild(&in_play, &mut self.rng);
            tracing::debug!(cards = self.deck.len(), "rebuilt empty deck");
        } else {
            self.deck.shuffle(&mut self.rng);
            tracing::debug!(cards = self.deck.len(), "shuffled deck");
        }
    }

    /// Draws the next card, refilling an exhausted deck with every card not
    /// currently held.
    fn draw(&mut self) -> Option<Card> {
        if self.deck.is_empty() {
            let in_play = self.in_play();
            self.deck.rebuild(&in_play, &mut self.rng);
            tracing::debug!(
                cards = self.deck.len(),
                held = in_play.len(),
                "deck exhausted mid-round, rebuilt"
            );
        }
        self.deck.draw()
    }

    fn in_play(&self) -> Vec<Card> {
        self.player
            .cards()
            .iter()
            .chain(self.dealer.cards())
            .copied()
            .collect()
    }

    /// Returns the total for `who`'s hand.
    #[must_use]
    pub fn hand_total(&self, who: Participant) -> u8 {
        self.hand(who).total()
    }

    /// Returns `who`'s hand.
    #[must_use]
    pub const fn hand(&self, who: Participant) -> &Hand {
        match who {
            Participant::Player => &self.player,
            Participant::Dealer => &self.dealer,
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the outcome of the round, if it has finished.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the rule options.
    #[must_use]
    pub const fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Returns the undealt cards.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether [`hit`](Self::hit) would be accepted.
    #[must_use]
    pub fn can_hit(&self) -> bool {
        self.state == RoundState::PlayerTurn
    }

    /// Returns whether [`stand`](Self::stand) would be accepted.
    ///
    /// Any minimum-total rule for standing is up to the front-end.
    #[must_use]
    pub fn can_stand(&self) -> bool {
        self.state == RoundState::PlayerTurn
    }

    /// Returns an owned view of the table for rendering.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        let dealer_hole_hidden = self.state == RoundState::PlayerTurn;
        let dealer_visible_total = if dealer_hole_hidden {
            let face_up: Vec<Card> = self
                .dealer
                .cards()
                .iter()
                .enumerate()
                .filter(|&(index, _)| index != 1)
                .map(|(_, card)| *card)
                .collect();
            evaluate_cards(&face_up).0
        } else {
            self.dealer.total()
        };

        RoundSnapshot {
            player_cards: self.player.cards().to_vec(),
            dealer_cards: self.dealer.cards().to_vec(),
            player_total: self.player.total(),
            dealer_total: self.dealer.total(),
            dealer_visible_total,
            dealer_hole_hidden,
            state: self.state,
            outcome: self.outcome,
            cards_remaining: self.deck.len(),
        }
    }
}
