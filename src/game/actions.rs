use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{ActionError, DealError};
use crate::options::ExhaustedDeckPolicy;
use crate::result::Outcome;

use super::{GameEngine, RoundState};

impl GameEngine {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState { state: self.state });
        }
        Ok(())
    }

    /// Starts a new round: clears both hands, deals two cards to the player
    /// and then two to the dealer, and hands the turn to the player.
    ///
    /// A deck shorter than [`EngineOptions::min_cards_to_deal`] is rebuilt
    /// to 52 cards first, unless the engine uses
    /// [`ExhaustedDeckPolicy::Reject`].
    ///
    /// Starting a new game abandons any round in progress.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the deck is short and the
    /// policy is `Reject`. Nothing changes in that case.
    ///
    /// [`EngineOptions::min_cards_to_deal`]: crate::EngineOptions::min_cards_to_deal
    pub fn new_game(&mut self) -> Result<(), DealError> {
        let required = self.options.min_cards_to_deal;
        let remaining = self.deck.len();

        if remaining < required {
            match self.options.exhausted_deck {
                ExhaustedDeckPolicy::Reject => {
                    return Err(DealError::NotEnoughCards {
                        remaining,
                        required,
                    });
                }
                ExhaustedDeckPolicy::Rebuild => {
                    self.deck.rebuild(&[], &mut self.rng);
                    tracing::debug!(remaining, required, "deck too short, rebuilt");
                }
            }
        }

        self.player.clear();
        self.dealer.clear();
        self.outcome = None;

        for _ in 0..2 {
            let card = self.draw().ok_or(DealError::NotEnoughCards {
                remaining: 0,
                required,
            })?;
            self.player.add_card(card);
        }
        for _ in 0..2 {
            let card = self.draw().ok_or(DealError::NotEnoughCards {
                remaining: 0,
                required,
            })?;
            self.dealer.add_card(card);
        }

        self.state = RoundState::PlayerTurn;
        tracing::debug!(
            player_total = self.player.total(),
            up_card = ?self.dealer.cards().first(),
            cards_remaining = self.deck.len(),
            "dealt new round"
        );

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the round immediately with
    /// [`Outcome::PlayerBust`].
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] outside the player's turn; the
    /// engine is left untouched.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw().ok_or(ActionError::NoCards)?;
        self.player.add_card(card);

        let total = self.player.total();
        tracing::debug!(%card, total, "player hit");

        if total > 21 {
            self.finish(Outcome::PlayerBust);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer then plays out their hand and the round is settled before
    /// this returns. Returns the cards the dealer drew.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] outside the player's turn, or
    /// [`ActionError::NoCards`] if the dealer cannot draw. Either way the
    /// engine is left as it was, still on the player's turn.
    pub fn stand(&mut self) -> Result<Vec<Card>, ActionError> {
        self.ensure_player_turn()?;

        tracing::debug!(total = self.player.total(), "player stands");
        let deck = self.deck.clone();
        let dealer = self.dealer.clone();
        self.state = RoundState::DealerTurn;

        let drawn = match self.dealer_play() {
            Ok(drawn) => drawn,
            Err(err) => {
                self.deck = deck;
                self.dealer = dealer;
                self.state = RoundState::PlayerTurn;
                return Err(err);
            }
        };
        let outcome = super::dealer::settle(&self.player, &self.dealer);
        self.finish(outcome);

        Ok(drawn)
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.state = RoundState::Finished;
        tracing::info!(
            ?outcome,
            player_total = self.player.total(),
            dealer_total = self.dealer.total(),
            "round finished"
        );
    }
}
