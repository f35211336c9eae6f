use core::cmp::Ordering;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::result::Outcome;

use super::{GameEngine, RoundState};

/// Compares the final hands.
///
/// A player bust loses before the dealer's hand matters; a dealer bust is a
/// player win.
pub(super) fn settle(player: &Hand, dealer: &Hand) -> Outcome {
    if player.is_bust() {
        return Outcome::PlayerBust;
    }
    if dealer.is_bust() {
        return Outcome::PlayerWin;
    }

    match player.total().cmp(&dealer.total()) {
        Ordering::Greater => Outcome::PlayerWin,
        Ordering::Less => Outcome::DealerWin,
        Ordering::Equal => Outcome::Push,
    }
}

impl GameEngine {
    /// Dealer draws until reaching [`EngineOptions::dealer_stands_at`].
    ///
    /// Soft totals count: a soft 17 stands under the default options.
    ///
    /// [`EngineOptions::dealer_stands_at`]: crate::EngineOptions::dealer_stands_at
    pub(super) fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.state != RoundState::DealerTurn {
            return Err(ActionError::InvalidState { state: self.state });
        }

        let mut drawn_cards = Vec::new();

        while self.dealer.total() < self.options.dealer_stands_at {
            let card = self.draw().ok_or(ActionError::NoCards)?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
            tracing::debug!(%card, total = self.dealer.total(), "dealer draws");
        }

        Ok(drawn_cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        Hand::from_cards(ranks.iter().map(|&rank| Card::new(rank, Suit::Hearts)))
    }

    #[test]
    fn higher_total_wins_and_equal_pushes() {
        let player = hand(&[Rank::Ten, Rank::Nine]);
        assert_eq!(
            settle(&player, &hand(&[Rank::Nine, Rank::Nine])),
            Outcome::PlayerWin
        );
        assert_eq!(
            settle(&player, &hand(&[Rank::Ten, Rank::Nine])),
            Outcome::Push
        );
        assert_eq!(
            settle(&player, &hand(&[Rank::Ten, Rank::King])),
            Outcome::DealerWin
        );
    }

    #[test]
    fn stand_without_cards_to_draw_keeps_the_players_turn() {
        use crate::card::DECK_SIZE;
        use crate::deck::Deck;
        use crate::options::EngineOptions;

        // Every card is held, so nothing is left to rebuild the deck from.
        let mut game = GameEngine::with_deck(EngineOptions::default(), 1, Deck::empty());
        game.player = Hand::from_cards(
            Suit::ALL
                .into_iter()
                .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit))),
        );
        game.state = RoundState::PlayerTurn;
        assert_eq!(game.player.len(), DECK_SIZE);

        assert_eq!(game.stand().unwrap_err(), ActionError::NoCards);
        assert_eq!(game.state(), RoundState::PlayerTurn);
        assert!(game.dealer_hand().is_empty());
        assert_eq!(game.cards_remaining(), 0);
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn bust_rules() {
        let dealer_bust = hand(&[Rank::Ten, Rank::Six, Rank::King]);
        assert_eq!(
            settle(&hand(&[Rank::Two, Rank::Three]), &dealer_bust),
            Outcome::PlayerWin
        );

        let player_bust = hand(&[Rank::Ten, Rank::Queen, Rank::Three]);
        assert_eq!(settle(&player_bust, &dealer_bust), Outcome::PlayerBust);
    }
}
