//! Round outcome and rendering snapshot.

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::RoundState;

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher total).
    PlayerWin,
    /// Dealer has the higher total.
    DealerWin,
    /// Push (tie).
    Push,
    /// Player went over 21; the dealer does not play.
    PlayerBust,
}

/// An owned copy of everything a front-end needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    /// The player's cards.
    pub player_cards: Vec<Card>,
    /// The dealer's cards, including the hole card even while it is hidden.
    pub dealer_cards: Vec<Card>,
    /// The player's total.
    pub player_total: u8,
    /// The dealer's full total.
    pub dealer_total: u8,
    /// The dealer's total counting only face-up cards.
    pub dealer_visible_total: u8,
    /// Whether the dealer's second card should be drawn face down.
    pub dealer_hole_hidden: bool,
    /// Current round state.
    pub state: RoundState,
    /// Outcome, once the round is finished.
    pub outcome: Option<Outcome>,
    /// Cards left in the deck.
    pub cards_remaining: usize,
}
