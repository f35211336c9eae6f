//! Hand representation and blackjack scoring.

use alloc::vec::Vec;

use crate::card::Card;

/// Scores `cards`, returning the total and whether an ace still counts 11.
///
/// Every ace starts at 11 and is demoted to 1, one at a time, while the total
/// is over 21.
pub(crate) fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u16 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces += 1;
            value += 11;
        } else {
            value += u16::from(card.rank.value());
        }
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0;
    (u8::try_from(value).unwrap_or(u8::MAX), is_soft)
}

/// The two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Participant {
    /// The human player.
    Player,
    /// The house.
    Dealer,
}

/// Cards held by one participant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    ///
    /// ```
    /// use blackjack21::{Card, Hand, Rank, Suit};
    ///
    /// let hand = Hand::from_cards([
    ///     Card::new(Rank::Ace, Suit::Spades),
    ///     Card::new(Rank::Nine, Suit::Hearts),
    ///     Card::new(Rank::Ace, Suit::Clubs),
    /// ]);
    /// assert_eq!(hand.total(), 21);
    /// ```
    #[must_use]
    pub fn total(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns the total with every ace counted as 1.
    #[must_use]
    pub fn hard_total(&self) -> u8 {
        let sum: u16 = self.cards.iter().map(|c| u16::from(c.rank.value())).sum();
        u8::try_from(sum).unwrap_or(u8::MAX)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > 21
    }

    /// Returns whether the hand is a natural: two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total() == 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Discards every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        Hand::from_cards(ranks.iter().map(|&rank| Card::new(rank, Suit::Clubs)))
    }

    #[test]
    fn ace_counts_eleven_until_it_would_bust() {
        let mut h = hand(&[Rank::Ace, Rank::Nine]);
        assert_eq!(h.total(), 20);
        assert!(h.is_soft());

        h.add_card(Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(h.total(), 21);
        assert!(h.is_soft());

        h.add_card(Card::new(Rank::Five, Suit::Hearts));
        assert_eq!(h.total(), 16);
        assert!(!h.is_soft());
    }

    #[test]
    fn each_ace_is_demoted_at_most_once() {
        let h = hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]);
        assert_eq!(h.total(), 14);
        assert_eq!(h.hard_total(), 4);

        let bust = hand(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Two]);
        assert_eq!(bust.total(), 23);
        assert!(bust.is_bust());
    }

    #[test]
    fn blackjack_needs_exactly_two_cards() {
        assert!(hand(&[Rank::Ace, Rank::King]).is_blackjack());
        assert!(!hand(&[Rank::Seven, Rank::Seven, Rank::Seven]).is_blackjack());
        assert!(!hand(&[Rank::King, Rank::Queen, Rank::Two]).is_blackjack());
    }

    #[test]
    fn empty_hand_is_zero() {
        let h = Hand::new();
        assert!(h.is_empty());
        assert_eq!(h.total(), 0);
        assert!(!h.is_soft());
    }
}
