//! The draw pile.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

fn standard_cards() -> impl Iterator<Item = Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
}

/// An ordered pile of cards. The front of the pile is the next card drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a full, unshuffled 52-card deck.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        cards.extend(standard_cards());
        Self { cards }
    }

    /// Creates a deck with the given order; the first card is drawn first.
    ///
    /// ```
    /// use blackjack21::{Card, Deck, Rank, Suit};
    ///
    /// let mut deck = Deck::from_cards([
    ///     Card::new(Rank::Ten, Suit::Clubs),
    ///     Card::new(Rank::Nine, Suit::Diamonds),
    /// ]);
    /// assert_eq!(deck.draw(), Some(Card::new(Rank::Ten, Suit::Clubs)));
    /// assert_eq!(deck.len(), 1);
    /// ```
    #[must_use]
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Creates a deck with no cards.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Removes and returns the card at the front of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the deck still holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Iterates the remaining cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Randomly reorders the remaining cards. The card count is unchanged.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Refills the deck with the 52-card set, minus any card in `in_play`,
    /// and shuffles it.
    pub fn rebuild<R: Rng + ?Sized>(&mut self, in_play: &[Card], rng: &mut R) {
        let mut cards: Vec<Card> = standard_cards()
            .filter(|card| !in_play.contains(card))
            .collect();
        cards.shuffle(rng);
        self.cards = cards.into();
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn standard_deck_has_every_card_once() {
        let deck = Deck::standard();
        let unique: BTreeSet<Card> = deck.iter().copied().collect();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn drawing_never_repeats_a_card() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);

        let mut seen = BTreeSet::new();
        let mut remaining = deck.len();
        while let Some(card) = deck.draw() {
            remaining -= 1;
            assert_eq!(deck.len(), remaining);
            assert!(seen.insert(card), "{card} drawn twice");
        }
        assert_eq!(seen.len(), DECK_SIZE);
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn shuffle_keeps_the_same_cards() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut deck = Deck::standard();
        for _ in 0..10 {
            deck.draw();
        }
        let before: BTreeSet<Card> = deck.iter().copied().collect();
        deck.shuffle(&mut rng);
        let after: BTreeSet<Card> = deck.iter().copied().collect();
        assert_eq!(deck.len(), DECK_SIZE - 10);
        assert_eq!(before, after);
    }

    #[test]
    fn rebuild_skips_cards_in_play() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let held = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Seven, Suit::Hearts),
        ];
        let mut deck = Deck::empty();
        deck.rebuild(&held, &mut rng);
        assert_eq!(deck.len(), DECK_SIZE - held.len());
        assert!(held.iter().all(|card| !deck.contains(card)));
    }
}
