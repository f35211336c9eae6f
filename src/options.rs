//! Engine configuration options.

/// What [`GameEngine::new_game`](crate::GameEngine::new_game) does when the
/// deck is too short to deal a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ExhaustedDeckPolicy {
    /// Rebuild and shuffle the full 52-card deck, then deal.
    #[default]
    Rebuild,
    /// Refuse to deal and report the shortage to the caller.
    Reject,
}

/// Rule configuration for a [`GameEngine`](crate::GameEngine).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack21::{EngineOptions, ExhaustedDeckPolicy};
///
/// let options = EngineOptions::default()
///     .with_dealer_stands_at(17)
///     .with_min_cards_to_deal(10)
///     .with_exhausted_deck(ExhaustedDeckPolicy::Reject);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// The dealer keeps drawing while their total is below this value.
    pub dealer_stands_at: u8,
    /// A new round is only dealt from a deck holding at least this many cards.
    pub min_cards_to_deal: usize,
    /// Handling of a deck shorter than `min_cards_to_deal`.
    pub exhausted_deck: ExhaustedDeckPolicy,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            dealer_stands_at: 17,
            min_cards_to_deal: 4,
            exhausted_deck: ExhaustedDeckPolicy::Rebuild,
        }
    }
}

impl EngineOptions {
    /// Sets the total the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::EngineOptions;
    ///
    /// let options = EngineOptions::default().with_dealer_stands_at(16);
    /// assert_eq!(options.dealer_stands_at, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, total: u8) -> Self {
        self.dealer_stands_at = total;
        self
    }

    /// Sets the minimum deck size required to deal a round.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::EngineOptions;
    ///
    /// let options = EngineOptions::default().with_min_cards_to_deal(10);
    /// assert_eq!(options.min_cards_to_deal, 10);
    /// ```
    #[must_use]
    pub const fn with_min_cards_to_deal(mut self, cards: usize) -> Self {
        self.min_cards_to_deal = cards;
        self
    }

    /// Sets the exhausted-deck policy.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::{EngineOptions, ExhaustedDeckPolicy};
    ///
    /// let options = EngineOptions::default().with_exhausted_deck(ExhaustedDeckPolicy::Reject);
    /// assert_eq!(options.exhausted_deck, ExhaustedDeckPolicy::Reject);
    /// ```
    #[must_use]
    pub const fn with_exhausted_deck(mut self, policy: ExhaustedDeckPolicy) -> Self {
        self.exhausted_deck = policy;
        self
    }
}
