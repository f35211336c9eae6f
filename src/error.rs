//! Error types for game operations.

use thiserror::Error;

use crate::game::RoundState;

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not allowed in the current round state.
    #[error("action not allowed while the round is {state:?}")]
    InvalidState {
        /// State the engine was in when the action was attempted.
        state: RoundState,
    },
    /// No card could be drawn.
    #[error("no cards left to draw")]
    NoCards,
}

/// Errors that can occur when dealing a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck is too short and the engine is configured not to rebuild it.
    #[error("not enough cards to deal: {remaining} left, {required} required")]
    NotEnoughCards {
        /// Cards left in the deck.
        remaining: usize,
        /// Cards the engine requires before dealing.
        required: usize,
    },
}
