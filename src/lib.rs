//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`GameEngine`] that owns the deck and both hands,
//! deals rounds, runs the player's hit/stand actions and the dealer's
//! auto-play, and settles the outcome. Front-ends drive it one action at a
//! time and draw the table from a [`RoundSnapshot`].
//!
//! # Example
//!
//! ```
//! use blackjack21::{EngineOptions, GameEngine, RoundState};
//!
//! let mut game = GameEngine::new(EngineOptions::default(), 42);
//! game.new_game().unwrap();
//! game.stand().unwrap();
//! assert_eq!(game.state(), RoundState::Finished);
//! assert!(game.outcome().is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError};
pub use game::{GameEngine, RoundState};
pub use hand::{Hand, Participant};
pub use options::{EngineOptions, ExhaustedDeckPolicy};
pub use result::{Outcome, RoundSnapshot};
