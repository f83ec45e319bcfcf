//! A single-player blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the round flow: chips are
//! placed against a wallet, four cards are dealt, the player hits or stands,
//! the dealer draws to 17 and the round is settled. [`advise`] gives the
//! basic-strategy hit/stand recommendation for any hand.
//!
//! With the `session` feature (on by default), [`session::Session`] drives
//! the timed parts of a round on Tokio, and [`coach`] connects an optional
//! free-text advice service.
//!
//! # Example
//!
//! ```
//! use bjtable::{Game, GameOptions, GamePhase};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.place_bet(100).unwrap();
//! game.deal().unwrap();
//!
//! if game.phase() == GamePhase::PlayerTurn {
//!     game.stand().unwrap();
//!     let result = game.dealer_play().unwrap();
//!     println!("{}", result.outcome);
//!     game.clear_round().unwrap();
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "session")]
#[cfg_attr(docsrs, doc(cfg(feature = "session")))]
pub mod coach;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod money;
pub mod options;
pub mod result;
#[cfg(feature = "session")]
#[cfg_attr(docsrs, doc(cfg(feature = "session")))]
pub mod session;
pub mod strategy;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
#[cfg(feature = "session")]
pub use error::CoachError;
pub use error::{ActionError, BetError, DealError, DealerError, RoundError};
pub use game::{DEALER_STANDS_ON, DealerStep, Game, GamePhase, TableView};
pub use hand::{BLACKJACK, DealerHand, Hand, is_soft, score};
pub use money::Money;
pub use options::GameOptions;
pub use result::{Outcome, RoundResult};
pub use strategy::{Advice, advise};
