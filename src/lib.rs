//! Blackjack cards, shoes, hands and pluggable player strategies, with
//! optional `no_std` support.
//!
//! Cards come out of a [`Deck`] (a shuffled shoe with burn cards), are moved
//! into a [`Hand`], and a [`Player`] consults its
//! [`BettingStrategy`](strategy::BettingStrategy) and
//! [`GameStrategy`](strategy::GameStrategy) to play a round at a [`Table`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use shoebox::strategy::{Flat, Naive};
//! use shoebox::{Player, Table, TableOptions, Transcript};
//!
//! let transcript = Arc::new(Transcript::new());
//! let table = Arc::new(Table::new(TableOptions::default(), 42, Arc::clone(&transcript)));
//! let mut player = Player::new(table, Box::new(Flat::default()), Arc::new(Naive));
//!
//! player.game().unwrap();
//! assert_eq!(transcript.lines()[0], "Bet 1");
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
pub mod hand;
pub mod options;
pub mod player;
pub mod round;
pub mod sink;
pub mod strategy;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Kind, Suit};
pub use deck::Deck;
pub use error::{BetError, CardError, DealError, InsuranceError, PlayError, SplitError};
pub use hand::{FrozenHand, Hand};
pub use options::TableOptions;
pub use player::Player;
pub use round::{Action, PlayedHand, Round};
pub use sink::{LogSink, Sink, Transcript};
pub use table::Table;
