//! Pluggable betting and play-decision policies consulted by a [`Player`].
//!
//! [`Player`]: crate::Player

mod betting;
mod game;

pub use betting::{BettingStrategy, Flat, Martingale};
pub use game::{GameStrategy, Naive};
