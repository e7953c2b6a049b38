//! Error types for card, deck, hand and table operations.

use thiserror::Error;

/// Errors that can occur when building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside 1..=13.
    #[error("rank {0} is out of range (1..=13)")]
    InvalidRank(u8),
}

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur when splitting a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplitError {
    /// Only a two-card hand can be split.
    #[error("cannot split a hand of {0} cards")]
    CardCount(usize),
    /// Lead card index is not 0 or 1.
    #[error("split index {0} is out of range (0..=1)")]
    Index(usize),
}

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet is below the table minimum.
    #[error("bet {amount} is below the table minimum {minimum}")]
    BelowMinimum {
        /// Requested amount.
        amount: usize,
        /// Table minimum.
        minimum: usize,
    },
    /// Bet is above the table maximum.
    #[error("bet {amount} is above the table maximum {maximum}")]
    AboveMaximum {
        /// Requested amount.
        amount: usize,
        /// Table maximum.
        maximum: usize,
    },
}

/// Errors that can occur when placing an insurance bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// Insurance is not offered at this table.
    #[error("insurance is not offered at this table")]
    NotOffered,
    /// Insurance amount is zero.
    #[error("insurance amount is zero")]
    ZeroBet,
}

/// Errors that end a player's round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The table refused a wager.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The table refused an insurance bet.
    #[error(transparent)]
    Insurance(#[from] InsuranceError),
    /// A split was attempted on an ineligible hand.
    #[error(transparent)]
    Split(#[from] SplitError),
}
