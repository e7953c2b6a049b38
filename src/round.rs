//! Record of one played round.

use alloc::vec::Vec;

use crate::hand::Hand;

/// A decision taken on a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Took one more card.
    Hit,
    /// Stopped taking cards.
    Stand,
    /// Doubled the bet and took exactly one card.
    Double,
}

/// A hand as it stood when the player finished with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedHand {
    /// The final hand.
    pub hand: Hand,
    /// Amount wagered on this hand (doubled if the player doubled down).
    pub bet: usize,
    /// Decisions in the order they were taken.
    pub actions: Vec<Action>,
}

impl PlayedHand {
    pub(crate) const fn new(hand: Hand, bet: usize) -> Self {
        Self {
            hand,
            bet,
            actions: Vec::new(),
        }
    }

    /// Returns whether the hand went over 21 on hard count.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.hard_total() > 21
    }
}

/// Result of [`Player::game`](crate::Player::game).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Insurance bet placed (0 if none).
    pub insurance: usize,
    /// Whether the opening hand was split.
    pub split: bool,
    /// The hands played, two if the opening hand was split.
    pub hands: Vec<PlayedHand>,
}

impl Round {
    /// Total amount put on the table this round, insurance included.
    #[must_use]
    pub fn total_wagered(&self) -> usize {
        self.hands.iter().map(|played| played.bet).sum::<usize>() + self.insurance
    }
}
