use crate::hand::Hand;

/// Play decisions for a hand.
///
/// Implementations must not keep per-hand state: the same strategy object is
/// shared by every player that uses it.
pub trait GameStrategy: Send + Sync {
    /// Whether to take insurance against a dealer ace.
    fn insurance(&self, _hand: &Hand) -> bool {
        false
    }

    /// Whether to split a two-card hand.
    fn split(&self, _hand: &Hand) -> bool {
        false
    }

    /// Whether to double down on a two-card hand.
    fn double(&self, _hand: &Hand) -> bool {
        false
    }

    /// Whether to take another card.
    fn hit(&self, hand: &Hand) -> bool;
}

/// Never insures, splits or doubles; hits while the hard total is 17 or less.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Naive;

impl GameStrategy for Naive {
    fn hit(&self, hand: &Hand) -> bool {
        hand.hard_total() <= 17
    }
}
