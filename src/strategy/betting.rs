use crate::options::TableOptions;

/// Decides how much to wager each round.
///
/// `bet` has no default, so every betting strategy must supply one.
pub trait BettingStrategy {
    /// Returns the stake for the next round.
    fn bet(&self) -> usize;

    /// Records that the last round was won.
    fn record_win(&mut self) {}

    /// Records that the last round was lost.
    fn record_loss(&mut self) {}
}

/// Always bets the same amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flat {
    amount: usize,
}

impl Flat {
    /// Creates a flat strategy betting `amount` every round.
    #[must_use]
    pub const fn new(amount: usize) -> Self {
        Self { amount }
    }
}

impl Default for Flat {
    fn default() -> Self {
        Self::new(1)
    }
}

impl BettingStrategy for Flat {
    fn bet(&self) -> usize {
        self.amount
    }
}

/// Doubles the stake after every loss, returning to the base stake after a win.
///
/// The stake never exceeds `cap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Martingale {
    base: usize,
    cap: usize,
    stake: usize,
}

impl Martingale {
    /// Creates a progression starting at `base` and capped at `cap`.
    ///
    /// A `base` above `cap` is lowered to `cap`.
    #[must_use]
    pub const fn new(base: usize, cap: usize) -> Self {
        let base = if base > cap { cap } else { base };
        Self {
            base,
            cap,
            stake: base,
        }
    }

    /// Creates a progression capped at the table maximum.
    #[must_use]
    pub const fn for_table(base: usize, options: &TableOptions) -> Self {
        Self::new(base, options.max_bet)
    }
}

impl BettingStrategy for Martingale {
    fn bet(&self) -> usize {
        self.stake
    }

    fn record_win(&mut self) {
        self.stake = self.base;
    }

    fn record_loss(&mut self) {
        self.stake = self.stake.saturating_mul(2).min(self.cap);
    }
}
