//! Table configuration options.

/// Configuration options for a [`Table`](crate::Table).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use shoebox::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(6)
///     .with_burn(false)
///     .with_bet_limits(5, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of decks in the shoe. A value of 0 is treated as 1.
    pub decks: u8,
    /// Whether burn cards are discarded from each fresh shoe.
    pub burn: bool,
    /// Whether insurance is offered.
    pub insurance: bool,
    /// Smallest accepted bet.
    pub min_bet: usize,
    /// Largest accepted bet.
    pub max_bet: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            burn: true,
            insurance: true,
            min_bet: 1,
            max_bet: usize::MAX,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether burn cards are discarded.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::TableOptions;
    ///
    /// let options = TableOptions::default().with_burn(false);
    /// assert!(!options.burn);
    /// ```
    #[must_use]
    pub const fn with_burn(mut self, burn: bool) -> Self {
        self.burn = burn;
        self
    }

    /// Sets whether insurance is offered.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::TableOptions;
    ///
    /// let options = TableOptions::default().with_insurance(false);
    /// assert!(!options.insurance);
    /// ```
    #[must_use]
    pub const fn with_insurance(mut self, offered: bool) -> Self {
        self.insurance = offered;
        self
    }

    /// Sets the table bet limits.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::TableOptions;
    ///
    /// let options = TableOptions::default().with_bet_limits(10, 100);
    /// assert_eq!((options.min_bet, options.max_bet), (10, 100));
    /// ```
    #[must_use]
    pub const fn with_bet_limits(mut self, min_bet: usize, max_bet: usize) -> Self {
        self.min_bet = min_bet;
        self.max_bet = max_bet;
        self
    }

    /// Returns the number of decks actually used to build a shoe.
    #[must_use]
    pub const fn shoe_decks(&self) -> u8 {
        if self.decks == 0 { 1 } else { self.decks }
    }
}
