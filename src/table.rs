//! The table: owns the shoe, deals hands and accepts wagers.

use alloc::boxed::Box;
use alloc::format;
use alloc::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{BetError, DealError, InsuranceError};
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::sink::Sink;
use crate::sync::Mutex;

/// A blackjack table that deals from a shoe and accepts wagers.
///
/// All methods take `&self`, so one table can be shared between several
/// players behind an [`Arc`]. Dealing is serialized by an internal lock.
pub struct Table {
    options: TableOptions,
    /// Cards left in the current shoe.
    shoe: Mutex<Deck>,
    /// Random number generator used for every fresh shoe.
    rng: Mutex<ChaCha8Rng>,
    /// Where `Bet`/`Deal` lines go.
    sink: Box<dyn Sink>,
}

impl Table {
    /// Creates a table with a freshly shuffled shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::{LogSink, Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default().with_decks(6), 42, LogSink);
    /// assert!(table.cards_remaining() > 0);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64, sink: impl Sink + 'static) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Self::build_shoe(&options, &mut rng);

        Self {
            options,
            shoe: Mutex::new(shoe),
            rng: Mutex::new(rng),
            sink: Box::new(sink),
        }
    }

    fn build_shoe(options: &TableOptions, rng: &mut ChaCha8Rng) -> Deck {
        let decks = options.shoe_decks();
        if options.burn {
            Deck::new(decks, rng)
        } else {
            Deck::shuffled(decks, rng)
        }
    }

    fn fresh_shoe(&self) -> Deck {
        let mut rng = self.rng.lock();
        Self::build_shoe(&self.options, &mut rng)
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the number of cards left in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.lock().len()
    }

    /// Replaces the shoe with a freshly shuffled one.
    pub fn reshuffle(&self) {
        let fresh = self.fresh_shoe();
        *self.shoe.lock() = fresh;
    }

    /// Replaces the shoe with `deck`, e.g. to replay a known sequence.
    pub fn set_shoe(&self, deck: Deck) {
        *self.shoe.lock() = deck;
    }

    /// Deals one card.
    ///
    /// When the shoe runs out, a fresh shoe is shuffled and the deal is
    /// retried, so this never fails.
    pub fn deal_card(&self) -> Card {
        let mut shoe = self.shoe.lock();
        loop {
            match shoe.deal() {
                Ok(card) => return card,
                Err(DealError::EmptyDeck) => {
                    log::info!("shoe exhausted, reshuffling");
                    *shoe = self.fresh_shoe();
                }
            }
        }
    }

    /// Accepts a wager.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or outside the table limits.
    pub fn place_bet(&self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount < self.options.min_bet {
            return Err(BetError::BelowMinimum {
                amount,
                minimum: self.options.min_bet,
            });
        }
        if amount > self.options.max_bet {
            return Err(BetError::AboveMaximum {
                amount,
                maximum: self.options.max_bet,
            });
        }

        self.sink.emit(&format!("Bet {amount}"));
        Ok(())
    }

    /// Deals a new hand: the dealer's exposed card, then two player cards.
    pub fn get_hand(&self) -> Hand {
        let dealer_card = Arc::new(self.deal_card());
        let hand = Hand::new(dealer_card, [self.deal_card(), self.deal_card()]);
        self.sink.emit(&format!("Deal {hand}"));
        hand
    }

    /// Returns whether `hand` may be insured: insurance is offered and the
    /// dealer shows an ace.
    #[must_use]
    pub fn can_insure(&self, hand: &Hand) -> bool {
        self.options.insurance && hand.dealer_card().is_ace()
    }

    /// Accepts an insurance bet.
    ///
    /// # Errors
    ///
    /// Returns an error if insurance is not offered or the amount is zero.
    pub fn insure(&self, amount: usize) -> Result<(), InsuranceError> {
        if !self.options.insurance {
            return Err(InsuranceError::NotOffered);
        }
        if amount == 0 {
            return Err(InsuranceError::ZeroBet);
        }

        self.sink.emit(&format!("Insurance {amount}"));
        Ok(())
    }
}
