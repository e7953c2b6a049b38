//! Shuffled shoes of one or more decks.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DealError;

/// An ordered, shuffled shoe of `decks × 52` cards.
///
/// The top of the deck is the end of the backing vector, so dealing is a pop.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
    burned: usize,
}

impl Deck {
    /// Builds a shoe of `decks` full decks, shuffles it, then burns between
    /// 1 and 52 cards from the top.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use shoebox::{DECK_SIZE, Deck};
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let deck = Deck::new(2, &mut rng);
    /// assert_eq!(deck.len() + deck.burned(), 2 * DECK_SIZE);
    /// assert!((1..=DECK_SIZE).contains(&deck.burned()));
    /// ```
    #[must_use]
    pub fn new<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        let mut deck = Self::shuffled(decks, rng);
        let burn = rng.random_range(1..=DECK_SIZE);
        deck.burn(burn);
        deck
    }

    /// Builds and shuffles a shoe of `decks` full decks without burning.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                cards.extend(Card::all_ranks(suit));
            }
        }

        cards.shuffle(rng);
        log::debug!("shuffled {} cards from {decks} deck(s)", cards.len());

        Self { cards, burned: 0 }
    }

    /// Builds a deck that deals `cards` in the given order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.reverse();
        Self { cards, burned: 0 }
    }

    /// Discards up to `count` cards from the top.
    fn burn(&mut self, count: usize) {
        let count = count.min(self.cards.len());
        self.cards.truncate(self.cards.len() - count);
        self.burned += count;
        log::debug!("burned {count} card(s), {} left", self.cards.len());
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] when no cards remain.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        self.cards.pop().ok_or(DealError::EmptyDeck)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards burned when the shoe was built.
    #[must_use]
    pub const fn burned(&self) -> usize {
        self.burned
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
