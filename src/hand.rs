//! Player hands and frozen snapshots.

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::SplitError;

fn hard_total(cards: &[Card]) -> u16 {
    cards.iter().map(|card| u16::from(card.hard())).sum()
}

fn soft_total(cards: &[Card]) -> u16 {
    cards.iter().map(|card| u16::from(card.soft())).sum()
}

/// Writes `"A♠, 7♥ vs 10♣"`, or `"(no cards) vs 10♣"` for an empty hand.
fn write_hand(f: &mut fmt::Formatter<'_>, cards: &[Card], dealer_card: &Card) -> fmt::Result {
    if cards.is_empty() {
        f.write_str("(no cards)")?;
    }
    for (index, card) in cards.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{card}")?;
    }
    write!(f, " vs {dealer_card}")
}

/// A player's hand for one round.
///
/// The hand owns its cards. The dealer's exposed card is shared with the
/// table and only read for comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    dealer_card: Arc<Card>,
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand against `dealer_card` holding `cards`.
    #[must_use]
    pub fn new(dealer_card: Arc<Card>, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            dealer_card,
            cards: cards.into_iter().collect(),
        }
    }

    /// Adds a card to the hand.
    pub fn append(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the dealer's exposed card.
    #[must_use]
    pub fn dealer_card(&self) -> &Card {
        &self.dealer_card
    }

    /// Sum of hard values, aces counting 1.
    #[must_use]
    pub fn hard_total(&self) -> u16 {
        hard_total(&self.cards)
    }

    /// Sum of soft values, aces counting 11.
    #[must_use]
    pub fn soft_total(&self) -> u16 {
        soft_total(&self.cards)
    }

    /// Returns whether the hand is two cards of the same rank.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        matches!(self.cards.as_slice(), [a, b] if a.rank() == b.rank())
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Takes an immutable snapshot of the hand.
    ///
    /// The snapshot owns copies of the cards, so later changes to this hand
    /// are not visible through it.
    #[must_use]
    pub fn freeze(&self) -> FrozenHand {
        FrozenHand {
            dealer_card: Arc::clone(&self.dealer_card),
            cards: self.cards.clone().into_boxed_slice(),
        }
    }

    /// Splits a two-card hand into two hands.
    ///
    /// The first returned hand holds original card `lead` plus `new_cards[0]`,
    /// the second holds the other original card plus `new_cards[1]`. On
    /// success this hand is left empty.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::CardCount`] if the hand does not hold exactly two
    /// cards, or [`SplitError::Index`] if `lead` is not 0 or 1. The hand is
    /// unchanged on error; the supplied cards are dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use shoebox::{Card, Hand, Suit};
    ///
    /// let eight = |suit| Card::new(8, suit).unwrap();
    /// let dealer = Arc::new(Card::new(6, Suit::Club).unwrap());
    /// let mut hand = Hand::new(dealer, [eight(Suit::Heart), eight(Suit::Spade)]);
    ///
    /// let fresh = [Card::new(3, Suit::Club).unwrap(), Card::new(10, Suit::Heart).unwrap()];
    /// let [first, second] = hand.split(0, fresh).unwrap();
    /// assert_eq!(first.hard_total(), 11);
    /// assert_eq!(second.hard_total(), 18);
    /// assert!(hand.is_empty());
    /// ```
    pub fn split(&mut self, lead: usize, new_cards: [Card; 2]) -> Result<[Self; 2], SplitError> {
        let count = self.cards.len();
        if count != 2 {
            return Err(SplitError::CardCount(count));
        }
        if lead > 1 {
            return Err(SplitError::Index(lead));
        }

        let [a, b] = match <[Card; 2]>::try_from(core::mem::take(&mut self.cards)) {
            Ok(pair) => pair,
            Err(cards) => {
                self.cards = cards;
                return Err(SplitError::CardCount(count));
            }
        };
        let (kept, other) = if lead == 0 { (a, b) } else { (b, a) };
        let [first_new, second_new] = new_cards;

        Ok([
            Self::new(Arc::clone(&self.dealer_card), [kept, first_new]),
            Self::new(Arc::clone(&self.dealer_card), [other, second_new]),
        ])
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hand(f, &self.cards, &self.dealer_card)
    }
}

/// An immutable snapshot of a [`Hand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrozenHand {
    dealer_card: Arc<Card>,
    cards: Box<[Card]>,
}

impl FrozenHand {
    /// Returns the cards in the snapshot.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the dealer's exposed card.
    #[must_use]
    pub fn dealer_card(&self) -> &Card {
        &self.dealer_card
    }

    /// Sum of hard values, aces counting 1.
    #[must_use]
    pub fn hard_total(&self) -> u16 {
        hard_total(&self.cards)
    }

    /// Sum of soft values, aces counting 11.
    #[must_use]
    pub fn soft_total(&self) -> u16 {
        soft_total(&self.cards)
    }

    /// Returns the number of cards in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<&Hand> for FrozenHand {
    fn from(hand: &Hand) -> Self {
        hand.freeze()
    }
}

impl fmt::Display for FrozenHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hand(f, &self.cards, &self.dealer_card)
    }
}
