//! Card types and the rank factory.

use core::fmt;

use crate::error::CardError;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Club,
    /// Diamonds.
    Diamond,
    /// Hearts.
    Heart,
    /// Spades.
    Spade,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Club, Self::Diamond, Self::Heart, Self::Spade];

    /// Returns the suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Club => "Club",
            Self::Diamond => "Diamond",
            Self::Heart => "Heart",
            Self::Spade => "Spade",
        }
    }

    /// Returns the display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Club => '♣',
            Self::Diamond => '♦',
            Self::Heart => '♥',
            Self::Spade => '♠',
        }
    }
}

/// How a rank scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Ace: 1 hard, 11 soft.
    Ace,
    /// Pip card: its own rank either way.
    Number,
    /// Jack, queen or king: 10 either way.
    Face,
}

impl Kind {
    /// Computes the `(hard, soft)` points for a card of this kind.
    #[must_use]
    pub const fn points(self, rank: u8) -> (u8, u8) {
        match self {
            Self::Ace => (1, 11),
            Self::Number => (rank, rank),
            Self::Face => (10, 10),
        }
    }
}

/// Rank 1..=13 mapped to its kind and display label.
static FACTORY: [(Kind, &str); 13] = [
    (Kind::Ace, "A"),
    (Kind::Number, "2"),
    (Kind::Number, "3"),
    (Kind::Number, "4"),
    (Kind::Number, "5"),
    (Kind::Number, "6"),
    (Kind::Number, "7"),
    (Kind::Number, "8"),
    (Kind::Number, "9"),
    (Kind::Number, "10"),
    (Kind::Face, "J"),
    (Kind::Face, "Q"),
    (Kind::Face, "K"),
];

/// A playing card.
///
/// Cards are not `Copy`: dealing moves a card out of the deck and into a hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    rank: u8,
    label: &'static str,
    kind: Kind,
    suit: Suit,
    hard: u8,
    soft: u8,
}

impl Card {
    /// Creates a card from a numeric rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::{Card, Suit};
    ///
    /// let ace = Card::new(1, Suit::Spade).unwrap();
    /// assert_eq!((ace.hard(), ace.soft()), (1, 11));
    /// assert_eq!(ace.to_string(), "A♠");
    /// ```
    pub fn new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        let &(kind, label) = rank
            .checked_sub(1)
            .and_then(|index| FACTORY.get(index as usize))
            .ok_or(CardError::InvalidRank(rank))?;

        Ok(Self::build(rank, kind, label, suit))
    }

    /// Every rank of `suit` straight from the factory table, ace first.
    pub(crate) fn all_ranks(suit: Suit) -> impl Iterator<Item = Self> {
        (1..)
            .zip(FACTORY.iter())
            .map(move |(rank, &(kind, label))| Self::build(rank, kind, label, suit))
    }

    const fn build(rank: u8, kind: Kind, label: &'static str, suit: Suit) -> Self {
        let (hard, soft) = kind.points(rank);
        Self {
            rank,
            label,
            kind,
            suit,
            hard,
            soft,
        }
    }

    /// Returns the numeric rank.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the display label ("A", "2".."10", "J", "Q", "K").
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the scoring kind.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the hard point value (ace counts 1).
    #[must_use]
    pub const fn hard(&self) -> u8 {
        self.hard
    }

    /// Returns the soft point value (ace counts 11).
    #[must_use]
    pub const fn soft(&self) -> u8 {
        self.soft
    }

    /// Returns whether this card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        matches!(self.kind, Kind::Ace)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.label, self.suit.symbol())
    }
}
