use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::HandError;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Represents one of the four suits in a standard 52-card deck.
/// The discriminant is the suit component of the [`Card`] encoding.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit (♥)
    Hearts = 0,
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(v: u8) -> Option<Suit> {
        match v {
            0 => Some(Suit::Hearts),
            1 => Some(Suit::Clubs),
            2 => Some(Suit::Diamonds),
            3 => Some(Suit::Spades),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// The discriminant is the rank component of the [`Card`] encoding, so
/// ranks compare in poker order with Ace high.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 0,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (9)
    Jack,
    /// Queen (10)
    Queen,
    /// King (11)
    King,
    /// Ace (12)
    Ace,
}

impl Rank {
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(v: u8) -> Option<Rank> {
        all_ranks().get(v as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single playing card, stored as its integer encoding in `0..=51`.
///
/// The rank is `value % 13` and the suit is `value / 13`, so every value in
/// range maps to exactly one (rank, suit) pair.
///
/// ```
/// use holdem_engine::cards::{Card, Rank, Suit};
///
/// let card = Card::new(51).unwrap();
/// assert_eq!(card.rank(), Rank::Ace);
/// assert_eq!(card.suit(), Suit::Spades);
/// assert_eq!(card.to_string(), "Ace of Spades");
/// assert!(Card::new(52).is_err());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    pub fn new(value: u8) -> Result<Card, HandError> {
        if (value as usize) < DECK_SIZE {
            Ok(Card(value))
        } else {
            Err(HandError::InvalidCard(value))
        }
    }

    pub fn from_parts(rank: Rank, suit: Suit) -> Card {
        Card(suit.index() * 13 + rank.index())
    }

    /// The encoded integer value of this card.
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn rank(self) -> Rank {
        rank_of(self)
    }

    pub fn suit(self) -> Suit {
        suit_of(self)
    }
}

impl TryFrom<u8> for Card {
    type Error = HandError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Card::new(value)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank(), self.suit())
    }
}

pub fn rank_of(card: Card) -> Rank {
    // value % 13 is always < 13
    all_ranks()[(card.0 % 13) as usize]
}

pub fn suit_of(card: Card) -> Suit {
    all_suits()[(card.0 / 13) as usize]
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// All 52 cards in encoding order.
pub fn full_deck() -> Vec<Card> {
    (0..DECK_SIZE as u8).map(Card).collect()
}

/// Human-readable names for a sequence of cards, in the same order.
pub fn format_cards(cards: &[Card]) -> Vec<String> {
    cards.iter().map(|c| c.to_string()).collect()
}
