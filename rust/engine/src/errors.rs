use thiserror::Error;

use crate::cards::Card;

/// Errors raised by [`crate::deck::Deck`] when a deal cannot be honoured.
/// A failed operation leaves the deck and board untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("Deck exhausted: requested {requested} cards, {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("The board is already full")]
    BoardAlreadyFull,
}

/// Errors raised by the hand evaluator on malformed input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandError {
    #[error("Invalid card value: {0} (expected 0..=51)")]
    InvalidCard(u8),
    #[error("Duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("Wrong card count: expected {expected}, got {actual}")]
    WrongCardCount { expected: &'static str, actual: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
