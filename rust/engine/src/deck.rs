use std::fmt;
use std::ops::Range;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card, DECK_SIZE};
use crate::errors::DeckError;

/// Stage of board dealing for a single hand.
/// Advances one step at a time and never moves backwards.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Hole cards only, empty board
    Preflop = 0,
    /// Three community cards
    Flop = 1,
    /// Fourth community card
    Turn = 2,
    /// Fifth community card
    River = 3,
    /// Board closed, nothing left to deal
    Complete = 4,
}

impl GamePhase {
    pub fn next(self) -> Option<GamePhase> {
        match self {
            GamePhase::Preflop => Some(GamePhase::Flop),
            GamePhase::Flop => Some(GamePhase::Turn),
            GamePhase::Turn => Some(GamePhase::River),
            GamePhase::River => Some(GamePhase::Complete),
            GamePhase::Complete => None,
        }
    }

    /// Board cards dealt when entering this phase.
    pub fn cards_on_entry(self) -> usize {
        match self {
            GamePhase::Flop => 3,
            GamePhase::Turn | GamePhase::River => 1,
            GamePhase::Preflop | GamePhase::Complete => 0,
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GamePhase::Preflop => "preflop",
            GamePhase::Flop => "flop",
            GamePhase::Turn => "turn",
            GamePhase::River => "river",
            GamePhase::Complete => "complete",
        };
        f.write_str(s)
    }
}

/// A shuffled 52-card deck together with the board it deals for one hand.
///
/// Cards are dealt from the front of the shuffled order through a cursor, so
/// a dealt card is never seen again. Every deal is all-or-nothing.
///
/// # Examples
///
/// ```
/// use holdem_engine::deck::{Deck, GamePhase};
///
/// let mut deck = Deck::new_with_seed(42);
/// let hole = deck.deal_hole_cards().unwrap();
/// assert_ne!(hole[0], hole[1]);
///
/// for _ in 0..4 {
///     deck.advance_phase().unwrap();
/// }
/// assert_eq!(deck.phase(), GamePhase::Complete);
/// assert_eq!(deck.board_cards().len(), 5);
/// assert_eq!(deck.cards_used_count(), 7);
/// assert!(deck.advance_phase().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Shuffled order of all 52 cards
    cards: Vec<Card>,
    /// Index of the next card to deal
    position: usize,
    /// Community cards dealt so far (0, 3, 4 or 5)
    board: Vec<Card>,
    phase: GamePhase,
    /// Seed used for the shuffle, when one was supplied
    seed: Option<u64>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Builds a deck shuffled from fresh randomness.
    pub fn new() -> Self {
        let rng = ChaCha20Rng::from_rng(&mut rand::rng());
        Self::shuffled(rng, None)
    }

    /// Builds a deck whose order is fully determined by `seed`.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::shuffled(ChaCha20Rng::seed_from_u64(seed), Some(seed))
    }

    fn shuffled(mut rng: ChaCha20Rng, seed: Option<u64>) -> Self {
        let mut cards = full_deck();
        cards.shuffle(&mut rng);
        tracing::debug!(seed = ?seed, "deck shuffled");
        Self {
            cards,
            position: 0,
            board: Vec::with_capacity(5),
            phase: GamePhase::Preflop,
            seed,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Deals two cards from the front of the deck, first-dealt first.
    pub fn deal_hole_cards(&mut self) -> Result<[Card; 2], DeckError> {
        let dealt = self.deal(2)?;
        Ok([self.cards[dealt.start], self.cards[dealt.start + 1]])
    }

    /// Moves the board to the next phase, dealing the cards that phase needs.
    /// Returns the phase just entered.
    pub fn advance_phase(&mut self) -> Result<GamePhase, DeckError> {
        let Some(next) = self.phase.next() else {
            tracing::warn!("advance requested on a complete board");
            return Err(DeckError::BoardAlreadyFull);
        };
        let dealt = self.deal(next.cards_on_entry())?;
        self.board.extend_from_slice(&self.cards[dealt]);
        self.phase = next;
        tracing::debug!(phase = %next, board_len = self.board.len(), "phase advanced");
        Ok(next)
    }

    pub fn board_cards(&self) -> &[Card] {
        &self.board
    }

    /// Cards not yet dealt, in the order they will come off the deck.
    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards[self.position..]
    }

    pub fn remaining_card_count(&self) -> usize {
        self.cards.len() - self.position
    }

    pub fn cards_used_count(&self) -> usize {
        DECK_SIZE - self.remaining_card_count()
    }

    /// Reserves the next `n` cards and returns their index range.
    fn deal(&mut self, n: usize) -> Result<Range<usize>, DeckError> {
        let remaining = self.remaining_card_count();
        if remaining < n {
            tracing::warn!(requested = n, remaining, "deck exhausted");
            return Err(DeckError::DeckExhausted {
                requested: n,
                remaining,
            });
        }
        let start = self.position;
        self.position += n;
        tracing::trace!(count = n, remaining = remaining - n, "dealt cards");
        Ok(start..self.position)
    }
}
