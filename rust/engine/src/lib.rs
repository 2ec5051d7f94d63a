//! # holdem-engine: Texas Hold'em Deck and Hand Evaluation
//!
//! Models a single 52-card deck through one hand of Hold'em (hole cards,
//! flop, turn, river) and scores poker hands as totally ordered strengths.
//!
//! ## Core Modules
//!
//! - [`cards`] - Integer card encoding (`0..=51`), ranks, suits and display names
//! - [`deck`] - Shuffled deck with ChaCha20 RNG and board phase progression
//! - [`hand`] - 5-card scoring and best-of-seven search
//! - [`config`] - Deck settings from TOML and environment
//! - [`errors`] - Error types for deck, evaluator and config operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//! use holdem_engine::hand::evaluate_best_hand;
//!
//! let mut deck = Deck::new_with_seed(7);
//! let alice = deck.deal_hole_cards().unwrap();
//! let bob = deck.deal_hole_cards().unwrap();
//! while deck.advance_phase().is_ok() {}
//!
//! let a = evaluate_best_hand(deck.board_cards(), alice).unwrap();
//! let b = evaluate_best_hand(deck.board_cards(), bob).unwrap();
//! println!("alice: {a}, bob: {b}, alice wins: {}", a > b);
//! ```
//!
//! ## Deterministic Dealing
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! let deck1 = Deck::new_with_seed(42);
//! let deck2 = Deck::new_with_seed(42);
//! assert_eq!(deck1.remaining_cards(), deck2.remaining_cards());
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod errors;
pub mod hand;
