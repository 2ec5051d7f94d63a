use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{rank_of, suit_of, Card, Rank, DECK_SIZE};
use crate::errors::HandError;

const WHEEL: [u8; 5] = [12, 3, 2, 1, 0];

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::OnePair => "pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
            Category::RoyalFlush => "royal flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strength of a 5-card hand.
///
/// Ordering is by category first and then by the kicker ranks, high to low,
/// so a better category always wins regardless of kickers. Unused kicker
/// slots are zero, and each category always fills the same slots.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks
    pub kickers: [u8; 5],
}

impl HandStrength {
    /// Flattens the strength into a single integer with the same ordering.
    ///
    /// The category sits above bit 20 and each kicker rank takes a 4-bit
    /// field below it, most significant first.
    pub fn value(&self) -> u32 {
        let kick = self
            .kickers
            .iter()
            .fold(0u32, |acc, &k| (acc << 4) | u32::from(k));
        ((self.category as u32) << 20) | kick
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.category, f)
    }
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    a.cmp(b)
}

/// Scores exactly five distinct cards.
///
/// ```
/// use holdem_engine::cards::Card;
/// use holdem_engine::hand::{evaluate_five, Category};
///
/// // Ace through Five of Hearts: the wheel straight flush.
/// let cards: Vec<Card> = [12u8, 0, 1, 2, 3]
///     .into_iter()
///     .map(|v| Card::new(v).unwrap())
///     .collect();
/// let strength = evaluate_five(&cards).unwrap();
/// assert_eq!(strength.category, Category::StraightFlush);
/// assert_eq!(strength.kickers[0], 3);
/// ```
pub fn evaluate_five(cards: &[Card]) -> Result<HandStrength, HandError> {
    if cards.len() != 5 {
        return Err(HandError::WrongCardCount {
            expected: "5",
            actual: cards.len(),
        });
    }
    ensure_distinct(cards)?;

    let mut rank_counts = [0u8; 13];
    for &c in cards {
        rank_counts[rank_of(c).index() as usize] += 1;
    }
    let distinct = rank_counts.iter().filter(|&&n| n > 0).count();

    if distinct == 5 {
        Ok(score_unpaired(cards))
    } else {
        Ok(score_paired(&rank_counts))
    }
}

/// Best 5-card strength over every 5-card subset of a 5 to 7 card pool.
pub fn best_hand(pool: &[Card]) -> Result<HandStrength, HandError> {
    if !(5..=7).contains(&pool.len()) {
        return Err(HandError::WrongCardCount {
            expected: "5..=7",
            actual: pool.len(),
        });
    }
    ensure_distinct(pool)?;

    let n = pool.len();
    let mut best: Option<HandStrength> = None;
    for mask in 0u32..(1 << n) {
        if mask.count_ones() != 5 {
            continue;
        }
        let five: Vec<Card> = (0..n)
            .filter(|&i| mask & (1u32 << i) != 0)
            .map(|i| pool[i])
            .collect();
        let strength = evaluate_five(&five)?;
        best = Some(best.map_or(strength, |b| b.max(strength)));
    }
    best.ok_or(HandError::WrongCardCount {
        expected: "5..=7",
        actual: n,
    })
}

/// Best hand a player can make from the board and their two hole cards.
///
/// The board must hold at least three cards so the pool reaches five.
pub fn evaluate_best_hand(board: &[Card], hole: [Card; 2]) -> Result<HandStrength, HandError> {
    let mut pool = Vec::with_capacity(board.len() + 2);
    pool.extend_from_slice(board);
    pool.extend_from_slice(&hole);
    best_hand(&pool)
}

fn ensure_distinct(cards: &[Card]) -> Result<(), HandError> {
    let mut seen = [false; DECK_SIZE];
    for &c in cards {
        let slot = &mut seen[c.value() as usize];
        if *slot {
            return Err(HandError::DuplicateCard(c));
        }
        *slot = true;
    }
    Ok(())
}

fn score_unpaired(cards: &[Card]) -> HandStrength {
    let mut ranks = [0u8; 5];
    for (slot, &c) in ranks.iter_mut().zip(cards) {
        *slot = rank_of(c).index();
    }
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let straight_high = if ranks == WHEEL {
        Some(Rank::Five.index())
    } else if ranks[0] - ranks[4] == 4 {
        Some(ranks[0])
    } else {
        None
    };
    let suit = suit_of(cards[0]);
    let flush = cards.iter().all(|&c| suit_of(c) == suit);

    let (category, kickers) = match (flush, straight_high) {
        (true, Some(high)) if high == Rank::Ace.index() => {
            (Category::RoyalFlush, [high, 0, 0, 0, 0])
        }
        (true, Some(high)) => (Category::StraightFlush, [high, 0, 0, 0, 0]),
        (true, None) => (Category::Flush, ranks),
        (false, Some(high)) => (Category::Straight, [high, 0, 0, 0, 0]),
        (false, None) => (Category::HighCard, ranks),
    };
    HandStrength { category, kickers }
}

fn score_paired(rank_counts: &[u8; 13]) -> HandStrength {
    // Ranks grouped by multiplicity, each list high -> low.
    let mut quads = vec![];
    let mut trips = vec![];
    let mut pairs = vec![];
    let mut singles = vec![];
    for r in (0..13u8).rev() {
        match rank_counts[r as usize] {
            4 => quads.push(r),
            3 => trips.push(r),
            2 => pairs.push(r),
            1 => singles.push(r),
            _ => {}
        }
    }

    let mut kickers = [0u8; 5];
    let category = match (quads.len(), trips.len(), pairs.len()) {
        (1, _, _) => {
            kickers[0] = quads[0];
            kickers[1] = singles[0];
            Category::FourOfAKind
        }
        (_, 1, 1) => {
            kickers[0] = trips[0];
            kickers[1] = pairs[0];
            Category::FullHouse
        }
        (_, 1, _) => {
            kickers[0] = trips[0];
            kickers[1..3].copy_from_slice(&singles[..2]);
            Category::ThreeOfAKind
        }
        (_, _, 2) => {
            kickers[0] = pairs[0];
            kickers[1] = pairs[1];
            kickers[2] = singles[0];
            Category::TwoPair
        }
        _ => {
            kickers[0] = pairs[0];
            kickers[1..4].copy_from_slice(&singles[..3]);
            Category::OnePair
        }
    };
    HandStrength { category, kickers }
}
