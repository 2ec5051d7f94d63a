use holdem_engine::cards::{Card, Rank as R, Suit as S};
use holdem_engine::errors::HandError;
use holdem_engine::hand::{compare_hands, evaluate_five, Category, HandStrength};

fn c(s: S, r: R) -> Card {
    Card::from_parts(r, s)
}

fn eval(cards: &[Card]) -> HandStrength {
    evaluate_five(cards).expect("valid five-card hand")
}

#[test]
fn detects_royal_flush() {
    let hs = eval(&[
        c(S::Spades, R::Ten),
        c(S::Spades, R::Jack),
        c(S::Spades, R::Queen),
        c(S::Spades, R::King),
        c(S::Spades, R::Ace),
    ]);
    assert_eq!(hs.category, Category::RoyalFlush);
    assert_eq!(hs.to_string(), "royal flush");
}

#[test]
fn wheel_straight_flush_is_five_high() {
    let wheel = eval(&[
        c(S::Hearts, R::Two),
        c(S::Hearts, R::Three),
        c(S::Hearts, R::Four),
        c(S::Hearts, R::Five),
        c(S::Hearts, R::Ace),
    ]);
    assert_eq!(wheel.category, Category::StraightFlush);
    assert_eq!(wheel.kickers[0], R::Five as u8);

    let six_to_ten = eval(&[
        c(S::Hearts, R::Six),
        c(S::Hearts, R::Seven),
        c(S::Hearts, R::Eight),
        c(S::Hearts, R::Nine),
        c(S::Hearts, R::Ten),
    ]);
    assert_eq!(six_to_ten.category, Category::StraightFlush);
    assert!(wheel < six_to_ten);
    assert!(wheel.value() < six_to_ten.value());

    let six_high = eval(&[
        c(S::Clubs, R::Two),
        c(S::Clubs, R::Three),
        c(S::Clubs, R::Four),
        c(S::Clubs, R::Five),
        c(S::Clubs, R::Six),
    ]);
    assert_eq!(six_high.category, Category::StraightFlush);
    assert!(wheel < six_high);
}

#[test]
fn wheel_straight_ranks_below_six_high_straight() {
    let wheel = eval(&[
        c(S::Hearts, R::Ace),
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Three),
        c(S::Spades, R::Four),
        c(S::Hearts, R::Five),
    ]);
    let six_high = eval(&[
        c(S::Hearts, R::Six),
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Three),
        c(S::Spades, R::Four),
        c(S::Hearts, R::Five),
    ]);
    assert_eq!(wheel.category, Category::Straight);
    assert_eq!(six_high.category, Category::Straight);
    assert!(wheel < six_high);
}

#[test]
fn ace_with_partial_wheel_is_not_a_straight() {
    // A-2-3-4-6 and A-2-3-4-K must fall through to high card.
    let a = eval(&[
        c(S::Hearts, R::Ace),
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Three),
        c(S::Spades, R::Four),
        c(S::Hearts, R::Six),
    ]);
    let b = eval(&[
        c(S::Hearts, R::Ace),
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Three),
        c(S::Spades, R::Four),
        c(S::Hearts, R::King),
    ]);
    assert_eq!(a.category, Category::HighCard);
    assert_eq!(b.category, Category::HighCard);
    assert_eq!(a.kickers, [12, 4, 2, 1, 0]);
}

#[test]
fn no_wraparound_straight() {
    let hs = eval(&[
        c(S::Hearts, R::Queen),
        c(S::Clubs, R::King),
        c(S::Diamonds, R::Ace),
        c(S::Spades, R::Two),
        c(S::Hearts, R::Three),
    ]);
    assert_eq!(hs.category, Category::HighCard);
}

#[test]
fn quads_beat_full_house_regardless_of_kicker() {
    let quads = eval(&[
        c(S::Spades, R::Ace),
        c(S::Clubs, R::Ace),
        c(S::Diamonds, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Clubs, R::Two),
    ]);
    let full_house = eval(&[
        c(S::Spades, R::King),
        c(S::Clubs, R::King),
        c(S::Diamonds, R::King),
        c(S::Hearts, R::Two),
        c(S::Diamonds, R::Two),
    ]);
    assert_eq!(quads.category, Category::FourOfAKind);
    assert_eq!(quads.kickers[..2], [12, 0]);
    assert_eq!(full_house.category, Category::FullHouse);
    assert_eq!(full_house.kickers[..2], [11, 0]);
    assert!(compare_hands(&quads, &full_house).is_gt());
    assert!(quads.value() > full_house.value());
}

#[test]
fn flush_sits_between_straight_and_full_house() {
    let flush = eval(&[
        c(S::Hearts, R::Two),
        c(S::Hearts, R::Seven),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::Nine),
    ]);
    let straight = eval(&[
        c(S::Clubs, R::Ten),
        c(S::Hearts, R::Jack),
        c(S::Clubs, R::Queen),
        c(S::Hearts, R::King),
        c(S::Diamonds, R::Ace),
    ]);
    let full_house = eval(&[
        c(S::Clubs, R::Two),
        c(S::Hearts, R::Two),
        c(S::Diamonds, R::Two),
        c(S::Hearts, R::Three),
        c(S::Diamonds, R::Three),
    ]);
    assert_eq!(flush.category, Category::Flush);
    assert_eq!(flush.kickers, [10, 9, 7, 5, 0]);
    assert_eq!(straight.category, Category::Straight);
    assert!(straight < flush);
    assert!(flush < full_house);
}

#[test]
fn paired_kickers_are_ordered_high_to_low() {
    let trips = eval(&[
        c(S::Clubs, R::Seven),
        c(S::Hearts, R::Seven),
        c(S::Diamonds, R::Seven),
        c(S::Spades, R::Two),
        c(S::Clubs, R::King),
    ]);
    assert_eq!(trips.category, Category::ThreeOfAKind);
    assert_eq!(trips.kickers[..3], [5, 11, 0]);

    let two_pair = eval(&[
        c(S::Clubs, R::Four),
        c(S::Hearts, R::Jack),
        c(S::Diamonds, R::Four),
        c(S::Spades, R::Jack),
        c(S::Clubs, R::Six),
    ]);
    assert_eq!(two_pair.category, Category::TwoPair);
    assert_eq!(two_pair.kickers[..3], [9, 2, 4]);

    let pair = eval(&[
        c(S::Clubs, R::Eight),
        c(S::Hearts, R::Three),
        c(S::Diamonds, R::Eight),
        c(S::Spades, R::Ace),
        c(S::Clubs, R::Ten),
    ]);
    assert_eq!(pair.category, Category::OnePair);
    assert_eq!(pair.kickers[..4], [6, 12, 8, 1]);
}

#[test]
fn kickers_break_ties_within_a_category() {
    let pair_aces_king = eval(&[
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::King),
        c(S::Diamonds, R::Three),
        c(S::Clubs, R::Two),
    ]);
    let pair_aces_queen = eval(&[
        c(S::Diamonds, R::Ace),
        c(S::Spades, R::Ace),
        c(S::Hearts, R::Queen),
        c(S::Clubs, R::Jack),
        c(S::Hearts, R::Ten),
    ]);
    assert!(pair_aces_king > pair_aces_queen);

    let low_two_pair = eval(&[
        c(S::Clubs, R::Three),
        c(S::Hearts, R::Three),
        c(S::Spades, R::Two),
        c(S::Diamonds, R::Two),
        c(S::Clubs, R::Ace),
    ]);
    assert!(low_two_pair > pair_aces_king);
}

#[test]
fn identical_rank_patterns_tie_across_suits() {
    let a = eval(&[
        c(S::Clubs, R::Nine),
        c(S::Hearts, R::Nine),
        c(S::Spades, R::Four),
        c(S::Diamonds, R::Seven),
        c(S::Clubs, R::Queen),
    ]);
    let b = eval(&[
        c(S::Diamonds, R::Nine),
        c(S::Spades, R::Nine),
        c(S::Hearts, R::Four),
        c(S::Clubs, R::Seven),
        c(S::Hearts, R::Queen),
    ]);
    assert_eq!(a, b);
    assert_eq!(a.value(), b.value());
    assert!(compare_hands(&a, &b).is_eq());
}

#[test]
fn malformed_input_is_rejected() {
    let four = [
        c(S::Clubs, R::Nine),
        c(S::Hearts, R::Nine),
        c(S::Spades, R::Four),
        c(S::Diamonds, R::Seven),
    ];
    assert_eq!(
        evaluate_five(&four),
        Err(HandError::WrongCardCount {
            expected: "5",
            actual: 4
        })
    );

    let dup = [
        c(S::Clubs, R::Nine),
        c(S::Hearts, R::Nine),
        c(S::Spades, R::Four),
        c(S::Diamonds, R::Seven),
        c(S::Clubs, R::Nine),
    ];
    assert_eq!(
        evaluate_five(&dup),
        Err(HandError::DuplicateCard(c(S::Clubs, R::Nine)))
    );
}
