pub(crate) mod analysis;
pub(crate) mod runs;

use crate::cards::Card;
use crate::hand::{Board, HoleCards};
use analysis::CardSetAnalysis;
use std::fmt;

/// Hand category from weakest to strongest. Ordering is total; there is no
/// kicker-level tie-breaking, two hands of equal category tie outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum HandCategory {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "high card",
            HandCategory::Pair => "pair",
            HandCategory::TwoPair => "two pair",
            HandCategory::ThreeOfAKind => "three of a kind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full house",
            HandCategory::FourOfAKind => "four of a kind",
            HandCategory::StraightFlush => "straight flush",
            HandCategory::RoyalFlush => "royal flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type Predicate = fn(&CardSetAnalysis) -> bool;

// Priority order, strongest first. The first predicate that holds names the
// category; HighCard is the fallback when none do. StraightFlush and
// RoyalFlush test straight and flush as independent set-level properties.
const DETECTORS: [(HandCategory, Predicate); 9] = [
    (HandCategory::RoyalFlush, |a| a.has_flush() && a.straight_high() == Some(14)),
    (HandCategory::StraightFlush, |a| a.has_flush() && a.straight_high().is_some()),
    (HandCategory::FourOfAKind, |a| a.has_rank_group(4)),
    (HandCategory::FullHouse, |a| a.has_full_house()),
    (HandCategory::Flush, |a| a.has_flush()),
    (HandCategory::Straight, |a| a.straight_high().is_some()),
    (HandCategory::ThreeOfAKind, |a| a.has_rank_group(3)),
    (HandCategory::TwoPair, |a| a.rank_groups_of(2) >= 2),
    (HandCategory::Pair, |a| a.has_rank_group(2)),
];

/// Evaluate an arbitrary visible card set (2 hole cards plus 0..=5 board
/// cards in practice). Total: any set, including the empty one, maps to a
/// category.
pub fn evaluate_cards(cards: &[Card]) -> HandCategory {
    let analysis = CardSetAnalysis::new(cards);
    for (category, detect) in DETECTORS {
        if detect(&analysis) {
            return category;
        }
    }
    HandCategory::HighCard
}

/// Evaluate a player's hole cards together with the current board.
///
/// ```
/// use holdem_sim::evaluator::{evaluate, HandCategory};
/// use holdem_sim::hand::{Board, HoleCards};
///
/// let hole: HoleCards = "As Ah".parse().unwrap();
/// let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
/// assert_eq!(evaluate(&hole, &board), HandCategory::Pair);
/// ```
pub fn evaluate(hole: &HoleCards, board: &Board) -> HandCategory {
    let mut cards = Vec::with_capacity(2 + board.len());
    cards.extend_from_slice(&hole.as_array());
    cards.extend_from_slice(board.as_slice());
    evaluate_cards(&cards)
}
