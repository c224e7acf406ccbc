use super::runs;
use crate::cards::Card;

/// Pre-computed view of a visible card set, built once and shared by all
/// category detectors: rank values and suit values, each sorted ascending,
/// plus the deduplicated rank list the straight scan runs over.
#[derive(Debug, Clone)]
pub struct CardSetAnalysis {
    rank_values: Vec<u8>,
    suit_values: Vec<u8>,
    distinct_ranks: Vec<u8>,
}

impl CardSetAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        let mut rank_values: Vec<u8> = cards.iter().map(|c| c.rank().value()).collect();
        let mut suit_values: Vec<u8> = cards.iter().map(|c| c.suit() as u8).collect();
        rank_values.sort_unstable();
        suit_values.sort_unstable();

        let mut distinct_ranks = rank_values.clone();
        distinct_ranks.dedup();

        Self { rank_values, suit_values, distinct_ranks }
    }

    /// Some rank appears at least `len` times.
    pub fn has_rank_group(&self, len: usize) -> bool {
        runs::has_equal_run(&self.rank_values, len)
    }

    /// Number of distinct ranks appearing at least `len` times.
    pub fn rank_groups_of(&self, len: usize) -> usize {
        runs::count_equal_runs(&self.rank_values, len)
    }

    /// A rank appears three or more times and a different rank at least twice.
    pub fn has_full_house(&self) -> bool {
        self.has_rank_group(3) && self.rank_groups_of(2) >= 2
    }

    /// Some suit appears at least five times.
    pub fn has_flush(&self) -> bool {
        runs::has_equal_run(&self.suit_values, 5)
    }

    /// Highest top value of a 5-long consecutive rank run, if any.
    /// Runs over distinct ranks, so paired ranks inside the run do not break
    /// it. Ace is high only: no wheel.
    pub fn straight_high(&self) -> Option<u8> {
        runs::highest_consecutive_run_top(&self.distinct_ranks, 5)
    }
}
