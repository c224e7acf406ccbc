//! Showdown settlement.
//!
//! The pot is paid out tier by tier. The shortest all-in stake among the
//! strongest hands caps each tier, and every player covered by that cap drops
//! out of contention for the chips above it. Once the best remaining hand
//! belongs to someone with chips behind, that group takes whatever is left.

use crate::evaluator::HandCategory;
use crate::table::Table;
use log::{info, warn};

/// One showdown credit: `amount` chips added to the balance of `seat`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Payout {
    pub seat: usize,
    pub amount: u64,
    pub category: HandCategory,
}

/// Splits the pot among the showdown winners, honoring all-in caps.
///
/// Winners collect in ascending order of their hand-long contribution. An
/// all-in winner is matched up to their own stake by every covered opponent
/// and also collects the forfeited below-cap stakes, then stops contending.
/// Even splits use integer division; the remainder is not paid out.
///
/// An exhausted contender list with chips still in the pot is logged and
/// abandoned rather than treated as fatal.
pub fn resolve(table: &mut Table) -> Vec<Payout> {
    debug_assert_eq!(
        table.pot,
        table.players.iter().map(|p| p.total_contribution).sum::<u64>(),
        "pot out of step with player contributions"
    );
    let mut payouts = Vec::new();
    let mut prev_cap = 0u64;
    while table.pot > 0 {
        let strongest = table
            .players
            .iter()
            .filter(|p| !p.resolved && p.is_active())
            .map(|p| p.category)
            .max();
        let Some(strongest) = strongest else {
            warn!("{} chips left in the pot with no contenders", table.pot);
            break;
        };
        let mut winners: Vec<usize> = (0..table.seats())
            .filter(|&seat| {
                let p = &table.players[seat];
                !p.resolved && p.is_active() && p.category == strongest
            })
            .collect();
        // Stable sort keeps seat order among equal stakes.
        winners.sort_by_key(|&seat| table.players[seat].total_contribution);
        let cap_seat = winners[0];

        if table.players[cap_seat].balance > 0 {
            // Nobody in this group is capped; the rest of the pot is theirs.
            let share = table.pot / winners.len() as u64;
            for &seat in &winners {
                credit(table, seat, share, &mut payouts);
            }
            table.pot = 0;
            break;
        }

        let cap = table.players[cap_seat].total_contribution;
        let covered = table
            .players
            .iter()
            .filter(|p| !p.resolved && p.total_contribution >= cap)
            .count() as u64;
        // Every winner staked at least `cap`, so the below-cap stakes all
        // belong to players with no claim on this tier.
        let forfeited: u64 = table
            .players
            .iter()
            .filter(|p| !p.resolved && p.total_contribution < cap)
            .map(|p| p.total_contribution.saturating_sub(prev_cap))
            .sum();
        let tier = (cap - prev_cap) * covered + forfeited;
        let share = tier / winners.len() as u64;
        for &seat in &winners {
            credit(table, seat, share, &mut payouts);
        }
        table.pot = table.pot.saturating_sub(tier);

        for p in table.players.iter_mut() {
            if !p.resolved && p.total_contribution <= cap {
                p.resolved = true;
            }
        }
        prev_cap = cap;
    }
    payouts
}

fn credit(table: &mut Table, seat: usize, amount: u64, payouts: &mut Vec<Payout>) {
    if amount == 0 {
        return;
    }
    let player = &mut table.players[seat];
    player.balance += amount;
    info!("{} wins {amount} with {}", player.name, player.category);
    payouts.push(Payout { seat, amount, category: player.category });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;

    fn contender(name: &str, balance: u64, staked: u64, category: HandCategory) -> Player {
        let mut p = Player::new(name, balance);
        p.total_contribution = staked;
        p.category = category;
        p
    }

    fn folded(name: &str, staked: u64) -> Player {
        let mut p = contender(name, 0, staked, HandCategory::RoyalFlush);
        p.folded = true;
        p
    }

    fn table_of(players: Vec<Player>) -> Table {
        let pot = players.iter().map(|p| p.total_contribution).sum();
        let mut table = Table::new(players, 50, 100);
        table.pot = pot;
        table
    }

    fn paid(payouts: &[Payout], seat: usize) -> u64 {
        payouts.iter().filter(|p| p.seat == seat).map(|p| p.amount).sum()
    }

    #[test]
    fn uncapped_winner_takes_the_whole_pot() {
        let mut table = table_of(vec![
            contender("a", 400, 300, HandCategory::Flush),
            contender("b", 100, 300, HandCategory::Pair),
            contender("c", 0, 100, HandCategory::HighCard),
        ]);
        let payouts = resolve(&mut table);
        assert_eq!(paid(&payouts, 0), 700);
        assert_eq!(table.players[0].balance, 1100);
        assert_eq!(table.pot, 0);
    }

    #[test]
    fn short_all_in_winner_takes_only_the_matched_pot() {
        // A is all-in for 100 with the best hand; B beats C for the rest.
        let mut table = table_of(vec![
            contender("a", 0, 100, HandCategory::FullHouse),
            contender("b", 700, 300, HandCategory::Straight),
            contender("c", 700, 300, HandCategory::Pair),
        ]);
        let payouts = resolve(&mut table);
        assert_eq!(paid(&payouts, 0), 300);
        assert_eq!(paid(&payouts, 1), 400);
        assert_eq!(paid(&payouts, 2), 0);
        assert_eq!(table.pot, 0);
        assert!(table.players[0].resolved);
    }

    #[test]
    fn tied_winners_split_and_the_remainder_is_dropped() {
        let mut table = table_of(vec![
            contender("a", 500, 101, HandCategory::TwoPair),
            contender("b", 500, 101, HandCategory::TwoPair),
            contender("c", 500, 99, HandCategory::HighCard),
        ]);
        let payouts = resolve(&mut table);
        assert_eq!(paid(&payouts, 0), 150);
        assert_eq!(paid(&payouts, 1), 150);
        let total: u64 = payouts.iter().map(|p| p.amount).sum();
        assert_eq!(total, 300);
        assert_eq!(table.pot, 0);
    }

    #[test]
    fn folded_stakes_feed_the_lowest_tier() {
        let mut table = table_of(vec![
            contender("a", 0, 100, HandCategory::FourOfAKind),
            folded("b", 40),
            contender("c", 200, 300, HandCategory::Flush),
            contender("d", 200, 300, HandCategory::Pair),
        ]);
        let payouts = resolve(&mut table);
        // Three covered stakes of 100 plus the forfeited 40.
        assert_eq!(paid(&payouts, 0), 340);
        assert_eq!(paid(&payouts, 1), 0);
        assert_eq!(paid(&payouts, 2), 400);
        assert_eq!(table.pot, 0);
    }

    #[test]
    fn folded_players_never_win_regardless_of_category() {
        let mut table = table_of(vec![
            folded("a", 300),
            contender("b", 500, 300, HandCategory::HighCard),
        ]);
        let payouts = resolve(&mut table);
        assert!(payouts.iter().all(|p| p.seat != 0));
        assert_eq!(paid(&payouts, 1), 600);
    }

    #[test]
    fn stacked_all_ins_resolve_in_ascending_order() {
        let mut table = table_of(vec![
            contender("a", 0, 50, HandCategory::StraightFlush),
            contender("b", 0, 200, HandCategory::Flush),
            contender("c", 300, 500, HandCategory::ThreeOfAKind),
        ]);
        let payouts = resolve(&mut table);
        assert_eq!(paid(&payouts, 0), 150);
        assert_eq!(paid(&payouts, 1), 300);
        assert_eq!(paid(&payouts, 2), 300);
        assert_eq!(table.pot, 0);
        assert_eq!(table.players[2].balance, 600);
    }

    #[test]
    fn equal_all_in_winners_resolve_together() {
        let mut table = table_of(vec![
            contender("a", 0, 200, HandCategory::Straight),
            contender("b", 0, 200, HandCategory::Straight),
            contender("c", 100, 200, HandCategory::Pair),
        ]);
        let payouts = resolve(&mut table);
        assert_eq!(paid(&payouts, 0), 300);
        assert_eq!(paid(&payouts, 1), 300);
        assert_eq!(paid(&payouts, 2), 0);
        assert_eq!(table.pot, 0);
    }

    #[test]
    fn leftover_chips_without_contenders_are_abandoned() {
        let mut table = table_of(vec![folded("a", 100), folded("b", 100)]);
        let payouts = resolve(&mut table);
        assert!(payouts.is_empty());
        assert_eq!(table.pot, 200);
    }

    #[test]
    fn payouts_never_exceed_the_pot() {
        let mut table = table_of(vec![
            contender("a", 0, 13, HandCategory::Flush),
            contender("b", 0, 13, HandCategory::Flush),
            contender("c", 0, 13, HandCategory::Flush),
            contender("d", 9, 40, HandCategory::Pair),
        ]);
        let pot = table.pot;
        let payouts = resolve(&mut table);
        let total: u64 = payouts.iter().map(|p| p.amount).sum();
        assert!(total <= pot);
    }
}
