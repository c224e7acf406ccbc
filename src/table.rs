use crate::evaluator;
use crate::hand::Board;
use crate::player::Player;
use log::{debug, info};
use rand::Rng;

/// Shared table context: seats in fixed order, community cards, the pot and
/// the blind positions. The betting round and the pot resolver both take this
/// by `&mut`; nothing about a hand lives anywhere else.
#[derive(Debug)]
pub struct Table {
    pub players: Vec<Player>,
    pub board: Board,
    /// Always equals the sum of all players' `total_contribution` until the
    /// resolver pays it out.
    pub pot: u64,
    pub small_blind: u64,
    pub big_blind: u64,
    pub sb_seat: Option<usize>,
    pub bb_seat: Option<usize>,
}

impl Table {
    pub fn new(players: Vec<Player>, small_blind: u64, big_blind: u64) -> Self {
        Self {
            players,
            board: Board::empty(),
            pot: 0,
            small_blind,
            big_blind,
            sb_seat: None,
            bb_seat: None,
        }
    }

    /// Convenience constructor: seats named `P1..Pn` with the given stacks.
    pub fn with_stacks(stacks: &[u64], small_blind: u64, big_blind: u64) -> Self {
        let players = stacks
            .iter()
            .enumerate()
            .map(|(i, &stack)| Player::new(format!("P{}", i + 1), stack))
            .collect();
        Self::new(players, small_blind, big_blind)
    }

    pub fn seats(&self) -> usize {
        self.players.len()
    }

    /// Seats still contesting the current hand (including all-ins).
    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    /// Seats able to start the next hand.
    pub fn funded_count(&self) -> usize {
        self.players.iter().filter(|p| p.balance > 0).count()
    }

    /// Move the blinds for a new hand: the first hand seats the small blind
    /// at random, afterwards the big blind advances by one seat and the small
    /// blind takes the old big-blind seat.
    pub fn rotate_blinds<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let n = self.players.len();
        let sb = match self.bb_seat {
            Some(prev_bb) => prev_bb,
            None => rng.random_range(0..n),
        };
        self.sb_seat = Some(sb);
        self.bb_seat = Some((sb + 1) % n);
    }

    /// Post both blinds, capped at each seat's balance. A short post is an
    /// all-in; balances never go negative.
    pub fn post_blinds(&mut self) -> (u64, u64) {
        let (Some(sb), Some(bb)) = (self.sb_seat, self.bb_seat) else {
            return (0, 0);
        };
        let sb_paid = self.players[sb].commit(self.small_blind);
        let bb_paid = self.players[bb].commit(self.big_blind);
        self.pot += sb_paid + bb_paid;
        info!("{} posts small blind {sb_paid}", self.players[sb].name);
        info!("{} posts big blind {bb_paid}", self.players[bb].name);
        (sb_paid, bb_paid)
    }

    /// Re-evaluate every live player's hand category against the current
    /// board. Folded seats keep whatever they last held; the resolver never
    /// reads them.
    pub fn refresh_categories(&mut self) {
        for i in 0..self.players.len() {
            if !self.players[i].is_active() {
                continue;
            }
            let Some(hole) = self.players[i].hole else {
                continue;
            };
            let category = evaluator::evaluate(&hole, &self.board);
            self.players[i].category = category;
            debug!("{} holds {category}", self.players[i].name);
        }
    }

    /// Close the street on every seat.
    pub fn end_street(&mut self) {
        for p in &mut self.players {
            p.end_street();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::HandCategory;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn first_rotation_is_random_then_advances() {
        let mut t = Table::with_stacks(&[1000; 6], 50, 100);
        let mut rng = StdRng::seed_from_u64(9);
        t.rotate_blinds(&mut rng);
        let first_sb = t.sb_seat.unwrap();
        assert!(first_sb < 6);
        assert_eq!(t.bb_seat.unwrap(), (first_sb + 1) % 6);

        let prev_bb = t.bb_seat.unwrap();
        t.rotate_blinds(&mut rng);
        assert_eq!(t.sb_seat.unwrap(), prev_bb);
        assert_eq!(t.bb_seat.unwrap(), (prev_bb + 1) % 6);
    }

    #[test]
    fn blinds_are_capped_at_balance() {
        let mut t = Table::with_stacks(&[30, 70, 1000], 50, 100);
        t.sb_seat = Some(0);
        t.bb_seat = Some(1);
        let (sb_paid, bb_paid) = t.post_blinds();
        assert_eq!(sb_paid, 30);
        assert_eq!(bb_paid, 70);
        assert_eq!(t.pot, 100);
        assert!(t.players[0].is_all_in());
        assert!(t.players[1].is_all_in());
    }

    #[test]
    fn refresh_skips_folded_and_undealt_seats() {
        let mut t = Table::with_stacks(&[1000, 1000], 50, 100);
        t.players[0].hole = Some("As Ah".parse().unwrap());
        t.players[1].hole = Some("Ks Kh".parse().unwrap());
        t.players[1].folded = true;
        t.refresh_categories();
        assert_eq!(t.players[0].category, HandCategory::Pair);
        assert_eq!(t.players[1].category, HandCategory::HighCard);
    }
}
