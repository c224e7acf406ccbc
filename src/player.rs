use crate::evaluator::HandCategory;
use crate::hand::HoleCards;

/// One seat's ledger entry. The betting round and the pot resolver operate on
/// this record directly; `balance + total_contribution` stays equal to the
/// stack the player brought into the hand until payout credits winnings.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub balance: u64,
    /// Chips wagered on the current street; zeroed when the street ends.
    pub round_contribution: u64,
    /// Chips wagered across the whole hand; the pot resolver's input.
    pub total_contribution: u64,
    pub folded: bool,
    /// Showdown-transient: set once a resolver tier has settled this player.
    pub resolved: bool,
    pub hole: Option<HoleCards>,
    pub category: HandCategory,
}

impl Player {
    pub fn new(name: impl Into<String>, balance: u64) -> Self {
        Self {
            name: name.into(),
            balance,
            round_contribution: 0,
            total_contribution: 0,
            folded: false,
            resolved: false,
            hole: None,
            category: HandCategory::HighCard,
        }
    }

    /// Still contesting the hand (may be all-in).
    pub fn is_active(&self) -> bool {
        !self.folded
    }

    /// Contesting but out of chips; skipped by the betting round.
    pub fn is_all_in(&self) -> bool {
        !self.folded && self.balance == 0
    }

    /// CHECK is legal only when nothing is owed at the current bet level.
    pub fn can_check(&self, bet_level: u64) -> bool {
        self.round_contribution == bet_level
    }

    /// Move up to `amount` chips from the balance into the pot counters.
    /// Returns what was actually moved; a short payment is an all-in.
    pub fn commit(&mut self, amount: u64) -> u64 {
        let paid = self.balance.min(amount);
        self.balance -= paid;
        self.round_contribution += paid;
        self.total_contribution += paid;
        paid
    }

    /// Prepare the seat for a fresh hand. A player with no chips left stays
    /// folded and is dealt nothing.
    pub fn reset_for_hand(&mut self) {
        self.round_contribution = 0;
        self.total_contribution = 0;
        self.resolved = false;
        self.hole = None;
        self.category = HandCategory::HighCard;
        self.folded = self.balance == 0;
    }

    /// Close out a street; hand totals are already up to date.
    pub fn end_street(&mut self) {
        self.round_contribution = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_moves_chips_and_caps_at_balance() {
        let mut p = Player::new("a", 100);
        assert_eq!(p.commit(60), 60);
        assert_eq!(p.balance, 40);
        assert_eq!(p.round_contribution, 60);
        assert_eq!(p.total_contribution, 60);

        // Short payment goes all-in.
        assert_eq!(p.commit(60), 40);
        assert_eq!(p.balance, 0);
        assert_eq!(p.total_contribution, 100);
        assert!(p.is_all_in());
    }

    #[test]
    fn balance_plus_contribution_is_invariant() {
        let mut p = Player::new("a", 500);
        for amount in [50, 125, 500] {
            p.commit(amount);
            assert_eq!(p.balance + p.total_contribution, 500);
        }
    }

    #[test]
    fn end_street_keeps_hand_total() {
        let mut p = Player::new("a", 300);
        p.commit(100);
        p.end_street();
        assert_eq!(p.round_contribution, 0);
        assert_eq!(p.total_contribution, 100);
    }

    #[test]
    fn busted_player_stays_folded_on_reset() {
        let mut p = Player::new("a", 100);
        p.commit(100);
        p.folded = false;
        p.reset_for_hand();
        assert!(p.folded);
        assert_eq!(p.total_contribution, 0);

        let mut q = Player::new("b", 100);
        q.folded = true;
        q.reset_for_hand();
        assert!(!q.folded);
    }

    #[test]
    fn check_legality_tracks_the_bet_level() {
        let mut p = Player::new("a", 500);
        assert!(p.can_check(0));
        assert!(!p.can_check(100));
        p.commit(100);
        assert!(p.can_check(100));
        assert!(!p.can_check(0));
    }
}
