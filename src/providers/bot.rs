use super::DecisionProvider;
use crate::player::Player;
use crate::round::{Action, RoundView};
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

// Decision score = hand-category ordinal (0..=9) + a uniform 0..=12 roll.
// The bands below partition the score space, so every score maps to exactly
// one action.
const CALL_FROM: u32 = 5;
const RAISE_FROM: u32 = 8;
const OPEN_RAISE_FROM: u32 = 13;

/// A scripted opponent keyed off hand-category strength.
///
/// Facing a bet it folds weak scores, calls middling ones and raises strong
/// ones; with a free check it only ever checks or raises, never folds. Raise
/// targets sit one to five big blinds above the current level and are left to
/// the betting round to clamp.
pub struct CategoryBot {
    rng: StdRng,
}

impl CategoryBot {
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill_bytes(&mut seed);
        Self { rng: StdRng::from_seed(seed) }
    }

    /// Deterministic variant for reproducible tables.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    fn raise_target(&mut self, view: &RoundView) -> u64 {
        view.bet_level + view.big_blind * self.rng.random_range(1..=5)
    }
}

impl Default for CategoryBot {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionProvider for CategoryBot {
    fn decide(&mut self, player: &Player, view: &RoundView) -> Action {
        let score = player.category.ordinal() as u32 + self.rng.random_range(0..=12);
        if view.to_call == 0 {
            if score >= OPEN_RAISE_FROM {
                Action::Raise(self.raise_target(view))
            } else {
                Action::Check
            }
        } else if score < CALL_FROM {
            Action::Fold
        } else if score < RAISE_FROM {
            Action::Call
        } else {
            Action::Raise(self.raise_target(view))
        }
    }
}
