//! Decision providers: pluggable seat controllers. The betting round asks the
//! provider seated at the acting seat for one [`Action`] per visit; whatever
//! comes back is clamped to a legal action by the round, so providers can be
//! simple and even wrong without breaking a hand.

use crate::player::Player;
use crate::round::{Action, RoundView};
use std::collections::VecDeque;

mod bot;
mod console;

pub use bot::CategoryBot;
pub use console::ConsoleProvider;

/// A seat controller. `player` is the acting seat's ledger entry, `view` the
/// street state as the round sees it.
pub trait DecisionProvider {
    fn decide(&mut self, player: &Player, view: &RoundView) -> Action;
}

/// Plays a fixed action queue, one entry per visit, then checks. The check
/// clamps to a call when a bet is outstanding, so an exhausted script never
/// stalls a street.
#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    queue: VecDeque<Action>,
}

impl ScriptedProvider {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { queue: actions.into() }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl DecisionProvider for ScriptedProvider {
    fn decide(&mut self, _player: &Player, _view: &RoundView) -> Action {
        self.queue.pop_front().unwrap_or(Action::Check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_provider_plays_in_order_then_checks() {
        let mut p = ScriptedProvider::new(vec![Action::Call, Action::Fold]);
        let player = Player::new("a", 100);
        let view = RoundView {
            seat: 0,
            bet_level: 0,
            to_call: 0,
            min_raise_to: 100,
            is_preflop: false,
            pot: 0,
            small_blind: 50,
            big_blind: 100,
        };
        assert_eq!(p.decide(&player, &view), Action::Call);
        assert_eq!(p.decide(&player, &view), Action::Fold);
        assert_eq!(p.decide(&player, &view), Action::Check);
        assert_eq!(p.remaining(), 0);
    }
}
