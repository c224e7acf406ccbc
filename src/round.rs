use crate::player::Player;
use crate::providers::DecisionProvider;
use crate::table::Table;
use log::{debug, info, warn};
use std::time::{Duration, Instant};

/// A decision handed back by a provider. Illegal decisions are never errors:
/// the round clamps them to the nearest legal action and play continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Action {
    Fold,
    Check,
    Call,
    /// Raise the street's bet level to the given target.
    Raise(u64),
}

/// What a provider sees when asked to act.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct RoundView {
    pub seat: usize,
    pub bet_level: u64,
    /// Chips this seat must add to stay in at the current level.
    pub to_call: u64,
    /// Smallest legal raise target: one big blind above the level.
    pub min_raise_to: u64,
    pub is_preflop: bool,
    pub pot: u64,
    pub small_blind: u64,
    pub big_blind: u64,
}

/// What one seat visit produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TurnEvent {
    Folded,
    Checked,
    /// Chips actually paid; short of the level means an all-in call.
    Called(u64),
    RaisedTo { level: u64, paid: u64 },
    /// Seat visited but folded earlier this hand.
    SatOutFolded,
    /// Seat visited but already all-in.
    SatOutAllIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnRecord {
    pub seat: usize,
    pub event: TurnEvent,
}

/// Outcome of one completed street.
#[derive(Debug, Clone)]
pub struct StreetSummary {
    pub records: Vec<TurnRecord>,
    /// Bet level at the moment the street closed.
    pub closing_level: u64,
}

/// One street's betting state machine.
///
/// Turn order starts at the seat after the big blind and wraps. The street
/// ends once every seat has been visited since the last raise; folded and
/// all-in seats count as visited skips. A raise restarts the count with the
/// raiser already counted.
#[derive(Debug)]
pub struct BettingRound {
    bet_level: u64,
    is_preflop: bool,
    decision_timeout: Option<Duration>,
}

impl BettingRound {
    /// Preflop round: the blinds are already posted and the level opens at
    /// the big blind.
    pub fn preflop(big_blind: u64) -> Self {
        Self { bet_level: big_blind, is_preflop: true, decision_timeout: None }
    }

    /// Flop, turn or river round: the level opens at zero and everyone may
    /// check.
    pub fn postflop() -> Self {
        Self { bet_level: 0, is_preflop: false, decision_timeout: None }
    }

    /// Bound each provider decision; a late answer is replaced by the safe
    /// default (CHECK if legal, else FOLD).
    pub fn decision_timeout(mut self, timeout: Duration) -> Self {
        self.decision_timeout = Some(timeout);
        self
    }

    /// Run the street to completion. `providers` holds one decision provider
    /// per seat, in seat order.
    pub fn run(
        mut self,
        table: &mut Table,
        providers: &mut [Box<dyn DecisionProvider>],
    ) -> StreetSummary {
        let n = table.seats();
        debug_assert_eq!(providers.len(), n);

        let mut records = Vec::new();
        let mut seat = table.bb_seat.map_or(0, |bb| (bb + 1) % n);
        let mut acted = 0;
        while acted < n {
            acted += 1;
            let event = self.visit(table, &mut *providers[seat], seat);
            if matches!(event, TurnEvent::RaisedTo { .. }) {
                // The raiser has acted; everyone else gets another visit.
                acted = 1;
            }
            records.push(TurnRecord { seat, event });
            seat = (seat + 1) % n;
        }
        table.end_street();
        StreetSummary { records, closing_level: self.bet_level }
    }

    fn visit(
        &mut self,
        table: &mut Table,
        provider: &mut dyn DecisionProvider,
        seat: usize,
    ) -> TurnEvent {
        if table.players[seat].folded {
            debug!("{} sits out (folded)", table.players[seat].name);
            return TurnEvent::SatOutFolded;
        }
        if table.players[seat].is_all_in() {
            debug!("{} sits out (all-in)", table.players[seat].name);
            return TurnEvent::SatOutAllIn;
        }

        let view = RoundView {
            seat,
            bet_level: self.bet_level,
            to_call: self.bet_level.saturating_sub(table.players[seat].round_contribution),
            min_raise_to: self.bet_level + table.big_blind,
            is_preflop: self.is_preflop,
            pot: table.pot,
            small_blind: table.small_blind,
            big_blind: table.big_blind,
        };
        let requested = self.request(provider, &table.players[seat], &view);
        let action = self.legalize(requested, &table.players[seat], table.big_blind);
        self.apply(table, seat, action)
    }

    fn request(
        &self,
        provider: &mut dyn DecisionProvider,
        player: &Player,
        view: &RoundView,
    ) -> Action {
        let Some(limit) = self.decision_timeout else {
            return provider.decide(player, view);
        };
        let started = Instant::now();
        let action = provider.decide(player, view);
        if started.elapsed() > limit {
            let fallback =
                if player.can_check(self.bet_level) { Action::Check } else { Action::Fold };
            warn!(
                "{} exceeded the {}ms decision window, applying {fallback:?}",
                player.name,
                limit.as_millis()
            );
            fallback
        } else {
            action
        }
    }

    /// Reduce a requested action to a legal one. An illegal CHECK becomes a
    /// CALL; a RAISE by a seat that cannot even cover the level becomes an
    /// all-in CALL; any other RAISE target is clamped into the legal band.
    fn legalize(&self, requested: Action, player: &Player, big_blind: u64) -> Action {
        match requested {
            Action::Fold => Action::Fold,
            Action::Check if player.can_check(self.bet_level) => Action::Check,
            Action::Check => {
                debug!("{} cannot check at level {}, calling instead", player.name, self.bet_level);
                Action::Call
            }
            Action::Call => Action::Call,
            Action::Raise(_) if player.balance < self.bet_level => {
                debug!("{} cannot cover a raise, calling all-in instead", player.name);
                Action::Call
            }
            Action::Raise(target) => {
                let reachable = player.round_contribution + player.balance;
                let clamped = target.max(self.bet_level + big_blind).min(reachable);
                if clamped <= self.bet_level {
                    Action::Call
                } else {
                    if clamped != target {
                        debug!("{} raise target {target} clamped to {clamped}", player.name);
                    }
                    Action::Raise(clamped)
                }
            }
        }
    }

    fn apply(&mut self, table: &mut Table, seat: usize, action: Action) -> TurnEvent {
        let player = &mut table.players[seat];
        match action {
            Action::Fold => {
                player.folded = true;
                info!("{} folds", player.name);
                TurnEvent::Folded
            }
            Action::Check => {
                info!("{} checks", player.name);
                TurnEvent::Checked
            }
            Action::Call => {
                let owed = self.bet_level.saturating_sub(player.round_contribution);
                let paid = player.commit(owed);
                table.pot += paid;
                if paid < owed {
                    info!("{} calls {paid} and is all-in", table.players[seat].name);
                } else {
                    info!("{} calls {paid}", table.players[seat].name);
                }
                TurnEvent::Called(paid)
            }
            Action::Raise(target) => {
                // legalize guarantees the target exceeds the level and stays
                // within round_contribution + balance.
                let owed = target - player.round_contribution;
                let paid = player.commit(owed);
                debug_assert_eq!(paid, owed);
                table.pot += paid;
                self.bet_level = target;
                if table.players[seat].is_all_in() {
                    info!("{} raises to {target} and is all-in", table.players[seat].name);
                } else {
                    info!("{} raises to {target}", table.players[seat].name);
                }
                TurnEvent::RaisedTo { level: target, paid }
            }
        }
    }
}
