//! Hand orchestration: deals cards, drives the betting streets and settles
//! the pot.

use crate::deck::{Deck, DeckError};
use crate::hand::{Board, HoleCards};
use crate::pot::{self, Payout};
use crate::providers::DecisionProvider;
use crate::round::{BettingRound, StreetSummary};
use crate::table::Table;
use log::info;
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use std::fmt;
use std::time::Duration;

/// Betting phases of a hand, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub const ALL: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];

    /// Community cards revealed when this street opens.
    pub fn cards_dealt(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        };
        f.write_str(name)
    }
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum SessionError {
    #[error("need at least two funded players, got {0}")]
    NotEnoughPlayers(usize),
    #[error("one decision provider per seat: {seats} seats, {providers} providers")]
    ProviderCount { seats: usize, providers: usize },
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Everything that happened in one completed hand.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct HandSummary {
    pub hand_no: u64,
    pub board: Board,
    /// Pot size going into showdown, before payouts.
    pub pot: u64,
    pub payouts: Vec<Payout>,
    pub streets: Vec<StreetSummary>,
}

/// Single-table game loop: owns the players, their decision providers and
/// the deck, and plays hands one at a time.
pub struct Session {
    table: Table,
    providers: Vec<Box<dyn DecisionProvider>>,
    deck: Deck,
    rng: StdRng,
    hands_played: u64,
    decision_timeout: Option<Duration>,
}

impl Session {
    pub fn new(table: Table, providers: Vec<Box<dyn DecisionProvider>>) -> Result<Self, SessionError> {
        let mut seed = [0u8; 32];
        rand::rng().fill_bytes(&mut seed);
        Self::with_rng(table, providers, StdRng::from_seed(seed))
    }

    /// Deterministic variant: shuffles and blind placement replay exactly
    /// for a given seed (provider randomness is the providers' own).
    pub fn seeded(
        table: Table,
        providers: Vec<Box<dyn DecisionProvider>>,
        seed: u64,
    ) -> Result<Self, SessionError> {
        Self::with_rng(table, providers, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        table: Table,
        providers: Vec<Box<dyn DecisionProvider>>,
        rng: StdRng,
    ) -> Result<Self, SessionError> {
        if providers.len() != table.players.len() {
            return Err(SessionError::ProviderCount {
                seats: table.players.len(),
                providers: providers.len(),
            });
        }
        let funded = table.funded_count();
        if funded < 2 {
            return Err(SessionError::NotEnoughPlayers(funded));
        }
        Ok(Self {
            table,
            providers,
            deck: Deck::standard(),
            rng,
            hands_played: 0,
            decision_timeout: None,
        })
    }

    /// Caps how long any single provider may take to decide; late answers
    /// are replaced with a check, or a fold when checking is illegal.
    pub fn decision_timeout(mut self, timeout: Duration) -> Self {
        self.decision_timeout = Some(timeout);
        self
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn hands_played(&self) -> u64 {
        self.hands_played
    }

    /// Starts a fresh hand: resets the ledger, shuffles a new deck, rotates
    /// and posts the blinds and deals two hole cards to every funded seat.
    pub fn new_hand(&mut self) -> Result<(), SessionError> {
        let funded = self.table.funded_count();
        if funded < 2 {
            return Err(SessionError::NotEnoughPlayers(funded));
        }
        self.hands_played += 1;
        info!("hand {} begins with {funded} players", self.hands_played);

        for p in &mut self.table.players {
            p.reset_for_hand();
        }
        self.table.board.clear();
        self.table.pot = 0;

        self.deck = Deck::standard();
        let seed: u64 = self.rng.random();
        self.deck.shuffle_seeded(seed);

        for seat in 0..self.table.players.len() {
            if !self.table.players[seat].is_active() {
                continue;
            }
            let dealt = self.deck.deal(2)?;
            if let [a, b] = dealt[..] {
                if let Ok(hole) = HoleCards::try_new(a, b) {
                    self.table.players[seat].hole = Some(hole);
                }
            }
        }

        self.table.rotate_blinds(&mut self.rng);
        self.table.post_blinds();
        self.table.refresh_categories();
        Ok(())
    }

    /// Reveals the street's community cards and re-evaluates every live hand.
    /// Preflop reveals nothing.
    pub fn deal_street(&mut self, street: Street) -> Result<(), SessionError> {
        let n = street.cards_dealt();
        if n == 0 {
            return Ok(());
        }
        let cards = self.deck.deal(n)?;
        self.table.board.extend(cards);
        info!("{street}: {}", self.table.board);
        self.table.refresh_categories();
        Ok(())
    }

    /// Runs one full betting street to completion.
    pub fn run_betting_round(&mut self, street: Street) -> StreetSummary {
        let round = if street == Street::Preflop {
            BettingRound::preflop(self.table.big_blind)
        } else {
            BettingRound::postflop()
        };
        let round = match self.decision_timeout {
            Some(timeout) => round.decision_timeout(timeout),
            None => round,
        };
        round.run(&mut self.table, &mut self.providers)
    }

    /// Settles the pot and credits the winners.
    pub fn resolve_pot(&mut self) -> Vec<Payout> {
        for p in self.table.players.iter().filter(|p| p.is_active()) {
            if let Some(hole) = &p.hole {
                info!("{} shows {} ({})", p.name, hole, p.category);
            }
        }
        pot::resolve(&mut self.table)
    }

    /// Plays one complete hand through all four streets and showdown.
    pub fn play_hand(&mut self) -> Result<HandSummary, SessionError> {
        self.new_hand()?;
        let mut streets = Vec::with_capacity(Street::ALL.len());
        for street in Street::ALL {
            self.deal_street(street)?;
            streets.push(self.run_betting_round(street));
            info!("pot is {}", self.table.pot);
        }
        let pot = self.table.pot;
        let payouts = self.resolve_pot();
        Ok(HandSummary {
            hand_no: self.hands_played,
            board: self.table.board.clone(),
            pot,
            payouts,
            streets,
        })
    }
}
