//! holdem-sim: single-table Texas Hold'em simulator
//!
//! Goals:
//! - Category-level hand evaluation over hole plus community cards
//! - A per-street betting state machine that clamps illegal actions
//! - Tiered side-pot settlement that conserves chips under all-ins
//!
//! ## Quick start: play a scripted hand
//! ```
//! use holdem_sim::providers::{CategoryBot, DecisionProvider};
//! use holdem_sim::session::Session;
//! use holdem_sim::table::Table;
//!
//! let table = Table::with_stacks(&[5_000, 5_000, 5_000], 50, 100);
//! let bots: Vec<Box<dyn DecisionProvider>> = (0..3)
//!     .map(|i| Box::new(CategoryBot::seeded(i)) as Box<dyn DecisionProvider>)
//!     .collect();
//! let mut session = Session::seeded(table, bots, 7).unwrap();
//!
//! let summary = session.play_hand().unwrap();
//! let paid: u64 = summary.payouts.iter().map(|p| p.amount).sum();
//! assert!(paid <= summary.pot);
//! ```
//!
//! ## CLI
//! Run a full table from the command line with:
//! ```sh
//! cargo run --bin holdem-sim -- --hands 10
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod player;
pub mod pot;
pub mod providers;
pub mod round;
pub mod session;
pub mod table;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
