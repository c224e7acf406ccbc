use clap::Parser;
use holdem_sim::player::Player;
use holdem_sim::providers::{CategoryBot, ConsoleProvider, DecisionProvider};
use holdem_sim::session::{Session, SessionError};
use holdem_sim::table::Table;
use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::process;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(version, about = "Single-table Texas Hold'em simulator")]
struct Cli {
    /// Number of seats at the table.
    #[clap(long, short, default_value_t = 6, value_parser = clap::value_parser!(u8).range(2..=9))]
    seats: u8,
    /// Number of hands to play.
    #[clap(long, short = 'n', default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    hands: u64,
    /// Small blind size.
    #[clap(long, default_value_t = 50, value_parser = clap::value_parser!(u64).range(1..))]
    small_blind: u64,
    /// Big blind size.
    #[clap(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    big_blind: u64,
    /// Smallest starting stack handed to a bot seat.
    #[clap(long, default_value_t = 5_000, value_parser = clap::value_parser!(u64).range(1..))]
    min_stack: u64,
    /// Largest starting stack handed to a bot seat.
    #[clap(long, default_value_t = 25_000, value_parser = clap::value_parser!(u64).range(1..))]
    max_stack: u64,
    /// Take the first seat yourself under this name, acting via stdin.
    #[clap(long)]
    nickname: Option<String>,
    /// Your starting stack when playing with --nickname.
    #[clap(long, default_value_t = 10_000, value_parser = clap::value_parser!(u64).range(1..))]
    stack: u64,
    /// Replay deals, blind placement and bot behavior deterministically.
    #[clap(long)]
    seed: Option<u64>,
    /// Replace decisions that take longer than this with a check or fold.
    #[clap(long)]
    timeout_ms: Option<u64>,
    /// Log every decision, not just the street headlines.
    #[clap(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    env_logger::builder()
        .filter_level(if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info })
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if cli.min_stack > cli.max_stack {
        error!("--min-stack must not exceed --max-stack");
        process::exit(2);
    }
    if cli.small_blind >= cli.big_blind {
        error!("--small-blind must be less than --big-blind");
        process::exit(2);
    }

    if let Err(e) = run(cli) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), SessionError> {
    let mut stack_rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            let mut seed = [0u8; 32];
            rand::rng().fill_bytes(&mut seed);
            StdRng::from_seed(seed)
        }
    };

    let seats = cli.seats as usize;
    let mut players = Vec::with_capacity(seats);
    let mut providers: Vec<Box<dyn DecisionProvider>> = Vec::with_capacity(seats);
    for seat in 0..seats {
        match (&cli.nickname, seat) {
            (Some(name), 0) => {
                players.push(Player::new(name.clone(), cli.stack));
                providers.push(Box::new(ConsoleProvider::stdin()));
            }
            _ => {
                let stack = stack_rng.random_range(cli.min_stack..=cli.max_stack);
                players.push(Player::new(format!("Player {}", seat + 1), stack));
                providers.push(match cli.seed {
                    Some(seed) => Box::new(CategoryBot::seeded(seed.wrapping_add(seat as u64))),
                    None => Box::new(CategoryBot::new()),
                });
            }
        }
    }

    let table = Table::new(players, cli.small_blind, cli.big_blind);
    let mut session = match cli.seed {
        Some(seed) => Session::seeded(table, providers, seed)?,
        None => Session::new(table, providers)?,
    };
    if let Some(ms) = cli.timeout_ms {
        session = session.decision_timeout(Duration::from_millis(ms));
    }

    for _ in 0..cli.hands {
        if session.table().funded_count() < 2 {
            info!("not enough funded players to deal another hand");
            break;
        }
        if cli.nickname.is_some() && session.table().players[0].balance == 0 {
            info!("{} is out of chips, game over", session.table().players[0].name);
            break;
        }
        session.play_hand()?;
    }

    info!("hands played: {}", session.hands_played());
    for p in &session.table().players {
        info!("{}: {} chips", p.name, p.balance);
    }
    Ok(())
}
