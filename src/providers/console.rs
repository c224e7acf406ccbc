use super::DecisionProvider;
use crate::player::Player;
use crate::round::{Action, RoundView};
use std::io::{self, BufRead, StdinLock, Write};

/// Interactive seat reading decisions from a line-oriented input.
///
/// Accepts `f`/`fold`, `k`/`check`, `c`/`call` and `r [to]`/`raise [to]`;
/// a raise without an amount targets the table minimum. Unrecognized lines
/// re-prompt, and a closed input falls back to check when that is legal and
/// fold otherwise.
pub struct ConsoleProvider<R> {
    input: R,
}

impl ConsoleProvider<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self { input: io::stdin().lock() }
    }
}

impl<R: BufRead> ConsoleProvider<R> {
    pub fn with_input(input: R) -> Self {
        Self { input }
    }

    fn fallback(player: &Player, view: &RoundView) -> Action {
        if player.can_check(view.bet_level) {
            Action::Check
        } else {
            Action::Fold
        }
    }
}

fn parse_action(line: &str, view: &RoundView) -> Option<Action> {
    let mut words = line.split_whitespace();
    let verb = words.next()?.to_ascii_lowercase();
    match verb.as_str() {
        "f" | "fold" => Some(Action::Fold),
        "k" | "check" => Some(Action::Check),
        "c" | "call" => Some(Action::Call),
        "r" | "raise" => match words.next() {
            Some(raw) => raw.parse().ok().map(Action::Raise),
            None => Some(Action::Raise(view.min_raise_to)),
        },
        _ => None,
    }
}

impl<R: BufRead> DecisionProvider for ConsoleProvider<R> {
    fn decide(&mut self, player: &Player, view: &RoundView) -> Action {
        if let Some(hole) = &player.hole {
            println!("{} holds {} ({})", player.name, hole, player.category);
        }
        if view.to_call > 0 {
            println!(
                "{}: {} to call at level {} (balance {}, pot {})",
                player.name, view.to_call, view.bet_level, player.balance, view.pot
            );
        } else {
            println!(
                "{}: check or raise (balance {}, pot {})",
                player.name, player.balance, view.pot
            );
        }
        loop {
            print!("fold/check/call/raise <to> (f/k/c/r) > ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return Self::fallback(player, view),
                Ok(_) => {}
            }
            if let Some(action) = parse_action(&line, view) {
                return action;
            }
            println!("unrecognized input: {}", line.trim());
        }
    }
}
