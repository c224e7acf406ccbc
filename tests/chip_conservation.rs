use holdem_sim::providers::{CategoryBot, DecisionProvider};
use holdem_sim::session::Session;
use holdem_sim::table::Table;

fn bots(n: usize) -> Vec<Box<dyn DecisionProvider>> {
    (0..n)
        .map(|i| Box::new(CategoryBot::seeded(i as u64 * 31)) as Box<dyn DecisionProvider>)
        .collect()
}

fn total_chips(session: &Session) -> u64 {
    session.table().players.iter().map(|p| p.balance).sum()
}

// Chips leave the table only through integer division at split pots; every
// other movement is between seats.
#[test]
fn chips_only_move_between_players() {
    let table = Table::with_stacks(&[5_000, 8_000, 12_000, 20_000], 50, 100);
    let mut session = Session::seeded(table, bots(4), 23).unwrap();
    let mut bank = total_chips(&session);
    for _ in 0..15 {
        if session.table().funded_count() < 2 {
            break;
        }
        let summary = session.play_hand().unwrap();
        let paid: u64 = summary.payouts.iter().map(|p| p.amount).sum();
        assert!(paid <= summary.pot, "payouts may never exceed the pot");
        bank -= summary.pot - paid;
        assert_eq!(total_chips(&session), bank);
    }
    assert!(session.hands_played() >= 1);
}

#[test]
fn the_ledger_balances_during_a_hand() {
    let table = Table::with_stacks(&[5_000, 5_000, 5_000], 50, 100);
    let mut session = Session::seeded(table, bots(3), 9).unwrap();
    session.new_hand().unwrap();
    let table = session.table();
    let staked: u64 = table.players.iter().map(|p| p.total_contribution).sum();
    assert_eq!(table.pot, staked);
    for p in &table.players {
        assert_eq!(p.balance + p.total_contribution, 5_000);
    }
}
