use holdem_sim::providers::{CategoryBot, DecisionProvider};
use holdem_sim::session::Session;
use holdem_sim::table::Table;

fn bots(n: usize) -> Vec<Box<dyn DecisionProvider>> {
    (0..n)
        .map(|i| Box::new(CategoryBot::seeded(i as u64)) as Box<dyn DecisionProvider>)
        .collect()
}

#[test]
fn blinds_sit_on_adjacent_seats() {
    let table = Table::with_stacks(&[50_000; 4], 50, 100);
    let mut session = Session::seeded(table, bots(4), 11).unwrap();
    session.play_hand().unwrap();
    let sb = session.table().sb_seat.unwrap();
    let bb = session.table().bb_seat.unwrap();
    assert_eq!(bb, (sb + 1) % 4);
}

#[test]
fn big_blind_becomes_small_blind_next_hand() {
    let table = Table::with_stacks(&[50_000; 4], 50, 100);
    let mut session = Session::seeded(table, bots(4), 11).unwrap();
    session.play_hand().unwrap();
    let first_bb = session.table().bb_seat.unwrap();
    session.play_hand().unwrap();
    assert_eq!(session.table().sb_seat, Some(first_bb));
    assert_eq!(session.table().bb_seat, Some((first_bb + 1) % 4));
}

#[test]
fn rotation_walks_every_seat_in_order() {
    let table = Table::with_stacks(&[100_000; 3], 50, 100);
    let mut session = Session::seeded(table, bots(3), 2).unwrap();
    session.play_hand().unwrap();
    let start = session.table().bb_seat.unwrap();
    for i in 1..=3u64 {
        session.play_hand().unwrap();
        let expected = (start + i as usize) % 3;
        assert_eq!(session.table().bb_seat, Some(expected));
    }
    assert_eq!(session.hands_played(), 4);
}
