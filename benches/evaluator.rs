use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use holdem_sim::cards::parse_cards;
use holdem_sim::evaluator::evaluate_cards;

fn bench_five_cards(c: &mut Criterion) {
    let high_card = parse_cards("Ah Kd 7s 5c 2d").expect("valid cards");
    let royal = parse_cards("As Ks Qs Js 10s").expect("valid cards");

    let mut g = c.benchmark_group("evaluate_five");
    g.bench_with_input(BenchmarkId::new("high_card", "A,K,7,5,2"), &high_card, |b, input| {
        b.iter(|| evaluate_cards(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("royal_flush", "broadway"), &royal, |b, input| {
        b.iter(|| evaluate_cards(black_box(input)))
    });
    g.finish();
}

fn bench_seven_cards(c: &mut Criterion) {
    let seven = parse_cards("As Ah Ks Qs Js 10s 9s").expect("valid cards");
    c.bench_function("evaluate_seven", |b| b.iter(|| evaluate_cards(black_box(&seven))));
}

criterion_group!(benches, bench_five_cards, bench_seven_cards);
criterion_main!(benches);
