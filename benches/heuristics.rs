use criterion::{criterion_group, criterion_main, Criterion};
use eight_puzzle::{hamming, manhattan, solve, Board};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

fn corpus() -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(1337);
    (0..16)
        .map(|_| {
            let mut board = Board::GOAL;
            board.shuffle(30, &mut rng);
            board
        })
        .collect()
}

fn bench_estimate(c: &mut Criterion) {
    let boards = corpus();
    c.bench_function("heuristic/manhattan", |bch| {
        bch.iter(|| boards.iter().map(|b| manhattan(black_box(b))).sum::<u32>())
    });
    c.bench_function("heuristic/hamming", |bch| {
        bch.iter(|| boards.iter().map(|b| hamming(black_box(b))).sum::<u32>())
    });
}

fn bench_solve(c: &mut Criterion) {
    let boards = corpus();
    let mut group = c.benchmark_group("solve");
    group.sample_size(10);
    group.bench_function("manhattan", |bch| {
        bch.iter(|| {
            boards
                .iter()
                .map(|b| solve(black_box(b), &manhattan).expansions)
                .sum::<usize>()
        })
    });
    group.bench_function("hamming", |bch| {
        bch.iter(|| {
            boards
                .iter()
                .map(|b| solve(black_box(b), &hamming).expansions)
                .sum::<usize>()
        })
    });
    group.finish();
}

criterion_group!(heuristics, bench_estimate, bench_solve);
criterion_main!(heuristics);
