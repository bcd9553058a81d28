//! Benchmarks for board stepping and pattern detection.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use knights_automata::Board;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn board(size: usize) -> Board {
    let mut board = Board::new(size).unwrap();
    board.init(&mut StdRng::seed_from_u64(12345)).unwrap();
    board
}

fn bench_init(c: &mut Criterion) {
    c.bench_function("init_8x8", |b| b.iter(|| board(black_box(8))));

    c.bench_function("init_32x32", |b| b.iter(|| board(black_box(32))));
}

fn bench_update(c: &mut Criterion) {
    let mut small = board(8);
    c.bench_function("update_8x8", |b| b.iter(|| small.update()));

    let mut large = board(32);
    c.bench_function("update_32x32", |b| b.iter(|| large.update()));
}

fn bench_patterns(c: &mut Criterion) {
    let mut warm = board(8);
    for _ in 0..40 {
        warm.update();
    }
    c.bench_function("pattern_offsets_8x8", |b| {
        b.iter(|| black_box(&warm).pattern_offsets())
    });

    c.bench_function("is_stable_8x8", |b| b.iter(|| black_box(&warm).is_stable()));
}

criterion_group!(benches, bench_init, bench_update, bench_patterns);
criterion_main!(benches);
