use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lights_out_core::{Board, BoardGenerator, GameConfig, RandomBoardGenerator};
use std::hint::black_box;

const SIZES: [u8; 3] = [5, 32, 255];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for size in SIZES {
        let config = GameConfig::new((size, size), 0.25).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &config, |b, &config| {
            b.iter(|| RandomBoardGenerator::new(black_box(7)).generate(config))
        });
    }
    group.finish();
}

fn bench_flip_around(c: &mut Criterion) {
    let mut group = c.benchmark_group("flip_around");
    for size in SIZES {
        let board = Board::filled((size, size), true).unwrap();
        let center = (size / 2, size / 2);
        group.bench_with_input(BenchmarkId::from_parameter(size), &board, |b, board| {
            b.iter(|| board.flip_around(black_box(center)).unwrap())
        });
    }
    group.finish();
}

fn bench_is_solved(c: &mut Criterion) {
    let board = Board::unlit((255, 255)).unwrap();
    c.bench_function("is_solved/255", |b| b.iter(|| black_box(&board).is_solved()));
}

criterion_group!(benches, bench_generate, bench_flip_around, bench_is_solved);
criterion_main!(benches);
