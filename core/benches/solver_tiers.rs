use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use kabe_core::{BackbiteGenerator, Difficulty, PuzzleConfig, PuzzleGenerator, solve};

fn bench_solve(c: &mut Criterion) {
    let config = PuzzleConfig::new((6, 5), Difficulty::Easy);
    let puzzle = BackbiteGenerator::new(1234).generate(config);
    let walls: Vec<bool> = (0..config.wall_count())
        .map(|wall| puzzle.layout[wall])
        .collect();

    c.bench_function("solve_6x5", |b| {
        b.iter(|| solve(black_box(config.size), black_box(&walls)))
    });
}

fn bench_generate(c: &mut Criterion) {
    let config = PuzzleConfig::new((6, 5), Difficulty::Easy);
    let mut seed = 0u64;

    c.bench_function("generate_6x5", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            BackbiteGenerator::new(black_box(seed)).generate(config)
        })
    });
}

criterion_group!(tiers, bench_solve, bench_generate);
criterion_main!(tiers);
