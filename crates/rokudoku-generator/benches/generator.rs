//! Benchmarks for puzzle generation.
//!
//! Measures the complete generation process (solution filling plus
//! uniqueness-gated clue removal) over fixed seeds, so runs are
//! reproducible while still covering several cases.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rokudoku_generator::{PuzzleGenerator, PuzzleSeed, count_solutions};

const SEEDS: [&str; 3] = [
    "f02f1d8c803b20c7e279c0f8081b3cb911af2eaba9da2bc3ccc5eac9e94b6468",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generate(c: &mut Criterion) {
    let generator = PuzzleGenerator::new();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generate", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_count_solutions(c: &mut Criterion) {
    let generator = PuzzleGenerator::new();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        let problem = generator.generate_with_seed(seed).problem;
        c.bench_with_input(
            BenchmarkId::new("count_solutions", format!("seed_{i}")),
            &problem,
            |b, problem| {
                b.iter(|| count_solutions(hint::black_box(problem), 2));
            },
        );
    }
}

criterion_group!(benches, bench_generate, bench_count_solutions);
criterion_main!(benches);
