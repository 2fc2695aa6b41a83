use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sparsemat::{add, multiply, Matrix};

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize, nnz: usize) -> Matrix {
    let entries: Vec<(usize, usize, i64)> = (0..nnz)
        .map(|_| {
            (
                rng.gen_range(0..rows),
                rng.gen_range(0..cols),
                rng.gen_range(-100..=100),
            )
        })
        .collect();
    Matrix::from_entries(rows, cols, entries).expect("entries are in bounds")
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("sparse_arithmetic");

    for &(dim, nnz) in &[(1_000, 5_000), (10_000, 50_000), (100_000, 200_000)] {
        let a = random_matrix(&mut rng, dim, dim, nnz);
        let b = random_matrix(&mut rng, dim, dim, nnz);

        group.bench_function(BenchmarkId::new("multiply", dim), |bench| {
            bench.iter(|| multiply(black_box(&a), black_box(&b)))
        });
        group.bench_function(BenchmarkId::new("add", dim), |bench| {
            bench.iter(|| add(black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_arithmetic);
criterion_main!(benches);
