//! Microbenchmark: Sparse Matrix Row Operations
//!
//! Measures the hot paths a reduction pipeline exercises when building and
//! reorganizing matrices.
//!
//! Operations tested:
//! - Entry appends across buffer growth (1M entries)
//! - Dense row ingestion modulo a prime, plain and normalized
//! - Row copy with normalization
//! - Pivot sort of a shuffled matrix

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use modp_sparse::*;
use std::time::Duration;

const MODULUS: Scalar = 32003;
const ITER_APPEND: u32 = 1_000_000;
const COLS: ColIndex = 2_000;
const ROWS: usize = 500;

/// Deterministic dense row with roughly one non-zero in eight columns
fn dense_row(seed: u64) -> Vec<u64> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..COLS)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            if (state >> 61) == 0 {
                state >> 16
            } else {
                0
            }
        })
        .collect()
}

fn sample_matrix() -> SparseMatrix {
    let mut matrix = SparseMatrix::new(COLS);
    for seed in 0..ROWS as u64 {
        matrix.append_row_with_modulus(&dense_row(seed), MODULUS);
    }
    matrix
}

/// Benchmark appending entries one at a time
fn bench_append_entries(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_entry");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("append_1M_growing", |bench| {
        bench.iter(|| {
            let mut matrix = SparseMatrix::new(COLS);
            for i in 0..ITER_APPEND {
                matrix.append_entry(i % COLS, black_box(1));
                if i % COLS == COLS - 1 {
                    matrix.row_done();
                }
            }
            black_box(matrix)
        });
    });

    group.bench_function("append_1M_reserved", |bench| {
        bench.iter(|| {
            let mut matrix = SparseMatrix::new(COLS);
            matrix.reserve_entries(ITER_APPEND as usize);
            for i in 0..ITER_APPEND {
                matrix.append_entry(i % COLS, black_box(1));
                if i % COLS == COLS - 1 {
                    matrix.row_done();
                }
            }
            black_box(matrix)
        });
    });

    group.finish();
}

/// Benchmark dense row ingestion
fn bench_dense_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense_rows");
    let rows: Vec<Vec<u64>> = (0..ROWS as u64).map(dense_row).collect();

    group.bench_with_input(BenchmarkId::new("with_modulus", ROWS), &rows, |bench, rows| {
        bench.iter(|| {
            let mut matrix = SparseMatrix::new(COLS);
            for row in rows {
                matrix.append_row_with_modulus(row, MODULUS);
            }
            black_box(matrix)
        });
    });

    group.bench_with_input(BenchmarkId::new("normalized", ROWS), &rows, |bench, rows| {
        bench.iter(|| {
            let mut matrix = SparseMatrix::new(COLS);
            for row in rows {
                matrix.append_row_with_modulus_normalized(row, MODULUS);
            }
            black_box(matrix)
        });
    });

    group.finish();
}

/// Benchmark copying rows with normalization
fn bench_normalize(c: &mut Criterion) {
    let source = sample_matrix();

    c.bench_function("append_row_and_normalize", |bench| {
        bench.iter(|| {
            let mut matrix = SparseMatrix::new(COLS);
            for row in 0..source.row_count() {
                matrix.append_row_and_normalize(&source, row, MODULUS);
            }
            black_box(matrix)
        });
    });
}

/// Benchmark pivot sorting
fn bench_sort(c: &mut Criterion) {
    let source = sample_matrix();

    c.bench_function("sort_rows_by_increasing_pivots", |bench| {
        bench.iter(|| {
            let mut matrix = source.clone();
            matrix.sort_rows_by_increasing_pivots();
            black_box(matrix)
        });
    });
}

criterion_group!(
    benches,
    bench_append_entries,
    bench_dense_rows,
    bench_normalize,
    bench_sort
);
criterion_main!(benches);
