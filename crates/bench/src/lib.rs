use std::ops::RangeInclusive;
use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

const SMALL_SIZE_LIMIT: usize = 4_096;
const MEDIUM_SIZE_LIMIT: usize = 16_384;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks the small, medium or large runtime profile from the input length.
pub fn apply_runtime_config_for_size<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    size: usize,
) {
    if size <= SMALL_SIZE_LIMIT {
        apply_small_runtime_config(group);
    } else if size <= MEDIUM_SIZE_LIMIT {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn random_values<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range: RangeInclusive<i64>,
) -> Vec<i64> {
    (0..n).map(|_| rng.random_range(range.clone())).collect()
}

/// `q` inclusive `(left, right)` pairs with `left <= right < n`.
pub fn random_inclusive_ranges<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    q: usize,
) -> Vec<(usize, usize)> {
    debug_assert!(n > 0);
    (0..q)
        .map(|_| {
            let l = rng.random_range(0..n);
            let r = rng.random_range(l..n);
            (l, r)
        })
        .collect()
}
