//! The full measurement run: self-check, timing, collisions, reports.

use std::io::Write;

use crate::error::Result;
use crate::report::{write_benchmarks, write_collisions};
use crate::sample::{RandomBuffer, SAMPLE};
use crate::{benchmark, calculate_collisions, BenchmarkResult, CollisionMap, Collisions, HashKind, Options};

/// Aborts the process unless every vector variant matches its scalar twin
/// on `data`.
pub fn cross_check(data: &[u8]) {
    for kind in HashKind::ALL {
        if let Some(scalar) = kind.scalar_counterpart() {
            log::debug!("cross-checking {kind} against {scalar}");
            crate::check!(kind.hash(data) == scalar.hash(data));
        }
    }
}

/// Times every function at every repetition count in `options`.
pub fn run_benchmarks(options: &Options, data: &[u8]) -> Vec<(HashKind, Vec<BenchmarkResult>)> {
    HashKind::ALL
        .into_iter()
        .map(|kind| {
            let samples = options
                .repetitions
                .iter()
                .map(|&n| {
                    let result = benchmark(kind.function(), data, n);
                    log::debug!("{kind}: {n} calls in {:?}", result.elapsed);
                    result
                })
                .collect();
            (kind, samples)
        })
        .collect()
}

/// Counts collisions for every function over one freshly drawn random
/// buffer, reusing a single table reset between functions.
pub fn run_collisions(options: &Options) -> Result<Vec<(HashKind, Collisions)>> {
    let data = RandomBuffer::generate(options.random_words);
    let mut map = CollisionMap::new(options.collision_map_size)?;
    let results = HashKind::ALL
        .into_iter()
        .map(|kind| {
            map.reset();
            let collisions =
                calculate_collisions(kind.function(), data.as_bytes(), options.insertions, &mut map);
            log::debug!("{kind}: {collisions:?}");
            (kind, collisions)
        })
        .collect();
    Ok(results)
}

/// Runs everything in order and writes both reports to `out`.
pub fn run<W: Write>(options: &Options, out: &mut W) -> Result<()> {
    cross_check(SAMPLE.as_bytes());
    log::debug!("vector backend: {}", crate::simd::backend());

    if options.run_benchmarks {
        let results = run_benchmarks(options, SAMPLE.as_bytes());
        write_benchmarks(out, &results)?;
    }

    let results = run_collisions(options)?;
    write_collisions(out, &results, options.collision_map_size)?;
    Ok(())
}
