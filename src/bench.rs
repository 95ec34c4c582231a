//! Wall-clock timing of repeated hash calls.

use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::Hash;

const GIB: f64 = (1u64 << 30) as f64;

/// One timing sample: `n` calls over `bytes` bytes took `elapsed`.
///
/// Rates are derived on demand, nothing beyond the raw sample is stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkResult {
    pub elapsed: Duration,
    pub n: usize,
    pub bytes: usize,
}

impl BenchmarkResult {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn millis(&self) -> f64 {
        self.seconds() * 1000.0
    }

    pub fn per_call(&self) -> f64 {
        self.seconds() / self.n as f64
    }

    /// Whole hashes per second, truncated. Saturates when the sample was
    /// too short to register on the clock.
    pub fn hash_rate(&self) -> u64 {
        (1.0 / self.per_call()) as u64
    }

    pub fn mega_hashes(&self) -> f64 {
        self.hash_rate() as f64 / 1_000_000.0
    }

    pub fn gib_per_second(&self) -> f64 {
        self.hash_rate() as f64 * self.bytes as f64 / GIB
    }
}

/// Calls `hash(data)` exactly `n` times back to back and times the loop.
///
/// No warm-up and a single sample. Each result goes through
/// [`black_box`] so the calls cannot be elided.
pub fn benchmark<F>(hash: F, data: &[u8], n: usize) -> BenchmarkResult
where
    F: Fn(&[u8]) -> Hash,
{
    let start = Instant::now();
    for _ in 0..n {
        black_box(hash(black_box(data)));
    }
    let elapsed = start.elapsed();
    BenchmarkResult {
        elapsed,
        n,
        bytes: data.len(),
    }
}
