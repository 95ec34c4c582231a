//! Plain-text rendering of timing and collision results.

use std::fmt;
use std::io::{self, Write};

use crate::{BenchmarkResult, Collisions, HashKind};

/// One block per function, one line per repetition count.
pub fn write_benchmarks<W: Write>(
    w: &mut W,
    results: &[(HashKind, Vec<BenchmarkResult>)],
) -> io::Result<()> {
    for (kind, samples) in results {
        writeln!(w, "{kind}:")?;
        for sample in samples {
            writeln!(
                w,
                "   {:.7} ms (N = {}, {} H/s, {} MH/s, {} GiB/s)",
                sample.millis(),
                sample.n,
                sample.hash_rate(),
                Sig3(sample.mega_hashes()),
                Sig3(sample.gib_per_second()),
            )?;
        }
    }
    Ok(())
}

pub fn write_collisions<W: Write>(
    w: &mut W,
    results: &[(HashKind, Collisions)],
    map_len: usize,
) -> io::Result<()> {
    for (kind, collisions) in results {
        writeln!(w, "{kind}:")?;
        writeln!(
            w,
            "   collisions: {} ({}%, insertions: {}, map size: {})",
            collisions.count,
            Sig3(collisions.percent_of(map_len)),
            collisions.insertions,
            map_len,
        )?;
    }
    Ok(())
}

/// Fixed notation rounded to three significant digits. Magnitudes of 1000
/// and above keep their integer digits.
struct Sig3(f64);

impl fmt::Display for Sig3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if x == 0.0 || !x.is_finite() {
            return write!(f, "{x}");
        }
        let exp = x.abs().log10().floor() as i32;
        let precision = (2 - exp).max(0) as usize;
        write!(f, "{x:.precision$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;
    use std::time::Duration;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn benchmark_table() {
        let results = vec![
            (
                HashKind::Djb2,
                vec![
                    BenchmarkResult {
                        elapsed: Duration::from_secs(1),
                        n: 1024,
                        bytes: 1024,
                    },
                    BenchmarkResult {
                        elapsed: Duration::from_secs(1),
                        n: 1 << 21,
                        bytes: 1024,
                    },
                ],
            ),
            (
                HashKind::BasicV2Simd,
                vec![BenchmarkResult {
                    elapsed: Duration::from_millis(250),
                    n: 1 << 20,
                    bytes: 1024,
                }],
            ),
        ];
        let text = render(|out| write_benchmarks(out, &results));
        expect![[r#"
            djb2:
               1000.0000000 ms (N = 1024, 1024 H/s, 0.00102 MH/s, 0.000977 GiB/s)
               1000.0000000 ms (N = 2097152, 2097152 H/s, 2.10 MH/s, 2.00 GiB/s)
            basic_v2_simd:
               250.0000000 ms (N = 1048576, 4194304 H/s, 4.19 MH/s, 4.00 GiB/s)
        "#]]
        .assert_eq(&text);
    }

    #[test]
    fn collision_summary() {
        let results = [
            (
                HashKind::Sdbm,
                Collisions {
                    count: 221,
                    insertions: 1105,
                    exhausted: false,
                },
            ),
            (
                HashKind::Basic,
                Collisions {
                    count: 0,
                    insertions: 1105,
                    exhausted: false,
                },
            ),
        ];
        let text = render(|out| write_collisions(out, &results, 4421));
        expect![[r#"
            sdbm:
               collisions: 221 (5.00%, insertions: 1105, map size: 4421)
            basic:
               collisions: 0 (0%, insertions: 1105, map size: 4421)
        "#]]
        .assert_eq(&text);
    }

    #[test]
    fn three_significant_digits() {
        let cases = [
            (0.0, "0"),
            (0.0009765625, "0.000977"),
            (0.001024, "0.00102"),
            (2.097152, "2.10"),
            (24.99, "25.0"),
            (123.456, "123"),
            (4194.304, "4194"),
        ];
        for (x, expected) in cases {
            assert_eq!(Sig3(x).to_string(), expected, "{x}");
        }
    }
}
