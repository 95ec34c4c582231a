/// Run constants for the harness. There is no command line; the binary
/// always runs with [`Options::default`].
#[derive(Debug, Clone)]
pub struct Options {
    /// Calls per timing sample, one sample per entry.
    pub repetitions: Vec<usize>,
    /// Buckets in the collision table.
    pub collision_map_size: usize,
    /// Hashes inserted into the collision table per function.
    pub insertions: usize,
    /// Words in the random buffer fed to the collision analyzer.
    pub random_words: usize,
    pub run_benchmarks: bool,
}

pub const COLLISION_MAP_SIZE: usize = 4421;

impl Default for Options {
    fn default() -> Self {
        Self {
            repetitions: vec![1_000, 10_000, 100_000, 1_000_000],
            collision_map_size: COLLISION_MAP_SIZE,
            insertions: COLLISION_MAP_SIZE / 4,
            random_words: 1024,
            run_benchmarks: true,
        }
    }
}
