//! Input buffers: the fixed sample used for timing and the random words
//! used for collision analysis.

use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::WORD;

pub const SAMPLE_WORDS: usize = 128;
pub const SAMPLE_BYTES: usize = SAMPLE_WORDS * WORD;

/// Largest value a random word takes, the range of C `rand()`.
pub const RAND_MAX: u64 = i32::MAX as u64;

#[rustfmt::skip]
const WORDS: [u64; SAMPLE_WORDS] = [
    22209, 35084, 14403, 53369, 8182,  26351, 10703, 7852,  36446, 32467, 23145, 29189, 29799, 3675,  59335, 39577,
    18128, 8246,  25003, 22155, 56203, 42543, 8796,  61916, 2371,  46641, 60998, 30057, 51286, 61374, 20820, 42799,
    39485, 63172, 34580, 65450, 14329, 4679,  62075, 5887,  42873, 656,   44182, 39326, 47225, 3430,  28608, 34128,
    15614, 54189, 38856, 63997, 23014, 31536, 53567, 19804, 41280, 24540, 24153, 4392,  46305, 47027, 24903, 24626,
    9288,  20034, 30896, 64667, 4424,  57398, 37279, 6659,  40571, 9711,  8049,  49257, 7296,  49740, 8717,  53992,
    12363, 39617, 53784, 55887, 5674,  7590,  16895, 33775, 45129, 56816, 22166, 7178,  31735, 48070, 25555, 61579,
    3624,  8906,  23398, 35573, 17325, 5182,  32425, 57459, 46669, 64560, 56424, 29056, 15012, 46821, 17643, 48880,
    64670, 1713,  39583, 32868, 7837,  17377, 7647,  16615, 17775, 25579, 13761, 59412, 27054, 46447, 11631, 14170,
];

/// The canonical benchmark input: 128 little-endian words, 1024 bytes.
pub static SAMPLE: SampleBuffer = SampleBuffer {
    bytes: words_to_bytes(&WORDS),
};

pub struct SampleBuffer {
    bytes: [u8; SAMPLE_BYTES],
}

impl SampleBuffer {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn words(&self) -> &[u64; SAMPLE_WORDS] {
        &WORDS
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

const fn words_to_bytes(words: &[u64; SAMPLE_WORDS]) -> [u8; SAMPLE_BYTES] {
    let mut out = [0u8; SAMPLE_BYTES];
    let mut i = 0;
    while i < SAMPLE_WORDS {
        let bytes = words[i].to_le_bytes();
        let mut j = 0;
        while j < WORD {
            out[i * WORD + j] = bytes[j];
            j += 1;
        }
        i += 1;
    }
    out
}

static RNG: OnceLock<Mutex<StdRng>> = OnceLock::new();

// Seeded once from the wall clock, never reseeded.
fn process_rng() -> &'static Mutex<StdRng> {
    RNG.get_or_init(|| {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        log::debug!("seeding random buffer generator with {seed}");
        Mutex::new(StdRng::seed_from_u64(seed))
    })
}

/// Random machine words for one collision run, dropped when the run ends.
pub struct RandomBuffer {
    bytes: Vec<u8>,
}

impl RandomBuffer {
    /// Draws `words` words from the process-wide generator.
    pub fn generate(words: usize) -> Self {
        let mut rng = process_rng()
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Self::generate_with(&mut *rng, words)
    }

    /// Draws `words` words in `0..=RAND_MAX` from `rng`.
    pub fn generate_with<R: Rng>(rng: &mut R, words: usize) -> Self {
        let bytes = (0..words)
            .flat_map(|_| rng.gen_range(0..=RAND_MAX).to_le_bytes())
            .collect();
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
