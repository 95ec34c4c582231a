//! Collision counting over a fixed-size bucket table.
//!
//! The analyzer hashes consecutive, non-overlapping chunks of one buffer.
//! Chunks start one word long; each time the buffer runs out the chunk
//! grows by a word and consumption restarts from the front. This mixes key
//! sizes without needing more than one source buffer.

use crate::error::{Error, Result};
use crate::{Hash, WORD};

/// One counter per bucket; a hash lands in bucket `hash % len`.
///
/// The counters always sum to the number of insertions since the last
/// [`reset`](CollisionMap::reset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionMap {
    buckets: Vec<u64>,
}

impl CollisionMap {
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::EmptyCollisionMap);
        }
        Ok(Self {
            buckets: vec![0; len],
        })
    }

    #[inline]
    pub fn insert(&mut self, hash: Hash) {
        let index = (hash % self.buckets.len() as Hash) as usize;
        self.buckets[index] += 1;
    }

    pub fn reset(&mut self) {
        self.buckets.fill(0);
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Sum of all counters.
    pub fn total(&self) -> u64 {
        self.buckets.iter().sum()
    }

    /// Buckets hit more than once.
    pub fn collisions(&self) -> usize {
        self.buckets.iter().filter(|&&count| count > 1).count()
    }

    pub fn buckets(&self) -> &[u64] {
        &self.buckets
    }
}

/// Outcome of one analyzer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collisions {
    /// Buckets with more than one hit.
    pub count: usize,
    /// Hashes actually inserted.
    pub insertions: usize,
    /// True when the buffer ran out of chunk sizes before `n` insertions.
    pub exhausted: bool,
}

impl Collisions {
    /// Colliding buckets as a percentage of the table.
    pub fn percent_of(&self, map_len: usize) -> f64 {
        100.0 * self.count as f64 / map_len as f64
    }
}

/// Inserts up to `n` hashes of growing chunks of `data` into `map` and
/// counts the buckets that collided.
///
/// If the chunk length reaches `data.len()` first, the run stops early, an
/// error is logged and the partial result is returned with `exhausted` set.
/// The map is not reset; callers that reuse one map reset it between runs.
pub fn calculate_collisions<F>(hash: F, data: &[u8], n: usize, map: &mut CollisionMap) -> Collisions
where
    F: Fn(&[u8]) -> Hash,
{
    let mut chunk = WORD;
    let mut offset = 0;
    let mut insertions = 0;
    let mut exhausted = false;

    while insertions < n {
        if offset + chunk > data.len() {
            offset = 0;
            chunk += WORD;
            if chunk >= data.len() {
                log::error!("failed to calculate collisions, no data left to hash");
                exhausted = true;
                break;
            }
        }
        map.insert(hash(&data[offset..offset + chunk]));
        insertions += 1;
        offset += chunk;
    }

    Collisions {
        count: map.collisions(),
        insertions,
        exhausted,
    }
}
