//! Simple multiplicative hash functions and the harness that measures them.
//!
//! The scalar functions live here; the vectorized twins of [`basic`] and
//! [`basic_v2`] are in [`simd`]. Every function is total: it accepts any
//! length, including zero.

pub mod bench;
pub mod check;
pub mod collisions;
pub mod error;
pub mod harness;
pub mod kind;
pub mod options;
pub mod report;
pub mod sample;
pub mod simd;

pub use bench::{benchmark, BenchmarkResult};
pub use collisions::{calculate_collisions, CollisionMap, Collisions};
pub use error::Error;
pub use kind::HashKind;
pub use options::Options;
pub use simd::{basic_simd, basic_v2_simd};

/// Output of every hash function in the set.
pub type Hash = u64;

/// Signature shared by all hash functions, the unit of dispatch.
pub type HashFn = fn(&[u8]) -> Hash;

/// Size of one machine word as consumed by the collision analyzer.
pub const WORD: usize = core::mem::size_of::<Hash>();

/// Bytes consumed per step by `basic`, `basic_v2` and their vector forms.
pub const BLOCK: usize = 16;

pub(crate) const BASIC_SEED: [u64; 2] = [7253, 5381];
pub(crate) const BASIC_V2_SEED: [u32; 4] = [5381, 7253, 3433, 6673];

/// Polynomial rolling hash, `h = h * 33 + byte` from seed 5381.
pub fn djb2(data: &[u8]) -> Hash {
    let mut result: Hash = 5381;
    for &b in data {
        result = (result << 5).wrapping_add(result).wrapping_add(b as Hash);
    }
    result
}

/// Polynomial rolling hash, `h = byte + h * 65599` from seed 0.
pub fn sdbm(data: &[u8]) -> Hash {
    let mut result: Hash = 0;
    for &b in data {
        result = (b as Hash)
            .wrapping_add(result << 6)
            .wrapping_add(result << 16)
            .wrapping_sub(result);
    }
    result
}

/// Two 64-bit accumulators fed one word each per 16-byte block.
///
/// A trailing partial block is zero-padded, so any length is accepted and
/// [`basic_simd`] agrees with this function on all of them.
pub fn basic(data: &[u8]) -> Hash {
    let mut acc = BASIC_SEED;
    let mut blocks = data.chunks_exact(BLOCK);
    for block in &mut blocks {
        basic_round(&mut acc, block);
    }
    let tail = blocks.remainder();
    if !tail.is_empty() {
        basic_round(&mut acc, &pad_block(tail));
    }
    acc[0].wrapping_add(acc[1])
}

/// Four 32-bit accumulators fed one 32-bit word each per 16-byte block.
///
/// The lanes are summed with 32-bit wrapping and the sum is sign-extended
/// to the 64-bit result.
pub fn basic_v2(data: &[u8]) -> Hash {
    let mut acc = BASIC_V2_SEED;
    let mut blocks = data.chunks_exact(BLOCK);
    for block in &mut blocks {
        basic_v2_round(&mut acc, block);
    }
    let tail = blocks.remainder();
    if !tail.is_empty() {
        basic_v2_round(&mut acc, &pad_block(tail));
    }
    fold_v2(acc)
}

#[inline(always)]
fn basic_round(acc: &mut [u64; 2], block: &[u8]) {
    for (i, a) in acc.iter_mut().enumerate() {
        let word = le_u64(&block[WORD * i..]);
        *a = a.wrapping_add((*a << 7).wrapping_add(word));
    }
}

#[inline(always)]
fn basic_v2_round(acc: &mut [u32; 4], block: &[u8]) {
    for (i, a) in acc.iter_mut().enumerate() {
        let word = le_u32(&block[4 * i..]);
        *a = a.wrapping_add((*a << 7).wrapping_add(word));
    }
}

#[inline(always)]
pub(crate) fn fold_v2(lanes: [u32; 4]) -> Hash {
    let sum = lanes
        .iter()
        .fold(0u32, |sum, &lane| sum.wrapping_add(lane));
    sum as i32 as i64 as Hash
}

#[inline(always)]
pub(crate) fn pad_block(tail: &[u8]) -> [u8; BLOCK] {
    let mut block = [0u8; BLOCK];
    block[..tail.len()].copy_from_slice(tail);
    block
}

#[inline(always)]
fn le_u64(buf: &[u8]) -> u64 {
    let mut tmp = [0u8; 8];
    tmp.copy_from_slice(&buf[..8]);
    u64::from_le_bytes(tmp)
}

#[inline(always)]
fn le_u32(buf: &[u8]) -> u32 {
    let mut tmp = [0u8; 4];
    tmp.copy_from_slice(&buf[..4]);
    u32::from_le_bytes(tmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SAMPLE;
    use proptest::prelude::*;

    #[test]
    fn sample_vectors() {
        let data = SAMPLE.as_bytes();
        assert_eq!(data.len(), 1024);
        assert_eq!(djb2(data), 0x5e10a1a2ecb77f9f);
        assert_eq!(sdbm(data), 0xfac15c5b0b0e7e68);
        assert_eq!(basic(data), 0xabcd42c70f8a8f43);
        assert_eq!(basic_simd(data), 0xabcd42c70f8a8f43);
        assert_eq!(basic_v2(data), 0xffffffffbca9f6bd);
        assert_eq!(basic_v2_simd(data), 0xffffffffbca9f6bd);
    }

    #[test]
    fn empty_input() {
        assert_eq!(djb2(&[]), 5381);
        assert_eq!(sdbm(&[]), 0);
        assert_eq!(basic(&[]), 7253 + 5381);
        assert_eq!(basic_v2(&[]), 5381 + 7253 + 3433 + 6673);
        assert_eq!(basic_simd(&[]), basic(&[]));
        assert_eq!(basic_v2_simd(&[]), basic_v2(&[]));
    }

    #[test]
    fn short_and_unaligned_inputs() {
        let msg = b"hello world!";
        assert_eq!(djb2(msg), 0xd31c3a5adf8ae102);
        assert_eq!(sdbm(msg), 0xb96bb866d6b6ac5d);
        assert_eq!(basic(msg), 0x6f77206f8de9b034);
        assert_eq!(basic_v2(msg), 0xfffffffffd74b51d);

        let ramp: Vec<u8> = (0..40).collect();
        assert_eq!(djb2(&ramp), 0x47e33ba031f6ec11);
        assert_eq!(sdbm(&ramp), 0x8f23c6a5e36be014);
        assert_eq!(basic(&ramp), 0xa61d9512d48929aa);
        assert_eq!(basic_v2(&ramp), 0xffffffff87bd9988);
    }

    #[test]
    fn tail_is_zero_padded() {
        let mut padded = b"abcdefghij".to_vec();
        padded.resize(BLOCK, 0);
        assert_eq!(basic(b"abcdefghij"), basic(&padded));
        assert_eq!(basic_v2(b"abcdefghij"), basic_v2(&padded));
    }

    proptest! {
        #[test]
        fn deterministic(data in proptest::collection::vec(any::<u8>(), 0..=512)) {
            for kind in HashKind::ALL {
                prop_assert_eq!(kind.hash(&data), kind.hash(&data));
            }
        }

        #[test]
        fn djb2_is_polynomial(data in proptest::collection::vec(any::<u8>(), 1..=64)) {
            let (head, last) = data.split_at(data.len() - 1);
            let expected = djb2(head).wrapping_mul(33).wrapping_add(last[0] as u64);
            prop_assert_eq!(djb2(&data), expected);
        }

        #[test]
        fn sdbm_is_polynomial(data in proptest::collection::vec(any::<u8>(), 1..=64)) {
            let (head, last) = data.split_at(data.len() - 1);
            let expected = sdbm(head).wrapping_mul(65599).wrapping_add(last[0] as u64);
            prop_assert_eq!(sdbm(&data), expected);
        }
    }
}
