//! 128-bit vector forms of [`basic`](crate::basic) and
//! [`basic_v2`](crate::basic_v2).
//!
//! One register holds every accumulator lane, so each 16-byte block costs a
//! single shift, two adds and a load. Both functions are bit-identical to
//! their scalar twins for every input length: short inputs go straight to
//! the scalar code and a trailing partial block is zero-padded the same
//! way.
//!
//! | target                 | path   |
//! |------------------------|--------|
//! | x86_64                 | SSE2   |
//! | aarch64 little-endian  | NEON   |
//! | anything else          | scalar |
//!
//! Without the `simd` feature every target takes the scalar path.

use crate::Hash;

/// Vector form of [`basic`](crate::basic): both 64-bit lanes in one register.
pub fn basic_simd(data: &[u8]) -> Hash {
    if data.len() < crate::BLOCK {
        return crate::basic(data);
    }
    imp::basic(data)
}

/// Vector form of [`basic_v2`](crate::basic_v2): four 32-bit lanes in one
/// register.
pub fn basic_v2_simd(data: &[u8]) -> Hash {
    if data.len() < crate::BLOCK {
        return crate::basic_v2(data);
    }
    imp::basic_v2(data)
}

/// Name of the instruction set the vector variants run on in this build.
pub const fn backend() -> &'static str {
    imp::BACKEND
}

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
mod imp {
    use core::arch::x86_64::*;

    use crate::{fold_v2, pad_block, Hash, BASIC_SEED, BASIC_V2_SEED, BLOCK};

    pub const BACKEND: &str = "sse2";

    pub fn basic(data: &[u8]) -> Hash {
        // SAFETY: sse2 is part of the x86_64 baseline, and every load reads
        // exactly one full block through an unaligned load.
        unsafe {
            let mut acc = _mm_set_epi64x(BASIC_SEED[1] as i64, BASIC_SEED[0] as i64);
            let mut blocks = data.chunks_exact(BLOCK);
            for block in &mut blocks {
                let word = _mm_loadu_si128(block.as_ptr() as *const __m128i);
                acc = _mm_add_epi64(acc, _mm_add_epi64(_mm_slli_epi64(acc, 7), word));
            }
            let tail = blocks.remainder();
            if !tail.is_empty() {
                let block = pad_block(tail);
                let word = _mm_loadu_si128(block.as_ptr() as *const __m128i);
                acc = _mm_add_epi64(acc, _mm_add_epi64(_mm_slli_epi64(acc, 7), word));
            }
            let mut lanes = [0u64; 2];
            _mm_storeu_si128(lanes.as_mut_ptr() as *mut __m128i, acc);
            lanes[0].wrapping_add(lanes[1])
        }
    }

    pub fn basic_v2(data: &[u8]) -> Hash {
        // SAFETY: see `basic`.
        unsafe {
            let mut acc = _mm_set_epi32(
                BASIC_V2_SEED[3] as i32,
                BASIC_V2_SEED[2] as i32,
                BASIC_V2_SEED[1] as i32,
                BASIC_V2_SEED[0] as i32,
            );
            let mut blocks = data.chunks_exact(BLOCK);
            for block in &mut blocks {
                let word = _mm_loadu_si128(block.as_ptr() as *const __m128i);
                acc = _mm_add_epi32(acc, _mm_add_epi32(_mm_slli_epi32(acc, 7), word));
            }
            let tail = blocks.remainder();
            if !tail.is_empty() {
                let block = pad_block(tail);
                let word = _mm_loadu_si128(block.as_ptr() as *const __m128i);
                acc = _mm_add_epi32(acc, _mm_add_epi32(_mm_slli_epi32(acc, 7), word));
            }
            let mut lanes = [0u32; 4];
            _mm_storeu_si128(lanes.as_mut_ptr() as *mut __m128i, acc);
            fold_v2(lanes)
        }
    }
}

#[cfg(all(
    feature = "simd",
    target_arch = "aarch64",
    target_endian = "little"
))]
mod imp {
    use core::arch::aarch64::*;

    use crate::{fold_v2, pad_block, Hash, BASIC_SEED, BASIC_V2_SEED, BLOCK};

    pub const BACKEND: &str = "neon";

    pub fn basic(data: &[u8]) -> Hash {
        // SAFETY: neon is part of the aarch64 baseline; loads go through
        // byte pointers and read exactly one full block.
        unsafe {
            let mut acc = vld1q_u64(BASIC_SEED.as_ptr());
            let mut blocks = data.chunks_exact(BLOCK);
            for block in &mut blocks {
                let word = vreinterpretq_u64_u8(vld1q_u8(block.as_ptr()));
                acc = vaddq_u64(acc, vaddq_u64(vshlq_n_u64::<7>(acc), word));
            }
            let tail = blocks.remainder();
            if !tail.is_empty() {
                let block = pad_block(tail);
                let word = vreinterpretq_u64_u8(vld1q_u8(block.as_ptr()));
                acc = vaddq_u64(acc, vaddq_u64(vshlq_n_u64::<7>(acc), word));
            }
            vgetq_lane_u64::<0>(acc).wrapping_add(vgetq_lane_u64::<1>(acc))
        }
    }

    pub fn basic_v2(data: &[u8]) -> Hash {
        // SAFETY: see `basic`.
        unsafe {
            let mut acc = vld1q_u32(BASIC_V2_SEED.as_ptr());
            let mut blocks = data.chunks_exact(BLOCK);
            for block in &mut blocks {
                let word = vreinterpretq_u32_u8(vld1q_u8(block.as_ptr()));
                acc = vaddq_u32(acc, vaddq_u32(vshlq_n_u32::<7>(acc), word));
            }
            let tail = blocks.remainder();
            if !tail.is_empty() {
                let block = pad_block(tail);
                let word = vreinterpretq_u32_u8(vld1q_u8(block.as_ptr()));
                acc = vaddq_u32(acc, vaddq_u32(vshlq_n_u32::<7>(acc), word));
            }
            let mut lanes = [0u32; 4];
            vst1q_u32(lanes.as_mut_ptr(), acc);
            fold_v2(lanes)
        }
    }
}

#[cfg(not(any(
    all(feature = "simd", target_arch = "x86_64"),
    all(feature = "simd", target_arch = "aarch64", target_endian = "little")
)))]
mod imp {
    pub use crate::{basic, basic_v2};

    pub const BACKEND: &str = "scalar";
}
