//! Hash functions for the symbol table.
//!
//! The symbol table treats hashing as a black box: any
//! `fn(&[u8], u32) -> u32` that is deterministic and avalanches well can be
//! injected. [`xxhash32`] is the default; [`fx_hash`] is a cheaper
//! alternative for small keys.

use std::hash::Hasher;

use rustc_hash::FxHasher;

/// Signature of a hash function accepted by [`SymbolTable`](crate::SymbolTable).
pub type HashFn = fn(&[u8], u32) -> u32;

const PRIME32_1: u32 = 0x9E37_79B1;
const PRIME32_2: u32 = 0x85EB_CA77;
const PRIME32_3: u32 = 0xC2B2_AE3D;
const PRIME32_4: u32 = 0x27D4_EB2F;
const PRIME32_5: u32 = 0x1656_67B1;

/// Stripe width of the main loop: four 4-byte lanes.
const STRIPE: usize = 16;

#[inline]
fn read_u32_le(word: &[u8]) -> u32 {
    u32::from_le_bytes([word[0], word[1], word[2], word[3]])
}

#[inline]
fn round(acc: u32, lane: u32) -> u32 {
    acc.wrapping_add(lane.wrapping_mul(PRIME32_2))
        .rotate_left(13)
        .wrapping_mul(PRIME32_1)
}

#[inline]
fn avalanche(mut h32: u32) -> u32 {
    h32 ^= h32 >> 15;
    h32 = h32.wrapping_mul(PRIME32_2);
    h32 ^= h32 >> 13;
    h32 = h32.wrapping_mul(PRIME32_3);
    h32 ^= h32 >> 16;
    h32
}

/// 32-bit xxHash of `input` with the given `seed`.
///
/// Processes 16-byte stripes across four accumulators, then folds the tail
/// in 4-byte words followed by single bytes, and finishes with the
/// avalanche mix. Output matches the reference XXH32 algorithm.
#[allow(
    clippy::cast_possible_truncation,
    reason = "XXH32 folds the input length modulo 2^32"
)]
pub fn xxhash32(input: &[u8], seed: u32) -> u32 {
    let mut rest = input;
    let mut h32 = if input.len() >= STRIPE {
        let mut v1 = seed.wrapping_add(PRIME32_1).wrapping_add(PRIME32_2);
        let mut v2 = seed.wrapping_add(PRIME32_2);
        let mut v3 = seed;
        let mut v4 = seed.wrapping_sub(PRIME32_1);

        let mut stripes = input.chunks_exact(STRIPE);
        for stripe in &mut stripes {
            v1 = round(v1, read_u32_le(&stripe[0..4]));
            v2 = round(v2, read_u32_le(&stripe[4..8]));
            v3 = round(v3, read_u32_le(&stripe[8..12]));
            v4 = round(v4, read_u32_le(&stripe[12..16]));
        }
        rest = stripes.remainder();

        v1.rotate_left(1)
            .wrapping_add(v2.rotate_left(7))
            .wrapping_add(v3.rotate_left(12))
            .wrapping_add(v4.rotate_left(18))
    } else {
        seed.wrapping_add(PRIME32_5)
    };

    h32 = h32.wrapping_add(input.len() as u32);

    let mut words = rest.chunks_exact(4);
    for word in &mut words {
        h32 = h32
            .wrapping_add(read_u32_le(word).wrapping_mul(PRIME32_3))
            .rotate_left(17)
            .wrapping_mul(PRIME32_4);
    }
    for &byte in words.remainder() {
        h32 = h32
            .wrapping_add(u32::from(byte).wrapping_mul(PRIME32_5))
            .rotate_left(11)
            .wrapping_mul(PRIME32_1);
    }

    avalanche(h32)
}

/// `FxHasher`-based hash, folded to 32 bits.
///
/// Faster than [`xxhash32`] on short identifiers but with weaker mixing in
/// the low bits, which is what the table mask selects. Prefer it only for
/// tables that stay small.
#[allow(
    clippy::cast_possible_truncation,
    reason = "intentional fold of the 64-bit state into 32 bits"
)]
pub fn fx_hash(input: &[u8], seed: u32) -> u32 {
    let mut hasher = FxHasher::default();
    hasher.write_u32(seed);
    hasher.write(input);
    let h = hasher.finish();
    (h ^ (h >> 32)) as u32
}
