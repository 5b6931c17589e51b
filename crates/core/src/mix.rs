//! Mix state: seeding and final reduction

use crate::fnv::{FNV_OFFSET_BASIS, fnv1a, fnv1a_words};
use crate::kiss99::Kiss99;
use crate::params::{DIGEST_SIZE, DIGEST_WORDS};

/// Per-lane register files, one row per lane
pub type MixArray<const LANES: usize, const REGS: usize> = [[u32; REGS]; LANES];

/// Seed every lane's registers from a 64-bit seed.
///
/// `z` and `w` are shared by all lanes; `jsr` and `jcong` fold in the lane
/// number, and each lane draws from its own throwaway generator.
pub fn init_mix<const LANES: usize, const REGS: usize>(seed: u64) -> MixArray<LANES, REGS> {
    let z = fnv1a(FNV_OFFSET_BASIS, seed as u32);
    let w = fnv1a(z, (seed >> 32) as u32);

    let mut mix = [[0u32; REGS]; LANES];
    for (lane, regs) in mix.iter_mut().enumerate() {
        let jsr = fnv1a(w, lane as u32);
        let jcong = fnv1a(jsr, lane as u32);
        let mut rng = Kiss99::new(z, w, jsr, jcong);

        for reg in regs.iter_mut() {
            *reg = rng.next_u32();
        }
    }
    mix
}

/// Reduce the mix to the digest words.
///
/// Each lane collapses to one FNV-1a hash, then lane `l` is folded into
/// accumulator `l % 8`.
pub fn reduce<const LANES: usize, const REGS: usize>(
    mix: &MixArray<LANES, REGS>,
) -> [u32; DIGEST_WORDS] {
    let mut digest = [FNV_OFFSET_BASIS; DIGEST_WORDS];
    for (lane, regs) in mix.iter().enumerate() {
        let lane_hash = fnv1a_words(regs);
        let slot = &mut digest[lane % DIGEST_WORDS];
        *slot = fnv1a(*slot, lane_hash);
    }
    digest
}

/// Serialize digest words little-endian, word 0 first
pub fn digest_bytes(words: &[u32; DIGEST_WORDS]) -> [u8; DIGEST_SIZE] {
    let mut out = [0u8; DIGEST_SIZE];
    for (chunk, word) in out.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}
