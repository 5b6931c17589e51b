//! 32-bit FNV-1a step

/// FNV-1a 32-bit prime
pub const FNV_PRIME: u32 = 0x0100_0193;

/// FNV-1a 32-bit offset basis
pub const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;

/// Fold one word into an FNV-1a accumulator
#[inline(always)]
pub fn fnv1a(hash: u32, data: u32) -> u32 {
    (hash ^ data).wrapping_mul(FNV_PRIME)
}

/// Fold a sequence of words starting from the offset basis
#[inline]
pub fn fnv1a_words(words: &[u32]) -> u32 {
    words.iter().fold(FNV_OFFSET_BASIS, |hash, &word| fnv1a(hash, word))
}
