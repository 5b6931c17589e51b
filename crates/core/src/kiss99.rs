//! KISS99 generator
//!
//! Marsaglia's KISS99: a multiply-with-carry pair, a linear congruential
//! generator and a 3-shift xorshift, combined into one 32-bit stream.

/// KISS99 generator state
///
/// Each instance owns its stream; the type is intentionally not `Clone`.
#[derive(Debug, PartialEq, Eq)]
pub struct Kiss99 {
    z: u32,
    w: u32,
    jsr: u32,
    jcong: u32,
}

impl Kiss99 {
    /// Create a generator from its four seed words
    pub const fn new(z: u32, w: u32, jsr: u32, jcong: u32) -> Self {
        Self { z, w, jsr, jcong }
    }

    /// Advance the state and return the next word
    #[inline(always)]
    pub fn next_u32(&mut self) -> u32 {
        self.z = 36969u32
            .wrapping_mul(self.z & 0xffff)
            .wrapping_add(self.z >> 16);
        self.w = 18000u32
            .wrapping_mul(self.w & 0xffff)
            .wrapping_add(self.w >> 16);

        self.jcong = 69069u32.wrapping_mul(self.jcong).wrapping_add(1234567);

        self.jsr ^= self.jsr << 17;
        self.jsr ^= self.jsr >> 13;
        self.jsr ^= self.jsr << 5;

        ((self.z << 16).wrapping_add(self.w) ^ self.jcong).wrapping_add(self.jsr)
    }
}
