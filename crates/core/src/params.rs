//! ProgPoW Algorithm Parameters
//!
//! Published ProgPoW 0.9.3 constants. Lane and register counts size the
//! mix arrays, so they are const generics on the mixing types; the rest of
//! the variant lives in [`Config`].

use crate::error::Error;

/// Number of parallel lanes
pub const LANES: usize = 16;

/// Number of 32-bit registers per lane
pub const REGS: usize = 32;

/// Cache accesses per round
pub const CACHE_ACCESSES: usize = 11;

/// Random math operations per round
pub const MATH_OPERATIONS: usize = 18;

/// Fast cache size in 32-bit words (16 KB)
pub const L1_CACHE_ITEMS: u32 = 16 * 1024 / 4;

/// Block heights per program period
pub const PERIOD_LENGTH: u64 = 10;

/// Number of mixing rounds per digest
pub const ROUNDS: u32 = 64;

/// Digest size in 32-bit words
pub const DIGEST_WORDS: usize = 8;

/// Digest size in bytes
pub const DIGEST_SIZE: usize = DIGEST_WORDS * 4;

/// Runtime parameters of a ProgPoW variant
///
/// Digests are only comparable between implementations that agree on every
/// field here as well as on the lane and register counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Cache accesses per round
    pub cache_accesses: usize,
    /// Random math operations per round
    pub math_operations: usize,
    /// Words of fast cache addressed by each round
    pub l1_cache_items: u32,
    /// Block heights sharing one register schedule
    pub period_length: u64,
}

impl Config {
    /// The published ProgPoW 0.9.3 variant
    pub const PROGPOW: Config = Config {
        cache_accesses: CACHE_ACCESSES,
        math_operations: MATH_OPERATIONS,
        l1_cache_items: L1_CACHE_ITEMS,
        period_length: PERIOD_LENGTH,
    };

    /// Check the parameters against a lane/register layout.
    ///
    /// Every modulus the rounds take is derived from these values, so a
    /// validated config keeps the mixing code free of division by zero.
    pub fn validate(&self, lanes: usize, regs: usize) -> Result<(), Error> {
        if lanes == 0 {
            return Err(Error::InvalidConfig("at least one lane is required"));
        }
        if regs < 2 {
            return Err(Error::InvalidConfig("at least two registers are required"));
        }
        if u32::try_from(lanes).is_err() || u32::try_from(regs).is_err() {
            return Err(Error::InvalidConfig("lane and register counts must fit in 32 bits"));
        }
        if (regs as u64) * (regs as u64 - 1) > u32::MAX as u64 {
            return Err(Error::InvalidConfig("register pair space exceeds 32 bits"));
        }
        if self.l1_cache_items < 2 {
            return Err(Error::InvalidConfig("cache must hold at least two words"));
        }
        if self.period_length == 0 {
            return Err(Error::InvalidConfig("period length must be non-zero"));
        }
        Ok(())
    }

    /// Epoch number for a block height
    #[inline]
    pub fn epoch(&self, height: u64) -> u64 {
        height / self.period_length
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::PROGPOW
    }
}
