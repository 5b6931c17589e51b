//! ProgPoW hash mix pipeline
//!
//! seed -> lane registers, height -> epoch -> register schedule, then 64
//! rounds of cache/math/dataset mixing and an FNV-1a reduction to 8 words.
//! Nothing is shared between digest computations; batches parallelize by
//! running whole pipelines side by side.

use alloc::vec::Vec;

use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::dataset::Dataset;
use crate::error::Error;
use crate::mix::{digest_bytes, init_mix, reduce};
use crate::params::*;
use crate::round;
use crate::schedule::RegisterSchedule;

/// Hash mixer for a lane/register layout
///
/// Holds only the validated variant parameters, so one instance can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgPowMix<const LANES: usize, const REGS: usize> {
    config: Config,
}

/// Mixer for the published ProgPoW layout (16 lanes x 32 registers)
pub type ProgPow = ProgPowMix<LANES, REGS>;

impl<const LANES: usize, const REGS: usize> ProgPowMix<LANES, REGS> {
    /// Create a mixer, rejecting parameters the rounds cannot run with
    pub fn new(config: Config) -> Result<Self, Error> {
        config.validate(LANES, REGS)?;
        Ok(Self { config })
    }

    /// Variant parameters
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compute the digest words for `seed` at block `height`.
    ///
    /// Fails only if `l1` is shorter than the configured cache or a dataset
    /// lookup fails; partial state is dropped either way.
    pub fn hash_mix_words<D>(
        &self,
        l1: &[u32],
        height: u64,
        seed: u64,
        dataset: &mut D,
    ) -> Result<[u32; DIGEST_WORDS], Error>
    where
        D: Dataset + ?Sized,
    {
        let required = self.config.l1_cache_items as usize;
        if l1.len() < required {
            return Err(Error::CacheTooSmall {
                required,
                actual: l1.len(),
            });
        }

        let epoch = self.config.epoch(height);
        debug!("hash_mix: height {height}, epoch {epoch}, seed {seed:#018x}");

        let mut mix = init_mix::<LANES, REGS>(seed);
        let mut schedule = RegisterSchedule::<REGS>::new(epoch);

        for r in 0..ROUNDS {
            round::run(&self.config, l1, r, &mut mix, &mut schedule, dataset)?;
        }

        Ok(reduce(&mix))
    }

    /// Compute the serialized 32-byte digest for `seed` at block `height`
    pub fn hash_mix<D>(
        &self,
        l1: &[u32],
        height: u64,
        seed: u64,
        dataset: &mut D,
    ) -> Result<[u8; DIGEST_SIZE], Error>
    where
        D: Dataset + ?Sized,
    {
        self.hash_mix_words(l1, height, seed, dataset)
            .map(|words| digest_bytes(&words))
    }

    /// Hash many seeds at one height, in input order.
    ///
    /// Every seed runs its own pipeline against its own clone of `dataset`.
    /// The first failure aborts the batch.
    #[cfg(feature = "parallel")]
    pub fn hash_mix_batch<D>(
        &self,
        l1: &[u32],
        height: u64,
        seeds: &[u64],
        dataset: &D,
    ) -> Result<Vec<[u8; DIGEST_SIZE]>, Error>
    where
        D: Dataset + Clone + Send + Sync,
    {
        seeds
            .par_iter()
            .map_init(
                || dataset.clone(),
                |dataset, &seed| self.hash_mix(l1, height, seed, dataset),
            )
            .collect()
    }

    /// Hash many seeds at one height, in input order (sequential fallback)
    #[cfg(not(feature = "parallel"))]
    pub fn hash_mix_batch<D>(
        &self,
        l1: &[u32],
        height: u64,
        seeds: &[u64],
        dataset: &D,
    ) -> Result<Vec<[u8; DIGEST_SIZE]>, Error>
    where
        D: Dataset + Clone,
    {
        seeds
            .iter()
            .map(|&seed| self.hash_mix(l1, height, seed, &mut dataset.clone()))
            .collect()
    }
}

impl Default for ProgPow {
    fn default() -> Self {
        Self {
            config: Config::PROGPOW,
        }
    }
}

/// Convenience function for a single digest with the published variant
///
/// # Example
///
/// ```rust
/// use progpow_core::{DatasetError, L1_CACHE_ITEMS, hash_mix};
///
/// let l1 = vec![0u32; L1_CACHE_ITEMS as usize];
/// let mut dag = |index: u32| -> Result<Vec<u32>, DatasetError> { Ok(vec![index; 64]) };
///
/// let digest = hash_mix(&l1, 30_000, 0x1234, &mut dag).unwrap();
/// assert_eq!(digest, hash_mix(&l1, 30_000, 0x1234, &mut dag).unwrap());
/// ```
pub fn hash_mix<D>(
    l1: &[u32],
    height: u64,
    seed: u64,
    dataset: &mut D,
) -> Result<[u8; DIGEST_SIZE], Error>
where
    D: Dataset + ?Sized,
{
    ProgPow::default().hash_mix(l1, height, seed, dataset)
}
