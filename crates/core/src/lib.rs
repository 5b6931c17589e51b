//! # ProgPoW Mixing Kernel
//!
//! The memory-hard inner loop of ProgPoW: a seed and block height go in,
//! an 8-word digest comes out. Each round reads a random slice of a small
//! fast cache, runs random math over a per-lane register file, and merges
//! one item of the large dataset (DAG).
//!
//! ## Features
//!
//! - **Bit-exact**: KISS99, FNV-1a, merge and math match the published
//!   ProgPoW reference vectors
//! - **Epoch-stable program**: register schedule depends on `height / period`
//! - **Injected dataset**: rounds fetch items through the [`Dataset`] trait,
//!   so tests and light verifiers can serve synthetic data
//! - **Parameterized**: lane/register counts are const generics, the rest
//!   of the variant is a [`Config`]
//!
//! ## Algorithm Parameters (ProgPoW 0.9.3)
//!
//! - 16 lanes x 32 registers
//! - 11 cache accesses and 18 math operations per round
//! - 16 KB fast cache, program period of 10 blocks
//! - 64 rounds
//!
//! ## Example
//!
//! ```rust
//! use progpow_core::{L1_CACHE_ITEMS, ProgPow, SliceDataset};
//!
//! let l1: Vec<u32> = (0..L1_CACHE_ITEMS).collect();
//! let dag: Vec<u32> = (0..4096 * 64).collect();
//! let mut dataset = SliceDataset::new(&dag, 64);
//!
//! let mixer = ProgPow::default();
//! let digest = mixer.hash_mix(&l1, 30_000, 0xdead_beef, &mut dataset).unwrap();
//! assert_eq!(digest.len(), 32);
//! ```
//!
//! ## no_std Support
//!
//! The kernel only needs `alloc`:
//!
//! ```toml
//! [dependencies]
//! progpow-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod dataset;
mod error;
mod fnv;
mod kiss99;
mod mix;
mod ops;
mod params;
mod progpow;
mod round;
mod schedule;

#[cfg(feature = "std")]
mod ffi;

pub use dataset::{Dataset, SliceDataset};
pub use error::{DatasetError, Error};
pub use fnv::{FNV_OFFSET_BASIS, FNV_PRIME, fnv1a};
pub use kiss99::Kiss99;
pub use mix::{MixArray, digest_bytes, init_mix, reduce};
pub use ops::{math, merge};
pub use params::*;
pub use progpow::{ProgPow, ProgPowMix, hash_mix};
pub use schedule::RegisterSchedule;
