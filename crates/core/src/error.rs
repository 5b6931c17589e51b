//! Error types for the mixing kernel

use thiserror::Error;

/// Failure reported by a [`Dataset`](crate::Dataset) lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// Requested item lies beyond the end of the dataset
    #[error("dataset index {index} out of range ({items} items)")]
    OutOfRange { index: u32, items: u32 },

    /// Dataset has not been generated yet
    #[error("dataset not available")]
    Unavailable,

    /// Foreign lookup callback returned a non-zero status
    #[error("lookup callback failed with status {code}")]
    Callback { code: i32 },
}

/// Errors that abort a digest computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A round could not fetch its dataset item
    #[error("dataset lookup of item {index} failed: {source}")]
    Dataset {
        index: u32,
        #[source]
        source: DatasetError,
    },

    /// Cache slice is shorter than the variant addresses
    #[error("cache holds {actual} words, variant requires {required}")]
    CacheTooSmall { required: usize, actual: usize },

    /// Variant parameters cannot drive the rounds
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
