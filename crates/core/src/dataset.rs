//! Dataset access
//!
//! The rounds never see the DAG itself, only a [`Dataset`] handle that
//! resolves an item index to its words. Building the dataset is the host's
//! business.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::error::DatasetError;

/// Source of dataset items
pub trait Dataset {
    /// Fetch the words of item `index`.
    ///
    /// Must be deterministic for the lifetime of a digest computation.
    fn lookup(&mut self, index: u32) -> Result<Cow<'_, [u32]>, DatasetError>;
}

impl<F> Dataset for F
where
    F: FnMut(u32) -> Result<Vec<u32>, DatasetError>,
{
    #[inline]
    fn lookup(&mut self, index: u32) -> Result<Cow<'_, [u32]>, DatasetError> {
        self(index).map(Cow::Owned)
    }
}

/// Dataset held in memory as one flat word slice
///
/// Item `i` is `words[i * item_words..(i + 1) * item_words]`; a trailing
/// partial item is not addressable.
#[derive(Debug, Clone, Copy)]
pub struct SliceDataset<'a> {
    words: &'a [u32],
    item_words: usize,
}

impl<'a> SliceDataset<'a> {
    /// Wrap `words` as items of `item_words` words each
    pub fn new(words: &'a [u32], item_words: usize) -> Self {
        Self { words, item_words }
    }

    /// Number of complete items
    pub fn len(&self) -> usize {
        self.words.len().checked_div(self.item_words).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow item `index`
    pub fn item(&self, index: u32) -> Result<&'a [u32], DatasetError> {
        let items = self.len();
        let start = (index as usize)
            .checked_mul(self.item_words)
            .filter(|_| (index as usize) < items)
            .ok_or(DatasetError::OutOfRange {
                index,
                items: u32::try_from(items).unwrap_or(u32::MAX),
            })?;
        Ok(&self.words[start..start + self.item_words])
    }
}

impl Dataset for SliceDataset<'_> {
    #[inline]
    fn lookup(&mut self, index: u32) -> Result<Cow<'_, [u32]>, DatasetError> {
        self.item(index).map(Cow::Borrowed)
    }
}
