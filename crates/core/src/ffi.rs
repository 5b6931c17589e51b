//! C FFI bindings for native verifiers

use alloc::borrow::Cow;
use core::ffi::c_void;
use core::{ptr, slice};

use crate::params::{DIGEST_SIZE, L1_CACHE_ITEMS};
use crate::{Dataset, DatasetError, Error, ProgPow};

/// Success
pub const PROGPOW_OK: i32 = 0;
/// A required pointer argument was null
pub const PROGPOW_ERR_NULL: i32 = -1;
/// The lookup callback failed
pub const PROGPOW_ERR_DATASET: i32 = -2;
/// The cache buffer is shorter than the variant requires
pub const PROGPOW_ERR_CACHE: i32 = -3;
/// Variant parameters were rejected
pub const PROGPOW_ERR_CONFIG: i32 = -4;

/// Dataset lookup callback
///
/// On success writes a pointer to the item's words and their count, then
/// returns 0. The words must stay valid until the next call on the same
/// context. Any non-zero return aborts the digest.
pub type LookupCallback = unsafe extern "C" fn(
    ctx: *mut c_void,
    index: u32,
    item: *mut *const u32,
    item_len: *mut usize,
) -> i32;

struct CallbackDataset {
    lookup: LookupCallback,
    ctx: *mut c_void,
}

impl Dataset for CallbackDataset {
    fn lookup(&mut self, index: u32) -> Result<Cow<'_, [u32]>, DatasetError> {
        let mut item: *const u32 = ptr::null();
        let mut item_len = 0usize;

        let code = unsafe { (self.lookup)(self.ctx, index, &mut item, &mut item_len) };
        if code != 0 {
            return Err(DatasetError::Callback { code });
        }
        if item.is_null() {
            return Err(DatasetError::Unavailable);
        }

        // SAFETY: the callback contract keeps `item` alive until the next
        // lookup, which cannot happen while this borrow of `self` is live.
        Ok(Cow::Borrowed(unsafe { slice::from_raw_parts(item, item_len) }))
    }
}

fn status(err: &Error) -> i32 {
    match err {
        Error::Dataset { .. } => PROGPOW_ERR_DATASET,
        Error::CacheTooSmall { .. } => PROGPOW_ERR_CACHE,
        Error::InvalidConfig(_) => PROGPOW_ERR_CONFIG,
    }
}

/// Compute a ProgPoW hash mix digest with the published variant
/// - l1: pointer to the fast cache words
/// - l1_len: number of cache words (at least `progpow_l1_cache_items()`)
/// - height, seed: block height and 64-bit seed
/// - lookup, ctx: dataset callback and its opaque context
/// - output: pointer to a 32-byte buffer for the digest
///
/// Returns `PROGPOW_OK` or one of the `PROGPOW_ERR_*` codes; `output` is
/// left untouched on error.
#[unsafe(no_mangle)]
pub extern "C" fn progpow_hash_mix(
    l1: *const u32,
    l1_len: usize,
    height: u64,
    seed: u64,
    lookup: Option<LookupCallback>,
    ctx: *mut c_void,
    output: *mut u8,
) -> i32 {
    let Some(lookup) = lookup else {
        return PROGPOW_ERR_NULL;
    };
    if l1.is_null() || output.is_null() {
        return PROGPOW_ERR_NULL;
    }

    let l1 = unsafe { slice::from_raw_parts(l1, l1_len) };
    let mut dataset = CallbackDataset { lookup, ctx };

    match ProgPow::default().hash_mix(l1, height, seed, &mut dataset) {
        Ok(digest) => {
            let output = unsafe { slice::from_raw_parts_mut(output, DIGEST_SIZE) };
            output.copy_from_slice(&digest);
            PROGPOW_OK
        }
        Err(err) => {
            log::debug!("progpow_hash_mix failed: {err}");
            status(&err)
        }
    }
}

/// Number of cache words the published variant addresses
#[unsafe(no_mangle)]
pub extern "C" fn progpow_l1_cache_items() -> u32 {
    L1_CACHE_ITEMS
}
