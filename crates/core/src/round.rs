//! One mixing round
//!
//! A round interleaves random cache reads with random math, then merges one
//! dataset item into every lane. Every register index and selector is drawn
//! once, outside the lane loops, so all lanes run the same program on
//! different data.

use alloc::vec::Vec;

use log::{debug, trace};

use crate::dataset::Dataset;
use crate::error::Error;
use crate::mix::MixArray;
use crate::ops::{math, merge};
use crate::params::Config;
use crate::schedule::RegisterSchedule;

/// Run round `round` over `mix` in place.
///
/// `l1` must hold at least `config.l1_cache_items` words and `config` must
/// have been validated for this lane/register layout.
pub(crate) fn run<const LANES: usize, const REGS: usize, D>(
    config: &Config,
    l1: &[u32],
    round: u32,
    mix: &mut MixArray<LANES, REGS>,
    schedule: &mut RegisterSchedule<REGS>,
    dataset: &mut D,
) -> Result<(), Error>
where
    D: Dataset + ?Sized,
{
    let num_items = config.l1_cache_items / 2;
    let item_index = mix[round as usize % LANES][0] % num_items;
    trace!("round {round}: dataset item {item_index}");

    let item = dataset.lookup(item_index).map_err(|source| {
        debug!("round {round}: lookup of item {item_index} failed: {source}");
        Error::Dataset {
            index: item_index,
            source,
        }
    })?;
    let words_per_lane = item.len() / LANES;

    // Cache and math steps share one counter but stop independently
    let steps = config.cache_accesses.max(config.math_operations);
    for i in 0..steps {
        if i < config.cache_accesses {
            let src = schedule.next_src();
            let dst = schedule.next_dst();
            let sel = schedule.next_selector();

            for regs in mix.iter_mut() {
                let offset = (regs[src] % config.l1_cache_items) as usize;
                regs[dst] = merge(regs[dst], l1[offset], sel);
            }
        }

        if i < config.math_operations {
            // Uniform over ordered pairs of distinct registers
            let pair = schedule.next_selector() % (REGS * (REGS - 1)) as u32;
            let src1 = pair as usize % REGS;
            let mut src2 = pair as usize / REGS;
            if src2 >= src1 {
                src2 += 1;
            }

            let sel1 = schedule.next_selector();
            let dst = schedule.next_dst();
            let sel2 = schedule.next_selector();

            for regs in mix.iter_mut() {
                let data = math(regs[src1], regs[src2], sel1);
                regs[dst] = merge(regs[dst], data, sel2);
            }
        }
    }

    // Dataset merge. Word 0 always lands in register 0.
    let mut dsts = Vec::with_capacity(words_per_lane);
    let mut sels = Vec::with_capacity(words_per_lane);
    for i in 0..words_per_lane {
        dsts.push(if i == 0 { 0 } else { schedule.next_dst() });
        sels.push(schedule.next_selector());
    }

    for (lane, regs) in mix.iter_mut().enumerate() {
        let offset = ((lane as u32 ^ round) as usize % LANES) * words_per_lane;
        let words = &item[offset..offset + words_per_lane];
        for ((&dst, &sel), &word) in dsts.iter().zip(&sels).zip(words) {
            regs[dst] = merge(regs[dst], word, sel);
        }
    }

    Ok(())
}
