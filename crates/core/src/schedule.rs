//! Register schedule
//!
//! One schedule drives a whole digest computation: its generator supplies
//! every selector, and its two permutations decide which registers the
//! cache and math steps read and write. The schedule depends only on the
//! epoch, so all heights in one period share the same program.

use crate::fnv::{FNV_OFFSET_BASIS, fnv1a};
use crate::kiss99::Kiss99;

/// Register permutations plus the generator that built them
#[derive(Debug)]
pub struct RegisterSchedule<const REGS: usize> {
    src_counter: u32,
    dst_counter: u32,
    src_seq: [u32; REGS],
    dst_seq: [u32; REGS],
    rng: Kiss99,
}

impl<const REGS: usize> RegisterSchedule<REGS> {
    /// Build the schedule for an epoch number.
    ///
    /// Both permutations are shuffled from the same stream: at each step the
    /// destination draw comes first, then the source draw.
    pub fn new(epoch: u64) -> Self {
        let lo = epoch as u32;
        let hi = (epoch >> 32) as u32;

        let z = fnv1a(FNV_OFFSET_BASIS, lo);
        let w = fnv1a(z, hi);
        let jsr = fnv1a(w, lo);
        let jcong = fnv1a(jsr, hi);
        let mut rng = Kiss99::new(z, w, jsr, jcong);

        let mut src_seq = [0u32; REGS];
        let mut dst_seq = [0u32; REGS];
        for (i, (src, dst)) in src_seq.iter_mut().zip(dst_seq.iter_mut()).enumerate() {
            *src = i as u32;
            *dst = i as u32;
        }

        // Fisher-Yates, top down
        for i in (2..=REGS).rev() {
            let dst_index = (rng.next_u32() % i as u32) as usize;
            dst_seq.swap(i - 1, dst_index);

            let src_index = (rng.next_u32() % i as u32) as usize;
            src_seq.swap(i - 1, src_index);
        }

        Self {
            src_counter: 0,
            dst_counter: 0,
            src_seq,
            dst_seq,
            rng,
        }
    }

    /// Next source register. The cursor moves before the read, so slot 0 is
    /// first reached only after a full wrap.
    #[inline(always)]
    pub fn next_src(&mut self) -> usize {
        self.src_counter = self.src_counter.wrapping_add(1);
        self.src_seq[self.src_counter as usize % REGS] as usize
    }

    /// Next destination register, same cursor rule as [`next_src`](Self::next_src)
    #[inline(always)]
    pub fn next_dst(&mut self) -> usize {
        self.dst_counter = self.dst_counter.wrapping_add(1);
        self.dst_seq[self.dst_counter as usize % REGS] as usize
    }

    /// Next selector word from the schedule's generator
    #[inline(always)]
    pub fn next_selector(&mut self) -> u32 {
        self.rng.next_u32()
    }

    /// Source register permutation
    pub fn src_sequence(&self) -> &[u32; REGS] {
        &self.src_seq
    }

    /// Destination register permutation
    pub fn dst_sequence(&self) -> &[u32; REGS] {
        &self.dst_seq
    }
}
