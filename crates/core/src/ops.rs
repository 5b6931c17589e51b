//! Selector-driven merge and math operations
//!
//! Both tables are part of the consensus rules: a selector must map to the
//! same operation on every implementation.

/// Merge `b` into `a` without losing entropy from `a`.
///
/// The rotate variants add one so a rotation by zero never turns the merge
/// into a plain XOR.
#[inline(always)]
pub fn merge(a: u32, b: u32, selector: u32) -> u32 {
    let rotation = ((selector >> 16) % 31) + 1;
    match selector % 4 {
        0 => a.wrapping_mul(33).wrapping_add(b),
        1 => (a ^ b).wrapping_mul(33),
        2 => a.rotate_left(rotation) ^ b,
        _ => a.rotate_right(rotation) ^ b,
    }
}

/// Combine two registers with one of eleven arithmetic/bitwise operations
#[inline(always)]
pub fn math(a: u32, b: u32, selector: u32) -> u32 {
    match selector % 11 {
        0 => a.wrapping_add(b),
        1 => a.wrapping_mul(b),
        2 => ((a as u64 * b as u64) >> 32) as u32,
        3 => a.min(b),
        4 => a.rotate_left(b),
        5 => a.rotate_right(b),
        6 => a & b,
        7 => a | b,
        8 => a ^ b,
        9 => a.leading_zeros() + b.leading_zeros(),
        _ => a.count_ones() + b.count_ones(),
    }
}
