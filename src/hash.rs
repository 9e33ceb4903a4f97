use crate::types::CellIdx;

/// Polynomial rolling hash (multiplier 31) over the canonical
/// `(player, box_1, ..., box_n)` sequence.
///
/// Used only for transposition-table bucket routing; equality is always
/// decided by full memberwise comparison, so collisions cost time, not
/// correctness. The value 0 is reserved by callers as the "not yet
/// computed" sentinel; a sequence that genuinely hashes to 0 is recomputed
/// on each use, which is harmless.
#[inline]
pub fn state_key(cells: &[CellIdx]) -> u32 {
    let mut h: u32 = 0;
    for &c in cells {
        h = u32::from(c).wrapping_add(h.wrapping_mul(31));
    }
    h
}
