//! Address arithmetic shared by every transpose routine.
//!
//! Offsets are always counted in scalars (`T` values), never in tuples or bytes.

/// Offset of slot `slot` of the tuple at (`row`, `col`) in an array of `tuple`-wide cells whose
/// rows start `row_stride` cells apart.
#[inline(always)]
pub const fn offset(row: usize, col: usize, slot: usize, row_stride: usize, tuple: usize) -> usize {
    (row * row_stride + col) * tuple + slot
}

/// Offset of cell (`i`, `j`) when both axes carry an explicit scalar stride.
#[inline(always)]
pub const fn strided_offset(i: usize, j: usize, s0: usize, s1: usize) -> usize {
    i * s0 + j * s1
}

/// Number of scalars an `n` x `m` block with the given row stride reaches into, counted from
/// the block origin. Zero for empty blocks.
#[inline]
pub const fn block_extent(n: usize, m: usize, row_stride: usize, tuple: usize) -> usize {
    if n == 0 || m == 0 {
        0
    } else {
        offset(n - 1, m, 0, row_stride, tuple)
    }
}

/// Greatest common divisor of two positive integers.
pub const fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_matches_row_major_layout() {
        // 3 x 4 array of pairs, rows padded to 5 cells
        assert_eq!(offset(0, 0, 0, 5, 2), 0);
        assert_eq!(offset(0, 3, 1, 5, 2), 7);
        assert_eq!(offset(2, 1, 0, 5, 2), 22);
        assert_eq!(block_extent(3, 4, 5, 2), 28);
        assert_eq!(block_extent(0, 4, 5, 2), 0);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(6, 4), 2);
        assert_eq!(gcd(4, 6), 2);
        assert_eq!(gcd(7, 5), 1);
        assert_eq!(gcd(12, 12), 12);
        assert_eq!(gcd(9, 0), 9);
    }
}
