//! Cache-oblivious block transposes of tuple arrays.
//!
//! All three routines recursively halve the larger dimension until the block is small enough
//! to handle with a plain loop. There is no block size to tune: the recursion reaches a size
//! that fits in each cache level on its own.
//!
//! Blocks are described by an offset into a slice (in scalars) plus a row stride (in cells)
//! rather than by sub-slices. The swap and square routines work on
//! regions that are logically disjoint but interleave inside one buffer, which sub-slicing
//! can't express.
//!
//! The two halves produced at each split touch disjoint cells, so they could run as
//! independent tasks.

use crate::address::{block_extent, offset};
use crate::tuple::{copy_tuple, swap_tuple, with_width, Width};

// Blocks whose perimeter (in scalars) is below twice this size are transposed directly
const CUTOFF: usize = 8;

/// Transpose an `n` x `m` block of `tuple`-wide cells from `src` into the `m` x `n` block at the
/// start of `dst`.
///
/// Rows of the source block start `src_stride` cells apart, rows of the destination block
/// `dst_stride` cells apart.
///
/// # Panics
///
/// If either slice is too short for its block.
pub fn transpose_block<T: Copy>(
    src: &[T],
    dst: &mut [T],
    n: usize,
    m: usize,
    src_stride: usize,
    dst_stride: usize,
    tuple: usize,
) {
    assert!(tuple > 0, "tuple width must be positive");
    assert!(src.len() >= block_extent(n, m, src_stride, tuple));
    assert!(dst.len() >= block_extent(m, n, dst_stride, tuple));
    if n == 0 || m == 0 {
        return;
    }
    with_width!(tuple, w => rec_transpose(src, 0, dst, 0, n, m, src_stride, dst_stride, w))
}

/// Given two blocks of the same buffer, `A` (`n` x `m`, starting at scalar offset `a`) and `B`
/// (`m` x `n`, starting at `b`), store the transpose of `A` in `B` and the transpose of `B` in `A`.
/// Both blocks use the row stride `stride`.
///
/// # Panics
///
/// If either block runs past the end of `data`. Overlapping blocks are not detected; they
/// produce a scrambled result rather than a transpose.
pub fn transpose_swap<T>(
    data: &mut [T],
    a: usize,
    b: usize,
    n: usize,
    m: usize,
    stride: usize,
    tuple: usize,
) {
    assert!(tuple > 0, "tuple width must be positive");
    assert!(data.len() >= a + block_extent(n, m, stride, tuple));
    assert!(data.len() >= b + block_extent(m, n, stride, tuple));
    if n == 0 || m == 0 {
        return;
    }
    with_width!(tuple, w => rec_transpose_swap(data, a, b, n, m, stride, w))
}

/// Transpose the `n` x `n` block starting at scalar offset `start` of `data` in place. Rows of
/// the block start `stride` cells apart.
///
/// # Panics
///
/// If the block runs past the end of `data`, or if `stride < n`.
pub fn transpose_square<T>(data: &mut [T], start: usize, n: usize, stride: usize, tuple: usize) {
    assert!(tuple > 0, "tuple width must be positive");
    assert!(stride >= n, "row stride {stride} is shorter than the row length {n}");
    assert!(data.len() >= start + block_extent(n, n, stride, tuple));
    with_width!(tuple, w => rec_transpose_square(data, start, n, stride, w))
}

/// Out-of-place transpose of `A` (`n` x `m`, rows `fda` cells apart, at `src[a..]`) into
/// `B` (`m` x `n`, rows `fdb` cells apart, at `dst[b..]`).
pub(crate) fn rec_transpose<T: Copy, W: Width>(
    src: &[T],
    a: usize,
    dst: &mut [T],
    b: usize,
    n: usize,
    m: usize,
    fda: usize,
    fdb: usize,
    w: W,
) {
    let nw = w.get();
    if n == 1 || m == 1 || (n + m) * nw < CUTOFF * 2 {
        for i in 0..n {
            for j in 0..m {
                copy_tuple(src, a + offset(i, j, 0, fda, nw), dst, b + offset(j, i, 0, fdb, nw), w);
            }
        }
    } else if n > m {
        let n2 = n / 2;
        rec_transpose(src, a, dst, b, n2, m, fda, fdb, w);
        rec_transpose(src, a + n2 * nw * fda, dst, b + n2 * nw, n - n2, m, fda, fdb, w);
    } else {
        let m2 = m / 2;
        rec_transpose(src, a, dst, b, n, m2, fda, fdb, w);
        rec_transpose(src, a + m2 * nw, dst, b + m2 * nw * fdb, n, m - m2, fda, fdb, w);
    }
}

/// Swap-transpose of `A` (`n` x `m` at `data[a..]`) with `B` (`m` x `n` at `data[b..]`), both with
/// row stride `fd`.
pub(crate) fn rec_transpose_swap<T, W: Width>(
    data: &mut [T],
    a: usize,
    b: usize,
    n: usize,
    m: usize,
    fd: usize,
    w: W,
) {
    let nw = w.get();
    if n == 1 || m == 1 || (n + m) * nw <= CUTOFF * 2 {
        for i in 0..n {
            for j in 0..m {
                swap_tuple(data, a + offset(i, j, 0, fd, nw), b + offset(j, i, 0, fd, nw), w);
            }
        }
    } else if n > m {
        let n2 = n / 2;
        rec_transpose_swap(data, a, b, n2, m, fd, w);
        rec_transpose_swap(data, a + n2 * nw * fd, b + n2 * nw, n - n2, m, fd, w);
    } else {
        let m2 = m / 2;
        rec_transpose_swap(data, a, b, n, m2, fd, w);
        rec_transpose_swap(data, a + m2 * nw, b + m2 * nw * fd, n, m - m2, fd, w);
    }
}

/// In-place transpose of the `n` x `n` block at `data[a..]` with row stride `fd`.
///
/// The two diagonal quadrants are transposed on their own, the two off-diagonal quadrants are
/// swap-transposed with each other.
pub(crate) fn rec_transpose_square<T, W: Width>(data: &mut [T], a: usize, n: usize, fd: usize, w: W) {
    let nw = w.get();
    if n <= 1 {
        return;
    }
    if n * nw <= CUTOFF {
        for i in 0..n {
            for j in i + 1..n {
                swap_tuple(data, a + offset(i, j, 0, fd, nw), a + offset(j, i, 0, fd, nw), w);
            }
        }
    } else {
        let n2 = n / 2;
        rec_transpose_square(data, a, n2, fd, w);
        rec_transpose_square(data, a + offset(n2, n2, 0, fd, nw), n - n2, fd, w);
        rec_transpose_swap(data, a + n2 * nw, a + n2 * nw * fd, n2, n - n2, fd, w);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn reference(input: &[u32], n: usize, m: usize, tuple: usize) -> Vec<u32> {
        let mut output = vec![0; n * m * tuple];
        for i in 0..n {
            for j in 0..m {
                for k in 0..tuple {
                    output[(j * n + i) * tuple + k] = input[(i * m + j) * tuple + k];
                }
            }
        }
        output
    }

    #[test]
    fn test_block_against_reference() {
        for &tuple in &[1, 2, 3] {
            for n in 1..20 {
                for m in 1..20 {
                    let input: Vec<u32> = (0..(n * m * tuple) as u32).collect();
                    let mut output = vec![0; n * m * tuple];
                    transpose_block(&input, &mut output, n, m, m, n, tuple);
                    assert_eq!(output, reference(&input, n, m, tuple), "n = {n}, m = {m}, tuple = {tuple}");
                }
            }
        }
    }

    #[test]
    fn test_square_against_reference() {
        for &tuple in &[1, 2, 5] {
            for n in 0..33 {
                let input: Vec<u32> = (0..(n * n * tuple) as u32).collect();
                let mut data = input.clone();
                transpose_square(&mut data, 0, n, n, tuple);
                assert_eq!(data, reference(&input, n, n, tuple), "n = {n}, tuple = {tuple}");
            }
        }
    }

    #[test]
    fn test_square_leaves_padding_alone() {
        let n = 11;
        let stride = 14;
        let input: Vec<u32> = (0..(n * stride) as u32).collect();
        let mut data = input.clone();
        transpose_square(&mut data, 0, n, stride, 1);
        for i in 0..n {
            for j in 0..stride {
                let expected = if j < n { input[j * stride + i] } else { input[i * stride + j] };
                assert_eq!(data[i * stride + j], expected, "i = {i}, j = {j}");
            }
        }
    }

    #[test]
    fn test_swap_exchanges_transposes() {
        // A: 3 x 5 block at row 0, B: 5 x 3 block at row 4, both in a 9-row array with stride 6
        let stride = 6;
        let (n, m) = (3, 5);
        let b = 4 * stride;
        let input: Vec<u32> = (0..(9 * stride) as u32).collect();
        let mut data = input.clone();
        transpose_swap(&mut data, 0, b, n, m, stride, 1);
        for i in 0..n {
            for j in 0..m {
                assert_eq!(data[i * stride + j], input[b + j * stride + i]);
                assert_eq!(data[b + j * stride + i], input[i * stride + j]);
            }
        }
    }
}
