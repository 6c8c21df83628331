//! In-place transpose of a non-square array by cutting off its leading square.
//!
//! The `min(n,m)` x `min(n,m)` square is transposed in place, while the leftover strip goes
//! through a buffer. Related to algorithm V3 of M. Dow, "Transposing a matrix on a vector
//! computer", Parallel Computing 21 (1995).

use crate::block::{rec_transpose_square, transpose_block};
use crate::layout::{pack, unpack};
use crate::tuple::with_width;

/// Transpose `data` in place, where `data` holds an `n` x `m` row-major array of `tuple`-wide
/// cells and `buf` holds at least `min(n,m) * |n-m| * tuple` elements.
///
/// # Panics
///
/// If any size is zero, or if `data` or `buf` is too short.
pub fn transpose_cut<T: Copy>(data: &mut [T], n: usize, m: usize, tuple: usize, buf: &mut [T]) {
    assert!(n > 0 && m > 0 && tuple > 0);
    let len = n * m * tuple;
    let strip = n.min(m) * n.abs_diff(m) * tuple;
    assert!(data.len() >= len, "array is shorter than {len} elements");
    assert!(buf.len() >= strip, "scratch buffer is shorter than {strip} elements");
    let data = &mut data[..len];

    if n > m {
        // bottom (n-m) x m strip out, square in place, then the strip back as the right columns
        buf[..strip].copy_from_slice(&data[m * m * tuple..]);
        with_width!(tuple, w => rec_transpose_square(data, 0, m, m, w));
        unpack(data, m, n, tuple);
        transpose_block(&buf[..strip], &mut data[m * tuple..], n - m, m, m, n, tuple);
    } else if m > n {
        // right n x (m-n) strip out, square in place, then the strip back as the bottom rows
        transpose_block(&data[n * tuple..], buf, n, m - n, m, n, tuple);
        pack(data, n, m, tuple);
        with_width!(tuple, w => rec_transpose_square(data, 0, n, n, w));
        data[n * n * tuple..].copy_from_slice(&buf[..strip]);
    } else {
        with_width!(tuple, w => rec_transpose_square(data, 0, n, n, w));
    }
}
