//! In-place transpose of a non-square array, built from blocks sized by the gcd of the
//! dimensions.
//!
//! A `p` x `q` array with `d = gcd(p, q)` is viewed as a `d` x `d` grid of `p/d` x `q/d` blocks.
//! Reshuffling each block row through a buffer, transposing the grid in place and then
//! reshuffling again gives the full transpose while the buffer never holds more than one block
//! row. This is close to algorithm V5 of M. Dow, "Transposing a matrix on a vector computer",
//! Parallel Computing 21 (1995), with cache-oblivious subroutines.

use crate::block::{rec_transpose_square, transpose_block};
use crate::tuple::with_width;

/// Transpose `data` in place, where `data` holds an `(n*d)` x `(m*d)` row-major array of
/// `tuple`-wide cells and `buf` holds at least `n*m*d*tuple` elements.
///
/// To transpose a `p` x `q` array call this with `d = gcd(p, q)`, `n = p/d` and `m = q/d`.
/// [`transpose_cut`](crate::cut::transpose_cut) needs less buffer when
/// `|p-q| * gcd(p,q) < max(p,q)`.
///
/// # Panics
///
/// If any size is zero, or if `data` or `buf` is too short.
pub fn transpose_gcd<T: Copy>(
    data: &mut [T],
    n: usize,
    m: usize,
    d: usize,
    tuple: usize,
    buf: &mut [T],
) {
    assert!(n > 0 && m > 0 && d > 0 && tuple > 0);
    let num_el = n * m * d * tuple;
    assert!(data.len() >= num_el * d, "array is shorter than {} elements", num_el * d);
    assert!(buf.len() >= num_el, "scratch buffer is shorter than {num_el} elements");

    if d == 1 {
        transpose_block(data, buf, n, m, m, n, tuple);
        data[..num_el].copy_from_slice(&buf[..num_el]);
        return;
    }

    // Treat the array as (d x n) x (d' x m) with d' = d.

    // First d x (n x d') x m -> d x (d' x n) x m: d transposes of contiguous n x d' arrays of
    // m-tuples.
    if n > 1 {
        log::trace!("gcd transpose: {d} row groups of {n}x{d} {}-tuples", m * tuple);
        for group in data[..num_el * d].chunks_exact_mut(num_el) {
            transpose_block(group, buf, n, d, d, n, m * tuple);
            group.copy_from_slice(&buf[..num_el]);
        }
    }

    // Then (d x d') x (n x m) -> (d' x d) x (n x m), a square in-place transpose of n*m-tuples.
    with_width!(n * m * tuple, w => rec_transpose_square(data, 0, d, d, w));

    // Finally d' x ((d x n) x m) -> d' x (m x (d x n)): d' transposes of contiguous d*n x m arrays.
    if m > 1 {
        log::trace!("gcd transpose: {d} column groups of {}x{m}", d * n);
        for group in data[..num_el * d].chunks_exact_mut(num_el) {
            transpose_block(group, buf, d * n, m, m, d * n, tuple);
            group.copy_from_slice(&buf[..num_el]);
        }
    }
}
