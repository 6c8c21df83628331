//! Plain double-loop transposes of square arrays with arbitrary strides. No buffers, no
//! recursion: every (i, j) cell below the diagonal is swapped with its (j, i) mirror.

use crate::address::strided_offset;
use crate::tuple::{swap_tuple, Fixed};

/// Square transpose of single scalars; rows are `s0` apart, columns `s1` apart.
pub(crate) fn transpose_simple<T>(data: &mut [T], n: usize, s0: usize, s1: usize) {
    for i in 1..n {
        for j in 0..i {
            data.swap(strided_offset(i, j, s0, s1), strided_offset(j, i, s0, s1));
        }
    }
}

/// Square transpose of consecutive scalar pairs.
pub(crate) fn transpose_simple_pairs<T>(data: &mut [T], n: usize, s0: usize, s1: usize) {
    for i in 1..n {
        for j in 0..i {
            swap_tuple(
                data,
                strided_offset(i, j, s0, s1),
                strided_offset(j, i, s0, s1),
                Fixed::<2>,
            );
        }
    }
}

/// Square transpose of `vl` interleaved arrays, whose matching cells lie `vs` scalars apart.
pub(crate) fn transpose_simple_vec<T>(
    data: &mut [T],
    n: usize,
    s0: usize,
    s1: usize,
    vl: usize,
    vs: usize,
) {
    for i in 1..n {
        for j in 0..i {
            let p0 = strided_offset(i, j, s0, s1);
            let p1 = strided_offset(j, i, s0, s1);
            for iv in 0..vl {
                data.swap(p0 + iv * vs, p1 + iv * vs);
            }
        }
    }
}
