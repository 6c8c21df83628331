//! In-place transpose by following permutation cycles.
//!
//! This is TOMS Algorithm 513 (E. G. Cate and D. W. Twigg, "Algorithm 513: Analysis of In-Situ
//! Transposition", ACM Trans. Math. Softw. 3 (1), 104-110, 1977). It is much slower than the
//! cache-oblivious routines in [`gcd`](crate::gcd) and [`cut`](crate::cut), but it only needs room
//! for two tuples plus a small marker array, whatever the shape.
//!
//! Cell `i` of an `nx` x `ny` array moves to `i * nx mod (nx*ny - 1)`; cells `0` and `nx*ny - 1`
//! stay put. Every cycle `i -> ...` has a companion cycle `k - i -> ...` (`k = nx*ny - 1`), and
//! both are rotated in the same pass.

use crate::address::gcd;

/// Number of cells the transpose of an `nx` x `ny` array leaves in place.
pub const fn fixed_points(nx: usize, ny: usize) -> usize {
    let mut count = 2;
    if nx >= 3 && ny >= 3 {
        count += gcd(ny - 1, nx - 1) - 1;
    }
    count
}

/// Recommended marker array length for an `nx` x `ny` array.
pub const fn marker_len(nx: usize, ny: usize) -> usize {
    (nx + ny) / 2
}

/// Transpose `data`, an `nx` x `ny` row-major array of `tuple`-wide cells, in place.
///
/// `marks` speeds up the search for unprocessed cycles; its length is used as given and
/// [`marker_len`] is a good choice. `buf` must hold at least `2 * tuple` elements.
///
/// # Panics
///
/// If any size is zero, if `marks` is empty, or if `data` or `buf` is too short.
pub fn transpose_toms513<T: Copy>(
    data: &mut [T],
    nx: usize,
    ny: usize,
    tuple: usize,
    marks: &mut [bool],
    buf: &mut [T],
) {
    assert!(nx > 0 && ny > 0 && tuple > 0 && !marks.is_empty());
    assert!(data.len() >= nx * ny * tuple, "array is shorter than {} elements", nx * ny * tuple);
    assert!(buf.len() >= 2 * tuple, "scratch buffer is shorter than {} elements", 2 * tuple);

    // a single row or column is its own transpose
    if nx == 1 || ny == 1 {
        return;
    }

    let n = tuple;
    let move_size = marks.len();
    let mn = nx * ny;
    let k = mn - 1;
    // where the cell ending up at i comes from
    let next = |i: usize| ny * i - k * (i / nx);

    marks.fill(false);
    let mut ncount = fixed_points(nx, ny);

    // b and c are the two halves of buf; they trade places when a cycle meets its companion
    let (mut b, mut c) = (0, n);
    let mut i = 1;
    let mut im = ny;

    loop {
        // Rearrange the cells of a cycle and its companion cycle.
        let mut i1 = i;
        let kmi = k - i;
        let mut i1c = kmi;
        buf[b..b + n].copy_from_slice(&data[n * i1..n * i1 + n]);
        buf[c..c + n].copy_from_slice(&data[n * i1c..n * i1c + n]);

        loop {
            let i2 = next(i1);
            let i2c = k - i2;
            if i1 < move_size {
                marks[i1] = true;
            }
            if i1c < move_size {
                marks[i1c] = true;
            }
            ncount += 2;
            if i2 == i {
                break;
            }
            if i2 == kmi {
                core::mem::swap(&mut b, &mut c);
                break;
            }
            data.copy_within(n * i2..n * i2 + n, n * i1);
            data.copy_within(n * i2c..n * i2c + n, n * i1c);
            i1 = i2;
            i1c = i2c;
        }
        data[n * i1..n * i1 + n].copy_from_slice(&buf[b..b + n]);
        data[n * i1c..n * i1c + n].copy_from_slice(&buf[c..c + n]);

        if ncount >= mn {
            break;
        }

        // Search for the start of the next unprocessed cycle.
        loop {
            let max = k - i;
            i += 1;
            debug_assert!(i <= max, "cycle search ran past the middle of the array");
            im += ny;
            if im > k {
                im -= k;
            }
            let mut i2 = im;
            if i == i2 {
                continue;
            }
            if i >= move_size {
                // too far for the marker array: follow the cycle and see whether it dips below i
                while i2 > i && i2 < max {
                    i2 = next(i2);
                }
                if i2 == i {
                    break;
                }
            } else if !marks[i] {
                break;
            }
        }
    }
}
