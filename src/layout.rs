//! Conversion of a square block between padded and tight row layouts.
//!
//! The contents of the padding cells are not preserved.

/// Squeeze the `n` x `n` block at the start of `data`, whose rows start `stride` cells apart,
/// into a tightly packed `n` x `n` block. Rows are moved first to last, so a row is never
/// overwritten before it has been read.
pub fn pack<T: Copy>(data: &mut [T], n: usize, stride: usize, tuple: usize) {
    assert!(stride >= n);
    let row = n * tuple;
    for i in 0..n {
        let from = stride * tuple * i;
        data.copy_within(from..from + row, row * i);
    }
}

/// Inverse of [`pack`]: spread a tightly packed `n` x `n` block at the start of `data` out to rows
/// `stride` cells apart. Rows are moved last to first.
pub fn unpack<T: Copy>(data: &mut [T], n: usize, stride: usize, tuple: usize) {
    assert!(stride >= n);
    let row = n * tuple;
    for i in (0..n).rev() {
        data.copy_within(row * i..row * (i + 1), stride * tuple * i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_pack_unpack() {
        let (n, stride, tuple) = (4, 7, 2);
        let padded: Vec<u32> = (0..(n * stride * tuple) as u32).collect();

        let mut data = padded.clone();
        pack(&mut data, n, stride, tuple);
        for i in 0..n {
            let row = &data[i * n * tuple..(i + 1) * n * tuple];
            assert_eq!(row, &padded[i * stride * tuple..(i * stride + n) * tuple]);
        }

        unpack(&mut data, n, stride, tuple);
        for i in 0..n {
            let row = &data[i * stride * tuple..(i * stride + n) * tuple];
            assert_eq!(row, &padded[i * stride * tuple..(i * stride + n) * tuple]);
        }
    }
}
