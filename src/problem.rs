//! Description of a transpose request as the host planner hands it over.
//!
//! A request is a list of two or three dimensions, each with a size and an input and output
//! stride. Two of them are the axes being exchanged; the optional third one repeats the 2D
//! pattern and, when its stride is 1, makes each cell a contiguous tuple.

use crate::error::TransposeError;

/// One dimension of a transpose problem: `n` indices, `is` scalars apart in the input and `os`
/// scalars apart in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IoDim {
    pub n: usize,
    pub is: usize,
    pub os: usize,
}

impl IoDim {
    pub const fn new(n: usize, is: usize, os: usize) -> Self {
        Self { n, is, os }
    }
}

/// An in-place transpose request of rank 2 or 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Problem {
    dims: [IoDim; 3],
    rank: usize,
}

/// The two exchanged dimensions and the vector dimension picked from a [`Problem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickedDims {
    pub dim0: usize,
    pub dim1: usize,
    pub dim2: usize,
}

impl Problem {
    /// Build a problem from its dimensions.
    ///
    /// # Errors
    ///
    /// [`TransposeError::InvalidRank`] unless there are two or three dimensions.
    pub fn new(dims: &[IoDim]) -> Result<Self, TransposeError> {
        if !(2..=3).contains(&dims.len()) {
            return Err(TransposeError::InvalidRank(dims.len()));
        }
        let mut all = [IoDim::new(1, 0, 0); 3];
        all[..dims.len()].copy_from_slice(dims);
        Ok(Self {
            dims: all,
            rank: dims.len(),
        })
    }

    /// A tightly packed row-major `n` x `m` array of `tuple`-wide cells, to be turned into its
    /// `m` x `n` transpose.
    pub fn matrix(n: usize, m: usize, tuple: usize) -> Self {
        if tuple == 1 {
            Self {
                dims: [IoDim::new(n, m, 1), IoDim::new(m, 1, n), IoDim::new(1, 0, 0)],
                rank: 2,
            }
        } else {
            Self {
                dims: [
                    IoDim::new(n, m * tuple, tuple),
                    IoDim::new(m, tuple, n * tuple),
                    IoDim::new(tuple, 1, 1),
                ],
                rank: 3,
            }
        }
    }

    /// An `n` x `n` array of `tuple`-wide cells whose rows start `stride` cells apart.
    pub fn padded_square(n: usize, stride: usize, tuple: usize) -> Self {
        let row = stride * tuple;
        if tuple == 1 {
            Self {
                dims: [IoDim::new(n, row, 1), IoDim::new(n, 1, row), IoDim::new(1, 0, 0)],
                rank: 2,
            }
        } else {
            Self {
                dims: [
                    IoDim::new(n, row, tuple),
                    IoDim::new(n, tuple, row),
                    IoDim::new(tuple, 1, 1),
                ],
                rank: 3,
            }
        }
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn dims(&self) -> &[IoDim] {
        &self.dims[..self.rank]
    }

    /// Total number of cells, vector dimension included.
    pub fn tensor_size(&self) -> usize {
        self.dims().iter().map(|d| d.n).product()
    }

    /// Find the two dimensions to exchange. Every ordered pair is tried in turn; the remaining
    /// dimension, if any, must have matching input and output strides.
    pub fn pick_dims(&self) -> Option<PickedDims> {
        for dim0 in 0..self.rank {
            for dim1 in 0..self.rank {
                if dim0 == dim1 {
                    continue;
                }
                let dim2 = 3 - dim0 - dim1;
                let picked = PickedDims { dim0, dim1, dim2 };
                let (vl, vs) = self.vector(picked);
                if (self.rank == 2 || self.dims[dim2].is == self.dims[dim2].os)
                    && transposable(&self.dims[dim0], &self.dims[dim1], vl, vs)
                {
                    return Some(picked);
                }
            }
        }
        None
    }

    /// Vector length and stride: the tuple width and the distance between tuple slots.
    pub fn vector(&self, picked: PickedDims) -> (usize, usize) {
        if self.rank == 2 {
            (1, 1)
        } else {
            let d = &self.dims[picked.dim2];
            (d.n, d.is)
        }
    }
}

/// Whether `a` and `b` are the first and second dimension of a transpose of contiguous
/// `vl`-tuples, one of the layouts the block routines handle directly.
pub fn ntuple_transposable(a: &IoDim, b: &IoDim, vl: usize, vs: usize) -> bool {
    vs == 1
        && b.is == vl
        && a.os == vl
        && ((a.n == b.n && a.is == b.os && a.is >= b.n * vl && a.is % vl == 0)
            || (a.is == b.n * vl && b.os == a.n * vl))
}

/// Whether `a` and `b` are the first and second dimension of a transpose of tuples with vector
/// length `vl` and stride `vs`.
pub fn transposable(a: &IoDim, b: &IoDim, vl: usize, vs: usize) -> bool {
    (a.n == b.n && a.os == b.is && a.is == b.os) || ntuple_transposable(a, b, vl, vs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_is_checked() {
        assert_eq!(
            Problem::new(&[IoDim::new(4, 1, 4)]),
            Err(TransposeError::InvalidRank(1))
        );
        assert!(Problem::new(&[IoDim::new(4, 4, 1), IoDim::new(4, 1, 4)]).is_ok());
    }

    #[test]
    fn test_pick_dims_on_matrix() {
        let p = Problem::matrix(6, 4, 2);
        let picked = p.pick_dims().unwrap();
        assert_eq!((picked.dim0, picked.dim1, picked.dim2), (0, 1, 2));
        assert_eq!(p.vector(picked), (2, 1));
        assert_eq!(p.tensor_size(), 48);
    }

    #[test]
    fn test_pick_dims_finds_swapped_order() {
        // same 6 x 4 scalar transpose with the dimensions listed the other way round
        let p = Problem::new(&[IoDim::new(4, 1, 6), IoDim::new(6, 4, 1)]).unwrap();
        let picked = p.pick_dims().unwrap();
        assert_eq!((picked.dim0, picked.dim1), (1, 0));
    }

    #[test]
    fn test_not_a_transpose() {
        // output strides identical to input strides: a copy, not a transpose
        let p = Problem::new(&[IoDim::new(6, 4, 4), IoDim::new(4, 1, 1)]).unwrap();
        assert!(p.pick_dims().is_none());
    }

    #[test]
    fn test_overlapping_rows_are_rejected() {
        let a = IoDim::new(3, 4, 2);
        let b = IoDim::new(3, 2, 4);
        assert!(!ntuple_transposable(&a, &b, 2, 1));
    }
}
