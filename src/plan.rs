//! A strategy bound to the sizes and strides of one problem.

use core::fmt;

use crate::address::{block_extent, gcd};
use crate::block;
use crate::cut::transpose_cut;
use crate::error::{try_vec, TransposeError};
use crate::gcd::transpose_gcd;
use crate::problem::Problem;
use crate::simple::{transpose_simple, transpose_simple_pairs, transpose_simple_vec};
use crate::strategy::{Applicability, Strategy};
use crate::toms513::{marker_len, transpose_toms513};

/// Everything a strategy needs to run on one array.
///
/// Plans are cheap to build and keep no state between runs; scratch is allocated on each
/// [`execute`](Plan::execute) and freed before it returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    strategy: Strategy,
    n: usize,
    m: usize,
    s0: usize,
    s1: usize,
    vl: usize,
    vs: usize,
    nbuf: usize,
    // gcd of n and m, and the dimensions divided by it
    d: usize,
    nd: usize,
    md: usize,
    // row stride in tuples
    fd: usize,
}

impl Plan {
    pub(crate) fn new(strategy: Strategy, problem: &Problem, verdict: Applicability) -> Self {
        let dims = problem.dims();
        let (d0, d1) = (dims[verdict.dims.dim0], dims[verdict.dims.dim1]);
        let (vl, vs) = problem.vector(verdict.dims);
        let d = gcd(d0.n, d1.n).max(1);
        Self {
            strategy,
            n: d0.n,
            m: d1.n,
            s0: d0.is,
            s1: d1.is,
            vl,
            vs,
            nbuf: verdict.buffer_len,
            d,
            nd: d0.n / d,
            md: d1.n / d,
            fd: d0.is / vl.max(1),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Rows and columns of the array before the transpose.
    pub fn shape(&self) -> (usize, usize) {
        (self.n, self.m)
    }

    /// Tuple width.
    pub fn vector_len(&self) -> usize {
        self.vl
    }

    /// Scratch needed by [`execute`](Plan::execute), in elements.
    pub fn buffer_len(&self) -> usize {
        self.nbuf
    }

    /// Rough number of loads and stores: two of each per swapped pair of scalars.
    pub fn other_ops(&self) -> usize {
        2 * self.vl * self.n * self.m.saturating_sub(1)
    }

    /// Smallest slice the plan can run on.
    pub fn footprint(&self) -> usize {
        if self.n == 0 || self.m == 0 || self.vl == 0 {
            return 0;
        }
        match self.strategy {
            Strategy::Simple | Strategy::SimpleConsecPairs | Strategy::SimpleVec => {
                (self.n - 1) * self.s0 + (self.m - 1) * self.s1 + (self.vl - 1) * self.vs + 1
            }
            Strategy::RecSquare => block_extent(self.n, self.n, self.fd, self.vl),
            Strategy::Gcd | Strategy::Cut | Strategy::Toms513 => self.n * self.m * self.vl,
        }
    }

    /// Transpose `data` in place.
    ///
    /// # Errors
    ///
    /// [`TransposeError::OutOfMemory`] if the scratch buffer can't be allocated. `data` is left
    /// untouched in that case.
    ///
    /// # Panics
    ///
    /// If `data` is shorter than [`footprint`](Plan::footprint).
    pub fn execute<T: Copy + Default>(&self, data: &mut [T]) -> Result<(), TransposeError> {
        log::trace!("executing {self}");
        let len = self.footprint();
        assert!(
            data.len() >= len,
            "{self} needs {len} elements, the array has {}",
            data.len()
        );
        if len == 0 {
            return Ok(());
        }
        let (n, m, vl) = (self.n, self.m, self.vl);

        match self.strategy {
            Strategy::Simple => {
                assert!(n == m && vl == 1);
                transpose_simple(data, n, self.s0, self.s1);
            }
            Strategy::SimpleConsecPairs => {
                assert!(n == m && vl == 2 && self.vs == 1);
                transpose_simple_pairs(data, n, self.s0, self.s1);
            }
            Strategy::SimpleVec => {
                assert!(n == m);
                transpose_simple_vec(data, n, self.s0, self.s1, vl, self.vs);
            }
            Strategy::RecSquare => {
                assert!(self.vs == 1 && n == m && self.s1 == vl);
                block::transpose_square(data, 0, n, self.fd, vl);
            }
            Strategy::Gcd => {
                self.assert_contiguous();
                assert!(n == self.nd * self.d && m == self.md * self.d);
                let mut buf = try_vec![T::default(); self.nbuf];
                transpose_gcd(data, self.nd, self.md, self.d, vl, &mut buf);
            }
            Strategy::Cut => {
                self.assert_contiguous();
                let mut buf = try_vec![T::default(); self.nbuf];
                transpose_cut(data, n, m, vl, &mut buf);
            }
            Strategy::Toms513 => {
                self.assert_contiguous();
                let marks_len = marker_len(n, m);
                assert!(2 * vl + marks_len <= self.nbuf);
                let mut buf = try_vec![T::default(); 2 * vl];
                let mut marks = try_vec![false; marks_len];
                transpose_toms513(data, n, m, vl, &mut marks, &mut buf);
            }
        }
        Ok(())
    }

    fn assert_contiguous(&self) {
        assert!(
            self.vs == 1 && self.s1 == self.vl && self.s0 == self.m * self.vl,
            "{self} needs a tightly packed row-major array"
        );
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}-{}x{}", self.strategy.name(), self.n, self.m)?;
        if self.vl > 1 {
            write!(f, "-x{}", self.vl)?;
        }
        f.write_str(")")
    }
}
