//! Error type for planning and executing transposes.
//!
//! Only conditions a caller can't rule out up front are reported here. Misuse, such as
//! handing a plan a slice that doesn't cover its array, panics instead.

/// Errors surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransposeError {
    /// A scratch buffer of this many elements could not be allocated.
    #[error("cannot allocate a scratch buffer of {0} elements")]
    OutOfMemory(usize),

    /// Transpose problems have two dimensions, plus an optional vector dimension.
    #[error("transpose problems have rank 2 or 3, got rank {0}")]
    InvalidRank(usize),

    /// No strategy in the catalog accepts the problem.
    #[error("no in-place transpose strategy is applicable")]
    NotTransposable,
}

/// Fallible `vec![elem; n]`, returning [`TransposeError::OutOfMemory`] from the enclosing
/// function when the allocation fails.
macro_rules! try_vec {
    ($elem:expr; $n:expr) => {{
        let mut v = alloc::vec::Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| $crate::error::TransposeError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;
