//! In-place transposition of 2D arrays of fixed-width tuples
//!
//! This library treats Rust slices as flattened row-major 2D arrays whose cells are groups of
//! `N` scalars ("tuples", e.g. `N = 2` for complex numbers stored as pairs), and transposes them
//! in place, so that the row data becomes the column data, and vice versa, using at most a
//! bounded scratch buffer.
//! ```
//! // A 2x3 array of pairs, in row-major order
//! let mut array = vec![ 0, 1,   2, 3,   4, 5,
//!                       6, 7,   8, 9,  10, 11];
//!
//! tuplet::transpose_in_place(&mut array, 2, 3, 2).unwrap();
//!
//! // The rows have become the columns, and each pair stayed together
//! assert_eq!(array, vec![ 0, 1,   6, 7,
//!                         2, 3,   8, 9,
//!                         4, 5,  10, 11]);
//!
//! // Transposing the 3x2 result again gives back the original
//! tuplet::transpose_in_place(&mut array, 3, 2, 2).unwrap();
//! assert_eq!(array, (0..12).collect::<Vec<_>>());
//! ```
//!
//! Seven strategies are available, see [`Strategy`]. Square arrays are transposed with no
//! scratch at all. For non-square arrays there are three algorithms with different trade-offs:
//!
//! - GCD-block: cache-oblivious, scratch of `n * (m / gcd(n, m)) * N` elements.
//! - Cut: cache-oblivious, scratch of `min(n, m) * |n - m| * N` elements.
//! - Cycle following (TOMS 513): scratch of two tuples plus a small marker array, but slow.
//!
//! A host planner describes its request as a [`Problem`], asks every strategy whether it
//! applies with [`selector::candidates`], and executes the [`Plan`] it prefers. The building
//! blocks ([`block`], [`layout`], [`gcd`], [`cut`], [`toms513`]) are public too.

#![no_std]

extern crate alloc;

pub mod address;
pub mod block;
pub mod config;
pub mod cut;
mod error;
pub mod gcd;
pub mod layout;
mod plan;
pub mod problem;
pub mod selector;
mod simple;
mod strategy;
pub mod toms513;
mod tuple;

pub use config::{PlannerFlags, SelectorConfig};
pub use error::TransposeError;
pub use plan::Plan;
pub use problem::{IoDim, PickedDims, Problem};
pub use strategy::{Applicability, Strategy, CATALOG};

/// Transpose `data`, a tightly packed row-major `n` x `m` array of `tuple`-wide cells, into its
/// `m` x `n` transpose.
///
/// Uses [`selector::select`] with the default flags and configuration.
///
/// # Errors
///
/// [`TransposeError::OutOfMemory`] if a scratch buffer can't be allocated.
///
/// # Panics
///
/// If `data.len() < n * m * tuple`.
pub fn transpose_in_place<T: Copy + Default>(
    data: &mut [T],
    n: usize,
    m: usize,
    tuple: usize,
) -> Result<(), TransposeError> {
    let problem = Problem::matrix(n, m, tuple);
    let plan = selector::select(&problem, PlannerFlags::default(), &SelectorConfig::default())
        .ok_or(TransposeError::NotTransposable)?;
    plan.execute(data)
}
