//! The catalog of in-place transpose strategies.
//!
//! Each strategy reports whether it can handle a [`Problem`] under the given planner flags and
//! how much scratch it needs. Choosing among the applicable ones is left to the caller; see
//! [`select`](crate::selector::select) for a simple default.

use core::fmt;

use crate::address::gcd;
use crate::config::{PlannerFlags, SelectorConfig};
use crate::plan::Plan;
use crate::problem::{ntuple_transposable, PickedDims, Problem};

/// An in-place transpose algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Double-loop square transpose of scalars with arbitrary strides.
    Simple,
    /// Double-loop square transpose of contiguous pairs.
    SimpleConsecPairs,
    /// Double-loop square transpose of tuples with any vector stride.
    SimpleVec,
    /// Cache-oblivious square transpose of contiguous tuples, rows possibly padded.
    RecSquare,
    /// Non-square transpose through blocks sized by the gcd of the dimensions.
    Gcd,
    /// Non-square transpose cutting off the leading square.
    Cut,
    /// Non-square transpose by cycle following, with a minimal buffer.
    Toms513,
}

/// Every strategy, in registration order.
pub const CATALOG: [Strategy; 7] = [
    Strategy::Simple,
    Strategy::SimpleConsecPairs,
    Strategy::SimpleVec,
    Strategy::RecSquare,
    Strategy::Gcd,
    Strategy::Cut,
    Strategy::Toms513,
];

/// A positive verdict of [`Strategy::applicable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applicability {
    pub dims: PickedDims,
    /// Scratch the strategy needs, in elements.
    pub buffer_len: usize,
}

impl Strategy {
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Simple => "transpose-simple",
            Strategy::SimpleConsecPairs => "transpose-simple-consecpairs",
            Strategy::SimpleVec => "transpose-simple-vec",
            Strategy::RecSquare => "transpose-recsq",
            Strategy::Gcd => "transpose-gcd",
            Strategy::Cut => "transpose-cut",
            Strategy::Toms513 => "transpose-toms513",
        }
    }

    /// Whether this strategy handles `problem` under `flags`, and with how much scratch.
    pub fn applicable(
        self,
        problem: &Problem,
        flags: PlannerFlags,
        config: &SelectorConfig,
    ) -> Option<Applicability> {
        let dims = problem.pick_dims()?;
        let all = problem.dims();
        let (d0, d1) = (all[dims.dim0], all[dims.dim1]);

        if !flags.allow_expensive {
            // vector loop in the wrong order for locality
            if problem.rank() == 3 && all[dims.dim2].is >= d0.is.max(d0.os) {
                return None;
            }
            if d0.n != d1.n {
                return None;
            }
        }

        let buffer_len = self.own_buffer_len(problem, dims, flags, config)?;

        if !config.buffer_ok(flags, buffer_len, problem.tensor_size()) {
            log::debug!(
                "{}: scratch of {buffer_len} elements is too big for {} cells",
                self.name(),
                problem.tensor_size()
            );
            return None;
        }
        Some(Applicability { dims, buffer_len })
    }

    /// Bind this strategy to `problem`, if it is applicable.
    pub fn plan(
        self,
        problem: &Problem,
        flags: PlannerFlags,
        config: &SelectorConfig,
    ) -> Option<Plan> {
        let verdict = self.applicable(problem, flags, config)?;
        let plan = Plan::new(self, problem, verdict);
        log::debug!("planned {plan}, {} scratch elements", plan.buffer_len());
        Some(plan)
    }

    /// The strategy's own precondition. Returns the scratch size when it holds.
    fn own_buffer_len(
        self,
        problem: &Problem,
        dims: PickedDims,
        flags: PlannerFlags,
        config: &SelectorConfig,
    ) -> Option<usize> {
        let all = problem.dims();
        let (d0, d1) = (&all[dims.dim0], &all[dims.dim1]);
        let (n, m) = (d0.n, d1.n);
        let (vl, vs) = problem.vector(dims);
        let rectangular = flags.allow_expensive && n != m && ntuple_transposable(d0, d1, vl, vs);

        match self {
            Strategy::Simple => {
                (problem.rank() == 2 && simple_ok(problem, dims, flags, config)).then_some(0)
            }
            Strategy::SimpleConsecPairs => (problem.rank() == 3
                && simple_ok(problem, dims, flags, config)
                && vl == 2
                && vs == 1)
                .then_some(0),
            Strategy::SimpleVec => (problem.rank() == 3
                && simple_ok(problem, dims, flags, config)
                && (flags.allow_expensive
                    || Strategy::SimpleConsecPairs
                        .own_buffer_len(problem, dims, flags, config)
                        .is_none()))
            .then_some(0),
            Strategy::RecSquare => (n == m && ntuple_transposable(d0, d1, vl, vs)).then_some(0),
            Strategy::Gcd => rectangular.then(|| n * (m / gcd(n, m).max(1)) * vl),
            Strategy::Cut => rectangular.then(|| n.min(m) * n.abs_diff(m) * vl),
            Strategy::Toms513 => rectangular.then(|| 2 * vl + (n + m).div_ceil(2)),
        }
    }
}

/// Square, and either small enough for a plain loop or strided so that nothing better applies.
fn simple_ok(
    problem: &Problem,
    dims: PickedDims,
    flags: PlannerFlags,
    config: &SelectorConfig,
) -> bool {
    let all = problem.dims();
    let n = all[dims.dim0].n;
    let (vl, vs) = problem.vector(dims);
    n == all[dims.dim1].n && (flags.allow_expensive || n * vl < config.ugly_cutoff || vs != 1)
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
