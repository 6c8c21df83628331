//! Strategy selection.
//!
//! [`candidates`] is the full report a host planner needs to run its own cost search;
//! [`select`] is a simple default policy for callers without one.

use crate::config::{PlannerFlags, SelectorConfig};
use crate::plan::Plan;
use crate::problem::Problem;
use crate::strategy::{Strategy, CATALOG};

/// Every applicable strategy bound to `problem`, in catalog order.
pub fn candidates<'a>(
    problem: &'a Problem,
    flags: PlannerFlags,
    config: &'a SelectorConfig,
) -> impl Iterator<Item = Plan> + 'a {
    CATALOG
        .into_iter()
        .filter_map(move |strategy| strategy.plan(problem, flags, config))
}

/// The applicable plan with the smallest scratch buffer, ties going to the earlier catalog
/// entry. Cycle following always has the smallest buffer but is by far the slowest, so it is
/// only picked when nothing else applies or when `flags.conserve_memory` is set.
pub fn select(problem: &Problem, flags: PlannerFlags, config: &SelectorConfig) -> Option<Plan> {
    let best = candidates(problem, flags, config).min_by_key(|plan| {
        let last_resort = plan.strategy() == Strategy::Toms513 && !flags.conserve_memory;
        (last_resort, plan.buffer_len())
    });
    match &best {
        Some(plan) => log::debug!("selected {plan}"),
        None => log::debug!("no strategy applies to {:?}", problem.dims()),
    }
    best
}
