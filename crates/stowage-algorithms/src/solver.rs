// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The contract every selection algorithm implements.

use crate::error::SolverError;
use stowage_model::{instance::Instance, selection::Selection};
use stowage_search::{
    monitor::search_monitor::SearchMonitor, num::SolverNumeric, result::SolveOutcome,
    stats::SearchStatistics,
};

/// A budget-constrained subset-selection algorithm.
///
/// Implementations are pure with respect to the instance: they never mutate
/// it and hold no state that outlives a call, so concurrent solves on
/// different instances need no coordination. The monitor is polled once per
/// search step; when it orders termination, the solver returns its
/// best-so-far selection in an outcome marked as aborted.
pub trait SubsetSolver<T>
where
    T: SolverNumeric,
{
    /// The stable key of this algorithm (`"dp"`, `"greedy"`, ...), used by
    /// orchestration layers to select and label runs.
    fn name(&self) -> &str;

    /// Solves the instance.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] when the instance exceeds the algorithm's
    /// resource capacity. Cancellation is not an error: it yields an
    /// aborted outcome.
    fn solve(
        &mut self,
        instance: &Instance<T>,
        monitor: &mut dyn SearchMonitor<T>,
    ) -> Result<SolveOutcome<T>, SolverError>;
}

impl<T> std::fmt::Debug for dyn SubsetSolver<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SubsetSolver({})", self.name())
    }
}

/// Short-circuits the trivial cases every algorithm shares: no items, or a
/// negative budget. Returns the proven-optimal empty selection without
/// touching the monitor or any algorithm-specific logic, so the zero-cost
/// behavior is identical across all variants by construction.
#[inline]
pub(crate) fn trivial_outcome<T>(instance: &Instance<T>) -> Option<SolveOutcome<T>>
where
    T: SolverNumeric,
{
    if instance.is_trivial() {
        Some(SolveOutcome::optimal(
            Selection::empty(),
            SearchStatistics::default(),
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::trivial_outcome;
    use stowage_model::instance::Instance;

    type IntegerType = i64;

    #[test]
    fn test_trivial_outcome_for_empty_costs() {
        let instance = Instance::<IntegerType>::new(Vec::new(), 100).unwrap();
        let outcome = trivial_outcome(&instance).expect("empty costs are trivial");
        assert!(outcome.is_optimal());
        assert_eq!(outcome.selection().total_cost(), 0);
        assert!(outcome.selection().is_empty());
    }

    #[test]
    fn test_trivial_outcome_for_negative_budget() {
        let instance = Instance::<IntegerType>::new(vec![1, 2, 3], -10).unwrap();
        let outcome = trivial_outcome(&instance).expect("negative budget is trivial");
        assert!(outcome.is_optimal());
        assert!(outcome.selection().is_empty());
    }

    #[test]
    fn test_no_trivial_outcome_for_zero_budget() {
        let instance = Instance::<IntegerType>::new(vec![1, 2, 3], 0).unwrap();
        assert!(trivial_outcome(&instance).is_none());
    }
}
