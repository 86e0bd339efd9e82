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

//! # Exhaustive Mask Enumeration
//!
//! Enumerates every subset of the instance through an integer mask from
//! `0` to `2^n - 1`; the bits set in the mask select the items. Tracks the
//! best feasible total seen so far and, on an exact tie, replaces the
//! incumbent only when the candidate mask is canonically preferred: fewer
//! bits, or at equal bit count a numerically greater mask. For
//! equal-cardinality sets, numeric mask order coincides with comparing the
//! index sets from the highest index downward, so the mask comparison is
//! the canonical ordering.
//!
//! `O(2^n · n)` time, `O(n)` working memory. No internal bound on `n` is
//! enforced beyond the 64-bit mask itself; bounding the runtime is the
//! caller's responsibility, via the monitor polled on every mask.

use crate::{
    error::SolverError,
    solver::{trivial_outcome, SubsetSolver},
};
use stowage_model::{index::ItemIndex, instance::Instance, selection::Selection};
use stowage_search::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::SolverNumeric,
    result::SolveOutcome,
    stats::SearchStatistics,
};

/// The largest item count the 64-bit subset mask can enumerate.
pub const MAX_ENUMERATION_ITEMS: usize = 63;

/// The exhaustive solver. Exact on every instance it can enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BruteForceSolver;

impl BruteForceSolver {
    /// Creates a new `BruteForceSolver`.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Materializes the selection a mask describes, in ascending index
    /// order.
    fn selection_from_mask<T>(mask: u64, total: T) -> Selection<T>
    where
        T: SolverNumeric,
    {
        let mut items = Vec::with_capacity(mask.count_ones() as usize);
        let mut bits = mask;
        while bits != 0 {
            items.push(ItemIndex::new(bits.trailing_zeros() as usize));
            bits &= bits - 1;
        }
        Selection::new(total, items)
    }
}

impl<T> SubsetSolver<T> for BruteForceSolver
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "brute_force"
    }

    fn solve(
        &mut self,
        instance: &Instance<T>,
        monitor: &mut dyn SearchMonitor<T>,
    ) -> Result<SolveOutcome<T>, SolverError> {
        if let Some(outcome) = trivial_outcome(instance) {
            return Ok(outcome);
        }

        let num_items = instance.num_items();
        if num_items > MAX_ENUMERATION_ITEMS {
            return Err(SolverError::EnumerationCapacity {
                num_items,
                max_items: MAX_ENUMERATION_ITEMS,
            });
        }

        let start_time = std::time::Instant::now();
        let mut statistics = SearchStatistics::default();
        statistics.record_memory_bytes(num_items * std::mem::size_of::<ItemIndex>());

        monitor.on_enter_search(instance);

        let budget = instance.effective_budget();
        let costs = instance.costs();
        let num_masks: u64 = 1u64 << num_items;

        // The empty subset (mask 0) is the initial incumbent; every later
        // mask must beat it or tie it canonically.
        let mut best_mask: u64 = 0;
        let mut best_total = T::ZERO;
        let mut best_count: u32 = 0;

        let mut mask: u64 = 0;
        while mask < num_masks {
            monitor.on_step();
            statistics.on_node_explored();

            if let SearchCommand::Terminate(reason) = monitor.search_command() {
                statistics.set_total_time(start_time.elapsed());
                monitor.on_exit_search();
                return Ok(SolveOutcome::aborted(
                    Self::selection_from_mask(best_mask, best_total),
                    reason,
                    statistics,
                ));
            }

            // Accumulate the subset sum; totals only grow, so the first
            // overshoot proves infeasibility of the whole mask.
            let mut total = T::ZERO;
            let mut feasible = true;
            let mut bits = mask;
            while bits != 0 {
                let item = bits.trailing_zeros() as usize;
                total = total.saturating_add_val(costs[item]);
                if total > budget {
                    feasible = false;
                    break;
                }
                bits &= bits - 1;
            }

            if feasible {
                let count = mask.count_ones();
                let replaces = total > best_total
                    || (total == best_total
                        && (count < best_count || (count == best_count && mask > best_mask)));

                if replaces {
                    best_mask = mask;
                    best_total = total;
                    best_count = count;
                    statistics.on_incumbent();
                    monitor.on_incumbent(&Self::selection_from_mask(best_mask, best_total));
                }
            } else {
                statistics.on_pruning_infeasible();
            }

            mask += 1;
        }

        statistics.set_total_time(start_time.elapsed());
        monitor.on_exit_search();

        Ok(SolveOutcome::optimal(
            Self::selection_from_mask(best_mask, best_total),
            statistics,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowage_search::monitor::{no_op::NoOperationMonitor, node_limit::NodeLimitMonitor};
    use stowage_search::result::TerminationReason;

    type IntegerType = i64;

    fn solve(costs: Vec<IntegerType>, budget: IntegerType) -> SolveOutcome<IntegerType> {
        let instance = Instance::new(costs, budget).unwrap();
        BruteForceSolver::new()
            .solve(&instance, &mut NoOperationMonitor::new())
            .unwrap()
    }

    fn raw_items(outcome: &SolveOutcome<IntegerType>) -> Vec<usize> {
        outcome.selection().items().iter().map(|i| i.get()).collect()
    }

    #[test]
    fn test_single_item_preferred_over_two_item_tie() {
        // {2} and {0, 1} both reach 30; the single item is canonical.
        let outcome = solve(vec![10, 20, 30], 30);
        assert!(outcome.is_optimal());
        assert_eq!(outcome.selection().total_cost(), 30);
        assert_eq!(raw_items(&outcome), vec![2]);
    }

    #[test]
    fn test_budget_excludes_expensive_sets() {
        let outcome = solve(vec![10, 20, 30], 29);
        assert_eq!(outcome.selection().total_cost(), 20);
        assert_eq!(raw_items(&outcome), vec![1]);
    }

    #[test]
    fn test_equal_costs_prefer_highest_indices() {
        let outcome = solve(vec![5, 5, 5], 10);
        assert_eq!(outcome.selection().total_cost(), 10);
        assert_eq!(raw_items(&outcome), vec![1, 2]);
    }

    #[test]
    fn test_zero_budget_selects_nothing() {
        let outcome = solve(vec![10, 20, 30], 0);
        assert!(outcome.is_optimal());
        assert_eq!(outcome.selection().total_cost(), 0);
        assert!(outcome.selection().is_empty());
    }

    #[test]
    fn test_trivial_cases() {
        assert!(solve(Vec::new(), 50).selection().is_empty());
        assert!(solve(vec![1, 2, 3], -1).selection().is_empty());
    }

    #[test]
    fn test_zero_cost_items_are_not_padded_in() {
        // Including the free item would keep the total but grow the set;
        // the canonical answer leaves it out.
        let outcome = solve(vec![0, 7], 10);
        assert_eq!(outcome.selection().total_cost(), 7);
        assert_eq!(raw_items(&outcome), vec![1]);
    }

    #[test]
    fn test_too_many_items_is_a_capacity_error() {
        let instance = Instance::new(vec![1; 70], 10).unwrap();
        let err = BruteForceSolver::new()
            .solve(&instance, &mut NoOperationMonitor::<IntegerType>::new())
            .unwrap_err();
        assert_eq!(
            err,
            SolverError::EnumerationCapacity {
                num_items: 70,
                max_items: MAX_ENUMERATION_ITEMS
            }
        );
    }

    #[test]
    fn test_node_limit_aborts_with_best_so_far() {
        let instance = Instance::new(vec![3, 4, 5, 6], 18).unwrap();
        let mut monitor = NodeLimitMonitor::new(2);

        let outcome = BruteForceSolver::new().solve(&instance, &mut monitor).unwrap();
        assert!(outcome.is_aborted());
        assert!(!outcome.is_optimal());
        match outcome.termination_reason() {
            TerminationReason::Aborted(reason) => assert_eq!(reason, "node limit reached"),
            other => panic!("expected Aborted, got {:?}", other),
        }
        // The best-so-far selection is still feasible.
        assert!(outcome.selection().total_cost() <= 18);
    }

    #[test]
    fn test_determinism() {
        let first = solve(vec![7, 3, 9, 2, 5], 14);
        let second = solve(vec![7, 3, 9, 2, 5], 14);
        assert_eq!(first.selection(), second.selection());
    }

    #[test]
    fn test_statistics_count_all_masks() {
        let outcome = solve(vec![1, 2, 3], 6);
        // 2^3 masks enumerated.
        assert_eq!(outcome.statistics().nodes_explored, 8);
        assert!(outcome.statistics().incumbents_found > 0);
    }
}
