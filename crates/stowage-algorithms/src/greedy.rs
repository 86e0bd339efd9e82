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

//! # Greedy Heuristic
//!
//! Sorts the item indices by descending cost — breaking cost ties by
//! descending index, consistent with the canonical tie-break — and makes a
//! single pass, taking any item that still fits the effective budget.
//!
//! `O(n log n)` time, `O(n)` space, fully deterministic. Not guaranteed
//! optimal: its answer is reported as `HeuristicCompleted`, never as a
//! proof. It never exceeds the optimum, which the exact solvers verify in
//! the cross-checks.

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

/// The greedy solver. A deterministic heuristic with no optimality proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GreedySolver;

impl GreedySolver {
    /// Creates a new `GreedySolver`.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> SubsetSolver<T> for GreedySolver
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "greedy"
    }

    fn solve(
        &mut self,
        instance: &Instance<T>,
        monitor: &mut dyn SearchMonitor<T>,
    ) -> Result<SolveOutcome<T>, SolverError> {
        if let Some(outcome) = trivial_outcome(instance) {
            return Ok(outcome);
        }

        let start_time = std::time::Instant::now();
        let mut statistics = SearchStatistics::default();

        monitor.on_enter_search(instance);

        let budget = instance.effective_budget();
        let costs = instance.costs();
        let num_items = instance.num_items();

        let mut order: Vec<usize> = (0..num_items).collect();
        order.sort_unstable_by(|&a, &b| costs[b].cmp(&costs[a]).then(b.cmp(&a)));

        let mut picked: Vec<usize> = Vec::new();
        let mut total = T::ZERO;
        let mut aborted: Option<String> = None;

        for &index in &order {
            monitor.on_step();
            statistics.on_node_explored();

            if let SearchCommand::Terminate(reason) = monitor.search_command() {
                aborted = Some(reason);
                break;
            }

            let with_item = total.saturating_add_val(costs[index]);
            if with_item <= budget {
                total = with_item;
                picked.push(index);
            }
        }

        picked.sort_unstable();
        let selection = Selection::new(total, picked.into_iter().map(ItemIndex::new).collect());

        if !selection.is_empty() {
            statistics.on_incumbent();
            monitor.on_incumbent(&selection);
        }

        statistics.record_memory_bytes(
            num_items * std::mem::size_of::<usize>()
                + selection.num_items() * std::mem::size_of::<ItemIndex>(),
        );
        statistics.set_total_time(start_time.elapsed());
        monitor.on_exit_search();

        match aborted {
            Some(reason) => Ok(SolveOutcome::aborted(selection, reason, statistics)),
            None => Ok(SolveOutcome::heuristic(selection, statistics)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowage_search::monitor::no_op::NoOperationMonitor;
    use stowage_search::result::TerminationReason;

    type IntegerType = i64;

    fn solve(costs: Vec<IntegerType>, budget: IntegerType) -> SolveOutcome<IntegerType> {
        let instance = Instance::new(costs, budget).unwrap();
        GreedySolver::new()
            .solve(&instance, &mut NoOperationMonitor::new())
            .unwrap()
    }

    fn raw_items(outcome: &SolveOutcome<IntegerType>) -> Vec<usize> {
        outcome.selection().items().iter().map(|i| i.get()).collect()
    }

    #[test]
    fn test_takes_expensive_items_first() {
        // Descending order: 30, 20, 10. The 30 fits, the 20 does not
        // (30 + 20 > 40), the 10 does.
        let outcome = solve(vec![10, 20, 30], 40);
        assert_eq!(outcome.selection().total_cost(), 40);
        assert_eq!(raw_items(&outcome), vec![0, 2]);
        assert_eq!(
            *outcome.termination_reason(),
            TerminationReason::HeuristicCompleted
        );
    }

    #[test]
    fn test_single_expensive_item_on_tight_budget() {
        let outcome = solve(vec![10, 20, 30], 30);
        assert_eq!(outcome.selection().total_cost(), 30);
        assert_eq!(raw_items(&outcome), vec![2]);
    }

    #[test]
    fn test_cost_ties_prefer_higher_index() {
        let outcome = solve(vec![5, 5, 5], 10);
        assert_eq!(outcome.selection().total_cost(), 10);
        assert_eq!(raw_items(&outcome), vec![1, 2]);
    }

    #[test]
    fn test_not_optimal_on_adversarial_instance() {
        // Greedy takes the 7 and is stuck at 7; the optimum is 6 + 4 = 10.
        let outcome = solve(vec![7, 6, 4], 10);
        assert_eq!(outcome.selection().total_cost(), 7);
        assert_eq!(raw_items(&outcome), vec![0]);
        assert!(!outcome.is_optimal());
    }

    #[test]
    fn test_zero_budget_selects_nothing_costly() {
        let outcome = solve(vec![10, 20, 30], 0);
        assert_eq!(outcome.selection().total_cost(), 0);
        assert!(outcome.selection().is_empty());
    }

    #[test]
    fn test_trivial_cases() {
        assert!(solve(Vec::new(), 10).selection().is_empty());
        assert!(solve(vec![1, 2], -4).selection().is_empty());
    }

    #[test]
    fn test_skips_too_expensive_and_continues() {
        // 9 fits, 8 does not (9 + 8 > 12), 3 does.
        let outcome = solve(vec![3, 8, 9], 12);
        assert_eq!(outcome.selection().total_cost(), 12);
        assert_eq!(raw_items(&outcome), vec![0, 2]);
    }

    #[test]
    fn test_determinism() {
        let first = solve(vec![7, 3, 9, 2, 5], 14);
        let second = solve(vec![7, 3, 9, 2, 5], 14);
        assert_eq!(first.selection(), second.selection());
    }
}
