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

//! # Pseudo-Polynomial Dynamic Program
//!
//! Classic subset-sum table over the capacity `b = max(budget, 0)`: cell
//! `(i, c)` holds the best achievable total `<= c` using the first `i`
//! items. Each cell additionally carries the minimum item count among the
//! subsets achieving that total; the count channel is what lets the
//! reconstruction honor the fewest-items tie-break instead of returning an
//! arbitrary optimal subset.
//!
//! Reconstruction walks the table backward from `(n, b)`, including item
//! `i - 1` whenever doing so preserves the cell's total and count. Walking
//! from the highest item down and preferring inclusion yields the
//! canonical answer: among minimum-count optima, the index set that is
//! lexicographically greatest from the top index downward.
//!
//! `O(n · b)` time and space — the full table is kept for reconstruction.
//! Always exact; the ground truth the other variants are tested against.

use crate::{
    error::SolverError,
    solver::{trivial_outcome, SubsetSolver},
};
use stowage_core::num::ops::checked_arithmetic::{CheckedAddVal, CheckedMulVal};
use stowage_model::{index::ItemIndex, instance::Instance, selection::Selection};
use stowage_search::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::SolverNumeric,
    result::SolveOutcome,
    stats::SearchStatistics,
};

/// The dynamic-programming solver. Exact whenever its table fits memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DpSolver;

/// The two channels of one table row set: best totals and the minimum item
/// counts achieving them.
struct Table<T> {
    totals: Vec<T>,
    counts: Vec<u32>,
    stride: usize,
}

impl<T> Table<T>
where
    T: SolverNumeric,
{
    fn new(rows: usize, stride: usize) -> Option<Self> {
        let cells = rows.checked_mul_val(stride)?;

        // Guard the byte size before allocating; a table this size failing
        // late would be an allocator abort instead of a clean error.
        let cell_bytes = std::mem::size_of::<T>().checked_add_val(std::mem::size_of::<u32>())?;
        cells.checked_mul_val(cell_bytes)?;

        Some(Self {
            totals: vec![T::zero(); cells],
            counts: vec![0u32; cells],
            stride,
        })
    }

    #[inline]
    fn at(&self, row: usize, capacity: usize) -> (T, u32) {
        let index = row * self.stride + capacity;
        (self.totals[index], self.counts[index])
    }

    #[inline]
    fn set(&mut self, row: usize, capacity: usize, total: T, count: u32) {
        let index = row * self.stride + capacity;
        self.totals[index] = total;
        self.counts[index] = count;
    }

    fn allocated_bytes(&self) -> usize {
        self.totals.capacity() * std::mem::size_of::<T>()
            + self.counts.capacity() * std::mem::size_of::<u32>()
    }
}

impl DpSolver {
    /// Creates a new `DpSolver`.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Walks the table backward from `(row, capacity)` and rebuilds the
    /// canonical optimal selection over the first `row` items.
    fn reconstruct<T>(instance: &Instance<T>, table: &Table<T>, row: usize, capacity: usize) -> Selection<T>
    where
        T: SolverNumeric,
    {
        let costs = instance.costs();
        let mut items = Vec::new();
        let mut remaining = capacity;

        for i in (1..=row).rev() {
            let (cell_total, cell_count) = table.at(i, remaining);
            let cost = costs[i - 1];
            let cost_capacity = cost.to_usize().unwrap_or(usize::MAX);

            if cost_capacity <= remaining {
                let (prev_total, prev_count) = table.at(i - 1, remaining - cost_capacity);
                if prev_total + cost == cell_total && prev_count + 1 == cell_count {
                    items.push(ItemIndex::new(i - 1));
                    remaining -= cost_capacity;
                    continue;
                }
            }
            // Excluding item i - 1 preserves the cell by construction.
        }

        items.reverse();
        let (total, _) = table.at(row, capacity);
        Selection::new(total, items)
    }
}

impl<T> SubsetSolver<T> for DpSolver
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "dp"
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
        let capacity = instance
            .effective_budget()
            .to_usize()
            .ok_or(SolverError::TableCapacity {
                rows: num_items + 1,
                columns: instance.effective_budget().to_u128().unwrap_or(u128::MAX),
            })?;

        let stride = capacity + 1;
        let rows = num_items + 1;
        let mut table = Table::<T>::new(rows, stride).ok_or(SolverError::TableCapacity {
            rows,
            columns: stride as u128,
        })?;

        let start_time = std::time::Instant::now();
        let mut statistics = SearchStatistics::default();
        statistics.record_memory_bytes(table.allocated_bytes());

        monitor.on_enter_search(instance);

        let costs = instance.costs();
        for i in 1..=num_items {
            monitor.on_step();
            statistics.on_node_explored();

            if let SearchCommand::Terminate(reason) = monitor.search_command() {
                // Rows 0..i-1 are complete; their best is a valid
                // best-effort answer over the first i-1 items.
                let selection = Self::reconstruct(instance, &table, i - 1, capacity);
                statistics.set_total_time(start_time.elapsed());
                monitor.on_exit_search();
                return Ok(SolveOutcome::aborted(selection, reason, statistics));
            }

            let cost = costs[i - 1];
            let cost_capacity = cost.to_usize().unwrap_or(usize::MAX);

            for c in 0..=capacity {
                let (exclude_total, exclude_count) = table.at(i - 1, c);

                if cost_capacity <= c {
                    let (prev_total, prev_count) = table.at(i - 1, c - cost_capacity);
                    // Within the table no sum exceeds the capacity, so the
                    // plain addition cannot overflow.
                    let include_total = prev_total + cost;
                    let include_count = prev_count + 1;

                    if include_total > exclude_total
                        || (include_total == exclude_total && include_count < exclude_count)
                    {
                        table.set(i, c, include_total, include_count);
                        continue;
                    }
                }

                table.set(i, c, exclude_total, exclude_count);
            }
        }

        let selection = Self::reconstruct(instance, &table, num_items, capacity);
        if !selection.is_empty() {
            statistics.on_incumbent();
            monitor.on_incumbent(&selection);
        }

        statistics.set_total_time(start_time.elapsed());
        monitor.on_exit_search();

        Ok(SolveOutcome::optimal(selection, statistics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowage_search::monitor::{no_op::NoOperationMonitor, node_limit::NodeLimitMonitor};

    type IntegerType = i64;

    fn solve(costs: Vec<IntegerType>, budget: IntegerType) -> SolveOutcome<IntegerType> {
        let instance = Instance::new(costs, budget).unwrap();
        DpSolver::new()
            .solve(&instance, &mut NoOperationMonitor::new())
            .unwrap()
    }

    fn raw_items(outcome: &SolveOutcome<IntegerType>) -> Vec<usize> {
        outcome.selection().items().iter().map(|i| i.get()).collect()
    }

    #[test]
    fn test_single_item_preferred_over_two_item_tie() {
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
        assert!(outcome.selection().is_empty());
    }

    #[test]
    fn test_trivial_cases() {
        assert!(solve(Vec::new(), 7).selection().is_empty());
        assert!(solve(vec![4, 5], -3).selection().is_empty());
    }

    #[test]
    fn test_fewest_items_wins_across_sizes() {
        // {0} reaches 3 alone; {1, 2} also reaches 3. One item wins.
        let outcome = solve(vec![3, 1, 2], 3);
        assert_eq!(outcome.selection().total_cost(), 3);
        assert_eq!(raw_items(&outcome), vec![0]);
    }

    #[test]
    fn test_zero_cost_items_are_not_padded_in() {
        let outcome = solve(vec![0, 7], 10);
        assert_eq!(outcome.selection().total_cost(), 7);
        assert_eq!(raw_items(&outcome), vec![1]);
    }

    #[test]
    fn test_exact_fill() {
        let outcome = solve(vec![2, 3, 7, 8], 10);
        assert_eq!(outcome.selection().total_cost(), 10);
        // {1, 2} and {0, 3} both reach 10 with two items; the set that is
        // greater from the top index down wins: {0, 3}.
        assert_eq!(raw_items(&outcome), vec![0, 3]);
    }

    #[test]
    fn test_cost_larger_than_budget_is_skipped() {
        let outcome = solve(vec![100, 3], 5);
        assert_eq!(outcome.selection().total_cost(), 3);
        assert_eq!(raw_items(&outcome), vec![1]);
    }

    #[test]
    fn test_node_limit_aborts_with_prefix_answer() {
        // One row per step: a limit of 1 completes no item row.
        let instance = Instance::new(vec![5, 6, 7], 10).unwrap();
        let mut monitor = NodeLimitMonitor::new(1);

        let outcome = DpSolver::new().solve(&instance, &mut monitor).unwrap();
        assert!(outcome.is_aborted());
        assert!(outcome.selection().total_cost() <= 10);
    }

    #[test]
    fn test_determinism() {
        let first = solve(vec![7, 3, 9, 2, 5], 14);
        let second = solve(vec![7, 3, 9, 2, 5], 14);
        assert_eq!(first.selection(), second.selection());
    }

    #[test]
    fn test_statistics_report_table_memory() {
        let outcome = solve(vec![1, 2, 3], 6);
        // (n + 1) * (b + 1) cells of (total, count) each.
        let expected_cells = 4 * 7;
        let expected_bytes = expected_cells
            * (std::mem::size_of::<IntegerType>() + std::mem::size_of::<u32>());
        assert_eq!(outcome.statistics().peak_memory_bytes, expected_bytes);
    }
}
