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

//! Uniform outcome types for every selection algorithm.
//!
//! A subset-selection instance is never infeasible: the empty selection is
//! always within budget. Every solve call therefore carries a selection;
//! what varies is the guarantee attached to it. `Optimal` means the
//! algorithm proved no feasible subset has a greater total. `Feasible`
//! means no such proof exists — either the algorithm is a heuristic that
//! ran to completion, or an exact search was aborted by a monitor before
//! it could finish. The [`TerminationReason`] distinguishes the two.

use crate::stats::SearchStatistics;
use num_traits::{PrimInt, Signed};
use stowage_model::selection::Selection;

/// The qualified answer of a solve call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult<T> {
    /// The selection is proven to achieve the maximal feasible total.
    Optimal(Selection<T>),
    /// The selection is feasible but optimality is not proven.
    Feasible(Selection<T>),
}

impl<T> SolveResult<T>
where
    T: PrimInt + Signed,
{
    /// Returns the carried selection regardless of the guarantee.
    #[inline]
    pub fn selection(&self) -> &Selection<T> {
        match self {
            SolveResult::Optimal(selection) | SolveResult::Feasible(selection) => selection,
        }
    }
}

impl<T> std::fmt::Display for SolveResult<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveResult::Optimal(selection) => {
                write!(f, "Optimal(total_cost={})", selection.total_cost())
            }
            SolveResult::Feasible(selection) => {
                write!(f, "Feasible(total_cost={})", selection.total_cost())
            }
        }
    }
}

/// Why the solve call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The search space was exhausted (or reasoned away); the answer is
    /// proven optimal.
    OptimalityProven,
    /// A heuristic ran to completion. Its answer carries no optimality
    /// proof even though nothing interrupted it.
    HeuristicCompleted,
    /// A monitor ordered termination before the search finished. The
    /// string names the trigger (time limit, node limit, interrupt).
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::HeuristicCompleted => write!(f, "Heuristic Completed"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Result of a solve call after termination: the qualified answer, why the
/// call ended, and the statistics gathered along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome<T> {
    result: SolveResult<T>,
    termination_reason: TerminationReason,
    statistics: SearchStatistics,
}

impl<T> SolveOutcome<T>
where
    T: PrimInt + Signed,
{
    /// An outcome whose selection is proven optimal.
    #[inline]
    pub fn optimal(selection: Selection<T>, statistics: SearchStatistics) -> Self {
        Self {
            result: SolveResult::Optimal(selection),
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    /// An outcome from a heuristic that completed without a proof.
    #[inline]
    pub fn heuristic(selection: Selection<T>, statistics: SearchStatistics) -> Self {
        Self {
            result: SolveResult::Feasible(selection),
            termination_reason: TerminationReason::HeuristicCompleted,
            statistics,
        }
    }

    /// An outcome cut short by a monitor, carrying the best selection found
    /// so far.
    #[inline]
    pub fn aborted<R>(selection: Selection<T>, reason: R, statistics: SearchStatistics) -> Self
    where
        R: Into<String>,
    {
        Self {
            result: SolveResult::Feasible(selection),
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the qualified answer.
    #[inline]
    pub fn result(&self) -> &SolveResult<T> {
        &self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the statistics of the call.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns the carried selection regardless of the guarantee.
    #[inline]
    pub fn selection(&self) -> &Selection<T> {
        self.result.selection()
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.result, SolveResult::Optimal(_))
    }

    #[inline]
    pub fn is_aborted(&self) -> bool {
        matches!(self.termination_reason, TerminationReason::Aborted(_))
    }

    /// Consumes the outcome, yielding its parts.
    #[inline]
    pub fn into_parts(self) -> (SolveResult<T>, TerminationReason, SearchStatistics) {
        (self.result, self.termination_reason, self.statistics)
    }
}

impl<T> std::fmt::Display for SolveOutcome<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SolveOutcome(result: {}, reason: {})",
            self.result, self.termination_reason
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowage_model::index::ItemIndex;

    type IntegerType = i64;

    fn selection(total: IntegerType, raw: &[usize]) -> Selection<IntegerType> {
        Selection::new(total, raw.iter().copied().map(ItemIndex::new).collect())
    }

    #[test]
    fn test_optimal_outcome() {
        let outcome = SolveOutcome::optimal(selection(30, &[2]), SearchStatistics::default());
        assert!(outcome.is_optimal());
        assert!(!outcome.is_aborted());
        assert_eq!(outcome.selection().total_cost(), 30);
        assert_eq!(
            *outcome.termination_reason(),
            TerminationReason::OptimalityProven
        );
    }

    #[test]
    fn test_heuristic_outcome_is_feasible_not_optimal() {
        let outcome = SolveOutcome::heuristic(selection(20, &[1]), SearchStatistics::default());
        assert!(!outcome.is_optimal());
        assert!(!outcome.is_aborted());
        assert_eq!(
            *outcome.termination_reason(),
            TerminationReason::HeuristicCompleted
        );
    }

    #[test]
    fn test_aborted_outcome_keeps_best_so_far() {
        let outcome = SolveOutcome::aborted(
            selection(10, &[0]),
            "time limit reached",
            SearchStatistics::default(),
        );
        assert!(outcome.is_aborted());
        assert!(!outcome.is_optimal());
        assert_eq!(outcome.selection().total_cost(), 10);
        match outcome.termination_reason() {
            TerminationReason::Aborted(reason) => assert_eq!(reason, "time limit reached"),
            other => panic!("expected Aborted, got {:?}", other),
        }
    }

    #[test]
    fn test_display_formats() {
        let outcome = SolveOutcome::optimal(selection(5, &[1]), SearchStatistics::default());
        assert_eq!(
            format!("{}", outcome),
            "SolveOutcome(result: Optimal(total_cost=5), reason: Optimality Proven)"
        );
    }
}
