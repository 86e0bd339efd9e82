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

//! The uniform result every algorithm reports at the boundary.
//!
//! Persistence and comparison layers consume these fields verbatim, so the
//! shape is identical across the five variants: the achieved total, the
//! selected indices, the two measurement fields, and the guarantee marker
//! that tells a proven optimum apart from a heuristic or cut-short answer.

use crate::algorithm::Algorithm;
use stowage_search::result::TerminationReason;

/// The guarantee attached to a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Guarantee {
    /// The total is proven maximal.
    Optimal,
    /// A heuristic ran to completion; the total may be below the optimum.
    Heuristic,
    /// The search was cancelled; the total is the best found before the
    /// cut, not a completed answer.
    BestEffort,
}

impl From<&TerminationReason> for Guarantee {
    fn from(reason: &TerminationReason) -> Self {
        match reason {
            TerminationReason::OptimalityProven => Guarantee::Optimal,
            TerminationReason::HeuristicCompleted => Guarantee::Heuristic,
            TerminationReason::Aborted(_) => Guarantee::BestEffort,
        }
    }
}

impl std::fmt::Display for Guarantee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Guarantee::Optimal => write!(f, "optimal"),
            Guarantee::Heuristic => write!(f, "heuristic"),
            Guarantee::BestEffort => write!(f, "best_effort"),
        }
    }
}

/// One algorithm run, reported uniformly. Created fresh per solve call and
/// never shared or mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmResult {
    /// The variant that produced this run.
    pub algorithm: Algorithm,
    /// The achieved total cost, `>= 0`.
    pub total_cost: i64,
    /// The selected item indices, strictly ascending and unique.
    pub indices: Vec<usize>,
    /// Wall-clock time of the solve call in milliseconds, `>= 0`.
    pub execution_time_ms: f64,
    /// Peak working-set megabytes of the solve call, clamped `>= 0`.
    pub memory_used_mb: f64,
    /// The optimality marker for this run.
    pub guarantee: Guarantee,
}

impl std::fmt::Display for AlgorithmResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AlgorithmResult({}, total_cost: {}, items: {}, {:.3} ms, {:.3} MB, {})",
            self.algorithm,
            self.total_cost,
            self.indices.len(),
            self.execution_time_ms,
            self.memory_used_mb,
            self.guarantee
        )
    }
}

/// Assembles an [`AlgorithmResult`] from an algorithm's raw output and the
/// profiler's measurements, clamping the measurement fields non-negative
/// at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultBuilder {
    algorithm: Algorithm,
    total_cost: i64,
    indices: Vec<usize>,
    execution_time_ms: f64,
    memory_used_mb: f64,
    guarantee: Guarantee,
}

impl ResultBuilder {
    /// Creates a new builder for a run of the given algorithm.
    #[inline]
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            total_cost: 0,
            indices: Vec::new(),
            execution_time_ms: 0.0,
            memory_used_mb: 0.0,
            guarantee: Guarantee::Optimal,
        }
    }

    /// Sets the achieved total cost.
    #[inline]
    pub fn total_cost(mut self, total_cost: i64) -> Self {
        self.total_cost = total_cost;
        self
    }

    /// Sets the selected indices.
    #[inline]
    pub fn indices(mut self, indices: Vec<usize>) -> Self {
        self.indices = indices;
        self
    }

    /// Sets the measured wall-clock milliseconds.
    #[inline]
    pub fn execution_time_ms(mut self, execution_time_ms: f64) -> Self {
        self.execution_time_ms = execution_time_ms;
        self
    }

    /// Sets the measured megabytes.
    #[inline]
    pub fn memory_used_mb(mut self, memory_used_mb: f64) -> Self {
        self.memory_used_mb = memory_used_mb;
        self
    }

    /// Sets the guarantee marker.
    #[inline]
    pub fn guarantee(mut self, guarantee: Guarantee) -> Self {
        self.guarantee = guarantee;
        self
    }

    /// Builds the result, clamping both measurement fields to `>= 0`.
    #[inline]
    pub fn build(self) -> AlgorithmResult {
        AlgorithmResult {
            algorithm: self.algorithm,
            total_cost: self.total_cost,
            indices: self.indices,
            execution_time_ms: self.execution_time_ms.max(0.0),
            memory_used_mb: self.memory_used_mb.max(0.0),
            guarantee: self.guarantee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_constructs_expected_result() {
        let result = ResultBuilder::new(Algorithm::Dp)
            .total_cost(42)
            .indices(vec![0, 3])
            .execution_time_ms(1.5)
            .memory_used_mb(0.25)
            .guarantee(Guarantee::Optimal)
            .build();

        assert_eq!(result.algorithm, Algorithm::Dp);
        assert_eq!(result.total_cost, 42);
        assert_eq!(result.indices, vec![0, 3]);
        assert_eq!(result.execution_time_ms, 1.5);
        assert_eq!(result.memory_used_mb, 0.25);
        assert_eq!(result.guarantee, Guarantee::Optimal);
    }

    #[test]
    fn test_build_clamps_negative_measurements() {
        let result = ResultBuilder::new(Algorithm::Greedy)
            .execution_time_ms(-0.001)
            .memory_used_mb(-0.5)
            .build();

        assert_eq!(result.execution_time_ms, 0.0);
        assert_eq!(result.memory_used_mb, 0.0);
    }

    #[test]
    fn test_guarantee_from_termination_reason() {
        assert_eq!(
            Guarantee::from(&TerminationReason::OptimalityProven),
            Guarantee::Optimal
        );
        assert_eq!(
            Guarantee::from(&TerminationReason::HeuristicCompleted),
            Guarantee::Heuristic
        );
        assert_eq!(
            Guarantee::from(&TerminationReason::Aborted("deadline".to_string())),
            Guarantee::BestEffort
        );
    }

    #[test]
    fn test_display_summarizes_run() {
        let result = ResultBuilder::new(Algorithm::Hybrid)
            .total_cost(30)
            .indices(vec![2])
            .build();
        let rendered = format!("{}", result);
        assert!(rendered.contains("hybrid"));
        assert!(rendered.contains("total_cost: 30"));
        assert!(rendered.contains("optimal"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_with_stable_keys() {
        let result = ResultBuilder::new(Algorithm::BruteForce)
            .total_cost(7)
            .indices(vec![1])
            .build();

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"algorithm\":\"brute_force\""));
        assert!(json.contains("\"total_cost\":7"));
        assert!(json.contains("\"guarantee\":\"optimal\""));
    }
}
