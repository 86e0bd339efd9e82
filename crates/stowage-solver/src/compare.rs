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

//! Side-by-side comparison of every variant on one instance.
//!
//! Each variant runs on the same instance and is scored against the exact
//! optimum (computed by the dynamic program): `accuracy = total_cost /
//! optimal_cost`. A zero or negative denominator — an instance whose
//! optimum is the empty selection — yields accuracy `0.0`, never a
//! division by zero.

use crate::{algorithm::Algorithm, error::SolveError, result::AlgorithmResult, solve::solve};

/// One row of a comparison: the uniform run result plus its score against
/// the exact optimum.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmComparison {
    /// The run, reported exactly as a single solve would report it.
    pub result: AlgorithmResult,
    /// `total_cost / optimal_cost`, or `0.0` when the optimum is zero.
    pub accuracy: f64,
}

/// Scores an achieved total against a reference total. Returns `0.0`
/// whenever the reference is zero or negative.
#[inline]
pub fn accuracy(total_cost: i64, reference_cost: i64) -> f64 {
    if reference_cost <= 0 {
        return 0.0;
    }
    total_cost as f64 / reference_cost as f64
}

/// Runs every algorithm on the instance and scores each against the exact
/// optimum.
///
/// # Errors
///
/// Fails on the first invalid input or solver capacity error; rows are
/// only reported for a comparison that ran in full.
pub fn compare_all(costs: &[i64], budget: i64) -> Result<Vec<AlgorithmComparison>, SolveError> {
    let optimal_cost = solve(Algorithm::Dp, costs, budget)?.total_cost;

    Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let result = solve(algorithm, costs, budget)?;
            let accuracy = accuracy(result.total_cost, optimal_cost);
            Ok(AlgorithmComparison { result, accuracy })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Guarantee;

    #[test]
    fn test_accuracy_guards_zero_and_negative_denominators() {
        assert_eq!(accuracy(5, 0), 0.0);
        assert_eq!(accuracy(5, -3), 0.0);
        assert_eq!(accuracy(5, 10), 0.5);
        assert_eq!(accuracy(10, 10), 1.0);
    }

    #[test]
    fn test_compare_all_reports_one_row_per_algorithm() {
        let rows = compare_all(&[10, 20, 30], 30).unwrap();
        assert_eq!(rows.len(), Algorithm::ALL.len());

        for (row, algorithm) in rows.iter().zip(Algorithm::ALL) {
            assert_eq!(row.result.algorithm, algorithm);
        }
    }

    #[test]
    fn test_exact_rows_score_full_accuracy() {
        let rows = compare_all(&[10, 20, 30], 30).unwrap();
        for row in &rows {
            if row.result.guarantee == Guarantee::Optimal {
                assert_eq!(row.accuracy, 1.0, "{}", row.result.algorithm);
                assert_eq!(row.result.total_cost, 30);
            }
        }
    }

    #[test]
    fn test_heuristic_row_scores_below_exact_optimum() {
        // Greedy reaches 7 where the optimum is 10.
        let rows = compare_all(&[7, 6, 4], 10).unwrap();
        let greedy_row = rows
            .iter()
            .find(|row| row.result.algorithm == Algorithm::Greedy)
            .unwrap();

        assert_eq!(greedy_row.result.total_cost, 7);
        assert!((greedy_row.accuracy - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_zero_optimum_scores_zero_accuracy() {
        let rows = compare_all(&[10, 20], 5).unwrap();
        for row in &rows {
            assert_eq!(row.result.total_cost, 0);
            assert_eq!(row.accuracy, 0.0);
        }
    }

    #[test]
    fn test_invalid_input_fails_the_whole_comparison() {
        assert!(compare_all(&[1, -2], 5).is_err());
    }
}
