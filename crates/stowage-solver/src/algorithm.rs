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

//! Algorithm selection by stable string key.
//!
//! Orchestration layers address the variants by key:
//! `brute_force | dp | greedy | backtracking | hybrid`. The keys are part
//! of the public contract — they appear in requests, persisted runs, and
//! comparison rows — so they never change spelling.

use crate::error::SolveError;
use rustc_hash::FxHashMap;
use std::str::FromStr;
use std::sync::OnceLock;
use stowage_algorithms::{
    backtracking::BacktrackingSolver, brute_force::BruteForceSolver, dp::DpSolver,
    greedy::GreedySolver, hybrid::HybridSolver, solver::SubsetSolver,
};
use stowage_search::num::SolverNumeric;

/// The five algorithm variants, addressable by stable key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    BruteForce,
    Dp,
    Greedy,
    Backtracking,
    Hybrid,
}

impl Algorithm {
    /// Every variant, in the order comparison rows are reported.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::BruteForce,
        Algorithm::Dp,
        Algorithm::Greedy,
        Algorithm::Backtracking,
        Algorithm::Hybrid,
    ];

    /// Returns the stable string key of this variant.
    #[inline]
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::BruteForce => "brute_force",
            Algorithm::Dp => "dp",
            Algorithm::Greedy => "greedy",
            Algorithm::Backtracking => "backtracking",
            Algorithm::Hybrid => "hybrid",
        }
    }

    /// Constructs a fresh solver for this variant.
    pub fn solver<T>(self) -> Box<dyn SubsetSolver<T>>
    where
        T: SolverNumeric + 'static,
    {
        match self {
            Algorithm::BruteForce => Box::new(BruteForceSolver::new()),
            Algorithm::Dp => Box::new(DpSolver::new()),
            Algorithm::Greedy => Box::new(GreedySolver::new()),
            Algorithm::Backtracking => Box::new(BacktrackingSolver::new()),
            Algorithm::Hybrid => Box::new(HybridSolver::new()),
        }
    }

    fn registry() -> &'static FxHashMap<&'static str, Algorithm> {
        static REGISTRY: OnceLock<FxHashMap<&'static str, Algorithm>> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            Algorithm::ALL
                .iter()
                .map(|&algorithm| (algorithm.key(), algorithm))
                .collect()
        })
    }
}

impl FromStr for Algorithm {
    type Err = SolveError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::registry()
            .get(key)
            .copied()
            .ok_or_else(|| SolveError::UnknownAlgorithm(key.to_string()))
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_stable() {
        assert_eq!(Algorithm::BruteForce.key(), "brute_force");
        assert_eq!(Algorithm::Dp.key(), "dp");
        assert_eq!(Algorithm::Greedy.key(), "greedy");
        assert_eq!(Algorithm::Backtracking.key(), "backtracking");
        assert_eq!(Algorithm::Hybrid.key(), "hybrid");
    }

    #[test]
    fn test_every_key_round_trips() {
        for algorithm in Algorithm::ALL {
            let parsed: Algorithm = algorithm.key().parse().unwrap();
            assert_eq!(parsed, algorithm);
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = "anneal".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, SolveError::UnknownAlgorithm("anneal".to_string()));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        assert!("DP".parse::<Algorithm>().is_err());
        assert!("Brute_Force".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_display_matches_key() {
        for algorithm in Algorithm::ALL {
            assert_eq!(format!("{}", algorithm), algorithm.key());
        }
    }

    #[test]
    fn test_solver_factory_names_match_keys() {
        for algorithm in Algorithm::ALL {
            let solver = algorithm.solver::<i64>();
            assert_eq!(solver.name(), algorithm.key());
        }
    }
}
