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

use stowage_algorithms::error::SolverError;
use stowage_model::error::InstanceError;
use thiserror::Error;

/// Everything a facade call can fail with.
///
/// Validation and key rejection are caller-side invalid requests;
/// [`SolveError::Solver`] wraps the resource-capacity failures of the
/// algorithms. Cancellation never appears here — an aborted search still
/// returns a result, flagged best-effort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The algorithm key is not one of the stable keys. An invalid
    /// request, surfaced before any solver runs.
    #[error("unknown algorithm key `{0}`")]
    UnknownAlgorithm(String),

    /// The input failed validation.
    #[error(transparent)]
    InvalidInstance(#[from] InstanceError),

    /// A solver hit a resource-capacity limit.
    #[error(transparent)]
    Solver(#[from] SolverError),
}

#[cfg(test)]
mod tests {
    use super::SolveError;
    use stowage_model::error::InstanceError;

    #[test]
    fn test_unknown_algorithm_message() {
        let err = SolveError::UnknownAlgorithm("simulated_annealing".to_string());
        assert_eq!(
            format!("{}", err),
            "unknown algorithm key `simulated_annealing`"
        );
    }

    #[test]
    fn test_instance_errors_convert_transparently() {
        let err: SolveError = InstanceError::NegativeCost { index: 0, cost: -2 }.into();
        assert_eq!(format!("{}", err), "item 0 has negative cost -2");
    }
}
