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

use thiserror::Error;

/// Validation failures raised while constructing an
/// [`Instance`](crate::instance::Instance).
///
/// A negative budget is deliberately absent: it is a defined trivial case
/// (the empty selection is the answer), not a malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    /// An item cost was negative. Costs are magnitudes; a negative cost has
    /// no meaning in the selection model and is rejected immediately.
    #[error("item {index} has negative cost {cost}")]
    NegativeCost {
        /// Position of the offending cost in the input sequence.
        index: usize,
        /// The offending cost, widened for reporting.
        cost: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::InstanceError;

    #[test]
    fn test_negative_cost_message_names_item_and_value() {
        let err = InstanceError::NegativeCost { index: 3, cost: -7 };
        assert_eq!(format!("{}", err), "item 3 has negative cost -7");
    }
}
