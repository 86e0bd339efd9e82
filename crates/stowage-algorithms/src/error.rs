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

/// Resource-capacity failures a solve call can hit before doing any work.
///
/// These are fatal to the single call and share no state with other calls.
/// They are distinct from cancellation: an aborted search still produces a
/// best-effort outcome, a capacity failure produces none.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The exhaustive solver enumerates subsets through a 64-bit mask; an
    /// instance beyond that cannot be enumerated within the type, and no
    /// caller could wait for `2^64` subsets anyway.
    #[error("cannot enumerate subsets of {num_items} items: mask enumeration is limited to {max_items} items")]
    EnumerationCapacity {
        /// Items in the rejected instance.
        num_items: usize,
        /// The largest enumerable item count.
        max_items: usize,
    },

    /// The dynamic-programming table for this instance would not fit the
    /// address space.
    #[error("cannot allocate a dp table of {rows} rows x {columns} columns")]
    TableCapacity {
        /// Table rows (`num_items + 1`).
        rows: usize,
        /// Table columns (`effective budget + 1`), widened because the
        /// overflow being reported may not fit `usize`.
        columns: u128,
    },
}

#[cfg(test)]
mod tests {
    use super::SolverError;

    #[test]
    fn test_enumeration_capacity_message() {
        let err = SolverError::EnumerationCapacity {
            num_items: 80,
            max_items: 63,
        };
        assert_eq!(
            format!("{}", err),
            "cannot enumerate subsets of 80 items: mask enumeration is limited to 63 items"
        );
    }

    #[test]
    fn test_table_capacity_message() {
        let err = SolverError::TableCapacity {
            rows: 11,
            columns: 1 << 40,
        };
        assert!(format!("{}", err).contains("11 rows"));
    }
}
