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

//! # Stowage Core
//!
//! Foundational numeric and indexing primitives for the Stowage
//! subset-selection ecosystem. This crate consolidates the reusable
//! building blocks that underpin the model, search, and solver crates.
//!
//! ## Modules
//!
//! - `num`: Integer-centric utilities including associated constant traits
//!   (`MinusOne`, `Zero`, `PlusOne`) and by-value arithmetic traits for
//!   checked (`Option<T>`) and saturating operations.
//! - `utils`: Phantom-tagged, strongly typed indices (`TypedIndex<T>`) that
//!   keep item identities from mixing with other index spaces.
//!
//! ## Purpose
//!
//! These primitives enable robust, generic code in the selection algorithms,
//! reducing accidental bugs (index mixing, silent overflow during subset
//! accumulation) while keeping runtime overhead minimal.

pub mod num;
pub mod utils;
