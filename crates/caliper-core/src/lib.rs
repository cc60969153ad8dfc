// Copyright (c) 2025 The Caliper Authors.
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

//! # Caliper Core
//!
//! The verified-numerics kernel of the Caliper workspace: closed real
//! intervals with conservative, outward-rounded arithmetic, a three-valued
//! logic for predicates over intervals, and rigorous enclosures of the common
//! mathematical functions.
//!
//! ## Modules
//!
//! - `interval`: the [`interval::Interval`] value type with factory
//!   construction, arithmetic/set operators, interval ordering, measures,
//!   splitting, and conservative formatting.
//! - `truth`: the Kleene three-valued [`truth::Truth`] logic used to report
//!   whether a predicate holds over an interval.
//! - `math`: enclosure functions (`abs`, `sqrt`, `exp`, `ln`, `log`, `sin`,
//!   `cos`, `pown`, `sqr`) plus the removable-singularity `xlog` operator and
//!   its slope enclosure, with per-run failure diagnostics.
//! - `num`: outward rounding primitives and rigorous constant enclosures.
//!
//! ## Guarantee
//!
//! For any operation and any real inputs drawn from the operand intervals,
//! the true real result lies in the returned interval: every computed bound
//! is nudged one representable step outward, so floating point rounding can
//! reduce tightness but never correctness.

pub mod interval;
pub mod math;
pub mod num;
pub mod truth;
