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

//! # Caliper Model
//!
//! Problem modeling types for the Caliper optimizer: the n-dimensional
//! [`region::IntervalBox`] search region, the validated [`problem::Problem`]
//! description, and the immutable [`solution::SolutionRecord`] the engine
//! hands back for every surviving box.
//!
//! ## Modules
//!
//! - `region`: interval boxes with width/volume measures, widest-dimension
//!   bisection, midpoint and corner extraction, and hulls.
//! - `problem`: the optimization direction and the validated run parameters.
//! - `solution`: terminal box classifications and solution records with
//!   gradient-certificate metadata.

pub mod problem;
pub mod region;
pub mod solution;
