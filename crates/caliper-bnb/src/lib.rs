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

//! # Caliper BnB: branch-and-bound for verified global optimization
//!
//! High-level crate implementing a deterministic branch-and-bound search
//! over interval boxes. The solver separates pricing, feasibility testing,
//! and monitoring so problem definitions can be swapped without touching
//! the search logic.
//!
//! Core flow
//! - Describe the search with a `caliper_model::problem::Problem`.
//! - Implement an `eval::Objective` (range enclosure, optionally with a
//!   gradient enclosure) and an `eval::Constraint` (three-valued verdict).
//! - Optionally attach monitors for logging or instrumentation.
//! - Run `bnb::BnbSolver::solve`, or use the `bnb::optimize` entry point.
//!
//! Design highlights
//! - A LIFO worklist gives depth-first exploration with a small frontier.
//! - A bound tracker prunes boxes dominated by certainly-feasible evidence
//!   and accumulates the `[f_min, f_max]` bracket on the extremum.
//! - The gradient monotonicity shortcut certifies monotone boxes from two
//!   corner evaluations instead of bisecting them.
//! - Outcomes carry solution records, the bracket, a termination reason,
//!   and statistics including recovered enclosure failures.
//!
//! Module map
//! - `bnb`: the solver engine, session orchestration, and `optimize`.
//! - `bounds`: incumbent level and running bracket.
//! - `eval`: objective/constraint interfaces and adapters.
//! - `monitor`: search monitors (no-op, log, composite).
//! - `result`: solver outcomes with termination reasons.
//! - `stats`: lightweight counters and timing.

pub mod bnb;
pub mod bounds;
pub mod eval;
pub mod monitor;
pub mod result;
pub mod stats;
mod worklist;
