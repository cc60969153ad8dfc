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

//! Search monitoring interface.
//!
//! Declares the [`SearchMonitor`] trait for observing a branch-and-bound
//! run. The solver invokes the callbacks across the run lifecycle and emits
//! a [`Progress`] snapshot after every box decision; monitors observe only
//! and cannot influence execution (cancellation is budget-based, not
//! cooperative).
//!
//! All callbacks except `name` default to no-ops, so a monitor implements
//! only the events it cares about. Keep callbacks lightweight; they run in
//! the hot loop.

use crate::stats::SolverStatistics;
use caliper_model::problem::Problem;
use caliper_model::region::IntervalBox;
use caliper_model::solution::Classification;

/// A progress snapshot emitted after each box decision.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Progress {
    /// Absolute precision estimate of the current bracket (`f_max - f_min`).
    pub precision: f64,
    /// Lower end of the bracket.
    pub f_min: f64,
    /// Upper end of the bracket.
    pub f_max: f64,
    /// Cumulative number of boxes explored.
    pub explored: u64,
}

/// Trait for observing the search process of the solver.
pub trait SearchMonitor {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called when the search starts.
    fn on_enter_search(&mut self, _problem: &Problem) {}

    /// Called when a box receives its terminal classification.
    fn on_box_classified(
        &mut self,
        _region: &IntervalBox,
        _classification: Classification,
        _statistics: &SolverStatistics,
    ) {
    }

    /// Called when a box is split along `dimension`.
    fn on_bisect(&mut self, _region: &IntervalBox, _dimension: usize, _statistics: &SolverStatistics) {
    }

    /// Called when the monotonicity shortcut certifies a box with the given
    /// sign-combination mask.
    fn on_certificate(
        &mut self,
        _region: &IntervalBox,
        _combination: usize,
        _statistics: &SolverStatistics,
    ) {
    }

    /// Called after every box decision with the current bounds snapshot.
    fn on_progress(&mut self, _progress: &Progress) {}

    /// Called when the search ends.
    fn on_exit_search(&mut self, _statistics: &SolverStatistics) {}
}

impl<'a> std::fmt::Debug for (dyn SearchMonitor + 'a) {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl<'a> std::fmt::Display for (dyn SearchMonitor + 'a) {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}
