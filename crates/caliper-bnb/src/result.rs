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

//! Solver outcomes.
//!
//! A [`SolveOutcome`] carries the retained solution records (accepted and
//! undetermined boxes), the final objective bracket, why the run stopped,
//! and its statistics. A budget-exhausted run returns the partition explored
//! so far; that is a documented approximation, not a failure.

use crate::stats::SolverStatistics;
use caliper_core::interval::Interval;
use caliper_model::region::IntervalBox;
use caliper_model::solution::SolutionRecord;

/// Why a solver run stopped.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TerminationReason {
    /// The worklist drained: every box was classified.
    Complete,
    /// The iteration budget ran out with boxes still pending.
    BudgetExhausted,
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::Complete => write!(f, "Complete"),
            TerminationReason::BudgetExhausted => write!(f, "Budget exhausted"),
        }
    }
}

/// The result of one branch-and-bound run.
#[derive(Clone, Debug)]
pub struct SolveOutcome {
    solutions: Vec<SolutionRecord>,
    f_min: f64,
    f_max: f64,
    reason: TerminationReason,
    statistics: SolverStatistics,
}

impl SolveOutcome {
    /// Assembles an outcome from a finished session.
    pub fn new(
        solutions: Vec<SolutionRecord>,
        f_min: f64,
        f_max: f64,
        reason: TerminationReason,
        statistics: SolverStatistics,
    ) -> Self {
        Self {
            solutions,
            f_min,
            f_max,
            reason,
            statistics,
        }
    }

    /// Returns the retained solution records.
    #[inline]
    pub fn solutions(&self) -> &[SolutionRecord] {
        &self.solutions
    }

    /// Consumes the outcome and returns the solution records.
    #[inline]
    pub fn into_solutions(self) -> Vec<SolutionRecord> {
        self.solutions
    }

    /// Returns the lower end of the objective bracket.
    #[inline]
    pub fn f_min(&self) -> f64 {
        self.f_min
    }

    /// Returns the upper end of the objective bracket.
    #[inline]
    pub fn f_max(&self) -> f64 {
        self.f_max
    }

    /// Returns the objective bracket as an interval, or
    /// [`Interval::EMPTY`] if no box was retained.
    pub fn bracket(&self) -> Interval {
        if self.f_max < self.f_min {
            Interval::EMPTY
        } else {
            Interval::from_inf_sup(self.f_min, self.f_max)
        }
    }

    /// Returns the absolute precision estimate `f_max - f_min`, or infinity
    /// if no box was retained.
    pub fn precision(&self) -> f64 {
        if self.f_max < self.f_min {
            f64::INFINITY
        } else {
            self.f_max - self.f_min
        }
    }

    /// Returns the per-dimension hull of all retained boxes, summarizing
    /// where the candidate optimizers live.
    pub fn solution_hull(&self) -> Option<IntervalBox> {
        let mut records = self.solutions.iter();
        let first = records.next()?.region().clone();

        Some(records.fold(first, |hull, record| hull.hull_with(record.region())))
    }

    /// Returns why the run stopped.
    #[inline]
    pub fn reason(&self) -> TerminationReason {
        self.reason
    }

    /// Returns `true` if the worklist drained before the budget ran out.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.reason == TerminationReason::Complete
    }

    /// Returns the run statistics.
    #[inline]
    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }
}

impl std::fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SolveOutcome(reason: {}, f in [{}, {}], precision: {}, solutions: {})",
            self.reason,
            self.f_min,
            self.f_max,
            self.precision(),
            self.solutions.len()
        )
    }
}
