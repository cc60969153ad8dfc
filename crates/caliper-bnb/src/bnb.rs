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

//! Branch-and-bound solver over interval boxes.
//!
//! This module implements the search engine that turns a [`Problem`], an
//! [`Objective`], and a [`Constraint`] into a certified covering of the
//! candidate optimizers. The [`BnbSolver`] manages the reusable worklist;
//! a search session object encapsulates per-run state, bounds, statistics,
//! and timing.
//!
//! Per box popped from the LIFO worklist, the session:
//! 1. prices the box and classifies it against the constraints;
//! 2. strengthens the incumbent with the enclosure of certainly-feasible
//!    boxes, and discards boxes that are infeasible or whose enclosure is
//!    strictly dominated by the incumbent;
//! 3. classifies boxes below the width tolerance terminally;
//! 4. accepts feasible boxes whose objective enclosure is already tight
//!    enough that refinement cannot improve the bracket;
//! 5. otherwise tries the gradient monotonicity shortcut, and falls back to
//!    bisecting the widest dimension.
//!
//! The monotonicity shortcut enumerates the `2^d` sign combinations of the
//! gradient enclosure (a set bit demands a strictly negative partial, a
//! clear bit a strictly positive one). A consistent combination proves the
//! objective monotone on the box, so its exact range is certified from the
//! two opposite corners; the combination is remembered and retried first on
//! child boxes.
//!
//! The iteration budget decrements once per box that required bisection.
//! When it runs out the run stops at the current worklist state; the
//! returned partition may then be incomplete, which is a documented
//! approximation rather than a failure.

use crate::bounds::BoundTracker;
use crate::eval::{Constraint, Objective};
use crate::monitor::log::LogMonitor;
use crate::monitor::no_op::NoOperationMonitor;
use crate::monitor::search_monitor::{Progress, SearchMonitor};
use crate::result::{SolveOutcome, TerminationReason};
use crate::stats::SolverStatistics;
use crate::worklist::{PendingBox, Worklist};
use caliper_core::interval::Interval;
use caliper_core::math::EnclosureDiagnostics;
use caliper_core::truth::Truth;
use caliper_model::problem::{Direction, Problem, ProblemError};
use caliper_model::region::IntervalBox;
use caliper_model::solution::{Classification, SolutionRecord};

/// Width tolerance used by the [`optimize`] entry point.
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// A branch-and-bound solver for interval optimization problems.
///
/// The solver owns only reusable storage; all per-run state lives in a
/// search session, so a solver value can be reused across runs without
/// reallocating the worklist.
#[derive(Clone, Debug, Default)]
pub struct BnbSolver {
    worklist: Worklist,
}

impl BnbSolver {
    /// Creates a new solver.
    #[inline]
    pub fn new() -> Self {
        Self {
            worklist: Worklist::new(),
        }
    }

    /// Creates a new solver with preallocated worklist storage.
    ///
    /// This only moves allocation cost to construction time; the worklist
    /// still grows on demand if a run outgrows the preallocation.
    #[inline]
    pub fn preallocated(capacity: usize) -> Self {
        Self {
            worklist: Worklist::preallocated(capacity),
        }
    }

    /// Runs the branch-and-bound search for `problem` using the provided
    /// evaluators and monitor.
    pub fn solve<O, C, M>(
        &mut self,
        problem: &Problem,
        objective: &mut O,
        constraint: &mut C,
        monitor: M,
    ) -> SolveOutcome
    where
        O: Objective,
        C: Constraint,
        M: SearchMonitor,
    {
        let session = SearchSession::new(self, problem, objective, constraint, monitor);
        let outcome = session.run();
        self.reset();
        outcome
    }

    /// Resets the logical state of the reusable storage without
    /// deallocating it.
    #[inline]
    fn reset(&mut self) {
        self.worklist.reset();
    }
}

/// Optimizes an objective over the given initial ranges.
///
/// This is the convenience entry point mirroring the shape of a console
/// driver: initial ranges, evaluators, direction, iteration budget, and a
/// debug flag selecting between a verbose logging monitor and silence. The
/// width tolerance is [`DEFAULT_TOLERANCE`]; construct a
/// [`Problem`] and call [`BnbSolver::solve`] directly for full control.
///
/// # Errors
///
/// Returns an error if the initial ranges do not form a valid problem.
pub fn optimize<O, C>(
    initial_ranges: &[Interval],
    objective: &mut O,
    constraint: &mut C,
    direction: Direction,
    iteration_budget: u64,
    debug: bool,
) -> Result<SolveOutcome, ProblemError>
where
    O: Objective,
    C: Constraint,
{
    let problem = Problem::new(
        IntervalBox::new(initial_ranges.iter().copied()),
        direction,
        iteration_budget,
        DEFAULT_TOLERANCE,
    )?;
    let mut solver = BnbSolver::preallocated(initial_ranges.len().max(1) * 16);

    let outcome = if debug {
        solver.solve(&problem, objective, constraint, LogMonitor::verbose())
    } else {
        solver.solve(&problem, objective, constraint, NoOperationMonitor::new())
    };

    Ok(outcome)
}

/// A search session: the state and logic of a single run.
struct SearchSession<'a, O, C, M> {
    solver: &'a mut BnbSolver,
    problem: &'a Problem,
    objective: &'a mut O,
    constraint: &'a mut C,
    monitor: M,
    bounds: BoundTracker,
    diagnostics: EnclosureDiagnostics,
    accepted: Vec<SolutionRecord>,
    undetermined: Vec<SolutionRecord>,
    remaining_budget: u64,
    stats: SolverStatistics,
    start_time: std::time::Instant,
}

impl<'a, O, C, M> SearchSession<'a, O, C, M>
where
    O: Objective,
    C: Constraint,
    M: SearchMonitor,
{
    fn new(
        solver: &'a mut BnbSolver,
        problem: &'a Problem,
        objective: &'a mut O,
        constraint: &'a mut C,
        monitor: M,
    ) -> Self {
        let bounds = BoundTracker::new(problem.direction());
        let remaining_budget = problem.iteration_budget();

        Self {
            solver,
            problem,
            objective,
            constraint,
            monitor,
            bounds,
            diagnostics: EnclosureDiagnostics::new(),
            accepted: Vec::new(),
            undetermined: Vec::new(),
            remaining_budget,
            stats: SolverStatistics::default(),
            start_time: std::time::Instant::now(),
        }
    }

    fn run(mut self) -> SolveOutcome {
        self.monitor.on_enter_search(self.problem);

        self.solver.worklist.push(PendingBox {
            region: self.problem.initial_box().clone(),
            corner_hint: None,
        });

        let reason = loop {
            let Some(pending) = self.solver.worklist.pop() else {
                break TerminationReason::Complete;
            };

            if let Some(reason) = self.step(pending) {
                break reason;
            }
        };

        self.stats.set_xlog_recoveries(self.diagnostics.undefined_xlog());
        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);
        self.finalize(reason)
    }

    /// Processes one pending box. Returns a termination reason when the run
    /// must stop.
    fn step(&mut self, pending: PendingBox) -> Option<TerminationReason> {
        self.stats.on_box_explored();

        let evaluation = self
            .objective
            .evaluate(&pending.region, &mut self.diagnostics);
        let (range, gradient) = evaluation.into_parts();
        let user_truth = self.constraint.classify(&pending.region);

        if user_truth == Truth::True {
            self.bounds.observe_feasible(range);
        }

        let dominated = self.bounds.is_dominated(range);

        if dominated || user_truth == Truth::False {
            self.settle(
                pending.region,
                range,
                gradient,
                Classification::Infeasible,
                false,
                pending.corner_hint,
            );
            self.emit_progress();
            return None;
        }

        if pending.region.width() < self.problem.tolerance() {
            let classification = match user_truth {
                Truth::True => Classification::Feasible,
                _ => Classification::Undetermined,
            };
            self.settle(
                pending.region,
                range,
                gradient,
                classification,
                false,
                pending.corner_hint,
            );
            self.emit_progress();
            return None;
        }

        // A certainly-feasible box with a tight enclosure cannot improve the
        // bracket through refinement.
        if user_truth == Truth::True && range.diam() <= self.problem.tolerance() {
            self.settle(
                pending.region,
                range,
                gradient,
                Classification::Feasible,
                false,
                pending.corner_hint,
            );
            self.emit_progress();
            return None;
        }

        let outcome = self.refine(pending, user_truth, gradient);
        self.emit_progress();
        outcome
    }

    /// Tries the monotonicity shortcut, then bisects.
    fn refine(
        &mut self,
        pending: PendingBox,
        user_truth: Truth,
        gradient: Option<Vec<Interval>>,
    ) -> Option<TerminationReason> {
        let mut hint = pending.corner_hint;

        let mask = gradient
            .as_deref()
            .and_then(|g| monotone_mask(g, hint, pending.region.dim()));
        if let Some(mask) = mask {
            let certified = self.certify_corners(&pending.region, mask);
            self.stats.on_gradient_certificate();
            self.monitor
                .on_certificate(&pending.region, mask, &self.stats);

            if user_truth == Truth::True {
                self.bounds.observe_feasible(certified);
            }

            if self.bounds.is_dominated(certified) {
                self.settle(
                    pending.region,
                    certified,
                    gradient,
                    Classification::Infeasible,
                    true,
                    Some(mask),
                );
                return None;
            }
            if user_truth == Truth::True && certified.diam() <= self.problem.tolerance() {
                self.settle(
                    pending.region,
                    certified,
                    gradient,
                    Classification::Feasible,
                    true,
                    Some(mask),
                );
                return None;
            }

            hint = Some(mask);
        }

        if self.remaining_budget == 0 {
            // Stop at the current worklist state; the unprocessed box goes
            // back so nothing is silently lost from the frontier.
            self.solver.worklist.push(pending);
            return Some(TerminationReason::BudgetExhausted);
        }
        self.remaining_budget -= 1;
        self.stats.on_bisection();

        let dimension = pending.region.widest_dimension();
        self.monitor
            .on_bisect(&pending.region, dimension, &self.stats);

        let (left, right) = pending.region.bisect();
        self.solver.worklist.push(PendingBox {
            region: left,
            corner_hint: hint,
        });
        self.solver.worklist.push(PendingBox {
            region: right,
            corner_hint: hint,
        });

        None
    }

    /// Evaluates the objective at the two opposite corners selected by the
    /// sign-combination mask, returning the certified range of the monotone
    /// objective over the box.
    fn certify_corners(&mut self, region: &IntervalBox, mask: usize) -> Interval {
        let full = (1usize << region.dim()) - 1;
        let falling = region.corner(mask & full);
        let rising = region.corner(!mask & full);

        let low = self
            .objective
            .evaluate(&falling, &mut self.diagnostics)
            .range();
        self.stats.on_corner_evaluation();
        let high = self
            .objective
            .evaluate(&rising, &mut self.diagnostics)
            .range();
        self.stats.on_corner_evaluation();

        Interval::from_inf_sup(low.inf(), high.sup())
    }

    /// Records a box's terminal classification.
    fn settle(
        &mut self,
        region: IntervalBox,
        range: Interval,
        gradient: Option<Vec<Interval>>,
        classification: Classification,
        certified: bool,
        mask: Option<usize>,
    ) {
        if classification == Classification::Infeasible {
            self.stats.on_rejected();
            self.monitor
                .on_box_classified(&region, classification, &self.stats);
            return;
        }

        self.bounds.absorb(range);
        let respected = self.constraint.respected_count(&region);
        let record = SolutionRecord::new(region, range, classification, respected)
            .with_certificate(certified, mask, gradient);
        self.monitor
            .on_box_classified(record.region(), classification, &self.stats);

        match classification {
            Classification::Feasible => {
                self.stats.on_accepted();
                self.accepted.push(record);
            }
            _ => {
                self.stats.on_undetermined();
                self.undetermined.push(record);
            }
        }
    }

    fn emit_progress(&mut self) {
        self.monitor.on_progress(&Progress {
            precision: self.bounds.precision(),
            f_min: self.bounds.f_min(),
            f_max: self.bounds.f_max(),
            explored: self.stats.boxes_explored,
        });
    }

    fn finalize(self, reason: TerminationReason) -> SolveOutcome {
        let mut solutions = self.accepted;
        solutions.extend(self.undetermined);

        SolveOutcome::new(
            solutions,
            self.bounds.f_min(),
            self.bounds.f_max(),
            reason,
            self.stats,
        )
    }
}

/// Searches the `2^d` sign combinations for one consistent with the gradient
/// enclosure. A set bit demands a strictly negative partial derivative, a
/// clear bit a strictly positive one; a partial straddling zero rules out
/// every combination. The hinted combination from the box's ancestry is
/// tried first.
fn monotone_mask(gradient: &[Interval], hint: Option<usize>, dim: usize) -> Option<usize> {
    if gradient.len() != dim || dim >= usize::BITS as usize {
        return None;
    }

    let consistent = |mask: usize| {
        gradient.iter().enumerate().all(|(index, partial)| {
            if mask & (1 << index) != 0 {
                partial.is_negative()
            } else {
                partial.is_positive()
            }
        })
    };

    if let Some(mask) = hint {
        if mask < (1usize << dim) && consistent(mask) {
            return Some(mask);
        }
    }

    (0..(1usize << dim)).find(|&mask| consistent(mask))
}
