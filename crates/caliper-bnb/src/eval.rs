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

//! Objective and constraint evaluator interfaces.
//!
//! The solver is the execution engine only: pricing a box is delegated to an
//! [`Objective`] and feasibility testing to a [`Constraint`], so problem
//! definitions can be swapped without touching the search logic.
//! Problem-specific auxiliary parameters are carried as captured state of the
//! evaluator values themselves.
//!
//! An objective returns an [`Evaluation`]: the range enclosure over the box
//! and, when a closed-form gradient is available, a per-dimension gradient
//! enclosure that enables the engine's monotonicity shortcut.

use caliper_core::interval::Interval;
use caliper_core::math::EnclosureDiagnostics;
use caliper_core::truth::Truth;
use caliper_model::region::IntervalBox;

/// The result of pricing a box: a range enclosure plus an optional gradient
/// enclosure (one interval per problem dimension).
#[derive(Clone, PartialEq, Debug)]
pub struct Evaluation {
    range: Interval,
    gradient: Option<Vec<Interval>>,
}

impl Evaluation {
    /// Creates an evaluation carrying only the range enclosure.
    #[inline]
    pub fn of(range: Interval) -> Self {
        Self {
            range,
            gradient: None,
        }
    }

    /// Creates an evaluation carrying the range and a gradient enclosure.
    #[inline]
    pub fn with_gradient(range: Interval, gradient: Vec<Interval>) -> Self {
        Self {
            range,
            gradient: Some(gradient),
        }
    }

    /// Returns the range enclosure.
    #[inline]
    pub fn range(&self) -> Interval {
        self.range
    }

    /// Returns the gradient enclosure, if one was supplied.
    #[inline]
    pub fn gradient(&self) -> Option<&[Interval]> {
        self.gradient.as_deref()
    }

    /// Decomposes the evaluation into its parts.
    #[inline]
    pub fn into_parts(self) -> (Interval, Option<Vec<Interval>>) {
        (self.range, self.gradient)
    }
}

/// Prices a box with a conservative enclosure of the objective's range.
pub trait Objective {
    /// Returns the name of the objective, used in diagnostics.
    fn name(&self) -> &str {
        "objective"
    }

    /// Returns an enclosure of the objective over `region`.
    ///
    /// Recovered enclosure failures (for example undefined `xlog` terms) are
    /// counted in `diagnostics`, which the engine owns for the whole run.
    fn evaluate(
        &mut self,
        region: &IntervalBox,
        diagnostics: &mut EnclosureDiagnostics,
    ) -> Evaluation;
}

impl<F> Objective for F
where
    F: FnMut(&IntervalBox, &mut EnclosureDiagnostics) -> Evaluation,
{
    fn evaluate(
        &mut self,
        region: &IntervalBox,
        diagnostics: &mut EnclosureDiagnostics,
    ) -> Evaluation {
        self(region, diagnostics)
    }
}

/// Adapts a plain range function into an [`Objective`] without gradient
/// information or diagnostics access.
pub struct RangeObjective<F> {
    function: F,
}

impl<F> RangeObjective<F>
where
    F: FnMut(&IntervalBox) -> Interval,
{
    /// Wraps a range function.
    #[inline]
    pub fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F> Objective for RangeObjective<F>
where
    F: FnMut(&IntervalBox) -> Interval,
{
    fn evaluate(
        &mut self,
        region: &IntervalBox,
        _diagnostics: &mut EnclosureDiagnostics,
    ) -> Evaluation {
        Evaluation::of((self.function)(region))
    }
}

/// Tests a box against the problem constraints with three-valued truth.
pub trait Constraint {
    /// Returns the name of the constraint, used in diagnostics.
    fn name(&self) -> &str {
        "constraint"
    }

    /// Classifies `region` against the constraints.
    fn classify(&mut self, region: &IntervalBox) -> Truth;

    /// Returns how many individual constraints are respected over `region`,
    /// recorded on solution records. Defaults to zero for constraints that
    /// do not track a per-constraint count.
    fn respected_count(&mut self, _region: &IntervalBox) -> usize {
        0
    }
}

impl<F> Constraint for F
where
    F: FnMut(&IntervalBox) -> Truth,
{
    fn classify(&mut self, region: &IntervalBox) -> Truth {
        self(region)
    }
}

/// The trivial constraint: every point of every box is feasible.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Unconstrained;

impl Constraint for Unconstrained {
    fn name(&self) -> &str {
        "unconstrained"
    }

    fn classify(&mut self, _region: &IntervalBox) -> Truth {
        Truth::True
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_objective_adapter() {
        let mut objective = RangeObjective::new(|region: &IntervalBox| region[0]);
        let mut diagnostics = EnclosureDiagnostics::new();
        let region = IntervalBox::new([Interval::from_inf_sup(1.0, 2.0)]);

        let evaluation = objective.evaluate(&region, &mut diagnostics);
        assert_eq!(evaluation.range(), Interval::from_inf_sup(1.0, 2.0));
        assert_eq!(evaluation.gradient(), None);
    }

    #[test]
    fn test_closure_objective_with_gradient() {
        let mut objective = |region: &IntervalBox, _: &mut EnclosureDiagnostics| {
            Evaluation::with_gradient(region[0], vec![Interval::from_inf_sup(1.0, 1.0)])
        };
        let mut diagnostics = EnclosureDiagnostics::new();
        let region = IntervalBox::new([Interval::from_inf_sup(0.0, 1.0)]);

        let evaluation = Objective::evaluate(&mut objective, &region, &mut diagnostics);
        assert_eq!(evaluation.gradient().unwrap().len(), 1);

        let (range, gradient) = evaluation.into_parts();
        assert_eq!(range, Interval::from_inf_sup(0.0, 1.0));
        assert!(gradient.is_some());
    }

    #[test]
    fn test_unconstrained_is_always_true() {
        let mut constraint = Unconstrained;
        let region = IntervalBox::new([Interval::from_inf_sup(-10.0, 10.0)]);

        assert_eq!(constraint.classify(&region), Truth::True);
        assert_eq!(constraint.respected_count(&region), 0);
    }

    #[test]
    fn test_closure_constraint() {
        let allowed = Interval::from_inf_sup(0.0, 1.0);
        let mut constraint = move |region: &IntervalBox| region[0].within(&allowed);

        let inside = IntervalBox::new([Interval::from_inf_sup(0.2, 0.8)]);
        let straddling = IntervalBox::new([Interval::from_inf_sup(-1.0, 0.5)]);

        assert_eq!(Constraint::classify(&mut constraint, &inside), Truth::True);
        assert_eq!(
            Constraint::classify(&mut constraint, &straddling),
            Truth::Indeterminate
        );
    }
}
