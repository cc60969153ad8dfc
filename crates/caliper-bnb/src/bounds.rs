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

//! Running objective bounds for one optimizer run.
//!
//! A [`BoundTracker`] owns two pieces of state that one search session
//! accumulates:
//!
//! - the **incumbent**: the best objective level certainly attained inside
//!   the feasible region so far. For a maximization this is the largest lower
//!   bound reported over any certainly-feasible box; a box whose enclosure
//!   lies strictly on the wrong side of it cannot contain the extremum and is
//!   pruned.
//! - the **bracket** `[f_min, f_max]`: the hull of the objective enclosures
//!   of every box retained in the result set. `f_min` only decreases and
//!   `f_max` only increases across a run, and together they enclose the
//!   global extremum for the retained covering.

use caliper_core::interval::Interval;
use caliper_model::problem::Direction;

/// Incumbent level and output bracket of a single search session.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundTracker {
    direction: Direction,
    incumbent: f64,
    f_min: f64,
    f_max: f64,
}

impl BoundTracker {
    /// Creates a tracker with no evidence and an empty bracket.
    pub fn new(direction: Direction) -> Self {
        let incumbent = match direction {
            Direction::Maximize => f64::NEG_INFINITY,
            Direction::Minimize => f64::INFINITY,
        };

        Self {
            direction,
            incumbent,
            f_min: f64::INFINITY,
            f_max: f64::NEG_INFINITY,
        }
    }

    /// Returns the optimization direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Strengthens the incumbent with the enclosure of a certainly-feasible
    /// box. Empty enclosures carry no evidence and are ignored.
    pub fn observe_feasible(&mut self, range: Interval) {
        if range.is_empty() {
            return;
        }

        self.incumbent = match self.direction {
            Direction::Maximize => self.incumbent.max(range.inf()),
            Direction::Minimize => self.incumbent.min(range.sup()),
        };
    }

    /// Returns the current incumbent level.
    #[inline]
    pub fn incumbent(&self) -> f64 {
        self.incumbent
    }

    /// Returns `true` if a box with this enclosure provably cannot contain
    /// the extremum. Strict comparison: a box touching the incumbent level
    /// may still contain the optimizer and survives.
    pub fn is_dominated(&self, range: Interval) -> bool {
        if range.is_empty() {
            return false;
        }

        match self.direction {
            Direction::Maximize => range.sup() < self.incumbent,
            Direction::Minimize => range.inf() > self.incumbent,
        }
    }

    /// Folds a retained box's enclosure into the bracket.
    pub fn absorb(&mut self, range: Interval) {
        if range.is_empty() {
            return;
        }

        self.f_min = self.f_min.min(range.inf());
        self.f_max = self.f_max.max(range.sup());
    }

    /// Returns the lower end of the bracket.
    #[inline]
    pub fn f_min(&self) -> f64 {
        self.f_min
    }

    /// Returns the upper end of the bracket.
    #[inline]
    pub fn f_max(&self) -> f64 {
        self.f_max
    }

    /// Returns the bracket as an interval, or [`Interval::EMPTY`] before
    /// anything was absorbed.
    pub fn bracket(&self) -> Interval {
        if self.f_max < self.f_min {
            Interval::EMPTY
        } else {
            Interval::from_inf_sup(self.f_min, self.f_max)
        }
    }

    /// Returns the absolute precision estimate `f_max - f_min`, or infinity
    /// before anything was absorbed.
    pub fn precision(&self) -> f64 {
        if self.f_max < self.f_min {
            f64::INFINITY
        } else {
            self.f_max - self.f_min
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maximize_incumbent_and_domination() {
        let mut bounds = BoundTracker::new(Direction::Maximize);
        assert!(!bounds.is_dominated(Interval::from_inf_sup(-100.0, -50.0)));

        bounds.observe_feasible(Interval::from_inf_sup(2.0, 5.0));
        assert_eq!(bounds.incumbent(), 2.0);

        assert!(bounds.is_dominated(Interval::from_inf_sup(0.0, 1.9)));
        assert!(!bounds.is_dominated(Interval::from_inf_sup(0.0, 2.0)));
        assert!(!bounds.is_dominated(Interval::from_inf_sup(3.0, 4.0)));

        // Weaker evidence never loosens the incumbent.
        bounds.observe_feasible(Interval::from_inf_sup(1.0, 10.0));
        assert_eq!(bounds.incumbent(), 2.0);
    }

    #[test]
    fn test_minimize_incumbent_and_domination() {
        let mut bounds = BoundTracker::new(Direction::Minimize);

        bounds.observe_feasible(Interval::from_inf_sup(2.0, 5.0));
        assert_eq!(bounds.incumbent(), 5.0);

        assert!(bounds.is_dominated(Interval::from_inf_sup(5.1, 9.0)));
        assert!(!bounds.is_dominated(Interval::from_inf_sup(5.0, 9.0)));
        assert!(!bounds.is_dominated(Interval::from_inf_sup(1.0, 3.0)));
    }

    #[test]
    fn test_bracket_accumulates_monotonically() {
        let mut bounds = BoundTracker::new(Direction::Maximize);
        assert!(bounds.bracket().is_empty());
        assert_eq!(bounds.precision(), f64::INFINITY);

        bounds.absorb(Interval::from_inf_sup(1.0, 2.0));
        assert_eq!(bounds.bracket(), Interval::from_inf_sup(1.0, 2.0));

        bounds.absorb(Interval::from_inf_sup(0.5, 1.5));
        assert_eq!(bounds.f_min(), 0.5);
        assert_eq!(bounds.f_max(), 2.0);
        assert_eq!(bounds.precision(), 1.5);

        // Absorbing a contained enclosure changes nothing.
        bounds.absorb(Interval::from_inf_sup(1.0, 1.2));
        assert_eq!(bounds.bracket(), Interval::from_inf_sup(0.5, 2.0));
    }

    #[test]
    fn test_empty_enclosures_are_ignored() {
        let mut bounds = BoundTracker::new(Direction::Maximize);

        bounds.observe_feasible(Interval::EMPTY);
        bounds.absorb(Interval::EMPTY);

        assert_eq!(bounds.incumbent(), f64::NEG_INFINITY);
        assert!(bounds.bracket().is_empty());
        assert!(!bounds.is_dominated(Interval::EMPTY));
    }
}
