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

//! Problem descriptions for the branch-and-bound optimizer.
//!
//! A [`Problem`] bundles the search region with the run parameters: the
//! optimization direction, the iteration budget bounding how many boxes may
//! be bisected, and the width tolerance below which boxes are classified
//! terminally. The objective and constraint evaluators are not part of the
//! problem value; they are passed to the solver separately so one problem
//! description can be solved against different evaluator configurations.

use crate::region::IntervalBox;
use thiserror::Error;

/// The optimization direction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    /// Search for the global minimum.
    Minimize,
    /// Search for the global maximum.
    Maximize,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Minimize => write!(f, "Minimize"),
            Direction::Maximize => write!(f, "Maximize"),
        }
    }
}

/// Errors raised when a problem description is invalid.
#[derive(Clone, Copy, PartialEq, Debug, Error)]
pub enum ProblemError {
    /// The initial box has no dimensions.
    #[error("the initial box must have at least one dimension")]
    EmptyBox,
    /// A dimension of the initial box is the empty interval.
    #[error("dimension {0} of the initial box is empty")]
    EmptyDimension(usize),
    /// The width tolerance is not a positive finite number.
    #[error("the width tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),
}

/// A validated optimization problem over an interval box.
#[derive(Clone, PartialEq, Debug)]
pub struct Problem {
    initial_box: IntervalBox,
    direction: Direction,
    iteration_budget: u64,
    tolerance: f64,
}

impl Problem {
    /// Creates a validated problem description.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial box is zero-dimensional, contains an
    /// empty dimension, or the tolerance is not positive and finite.
    pub fn new(
        initial_box: IntervalBox,
        direction: Direction,
        iteration_budget: u64,
        tolerance: f64,
    ) -> Result<Self, ProblemError> {
        if initial_box.dim() == 0 {
            return Err(ProblemError::EmptyBox);
        }
        for (index, interval) in initial_box.iter().enumerate() {
            if interval.is_empty() {
                return Err(ProblemError::EmptyDimension(index));
            }
        }
        if !(tolerance > 0.0 && tolerance.is_finite()) {
            return Err(ProblemError::InvalidTolerance(tolerance));
        }

        Ok(Self {
            initial_box,
            direction,
            iteration_budget,
            tolerance,
        })
    }

    /// Returns the search region the run starts from.
    #[inline]
    pub fn initial_box(&self) -> &IntervalBox {
        &self.initial_box
    }

    /// Returns the optimization direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns how many boxes the run may bisect before it stops.
    #[inline]
    pub fn iteration_budget(&self) -> u64 {
        self.iteration_budget
    }

    /// Returns the width below which boxes are classified terminally.
    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the problem dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.initial_box.dim()
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Problem(direction: {}, dim: {}, budget: {}, tolerance: {})",
            self.direction,
            self.dim(),
            self.iteration_budget,
            self.tolerance
        )
    }
}
