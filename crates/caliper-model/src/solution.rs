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

//! Solution records produced by the optimizer.
//!
//! A [`SolutionRecord`] pairs a surviving box with its objective enclosure,
//! its terminal classification, and the gradient-certificate metadata: did a
//! monotonicity shortcut bound this box, which sign combination was used, and
//! what the gradient enclosure was. Records are immutable once created and
//! owned by the caller that receives the optimizer's result set.

use crate::region::IntervalBox;
use caliper_core::interval::Interval;

/// Terminal classification of a box.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Classification {
    /// The constraints certainly hold over the whole box.
    Feasible,
    /// The constraints certainly fail over the whole box.
    Infeasible,
    /// Neither could be certified before the box fell below the width
    /// tolerance (or the run stopped).
    Undetermined,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Feasible => write!(f, "Feasible"),
            Classification::Infeasible => write!(f, "Infeasible"),
            Classification::Undetermined => write!(f, "Undetermined"),
        }
    }
}

/// An immutable record of a box retained in the optimizer's result set.
#[derive(Clone, PartialEq, Debug)]
pub struct SolutionRecord {
    region: IntervalBox,
    objective: Interval,
    classification: Classification,
    gradient_certified: bool,
    certified_corner: Option<usize>,
    gradient: Option<Vec<Interval>>,
    respected_constraints: usize,
}

impl SolutionRecord {
    /// Creates a record without gradient metadata.
    pub fn new(
        region: IntervalBox,
        objective: Interval,
        classification: Classification,
        respected_constraints: usize,
    ) -> Self {
        Self {
            region,
            objective,
            classification,
            gradient_certified: false,
            certified_corner: None,
            gradient: None,
            respected_constraints,
        }
    }

    /// Attaches gradient-certificate metadata to a freshly created record.
    ///
    /// `certified` marks that a monotonicity shortcut bounded this very box;
    /// `corner` is the sign-combination mask (possibly inherited from an
    /// ancestor), and `gradient` the gradient enclosure the objective
    /// reported for the box.
    pub fn with_certificate(
        mut self,
        certified: bool,
        corner: Option<usize>,
        gradient: Option<Vec<Interval>>,
    ) -> Self {
        debug_assert!(
            !certified || corner.is_some(),
            "a certified record must carry its sign-combination mask"
        );

        self.gradient_certified = certified;
        self.certified_corner = corner;
        self.gradient = gradient;
        self
    }

    /// Returns the surviving box.
    #[inline]
    pub fn region(&self) -> &IntervalBox {
        &self.region
    }

    /// Returns the objective enclosure over the box.
    #[inline]
    pub fn objective(&self) -> Interval {
        self.objective
    }

    /// Returns the terminal classification.
    #[inline]
    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// Returns `true` if a monotonicity shortcut bounded this box.
    #[inline]
    pub fn is_gradient_certified(&self) -> bool {
        self.gradient_certified
    }

    /// Returns the sign-combination mask used or inherited, if any.
    #[inline]
    pub fn certified_corner(&self) -> Option<usize> {
        self.certified_corner
    }

    /// Returns the gradient enclosure, if the objective supplied one.
    #[inline]
    pub fn gradient(&self) -> Option<&[Interval]> {
        self.gradient.as_deref()
    }

    /// Returns how many constraints were reported as respected.
    #[inline]
    pub fn respected_constraints(&self) -> usize {
        self.respected_constraints
    }
}

impl std::fmt::Display for SolutionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SolutionRecord({}, objective: {}, region: {})",
            self.classification, self.objective, self.region
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SolutionRecord {
        SolutionRecord::new(
            IntervalBox::new([Interval::from_inf_sup(0.0, 1.0)]),
            Interval::from_inf_sup(0.0, 1.0),
            Classification::Undetermined,
            2,
        )
    }

    #[test]
    fn test_new_record_has_no_certificate() {
        let record = record();

        assert!(!record.is_gradient_certified());
        assert_eq!(record.certified_corner(), None);
        assert_eq!(record.gradient(), None);
        assert_eq!(record.respected_constraints(), 2);
        assert_eq!(record.classification(), Classification::Undetermined);
    }

    #[test]
    fn test_certificate_metadata_round_trips() {
        let gradient = vec![Interval::from_inf_sup(1.0, 2.0)];
        let record = record().with_certificate(true, Some(0b1), Some(gradient.clone()));

        assert!(record.is_gradient_certified());
        assert_eq!(record.certified_corner(), Some(0b1));
        assert_eq!(record.gradient(), Some(gradient.as_slice()));
    }

    #[test]
    fn test_inherited_mask_without_certificate() {
        let record = record().with_certificate(false, Some(0b10), None);

        assert!(!record.is_gradient_certified());
        assert_eq!(record.certified_corner(), Some(0b10));
    }
}
