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

//! Multidimensional interval boxes.
//!
//! An [`IntervalBox`] is an ordered, fixed-dimension sequence of intervals
//! representing the Cartesian product search region explored by the
//! branch-and-bound engine. The dimension count is fixed at creation. Storage
//! is inline for the low-dimensional boxes the optimizer actually works with,
//! so splitting boxes in the hot loop does not have to touch the heap.

use caliper_core::interval::Interval;
use smallvec::SmallVec;

/// An n-dimensional Cartesian product of intervals.
#[derive(Clone, PartialEq, Debug)]
pub struct IntervalBox {
    dims: SmallVec<[Interval; 4]>,
}

impl IntervalBox {
    /// Creates a box from its per-dimension intervals.
    #[inline]
    pub fn new<I>(dims: I) -> Self
    where
        I: IntoIterator<Item = Interval>,
    {
        Self {
            dims: dims.into_iter().collect(),
        }
    }

    /// Returns the number of dimensions.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dims.len()
    }

    /// Returns the interval of the given dimension.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Interval {
        self.dims[index]
    }

    /// Returns the per-dimension intervals as a slice.
    #[inline]
    pub fn intervals(&self) -> &[Interval] {
        &self.dims
    }

    /// Returns an iterator over the per-dimension intervals.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Interval> {
        self.dims.iter()
    }

    /// Returns the maximum per-dimension diameter, or `0` for a
    /// zero-dimensional box.
    pub fn width(&self) -> f64 {
        self.dims
            .iter()
            .map(Interval::diam)
            .fold(0.0, f64::max)
    }

    /// Returns the product of the per-dimension diameters.
    pub fn volume(&self) -> f64 {
        self.dims.iter().map(Interval::diam).product()
    }

    /// Returns the index of the dimension with the largest diameter, ties
    /// broken by the first occurrence in index order.
    ///
    /// # Panics
    ///
    /// Panics if the box has no dimensions.
    pub fn widest_dimension(&self) -> usize {
        assert!(
            !self.dims.is_empty(),
            "called `IntervalBox::widest_dimension` on a zero-dimensional box"
        );

        let mut best_index = 0;
        let mut best_width = self.dims[0].diam();

        for (index, interval) in self.dims.iter().enumerate().skip(1) {
            let width = interval.diam();
            if width > best_width {
                best_width = width;
                best_index = index;
            }
        }

        best_index
    }

    /// Returns the degenerate box with every dimension collapsed to its
    /// midpoint, used for point evaluation of an objective.
    pub fn middle(&self) -> IntervalBox {
        Self::new(
            self.dims
                .iter()
                .map(|i| Interval::from_inf_sup(i.mid(), i.mid())),
        )
    }

    /// Returns the degenerate corner box selected by `mask`.
    ///
    /// Bit `i` of the mask selects the supremum of dimension `i`; a clear bit
    /// selects the infimum. The monotonicity certificate evaluates opposite
    /// corner pairs `(mask, !mask)` to bound a monotone objective exactly.
    pub fn corner(&self, mask: usize) -> IntervalBox {
        Self::new(self.dims.iter().enumerate().map(|(index, interval)| {
            let bound = if mask & (1 << index) != 0 {
                interval.sup()
            } else {
                interval.inf()
            };
            Interval::from_inf_sup(bound, bound)
        }))
    }

    /// Splits the box at the midpoint of its widest dimension.
    ///
    /// The children are identical to the parent except in the split
    /// dimension, which they share as a bound.
    pub fn bisect(&self) -> (IntervalBox, IntervalBox) {
        self.split(|interval| interval.bisect())
    }

    /// Splits the box at `inf + fraction * diam` of its widest dimension.
    pub fn bisect_at(&self, fraction: f64) -> (IntervalBox, IntervalBox) {
        self.split(|interval| interval.bisect_at(fraction))
    }

    fn split<F>(&self, cut: F) -> (IntervalBox, IntervalBox)
    where
        F: Fn(&Interval) -> (Interval, Interval),
    {
        let dimension = self.widest_dimension();
        let (left, right) = cut(&self.dims[dimension]);

        let mut left_box = self.clone();
        let mut right_box = self.clone();
        left_box.dims[dimension] = left;
        right_box.dims[dimension] = right;

        (left_box, right_box)
    }

    /// Returns the per-dimension hull of two boxes of equal dimension.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    pub fn hull_with(&self, other: &IntervalBox) -> IntervalBox {
        assert_eq!(
            self.dim(),
            other.dim(),
            "called `IntervalBox::hull_with` with mismatched dimensions: {} vs {}",
            self.dim(),
            other.dim()
        );

        Self::new(self.dims.iter().zip(other.dims.iter()).map(|(a, b)| {
            Interval::from_inf_sup(a.inf().min(b.inf()), a.sup().max(b.sup()))
        }))
    }
}

impl std::ops::Index<usize> for IntervalBox {
    type Output = Interval;

    #[inline]
    fn index(&self, index: usize) -> &Interval {
        &self.dims[index]
    }
}

impl FromIterator<Interval> for IntervalBox {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl std::fmt::Display for IntervalBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for interval in self.dims.iter() {
            write!(f, "[{}, {}]", interval.inf(), interval.sup())?;
        }
        write!(f, "]")
    }
}
