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

//! Closed real intervals with conservative arithmetic.
//!
//! The [`Interval`] type is the base type of the whole workspace: a closed set
//! `[inf, sup]` of reals, or one of the two sentinel states *Empty* (no value)
//! and *Entire* (the whole real line). Every arithmetic operator returns an
//! enclosure of all attainable real results, nudging each computed bound one
//! representable step outward so that floating point rounding can never make
//! an enclosure lie.
//!
//! Intervals are immutable value types. Construction goes exclusively through
//! factories; the sentinel states carry an explicit tag instead of being
//! encoded through NaN bounds, so downstream code never has to reason about
//! NaN propagation semantics.

use crate::num::constants;
use crate::num::round::{InflateDown, InflateUp};
use crate::truth::Truth;
use std::cmp::Ordering;
use thiserror::Error;

/// Classification tag distinguishing ordinary intervals from the sentinels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum State {
    /// An ordinary interval with `inf <= sup` (bounds may be infinite).
    Finite,
    /// The empty set; the stored bounds are meaningless.
    Empty,
    /// The whole real line `[-inf, +inf]`.
    Entire,
}

/// Errors raised by the interval factories.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum IntervalError {
    /// A negative radius was passed to [`Interval::from_mid_rad`].
    #[error("a negative radius is invalid")]
    NegativeRadius,
    /// An infinite or NaN midpoint was passed to [`Interval::from_mid_rad`].
    #[error("a non-finite midpoint is invalid")]
    NonFiniteMidpoint,
    /// A NaN radius was passed to [`Interval::from_mid_rad`].
    #[error("NaN is an invalid radius")]
    NanRadius,
    /// An infinite value was passed to a point-interval factory.
    #[error("an infinite value cannot form a point interval")]
    InfinitePoint,
    /// NaN was passed to [`Interval::from_point_inflated`].
    #[error("NaN cannot form an inflated point interval")]
    NanPoint,
}

/// Human readable rendering styles for [`Interval::format`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IntervalFormat {
    /// `[ lower , upper ]`
    InfSup,
    /// `< mid , radius >`
    MidRad,
    /// `mid ± radius`
    ValDev,
}

/// A closed real interval `[inf, sup]`, or the Empty/Entire sentinel.
#[derive(Clone, Copy, Debug)]
pub struct Interval {
    inf: f64,
    sup: f64,
    state: State,
}

impl Interval {
    /// The degenerate interval `[0, 0]`.
    pub const ZERO: Interval = Interval {
        inf: 0.0,
        sup: 0.0,
        state: State::Finite,
    };

    /// The empty interval (no value).
    pub const EMPTY: Interval = Interval {
        inf: f64::NAN,
        sup: f64::NAN,
        state: State::Empty,
    };

    /// The whole real line `[-inf, +inf]`.
    pub const ENTIRE: Interval = Interval {
        inf: f64::NEG_INFINITY,
        sup: f64::INFINITY,
        state: State::Entire,
    };

    /// Rigorous enclosure of pi.
    pub const PI: Interval = Interval {
        inf: constants::PI_INF,
        sup: constants::PI_SUP,
        state: State::Finite,
    };

    /// Rigorous enclosure of 2*pi.
    pub const TWO_PI: Interval = Interval {
        inf: constants::TWO_PI_INF,
        sup: constants::TWO_PI_SUP,
        state: State::Finite,
    };

    /// Rigorous enclosure of pi/2.
    pub const HALF_PI: Interval = Interval {
        inf: constants::HALF_PI_INF,
        sup: constants::HALF_PI_SUP,
        state: State::Finite,
    };

    /// Rigorous enclosure of 3*pi/2.
    pub const THREE_HALF_PI: Interval = Interval {
        inf: constants::THREE_HALF_PI_INF,
        sup: constants::THREE_HALF_PI_SUP,
        state: State::Finite,
    };

    /// Creates an interval from its lower and upper bound.
    ///
    /// Reversed bounds are swapped rather than rejected. If either bound is
    /// NaN the result is [`Interval::EMPTY`], and `[-inf, +inf]` collapses to
    /// [`Interval::ENTIRE`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::interval::Interval;
    ///
    /// let i = Interval::from_inf_sup(3.0, 1.0);
    /// assert_eq!(i.inf(), 1.0);
    /// assert_eq!(i.sup(), 3.0);
    /// assert!(Interval::from_inf_sup(f64::NAN, 1.0).is_empty());
    /// ```
    #[inline]
    pub fn from_inf_sup(inf: f64, sup: f64) -> Self {
        if inf.is_nan() || sup.is_nan() {
            return Self::EMPTY;
        }

        let (inf, sup) = if inf > sup { (sup, inf) } else { (inf, sup) };

        if inf == f64::NEG_INFINITY && sup == f64::INFINITY {
            return Self::ENTIRE;
        }

        Self {
            inf,
            sup,
            state: State::Finite,
        }
    }

    /// Creates an interval from its midpoint and radius.
    ///
    /// # Errors
    ///
    /// Returns an error for a negative radius, a NaN radius, or a non-finite
    /// midpoint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::interval::Interval;
    ///
    /// let i = Interval::from_mid_rad(2.0, 0.5).unwrap();
    /// assert_eq!(i.inf(), 1.5);
    /// assert_eq!(i.sup(), 2.5);
    /// assert!(Interval::from_mid_rad(2.0, -1.0).is_err());
    /// ```
    #[inline]
    pub fn from_mid_rad(mid: f64, rad: f64) -> Result<Self, IntervalError> {
        if rad.is_nan() {
            return Err(IntervalError::NanRadius);
        }
        if rad < 0.0 {
            return Err(IntervalError::NegativeRadius);
        }
        if !mid.is_finite() {
            return Err(IntervalError::NonFiniteMidpoint);
        }

        Ok(Self::from_inf_sup(mid - rad, mid + rad))
    }

    /// Creates the degenerate interval `[value, value]`.
    ///
    /// A NaN input yields [`Interval::EMPTY`]. For decimal constants with
    /// more than 15 significant digits use [`Interval::from_point_inflated`]
    /// instead, which widens the point by one rounding step on each side and
    /// so still encloses the intended real number.
    ///
    /// # Errors
    ///
    /// Returns an error for infinite input.
    #[inline]
    pub fn from_point(value: f64) -> Result<Self, IntervalError> {
        if value.is_infinite() {
            return Err(IntervalError::InfinitePoint);
        }
        if value.is_nan() {
            return Ok(Self::EMPTY);
        }

        Ok(Self {
            inf: value,
            sup: value,
            state: State::Finite,
        })
    }

    /// Creates a one-step-inflated enclosure of `value`.
    ///
    /// This is the rigorous counterpart of [`Interval::from_point`] for
    /// values that were themselves rounded when parsed or computed.
    ///
    /// # Errors
    ///
    /// Returns an error for NaN or infinite input.
    #[inline]
    pub fn from_point_inflated(value: f64) -> Result<Self, IntervalError> {
        if value.is_nan() {
            return Err(IntervalError::NanPoint);
        }
        if value.is_infinite() {
            return Err(IntervalError::InfinitePoint);
        }

        Ok(Self::from_point(value)?.epsilon_inflation())
    }

    /// Returns the lower bound.
    #[inline]
    pub fn inf(&self) -> f64 {
        self.inf
    }

    /// Returns the upper bound.
    #[inline]
    pub fn sup(&self) -> f64 {
        self.sup
    }

    /// Returns `true` if this is the empty interval.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state == State::Empty
    }

    /// Returns `true` if this is the whole real line.
    #[inline]
    pub fn is_entire(&self) -> bool {
        self.state == State::Entire
    }

    /// Returns `true` if this is exactly `[0, 0]`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.inf == 0.0 && self.sup == 0.0
    }

    /// Returns `true` if the whole interval is greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.inf > 0.0
    }

    /// Returns `true` if the whole interval is smaller than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sup < 0.0
    }

    /// Returns `true` if the interval contains zero (bounds included).
    #[inline]
    pub fn contains_zero(&self) -> bool {
        self.inf <= 0.0 && self.sup >= 0.0
    }

    /// Returns `true` if the interval contains `value` (bounds included).
    ///
    /// Always `false` for the empty interval.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.inf <= value && self.sup >= value
    }

    /// Returns `true` if the interval contains `value` up to `tolerance`.
    #[inline]
    pub fn contains_approx(&self, value: f64, tolerance: f64) -> bool {
        self.inf <= value + tolerance && self.sup >= value - tolerance
    }

    /// Returns `true` if the two intervals have no point in common.
    #[inline]
    pub fn disjoint(&self, other: &Interval) -> bool {
        if self.is_empty() || other.is_empty() {
            return true;
        }

        self.sup < other.inf || self.inf > other.sup
    }

    /// Returns `true` if `self` lies within `other` (bounds allowed).
    ///
    /// The empty interval is a subset of everything.
    #[inline]
    pub fn is_subset_of(&self, other: &Interval) -> bool {
        if self.is_empty() {
            return true;
        }
        if other.is_empty() {
            return false;
        }

        self.inf >= other.inf && self.sup <= other.sup
    }

    /// Returns `true` if `self` lies strictly inside `other` (bounds not
    /// allowed).
    #[inline]
    pub fn is_interior_of(&self, other: &Interval) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        self.inf > other.inf && self.sup < other.sup
    }

    /// Three-valued membership test of `self` in `other`.
    ///
    /// `False` when the intervals are disjoint, `True` when `self` is a
    /// subset of `other`, `Indeterminate` otherwise (including when either
    /// operand is empty, in which case nothing can be certified).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::interval::Interval;
    /// # use caliper_core::truth::Truth;
    ///
    /// let range = Interval::from_inf_sup(0.0, 1.0);
    /// assert_eq!(Interval::from_inf_sup(0.2, 0.8).within(&range), Truth::True);
    /// assert_eq!(Interval::from_inf_sup(2.0, 3.0).within(&range), Truth::False);
    /// assert_eq!(Interval::from_inf_sup(-1.0, 0.5).within(&range), Truth::Indeterminate);
    /// ```
    #[inline]
    pub fn within(&self, other: &Interval) -> Truth {
        if self.is_empty() || other.is_empty() {
            return Truth::Indeterminate;
        }
        if self.disjoint(other) {
            return Truth::False;
        }
        if self.is_subset_of(other) {
            return Truth::True;
        }

        Truth::Indeterminate
    }

    /// Returns the tightest interval contained in both operands, or
    /// [`Interval::EMPTY`] if they are disjoint.
    ///
    /// Callers must check [`Interval::is_empty`] before feeding the result
    /// into further arithmetic; arithmetic on Empty yields Empty.
    #[inline]
    pub fn intersection(&self, other: &Interval) -> Interval {
        if self.disjoint(other) {
            return Self::EMPTY;
        }

        Self::from_inf_sup(self.inf.max(other.inf), self.sup.min(other.sup))
    }

    /// Returns the midpoint of the interval.
    ///
    /// By convention the midpoint of [`Interval::ENTIRE`] is `0` and the
    /// midpoint of [`Interval::EMPTY`] is NaN.
    #[inline]
    pub fn mid(&self) -> f64 {
        match self.state {
            State::Empty => f64::NAN,
            State::Entire => 0.0,
            State::Finite => (self.inf + self.sup) / 2.0,
        }
    }

    /// Returns the distance between the midpoint and one of the bounds.
    #[inline]
    pub fn rad(&self) -> f64 {
        match self.state {
            State::Empty => f64::NAN,
            _ => (self.sup - self.inf) / 2.0,
        }
    }

    /// Returns the distance between the lower and upper bound.
    #[inline]
    pub fn diam(&self) -> f64 {
        match self.state {
            State::Empty => f64::NAN,
            _ => self.sup - self.inf,
        }
    }

    /// Returns the supremum of the interval's absolute value.
    #[inline]
    pub fn mag(&self) -> f64 {
        self.inf.abs().max(self.sup.abs())
    }

    /// Returns the infimum of the interval's absolute value.
    #[inline]
    pub fn mig(&self) -> f64 {
        if self.contains_zero() {
            0.0
        } else {
            self.inf.abs().min(self.sup.abs())
        }
    }

    /// Splits the interval at its midpoint.
    ///
    /// The children share the midpoint as a bound, so their union is exactly
    /// the parent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use caliper_core::interval::Interval;
    ///
    /// let (left, right) = Interval::from_inf_sup(0.0, 2.0).bisect();
    /// assert_eq!(left.sup(), 1.0);
    /// assert_eq!(right.inf(), 1.0);
    /// ```
    #[inline]
    pub fn bisect(&self) -> (Interval, Interval) {
        let mid = self.mid();

        (
            Self::from_inf_sup(self.inf, mid),
            Self::from_inf_sup(mid, self.sup),
        )
    }

    /// Splits the interval at `inf + fraction * diam`.
    ///
    /// A fraction slightly off `0.5` implements biased splitting strategies
    /// that avoid landing the cut exactly on a solution boundary.
    #[inline]
    pub fn bisect_at(&self, fraction: f64) -> (Interval, Interval) {
        let cut = self.inf + fraction * (self.sup - self.inf);

        (
            Self::from_inf_sup(self.inf, cut),
            Self::from_inf_sup(cut, self.sup),
        )
    }

    /// Cuts the interval into `n` sub-intervals of equal width.
    pub fn partition(&self, n: usize) -> Vec<Interval> {
        let delta = self.diam() / n as f64;
        let mut current = self.inf;
        let mut parts = Vec::with_capacity(n);

        while current + delta <= self.sup {
            parts.push(Self::from_inf_sup(current, current + delta));
            current += delta;
        }

        parts
    }

    /// Clamps the upper bound to `sup` if it exceeds it.
    ///
    /// Useful to cut off values that are logically impossible, for example a
    /// probability above one.
    #[inline]
    pub fn truncate_sup(&self, sup: f64) -> Interval {
        if self.sup <= sup {
            *self
        } else {
            Self::from_inf_sup(self.inf, sup)
        }
    }

    /// Clamps the lower bound to `inf` if it falls below it.
    #[inline]
    pub fn truncate_inf(&self, inf: f64) -> Interval {
        if self.inf >= inf {
            *self
        } else {
            Self::from_inf_sup(inf, self.sup)
        }
    }

    /// Widens the interval by one rounding step on each side.
    ///
    /// Sentinel states are returned unchanged.
    #[inline]
    pub fn epsilon_inflation(&self) -> Interval {
        match self.state {
            State::Finite => Self::from_inf_sup(self.inf.inflate_down(), self.sup.inflate_up()),
            _ => *self,
        }
    }

    /// Returns `true` if the interval lies entirely left of `other`.
    #[inline]
    pub fn strictly_precedes(&self, other: &Interval) -> bool {
        self.sup < other.inf
    }

    /// Returns `true` if the interval lies left of `other`, allowing the
    /// bounds to touch.
    #[inline]
    pub fn precedes(&self, other: &Interval) -> bool {
        self.sup <= other.inf
    }

    /// Returns `true` if the interval lies entirely right of `other`.
    #[inline]
    pub fn strictly_succeeds(&self, other: &Interval) -> bool {
        self.inf > other.sup
    }

    /// Returns `true` if the interval lies right of `other`, allowing the
    /// bounds to touch.
    #[inline]
    pub fn succeeds(&self, other: &Interval) -> bool {
        self.inf >= other.sup
    }

    /// Returns `true` if every point of the interval is below `value`.
    #[inline]
    pub fn is_below(&self, value: f64) -> bool {
        self.sup < value
    }

    /// Returns `true` if every point of the interval is above `value`.
    #[inline]
    pub fn is_above(&self, value: f64) -> bool {
        self.inf > value
    }

    /// Renders the interval in the given format.
    ///
    /// With `decimal_digits` set, the printed bounds (or radius) are inflated
    /// by one unit of the last printed digit before rounding, so the printed
    /// interval still encloses the actual one.
    pub fn format(&self, format: IntervalFormat, decimal_digits: Option<u32>) -> String {
        if self.is_empty() {
            return "[ empty ]".to_string();
        }

        let Some(digits) = decimal_digits else {
            return match format {
                IntervalFormat::InfSup => format!("[ {} , {} ]", self.inf, self.sup),
                IntervalFormat::MidRad => format!("< {} , {} >", self.mid(), self.rad()),
                IntervalFormat::ValDev => format!("{} ± {}", self.mid(), self.rad()),
            };
        };

        let inflation = 10f64.powi(-(digits as i32));

        if format == IntervalFormat::InfSup {
            let inf = round_to(self.inf - inflation, digits);
            let sup = round_to(self.sup + inflation, digits);
            return format!("[ {} , {} ]", inf, sup);
        }

        let rad = round_to(self.rad() + inflation, digits);
        let mid = round_to(self.mid(), digits);

        match format {
            IntervalFormat::MidRad => format!("< {} , {} >", mid, rad),
            _ => format!("{} ± {}", mid, rad),
        }
    }
}

/// Rounds `value` to the given number of decimal digits.
fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}

impl PartialEq for Interval {
    /// Two intervals are equal when they are in the same state and, for
    /// ordinary intervals, have the same bounds.
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && (self.state != State::Finite || (self.inf == other.inf && self.sup == other.sup))
    }
}

impl PartialOrd for Interval {
    /// Interval ordering: `a < b` holds only when `a` lies entirely left of
    /// `b`. Overlapping intervals are unordered and compare as `None`.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_empty() || other.is_empty() {
            return None;
        }
        if self == other {
            return Some(Ordering::Equal);
        }
        if self.strictly_precedes(other) {
            return Some(Ordering::Less);
        }
        if self.strictly_succeeds(other) {
            return Some(Ordering::Greater);
        }

        None
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format(IntervalFormat::MidRad, None))
    }
}

impl std::ops::Neg for Interval {
    type Output = Interval;

    #[inline]
    fn neg(self) -> Interval {
        if self.is_empty() {
            return Self::EMPTY;
        }

        Self::from_inf_sup(-self.sup, -self.inf)
    }
}

impl std::ops::Add for Interval {
    type Output = Interval;

    #[inline]
    fn add(self, rhs: Interval) -> Interval {
        if self.is_empty() || rhs.is_empty() {
            return Self::EMPTY;
        }

        Self::from_inf_sup(
            (self.inf + rhs.inf).inflate_down(),
            (self.sup + rhs.sup).inflate_up(),
        )
    }
}

impl std::ops::Sub for Interval {
    type Output = Interval;

    #[inline]
    fn sub(self, rhs: Interval) -> Interval {
        if self.is_empty() || rhs.is_empty() {
            return Self::EMPTY;
        }

        Self::from_inf_sup(
            (self.inf - rhs.sup).inflate_down(),
            (self.sup - rhs.inf).inflate_up(),
        )
    }
}

impl std::ops::Mul for Interval {
    type Output = Interval;

    fn mul(self, rhs: Interval) -> Interval {
        if self.is_empty() || rhs.is_empty() {
            return Self::EMPTY;
        }
        // A zero operand annihilates even infinite bounds, where the raw
        // endpoint products would degenerate to NaN.
        if self.is_zero() || rhs.is_zero() {
            return Self::ZERO;
        }

        let products = [
            (self.inf * rhs.inf).inflate_down(),
            (self.inf * rhs.sup).inflate_down(),
            (self.sup * rhs.inf).inflate_down(),
            (self.sup * rhs.sup).inflate_down(),
            (self.inf * rhs.inf).inflate_up(),
            (self.inf * rhs.sup).inflate_up(),
            (self.sup * rhs.inf).inflate_up(),
            (self.sup * rhs.sup).inflate_up(),
        ];

        let inf = products.iter().copied().fold(f64::INFINITY, f64::min);
        let sup = products.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self::from_inf_sup(inf, sup)
    }
}

impl std::ops::Div for Interval {
    type Output = Interval;

    fn div(self, rhs: Interval) -> Interval {
        if self.is_empty() || rhs.is_empty() {
            return Self::EMPTY;
        }

        // Zero-in-denominator cases, from the exact zero to the proper
        // straddle to the one-sided touch.
        if rhs.is_zero() {
            return Self::EMPTY;
        }
        if rhs.inf < 0.0 && rhs.sup > 0.0 {
            return Self::ENTIRE;
        }
        if rhs.inf == 0.0 {
            return self * Self::from_inf_sup((1.0 / rhs.sup).inflate_down(), f64::INFINITY);
        }
        if rhs.sup == 0.0 {
            return self * Self::from_inf_sup(f64::NEG_INFINITY, (1.0 / rhs.inf).inflate_up());
        }

        self * Self::from_inf_sup(
            (1.0 / rhs.sup).inflate_down(),
            (1.0 / rhs.inf).inflate_up(),
        )
    }
}

macro_rules! scalar_op_impl {
    ($op_trait:ident, $method:ident) => {
        impl std::ops::$op_trait<f64> for Interval {
            type Output = Interval;

            #[inline]
            fn $method(self, rhs: f64) -> Interval {
                self.$method(Interval::from_inf_sup(rhs, rhs))
            }
        }

        impl std::ops::$op_trait<Interval> for f64 {
            type Output = Interval;

            #[inline]
            fn $method(self, rhs: Interval) -> Interval {
                Interval::from_inf_sup(self, self).$method(rhs)
            }
        }
    };
}

scalar_op_impl!(Add, add);
scalar_op_impl!(Sub, sub);
scalar_op_impl!(Mul, mul);
scalar_op_impl!(Div, div);
