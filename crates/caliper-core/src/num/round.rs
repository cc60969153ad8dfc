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

//! Outward rounding primitives
//!
//! Floating point operations round to nearest, so a computed bound can lie on
//! the wrong side of the true mathematical value by up to half a unit in the
//! last place. Every interval operation in this workspace therefore nudges its
//! computed lower bound one representable step toward negative infinity and
//! its computed upper bound one representable step toward positive infinity
//! before storing it. The traits in this module provide that nudge as a
//! by-value API on the float types, mirroring the by-value arithmetic traits
//! in `num::ops`-style numeric toolkits.

macro_rules! inflate_impl {
    ($t:ty) => {
        impl InflateDown for $t {
            #[inline(always)]
            fn inflate_down(self) -> Self {
                self.next_down()
            }
        }

        impl InflateUp for $t {
            #[inline(always)]
            fn inflate_up(self) -> Self {
                self.next_up()
            }
        }
    };
}

/// Rounds a computed value one representable step toward negative infinity.
///
/// Negative infinity maps to itself and NaN passes through unchanged, so the
/// operation is safe to apply to any raw arithmetic result.
///
/// # Examples
///
/// ```rust
/// # use caliper_core::num::round::InflateDown;
///
/// let x: f64 = 1.0;
/// assert!(x.inflate_down() < 1.0);
/// assert_eq!(f64::NEG_INFINITY.inflate_down(), f64::NEG_INFINITY);
/// ```
pub trait InflateDown: Sized {
    /// Returns the greatest representable value strictly below `self`.
    fn inflate_down(self) -> Self;
}

/// Rounds a computed value one representable step toward positive infinity.
///
/// Positive infinity maps to itself and NaN passes through unchanged, so the
/// operation is safe to apply to any raw arithmetic result.
///
/// # Examples
///
/// ```rust
/// # use caliper_core::num::round::InflateUp;
///
/// let x: f64 = 1.0;
/// assert!(x.inflate_up() > 1.0);
/// assert_eq!(f64::INFINITY.inflate_up(), f64::INFINITY);
/// ```
pub trait InflateUp: Sized {
    /// Returns the least representable value strictly above `self`.
    fn inflate_up(self) -> Self;
}

inflate_impl!(f32);
inflate_impl!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inflate_down_is_strictly_smaller_for_finite_values() {
        for &x in &[0.0f64, 1.0, -1.0, 1e-300, -1e300, 3.5] {
            assert!(x.inflate_down() < x, "inflate_down must decrease {}", x);
        }
    }

    #[test]
    fn test_inflate_up_is_strictly_larger_for_finite_values() {
        for &x in &[0.0f64, 1.0, -1.0, 1e-300, -1e300, 3.5] {
            assert!(x.inflate_up() > x, "inflate_up must increase {}", x);
        }
    }

    #[test]
    fn test_inflation_moves_exactly_one_step() {
        let x = 42.0f64;
        assert_eq!(x.inflate_up().inflate_down(), x);
        assert_eq!(x.inflate_down().inflate_up(), x);
    }

    #[test]
    fn test_infinities_are_fixed_points() {
        assert_eq!(f64::INFINITY.inflate_up(), f64::INFINITY);
        assert_eq!(f64::NEG_INFINITY.inflate_down(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_nan_passes_through() {
        assert!(f64::NAN.inflate_up().is_nan());
        assert!(f64::NAN.inflate_down().is_nan());
    }
}
