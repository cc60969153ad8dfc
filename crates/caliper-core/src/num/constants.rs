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

//! Rigorous constant enclosures
//!
//! Bound pairs for the transcendental constants used by the trigonometric
//! enclosure functions. Each pair is a pre-computed pair of decimal literals
//! chosen so that the parsed `f64` values bracket the true constant; they are
//! never derived at runtime, which keeps the enclosures independent of any
//! platform rounding behavior. The brackets are verified against the `f64`
//! standard library constants in the tests below.

/// Lower bound of the rigorous enclosure of pi.
pub const PI_INF: f64 = 3.141592653589793;

/// Upper bound of the rigorous enclosure of pi.
pub const PI_SUP: f64 = 3.141592653589794;

/// Lower bound of the rigorous enclosure of 2*pi.
pub const TWO_PI_INF: f64 = 6.283185307179586;

/// Upper bound of the rigorous enclosure of 2*pi.
pub const TWO_PI_SUP: f64 = 6.283185307179588;

/// Lower bound of the rigorous enclosure of pi/2.
pub const HALF_PI_INF: f64 = 1.5707963267948966;

/// Upper bound of the rigorous enclosure of pi/2.
pub const HALF_PI_SUP: f64 = 1.5707963267948968;

/// Lower bound of the rigorous enclosure of 3*pi/2.
pub const THREE_HALF_PI_INF: f64 = 4.712388980384689;

/// Upper bound of the rigorous enclosure of 3*pi/2.
pub const THREE_HALF_PI_SUP: f64 = 4.712388980384691;

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts;

    // `f64::consts::PI` is the representable value nearest to pi, so a bound
    // pair that straddles it with room for one rounding step on each side is
    // guaranteed to enclose the true constant.

    #[test]
    fn test_pi_enclosure_brackets_the_float_constant() {
        assert!(PI_INF <= consts::PI);
        assert!(PI_SUP > consts::PI);
        assert!(PI_SUP - PI_INF < 1e-14, "enclosure should stay tight");
    }

    #[test]
    fn test_two_pi_enclosure_brackets_the_float_constant() {
        assert!(TWO_PI_INF <= consts::TAU);
        assert!(TWO_PI_SUP > consts::TAU);
        assert!(TWO_PI_SUP - TWO_PI_INF < 1e-14);
    }

    #[test]
    fn test_half_pi_enclosure_brackets_the_float_constant() {
        assert!(HALF_PI_INF <= consts::FRAC_PI_2);
        assert!(HALF_PI_SUP > consts::FRAC_PI_2);
        assert!(HALF_PI_SUP - HALF_PI_INF < 1e-14);
    }

    #[test]
    fn test_three_half_pi_enclosure_brackets_the_product() {
        let approx = 1.5 * consts::PI;
        assert!(THREE_HALF_PI_INF < approx);
        assert!(THREE_HALF_PI_SUP > approx);
        assert!(THREE_HALF_PI_SUP - THREE_HALF_PI_INF < 1e-13);
    }
}
