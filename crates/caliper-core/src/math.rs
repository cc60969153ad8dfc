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

//! Rigorous enclosures of the common mathematical functions.
//!
//! Each function returns an interval guaranteed to contain the range of the
//! real function over the input interval. Monotone functions map their
//! endpoints with outward rounding; the trigonometric functions additionally
//! widen to the global extrema whenever the input contains a critical point,
//! detected through the rigorous pi enclosures. Inputs entirely outside a
//! function's mathematical domain raise a [`DomainError`], except for the
//! documented extensions of [`ln`] and [`xlog`].
//!
//! The [`xlog`] operator (`x * ln(x)` continuously extended with `0` at zero)
//! is the workhorse of entropy-style objectives. Its undefined cases are
//! recovered locally: the call returns [`Interval::EMPTY`] and counts the
//! event in an [`EnclosureDiagnostics`] accumulator owned by the caller, so a
//! long optimization run can report how often its enclosures degraded.

use crate::interval::Interval;
use crate::num::round::{InflateDown, InflateUp};
use thiserror::Error;

/// Width of the band around zero inside which arguments are treated as the
/// removable singularity of [`xlog`]. Tuned empirically; downstream problem
/// code depends on this exact tolerance.
pub const ZERO_PRECISION: f64 = 1e-5;

/// The location of the global minimum of `x * ln(x)`, i.e. `1/e`.
#[inline]
pub fn xlog_min() -> f64 {
    (-1.0f64).exp()
}

/// Errors raised by enclosure functions on arguments outside their domain.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum DomainError {
    /// Negative argument passed to [`sqrt`].
    #[error("negative arguments are invalid for sqrt")]
    NegativeSqrt,
    /// Non-positive argument passed to [`log`].
    #[error("negative arguments are invalid for log")]
    NonPositiveLog,
    /// Base smaller than one passed to [`log`].
    #[error("bases smaller than 1 are invalid")]
    InvalidLogBase,
    /// Argument outside `[-2*pi, 2*pi]` passed to [`sin`] or [`cos`].
    #[error("sine and cosine are only implemented for arguments between -2*pi and 2*pi")]
    TrigOutOfRange,
}

/// Per-run diagnostic accumulator for recovered enclosure failures.
///
/// Replaces a global counter: each optimization run owns one accumulator,
/// passes it to every [`xlog`] evaluation, and reads the total afterwards.
/// The count is a tightness diagnostic, not a correctness signal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnclosureDiagnostics {
    undefined_xlog: u64,
}

impl EnclosureDiagnostics {
    /// Creates a fresh accumulator with all counters at zero.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one recovered undefined-xlog evaluation.
    #[inline]
    pub fn record_undefined_xlog(&mut self) {
        self.undefined_xlog = self.undefined_xlog.saturating_add(1);
    }

    /// Returns how many undefined-xlog evaluations were recovered.
    #[inline]
    pub fn undefined_xlog(&self) -> u64 {
        self.undefined_xlog
    }

    /// Resets all counters to zero.
    #[inline]
    pub fn reset(&mut self) {
        self.undefined_xlog = 0;
    }
}

impl std::fmt::Display for EnclosureDiagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EnclosureDiagnostics(undefined_xlog: {})", self.undefined_xlog)
    }
}

/// Enclosure of the absolute value.
pub fn abs(i: Interval) -> Interval {
    let abs_inf = i.inf().abs();
    let abs_sup = i.sup().abs();

    if i.contains_zero() {
        Interval::from_inf_sup(0.0, abs_inf.max(abs_sup))
    } else {
        Interval::from_inf_sup(abs_inf.min(abs_sup), abs_inf.max(abs_sup))
    }
}

/// Enclosure of the cosine, defined for arguments within `[-2*pi, 2*pi]`.
///
/// An input wider than `2*pi` trivially collapses to `[-1, 1]`. Otherwise the
/// four rounded endpoint evaluations are widened to the global extrema
/// whenever the input contains a critical point: `0` or `±2*pi` pin the
/// maximum to `1`, `±pi` pins the minimum to `-1`.
///
/// # Errors
///
/// Returns [`DomainError::TrigOutOfRange`] when the input lies outside
/// `[-2*pi, 2*pi]`.
pub fn cos(i: Interval) -> Result<Interval, DomainError> {
    if i.is_empty() {
        return Ok(Interval::EMPTY);
    }
    if i.diam() > Interval::TWO_PI.sup() {
        return Ok(Interval::from_inf_sup(-1.0, 1.0));
    }
    if i.inf() > Interval::TWO_PI.sup() || i.inf() < -Interval::TWO_PI.sup() {
        return Err(DomainError::TrigOutOfRange);
    }

    let bounds = [
        i.inf().cos().inflate_down(),
        i.sup().cos().inflate_down(),
        i.inf().cos().inflate_up(),
        i.sup().cos().inflate_up(),
    ];

    let mut infimum = bounds.iter().copied().fold(f64::INFINITY, f64::min);
    let mut supremum = bounds.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // Critical points.
    if i.contains_zero()
        || Interval::TWO_PI.is_subset_of(&i)
        || Interval::TWO_PI.is_subset_of(&-i)
    {
        supremum = 1.0;
    }
    if Interval::PI.is_subset_of(&i) || Interval::PI.is_subset_of(&-i) {
        infimum = -1.0;
    }

    Ok(Interval::from_inf_sup(infimum, supremum))
}

/// Enclosure of the sine, defined for arguments within `[-2*pi, 2*pi]`.
///
/// Same structure as [`cos`]; the critical points are `pi/2` and `3*pi/2`
/// (and their mirror images) instead.
///
/// # Errors
///
/// Returns [`DomainError::TrigOutOfRange`] when the input lies outside
/// `[-2*pi, 2*pi]`.
pub fn sin(i: Interval) -> Result<Interval, DomainError> {
    if i.is_empty() {
        return Ok(Interval::EMPTY);
    }
    if i.diam() > Interval::TWO_PI.sup() {
        return Ok(Interval::from_inf_sup(-1.0, 1.0));
    }
    if i.inf() > Interval::TWO_PI.sup() || i.inf() < -Interval::TWO_PI.sup() {
        return Err(DomainError::TrigOutOfRange);
    }

    let bounds = [
        i.inf().sin().inflate_down(),
        i.sup().sin().inflate_down(),
        i.inf().sin().inflate_up(),
        i.sup().sin().inflate_up(),
    ];

    let mut infimum = bounds.iter().copied().fold(f64::INFINITY, f64::min);
    let mut supremum = bounds.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // Critical points.
    if Interval::HALF_PI.is_subset_of(&i) || Interval::THREE_HALF_PI.is_subset_of(&-i) {
        supremum = 1.0;
    }
    if Interval::THREE_HALF_PI.is_subset_of(&i) || Interval::HALF_PI.is_subset_of(&-i) {
        infimum = -1.0;
    }

    Ok(Interval::from_inf_sup(infimum, supremum))
}

/// Enclosure of the exponential.
pub fn exp(i: Interval) -> Interval {
    Interval::from_inf_sup(i.inf().exp().inflate_down(), i.sup().exp().inflate_up())
}

/// Enclosure of the logarithm in the given base, defined for positive
/// intervals and bases of at least one.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveLog`] unless the input is strictly
/// positive, and [`DomainError::InvalidLogBase`] for a base below one.
pub fn log(i: Interval, base: f64) -> Result<Interval, DomainError> {
    if !i.is_positive() {
        return Err(DomainError::NonPositiveLog);
    }
    if base < 1.0 {
        return Err(DomainError::InvalidLogBase);
    }

    Ok(Interval::from_inf_sup(
        i.inf().log(base).inflate_down(),
        i.sup().log(base).inflate_up(),
    ))
}

/// Extended natural logarithm, defined on the whole real line.
///
/// The sub-domain at or below zero maps to negative infinity instead of
/// failing: the input is clipped to `[0, +inf)` first, `[0, 0]` yields
/// `[-inf, -inf]`, and a zero endpoint of the clipped interval becomes a
/// `-inf` bound. The endpoint logarithms are deliberately not rounded
/// outward; downstream tuning depends on the raw values.
pub fn ln(i: Interval) -> Interval {
    if i.is_empty() {
        return Interval::EMPTY;
    }

    let j = Interval::from_inf_sup(i.inf().max(0.0), i.sup().max(0.0));
    if j == Interval::ZERO {
        return Interval::from_inf_sup(f64::NEG_INFINITY, f64::NEG_INFINITY);
    }

    Interval::from_inf_sup(
        if j.inf() == 0.0 { f64::NEG_INFINITY } else { j.inf().ln() },
        if j.sup() == 0.0 { f64::NEG_INFINITY } else { j.sup().ln() },
    )
}

/// Enclosure of the integer power `i^exponent`.
///
/// Odd exponents map the endpoints monotonically; even exponents case-split
/// on the sign, clamping the minimum to zero when the base straddles zero.
pub fn pown(i: Interval, exponent: i32) -> Interval {
    // Odd exponent.
    if exponent % 2 != 0 {
        return Interval::from_inf_sup(
            i.inf().powi(exponent).inflate_down(),
            i.sup().powi(exponent).inflate_up(),
        );
    }

    // Even exponent.
    if i.inf() >= 0.0 {
        return Interval::from_inf_sup(
            i.inf().powi(exponent).inflate_down(),
            i.sup().powi(exponent).inflate_up(),
        );
    }
    if i.sup() < 0.0 {
        return Interval::from_inf_sup(
            i.sup().powi(exponent).inflate_down(),
            i.inf().powi(exponent).inflate_up(),
        );
    }

    let power_inf = i.inf().powi(exponent).inflate_up();
    let power_sup = i.sup().powi(exponent).inflate_up();

    Interval::from_inf_sup(0.0, power_inf.max(power_sup))
}

/// Enclosure of the square.
///
/// Tighter than `i * i` when the interval straddles zero: the dependent
/// multiplication would produce a spurious negative lower bound, while the
/// true square is never negative.
pub fn sqr(i: Interval) -> Interval {
    if !i.contains_zero() {
        return i * i;
    }

    let abs_max = i.inf().abs().max(i.sup().abs());

    Interval::from_inf_sup(0.0, (abs_max * abs_max).inflate_up())
}

/// Enclosure of the square root, defined for non-negative intervals.
///
/// # Errors
///
/// Returns [`DomainError::NegativeSqrt`] when the infimum is negative.
pub fn sqrt(i: Interval) -> Result<Interval, DomainError> {
    if i.inf() < 0.0 {
        return Err(DomainError::NegativeSqrt);
    }

    Ok(Interval::from_inf_sup(
        i.inf().sqrt().inflate_down(),
        i.sup().sqrt().inflate_up(),
    ))
}

/// Point evaluation of `x * ln(x)` continuously extended with `0` at zero.
///
/// Negative arguments have no value and yield NaN.
#[inline]
pub fn xlog_point(a: f64) -> f64 {
    if a == 0.0 {
        0.0
    } else if a < 0.0 {
        f64::NAN
    } else {
        a * a.ln()
    }
}

/// Enclosure of `x * ln(x)` continuously extended with `0` at zero.
///
/// The input is case-split against the single critical point `1/e` (where
/// the function attains its global minimum `-1/e`) and against the
/// [`ZERO_PRECISION`] band around zero, inside which arguments are treated
/// as the removable singularity. An input whose supremum is negative has no
/// value: the failure is recovered locally by returning
/// [`Interval::EMPTY`] and counting the event in `diagnostics`.
pub fn xlog(i: Interval, diagnostics: &mut EnclosureDiagnostics) -> Interval {
    if i.is_empty() || i.sup() < 0.0 {
        diagnostics.record_undefined_xlog();
        return Interval::EMPTY;
    }

    let min_point = xlog_min();

    // x in (eps, 1/e]: strictly decreasing.
    if i.sup() <= min_point && i.inf() > ZERO_PRECISION {
        return Interval::from_inf_sup(xlog_point(i.sup()), xlog_point(i.inf()));
    }
    // x in [0, 1/e] touching the zero band: decreasing, maximum pinned at 0.
    if i.inf() <= ZERO_PRECISION && i.sup() <= min_point {
        return Interval::from_inf_sup(xlog_point(i.sup()), 0.0);
    }
    // Straddling 1/e with the infimum above the zero band.
    if i.inf() <= min_point && i.sup() >= min_point && i.inf() >= ZERO_PRECISION {
        return Interval::from_inf_sup(
            xlog_point(min_point),
            xlog_point(i.inf()).max(xlog_point(i.sup())),
        );
    }
    // Straddling 1/e with the infimum inside the zero band.
    if i.inf() <= min_point && i.sup() >= min_point && i.inf() <= ZERO_PRECISION {
        return Interval::from_inf_sup(xlog_point(min_point), 0.0f64.max(xlog_point(i.sup())));
    }
    // x in [1/e, +oo): strictly increasing.
    if i.inf() >= min_point {
        return Interval::from_inf_sup(xlog_point(i.inf()), xlog_point(i.sup()));
    }

    // Unreachable for valid inputs; kept as the recovery of last resort.
    diagnostics.record_undefined_xlog();
    Interval::ZERO
}

/// First-order slope enclosure of `x * ln(x)` about `pivot`.
///
/// The lower bound combines the pivot evaluation with the unit offset of the
/// derivative; the upper bound is the secant slope from the pivot to the
/// interval's supremum. Pivots below zero are clamped to zero.
pub fn xlog_slope(pivot: f64, i: Interval) -> Interval {
    let pivot = pivot.max(0.0);

    let slope_inf = xlog_point(pivot) + 1.0;
    let slope_sup = (xlog_point(i.sup()) - xlog_point(pivot)) / (i.sup() - pivot);

    Interval::from_inf_sup(slope_inf, slope_sup)
}

/// Slope enclosure of `x * ln(x)` pivoted at the interval's infimum.
#[inline]
pub fn xlog_slope_inf(i: Interval) -> Interval {
    xlog_slope(i.inf(), i)
}

/// Slope enclosure of `x * ln(x)` pivoted at the interval's supremum.
#[inline]
pub fn xlog_slope_sup(i: Interval) -> Interval {
    xlog_slope(i.sup(), i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_abs_straddling_and_one_sided() {
        assert_eq!(
            abs(Interval::from_inf_sup(-3.0, 2.0)),
            Interval::from_inf_sup(0.0, 3.0)
        );
        assert_eq!(
            abs(Interval::from_inf_sup(-5.0, -2.0)),
            Interval::from_inf_sup(2.0, 5.0)
        );
        assert_eq!(
            abs(Interval::from_inf_sup(2.0, 5.0)),
            Interval::from_inf_sup(2.0, 5.0)
        );
    }

    #[test]
    fn test_sqrt_domain_and_enclosure() {
        assert_eq!(
            sqrt(Interval::from_inf_sup(-1.0, 4.0)),
            Err(DomainError::NegativeSqrt)
        );

        let root = sqrt(Interval::from_inf_sup(4.0, 9.0)).unwrap();
        assert!(root.contains(2.0));
        assert!(root.contains(3.0));
        assert!(root.diam() < 1.0 + 1e-12);
    }

    #[test]
    fn test_exp_is_monotone_enclosure() {
        let e = exp(Interval::from_inf_sup(0.0, 1.0));
        assert!(e.contains(1.0));
        assert!(e.contains(std::f64::consts::E));
        assert!(e.inf() < 1.0);
        assert!(e.sup() > std::f64::consts::E);
    }

    #[test]
    fn test_log_domain_checks() {
        assert_eq!(
            log(Interval::from_inf_sup(-1.0, 2.0), 10.0),
            Err(DomainError::NonPositiveLog)
        );
        assert_eq!(
            log(Interval::from_inf_sup(1.0, 2.0), 0.5),
            Err(DomainError::InvalidLogBase)
        );

        let l = log(Interval::from_inf_sup(1.0, 100.0), 10.0).unwrap();
        assert!(l.contains(0.0));
        assert!(l.contains(2.0));
    }

    #[test]
    fn test_ln_extension() {
        assert_eq!(
            ln(Interval::ZERO),
            Interval::from_inf_sup(f64::NEG_INFINITY, f64::NEG_INFINITY)
        );
        assert_eq!(
            ln(Interval::from_inf_sup(-2.0, -1.0)),
            Interval::from_inf_sup(f64::NEG_INFINITY, f64::NEG_INFINITY)
        );

        let touching = ln(Interval::from_inf_sup(0.0, 1.0));
        assert_eq!(touching.inf(), f64::NEG_INFINITY);
        assert_eq!(touching.sup(), 0.0);

        let positive = ln(Interval::from_inf_sup(1.0, std::f64::consts::E));
        assert!(positive.contains(0.0));
        assert!(positive.contains(1.0));
        assert!(ln(Interval::EMPTY).is_empty());
    }

    #[test]
    fn test_cos_endpoint_enclosure_and_critical_points() {
        // Interval containing zero pins the maximum to 1.
        let around_zero = cos(Interval::from_inf_sup(-0.5, 0.5)).unwrap();
        assert_eq!(around_zero.sup(), 1.0);
        assert!(around_zero.contains(0.5f64.cos()));

        // Interval containing pi pins the minimum to -1.
        let around_pi = cos(Interval::from_inf_sup(3.0, 3.3)).unwrap();
        assert_eq!(around_pi.inf(), -1.0);

        // Monotone section away from critical points.
        let falling = cos(Interval::from_inf_sup(0.5, 1.0)).unwrap();
        assert!(falling.contains(0.75f64.cos()));
        assert!(falling.sup() < 1.0);
    }

    #[test]
    fn test_cos_wide_input_collapses() {
        let wide = cos(Interval::from_inf_sup(-5.0, 5.0)).unwrap();
        assert_eq!(wide, Interval::from_inf_sup(-1.0, 1.0));
    }

    #[test]
    fn test_cos_out_of_range() {
        assert_eq!(
            cos(Interval::from_inf_sup(7.0, 8.0)),
            Err(DomainError::TrigOutOfRange)
        );
        assert_eq!(
            cos(Interval::from_inf_sup(-8.0, -7.0)),
            Err(DomainError::TrigOutOfRange)
        );
    }

    #[test]
    fn test_sin_critical_points() {
        let around_half_pi = sin(Interval::from_inf_sup(1.5, 1.7)).unwrap();
        assert_eq!(around_half_pi.sup(), 1.0);

        let around_three_half_pi = sin(Interval::from_inf_sup(4.6, 4.8)).unwrap();
        assert_eq!(around_three_half_pi.inf(), -1.0);

        let mirrored = sin(Interval::from_inf_sup(-1.7, -1.5)).unwrap();
        assert_eq!(mirrored.inf(), -1.0);

        let rising = sin(Interval::from_inf_sup(0.0, 0.5)).unwrap();
        assert!(rising.contains(0.25f64.sin()));
        assert!(rising.sup() < 1.0);
    }

    #[test]
    fn test_pown_cases() {
        let odd = pown(Interval::from_inf_sup(2.0, 3.0), 3);
        assert!(odd.contains(8.0));
        assert!(odd.contains(27.0));

        let odd_negative = pown(Interval::from_inf_sup(-2.0, -1.0), 3);
        assert!(odd_negative.contains(-8.0));
        assert!(odd_negative.contains(-1.0));

        let even_negative = pown(Interval::from_inf_sup(-3.0, -2.0), 2);
        assert!(even_negative.contains(4.0));
        assert!(even_negative.contains(9.0));
        assert!(even_negative.inf() > 0.0);

        let straddle = pown(Interval::from_inf_sup(-2.0, 3.0), 2);
        assert_eq!(straddle.inf(), 0.0);
        assert!(straddle.contains(9.0));
    }

    #[test]
    fn test_sqr_straddling_clamps_to_zero() {
        let straddle = sqr(Interval::from_inf_sup(-3.0, 2.0));
        assert_eq!(straddle.inf(), 0.0);
        assert!(straddle.contains(9.0));
        assert!(straddle.sup() < 9.0 + 1e-12);

        let positive = sqr(Interval::from_inf_sup(2.0, 3.0));
        assert!(positive.contains(4.0));
        assert!(positive.contains(9.0));
    }

    #[test]
    fn test_console_check_reproduces_exact_outward_bounds() {
        // Sqr([2,3] - [-4,5]) + [-3,2]: the raw bounds are (-3) and 51, and
        // the implementation must land one rounding step outside them.
        let it = sqr(Interval::from_inf_sup(2.0, 3.0) - Interval::from_inf_sup(-4.0, 5.0))
            + Interval::from_inf_sup(-3.0, 2.0);

        assert!(it.inf() <= -3.0);
        assert!(it.inf() >= -3.0 - 1e-12);
        assert!(it.sup() >= 51.0);
        assert!(it.sup() <= 51.0 + 1e-12);
        assert!(Interval::from_inf_sup(-3.0, 51.0).is_subset_of(&it));
    }

    #[test]
    fn test_xlog_of_zero_is_zero() {
        let mut diagnostics = EnclosureDiagnostics::new();
        assert_eq!(xlog(Interval::ZERO, &mut diagnostics), Interval::ZERO);
        assert_eq!(diagnostics.undefined_xlog(), 0);
    }

    #[test]
    fn test_xlog_converges_to_zero_near_the_singularity() {
        let mut diagnostics = EnclosureDiagnostics::new();
        let tiny = xlog(Interval::from_inf_sup(1e-7, 1e-6), &mut diagnostics);

        assert_eq!(tiny.sup(), 0.0);
        assert!(tiny.inf() > -1e-4);
    }

    #[test]
    fn test_xlog_decreasing_region() {
        let mut diagnostics = EnclosureDiagnostics::new();
        let i = xlog(Interval::from_inf_sup(0.1, 0.2), &mut diagnostics);

        assert_relative_eq!(i.inf(), 0.2 * 0.2f64.ln(), max_relative = 1e-12);
        assert_relative_eq!(i.sup(), 0.1 * 0.1f64.ln(), max_relative = 1e-12);
    }

    #[test]
    fn test_xlog_straddling_the_minimum() {
        let mut diagnostics = EnclosureDiagnostics::new();

        let above_band = xlog(Interval::from_inf_sup(0.2, 1.0), &mut diagnostics);
        assert_relative_eq!(above_band.inf(), -(-1.0f64).exp(), max_relative = 1e-12);
        assert_eq!(above_band.sup(), 0.0);

        let touching_zero = xlog(Interval::from_inf_sup(0.0, 1.5), &mut diagnostics);
        assert_relative_eq!(touching_zero.inf(), -(-1.0f64).exp(), max_relative = 1e-12);
        assert_relative_eq!(touching_zero.sup(), 1.5 * 1.5f64.ln(), max_relative = 1e-12);
    }

    #[test]
    fn test_xlog_increasing_region() {
        let mut diagnostics = EnclosureDiagnostics::new();
        let i = xlog(Interval::from_inf_sup(1.0, 2.0), &mut diagnostics);

        assert_eq!(i.inf(), 0.0);
        assert_relative_eq!(i.sup(), 2.0 * 2.0f64.ln(), max_relative = 1e-12);
    }

    #[test]
    fn test_xlog_negative_input_recovers_to_empty() {
        let mut diagnostics = EnclosureDiagnostics::new();
        let i = xlog(Interval::from_inf_sup(-2.0, -1.0), &mut diagnostics);

        assert!(i.is_empty());
        assert_eq!(diagnostics.undefined_xlog(), 1);

        xlog(Interval::EMPTY, &mut diagnostics);
        assert_eq!(diagnostics.undefined_xlog(), 2);

        diagnostics.reset();
        assert_eq!(diagnostics.undefined_xlog(), 0);
    }

    #[test]
    fn test_xlog_soundness_sampled() {
        let mut diagnostics = EnclosureDiagnostics::new();
        let mut rng = StdRng::seed_from_u64(23);

        for _ in 0..2000 {
            let a = rng.gen_range(0.001..3.0);
            let b = rng.gen_range(0.001..3.0);
            let i = Interval::from_inf_sup(a, b);
            let enclosure = xlog(i, &mut diagnostics);

            let t: f64 = rng.gen_range(0.0..=1.0);
            let x = i.inf() + t * (i.sup() - i.inf());
            assert!(
                enclosure.contains_approx(xlog_point(x), 1e-12),
                "xlog({}) escaped the enclosure of xlog({})",
                x,
                i
            );
        }

        assert_eq!(diagnostics.undefined_xlog(), 0);
    }

    #[test]
    fn test_xlog_slope_about_the_infimum() {
        let slope = xlog_slope_inf(Interval::from_inf_sup(1.0, 2.0));

        assert_eq!(slope.inf(), 1.0);
        assert_relative_eq!(slope.sup(), 2.0 * 2.0f64.ln(), max_relative = 1e-12);
    }

    #[test]
    fn test_xlog_slope_clamps_negative_pivot() {
        let slope = xlog_slope(-0.5, Interval::from_inf_sup(-0.5, 1.0));

        assert_eq!(slope.inf(), 0.0);
        assert_eq!(slope.sup(), 1.0);
    }
}
