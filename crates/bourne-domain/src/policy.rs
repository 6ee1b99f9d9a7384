// Copyright (c) 2025 Felix Kahle.
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

//! # Invariant-Check Policy
//!
//! Whether constructing a [`Domain`](crate::domain::Domain) verifies its value
//! is a build option:
//!
//! - with the `invariant-checks` feature (enabled by default) the check is
//!   always compiled in;
//! - without it, the check is compiled in only when `debug_assertions` are on,
//!   so optimized builds treat the bounds as an unchecked invariant.
//!
//! [`INVARIANT_CHECKS`] reports the effective policy of the current build.

use bourne_core::math::interval::RatioInterval;
use bourne_core::num::real::Real;
use log::error;

/// `true` if construction-time invariant checks are compiled into this build.
pub const INVARIANT_CHECKS: bool = cfg!(any(feature = "invariant-checks", debug_assertions));

/// Enforces `interval.min() <= value <= interval.max()` according to the policy.
///
/// # Panics
///
/// Panics if checks are enabled and `value` lies outside `interval` (or is `NaN`).
#[inline(always)]
#[track_caller]
pub(crate) fn check_invariant<T: Real>(value: T, interval: RatioInterval) {
    if INVARIANT_CHECKS {
        let min = T::from_ratio(interval.min());
        let max = T::from_ratio(interval.max());
        if !value.belongs(min, max) {
            violation(value, min, max);
        }
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn violation<T: Real>(value: T, min: T, max: T) -> ! {
    error!(
        "domain invariant violated: {} value {} is outside [{}, {}]",
        T::NAME,
        value,
        min,
        max
    );
    panic!("value {} is outside the domain [{}, {}]", value, min, max);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bourne_core::math::ratio::Ratio;

    fn interval(min: i128, max: i128) -> RatioInterval {
        RatioInterval::new(Ratio::from_integer(min), Ratio::from_integer(max))
    }

    #[test]
    fn test_policy_matches_build() {
        assert_eq!(
            INVARIANT_CHECKS,
            cfg!(feature = "invariant-checks") || cfg!(debug_assertions)
        );
    }

    #[test]
    fn test_in_bounds_passes() {
        check_invariant(0.0f64, interval(0, 10));
        check_invariant(10.0f64, interval(0, 10));
        check_invariant(-3.5f32, interval(-4, -3));
    }

    #[test]
    #[cfg_attr(
        not(any(feature = "invariant-checks", debug_assertions)),
        ignore = "invariant checks are compiled out"
    )]
    #[should_panic(expected = "value 4.5 is outside the domain [0, 0]")]
    fn test_out_of_bounds_panics() {
        check_invariant(4.5f64, interval(0, 0));
    }

    #[test]
    #[cfg_attr(
        not(any(feature = "invariant-checks", debug_assertions)),
        ignore = "invariant checks are compiled out"
    )]
    #[should_panic(expected = "is outside the domain")]
    fn test_nan_panics() {
        check_invariant(f64::NAN, interval(-1, 1));
    }
}
