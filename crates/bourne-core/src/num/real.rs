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

use crate::math::ratio::Ratio;
use num_traits::Float;

/// A floating-point type that can hold the value of a bounded domain.
///
/// Bounds are exact rationals; `from_ratio` is the single point where they
/// meet the working float kind. The conversion is correctly rounded (ties to
/// even), so a bound written as a literal converts to the same value the
/// compiler gives that literal.
///
/// # Examples
///
/// ```rust
/// # use bourne_core::math::ratio::Ratio;
/// # use bourne_core::num::real::Real;
///
/// assert_eq!(f64::from_ratio(Ratio::new(11, 20)), 0.55);
/// assert_eq!(f32::from_ratio(Ratio::new(-7, 2)), -3.5);
/// assert_eq!(<f64 as Real>::NAME, "f64");
/// ```
pub trait Real: Float + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static {
    /// The name of the type, used in diagnostics.
    const NAME: &'static str;

    /// Converts an exact rational to the nearest value of this type.
    fn from_ratio(ratio: Ratio) -> Self;

    /// Returns `true` if `min <= self <= max`. `NaN` belongs to no interval.
    #[inline(always)]
    fn belongs(self, min: Self, max: Self) -> bool {
        min <= self && self <= max
    }
}

macro_rules! impl_real_for {
    ($t:ty, $name:literal) => {
        impl Real for $t {
            const NAME: &'static str = $name;

            #[inline]
            fn from_ratio(ratio: Ratio) -> Self {
                let exact = 1u128 << <$t>::MANTISSA_DIGITS;
                if ratio.numer().unsigned_abs() <= exact
                    && ratio.denom().unsigned_abs() <= exact
                {
                    // Both operands are exact, so IEEE division rounds once.
                    return ratio.numer() as $t / ratio.denom() as $t;
                }
                // The rounded value fits both the precision and the exponent
                // range of the target type, so narrowing from `f64` is exact.
                round_ratio(ratio, <$t>::MANTISSA_DIGITS, <$t>::MIN_EXP - 1) as $t
            }
        }
    };
}

/// Rounds `ratio` to `precision` significant bits, ties to even, with
/// `min_exp` as the exponent of the smallest normal value.
///
/// The quotient is produced by long division of the `i128` parts: one extra
/// bit decides rounding and the remainder acts as the sticky bit.
fn round_ratio(ratio: Ratio, precision: u32, min_exp: i32) -> f64 {
    if ratio.numer() == 0 {
        return 0.0;
    }
    let numer = ratio.numer().unsigned_abs();
    let denom = ratio.denom().unsigned_abs();

    // `mantissa` holds `precision + 1` bits, so the value is
    // `mantissa * 2^exp` before rounding.
    let wanted = precision + 1;
    let quotient = numer / denom;
    let mut remainder = numer % denom;
    let mut mantissa = quotient;
    let mut exp: i32 = 0;
    let mut sticky;

    let quotient_bits = u128::BITS - quotient.leading_zeros();
    if quotient_bits > wanted {
        let shift = quotient_bits - wanted;
        mantissa = quotient >> shift;
        sticky = quotient & ((1u128 << shift) - 1) != 0 || remainder != 0;
        exp = shift as i32;
    } else {
        // `remainder < denom <= i128::MAX`, so doubling cannot overflow.
        while mantissa < (1u128 << precision) {
            remainder <<= 1;
            mantissa <<= 1;
            if remainder >= denom {
                remainder -= denom;
                mantissa |= 1;
            }
            exp -= 1;
        }
        sticky = remainder != 0;
    }

    // Below the normal range the precision shrinks.
    let leading = exp + precision as i32;
    if leading < min_exp {
        let extra = (min_exp - leading) as u32;
        if extra > wanted {
            sticky |= mantissa != 0;
            mantissa = 0;
        } else {
            sticky |= mantissa & ((1u128 << extra) - 1) != 0;
            mantissa >>= extra;
        }
        exp += extra as i32;
    }

    let round = mantissa & 1 == 1;
    mantissa >>= 1;
    exp += 1;
    if round && (sticky || mantissa & 1 == 1) {
        mantissa += 1;
    }

    let magnitude = mantissa as f64 * power_of_two(exp);
    if ratio.is_negative() {
        -magnitude
    } else {
        magnitude
    }
}

/// `2^exp` for exponents in the normal range of `f64`.
#[inline]
fn power_of_two(exp: i32) -> f64 {
    debug_assert!((-1022..=1023).contains(&exp));
    f64::from_bits(((exp + 1023) as u64) << 52)
}

impl_real_for!(f32, "f32");
impl_real_for!(f64, "f64");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ratio() {
        assert_eq!(f64::from_ratio(Ratio::from_integer(-20000)), -20000.0);
        assert_eq!(f64::from_ratio(Ratio::new(-399989, 20)), -19999.45);
        assert_eq!(f32::from_ratio(Ratio::new(11, 20)), 0.55f32);
    }

    #[test]
    fn test_from_ratio_rounds_once() {
        // Numerator and denominator both exceed 2^53.
        let ratio = Ratio::new(83873806956042304114426, 100000000000000000000000);
        assert_eq!(f64::from_ratio(ratio), 0.83873806956042304114426);
        assert_eq!(f64::from_ratio(-ratio), -0.83873806956042304114426);
        assert_eq!(f32::from_ratio(ratio), 0.83873806956042304114426f32);

        let ratio = Ratio::new(12345678901234567890123, 1000);
        assert_eq!(f64::from_ratio(ratio), 12345678901234567890.123);
    }

    #[test]
    fn test_from_ratio_large_and_small_magnitudes() {
        assert_eq!(f64::from_ratio(Ratio::from_integer(i128::MAX)), 2f64.powi(127));
        assert_eq!(f64::from_ratio(Ratio::from_integer(i128::MIN + 1)), -(2f64.powi(127)));
        assert_eq!(f64::from_ratio(Ratio::new(1, i128::MAX)), 2f64.powi(-127));

        // 2^-127 is subnormal for f32.
        assert_eq!(f32::from_ratio(Ratio::new(1, 1 << 126)), 2f32.powi(-126));
        assert_eq!(f32::from_ratio(Ratio::new(3, i128::MAX)), f32::from_bits(3 << 22));
    }

    #[test]
    fn test_from_ratio_ties_to_even() {
        // 2^60 + 2^7 is halfway between two f64 neighbours; the even one is 2^60.
        let tie = Ratio::new((1 << 60) + (1 << 7), 1);
        assert_eq!(f64::from_ratio(tie), 2f64.powi(60));
        let above = Ratio::new((1 << 60) + (1 << 7) + 1, 1);
        assert_eq!(f64::from_ratio(above), 2f64.powi(60) + 256.0);
    }

    #[test]
    fn test_belongs() {
        assert!(5.0f64.belongs(0.55, 20000.0));
        assert!(0.55f64.belongs(0.55, 20000.0));
        assert!(20000.0f64.belongs(0.55, 20000.0));
        assert!(!0.5f64.belongs(0.55, 20000.0));
        assert!(!f64::NAN.belongs(f64::NEG_INFINITY, f64::INFINITY));
        assert!(!4.5f32.belongs(0.0, 0.0));
    }
}
