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

//! # Exact Rational Constants
//!
//! `Ratio` is a reduced `numerator / denominator` pair over `i128` whose
//! operations are all `const fn`. Domain bounds are stored as `Ratio`s so
//! that combining and comparing them never goes through floating point.
//!
//! ## Normal form
//!
//! - the denominator is strictly positive,
//! - numerator and denominator share no common factor,
//! - zero is `0/1`.
//!
//! Because the form is unique, structural equality is value equality.
//!
//! ## Overflow
//!
//! The panicking operations (`sum`, `difference`, `negate`) abort constant
//! evaluation on `i128` overflow, which turns into a build error when they
//! are used to compute a bound. The `checked_*` variants report overflow
//! with `None` instead. Comparison never overflows.

use crate::math::literal::{ParseRatioError, try_parse_decimal};
use crate::num::real::Real;
use std::cmp::Ordering;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

macro_rules! some_or_return_none {
    ($e:expr) => {
        match $e {
            Some(v) => v,
            None => return None,
        }
    };
}

/// An exact rational number kept in lowest terms with a positive denominator.
///
/// # Examples
///
/// ```rust
/// # use bourne_core::math::ratio::Ratio;
///
/// let r = Ratio::new(55, 100);
/// assert_eq!(r.numer(), 11);
/// assert_eq!(r.denom(), 20);
/// assert_eq!(format!("{}", r), "11/20");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    numer: i128,
    denom: i128,
}

#[inline]
const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Ratio {
    /// The rational `0/1`.
    pub const ZERO: Ratio = Ratio { numer: 0, denom: 1 };

    /// The rational `1/1`.
    pub const ONE: Ratio = Ratio { numer: 1, denom: 1 };

    /// Creates a new `Ratio` from a numerator and a denominator, normalizing it.
    ///
    /// # Panics
    ///
    /// Panics if `denom == 0` or if the normalized numerator does not fit an `i128`.
    /// In constant evaluation the panic is a build error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bourne_core::math::ratio::Ratio;
    ///
    /// let r = Ratio::new(3, -6);
    /// assert_eq!((r.numer(), r.denom()), (-1, 2));
    /// ```
    #[inline]
    pub const fn new(numer: i128, denom: i128) -> Self {
        match Self::try_new(numer, denom) {
            Some(r) => r,
            None => panic!("Invalid ratio: the denominator must be non-zero and the value representable"),
        }
    }

    /// Creates a new `Ratio` if the inputs describe a representable rational.
    ///
    /// Returns `None` if `denom == 0`, or if normalizing the sign would overflow
    /// (`i128::MIN / -1`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bourne_core::math::ratio::Ratio;
    ///
    /// assert!(Ratio::try_new(1, 3).is_some());
    /// assert!(Ratio::try_new(1, 0).is_none());
    /// ```
    pub const fn try_new(numer: i128, denom: i128) -> Option<Self> {
        if denom == 0 {
            return None;
        }
        let g = gcd(numer.unsigned_abs(), denom.unsigned_abs());
        let n = numer.unsigned_abs() / g;
        let d = denom.unsigned_abs() / g;
        if d > i128::MAX as u128 {
            return None;
        }
        let negative = numer != 0 && ((numer < 0) != (denom < 0));
        let numer = if negative {
            if n > (i128::MAX as u128) + 1 {
                return None;
            }
            0u128.wrapping_sub(n) as i128
        } else {
            if n > i128::MAX as u128 {
                return None;
            }
            n as i128
        };
        Some(Self {
            numer,
            denom: d as i128,
        })
    }

    /// Creates the rational `value/1`.
    #[inline(always)]
    pub const fn from_integer(value: i128) -> Self {
        Self {
            numer: value,
            denom: 1,
        }
    }

    /// Returns the numerator of the reduced form.
    #[inline(always)]
    pub const fn numer(&self) -> i128 {
        self.numer
    }

    /// Returns the (always positive) denominator of the reduced form.
    #[inline(always)]
    pub const fn denom(&self) -> i128 {
        self.denom
    }

    /// Returns `true` if the denominator is one.
    #[inline(always)]
    pub const fn is_integer(&self) -> bool {
        self.denom == 1
    }

    /// Returns `true` if the value is negative.
    #[inline(always)]
    pub const fn is_negative(&self) -> bool {
        self.numer < 0
    }

    /// Negates the value, returning `None` on overflow.
    #[inline]
    pub const fn checked_negate(self) -> Option<Self> {
        Some(Self {
            numer: some_or_return_none!(self.numer.checked_neg()),
            denom: self.denom,
        })
    }

    /// Negates the value.
    ///
    /// # Panics
    ///
    /// Panics if the numerator is `i128::MIN`.
    #[inline]
    pub const fn negate(self) -> Self {
        match self.checked_negate() {
            Some(r) => r,
            None => panic!("Ratio overflow: negation does not fit an i128"),
        }
    }

    /// Exact addition, returning `None` on overflow.
    ///
    /// Scales both operands to the least common denominator before adding,
    /// then reduces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bourne_core::math::ratio::Ratio;
    ///
    /// let a = Ratio::new(1, 6);
    /// let b = Ratio::new(1, 4);
    /// assert_eq!(a.checked_sum(b), Some(Ratio::new(5, 12)));
    /// assert_eq!(Ratio::from_integer(i128::MAX).checked_sum(Ratio::ONE), None);
    /// ```
    pub const fn checked_sum(self, rhs: Self) -> Option<Self> {
        let g = gcd(self.denom as u128, rhs.denom as u128) as i128;
        let lhs_scale = rhs.denom / g;
        let rhs_scale = self.denom / g;
        let lhs = some_or_return_none!(self.numer.checked_mul(lhs_scale));
        let rhs_numer = some_or_return_none!(rhs.numer.checked_mul(rhs_scale));
        let numer = some_or_return_none!(lhs.checked_add(rhs_numer));
        let denom = some_or_return_none!(self.denom.checked_mul(lhs_scale));
        Self::try_new(numer, denom)
    }

    /// Exact subtraction, returning `None` on overflow.
    pub const fn checked_difference(self, rhs: Self) -> Option<Self> {
        let g = gcd(self.denom as u128, rhs.denom as u128) as i128;
        let lhs_scale = rhs.denom / g;
        let rhs_scale = self.denom / g;
        let lhs = some_or_return_none!(self.numer.checked_mul(lhs_scale));
        let rhs_numer = some_or_return_none!(rhs.numer.checked_mul(rhs_scale));
        let numer = some_or_return_none!(lhs.checked_sub(rhs_numer));
        let denom = some_or_return_none!(self.denom.checked_mul(lhs_scale));
        Self::try_new(numer, denom)
    }

    /// Exact addition.
    ///
    /// # Panics
    ///
    /// Panics if the result does not fit the `i128` representation.
    #[inline]
    pub const fn sum(self, rhs: Self) -> Self {
        match self.checked_sum(rhs) {
            Some(r) => r,
            None => panic!("Ratio overflow: sum does not fit an i128 fraction"),
        }
    }

    /// Exact subtraction.
    ///
    /// # Panics
    ///
    /// Panics if the result does not fit the `i128` representation.
    #[inline]
    pub const fn difference(self, rhs: Self) -> Self {
        match self.checked_difference(rhs) {
            Some(r) => r,
            None => panic!("Ratio overflow: difference does not fit an i128 fraction"),
        }
    }

    /// Exact three-way comparison.
    ///
    /// Cross-multiplies when the products fit an `i128` and otherwise compares
    /// the continued-fraction expansions of both values, so this is total.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bourne_core::math::ratio::Ratio;
    /// # use std::cmp::Ordering;
    ///
    /// let third = Ratio::new(1, 3);
    /// let tenths = Ratio::new(3, 10);
    /// assert_eq!(third.compare(tenths), Ordering::Greater);
    /// ```
    pub const fn compare(self, other: Self) -> Ordering {
        match (
            self.numer.checked_mul(other.denom),
            other.numer.checked_mul(self.denom),
        ) {
            (Some(lhs), Some(rhs)) => {
                if lhs < rhs {
                    Ordering::Less
                } else if lhs > rhs {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            }
            _ => compare_expansions(self.numer, self.denom, other.numer, other.denom),
        }
    }

    /// Returns `true` if `self <= other`.
    #[inline]
    pub const fn is_le(self, other: Self) -> bool {
        !matches!(self.compare(other), Ordering::Greater)
    }

    /// Returns `true` if `self >= other`.
    #[inline]
    pub const fn is_ge(self, other: Self) -> bool {
        !matches!(self.compare(other), Ordering::Less)
    }

    /// Returns `true` if `self < other`.
    #[inline]
    pub const fn is_lt(self, other: Self) -> bool {
        matches!(self.compare(other), Ordering::Less)
    }

    /// Returns `true` if `self > other`.
    #[inline]
    pub const fn is_gt(self, other: Self) -> bool {
        matches!(self.compare(other), Ordering::Greater)
    }

    /// Returns `true` if both values are equal.
    #[inline]
    pub const fn is_eq(self, other: Self) -> bool {
        self.numer == other.numer && self.denom == other.denom
    }

    /// Returns the smaller of two values.
    #[inline]
    pub const fn min_of(self, other: Self) -> Self {
        if self.is_le(other) { self } else { other }
    }

    /// Returns the larger of two values.
    #[inline]
    pub const fn max_of(self, other: Self) -> Self {
        if self.is_ge(other) { self } else { other }
    }

    /// Converts to the nearest `f64`, ties to even.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bourne_core::math::ratio::Ratio;
    ///
    /// assert_eq!(Ratio::new(11, 20).to_f64(), 0.55);
    /// ```
    #[inline]
    pub fn to_f64(self) -> f64 {
        f64::from_ratio(self)
    }
}

// Both fractions are compared through their continued-fraction expansions:
// equal integer parts move the comparison to the reciprocals of the
// remainders, with the operands swapped.
const fn compare_expansions(
    mut lhs_numer: i128,
    mut lhs_denom: i128,
    mut rhs_numer: i128,
    mut rhs_denom: i128,
) -> Ordering {
    loop {
        let lhs_int = lhs_numer.div_euclid(lhs_denom);
        let rhs_int = rhs_numer.div_euclid(rhs_denom);
        if lhs_int < rhs_int {
            return Ordering::Less;
        }
        if lhs_int > rhs_int {
            return Ordering::Greater;
        }
        let lhs_rem = lhs_numer.rem_euclid(lhs_denom);
        let rhs_rem = rhs_numer.rem_euclid(rhs_denom);
        match (lhs_rem == 0, rhs_rem == 0) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }
        let (next_lhs_numer, next_lhs_denom) = (rhs_denom, rhs_rem);
        let (next_rhs_numer, next_rhs_denom) = (lhs_denom, lhs_rem);
        lhs_numer = next_lhs_numer;
        lhs_denom = next_lhs_denom;
        rhs_numer = next_rhs_numer;
        rhs_denom = next_rhs_denom;
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

impl Neg for Ratio {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Add for Ratio {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.sum(rhs)
    }
}

impl Sub for Ratio {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl From<i128> for Ratio {
    fn from(value: i128) -> Self {
        Self::from_integer(value)
    }
}

impl FromStr for Ratio {
    type Err = ParseRatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_parse_decimal(s)
    }
}

impl std::fmt::Debug for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ratio")
            .field("numer", &self.numer)
            .field("denom", &self.denom)
            .finish()
    }
}

impl std::fmt::Display for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}
