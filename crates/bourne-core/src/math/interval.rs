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
use std::ops::{Add, Neg, Sub};

/// A closed interval `[min, max]` with exact rational endpoints.
///
/// This is the value-level form of the bound algebra: every operation is a
/// `const fn`, so intervals can be combined during constant evaluation.
/// Addition and subtraction follow the usual interval-arithmetic rules and
/// are exact for rational endpoints.
///
/// # Invariants
/// `min` must always be less than or equal to `max`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RatioInterval {
    min: Ratio,
    max: Ratio,
}

impl RatioInterval {
    /// Creates a new `RatioInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`. In constant evaluation the panic is a build error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bourne_core::math::interval::RatioInterval;
    /// # use bourne_core::math::ratio::Ratio;
    ///
    /// let iv = RatioInterval::new(Ratio::new(11, 20), Ratio::from_integer(20000));
    /// assert_eq!(format!("{}", iv), "[11/20, 20000]");
    /// ```
    #[inline]
    pub const fn new(min: Ratio, max: Ratio) -> Self {
        assert!(
            min.is_le(max),
            "Invalid interval: min must be less than or equal to max"
        );
        Self { min, max }
    }

    /// Creates a new `RatioInterval` if the inputs are valid.
    ///
    /// Returns `None` if `min > max`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bourne_core::math::interval::RatioInterval;
    /// # use bourne_core::math::ratio::Ratio;
    ///
    /// assert!(RatioInterval::try_new(Ratio::ZERO, Ratio::ONE).is_some());
    /// assert!(RatioInterval::try_new(Ratio::ONE, Ratio::ZERO).is_none());
    /// ```
    #[inline]
    pub const fn try_new(min: Ratio, max: Ratio) -> Option<Self> {
        if min.is_le(max) {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Creates the degenerate interval `[value, value]`.
    #[inline]
    pub const fn point(value: Ratio) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Returns the lower endpoint.
    #[inline(always)]
    pub const fn min(&self) -> Ratio {
        self.min
    }

    /// Returns the upper endpoint.
    #[inline(always)]
    pub const fn max(&self) -> Ratio {
        self.max
    }

    /// Returns `max - min`.
    #[inline]
    pub const fn width(&self) -> Ratio {
        self.max.difference(self.min)
    }

    /// Checks whether the interval consists of a single point.
    #[inline]
    pub const fn is_point(&self) -> bool {
        self.min.is_eq(self.max)
    }

    /// Checks if `value` lies within the interval, endpoints included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bourne_core::math::interval::RatioInterval;
    /// # use bourne_core::math::ratio::Ratio;
    ///
    /// let iv = RatioInterval::new(Ratio::ZERO, Ratio::from_integer(10));
    /// assert!(iv.contains_point(Ratio::from_integer(10)));
    /// assert!(!iv.contains_point(Ratio::new(-1, 2)));
    /// ```
    #[inline]
    pub const fn contains_point(&self, value: Ratio) -> bool {
        self.min.is_le(value) && value.is_le(self.max)
    }

    /// Checks if `other` is a subset of this interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bourne_core::math::interval::RatioInterval;
    /// # use bourne_core::math::ratio::Ratio;
    ///
    /// let wide = RatioInterval::new(Ratio::ZERO, Ratio::from_integer(10));
    /// let narrow = RatioInterval::new(Ratio::ONE, Ratio::from_integer(5));
    /// assert!(wide.contains_interval(narrow));
    /// assert!(!narrow.contains_interval(wide));
    /// ```
    #[inline]
    pub const fn contains_interval(&self, other: Self) -> bool {
        self.min.is_le(other.min) && self.max.is_ge(other.max)
    }

    /// Interval addition: `[a, b] + [c, d] = [a + c, b + d]`.
    #[inline]
    pub const fn sum(self, other: Self) -> Self {
        Self {
            min: self.min.sum(other.min),
            max: self.max.sum(other.max),
        }
    }

    /// Interval subtraction: `[a, b] - [c, d] = [a - d, b - c]`.
    ///
    /// The lower endpoint uses the right operand's upper endpoint and vice
    /// versa.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bourne_core::math::interval::RatioInterval;
    /// # use bourne_core::math::ratio::Ratio;
    ///
    /// let a = RatioInterval::new(Ratio::ZERO, Ratio::from_integer(10));
    /// let b = RatioInterval::new(Ratio::from_integer(3), Ratio::from_integer(7));
    /// let d = a.difference(b);
    /// assert_eq!(d.min(), Ratio::from_integer(-7));
    /// assert_eq!(d.max(), Ratio::from_integer(7));
    /// ```
    #[inline]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            min: self.min.difference(other.max),
            max: self.max.difference(other.min),
        }
    }

    /// Interval negation: `-[a, b] = [-b, -a]`.
    #[inline]
    pub const fn negate(self) -> Self {
        Self {
            min: self.max.negate(),
            max: self.min.negate(),
        }
    }

    /// Returns the smallest interval containing both intervals.
    #[inline]
    pub const fn hull(self, other: Self) -> Self {
        Self {
            min: self.min.min_of(other.min),
            max: self.max.max_of(other.max),
        }
    }
}

impl Add for RatioInterval {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.sum(rhs)
    }
}

impl Sub for RatioInterval {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl Neg for RatioInterval {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl From<Ratio> for RatioInterval {
    fn from(value: Ratio) -> Self {
        Self::point(value)
    }
}

impl std::fmt::Debug for RatioInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RatioInterval")
            .field("min", &self.min)
            .field("max", &self.max)
            .finish()
    }
}

impl std::fmt::Display for RatioInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(min: (i128, i128), max: (i128, i128)) -> RatioInterval {
        RatioInterval::new(Ratio::new(min.0, min.1), Ratio::new(max.0, max.1))
    }

    fn int(min: i128, max: i128) -> RatioInterval {
        iv((min, 1), (max, 1))
    }

    #[test]
    fn test_construction_valid() {
        let i = int(-3, 4);
        assert_eq!(i.min(), Ratio::from_integer(-3));
        assert_eq!(i.max(), Ratio::from_integer(4));
        assert_eq!(i.width(), Ratio::from_integer(7));
        assert!(!i.is_point());
        assert!(RatioInterval::point(Ratio::ONE).is_point());
    }

    #[test]
    #[should_panic(expected = "Invalid interval")]
    fn test_new_panic() {
        int(1, 0);
    }

    #[test]
    fn test_try_new() {
        assert!(RatioInterval::try_new(Ratio::ZERO, Ratio::ZERO).is_some());
        assert!(RatioInterval::try_new(Ratio::new(1, 2), Ratio::new(1, 3)).is_none());
    }

    #[test]
    fn test_contains_point() {
        let i = iv((11, 20), (20000, 1));
        assert!(i.contains_point(Ratio::new(11, 20)));
        assert!(i.contains_point(Ratio::from_integer(5)));
        assert!(!i.contains_point(Ratio::new(1, 2)));
        assert!(!i.contains_point(Ratio::from_integer(20001)));
    }

    #[test]
    fn test_contains_interval_reflexive_and_transitive() {
        let outer = int(-10, 10);
        let middle = int(-5, 5);
        let inner = iv((-1, 2), (1, 2));

        for i in [outer, middle, inner] {
            assert!(i.contains_interval(i));
        }
        assert!(outer.contains_interval(middle));
        assert!(middle.contains_interval(inner));
        assert!(outer.contains_interval(inner));
        assert!(!inner.contains_interval(outer));

        // Overlapping but neither contains the other.
        assert!(!int(0, 5).contains_interval(int(3, 8)));
        assert!(!int(3, 8).contains_interval(int(0, 5)));
    }

    #[test]
    fn test_sum() {
        let a = int(0, 10);
        let b = int(3, 7);
        assert_eq!(a.sum(b), int(3, 17));
        assert_eq!(a + b, int(3, 17));
    }

    #[test]
    fn test_difference_crosses_bounds() {
        let a = int(0, 10);
        let b = int(3, 7);
        let d = a - b;
        assert_eq!(d, int(-7, 7));
        assert_ne!(d, int(-3, 3));

        assert_eq!(b - a, int(-7, 7));
        assert_eq!(int(5, 6) - int(1, 2), int(3, 5));
    }

    #[test]
    fn test_difference_of_same_interval_is_conservative() {
        let positive = iv((11, 20), (20000, 1));
        let d = positive - positive;
        assert_eq!(d, iv((-399989, 20), (399989, 20)));
        assert_eq!(d.width(), positive.width().sum(positive.width()));
        assert!(d.contains_point(Ratio::ZERO));
    }

    #[test]
    fn test_negate_and_hull() {
        assert_eq!(-int(2, 5), int(-5, -2));
        assert_eq!(int(0, 1).hull(int(4, 5)), int(0, 5));
    }

    #[test]
    fn test_const_algebra() {
        const A: RatioInterval = RatioInterval::new(Ratio::ZERO, Ratio::from_integer(10));
        const B: RatioInterval =
            RatioInterval::new(Ratio::from_integer(3), Ratio::from_integer(7));
        const D: RatioInterval = A.difference(B);
        const CONTAINED: bool = A.contains_interval(B);
        assert_eq!(D, int(-7, 7));
        assert!(CONTAINED);
    }

    #[test]
    fn test_traits_display_debug() {
        let i = iv((-1, 3), (2, 1));
        assert_eq!(format!("{}", i), "[-1/3, 2]");
        assert_eq!(
            format!("{:?}", RatioInterval::point(Ratio::ZERO)),
            "RatioInterval { min: Ratio { numer: 0, denom: 1 }, max: Ratio { numer: 0, denom: 1 } }"
        );
        assert_eq!(RatioInterval::from(Ratio::ONE), RatioInterval::point(Ratio::ONE));
    }
}
