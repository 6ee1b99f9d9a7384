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

//! # Bounded Values
//!
//! [`Domain<T, Min, Max>`] stores one float `T` that is known to lie in the
//! closed interval `[Min, Max]`, where `Min` and `Max` are
//! [`Bound`] markers. The bounds live entirely in the type: a domain has
//! the size and layout of `T`.
//!
//! ## Construction
//!
//! - [`Domain::new`] checks the value under the build's
//!   [invariant-check policy](crate::policy) and panics on violation.
//! - [`Domain::try_new`] always checks and reports violations as
//!   [`OutOfDomainError`].
//! - [`Domain::new_unchecked`] trusts the caller (`debug_assert!` only).
//!
//! A parameterization with `Min > Max` does not compile:
//!
//! ```rust,compile_fail
//! # use bourne_domain::{mark, domain::Domain};
//! type Backwards = Domain<f64, mark!(1), mark!(0)>;
//! let _ = Backwards::new(0.5);
//! ```

use crate::bound::Bound;
use crate::error::OutOfDomainError;
use crate::policy::check_invariant;
use bourne_core::math::interval::RatioInterval;
use bourne_core::math::ratio::Ratio;
use bourne_core::num::real::Real;
use log::debug;
use std::cmp::Ordering;
use std::marker::PhantomData;

/// A float `T` statically known to lie within `[Min, Max]`.
///
/// # Examples
///
/// ```rust
/// # use bourne_domain::{mark, domain::Domain};
///
/// type Positive = Domain<f64, mark!(0.55), mark!(20000)>;
///
/// let p = Positive::new(5.0);
/// assert_eq!(p.value(), 5.0);
/// assert_eq!(Positive::min(), 0.55);
/// assert_eq!(Positive::max(), 20000.0);
/// assert_eq!(format!("{}", p), "5 in [0.55, 20000]");
/// ```
#[repr(transparent)]
pub struct Domain<T, Min, Max> {
    value: T,
    _bounds: PhantomData<fn() -> (Min, Max)>,
}

impl<T, Min, Max> Domain<T, Min, Max>
where
    T: Real,
    Min: Bound,
    Max: Bound,
{
    /// The exact interval of this domain. Evaluating it rejects `Min > Max`
    /// at build time.
    pub const INTERVAL: RatioInterval = RatioInterval::new(Min::RATIO, Max::RATIO);

    /// Creates a new `Domain`, verifying `min() <= value <= max()`.
    ///
    /// # Panics
    ///
    /// Panics if `value` lies outside the domain, or is `NaN`, while
    /// invariant checks are enabled (see [`crate::policy`]).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bourne_domain::{mark, domain::Domain};
    ///
    /// let d = Domain::<f64, mark!(0), mark!(10)>::new(4.5);
    /// assert_eq!(d.value(), 4.5);
    /// ```
    #[inline]
    #[track_caller]
    pub fn new(value: T) -> Self {
        check_invariant(value, Self::INTERVAL);
        Self::from_raw(value)
    }

    /// Creates a new `Domain` if `value` lies within the bounds.
    ///
    /// The check is performed regardless of the invariant-check policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bourne_domain::{mark, domain::Domain};
    ///
    /// type Unit = Domain<f64, mark!(0), mark!(1)>;
    /// assert!(Unit::try_new(0.25).is_ok());
    /// assert!(Unit::try_new(1.5).is_err());
    /// assert!(Unit::try_new(f64::NAN).is_err());
    /// ```
    pub fn try_new(value: T) -> Result<Self, OutOfDomainError<T>> {
        let interval = Self::INTERVAL;
        if value.belongs(Self::min(), Self::max()) {
            Ok(Self::from_raw(value))
        } else {
            debug!("try_new: {} rejected by domain {}", value, interval);
            Err(OutOfDomainError::new(value, interval))
        }
    }

    /// Creates a new `Domain` without checking the bounds in release builds.
    ///
    /// This is not `unsafe`: an out-of-range value breaks the documented
    /// invariant, not memory safety.
    /// It contains a `debug_assert!` to catch errors during development.
    #[inline]
    #[track_caller]
    pub fn new_unchecked(value: T) -> Self {
        debug_assert!(
            value.belongs(Self::min(), Self::max()),
            "value {} is outside the domain [{}, {}]",
            value,
            Self::min(),
            Self::max()
        );
        let _interval = Self::INTERVAL;
        Self::from_raw(value)
    }

    #[inline(always)]
    pub(crate) fn from_raw(value: T) -> Self {
        Self {
            value,
            _bounds: PhantomData,
        }
    }

    /// Returns the stored value.
    #[inline(always)]
    pub fn value(&self) -> T {
        self.value
    }

    /// Consumes the domain and returns the stored value.
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Returns the lower bound converted to `T`.
    #[inline(always)]
    pub fn min() -> T {
        T::from_ratio(Min::RATIO)
    }

    /// Returns the upper bound converted to `T`.
    #[inline(always)]
    pub fn max() -> T {
        T::from_ratio(Max::RATIO)
    }

    /// Returns the exact lower bound.
    #[inline(always)]
    pub const fn min_ratio() -> Ratio {
        Min::RATIO
    }

    /// Returns the exact upper bound.
    #[inline(always)]
    pub const fn max_ratio() -> Ratio {
        Max::RATIO
    }

    /// Returns the exact interval `[Min, Max]`.
    #[inline(always)]
    pub const fn interval() -> RatioInterval {
        Self::INTERVAL
    }

    /// Checks whether this domain's interval contains `[Min2, Max2]`.
    ///
    /// Decided from the bounds alone, so this can be used in constants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bourne_domain::{mark, domain::Domain};
    ///
    /// type Ten = Domain<f64, mark!(0), mark!(10)>;
    /// const HOLDS: bool = Ten::contains_domain::<mark!(2.5), mark!(10)>();
    /// assert!(HOLDS);
    /// assert!(!Ten::contains_domain::<mark!(-1), mark!(1)>());
    /// ```
    #[inline]
    pub const fn contains_domain<Min2: Bound, Max2: Bound>() -> bool {
        Self::INTERVAL.contains_interval(RatioInterval::new(Min2::RATIO, Max2::RATIO))
    }

    /// Checks whether this domain's interval contains the interval of `other`.
    ///
    /// The result depends only on the types, never on the stored values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bourne_domain::{mark, domain::Domain};
    ///
    /// let wide = Domain::<f64, mark!(0), mark!(10)>::new(1.0);
    /// let narrow = Domain::<f64, mark!(2), mark!(3)>::new(2.0);
    /// assert!(wide.contains(&narrow));
    /// assert!(!narrow.contains(&wide));
    /// ```
    #[inline]
    pub fn contains<U, Min2: Bound, Max2: Bound>(&self, _other: &Domain<U, Min2, Max2>) -> bool {
        Self::contains_domain::<Min2, Max2>()
    }
}

impl<T: Copy, Min, Max> Clone for Domain<T, Min, Max> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, Min, Max> Copy for Domain<T, Min, Max> {}

impl<T, Min, Max, Min2, Max2> PartialEq<Domain<T, Min2, Max2>> for Domain<T, Min, Max>
where
    T: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Domain<T, Min2, Max2>) -> bool {
        self.value == other.value
    }
}

impl<T, Min, Max, Min2, Max2> PartialOrd<Domain<T, Min2, Max2>> for Domain<T, Min, Max>
where
    T: PartialOrd,
{
    #[inline]
    fn partial_cmp(&self, other: &Domain<T, Min2, Max2>) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T, Min, Max> std::fmt::Debug for Domain<T, Min, Max>
where
    T: Real,
    Min: Bound,
    Max: Bound,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Domain({})", self)
    }
}

impl<T, Min, Max> std::fmt::Display for Domain<T, Min, Max>
where
    T: Real,
    Min: Bound,
    Max: Bound,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "{:.*} in [{:.*}, {:.*}]",
                p,
                self.value,
                p,
                Self::min(),
                p,
                Self::max()
            ),
            None => write!(f, "{} in [{}, {}]", self.value, Self::min(), Self::max()),
        }
    }
}

macro_rules! impl_from_domain_for {
    ($t:ty) => {
        impl<Min, Max> From<Domain<$t, Min, Max>> for $t {
            #[inline(always)]
            fn from(domain: Domain<$t, Min, Max>) -> Self {
                domain.value
            }
        }
    };
}

impl_from_domain_for!(f32);
impl_from_domain_for!(f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::{Lit, One, Zero};

    type Positive = Domain<f64, Lit<11, 20>, Lit<20000, 1>>;
    type Negative = Domain<f64, Lit<-20000, 1>, Zero>;
    type Ten = Domain<f64, Zero, Lit<10, 1>>;
    type Point = Domain<f64, Zero, Zero>;

    #[test]
    fn test_new_and_accessors() {
        let p = Positive::new(5.0);
        assert_eq!(p.value(), 5.0);
        assert_eq!(p.into_inner(), 5.0);
        assert_eq!(Positive::min(), 0.55);
        assert_eq!(Positive::max(), 20000.0);
        assert_eq!(Positive::min_ratio(), Ratio::new(11, 20));
        assert_eq!(Positive::max_ratio(), Ratio::from_integer(20000));
        assert_eq!(Positive::interval().width(), Ratio::new(399989, 20));
    }

    #[test]
    fn test_new_accepts_endpoints() {
        assert_eq!(Positive::new(0.55).value(), 0.55);
        assert_eq!(Positive::new(20000.0).value(), 20000.0);
        assert_eq!(Negative::new(-20000.0).value(), -20000.0);
        assert_eq!(Negative::new(0.0).value(), 0.0);
        assert_eq!(Point::new(0.0).value(), 0.0);
    }

    #[test]
    #[cfg_attr(
        not(any(feature = "invariant-checks", debug_assertions)),
        ignore = "invariant checks are compiled out"
    )]
    #[should_panic(expected = "value 0.5 is outside the domain [0.55, 20000]")]
    fn test_new_below_min_panics() {
        Positive::new(0.5);
    }

    #[test]
    #[cfg_attr(
        not(any(feature = "invariant-checks", debug_assertions)),
        ignore = "invariant checks are compiled out"
    )]
    #[should_panic(expected = "value 4.5 is outside the domain [0, 0]")]
    fn test_new_above_max_panics() {
        Point::new(4.5);
    }

    #[test]
    fn test_try_new() {
        assert_eq!(Ten::try_new(4.5).map(|d| d.value()), Ok(4.5));
        let err = Ten::try_new(10.5).unwrap_err();
        assert_eq!(err.value(), 10.5);
        assert_eq!(err.interval(), Ten::interval());
        assert!(Ten::try_new(-0.0).is_ok());
        assert!(Ten::try_new(f64::INFINITY).is_err());
        assert!(Ten::try_new(f64::NAN).is_err());
    }

    #[test]
    fn test_construction_matches_membership() {
        for i in -40..=140 {
            let v = i as f64 / 10.0;
            let inside = (0.0..=10.0).contains(&v);
            assert_eq!(Ten::try_new(v).is_ok(), inside, "value {v}");
        }
    }

    #[test]
    fn test_new_unchecked_in_bounds() {
        assert_eq!(Ten::new_unchecked(3.0).value(), 3.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is outside the domain")]
    fn test_new_unchecked_debug_asserts() {
        Ten::new_unchecked(11.0);
    }

    #[test]
    fn test_contains() {
        let p = Positive::new(1.0);
        let t = Ten::new(1.0);
        let one = Domain::<f64, One, One>::new(1.0);
        assert!(p.contains(&p));
        assert!(!p.contains(&t));
        assert!(t.contains(&one));
        assert!(p.contains(&one));
        assert!(!one.contains(&p));
        assert!(Positive::contains_domain::<Lit<11, 20>, Lit<20000, 1>>());
        assert!(Positive::contains_domain::<Lit<55, 100>, Lit<1, 1>>());
        assert!(!Positive::contains_domain::<Lit<1, 2>, Lit<1, 1>>());
    }

    #[test]
    fn test_contains_ignores_value_type() {
        let single = Domain::<f32, One, One>::new(1.0);
        assert!(Ten::new(0.0).contains(&single));
    }

    #[test]
    fn test_copy_and_compare() {
        let a = Ten::new(2.0);
        let b = a;
        assert_eq!(a, b);
        assert!(Ten::new(1.0) < Positive::new(1.5));
        assert_eq!(Ten::new(1.0), Positive::new(1.0));
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(format!("{}", Positive::new(5.0)), "5 in [0.55, 20000]");
        assert_eq!(format!("{:.2}", Ten::new(4.5)), "4.50 in [0.00, 10.00]");
        assert_eq!(format!("{:?}", Negative::new(-5.0)), "Domain(-5 in [-20000, 0])");
    }

    #[test]
    fn test_into_float() {
        let v: f64 = Ten::new(7.5).into();
        assert_eq!(v, 7.5);
        let w: f32 = Domain::<f32, Zero, One>::new(0.25).into();
        assert_eq!(w, 0.25);
    }

    #[test]
    fn test_layout_is_transparent() {
        assert_eq!(std::mem::size_of::<Positive>(), std::mem::size_of::<f64>());
        assert_eq!(
            std::mem::size_of::<Domain<f32, Zero, One>>(),
            std::mem::size_of::<f32>()
        );
    }

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<Positive>();
    }
}
