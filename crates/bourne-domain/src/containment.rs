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

//! # Containment and Conversion
//!
//! A value of domain `[Min, Max]` may move into domain `[Min2, Max2]` without
//! a runtime check exactly when `Min2 <= Min` and `Max <= Max2`: the target
//! interval contains the source interval. The relation is decided from the
//! bound constants while compiling; a conversion that cannot be proven does
//! not build.
//!
//! ```rust
//! # use bourne_domain::{mark, domain::Domain, containment::IntoDomain};
//! type Positive = Domain<f64, mark!(0.55), mark!(20000)>;
//! type Small = Domain<f64, mark!(1), mark!(10)>;
//!
//! fn h(x: impl IntoDomain<Positive>) -> f64 {
//!     x.into_domain().value()
//! }
//!
//! assert_eq!(h(Small::new(5.0)), 5.0);
//! assert_eq!(h(Positive::new(7.0)), 7.0);
//! ```
//!
//! Passing a value whose domain is not contained is a build error:
//!
//! ```rust,compile_fail
//! # use bourne_domain::{mark, domain::Domain, containment::IntoDomain};
//! type Ten = Domain<f64, mark!(0), mark!(10)>;
//! type Positive = Domain<f64, mark!(0.55), mark!(20000)>;
//!
//! fn f(x: impl IntoDomain<Ten>) -> f64 {
//!     x.into_domain().value()
//! }
//!
//! f(Positive::new(5.0));
//! ```

use crate::bound::Bound;
use crate::domain::Domain;
use crate::error::OutOfDomainError;
use bourne_core::math::interval::RatioInterval;
use bourne_core::num::real::Real;
use log::trace;

/// Returns `true` if `[OuterMin, OuterMax]` contains `[InnerMin, InnerMax]`.
///
/// # Examples
///
/// ```rust
/// # use bourne_domain::{mark, containment::contains};
///
/// const HOLDS: bool = contains::<mark!(0), mark!(10), mark!(2.5), mark!(7)>();
/// assert!(HOLDS);
/// assert!(!contains::<mark!(2.5), mark!(7), mark!(0), mark!(10)>());
/// ```
#[inline]
pub const fn contains<OuterMin, OuterMax, InnerMin, InnerMax>() -> bool
where
    OuterMin: Bound,
    OuterMax: Bound,
    InnerMin: Bound,
    InnerMax: Bound,
{
    RatioInterval::new(OuterMin::RATIO, OuterMax::RATIO)
        .contains_interval(RatioInterval::new(InnerMin::RATIO, InnerMax::RATIO))
}

impl<T, Min, Max> Domain<T, Min, Max>
where
    T: Real,
    Min: Bound,
    Max: Bound,
{
    /// Moves the value into the wider domain `[Min2, Max2]`.
    ///
    /// No runtime check is made. The call builds only if `[Min2, Max2]`
    /// contains `[Min, Max]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bourne_domain::{mark, domain::Domain};
    ///
    /// let small = Domain::<f64, mark!(1), mark!(2)>::new(1.5);
    /// let wide: Domain<f64, mark!(0), mark!(10)> = small.widen();
    /// assert_eq!(wide.value(), 1.5);
    /// ```
    #[inline]
    pub fn widen<Min2: Bound, Max2: Bound>(self) -> Domain<T, Min2, Max2> {
        const {
            assert!(
                contains::<Min2, Max2, Min, Max>(),
                "domain conversion rejected: the target domain does not contain the source domain"
            )
        };
        trace!(
            "widen: {} from {} into {}",
            self.value(),
            Self::INTERVAL,
            <Domain<T, Min2, Max2>>::INTERVAL
        );
        Domain::from_raw(self.value())
    }

    /// Moves the value into an arbitrary domain `[Min2, Max2]`, checking it at
    /// runtime.
    ///
    /// Use this where containment cannot be proven from the bounds, e.g. to
    /// restrict a value to a narrower domain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bourne_domain::{mark, domain::Domain};
    ///
    /// let wide = Domain::<f64, mark!(0), mark!(10)>::new(4.5);
    /// let narrow = wide.narrow::<mark!(4), mark!(5)>().unwrap();
    /// assert_eq!(narrow.value(), 4.5);
    /// assert!(wide.narrow::<mark!(0), mark!(1)>().is_err());
    /// ```
    #[inline]
    pub fn narrow<Min2: Bound, Max2: Bound>(
        self,
    ) -> Result<Domain<T, Min2, Max2>, OutOfDomainError<T>> {
        Domain::try_new(self.value())
    }
}

/// Conversion into a domain that statically contains the source domain.
///
/// This stands in for an implicit conversion: a function taking
/// `impl IntoDomain<D>` accepts every domain contained in `D`, and the
/// conversion itself performs no runtime check.
pub trait IntoDomain<Target> {
    /// Performs the conversion.
    fn into_domain(self) -> Target;
}

impl<T, Min, Max, Min2, Max2> IntoDomain<Domain<T, Min2, Max2>> for Domain<T, Min, Max>
where
    T: Real,
    Min: Bound,
    Max: Bound,
    Min2: Bound,
    Max2: Bound,
{
    #[inline(always)]
    fn into_domain(self) -> Domain<T, Min2, Max2> {
        self.widen()
    }
}
