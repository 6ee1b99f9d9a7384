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

//! # Factory
//!
//! Ergonomic construction: [`mark!`](crate::mark) turns a numeric literal
//! into its bound marker while compiling, and [`make_domain`] infers the
//! whole `Domain<T, Min, Max>` parameterization from a value and two marker
//! values.
//!
//! ```rust
//! use bourne_domain::{factory::make_domain, mark};
//!
//! let p = make_domain(5.0, mark!(0.55), mark!(20000));
//! let n = make_domain(-5.0, mark!(-20000), mark!(0));
//! assert_eq!(format!("{}", p - n), "10 in [0.55, 40000]");
//! ```

use crate::bound::Bound;
use crate::domain::Domain;
use bourne_core::num::real::Real;

/// Expands to the [`Lit`](crate::bound::Lit) marker of a numeric literal.
///
/// The literal is parsed into a reduced exact fraction during compilation,
/// so `mark!(0.55)` is `Lit<11, 20>`. The expansion is usable both as a type
/// and as a value. A literal that cannot be represented is a build error.
///
/// # Examples
///
/// ```rust
/// use bourne_domain::{bound::{Bound, Lit}, mark};
///
/// let _: Lit<11, 20> = mark!(0.55);
/// let _: Lit<-20000, 1> = mark!(-20000);
/// let _: Lit<3, 2000> = mark!(1.5e-3);
/// assert_eq!(<mark!(5.5) as Bound>::value::<f64>(), 5.5);
/// ```
#[macro_export]
macro_rules! mark {
    ($lit:literal) => {
        $crate::bound::Lit::<
            { $crate::__private::parse_decimal(stringify!($lit)).numer() },
            { $crate::__private::parse_decimal(stringify!($lit)).denom() },
        >
    };
}

/// Creates a domain from a value and the markers of its bounds.
///
/// # Panics
///
/// Panics like [`Domain::new`] if `value` lies outside `[min, max]` while
/// invariant checks are enabled.
///
/// # Examples
///
/// ```rust
/// # use bourne_domain::{factory::make_domain, mark};
///
/// let v = make_domain(2.0, mark!(0), mark!(5));
/// assert_eq!(v.value(), 2.0);
/// assert_eq!(format!("{}", v), "2 in [0, 5]");
/// ```
#[inline]
#[track_caller]
pub fn make_domain<T, Min, Max>(value: T, _min: Min, _max: Max) -> Domain<T, Min, Max>
where
    T: Real,
    Min: Bound,
    Max: Bound,
{
    Domain::new(value)
}

/// Like [`make_domain`], but reports an out-of-range value as an error.
///
/// # Examples
///
/// ```rust
/// # use bourne_domain::{factory::try_make_domain, mark};
///
/// assert!(try_make_domain(4.5, mark!(0), mark!(10)).is_ok());
/// assert!(try_make_domain(4.5, mark!(0), mark!(0)).is_err());
/// ```
#[inline]
pub fn try_make_domain<T, Min, Max>(
    value: T,
    _min: Min,
    _max: Max,
) -> Result<Domain<T, Min, Max>, crate::error::OutOfDomainError<T>>
where
    T: Real,
    Min: Bound,
    Max: Bound,
{
    Domain::try_new(value)
}

/// Returns the value of a marker in the float kind `T`.
///
/// # Examples
///
/// ```rust
/// # use bourne_domain::{factory::marker_value, mark};
///
/// fn g(v: mark!(3.5)) -> f64 {
///     marker_value(v)
/// }
///
/// assert_eq!(g(mark!(3.5)), 3.5);
/// ```
#[inline(always)]
pub fn marker_value<T: Real, B: Bound>(_marker: B) -> T {
    B::value()
}
