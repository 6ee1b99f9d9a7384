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

//! # Bourne Domain
//!
//! Floating-point values that carry, in their type, an exact closed interval
//! `[min, max]` they are guaranteed to lie in. Arithmetic derives the bounds
//! of its result from the bounds of its operands, and a function that asks
//! for a value of domain `[a, b]` refuses to build when handed a value whose
//! interval is not provably inside `[a, b]`.
//!
//! ## Modules
//!
//! - `bound`: the `Bound` trait, the literal marker `Lit<N, D>`, and the
//!   combinators `Negated`, `Sum`, `Difference` whose exact values are
//!   computed while compiling.
//! - `domain`: `Domain<T, Min, Max>`, construction (`new`, `try_new`,
//!   `new_unchecked`), accessors, containment tests, and formatting as
//!   `"<value> in [<min>, <max>]"`.
//! - `containment`: `widen` (statically proven, no runtime check),
//!   `narrow` (runtime checked), and the `IntoDomain` conversion trait.
//! - `ops`: `+`, `-`, and unary `-` by interval arithmetic.
//! - `factory`: the `mark!` literal macro and `make_domain`.
//! - `policy`: whether construction checks are compiled in
//!   (`invariant-checks` feature, otherwise `debug_assertions`).
//! - `error`: `OutOfDomainError`, returned by the fallible constructors.
//!
//! ## Example
//!
//! ```rust
//! use bourne_domain::{containment::IntoDomain, domain::Domain, factory::make_domain, mark};
//!
//! type Positive = Domain<f64, mark!(0.55), mark!(20000)>;
//! type Negative = Domain<f64, mark!(-20000), mark!(0)>;
//!
//! fn h(x: impl IntoDomain<Positive>) -> f64 {
//!     x.into_domain().value()
//! }
//!
//! let p = Positive::new(5.0);
//! let n = Negative::new(-5.0);
//!
//! assert_eq!(format!("{}", p - n), "10 in [0.55, 40000]");
//! assert_eq!(format!("{}", p - p), "0 in [-19999.45, 19999.45]");
//! assert_eq!(h(p), 5.0);
//! assert_eq!(h(make_domain(7.0, mark!(1), mark!(10))), 7.0);
//! ```

pub mod bound;
pub mod containment;
pub mod domain;
pub mod error;
pub mod factory;
pub mod ops;
pub mod policy;

pub use bourne_core::math::interval::RatioInterval;
pub use bourne_core::math::ratio::Ratio;
pub use bourne_core::num::real::Real;

#[doc(hidden)]
pub mod __private {
    pub use bourne_core::math::literal::parse_decimal;
}
