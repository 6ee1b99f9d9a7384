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

//! # Bourne Core
//!
//! Exact, compile-time arithmetic on the bounds of numeric domains. Every
//! bound is a rational number, so bounds are combined and compared without
//! any floating-point rounding; only the final comparison against a stored
//! value converts them into the working float kind.
//!
//! ## Modules
//!
//! - `math`: `Ratio` (reduced `i128` fractions), the decimal literal parser
//!   `parse_decimal`, and `RatioInterval`, the closed interval `[min, max]`
//!   with containment tests and interval addition, subtraction, and negation.
//!   Everything here is `const fn`.
//! - `num`: the `Real` trait implemented by `f32` and `f64`, converting
//!   exact bounds into stored values.
//!
//! ## Example
//!
//! ```rust
//! use bourne_core::math::interval::RatioInterval;
//! use bourne_core::math::literal::parse_decimal;
//!
//! const POSITIVE: RatioInterval =
//!     RatioInterval::new(parse_decimal("0.55"), parse_decimal("20000"));
//! const NEGATIVE: RatioInterval =
//!     RatioInterval::new(parse_decimal("-20000"), parse_decimal("0"));
//! const DIFF: RatioInterval = POSITIVE.difference(NEGATIVE);
//!
//! assert_eq!(format!("{}", DIFF), "[11/20, 40000]");
//! ```

pub mod math;
pub mod num;
