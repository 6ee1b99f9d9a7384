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

//! # Domain Arithmetic
//!
//! Addition, subtraction, and negation of domains. The result type carries
//! bounds computed by interval arithmetic on the operands' exact bounds:
//!
//! | Operation            | Result bounds              |
//! |----------------------|----------------------------|
//! | `[a, b] + [c, d]`    | `[a + c, b + d]`           |
//! | `[a, b] - [c, d]`    | `[a - d, b - c]`           |
//! | `-[a, b]`            | `[-b, -a]`                 |
//!
//! The result value is checked against the new bounds under the
//! [invariant-check policy](crate::policy), like any other construction.
//! Multiplication and division are not provided.

use crate::bound::{Bound, Difference, Negated, Sum};
use crate::domain::Domain;
use bourne_core::num::real::Real;
use std::ops::{Add, Neg, Sub};

impl<T, MinL, MaxL, MinR, MaxR> Add<Domain<T, MinR, MaxR>> for Domain<T, MinL, MaxL>
where
    T: Real,
    MinL: Bound,
    MaxL: Bound,
    MinR: Bound,
    MaxR: Bound,
{
    type Output = Domain<T, Sum<MinL, MinR>, Sum<MaxL, MaxR>>;

    #[inline]
    #[track_caller]
    fn add(self, rhs: Domain<T, MinR, MaxR>) -> Self::Output {
        Domain::new(self.value() + rhs.value())
    }
}

impl<T, MinL, MaxL, MinR, MaxR> Sub<Domain<T, MinR, MaxR>> for Domain<T, MinL, MaxL>
where
    T: Real,
    MinL: Bound,
    MaxL: Bound,
    MinR: Bound,
    MaxR: Bound,
{
    type Output = Domain<T, Difference<MinL, MaxR>, Difference<MaxL, MinR>>;

    #[inline]
    #[track_caller]
    fn sub(self, rhs: Domain<T, MinR, MaxR>) -> Self::Output {
        Domain::new(self.value() - rhs.value())
    }
}

impl<T, Min, Max> Neg for Domain<T, Min, Max>
where
    T: Real,
    Min: Bound,
    Max: Bound,
{
    type Output = Domain<T, Negated<Max>, Negated<Min>>;

    #[inline]
    #[track_caller]
    fn neg(self) -> Self::Output {
        Domain::new(-self.value())
    }
}
