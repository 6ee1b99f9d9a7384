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

use bourne_core::math::interval::RatioInterval;
use bourne_core::num::real::Real;
use std::fmt::Display;

/// A value rejected by a fallible domain construction.
///
/// Carries the offending value together with the exact bounds it was
/// checked against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutOfDomainError<T> {
    value: T,
    interval: RatioInterval,
}

impl<T> OutOfDomainError<T> {
    #[inline]
    pub(crate) fn new(value: T, interval: RatioInterval) -> Self {
        Self { value, interval }
    }

    /// Returns the rejected value.
    #[inline]
    pub fn value(&self) -> T
    where
        T: Copy,
    {
        self.value
    }

    /// Returns the exact bounds the value was checked against.
    #[inline]
    pub fn interval(&self) -> RatioInterval {
        self.interval
    }
}

impl<T: Real> Display for OutOfDomainError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "value {} is outside the domain [{}, {}]",
            self.value,
            T::from_ratio(self.interval.min()),
            T::from_ratio(self.interval.max())
        )
    }
}

impl<T: Real> std::error::Error for OutOfDomainError<T> {}
