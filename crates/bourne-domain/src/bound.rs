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

//! # Type-Level Bounds
//!
//! A bound is a zero-sized marker type whose exact value is the associated
//! constant [`Bound::RATIO`]. Literal bounds are written with [`Lit`] (usually
//! through the [`mark!`](crate::mark) macro); the bounds of arithmetic results
//! are the combinators [`Negated`], [`Sum`], and [`Difference`], whose
//! constants are computed from their operands during compilation.
//!
//! ```rust
//! # use bourne_domain::bound::{Bound, Difference, Lit, Sum};
//! # use bourne_core::math::ratio::Ratio;
//!
//! type Low = Lit<11, 20>;
//! type High = Lit<20000, 1>;
//!
//! assert_eq!(<Sum<Low, High>>::RATIO, Ratio::new(400011, 20));
//! assert_eq!(<Difference<Low, High>>::RATIO, Ratio::new(-399989, 20));
//! assert_eq!(<Difference<Low, High> as Bound>::value::<f64>(), -19999.45);
//! ```

use bourne_core::math::ratio::Ratio;
use bourne_core::num::real::Real;
use std::marker::PhantomData;

/// A marker type standing for an exact rational bound.
pub trait Bound: 'static {
    /// The exact value of the bound.
    const RATIO: Ratio;

    /// Returns the bound converted to the float kind `T`.
    #[inline(always)]
    fn value<T: Real>() -> T {
        T::from_ratio(Self::RATIO)
    }
}

/// The literal bound `N / D`.
///
/// `Lit<55, 100>` and `Lit<11, 20>` have the same [`Bound::RATIO`], but they
/// are different types; [`mark!`](crate::mark) always emits the reduced form.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Lit<const N: i128, const D: i128>;

impl<const N: i128, const D: i128> Bound for Lit<N, D> {
    const RATIO: Ratio = Ratio::new(N, D);
}

impl<const N: i128, const D: i128> std::fmt::Debug for Lit<N, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lit({})", <Self as Bound>::RATIO)
    }
}

/// The bound `-B`.
pub struct Negated<B>(PhantomData<fn() -> B>);

/// The bound `A + B`.
pub struct Sum<A, B>(PhantomData<fn() -> (A, B)>);

/// The bound `A - B`.
pub struct Difference<A, B>(PhantomData<fn() -> (A, B)>);

impl<B: Bound> Bound for Negated<B> {
    const RATIO: Ratio = B::RATIO.negate();
}

impl<A: Bound, B: Bound> Bound for Sum<A, B> {
    const RATIO: Ratio = A::RATIO.sum(B::RATIO);
}

impl<A: Bound, B: Bound> Bound for Difference<A, B> {
    const RATIO: Ratio = A::RATIO.difference(B::RATIO);
}

macro_rules! impl_marker_traits {
    ($name:ident < $($p:ident),+ >) => {
        impl<$($p),+> $name<$($p),+> {
            /// Creates the marker value.
            #[inline(always)]
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<$($p),+> Clone for $name<$($p),+> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($p),+> Copy for $name<$($p),+> {}

        impl<$($p),+> Default for $name<$($p),+> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<$($p: Bound),+> std::fmt::Debug for $name<$($p),+> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), <Self as Bound>::RATIO)
            }
        }
    };
}

impl_marker_traits!(Negated<B>);
impl_marker_traits!(Sum<A, B>);
impl_marker_traits!(Difference<A, B>);

/// The bound `0`.
pub type Zero = Lit<0, 1>;

/// The bound `1`.
pub type One = Lit<1, 1>;

#[cfg(test)]
mod tests {
    use super::*;

    type Low = Lit<11, 20>;
    type High = Lit<20000, 1>;
    type NegHigh = Lit<-20000, 1>;

    #[test]
    fn test_literal_ratio_is_reduced() {
        assert_eq!(<Lit<55, 100>>::RATIO, Ratio::new(11, 20));
        assert_eq!(<Lit<55, 100>>::RATIO, Low::RATIO);
        assert_eq!(Zero::RATIO, Ratio::ZERO);
        assert_eq!(One::RATIO, Ratio::ONE);
    }

    #[test]
    fn test_combinators() {
        assert_eq!(<Negated<Low>>::RATIO, Ratio::new(-11, 20));
        assert_eq!(<Sum<Low, High>>::RATIO, Ratio::new(400011, 20));
        assert_eq!(<Difference<High, NegHigh>>::RATIO, Ratio::from_integer(40000));
        assert_eq!(
            <Difference<Sum<Low, Low>, Negated<Low>>>::RATIO,
            Ratio::new(33, 20)
        );
    }

    #[test]
    fn test_value_conversion() {
        assert_eq!(Low::value::<f64>(), 0.55);
        assert_eq!(<Negated<High>>::value::<f32>(), -20000.0);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Low::default()), "Lit(11/20)");
        assert_eq!(format!("{:?}", Sum::<Low, High>::new()), "Sum(400011/20)");
        assert_eq!(format!("{:?}", Negated::<One>::default()), "Negated(-1)");
    }
}
