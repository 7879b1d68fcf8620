// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Edge weights over the extended reals.
//!
//! A weight is either a finite number or the designated *infinity*
//! value meaning "no edge". Infinity is absorbing: it compares greater
//! than every finite weight and is never used as an operand of an
//! addition by the algorithms of this crate.
//!
//! For floating point types infinity is the IEEE infinity. For integer
//! types it is `max_value()`, so all finite weights *and* all finite
//! path lengths must be strictly smaller than `max_value()`. Sums that
//! exceed this bound saturate to infinity instead of wrapping.

use crate::num::traits::{Bounded, Saturating, Zero};

use std::fmt::Debug;

/// A weight over the extended reals.
pub trait Weight: Copy + PartialOrd + Zero + Debug {
    /// The infinity value denoting a missing edge.
    fn infinity() -> Self;

    /// Return `true` if this is the infinity value.
    fn is_infinite(&self) -> bool;

    /// Return `true` if this is a finite weight.
    fn is_finite(&self) -> bool {
        !self.is_infinite()
    }

    /// Add two finite weights.
    ///
    /// The result is never smaller than the mathematical sum due to
    /// overflow. It may be infinity if the sum is not representable.
    fn add_finite(self, other: Self) -> Self;
}

macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn infinity() -> Self {
                    <$t>::INFINITY
                }

                fn is_infinite(&self) -> bool {
                    *self == <$t>::INFINITY
                }

                fn add_finite(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

macro_rules! int_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn infinity() -> Self {
                    <$t as Bounded>::max_value()
                }

                fn is_infinite(&self) -> bool {
                    *self == <$t as Bounded>::max_value()
                }

                fn add_finite(self, other: Self) -> Self {
                    Saturating::saturating_add(self, other)
                }
            }
        )*
    };
}

float_weight!(f32, f64);
int_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(feature = "ordered-float")]
mod ordered {
    use super::Weight;
    use ordered_float::OrderedFloat;

    macro_rules! ordered_weight {
        ($($t:ty),*) => {
            $(
                impl Weight for OrderedFloat<$t> {
                    fn infinity() -> Self {
                        OrderedFloat(<$t>::INFINITY)
                    }

                    fn is_infinite(&self) -> bool {
                        self.0 == <$t>::INFINITY
                    }

                    fn add_finite(self, other: Self) -> Self {
                        self + other
                    }
                }
            )*
        };
    }

    ordered_weight!(f32, f64);
}

#[cfg(test)]
mod tests {
    use super::Weight;

    #[test]
    fn test_float_infinity() {
        assert!(f64::infinity().is_infinite());
        assert!(!1e300f64.is_infinite());
        assert!(f64::infinity() > 1e300);
        assert!(f32::infinity() > f32::MAX);
        assert!(2.5f64.is_finite());
    }

    #[test]
    fn test_int_saturation() {
        assert_eq!(i32::infinity(), i32::MAX);
        assert_eq!((i32::MAX - 1).add_finite(5), i32::infinity());
        assert_eq!(250u8.add_finite(10), u8::infinity());
        assert_eq!(3i64.add_finite(-5), -2);
        assert!(!(i32::MAX - 1).is_infinite());
    }

    #[cfg(feature = "ordered-float")]
    #[test]
    fn test_ordered_float() {
        use ordered_float::OrderedFloat;
        let inf = OrderedFloat::<f64>::infinity();
        assert!(inf.is_infinite());
        assert!(inf > OrderedFloat(1e10));
        assert_eq!(OrderedFloat(1.5).add_finite(OrderedFloat(2.0)), OrderedFloat(3.5));
    }
}
