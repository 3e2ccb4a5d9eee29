//! Numeric traits for matrix elements.

use std::{fmt, ops};

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support computing their absolute value.
pub trait Abs {
    fn abs(self) -> Self;
}

/// The inverse trigonometric functions needed by the geometry helpers.
pub trait Trig {
    /// Computes the arccosine of `self`, in radians.
    ///
    /// Returns `NaN` if `self` is outside of `[-1, 1]`.
    fn acos(self) -> Self;
    /// Computes the four quadrant arctangent of `self` (y) and `other` (x), in radians.
    fn atan2(self, other: Self) -> Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Element types that can be stored in a [`MatrixView`][crate::MatrixView].
///
/// This is implemented for [`f32`] and [`f64`]. Everything in this crate is generic over it, but
/// [`f32`] is the default element type.
pub trait Element: Number + Sqrt + Abs + Trig + fmt::Display + fmt::Debug {}
impl<T> Element for T where T: Number + Sqrt + Abs + Trig + fmt::Display + fmt::Debug {}

macro_rules! float_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Abs for $types {
                fn abs(self) -> Self {
                    self.abs()
                }
            }

            impl Trig for $types {
                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }
            }
        )+
    };
}
float_impls!(f32, f64);
