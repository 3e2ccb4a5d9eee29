//! Scalar arithmetic and 2D geometry helpers.
//!
//! The arithmetic functions are meant to be passed to [`apply_binary`][crate::apply_binary]
//! to perform element-wise matrix arithmetic.

use crate::traits::{Abs, Number, Sqrt, Trig};

/// Returns `a + b`.
#[inline]
pub fn add<T: Number>(a: T, b: T) -> T {
    a + b
}

/// Returns `a - b`.
#[inline]
pub fn subtract<T: Number>(a: T, b: T) -> T {
    a - b
}

/// Returns `a * b`.
#[inline]
pub fn multiply_scalars<T: Number>(a: T, b: T) -> T {
    a * b
}

/// Returns `a / b`.
///
/// Division by zero is not an error and yields an infinity or `NaN`, as specified by IEEE 754.
#[inline]
pub fn divide<T: Number>(a: T, b: T) -> T {
    a / b
}

/// Computes the angle between the 2D vectors `(x1, y1)` and `(x2, y2)`, in radians.
///
/// The result is `acos(dot / (|v1| * |v2|))`, in the range `[0, π]`.
///
/// # Numerical edge cases
///
/// - If either vector has zero length, the division is `0 / 0` and the result is `NaN`.
/// - For (nearly) parallel vectors, rounding can push the cosine slightly outside of `[-1, 1]`,
///   which also yields `NaN`. [`unsigned_angle`] does not have this problem.
///
/// # Examples
///
/// ```
/// # use fixmat::*;
/// use std::f32::consts::FRAC_PI_2;
///
/// assert!((angle_between(1.0f32, 0.0, 0.0, 1.0) - FRAC_PI_2).abs() < 1e-6);
/// assert_eq!(angle_between(1.0f32, 0.0, 1.0, 0.0), 0.0);
/// assert!(angle_between(0.0f32, 0.0, 1.0, 0.0).is_nan());
/// ```
pub fn angle_between<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Number + Sqrt + Trig,
{
    let dot = x1 * x2 + y1 * y2;
    let mag1 = (x1 * x1 + y1 * y1).sqrt();
    let mag2 = (x2 * x2 + y2 * y2).sqrt();
    (dot / (mag1 * mag2)).acos()
}

/// Computes the angle between the 2D vectors `(x1, y1)` and `(x2, y2)`, in radians, using
/// `atan2(|cross|, dot)`.
///
/// Unlike [`angle_between`], this never returns `NaN` for finite inputs: parallel vectors
/// reliably give `0` or `π`, and a zero-length vector gives `0`. Both vectors are scaled down
/// before the products are formed, so components close to the type's maximum do not overflow.
/// A vector whose components are too small to scale (subnormal) is treated as zero-length.
pub fn unsigned_angle<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Number + Abs + Trig,
{
    let half = T::ONE / (T::ONE + T::ONE);
    let scale1 = x1.abs() * half + y1.abs() * half;
    let scale2 = x2.abs() * half + y2.abs() * half;
    if scale1 == T::ZERO || scale2 == T::ZERO {
        return T::ZERO;
    }

    let (x1, y1) = (x1 / scale1, y1 / scale1);
    let (x2, y2) = (x2 / scale2, y2 / scale2);
    let cross = x1 * y2 - y1 * x2;
    let dot = x1 * x2 + y1 * y2;
    cross.abs().atan2(dot)
}

/// Computes the squared Euclidean distance between the points `(x1, y1)` and `(x2, y2)`.
///
/// # Examples
///
/// ```
/// # use fixmat::*;
/// assert_eq!(squared_distance(0.0, 0.0, 3.0, 4.0), 25.0);
/// ```
pub fn squared_distance<T: Number>(x1: T, y1: T, x2: T, y2: T) -> T {
    let dx = x1 - x2;
    let dy = y1 - y2;
    dx * dx + dy * dy
}
