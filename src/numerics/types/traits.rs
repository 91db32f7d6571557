// src/numerics/types/traits.rs
// Element trait shared by the numerics types.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// FloatingPoint is the element trait for the numerics types.
///
/// Note: We require Copy, PartialOrd and the basic arithmetic ops on Self,
/// plus the compound forms so buffers can be updated in place.
pub trait FloatingPoint:
Copy + PartialOrd + Debug
+ Add<Output = Self>
+ Sub<Output = Self>
+ Mul<Output = Self>
+ Div<Output = Self>
+ Neg<Output = Self>
+ AddAssign
+ SubAssign
+ MulAssign
{
    fn zero() -> Self;
    fn one() -> Self;
    fn abs(self) -> Self;

    /// Lossy conversion used for tolerance checks and error reporting.
    fn to_f64(self) -> f64;
}

impl FloatingPoint for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn abs(self) -> Self { f32::abs(self) }
    fn to_f64(self) -> f64 { self as f64 }
}

impl FloatingPoint for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn abs(self) -> Self { f64::abs(self) }
    fn to_f64(self) -> f64 { self }
}

/// `(-1)^k` in the element type.
pub(crate) fn alternating_sign<T: FloatingPoint>(k: usize) -> T {
    if k % 2 == 0 { T::one() } else { -T::one() }
}
