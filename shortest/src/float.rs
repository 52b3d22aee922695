use std::{
    fmt::Debug,
    ops::{Add, Mul, Sub},
};

/// The primary purpose of this trait is to make the point type and both searches generic
/// over the std floats `f32` and `f64`.
///
/// Only the handful of operations the scans actually need are exposed here.
pub trait SearchFloat:
    Copy
    + PartialOrd
    + Debug
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    const NAME: &'static str;

    /// Additive identity
    fn zero() -> Self;

    /// Positive infinity, the starting value of every running minimum
    fn infinity() -> Self;

    fn abs(self) -> Self;

    fn sqrt(self) -> Self;
}

impl SearchFloat for f32 {
    const NAME: &'static str = "F32";

    #[inline(always)]
    fn zero() -> Self {
        0.0
    }
    #[inline(always)]
    fn infinity() -> Self {
        f32::INFINITY
    }
    #[inline(always)]
    fn abs(self) -> Self {
        f32::abs(self)
    }
    #[inline(always)]
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }
}

impl SearchFloat for f64 {
    const NAME: &'static str = "F64";

    #[inline(always)]
    fn zero() -> Self {
        0.0
    }
    #[inline(always)]
    fn infinity() -> Self {
        f64::INFINITY
    }
    #[inline(always)]
    fn abs(self) -> Self {
        f64::abs(self)
    }
    #[inline(always)]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }
}
