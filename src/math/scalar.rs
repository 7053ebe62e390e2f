use std::fmt::{Debug, Display};

use bytemuck::Pod;
use num_traits::{Float, FloatConst, NumAssign};

/// Component type of vectors and matrices.
///
/// Implemented for the primitive integer and floating-point types. `Pod`
/// lets vectors and matrices be viewed as raw scalar or byte slices.
pub trait Scalar:
    Copy + PartialOrd + Debug + Display + NumAssign + Pod + Send + Sync + 'static
{
    /// Fill value for storage that has not been written yet.
    const POISON: Self;
}

macro_rules! impl_scalar {
    ($($t:ty => $poison:expr),* $(,)?) => {
        $(
            impl Scalar for $t {
                const POISON: Self = $poison;
            }
        )*
    };
}

impl_scalar! {
    f32 => f32::from_bits(0x7F80_0001),
    f64 => f64::from_bits(0x7FF0_0000_2000_0000),
    i8 => 0x1B,
    u8 => 0x1B,
    i16 => 0x1BAD,
    u16 => 0x1BAD,
    i32 => 0x1BAD_CAFE,
    u32 => 0x1BAD_CAFE,
    i64 => 0x1BAD_CAFE,
    u64 => 0x1BAD_CAFE,
}

/// Floating-point scalar used by the rotation, projection and mesh code.
pub trait Real: Scalar + Float + FloatConst {
    /// Converts an `f64` literal into this type.
    fn lit(value: f64) -> Self;
}

impl Real for f32 {
    #[allow(clippy::cast_possible_truncation)]
    #[inline]
    fn lit(value: f64) -> Self {
        value as f32
    }
}

impl Real for f64 {
    #[inline]
    fn lit(value: f64) -> Self {
        value
    }
}

/// Linear interpolation `a * (1 - f) + b * f`.
#[must_use]
#[inline]
pub fn mix<T: Real>(a: T, b: T, f: T) -> T {
    a * (T::one() - f) + b * f
}

/// Power function evaluated as `exp(e * ln(t))`.
///
/// Only meaningful for `t > 0`; `t == 0` yields `0` for positive `e`.
#[must_use]
#[inline]
pub fn rpow<T: Real>(t: T, e: T) -> T {
    (e * t.ln()).exp()
}
