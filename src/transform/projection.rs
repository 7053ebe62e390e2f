//! Projection matrices for the rendering layer.

use crate::math::{Matrix, Real, Vector};

/// Coordinate-system handedness of a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Handedness {
    /// Camera looks down `-Z`.
    #[default]
    Right,
    /// Camera looks down `+Z`.
    Left,
}

impl Handedness {
    /// `+1` for right-handed, `-1` for left-handed.
    #[must_use]
    pub fn sign<T: Real>(self) -> T {
        match self {
            Self::Right => T::one(),
            Self::Left => -T::one(),
        }
    }
}

/// Perspective projection with vertical field of view `fovy` (radians).
///
/// Right-handed views look down `-Z`. Depth lands in `[-1, 1]` only
/// approximately: `-znear` maps to `zfar / (znear - zfar)` and `-zfar` to
/// `(zfar - 2 * znear) / (zfar - znear)`, which approach `-1` and `+1` as
/// `zfar / znear` grows.
#[must_use]
pub fn perspective<T: Real>(
    fovy: T,
    aspect: T,
    znear: T,
    zfar: T,
    handedness: Handedness,
) -> Matrix<T, 4, 4> {
    let h = handedness.sign::<T>();
    let o = T::zero();
    let y = T::one() / (fovy * T::lit(0.5)).tan();
    let x = y / aspect;
    let zdist = (znear - zfar) * h;
    let zfar_per_zdist = zfar / zdist;
    Matrix::<T, 4, 4>::new(
        Vector::<T, 4>::new(x, o, o, o),
        Vector::<T, 4>::new(o, y, o, o),
        Vector::<T, 4>::new(o, o, zfar_per_zdist, -h),
        Vector::<T, 4>::new(o, o, T::lit(2.0) * znear * zfar_per_zdist * h, o),
    )
}

/// Orthographic projection of the box `[left, right] x [bottom, top] x
/// [-znear, -zfar]` onto the clip cube.
#[must_use]
pub fn ortho<T: Real>(left: T, right: T, bottom: T, top: T, znear: T, zfar: T) -> Matrix<T, 4, 4> {
    let o = T::zero();
    let two = T::lit(2.0);
    Matrix::<T, 4, 4>::new(
        Vector::<T, 4>::new(two / (right - left), o, o, o),
        Vector::<T, 4>::new(o, two / (top - bottom), o, o),
        Vector::<T, 4>::new(o, o, -two / (zfar - znear), o),
        Vector::<T, 4>::new(
            -(right + left) / (right - left),
            -(top + bottom) / (top - bottom),
            -(zfar + znear) / (zfar - znear),
            T::one(),
        ),
    )
}
