//! Closed-form inverse of a 4x4 matrix.
//!
//! The adjugate is expanded directly from the 16 cofactors of the flat
//! column-major storage, which is cheaper than a general Gaussian elimination
//! for the fixed 4x4 case.

use tracing::error;

use super::matrix::Matrix;
use super::scalar::Real;
use crate::error::{GeometryError, Result};

/// Inverts `mat`, failing when its determinant is exactly zero.
///
/// # Errors
///
/// Returns [`GeometryError::SingularMatrix`] if the matrix has no inverse.
#[allow(clippy::too_many_lines)]
pub fn try_invert<T: Real>(mat: &Matrix<T, 4, 4>) -> Result<Matrix<T, 4, 4>> {
    let m = mat.as_slice();
    let mut inv = [T::zero(); 16];

    inv[0] = m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
        + m[9] * m[7] * m[14]
        + m[13] * m[6] * m[11]
        - m[13] * m[7] * m[10];

    inv[4] = m[4] * m[11] * m[14] - m[4] * m[10] * m[15] + m[8] * m[6] * m[15]
        - m[8] * m[7] * m[14]
        - m[12] * m[6] * m[11]
        + m[12] * m[7] * m[10];

    inv[8] = m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
        + m[8] * m[7] * m[13]
        + m[12] * m[5] * m[11]
        - m[12] * m[7] * m[9];

    inv[12] = m[4] * m[10] * m[13] - m[4] * m[9] * m[14] + m[8] * m[5] * m[14]
        - m[8] * m[6] * m[13]
        - m[12] * m[5] * m[10]
        + m[12] * m[6] * m[9];

    inv[1] = m[1] * m[11] * m[14] - m[1] * m[10] * m[15] + m[9] * m[2] * m[15]
        - m[9] * m[3] * m[14]
        - m[13] * m[2] * m[11]
        + m[13] * m[3] * m[10];

    inv[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
        + m[8] * m[3] * m[14]
        + m[12] * m[2] * m[11]
        - m[12] * m[3] * m[10];

    inv[9] = m[0] * m[11] * m[13] - m[0] * m[9] * m[15] + m[8] * m[1] * m[15]
        - m[8] * m[3] * m[13]
        - m[12] * m[1] * m[11]
        + m[12] * m[3] * m[9];

    inv[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
        + m[8] * m[2] * m[13]
        + m[12] * m[1] * m[10]
        - m[12] * m[2] * m[9];

    inv[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
        + m[5] * m[3] * m[14]
        + m[13] * m[2] * m[7]
        - m[13] * m[3] * m[6];

    inv[6] = m[0] * m[7] * m[14] - m[0] * m[6] * m[15] + m[4] * m[2] * m[15]
        - m[4] * m[3] * m[14]
        - m[12] * m[2] * m[7]
        + m[12] * m[3] * m[6];

    inv[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
        + m[4] * m[3] * m[13]
        + m[12] * m[1] * m[7]
        - m[12] * m[3] * m[5];

    inv[14] = m[0] * m[6] * m[13] - m[0] * m[5] * m[14] + m[4] * m[1] * m[14]
        - m[4] * m[2] * m[13]
        - m[12] * m[1] * m[6]
        + m[12] * m[2] * m[5];

    inv[3] = m[1] * m[7] * m[10] - m[1] * m[6] * m[11] + m[5] * m[2] * m[11]
        - m[5] * m[3] * m[10]
        - m[9] * m[2] * m[7]
        + m[9] * m[3] * m[6];

    inv[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
        + m[4] * m[3] * m[10]
        + m[8] * m[2] * m[7]
        - m[8] * m[3] * m[6];

    inv[11] = m[0] * m[7] * m[9] - m[0] * m[5] * m[11] + m[4] * m[1] * m[11]
        - m[4] * m[3] * m[9]
        - m[8] * m[1] * m[7]
        + m[8] * m[3] * m[5];

    inv[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
        + m[4] * m[2] * m[9]
        + m[8] * m[1] * m[6]
        - m[8] * m[2] * m[5];

    let det = m[0] * inv[0] + m[1] * inv[4] + m[2] * inv[8] + m[3] * inv[12];
    if det == T::zero() {
        return Err(GeometryError::SingularMatrix.into());
    }

    let inv_det = T::one() / det;
    for e in &mut inv {
        *e *= inv_det;
    }
    Ok(Matrix::from_slice(&inv))
}

/// Inverts `mat`.
///
/// A singular matrix is a caller bug: debug builds panic, release builds log
/// an error and return the identity.
#[must_use]
pub fn invert<T: Real>(mat: &Matrix<T, 4, 4>) -> Matrix<T, 4, 4> {
    match try_invert(mat) {
        Ok(inv) => inv,
        Err(e) => {
            error!(error = %e, "singular matrix passed to invert");
            assert!(!cfg!(debug_assertions), "invert: {e}");
            Matrix::identity()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::GeomkitError;
    use crate::math::{Double4x4, Float3, Float4, Float4x4};

    fn sample() -> Double4x4 {
        Double4x4::from_slice(&[
            2.0, 0.0, 1.0, 0.0, //
            1.0, 3.0, 0.0, 0.0, //
            0.0, 1.0, 4.0, 0.0, //
            5.0, -2.0, 7.0, 1.0,
        ])
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let m = sample();
        let inv = try_invert(&m).unwrap();
        assert_relative_eq!(inv * m, Double4x4::identity(), epsilon = 1e-12);
        assert_relative_eq!(m * inv, Double4x4::identity(), epsilon = 1e-12);
    }

    #[test]
    fn matches_nalgebra() {
        let m = sample();
        let ours = try_invert(&m).unwrap();
        let reference = nalgebra::Matrix4::from_column_slice(m.as_slice())
            .try_inverse()
            .unwrap();
        let reference = Double4x4::from_slice(reference.as_slice());
        assert_relative_eq!(ours, reference, epsilon = 1e-12);
    }

    #[test]
    fn double_inverse_round_trips() {
        let m = Float4x4::from_axis_angle(0.7, Float3::new(1.0, 2.0, 3.0));
        let back = invert(&invert(&m));
        assert_relative_eq!(back, m, epsilon = 1e-5);
    }

    #[test]
    fn inverts_translation() {
        let mut m = Float4x4::identity();
        m.set_column(3, Float4::new(1.0, 2.0, 3.0, 1.0));
        let inv = invert(&m);
        assert_relative_eq!(inv[3], Float4::new(-1.0, -2.0, -3.0, 1.0));
    }

    #[test]
    fn singular_is_reported() {
        let m = Float4x4::from_diagonal(Float4::new(1.0, 0.0, 1.0, 1.0));
        let err = try_invert(&m).unwrap_err();
        assert!(matches!(
            err,
            GeomkitError::Geometry(GeometryError::SingularMatrix)
        ));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invert")]
    fn singular_panics_in_debug() {
        let _ = invert(&Float4x4::from_scalar(0.0));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn singular_falls_back_to_identity() {
        assert_eq!(invert(&Float4x4::from_scalar(0.0)), Float4x4::identity());
    }
}
