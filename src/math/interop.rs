//! Conversions to and from `nalgebra` types.
//!
//! Both sides store matrices column-major, so conversions are plain copies.

use nalgebra::{Matrix3, Matrix4, Vector2, Vector3, Vector4};

use super::matrix::Matrix;
use super::quaternion::Quaternion;
use super::scalar::Scalar;
use super::vector::Vector;

macro_rules! impl_vector_interop {
    ($($na:ident => $n:literal),*) => {
        $(
            impl<T: Scalar> From<$na<T>> for Vector<T, $n> {
                fn from(v: $na<T>) -> Self {
                    Self::from_slice(v.as_slice())
                }
            }

            impl<T: Scalar> From<Vector<T, $n>> for $na<T> {
                fn from(v: Vector<T, $n>) -> Self {
                    Self::from_column_slice(v.as_slice())
                }
            }
        )*
    };
}

impl_vector_interop!(Vector2 => 2, Vector3 => 3, Vector4 => 4);

macro_rules! impl_matrix_interop {
    ($($na:ident => $n:literal),*) => {
        $(
            impl<T: Scalar> From<$na<T>> for Matrix<T, $n, $n> {
                fn from(m: $na<T>) -> Self {
                    Self::from_slice(m.as_slice())
                }
            }

            impl<T: Scalar> From<Matrix<T, $n, $n>> for $na<T> {
                fn from(m: Matrix<T, $n, $n>) -> Self {
                    Self::from_column_slice(m.as_slice())
                }
            }
        )*
    };
}

impl_matrix_interop!(Matrix3 => 3, Matrix4 => 4);

impl<T: Scalar> From<nalgebra::Quaternion<T>> for Quaternion<T> {
    fn from(q: nalgebra::Quaternion<T>) -> Self {
        // `coords` is stored (i, j, k, w).
        Self::from_vector(q.coords.into())
    }
}

impl<T: Scalar> From<Quaternion<T>> for nalgebra::Quaternion<T> {
    fn from(q: Quaternion<T>) -> Self {
        Self {
            coords: (*q.as_vector()).into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::{Float3, Float3x3, Float4x4, Quat};

    #[test]
    fn vector_round_trip() {
        let v = Float3::new(1.0, 2.0, 3.0);
        let na: Vector3<f32> = v.into();
        assert_eq!(na, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Float3::from(na), v);
    }

    #[test]
    fn matrix_layout_matches() {
        let m = Float3x3::from_columns([
            Float3::new(1.0, 2.0, 3.0),
            Float3::new(4.0, 5.0, 6.0),
            Float3::new(7.0, 8.0, 9.0),
        ]);
        let na: Matrix3<f32> = m.into();
        // nalgebra indexes (row, column).
        assert_eq!(na[(0, 1)], 4.0);
        assert_eq!(na[(2, 0)], 3.0);
        assert_eq!(Float3x3::from(na), m);
    }

    #[test]
    fn matrix_product_agrees() {
        let a = Float4x4::from_axis_angle(0.5, Float3::new(1.0, 0.0, 1.0));
        let b = Float4x4::from_axis_angle(-1.2, Float3::new(0.0, 1.0, 0.0));
        let na = Matrix4::from(a) * Matrix4::from(b);
        assert_relative_eq!(a * b, Float4x4::from(na), epsilon = 1e-6);
    }

    #[test]
    fn quaternion_field_order() {
        let q = Quat::new(1.0, 2.0, 3.0, 4.0);
        let na: nalgebra::Quaternion<f32> = q.into();
        assert_eq!(na.w, 4.0);
        assert_eq!(na.i, 1.0);
        assert_eq!(Quat::from(na), q);
    }

    #[test]
    fn quaternion_rotation_agrees() {
        let q = Quat::from_angle_axis(0.9, Float3::new(0.0, 0.6, 0.8));
        let unit = nalgebra::UnitQuaternion::from_quaternion(q.into());
        let v = Float3::new(1.0, -2.0, 0.5);
        let expected: Float3 = (unit * Vector3::from(v)).into();
        assert_relative_eq!(q.transform(v), expected, epsilon = 1e-5);
    }
}
