//! Compact 3x4 affine transforms for skeletal animation.
//!
//! A transform is stored as a `Matrix<T, 3, 4>` whose three 4-vectors are the
//! rows `[r0 r1 r2 | t]` of the affine matrix, i.e. the first three rows of
//! the homogeneous 4x4 form. This is the layout joint poses are loaded in.

use crate::math::{rotation, Matrix, Quaternion, Real, Vector};

/// Joint pose: rotation `q`, then per-axis scale `s`, then translation `t`,
/// applied right to left as `T * R * S`.
#[must_use]
pub fn rotation_scale_translation<T: Real>(
    q: &Quaternion<T>,
    s: Vector<T, 3>,
    t: Vector<T, 3>,
) -> Matrix<T, 3, 4> {
    let r = rotation(q);
    Matrix::<T, 3, 4>::new(
        Vector::from_xyz(r.row(0) * s, t.x()),
        Vector::from_xyz(r.row(1) * s, t.y()),
        Vector::from_xyz(r.row(2) * s, t.z()),
    )
}

/// Inverse of a rotation-scale-translation transform.
///
/// The linear part must be a rotation times a per-axis scale with no shear.
/// This is not checked; a sheared input gives a wrong result.
#[must_use]
pub fn invert_ortho<T: Real>(m: &Matrix<T, 3, 4>) -> Matrix<T, 3, 4> {
    let mut inv = m.transpose();
    for i in 0..3 {
        let c = inv[i];
        inv.set_column(i, c / c.squared_length());
    }
    let t = inv[3];
    Matrix::<T, 3, 4>::new(
        Vector::from_xyz(inv[0], -inv[0].dot(t)),
        Vector::from_xyz(inv[1], -inv[1].dot(t)),
        Vector::from_xyz(inv[2], -inv[2].dot(t)),
    )
}

/// Composition `a ∘ b`: the result applies `b` first, then `a`.
#[must_use]
pub fn compose_affine<T: Real>(a: &Matrix<T, 3, 4>, b: &Matrix<T, 3, 4>) -> Matrix<T, 3, 4> {
    let row = |i: usize| {
        let r = a[i];
        let mut out = b[0] * r.x() + b[1] * r.y() + b[2] * r.z();
        out.add_at(3, r.w());
        out
    };
    Matrix::<T, 3, 4>::new(row(0), row(1), row(2))
}

/// Applies `m` to the point `p`.
#[must_use]
pub fn transform_point_affine<T: Real>(m: &Matrix<T, 3, 4>, p: Vector<T, 3>) -> Vector<T, 3> {
    let h = Vector::from_xyz(p, T::one());
    Vector::<T, 3>::new(m[0].dot(h), m[1].dot(h), m[2].dot(h))
}

/// Expands to the homogeneous 4x4 form with `(0, 0, 0, 1)` as the last row.
#[must_use]
pub fn affine_to_homogeneous<T: Real>(m: &Matrix<T, 3, 4>) -> Matrix<T, 4, 4> {
    let cols = m.transpose();
    let z = T::zero();
    Matrix::<T, 4, 4>::new(
        Vector::from_xyz(cols[0], z),
        Vector::from_xyz(cols[1], z),
        Vector::from_xyz(cols[2], z),
        Vector::from_xyz(cols[3], T::one()),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;
    use crate::math::invert::invert;
    use crate::math::{Float3, Float3x4, Float4, Quat};
    use crate::transform::{scaling_xyz, translation};

    const EPS: f32 = 1e-5;

    fn sample() -> Float3x4 {
        let q = Quat::from_angle_axis(0.8, Float3::new(1.0, 2.0, -1.0).normalize());
        rotation_scale_translation(&q, Float3::new(2.0, 0.5, 3.0), Float3::new(4.0, -1.0, 0.25))
    }

    #[test]
    fn pose_is_translate_rotate_scale() {
        let q = Quat::from_angle_axis(FRAC_PI_2, Float3::unit_z());
        let m = rotation_scale_translation(&q, Float3::new(2.0, 1.0, 1.0), Float3::new(0.0, 0.0, 5.0));
        // Scale x by 2, rotate onto +y, lift by 5.
        let p = transform_point_affine(&m, Float3::unit_x());
        assert_relative_eq!(p, Float3::new(0.0, 2.0, 5.0), epsilon = EPS);
    }

    #[test]
    fn pose_matches_homogeneous_product() {
        let q = Quat::from_angle_axis(0.8, Float3::new(1.0, 2.0, -1.0).normalize());
        let s = Float3::new(2.0, 0.5, 3.0);
        let t = Float3::new(4.0, -1.0, 0.25);
        let expected =
            translation(t) * q.to_rotation_matrix().to_homogeneous() * scaling_xyz(s);
        assert_relative_eq!(affine_to_homogeneous(&sample()), expected, epsilon = EPS);
    }

    #[test]
    fn invert_ortho_undoes_pose() {
        let m = sample();
        let inv = invert_ortho(&m);
        let p = Float3::new(0.3, 7.0, -2.0);
        let back = transform_point_affine(&inv, transform_point_affine(&m, p));
        assert_relative_eq!(back, p, epsilon = 1e-4);
    }

    #[test]
    fn invert_ortho_matches_general_inverse() {
        let m = sample();
        let general = invert(&affine_to_homogeneous(&m));
        assert_relative_eq!(affine_to_homogeneous(&invert_ortho(&m)), general, epsilon = 1e-4);
    }

    #[test]
    fn compose_applies_right_first() {
        let a = sample();
        let q = Quat::from_angle_axis(-0.3, Float3::unit_y());
        let b = rotation_scale_translation(&q, Float3::splat(1.5), Float3::new(1.0, 2.0, 3.0));
        let p = Float3::new(-1.0, 0.5, 2.0);
        let ab = compose_affine(&a, &b);
        assert_relative_eq!(
            transform_point_affine(&ab, p),
            transform_point_affine(&a, transform_point_affine(&b, p)),
            epsilon = 1e-4
        );
        assert_relative_eq!(
            affine_to_homogeneous(&ab),
            affine_to_homogeneous(&a) * affine_to_homogeneous(&b),
            epsilon = 1e-4
        );
    }

    #[test]
    fn compose_with_inverse_is_identity() {
        let m = sample();
        let id = compose_affine(&m, &invert_ortho(&m));
        assert_relative_eq!(id[0], Float4::new(1.0, 0.0, 0.0, 0.0), epsilon = 1e-4);
        assert_relative_eq!(id[1], Float4::new(0.0, 1.0, 0.0, 0.0), epsilon = 1e-4);
        assert_relative_eq!(id[2], Float4::new(0.0, 0.0, 1.0, 0.0), epsilon = 1e-4);
    }
}
