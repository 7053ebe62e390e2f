use crate::math::{Matrix, Real, Vector};

/// Translation by `t`.
#[must_use]
pub fn translation<T: Real>(t: Vector<T, 3>) -> Matrix<T, 4, 4> {
    let mut m = Matrix::identity();
    m.set_column(3, Vector::from_xyz(t, T::one()));
    m
}

/// Uniform scaling by `s`. The homogeneous `w` row is left alone.
#[must_use]
pub fn scaling<T: Real>(s: T) -> Matrix<T, 4, 4> {
    scaling_xyz(Vector::splat(s))
}

/// Per-axis scaling.
#[must_use]
pub fn scaling_xyz<T: Real>(s: Vector<T, 3>) -> Matrix<T, 4, 4> {
    Matrix::from_diagonal(Vector::from_xyz(s, T::one()))
}

fn from_rows3<T: Real>(r0: [T; 3], r1: [T; 3], r2: [T; 3]) -> Matrix<T, 4, 4> {
    let z = T::zero();
    Matrix::<T, 4, 4>::new(
        Vector::<T, 4>::new(r0[0], r1[0], r2[0], z),
        Vector::<T, 4>::new(r0[1], r1[1], r2[1], z),
        Vector::<T, 4>::new(r0[2], r1[2], r2[2], z),
        Vector::<T, 4>::new(z, z, z, T::one()),
    )
}

/// Rotation about the X axis by the angle whose `(cos, sin)` is `cs`.
#[must_use]
pub fn rotation_x_cs<T: Real>(cs: Vector<T, 2>) -> Matrix<T, 4, 4> {
    let (c, s) = (cs.x(), cs.y());
    let (o, l) = (T::zero(), T::one());
    from_rows3([l, o, o], [o, c, -s], [o, s, c])
}

#[must_use]
pub fn rotation_y_cs<T: Real>(cs: Vector<T, 2>) -> Matrix<T, 4, 4> {
    let (c, s) = (cs.x(), cs.y());
    let (o, l) = (T::zero(), T::one());
    from_rows3([c, o, s], [o, l, o], [-s, o, c])
}

#[must_use]
pub fn rotation_z_cs<T: Real>(cs: Vector<T, 2>) -> Matrix<T, 4, 4> {
    let (c, s) = (cs.x(), cs.y());
    let (o, l) = (T::zero(), T::one());
    from_rows3([c, -s, o], [s, c, o], [o, o, l])
}

/// Rotation about the X axis by `angle` radians.
#[must_use]
pub fn rotation_x<T: Real>(angle: T) -> Matrix<T, 4, 4> {
    rotation_x_cs(Vector::<T, 2>::new(angle.cos(), angle.sin()))
}

#[must_use]
pub fn rotation_y<T: Real>(angle: T) -> Matrix<T, 4, 4> {
    rotation_y_cs(Vector::<T, 2>::new(angle.cos(), angle.sin()))
}

#[must_use]
pub fn rotation_z<T: Real>(angle: T) -> Matrix<T, 4, 4> {
    rotation_z_cs(Vector::<T, 2>::new(angle.cos(), angle.sin()))
}

/// Rotation by `angle` radians about `axis`. The axis need not be unit
/// length.
#[must_use]
pub fn rotation_axis<T: Real>(angle: T, axis: Vector<T, 3>) -> Matrix<T, 4, 4> {
    Matrix::from_axis_angle(angle, axis)
}

/// Skew-symmetric matrix of `v`, such that `m * p == p.cross(v)` for the
/// upper-left 3x3 block.
#[must_use]
pub fn cross_product_matrix<T: Real>(v: Vector<T, 3>) -> Matrix<T, 4, 4> {
    let o = T::zero();
    from_rows3(
        [o, v.z(), -v.y()],
        [-v.z(), o, v.x()],
        [v.y(), -v.x(), o],
    )
}
