use std::array;
use std::ops::{Add, Index, Mul, MulAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use bytemuck::{Pod, Zeroable};

use super::scalar::{Real, Scalar};
use super::vector::Vector;

/// A matrix of `C` columns, each a `Vector<T, R>`.
///
/// Storage is column-major: the `C * R` scalars are laid out as `C`
/// contiguous blocks of `R`, so [`Matrix::as_slice`] can be handed directly to
/// a graphics API expecting column-major uniforms.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Matrix<T, const C: usize, const R: usize> {
    m: [Vector<T, R>; C],
}

// SAFETY: `#[repr(C)]` array of `Pod` vectors; no padding.
unsafe impl<T: Scalar, const C: usize, const R: usize> Zeroable for Matrix<T, C, R> {}
unsafe impl<T: Scalar, const C: usize, const R: usize> Pod for Matrix<T, C, R> {}

impl<T: Scalar, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Creates a matrix from its columns.
    #[must_use]
    #[inline]
    pub const fn from_columns(m: [Vector<T, R>; C]) -> Self {
        const { assert!(C >= 2 && C <= 4, "matrices have 2, 3 or 4 columns") };
        Self { m }
    }

    /// Creates a matrix with `e` on the diagonal and zero elsewhere.
    #[must_use]
    pub fn from_scalar(e: T) -> Self {
        Self::from_columns(array::from_fn(|x| {
            Vector::from_array(array::from_fn(|y| if x == y { e } else { T::zero() }))
        }))
    }

    #[must_use]
    pub fn identity() -> Self {
        Self::from_scalar(T::one())
    }

    /// Creates a matrix with `v` on the diagonal and zero elsewhere.
    #[must_use]
    pub fn from_diagonal(v: Vector<T, R>) -> Self {
        Self::from_columns(array::from_fn(|x| {
            Vector::from_array(array::from_fn(|y| if x == y { v[x] } else { T::zero() }))
        }))
    }

    /// Copies `C * R` scalars that are already in column-major order.
    #[must_use]
    pub fn from_slice(data: &[T]) -> Self {
        debug_assert!(
            data.len() >= C * R,
            "{} values for a {C}x{R} matrix",
            data.len()
        );
        Self::from_columns(array::from_fn(|x| Vector::from_slice(&data[x * R..])))
    }

    /// Creates a matrix whose contents must be written before they are read.
    ///
    /// See [`Vector::uninit`].
    #[must_use]
    pub fn uninit() -> Self {
        Self::from_columns([Vector::uninit(); C])
    }

    #[must_use]
    #[inline]
    pub fn column(&self, i: usize) -> Vector<T, R> {
        self.m[i]
    }

    #[inline]
    pub fn set_column(&mut self, i: usize, v: Vector<T, R>) {
        self.m[i] = v;
    }

    /// Gathers component `i` of every column.
    #[must_use]
    #[inline]
    pub fn row(&self, i: usize) -> Vector<T, C> {
        Vector::from_array(array::from_fn(|x| self.m[x][i]))
    }

    #[must_use]
    pub fn transpose(&self) -> Matrix<T, R, C> {
        Matrix::from_columns(array::from_fn(|y| self.row(y)))
    }

    /// The `C * R` scalars in column-major order.
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        bytemuck::cast_slice(&self.m[..])
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        bytemuck::cast_slice_mut(&mut self.m[..])
    }
}

impl<T: Real, const N: usize> Matrix<T, N, N> {
    /// Rotation by `angle` radians about `axis` (normalized here), embedded in
    /// the upper-left 3x3 block of an identity matrix.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn from_axis_angle(angle: T, axis: Vector<T, 3>) -> Self {
        debug_assert!(N >= 3, "axis rotation needs at least a 3x3 matrix");
        let mut res = Self::identity();

        let s = angle.sin();
        let c = angle.cos();
        let t = T::one() - c;
        let n = axis.normalize();
        let (x, y, z) = (n.x(), n.y(), n.z());

        res.m[0].set(0, t * x * x + c);
        res.m[0].set(1, t * x * y + z * s);
        res.m[0].set(2, t * x * z - y * s);
        res.m[1].set(0, t * x * y - z * s);
        res.m[1].set(1, t * y * y + c);
        res.m[1].set(2, t * y * z + x * s);
        res.m[2].set(0, t * x * z + y * s);
        res.m[2].set(1, t * y * z - x * s);
        res.m[2].set(2, t * z * z + c);
        res
    }
}

impl<T: Scalar, const R: usize> Matrix<T, 2, R> {
    #[must_use]
    pub const fn new(c0: Vector<T, R>, c1: Vector<T, R>) -> Self {
        Self::from_columns([c0, c1])
    }
}

impl<T: Scalar, const R: usize> Matrix<T, 3, R> {
    #[must_use]
    pub const fn new(c0: Vector<T, R>, c1: Vector<T, R>, c2: Vector<T, R>) -> Self {
        Self::from_columns([c0, c1, c2])
    }
}

impl<T: Scalar, const R: usize> Matrix<T, 4, R> {
    #[must_use]
    pub const fn new(
        c0: Vector<T, R>,
        c1: Vector<T, R>,
        c2: Vector<T, R>,
        c3: Vector<T, R>,
    ) -> Self {
        Self::from_columns([c0, c1, c2, c3])
    }
}

impl<T: Scalar> Matrix<T, 3, 3> {
    /// Embeds into a 4x4 homogeneous matrix with `1` in the corner.
    #[must_use]
    pub fn to_homogeneous(&self) -> Matrix<T, 4, 4> {
        let z = T::zero();
        Matrix::<T, 4, 4>::new(
            Vector::from_xyz(self.m[0], z),
            Vector::from_xyz(self.m[1], z),
            Vector::from_xyz(self.m[2], z),
            Vector::<T, 4>::new(z, z, z, T::one()),
        )
    }
}

impl<T: Scalar, const C: usize, const R: usize> Index<usize> for Matrix<T, C, R> {
    type Output = Vector<T, R>;

    #[inline]
    fn index(&self, i: usize) -> &Vector<T, R> {
        &self.m[i]
    }
}

/// Matrix times column vector: `result[r] = sum_c self[c][r] * v[c]`.
impl<T: Scalar, const C: usize, const R: usize> Mul<Vector<T, C>> for Matrix<T, C, R> {
    type Output = Vector<T, R>;

    #[inline]
    fn mul(self, v: Vector<T, C>) -> Vector<T, R> {
        let mut res = Vector::zero();
        for (col, &s) in self.m.iter().zip(v.iter()) {
            res += *col * s;
        }
        res
    }
}

/// Row vector times matrix: `result[i] = dot(v, m[i])`, the same as
/// `m.transpose() * v`.
impl<T: Scalar, const C: usize, const R: usize> Mul<Matrix<T, C, R>> for Vector<T, R> {
    type Output = Vector<T, C>;

    #[inline]
    fn mul(self, m: Matrix<T, C, R>) -> Vector<T, C> {
        Vector::from_array(array::from_fn(|i| self.dot(m.m[i])))
    }
}

/// `(A * B)[x][y] = dot(transpose(A)[y], B[x])`.
impl<T: Scalar, const C: usize, const R: usize, const C2: usize> Mul<Matrix<T, C2, C>>
    for Matrix<T, C, R>
{
    type Output = Matrix<T, C2, R>;

    fn mul(self, o: Matrix<T, C2, C>) -> Matrix<T, C2, R> {
        let t = self.transpose();
        Matrix::from_columns(array::from_fn(|x| {
            Vector::from_array(array::from_fn(|y| t.m[y].dot(o.m[x])))
        }))
    }
}

impl<T: Scalar, const N: usize> MulAssign for Matrix<T, N, N> {
    #[inline]
    fn mul_assign(&mut self, o: Self) {
        *self = *self * o;
    }
}

impl<T: Scalar, const C: usize, const R: usize> Mul<T> for Matrix<T, C, R> {
    type Output = Self;

    #[inline]
    fn mul(self, f: T) -> Self {
        Self::from_columns(self.m.map(|col| col * f))
    }
}

impl<T: Scalar, const C: usize, const R: usize> Add for Matrix<T, C, R> {
    type Output = Self;

    #[inline]
    fn add(self, o: Self) -> Self {
        Self::from_columns(array::from_fn(|x| self.m[x] + o.m[x]))
    }
}

impl<T, const C: usize, const R: usize> AbsDiffEq for Matrix<T, C, R>
where
    T: Scalar + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.m
            .iter()
            .zip(&other.m)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const C: usize, const R: usize> RelativeEq for Matrix<T, C, R>
where
    T: Scalar + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.m
            .iter()
            .zip(&other.m)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const C: usize, const R: usize> UlpsEq for Matrix<T, C, R>
where
    T: Scalar + UlpsEq<Epsilon = T>,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.m
            .iter()
            .zip(&other.m)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;
    use crate::config::POISON_UNINIT;
    use crate::math::{Float2, Float3, Float3x3, Float3x4, Float4, Float4x4};

    fn sample4() -> Float4x4 {
        Float4x4::new(
            Float4::new(1.0, 2.0, 3.0, 4.0),
            Float4::new(5.0, 6.0, 7.0, 8.0),
            Float4::new(9.0, 10.0, 11.0, 12.0),
            Float4::new(13.0, 14.0, 15.0, 16.0),
        )
    }

    #[test]
    fn from_scalar_is_scaled_identity() {
        let m = Float3x3::from_scalar(2.0);
        assert_eq!(m.row(0), Float3::new(2.0, 0.0, 0.0));
        assert_eq!(m.row(1), Float3::new(0.0, 2.0, 0.0));
        assert_eq!(m.row(2), Float3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn from_diagonal_places_vector() {
        let m = Float3x3::from_diagonal(Float3::new(1.0, 2.0, 3.0));
        assert_eq!(m * Float3::splat(1.0), Float3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn from_slice_is_column_major() {
        let data: Vec<f32> = (1..=16).map(|i| i as f32).collect();
        let m = Float4x4::from_slice(&data);
        assert_eq!(m, sample4());
        assert_eq!(m.as_slice(), data.as_slice());
        assert_eq!(m[1], Float4::new(5.0, 6.0, 7.0, 8.0));
        assert_eq!(m.row(0), Float4::new(1.0, 5.0, 9.0, 13.0));
    }

    #[test]
    fn uninit_is_poisoned_in_debug() {
        let m = Float3x4::uninit();
        let i = Matrix::<i32, 2, 2>::uninit();
        if POISON_UNINIT {
            assert!(m.as_slice().iter().all(|e| e.is_nan()));
            assert!(i.as_slice().iter().all(|&e| e == 0x1BAD_CAFE));
        } else {
            assert_eq!(m, Float3x4::from_slice(&[0.0; 12]));
            assert_eq!(i, Matrix::from_scalar(0));
        }
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let m = Matrix::<f32, 2, 3>::new(Float3::new(1.0, 2.0, 3.0), Float3::new(4.0, 5.0, 6.0));
        let t = m.transpose();
        assert_eq!(t[0], Float2::new(1.0, 4.0));
        assert_eq!(t[2], Float2::new(3.0, 6.0));
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn identity_is_neutral() {
        let m = sample4();
        assert_eq!(m * Float4x4::identity(), m);
        assert_eq!(Float4x4::identity() * m, m);
    }

    #[test]
    fn matrix_vector_product() {
        let m = sample4();
        let v = Float4::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!(m * v, Float4::new(14.0, 16.0, 18.0, 20.0));
    }

    #[test]
    fn row_vector_product_uses_transpose() {
        let m = sample4();
        let v = Float4::new(1.0, 2.0, 0.0, -1.0);
        assert_eq!(v * m, m.transpose() * v);
    }

    #[test]
    fn non_square_product_dimensions() {
        // 2 columns of 3 rows times 3 columns of 2 rows gives 3x3.
        let a = Matrix::<f32, 2, 3>::new(Float3::new(1.0, 0.0, 0.0), Float3::new(0.0, 1.0, 0.0));
        let b = Matrix::<f32, 3, 2>::new(
            Float2::new(1.0, 2.0),
            Float2::new(3.0, 4.0),
            Float2::new(5.0, 6.0),
        );
        let p: Matrix<f32, 3, 3> = a * b;
        assert_eq!(p[0], Float3::new(1.0, 2.0, 0.0));
        assert_eq!(p[2], Float3::new(5.0, 6.0, 0.0));
    }

    #[test]
    fn product_composes_transforms() {
        let a = Float3x3::from_axis_angle(FRAC_PI_2, Float3::unit_z());
        let mut b = Float3x3::from_diagonal(Float3::new(2.0, 1.0, 1.0));
        let v = Float3::unit_x();
        assert_relative_eq!((a * b) * v, a * (b * v), epsilon = 1e-6);
        b *= a;
        assert_relative_eq!(b * v, Float3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn scale_and_add() {
        let m = Float3x3::identity();
        assert_eq!(m * 3.0, Float3x3::from_scalar(3.0));
        assert_eq!(m + m, Float3x3::from_scalar(2.0));
    }

    #[test]
    fn axis_angle_about_z() {
        let m = Float4x4::from_axis_angle(FRAC_PI_2, Float3::new(0.0, 0.0, 5.0));
        let v = m * Float4::new(1.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(v, Float4::new(0.0, 1.0, 0.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn to_homogeneous_keeps_block() {
        let m = Float3x3::from_diagonal(Float3::new(1.0, 2.0, 3.0)).to_homogeneous();
        assert_eq!(m.row(3), Float4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(m[1], Float4::new(0.0, 2.0, 0.0, 0.0));
    }

    #[test]
    fn set_column_and_column() {
        let mut m = Float3x3::identity();
        m.set_column(2, Float3::splat(7.0));
        assert_eq!(m.column(2), Float3::splat(7.0));
        m.as_mut_slice()[0] = 4.0;
        assert_eq!(m.row(0), Float3::new(4.0, 0.0, 7.0));
    }
}
