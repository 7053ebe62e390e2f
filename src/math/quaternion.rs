use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Mul, Neg};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use bytemuck::{Pod, Zeroable};

use super::matrix::Matrix;
use super::scalar::{Real, Scalar};
use super::vector::Vector;

/// Below this fraction of `|u||v|`, [`quat_from_two_vectors`] treats its
/// inputs as antiparallel.
pub const ANTIPARALLEL_EPSILON: f64 = 1e-6;

/// A rotation quaternion `(x, y, z, w)` with `(x, y, z) = axis * sin(θ/2)` and
/// `w = cos(θ/2)`.
///
/// Wraps a [`Vector<T, 4>`] and re-exposes only the vector operations that
/// still make sense for quaternions. Constructors do not normalize unless
/// stated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Quaternion<T>(Vector<T, 4>);

/// `f32` quaternion.
pub type Quat = Quaternion<f32>;

// SAFETY: transparent wrapper over a `Pod` vector.
unsafe impl<T: Scalar> Zeroable for Quaternion<T> {}
unsafe impl<T: Scalar> Pod for Quaternion<T> {}

impl<T: Scalar> Quaternion<T> {
    #[must_use]
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self(Vector::<T, 4>::new(x, y, z, w))
    }

    /// The rotation by zero radians.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    #[must_use]
    #[inline]
    pub const fn from_vector(v: Vector<T, 4>) -> Self {
        Self(v)
    }

    /// Creates a quaternion from its vector part and real part.
    #[must_use]
    #[inline]
    pub fn from_xyz_w(v: Vector<T, 3>, w: T) -> Self {
        Self(Vector::from_xyz(v, w))
    }

    /// Reads `x, y, z, w` from the first four values of `v`.
    #[must_use]
    pub fn from_slice(v: &[T]) -> Self {
        Self(Vector::from_slice(v))
    }

    #[must_use]
    #[inline]
    pub fn x(&self) -> T {
        self.0.x()
    }

    #[must_use]
    #[inline]
    pub fn y(&self) -> T {
        self.0.y()
    }

    #[must_use]
    #[inline]
    pub fn z(&self) -> T {
        self.0.z()
    }

    #[must_use]
    #[inline]
    pub fn w(&self) -> T {
        self.0.w()
    }

    /// The vector part.
    #[must_use]
    #[inline]
    pub fn xyz(&self) -> Vector<T, 3> {
        self.0.xyz()
    }

    #[must_use]
    #[inline]
    pub fn as_vector(&self) -> &Vector<T, 4> {
        &self.0
    }

    #[must_use]
    #[inline]
    pub fn dot(self, o: Self) -> T {
        self.0.dot(o.0)
    }
}

impl<T: Real> Quaternion<T> {
    /// Rotation of `angle` radians about `axis`, which must be unit length.
    #[must_use]
    pub fn from_angle_axis(angle: T, axis: Vector<T, 3>) -> Self {
        let half = T::lit(0.5) * angle;
        Self::from_xyz_w(axis * half.sin(), half.cos())
    }

    /// Rebuilds a unit quaternion from its vector part.
    ///
    /// The real part is `-sqrt(max(1 - |v|², 0))`: the negative root is kept,
    /// which is the convention of the skeletal-animation data this reads.
    #[must_use]
    pub fn from_xyz(v: Vector<T, 3>) -> Self {
        let w = (T::one() - v.squared_length()).max(T::zero()).sqrt();
        Self::from_xyz_w(v, -w)
    }

    /// Shortest-arc rotation taking the direction of `u` onto that of `v`.
    ///
    /// See [`quat_from_two_vectors`].
    #[must_use]
    pub fn from_two_vectors(u: Vector<T, 3>, v: Vector<T, 3>) -> Self {
        quat_from_two_vectors(u, v)
    }

    #[must_use]
    #[inline]
    pub fn length(self) -> T {
        self.0.length()
    }

    #[must_use]
    #[inline]
    pub fn normalize(self) -> Self {
        Self(self.0.normalize())
    }

    /// `(-x, -y, -z, w)`, the inverse rotation of a unit quaternion.
    #[must_use]
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::from_xyz_w(-self.xyz(), self.w())
    }

    /// Negates all four components in place. The rotation is unchanged.
    #[inline]
    pub fn flip(&mut self) {
        *self = -*self;
    }

    /// Rotates `p`.
    #[must_use]
    pub fn transform(&self, p: Vector<T, 3>) -> Vector<T, 3> {
        let v = self.xyz();
        p + v.cross(v.cross(p) + p * self.w()) * T::lit(2.0)
    }

    /// The equivalent 3x3 rotation matrix, see [`rotation`].
    #[must_use]
    pub fn to_rotation_matrix(&self) -> Matrix<T, 3, 3> {
        rotation(self)
    }
}

/// Column-major rotation matrix of `q`, so `rotation(q) * p == q.transform(p)`.
#[must_use]
#[allow(clippy::similar_names)]
pub fn rotation<T: Real>(q: &Quaternion<T>) -> Matrix<T, 3, 3> {
    let one = T::one();
    let two = T::lit(2.0);
    let (x, y, z, w) = (q.x(), q.y(), q.z(), q.w());
    let (tx, ty, tz) = (two * x, two * y, two * z);
    let (txx, tyy, tzz) = (tx * x, ty * y, tz * z);
    let (txy, txz, tyz) = (tx * y, tx * z, ty * z);
    let (twx, twy, twz) = (w * tx, w * ty, w * tz);

    Matrix::<T, 3, 3>::new(
        Vector::<T, 3>::new(one - (tyy + tzz), txy + twz, txz - twy),
        Vector::<T, 3>::new(txy - twz, one - (txx + tzz), tyz + twx),
        Vector::<T, 3>::new(txz + twy, tyz - twx, one - (txx + tyy)),
    )
}

/// Shortest-arc rotation taking the direction of `u` onto that of `v`.
///
/// Neither input needs to be unit length. For (nearly) opposite inputs the
/// result is a half turn about an arbitrary axis orthogonal to `u`.
#[must_use]
pub fn quat_from_two_vectors<T: Real>(u: Vector<T, 3>, v: Vector<T, 3>) -> Quaternion<T> {
    let norm_u_norm_v = (u.squared_length() * v.squared_length()).sqrt();
    let real = norm_u_norm_v + u.dot(v);
    if real < T::lit(ANTIPARALLEL_EPSILON) * norm_u_norm_v {
        let axis = if u.x().abs() > u.z().abs() {
            Vector::<T, 3>::new(-u.y(), u.x(), T::zero())
        } else {
            Vector::<T, 3>::new(T::zero(), -u.z(), u.y())
        };
        Quaternion::from_xyz_w(axis, T::zero()).normalize()
    } else {
        Quaternion::from_xyz_w(u.cross(v), real).normalize()
    }
}

/// Hamilton product: `a * b` applies `b` first, then `a`.
impl<T: Scalar> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, o: Self) -> Self {
        let (x, y, z, w) = (self.x(), self.y(), self.z(), self.w());
        Self::new(
            w * o.x() + x * o.w() + y * o.z() - z * o.y(),
            w * o.y() - x * o.z() + y * o.w() + z * o.x(),
            w * o.z() + x * o.y() - y * o.x() + z * o.w(),
            w * o.w() - x * o.x() - y * o.y() - z * o.z(),
        )
    }
}

impl<T: Scalar> Mul<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, s: T) -> Self {
        Self(self.0 * s)
    }
}

impl<T: Scalar> Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, o: Self) -> Self {
        Self(self.0 + o.0)
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<T: Scalar> From<Vector<T, 4>> for Quaternion<T> {
    fn from(v: Vector<T, 4>) -> Self {
        Self(v)
    }
}

impl<T: Scalar> From<Quaternion<T>> for Vector<T, 4> {
    fn from(q: Quaternion<T>) -> Self {
        q.0
    }
}

impl<T: Scalar> Display for Quaternion<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T: Scalar + AbsDiffEq<Epsilon = T>> AbsDiffEq for Quaternion<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl<T: Scalar + RelativeEq<Epsilon = T>> RelativeEq for Quaternion<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}

impl<T: Scalar + UlpsEq<Epsilon = T>> UlpsEq for Quaternion<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.0.ulps_eq(&other.0, epsilon, max_ulps)
    }
}
