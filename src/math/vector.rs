use std::array;
use std::fmt::{self, Display, Formatter};
use std::ops::Index;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use bytemuck::{Pod, Zeroable};
use num_traits::{AsPrimitive, Signed};

use super::scalar::{Real, Scalar};
use crate::config::POISON_UNINIT;

/// A fixed-size numeric tuple with `N` components, `N` in `2..=4`.
///
/// Components are stored contiguously, so a `Vector<f32, 3>` has the same
/// layout as `[f32; 3]`. Equality (`==`) holds when every component is equal
/// and `!=` holds when any component differs. Ordering comparisons are the
/// explicit `all_*` methods since they do not form a total or partial order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Vector<T, const N: usize> {
    c: [T; N],
}

// SAFETY: `#[repr(C)]` over `[T; N]` with `T: Pod`; no padding, every bit
// pattern is a valid value.
unsafe impl<T: Scalar, const N: usize> Zeroable for Vector<T, N> {}
unsafe impl<T: Scalar, const N: usize> Pod for Vector<T, N> {}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Creates a vector from its components.
    #[must_use]
    #[inline]
    pub const fn from_array(c: [T; N]) -> Self {
        const { assert!(N >= 2 && N <= 4, "vectors have 2, 3 or 4 components") };
        Self { c }
    }

    /// Creates a vector with every component set to `e`.
    #[must_use]
    #[inline]
    pub fn splat(e: T) -> Self {
        Self::from_array([e; N])
    }

    /// Creates a vector from the first `N` values of `v`.
    #[must_use]
    #[inline]
    pub fn from_slice(v: &[T]) -> Self {
        debug_assert!(v.len() >= N, "{} values for a {N}-component vector", v.len());
        Self::from_array(array::from_fn(|i| v[i]))
    }

    /// Creates a vector whose contents must be written before they are read.
    ///
    /// Filled with [`Scalar::POISON`] when [`POISON_UNINIT`] is set, zeroes
    /// otherwise.
    #[must_use]
    #[inline]
    pub fn uninit() -> Self {
        Self::splat(if POISON_UNINIT { T::POISON } else { T::zero() })
    }

    #[must_use]
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    #[must_use]
    #[inline]
    pub fn one() -> Self {
        Self::splat(T::one())
    }

    /// Converts every component with `as` semantics (floats truncate toward
    /// zero and saturate when narrowed to integers).
    #[must_use]
    #[inline]
    pub fn cast<U: Scalar>(self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
    {
        self.map(|e| e.as_())
    }

    /// Applies `f` to every component.
    #[must_use]
    #[inline]
    pub fn map<U: Scalar>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector::from_array(self.c.map(f))
    }

    /// Combines two vectors component by component.
    #[must_use]
    #[inline]
    pub fn zip_map(self, o: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self::from_array(array::from_fn(|i| f(self.c[i], o.c[i])))
    }

    #[must_use]
    #[inline]
    pub fn x(&self) -> T {
        self.c[0]
    }

    #[must_use]
    #[inline]
    pub fn y(&self) -> T {
        self.c[1]
    }

    #[must_use]
    #[inline]
    pub fn z(&self) -> T {
        debug_assert!(N > 2, "z() on a {N}-component vector");
        self.c[2]
    }

    #[must_use]
    #[inline]
    pub fn w(&self) -> T {
        debug_assert!(N > 3, "w() on a {N}-component vector");
        self.c[3]
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.c[0]
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.c[1]
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut T {
        debug_assert!(N > 2, "z_mut() on a {N}-component vector");
        &mut self.c[2]
    }

    #[inline]
    pub fn w_mut(&mut self) -> &mut T {
        debug_assert!(N > 3, "w_mut() on a {N}-component vector");
        &mut self.c[3]
    }

    /// Overwrites component `i`.
    #[inline]
    pub fn set(&mut self, i: usize, a: T) {
        self.c[i] = a;
    }

    /// Adds `a` to component `i`, returning `self` for chaining.
    #[inline]
    pub fn add_at(&mut self, i: usize, a: T) -> &mut Self {
        self.c[i] += a;
        self
    }

    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.c
    }

    #[must_use]
    #[inline]
    pub fn to_array(self) -> [T; N] {
        self.c
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.c.iter()
    }

    #[must_use]
    #[inline]
    pub fn dot(self, o: Self) -> T {
        self.c
            .iter()
            .zip(&o.c)
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    #[must_use]
    #[inline]
    pub fn squared_length(self) -> T {
        self.dot(self)
    }

    #[must_use]
    #[inline]
    pub fn min(self, o: Self) -> Self {
        self.zip_map(o, |a, b| if b < a { b } else { a })
    }

    #[must_use]
    #[inline]
    pub fn max(self, o: Self) -> Self {
        self.zip_map(o, |a, b| if a < b { b } else { a })
    }

    /// Per component, picks `a[i]` where `self[i] < threshold`, else `b[i]`.
    #[must_use]
    #[inline]
    pub fn iflt(self, threshold: T, a: Self, b: Self) -> Self {
        Self::from_array(array::from_fn(|i| {
            if self.c[i] < threshold {
                a.c[i]
            } else {
                b.c[i]
            }
        }))
    }

    /// `true` if every component is `<=` the matching component of `o`.
    #[must_use]
    pub fn all_le(&self, o: &Self) -> bool {
        self.c.iter().zip(&o.c).all(|(a, b)| a <= b)
    }

    #[must_use]
    pub fn all_lt(&self, o: &Self) -> bool {
        self.c.iter().zip(&o.c).all(|(a, b)| a < b)
    }

    #[must_use]
    pub fn all_ge(&self, o: &Self) -> bool {
        self.c.iter().zip(&o.c).all(|(a, b)| a >= b)
    }

    #[must_use]
    pub fn all_gt(&self, o: &Self) -> bool {
        self.c.iter().zip(&o.c).all(|(a, b)| a > b)
    }

    #[must_use]
    pub fn all_le_scalar(&self, e: T) -> bool {
        self.c.iter().all(|&a| a <= e)
    }

    #[must_use]
    pub fn all_lt_scalar(&self, e: T) -> bool {
        self.c.iter().all(|&a| a < e)
    }

    #[must_use]
    pub fn all_ge_scalar(&self, e: T) -> bool {
        self.c.iter().all(|&a| a >= e)
    }

    #[must_use]
    pub fn all_gt_scalar(&self, e: T) -> bool {
        self.c.iter().all(|&a| a > e)
    }

    #[must_use]
    pub fn all_eq_scalar(&self, e: T) -> bool {
        self.c.iter().all(|&a| a == e)
    }

    #[must_use]
    pub fn any_ne_scalar(&self, e: T) -> bool {
        self.c.iter().any(|&a| a != e)
    }
}

impl<T: Scalar + Signed, const N: usize> Vector<T, N> {
    #[must_use]
    #[inline]
    pub fn abs(self) -> Self {
        self.map(|e| e.abs())
    }

    /// `+1` for components `>= 0`, `-1` otherwise.
    #[must_use]
    #[inline]
    pub fn sign(self) -> Self {
        self.map(|e| if e >= T::zero() { T::one() } else { -T::one() })
    }
}

impl<T: Real, const N: usize> Vector<T, N> {
    #[must_use]
    #[inline]
    pub fn length(self) -> T {
        self.squared_length().sqrt()
    }

    /// Divides by the length. A zero vector yields NaN components.
    #[must_use]
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    #[must_use]
    #[inline]
    pub fn pow(self, e: Self) -> Self {
        self.zip_map(e, |a, b| a.powf(b))
    }

    #[must_use]
    #[inline]
    pub fn rpow(self, e: Self) -> Self {
        self.zip_map(e, super::scalar::rpow)
    }

    #[must_use]
    #[inline]
    pub fn ceil(self) -> Self {
        self.map(|e| e.ceil())
    }

    #[must_use]
    #[inline]
    pub fn floor(self) -> Self {
        self.map(|e| e.floor())
    }

    /// Linear interpolation `a * (1 - f) + b * f`.
    #[must_use]
    #[inline]
    pub fn mix(a: Self, b: Self, f: T) -> Self {
        a * (T::one() - f) + b * f
    }
}

impl<T: Scalar> Vector<T, 2> {
    #[must_use]
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }
}

impl<T: Scalar> Vector<T, 3> {
    #[must_use]
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    /// Extends a 2-vector with a third component.
    #[must_use]
    #[inline]
    pub fn from_xy(v: Vector<T, 2>, z: T) -> Self {
        Self::new(v.x(), v.y(), z)
    }

    /// Drops the third component.
    #[must_use]
    #[inline]
    pub fn xy(&self) -> Vector<T, 2> {
        Vector::<T, 2>::new(self.c[0], self.c[1])
    }

    #[must_use]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    #[must_use]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    #[must_use]
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    #[must_use]
    #[inline]
    pub fn cross(self, b: Self) -> Self {
        let a = self;
        Self::new(
            a.y() * b.z() - a.z() * b.y(),
            a.z() * b.x() - a.x() * b.z(),
            a.x() * b.y() - a.y() * b.x(),
        )
    }
}

impl<T: Real> Vector<T, 3> {
    /// Rotates about the X axis by the angle whose `(cos, sin)` is `cs`.
    #[must_use]
    pub fn rotate_x_cs(self, cs: Vector<T, 2>) -> Self {
        let (c, s) = (cs.x(), cs.y());
        Self::new(self.x(), self.y() * c - self.z() * s, self.y() * s + self.z() * c)
    }

    #[must_use]
    pub fn rotate_y_cs(self, cs: Vector<T, 2>) -> Self {
        let (c, s) = (cs.x(), cs.y());
        Self::new(self.x() * c + self.z() * s, self.y(), self.z() * c - self.x() * s)
    }

    #[must_use]
    pub fn rotate_z_cs(self, cs: Vector<T, 2>) -> Self {
        let (c, s) = (cs.x(), cs.y());
        Self::new(self.x() * c - self.y() * s, self.x() * s + self.y() * c, self.z())
    }

    /// Rotates about the X axis by `angle` radians.
    #[must_use]
    pub fn rotate_x(self, angle: T) -> Self {
        self.rotate_x_cs(Vector::<T, 2>::new(angle.cos(), angle.sin()))
    }

    #[must_use]
    pub fn rotate_y(self, angle: T) -> Self {
        self.rotate_y_cs(Vector::<T, 2>::new(angle.cos(), angle.sin()))
    }

    #[must_use]
    pub fn rotate_z(self, angle: T) -> Self {
        self.rotate_z_cs(Vector::<T, 2>::new(angle.cos(), angle.sin()))
    }
}

impl<T: Scalar> Vector<T, 4> {
    #[must_use]
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_array([x, y, z, w])
    }

    /// Extends a 3-vector with a fourth component.
    #[must_use]
    #[inline]
    pub fn from_xyz(v: Vector<T, 3>, w: T) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
    }

    /// Drops the fourth component.
    #[must_use]
    #[inline]
    pub fn xyz(&self) -> Vector<T, 3> {
        Vector::<T, 3>::new(self.c[0], self.c[1], self.c[2])
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.c[i]
    }
}

impl<'a, T: Scalar, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.c.iter()
    }
}

impl<T: Scalar, const N: usize> Display for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, e) in self.c.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: Scalar + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.c
            .iter()
            .zip(&other.c)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: Scalar + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.c
            .iter()
            .zip(&other.c)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: Scalar + UlpsEq<Epsilon = T>,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.c
            .iter()
            .zip(&other.c)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
