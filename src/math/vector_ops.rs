//! Elementwise arithmetic operators for [`Vector`].

use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign,
};

use super::scalar::Scalar;
use super::vector::Vector;

macro_rules! impl_elementwise_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: Scalar, const N: usize> $Op for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                self.zip_map(rhs, |a, b| $Op::$op(a, b))
            }
        }

        impl<T: Scalar, const N: usize> $Op<T> for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: T) -> Self {
                self.map(|e| $Op::$op(e, rhs))
            }
        }

        impl<T: Scalar, const N: usize> $OpAssign for Vector<T, N> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = $Op::$op(*self, rhs);
            }
        }

        impl<T: Scalar, const N: usize> $OpAssign<T> for Vector<T, N> {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                *self = $Op::$op(*self, rhs);
            }
        }
    };
}

impl_elementwise_op!(Add, add, AddAssign, add_assign);
impl_elementwise_op!(Sub, sub, SubAssign, sub_assign);
impl_elementwise_op!(Mul, mul, MulAssign, mul_assign);
impl_elementwise_op!(Div, div, DivAssign, div_assign);

impl<T: Scalar, const N: usize> Rem<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: T) -> Self {
        self.map(|e| e % rhs)
    }
}

impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|e| -e)
    }
}

// Scalar on the left: `2.0 * v`, `1.0 - v`, ...
macro_rules! impl_scalar_lhs_ops {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Add<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn add(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs.map(|e| self + e)
                }
            }

            impl<const N: usize> Sub<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn sub(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs.map(|e| self - e)
                }
            }

            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs.map(|e| self * e)
                }
            }

            impl<const N: usize> Div<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn div(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs.map(|e| self / e)
                }
            }
        )*
    };
}

impl_scalar_lhs_ops!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);
