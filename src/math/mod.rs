pub mod color;
pub mod interop;
pub mod intersect_2d;
pub mod invert;
pub mod matrix;
pub mod quaternion;
pub mod scalar;
pub mod vector;
pub mod vector_ops;

pub use matrix::Matrix;
pub use quaternion::{quat_from_two_vectors, rotation, Quat, Quaternion};
pub use scalar::{mix, rpow, Real, Scalar};
pub use vector::Vector;

/// 2D `f32` vector.
pub type Float2 = Vector<f32, 2>;

/// 3D `f32` vector.
pub type Float3 = Vector<f32, 3>;

/// Homogeneous or RGBA `f32` vector.
pub type Float4 = Vector<f32, 4>;

pub type Double2 = Vector<f64, 2>;
pub type Double3 = Vector<f64, 3>;
pub type Double4 = Vector<f64, 4>;

pub type Int2 = Vector<i32, 2>;
pub type Int3 = Vector<i32, 3>;
pub type Int4 = Vector<i32, 4>;

/// Packed 8-bit RGBA color.
pub type Byte4 = Vector<u8, 4>;

pub type Float2x2 = Matrix<f32, 2, 2>;
pub type Float3x3 = Matrix<f32, 3, 3>;
pub type Float4x4 = Matrix<f32, 4, 4>;

/// Compact affine transform: three rows `[r0 r1 r2 | t]`, see
/// [`crate::transform::affine`].
pub type Float3x4 = Matrix<f32, 3, 4>;

/// Transpose of [`Float3x4`], used while inverting an affine transform.
pub type Float4x3 = Matrix<f32, 4, 3>;

pub type Double4x4 = Matrix<f64, 4, 4>;

pub const PI: f32 = std::f32::consts::PI;

/// Degrees to radians factor.
pub const RAD: f32 = PI / 180.0;

pub const FLOAT3_ZERO: Float3 = Vector::from_array([0.0, 0.0, 0.0]);
pub const FLOAT3_X: Float3 = Vector::from_array([1.0, 0.0, 0.0]);
pub const FLOAT3_Y: Float3 = Vector::from_array([0.0, 1.0, 0.0]);
pub const FLOAT3_Z: Float3 = Vector::from_array([0.0, 0.0, 1.0]);

/// Tolerance for floating-point comparisons in the geometric routines.
pub const TOLERANCE: f32 = 1e-5;
