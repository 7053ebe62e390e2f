pub mod spline;

pub use spline::{cardinal_spline, CardinalSpline, DEFAULT_TENSION};

use crate::error::Result;
use crate::math::{Real, Vector};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain<T> {
    /// Start of the parameter range.
    pub t_min: T,
    /// End of the parameter range.
    pub t_max: T,
}

impl<T: Real> CurveDomain<T> {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: T, t_max: T) -> Self {
        Self { t_min, t_max }
    }

    /// Whether `t` lies in `[t_min, t_max]`.
    #[must_use]
    pub fn contains(&self, t: T) -> bool {
        t >= self.t_min && t <= self.t_max
    }
}

/// Trait for parametric curves in 3D space.
pub trait Curve<T: Real> {
    /// Evaluates the curve at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is outside [`Curve::domain`].
    fn evaluate(&self, t: T) -> Result<Vector<T, 3>>;

    /// Derivative of the curve with respect to `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is outside [`Curve::domain`].
    fn tangent(&self, t: T) -> Result<Vector<T, 3>>;

    fn domain(&self) -> CurveDomain<T>;

    fn is_closed(&self) -> bool;
}
