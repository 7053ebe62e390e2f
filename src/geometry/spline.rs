use crate::error::{GeometryError, Result};
use crate::math::{Real, Vector};

use super::{Curve, CurveDomain};

/// Tension giving a Catmull-Rom spline.
pub const DEFAULT_TENSION: f64 = 0.5;

/// Cardinal spline through `a` (at `s = 0`) and `b` (at `s = 1`).
///
/// `z` and `c` are the control points before `a` and after `b`; they shape the
/// end tangents `tension * (b - z)` and `tension * (c - a)`.
#[must_use]
pub fn cardinal_spline<T: Real, const N: usize>(
    z: Vector<T, N>,
    a: Vector<T, N>,
    b: Vector<T, N>,
    c: Vector<T, N>,
    s: T,
    tension: T,
) -> Vector<T, N> {
    let (two, three) = (T::lit(2.0), T::lit(3.0));
    let s2 = s * s;
    let s3 = s * s2;
    a * (two * s3 - three * s2 + T::one())
        + b * (three * s2 - two * s3)
        + (b - z) * (tension * (s3 - two * s2 + s))
        + (c - a) * (tension * (s3 - s2))
}

/// Derivative of [`cardinal_spline`] with respect to `s`.
fn cardinal_spline_derivative<T: Real, const N: usize>(
    z: Vector<T, N>,
    a: Vector<T, N>,
    b: Vector<T, N>,
    c: Vector<T, N>,
    s: T,
    tension: T,
) -> Vector<T, N> {
    let (two, three, four, six) = (T::lit(2.0), T::lit(3.0), T::lit(4.0), T::lit(6.0));
    let s2 = s * s;
    (a - b) * (six * s2 - six * s)
        + (b - z) * (tension * (three * s2 - four * s + T::one()))
        + (c - a) * (tension * (three * s2 - two * s))
}

/// Piecewise cardinal spline through a sequence of control points.
///
/// Span `i` runs from `points[i]` to `points[i + 1]` over `t in [i, i + 1]`.
/// An open spline reuses its first and last point as the missing outer
/// neighbours; a closed one wraps around and adds a span back to the start.
#[derive(Debug, Clone)]
pub struct CardinalSpline<T> {
    points: Vec<Vector<T, 3>>,
    tension: T,
    closed: bool,
}

impl<T: Real> CardinalSpline<T> {
    /// Creates an open spline with [`DEFAULT_TENSION`].
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are given.
    pub fn new(points: Vec<Vector<T, 3>>) -> Result<Self> {
        Self::build(points, false, 2)
    }

    /// Creates a closed spline with [`DEFAULT_TENSION`].
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three points are given.
    pub fn closed(points: Vec<Vector<T, 3>>) -> Result<Self> {
        Self::build(points, true, 3)
    }

    fn build(points: Vec<Vector<T, 3>>, closed: bool, required: usize) -> Result<Self> {
        if points.len() < required {
            return Err(GeometryError::TooFewControlPoints {
                required,
                actual: points.len(),
            }
            .into());
        }
        Ok(Self {
            points,
            tension: T::lit(DEFAULT_TENSION),
            closed,
        })
    }

    /// Replaces the tension.
    #[must_use]
    pub fn with_tension(mut self, tension: T) -> Self {
        self.tension = tension;
        self
    }

    #[must_use]
    pub fn points(&self) -> &[Vector<T, 3>] {
        &self.points
    }

    #[must_use]
    pub fn tension(&self) -> T {
        self.tension
    }

    /// Number of spans, and therefore the upper end of the domain.
    #[must_use]
    pub fn span_count(&self) -> usize {
        if self.closed {
            self.points.len()
        } else {
            self.points.len() - 1
        }
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn control(&self, i: isize) -> Vector<T, 3> {
        let n = self.points.len() as isize;
        let i = if self.closed {
            i.rem_euclid(n)
        } else {
            i.clamp(0, n - 1)
        };
        self.points[i as usize]
    }

    /// Neighbourhood `(z, a, b, c)` and local parameter of `t`.
    #[allow(clippy::cast_possible_wrap)]
    fn locate(&self, t: T) -> Result<([Vector<T, 3>; 4], T)> {
        let domain = self.domain();
        if !domain.contains(t) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t.to_f64().unwrap_or(f64::NAN),
                min: domain.t_min.to_f64().unwrap_or(f64::NAN),
                max: domain.t_max.to_f64().unwrap_or(f64::NAN),
            }
            .into());
        }
        let span = t
            .floor()
            .to_usize()
            .unwrap_or(0)
            .min(self.span_count() - 1);
        let s = t - span_param::<T>(span);
        let i = span as isize;
        Ok((
            [
                self.control(i - 1),
                self.control(i),
                self.control(i + 1),
                self.control(i + 2),
            ],
            s,
        ))
    }

    /// Evaluates `segments_per_span` evenly spaced points per span plus the end
    /// point. A closed spline repeats its first point at the end.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn sample(&self, segments_per_span: usize) -> Vec<Vector<T, 3>> {
        let segments = segments_per_span.max(1);
        let step = T::one() / span_param::<T>(segments);
        let mut out = Vec::with_capacity(self.span_count() * segments + 1);
        for span in 0..self.span_count() {
            let i = span as isize;
            let (z, a, b, c) = (
                self.control(i - 1),
                self.control(i),
                self.control(i + 1),
                self.control(i + 2),
            );
            for k in 0..segments {
                let s = step * span_param::<T>(k);
                out.push(cardinal_spline(z, a, b, c, s, self.tension));
            }
        }
        out.push(self.control(self.span_count() as isize));
        out
    }
}

#[allow(clippy::cast_precision_loss)]
fn span_param<T: Real>(i: usize) -> T {
    T::lit(i as f64)
}

impl<T: Real> Curve<T> for CardinalSpline<T> {
    fn evaluate(&self, t: T) -> Result<Vector<T, 3>> {
        let ([z, a, b, c], s) = self.locate(t)?;
        Ok(cardinal_spline(z, a, b, c, s, self.tension))
    }

    fn tangent(&self, t: T) -> Result<Vector<T, 3>> {
        let ([z, a, b, c], s) = self.locate(t)?;
        Ok(cardinal_spline_derivative(z, a, b, c, s, self.tension))
    }

    fn domain(&self) -> CurveDomain<T> {
        CurveDomain::new(T::zero(), span_param(self.span_count()))
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
