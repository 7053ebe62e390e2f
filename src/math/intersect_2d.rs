use super::scalar::Real;
use super::vector::Vector;

/// `v` rotated a quarter turn counter-clockwise.
#[inline]
fn perp<T: Real>(v: Vector<T, 2>) -> Vector<T, 2> {
    Vector::<T, 2>::new(-v.y(), v.x())
}

/// Bounded segment-segment intersection in 2D.
///
/// Returns the crossing point of segments `l1a..l1b` and `l2a..l2b`, or `None`
/// if they are parallel (including collinear) or their supporting lines cross
/// outside either segment. Endpoints count as part of the segment.
#[must_use]
pub fn segment_intersection<T: Real>(
    l1a: Vector<T, 2>,
    l1b: Vector<T, 2>,
    l2a: Vector<T, 2>,
    l2b: Vector<T, 2>,
) -> Option<Vector<T, 2>> {
    let a = l1b - l1a;
    let b = l2b - l2a;
    let a_perp = perp(a);
    let f = a_perp.dot(b);
    if f == T::zero() {
        return None;
    }

    let c = l2b - l1b;
    let aa = a_perp.dot(c);
    let bb = perp(b).dot(c);

    let zero = T::zero();
    let outside = if f < zero {
        aa > zero || bb > zero || aa < f || bb < f
    } else {
        aa < zero || bb < zero || aa > f || bb > f
    };
    if outside {
        return None;
    }

    Some(b * (T::one() - aa / f) + l2a)
}

/// Whether segments `l1a..l1b` and `l2a..l2b` intersect.
///
/// See [`segment_intersection`].
#[must_use]
pub fn segments_intersect<T: Real>(
    l1a: Vector<T, 2>,
    l1b: Vector<T, 2>,
    l2a: Vector<T, 2>,
    l2b: Vector<T, 2>,
) -> bool {
    segment_intersection(l1a, l1b, l2a, l2b).is_some()
}
