use std::cmp::Ordering;

use super::tol::approx_cmp;
use super::types::{Line, Orientation, Point};

/// `(b - a) × (c - a)`: twice the signed area of triangle `abc`.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Orientation of the triple `(p1, p2, p3)`; `|cross| <= EPS` is collinear.
///
/// The band is on the cross product, an area: it scales with the square of
/// the coordinates, so triangles with sides near `sqrt(EPS)` read as collinear.
pub fn orientation(p1: Point, p2: Point, p3: Point) -> Orientation {
    match approx_cmp(cross(p1, p2, p3), 0.0) {
        Ordering::Greater => Orientation::CounterClockwise,
        Ordering::Less => Orientation::Clockwise,
        Ordering::Equal => Orientation::Collinear,
    }
}

#[inline]
pub fn is_counter_clockwise(p1: Point, p2: Point, p3: Point) -> bool {
    orientation(p1, p2, p3) == Orientation::CounterClockwise
}

/// Intersection of `line` with the closed segment `[a, b]`.
///
/// Returns `None` when the line is parallel to the segment (including a
/// segment lying on the line) or the crossing falls outside the segment.
/// For a non-vertical segment this is the check
/// `x ∈ [min(a.x, b.x), max(a.x, b.x)]`.
pub fn segment_line_intersect(line: &Line, a: Point, b: Point) -> Option<Point> {
    let da = line.signed_distance(a);
    let db = line.signed_distance(b);
    let denom = da - db;
    if denom.abs() <= f64::EPSILON * (b - a).norm().max(1.0) {
        return None;
    }
    let t = da / denom;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }
    let p = a + (b - a) * t;
    (p.x.is_finite() && p.y.is_finite()).then_some(p)
}
