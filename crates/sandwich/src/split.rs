//! Split a convex hull into two sub-polygons along a line.
//!
//! The walk visits hull edges in order. A vertex goes to the polygon of its
//! side; a vertex on the line (within `EPS`) and the crossing point of an edge
//! whose endpoints lie strictly on opposite sides go to both polygons. Each
//! of those shared points is one crossing. Both outputs keep the hull's
//! counter-clockwise order.
//!
//! Ordering rule: let `p` be the crossing with the smaller x and `q` the other
//! one (for vertical lines, walk downward). The part whose vertices lie
//! counter-clockwise of `p → q` is reported first as `upper`; this is the
//! "above" side of `Line::side`.

use crate::kernel::{segment_line_intersect, Line, Point, Side};

/// Two sub-polygons produced by a line crossing a hull.
#[derive(Clone, Debug, PartialEq)]
pub struct Split {
    pub upper: Vec<Point>,
    pub lower: Vec<Point>,
}

/// Split `hull` (counter-clockwise) by `line`.
///
/// Returns `None` when the line does not cross the hull at two points, e.g.
/// it misses the hull, touches a single vertex, or runs along an edge. This
/// is "no valid split at this offset", not an error.
pub fn split_hull(hull: &[Point], line: &Line) -> Option<Split> {
    if hull.len() < 3 {
        return None;
    }
    let n = hull.len();
    let mut upper = Vec::with_capacity(n + 2);
    let mut lower = Vec::with_capacity(n + 2);
    let mut crossings = 0usize;
    let (mut any_above, mut any_below) = (false, false);

    for i in 0..n {
        let a = hull[i];
        let b = hull[(i + 1) % n];
        let side_a = line.side(a);
        match side_a {
            Side::Above => {
                any_above = true;
                upper.push(a);
            }
            Side::Below => {
                any_below = true;
                lower.push(a);
            }
            Side::On => {
                crossings += 1;
                upper.push(a);
                lower.push(a);
            }
        }
        let strict_crossing = matches!(
            (side_a, line.side(b)),
            (Side::Above, Side::Below) | (Side::Below, Side::Above)
        );
        if strict_crossing {
            if let Some(x) = segment_line_intersect(line, a, b) {
                crossings += 1;
                upper.push(x);
                lower.push(x);
            }
        }
    }

    if crossings < 2 || !any_above || !any_below || upper.len() < 3 || lower.len() < 3 {
        return None;
    }
    Some(Split { upper, lower })
}
