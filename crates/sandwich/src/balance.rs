//! Bisection over parallel line offsets that equalizes a hull metric.
//!
//! For a fixed direction the search interval is the range of per-point
//! offsets. Each step splits the hull of the whole point set at the midpoint
//! and moves toward the part with the larger metric. All state is local to
//! the call.

use crate::hull::build_hull;
use crate::kernel::{approx_eq_rel, Direction, Point};
use crate::split::split_hull;

/// Upper bound on bisection steps; a stalled interval stops earlier.
pub const MAX_BISECTION_STEPS: usize = 128;

/// Offset range `[min, max]` of the member lines of `dir` through `points`.
///
/// `None` for empty input or non-finite offsets.
pub fn offset_range(points: &[Point], dir: Direction) -> Option<(f64, f64)> {
    let mut offsets = points.iter().map(|p| dir.offset_of(*p));
    let first = offsets.next()?;
    let (lo, hi) = offsets.fold((first, first), |(lo, hi), o| (lo.min(o), hi.max(o)));
    (lo.is_finite() && hi.is_finite()).then_some((lo, hi))
}

/// Offset of the line with direction `dir` that balances `metric` between
/// the two parts of the hull of `points`.
///
/// - A failed split (line does not cross the hull at two points) accepts the
///   current midpoint.
/// - Metrics equal within relative `EPS` accept the midpoint.
/// - Otherwise the interval shrinks toward the part with the larger metric.
///
/// Returns `None` for empty input or when a non-finite value shows up.
pub fn balance_offset<F>(points: &[Point], dir: Direction, metric: F) -> Option<f64>
where
    F: Fn(&[Point]) -> f64,
{
    let (mut lo, mut hi) = offset_range(points, dir)?;
    let hull = build_hull(points);
    for _ in 0..MAX_BISECTION_STEPS {
        if lo >= hi {
            break;
        }
        let mid = lo + (hi - lo) / 2.0;
        let Some(split) = split_hull(&hull, &dir.line_at(mid)) else {
            return Some(mid);
        };
        let upper = metric(&split.upper);
        let lower = metric(&split.lower);
        if !upper.is_finite() || !lower.is_finite() {
            return None;
        }
        if approx_eq_rel(upper, lower) {
            return Some(mid);
        }
        let before = (lo, hi);
        if upper > lower {
            lo = mid;
        } else {
            hi = mid;
        }
        if before == (lo, hi) {
            break;
        }
    }
    Some(lo)
}

/// `balance_offset` for the sloped family `y = slope * x + b`; returns `b`.
pub fn balance_intercept<F>(points: &[Point], slope: f64, metric: F) -> Option<f64>
where
    F: Fn(&[Point]) -> f64,
{
    if !slope.is_finite() {
        return None;
    }
    balance_offset(points, Direction::Slope(slope), metric)
}
