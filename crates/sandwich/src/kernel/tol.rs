//! Tolerance policy shared by every component.
//!
//! - Coordinates and signed distances: absolute tolerance `EPS`.
//! - Metric values (perimeter, area): relative tolerance `EPS`, so that the
//!   balance criterion does not depend on the scale of the input.

use std::cmp::Ordering;

/// Engine-wide tolerance. Fixed, not user-configurable.
pub const EPS: f64 = 1e-3;

/// Absolute comparison for coordinates, offsets and distances.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS
}

/// Relative comparison for metric values: `|a - b| <= EPS * max(|a|, |b|)`.
#[inline]
pub fn approx_eq_rel(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS * a.abs().max(b.abs())
}

/// Total order that treats `approx_eq` values as equal.
///
/// NaN sorts as the largest value (IEEE total order), so callers that
/// filter non-finite values first never observe it.
#[inline]
pub fn approx_cmp(a: f64, b: f64) -> Ordering {
    if approx_eq(a, b) {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}
