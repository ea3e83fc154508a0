//! Graham-scan convex hull.
//!
//! Pivot is the lowest point (ties: leftmost); the remaining points are
//! sorted by polar angle around it with a stable sort and swept with a stack
//! that pops while the top two and the candidate are not counter-clockwise.
//! Points sharing a polar angle keep their input order (no farthest-point
//! tie-break); a candidate collinear with the top two and lying between them
//! is skipped, so a nearer point never displaces a farther one.

use crate::kernel::{orientation, Orientation, Point};

/// Convex hull of `points` in counter-clockwise order, starting at the pivot.
///
/// Returns the input unchanged for 0 or 1 point. Copies of the pivot are
/// dropped, so all-duplicate input collapses to a single vertex. Collinear
/// input yields a two-vertex (segment) hull.
pub fn build_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let Some(pivot) = points.iter().copied().reduce(|best, p| {
        if p.y < best.y || (p.y == best.y && p.x < best.x) {
            p
        } else {
            best
        }
    }) else {
        return points.to_vec();
    };

    let mut rest: Vec<Point> = points.iter().copied().filter(|p| *p != pivot).collect();
    rest.sort_by(|a, b| polar_angle(pivot, *a).total_cmp(&polar_angle(pivot, *b)));

    let mut stack: Vec<Point> = Vec::with_capacity(points.len());
    stack.push(pivot);
    'candidates: for p in rest {
        while stack.len() >= 2 {
            let (a, top) = (stack[stack.len() - 2], stack[stack.len() - 1]);
            match orientation(a, top, p) {
                Orientation::CounterClockwise => break,
                // p lies between a and top: already covered
                Orientation::Collinear if (p - top).dot(&(top - a)) < 0.0 => continue 'candidates,
                _ => {
                    stack.pop();
                }
            }
        }
        stack.push(p);
    }
    stack
}

#[inline]
fn polar_angle(pivot: Point, p: Point) -> f64 {
    (p.y - pivot.y).atan2(p.x - pivot.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{is_counter_clockwise, polygon_area};
    use nalgebra::vector;
    use proptest::prelude::*;

    fn contains(hull: &[Point], p: Point) -> bool {
        let n = hull.len();
        (0..n).all(|i| orientation(hull[i], hull[(i + 1) % n], p) != Orientation::Clockwise)
    }

    #[test]
    fn degenerate_inputs_pass_through() {
        assert!(build_hull(&[]).is_empty());
        let one = vec![vector![3.0, 4.0]];
        assert_eq!(build_hull(&one), one);
        let dup = vec![vector![1.0, 1.0], vector![1.0, 1.0], vector![1.0, 1.0]];
        assert_eq!(build_hull(&dup), vec![vector![1.0, 1.0]]);
    }

    #[test]
    fn collinear_input_is_a_segment() {
        let pts = vec![vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
        let hull = build_hull(&pts);
        assert_eq!(hull, vec![vector![0.0, 0.0], vector![2.0, 2.0]]);
    }

    #[test]
    fn square_with_interior_points() {
        let pts = vec![
            vector![0.5, 0.5],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
            vector![0.2, 0.7],
            vector![1.0, 0.0],
            vector![0.0, 0.0],
        ];
        let hull = build_hull(&pts);
        assert_eq!(
            hull,
            vec![
                vector![0.0, 0.0],
                vector![1.0, 0.0],
                vector![1.0, 1.0],
                vector![0.0, 1.0]
            ]
        );
    }

    #[test]
    fn pivot_kept_when_it_shares_angle_zero() {
        // (1,0) precedes the pivot in the input and lies at angle 0 from it.
        let pts = vec![vector![1.0, 0.0], vector![0.0, 0.0], vector![0.0, 1.0]];
        let hull = build_hull(&pts);
        assert_eq!(hull[0], vector![0.0, 0.0]);
        assert_eq!(hull.len(), 3);
    }

    #[test]
    fn farther_collinear_point_survives_nearer_tie() {
        let pts = vec![vector![0.0, 0.0], vector![4.0, 0.0], vector![2.0, 0.0], vector![0.0, 4.0]];
        let hull = build_hull(&pts);
        assert_eq!(hull, vec![vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 4.0]]);
        assert!((polygon_area(&hull) - 8.0).abs() < 1e-12);
        for p in &pts {
            assert!(contains(&hull, *p));
        }
    }

    #[test]
    fn ties_on_the_closing_ray_keep_the_far_point() {
        let pts = vec![vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 4.0], vector![0.0, 2.0]];
        let hull = build_hull(&pts);
        assert!(hull.contains(&vector![0.0, 4.0]));
        assert!((polygon_area(&hull) - 8.0).abs() < 1e-12);
    }

    fn grid() -> impl Strategy<Value = Vec<Point>> {
        prop::collection::vec((-6i32..6, -6i32..6), 3..30)
            .prop_map(|v| v.into_iter().map(|(x, y)| vector![x as f64, y as f64]).collect())
    }

    fn cloud() -> impl Strategy<Value = Vec<Point>> {
        prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 3..40)
            .prop_map(|v| v.into_iter().map(|(x, y)| vector![x, y]).collect())
    }

    proptest! {
        #[test]
        fn hull_contains_inputs_and_is_convex(pts in cloud()) {
            let hull = build_hull(&pts);
            for p in &pts {
                prop_assert!(contains(&hull, *p));
            }
            for v in &hull {
                prop_assert!(pts.contains(v));
            }
            let n = hull.len();
            if n >= 3 {
                for i in 0..n {
                    prop_assert!(is_counter_clockwise(hull[i], hull[(i + 1) % n], hull[(i + 2) % n]));
                }
            }
        }

        #[test]
        fn grid_hull_contains_inputs(pts in grid()) {
            let hull = build_hull(&pts);
            for p in &pts {
                prop_assert!(contains(&hull, *p));
            }
        }

        #[test]
        fn hull_is_idempotent(pts in cloud()) {
            let hull = build_hull(&pts);
            prop_assert_eq!(build_hull(&hull), hull);
        }
    }
}
