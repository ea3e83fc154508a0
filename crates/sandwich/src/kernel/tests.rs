use super::*;
use nalgebra::vector;

fn unit_square() -> Vec<Point> {
    vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ]
}

#[test]
fn orientation_signs_and_collinear_band() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 0.0];
    assert_eq!(orientation(a, b, vector![0.5, 1.0]), Orientation::CounterClockwise);
    assert_eq!(orientation(a, b, vector![0.5, -1.0]), Orientation::Clockwise);
    assert_eq!(orientation(a, b, vector![3.0, 0.0]), Orientation::Collinear);
    // cross = 1e-4, inside the collinear band
    assert_eq!(orientation(a, b, vector![0.5, 1e-4]), Orientation::Collinear);
    assert!(!is_counter_clockwise(a, b, vector![0.5, 1e-4]));
}

#[test]
fn tolerance_helpers() {
    assert!(approx_eq(1.0, 1.0005));
    assert!(!approx_eq(1.0, 1.01));
    // relative: 1000 vs 1000.5 is within 1e-3 of the larger value
    assert!(approx_eq_rel(1000.0, 1000.5));
    assert!(!approx_eq_rel(1.0, 1.01));
    assert!(approx_eq_rel(0.0, 0.0));
    assert_eq!(approx_cmp(2.0, 2.0004), std::cmp::Ordering::Equal);
    assert_eq!(approx_cmp(2.0, 3.0), std::cmp::Ordering::Less);
}

#[test]
fn segment_intersection_inside_and_outside() {
    let line = Line::Sloped {
        slope: 0.0,
        intercept: 0.5,
    };
    let hit = segment_line_intersect(&line, vector![0.0, 0.0], vector![2.0, 1.0]).unwrap();
    assert!((hit - vector![1.0, 0.5]).norm() < 1e-12);
    // crossing beyond the segment end
    assert!(segment_line_intersect(&line, vector![0.0, 0.0], vector![2.0, 0.25]).is_none());
    // vertical segment
    let hit = segment_line_intersect(&line, vector![3.0, -1.0], vector![3.0, 1.0]).unwrap();
    assert!((hit - vector![3.0, 0.5]).norm() < 1e-12);
}

#[test]
fn segment_intersection_parallel_is_none() {
    let line = Line::Sloped {
        slope: 1.0,
        intercept: 0.0,
    };
    assert!(segment_line_intersect(&line, vector![0.0, 1.0], vector![1.0, 2.0]).is_none());
    // segment lying on the line
    assert!(segment_line_intersect(&line, vector![0.0, 0.0], vector![1.0, 1.0]).is_none());
    let vertical = Line::Vertical { x: 2.0 };
    assert!(segment_line_intersect(&vertical, vector![0.0, 0.0], vector![0.0, 5.0]).is_none());
    let hit = segment_line_intersect(&vertical, vector![0.0, 0.0], vector![4.0, 4.0]).unwrap();
    assert!((hit - vector![2.0, 2.0]).norm() < 1e-12);
}

#[test]
fn centroid_perimeter_area() {
    assert!(centroid(&[]).is_none());
    let sq = unit_square();
    let c = centroid(&sq).unwrap();
    assert!((c - vector![0.5, 0.5]).norm() < 1e-12);
    assert!((polygon_perimeter(&sq) - 4.0).abs() < 1e-12);
    assert!((polygon_area(&sq) - 1.0).abs() < 1e-12);
    assert!((polygon_signed_area(&sq) - 1.0).abs() < 1e-12);
    let cw: Vec<Point> = sq.iter().rev().copied().collect();
    assert!((polygon_signed_area(&cw) + 1.0).abs() < 1e-12);
    assert!((polygon_area(&cw) - 1.0).abs() < 1e-12);
    // degenerate polygons
    assert_eq!(polygon_area(&sq[..2]), 0.0);
    assert!((polygon_perimeter(&sq[..2]) - 2.0).abs() < 1e-12);
    assert_eq!(polygon_perimeter(&[]), 0.0);
}

#[test]
fn line_through_handles_vertical_and_sloped() {
    let l = Line::through(vector![-1.0, 0.0], vector![1.0, 0.0]).unwrap();
    assert_eq!(
        l,
        Line::Sloped {
            slope: 0.0,
            intercept: 0.0
        }
    );
    let v = Line::through(vector![2.0, -1.0], vector![2.0, 5.0]).unwrap();
    assert_eq!(v, Line::Vertical { x: 2.0 });
    // duplicate points collapse to the vertical case instead of NaN
    let d = Line::through(vector![1.0, 1.0], vector![1.0, 1.0]).unwrap();
    assert_eq!(d, Line::Vertical { x: 1.0 });
    assert!(Line::through(vector![f64::NAN, 0.0], vector![1.0, 0.0]).is_none());
}

#[test]
fn line_sides_and_distance() {
    let l = Line::Sloped {
        slope: 1.0,
        intercept: 0.0,
    };
    assert_eq!(l.side(vector![0.0, 1.0]), Side::Above);
    assert_eq!(l.side(vector![1.0, 0.0]), Side::Below);
    assert_eq!(l.side(vector![2.0, 2.0005]), Side::On);
    let d = l.signed_distance(vector![0.0, 1.0]);
    assert!((d - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    let v = Line::Vertical { x: 1.0 };
    assert_eq!(v.side(vector![3.0, 0.0]), Side::Above);
    assert_eq!(v.side(vector![-3.0, 0.0]), Side::Below);
}

#[test]
fn direction_offsets_and_gap() {
    let d = Direction::from_angle(std::f64::consts::FRAC_PI_4);
    match d {
        Direction::Slope(m) => assert!((m - 1.0).abs() < 1e-12),
        Direction::Vertical => panic!("expected sloped"),
    }
    assert!((d.offset_of(vector![1.0, 3.0]) - 2.0).abs() < 1e-12);
    // lines y = x and y = x + 2 are sqrt(2) apart
    assert!((d.gap(0.0, 2.0) - std::f64::consts::SQRT_2).abs() < 1e-12);
    assert_eq!(Direction::from_angle(std::f64::consts::FRAC_PI_2), Direction::Vertical);
    assert_eq!(Direction::Vertical.gap(1.0, -2.0), 3.0);
    assert_eq!(Direction::Vertical.line_at(4.0), Line::Vertical { x: 4.0 });
    let l = d.line_at(2.0);
    assert_eq!(l.direction(), d);
    assert_eq!(l.offset(), 2.0);
}

#[test]
fn endpoints_span_draw_extent() {
    let (a, b) = Line::Sloped {
        slope: 2.0,
        intercept: 1.0,
    }
    .endpoints(DRAW_EXTENT);
    assert_eq!(a, vector![-500.0, -999.0]);
    assert_eq!(b, vector![500.0, 1001.0]);
    let (a, b) = Line::Vertical { x: 3.0 }.endpoints(10.0);
    assert_eq!(a, vector![3.0, -10.0]);
    assert_eq!(b, vector![3.0, 10.0]);
}

#[test]
fn collinear_band_scales_with_area() {
    let o = vector![0.0, 0.0];
    // cross = 4e-4: a small proper triangle still reads as collinear
    assert_eq!(
        orientation(o, vector![0.02, 0.0], vector![0.0, 0.02]),
        Orientation::Collinear
    );
    assert_eq!(
        orientation(o, vector![0.1, 0.0], vector![0.0, 0.1]),
        Orientation::CounterClockwise
    );
}
