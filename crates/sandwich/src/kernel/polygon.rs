use super::types::Point;

/// Arithmetic mean of the points; `None` for an empty slice.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Point::zeros(), |acc, p| acc + p);
    Some(sum / points.len() as f64)
}

/// Length of the closed polyline through `poly`.
pub fn polygon_perimeter(poly: &[Point]) -> f64 {
    closed_edges(poly).map(|(p, q)| (q - p).norm()).sum()
}

/// Shoelace area, positive for counter-clockwise vertex order.
pub fn polygon_signed_area(poly: &[Point]) -> f64 {
    0.5 * closed_edges(poly)
        .map(|(p, q)| p.x * q.y - q.x * p.y)
        .sum::<f64>()
}

/// Unsigned polygon area.
pub fn polygon_area(poly: &[Point]) -> f64 {
    polygon_signed_area(poly).abs()
}

fn closed_edges(poly: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = poly.len();
    (0..n).map(move |i| (poly[i], poly[(i + 1) % n]))
}
