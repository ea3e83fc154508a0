//! Basic planar types: points, lines, directions and the side/orientation enums.
//!
//! - `Line`: sloped `y = m x + b` or vertical `x = x0`.
//! - `Direction`: the direction shared by a family of parallel lines; maps a
//!   point to its offset (intercept, or `x` for vertical lines).
//!
//! Sides
//! - "Above" is the side with the larger offset: `y - m x > b` for sloped
//!   lines, `x > x0` for vertical ones. Walking a line toward increasing x
//!   (downward for vertical lines), "above" is on the left.

use nalgebra::Vector2;

use super::tol::{approx_cmp, approx_eq};
use std::cmp::Ordering;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Half-width of the segment drawn for a line (the collaborator draws finite segments).
pub const DRAW_EXTENT: f64 = 500.0;

/// `|cos(theta)|` below this makes `Direction::from_angle` vertical.
const VERTICAL_COS: f64 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

/// Position of a point relative to a line (on-line within `EPS`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Above,
    On,
    Below,
}

/// Direction of a family of parallel lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Direction {
    Slope(f64),
    Vertical,
}

impl Direction {
    /// Direction of the lines making angle `theta` (radians) with the x-axis.
    pub fn from_angle(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        if c.abs() < VERTICAL_COS {
            Direction::Vertical
        } else {
            Direction::Slope(s / c)
        }
    }

    /// Offset of the member line through `p` (`y - m x`, or `x`).
    #[inline]
    pub fn offset_of(&self, p: Point) -> f64 {
        match *self {
            Direction::Slope(m) => p.y - m * p.x,
            Direction::Vertical => p.x,
        }
    }

    /// Member line with the given offset.
    #[inline]
    pub fn line_at(&self, offset: f64) -> Line {
        match *self {
            Direction::Slope(slope) => Line::Sloped {
                slope,
                intercept: offset,
            },
            Direction::Vertical => Line::Vertical { x: offset },
        }
    }

    /// Perpendicular distance between the member lines at offsets `a` and `b`.
    #[inline]
    pub fn gap(&self, a: f64, b: f64) -> f64 {
        match *self {
            Direction::Slope(m) => (a - b).abs() / (1.0 + m * m).sqrt(),
            Direction::Vertical => (a - b).abs(),
        }
    }
}

/// A line in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Line {
    Sloped { slope: f64, intercept: f64 },
    Vertical { x: f64 },
}

impl Line {
    /// Line through `p` and `q`; vertical when their x-coordinates agree within `EPS`.
    ///
    /// Returns `None` when the parameters are not finite.
    pub fn through(p: Point, q: Point) -> Option<Line> {
        let line = if approx_eq(p.x, q.x) {
            Line::Vertical { x: p.x }
        } else {
            let slope = (q.y - p.y) / (q.x - p.x);
            Line::Sloped {
                slope,
                intercept: p.y - slope * p.x,
            }
        };
        line.is_finite().then_some(line)
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        match *self {
            Line::Sloped { slope, .. } => Direction::Slope(slope),
            Line::Vertical { .. } => Direction::Vertical,
        }
    }

    /// Intercept for sloped lines, `x` for vertical lines.
    #[inline]
    pub fn offset(&self) -> f64 {
        match *self {
            Line::Sloped { intercept, .. } => intercept,
            Line::Vertical { x } => x,
        }
    }

    pub fn is_finite(&self) -> bool {
        match *self {
            Line::Sloped { slope, intercept } => slope.is_finite() && intercept.is_finite(),
            Line::Vertical { x } => x.is_finite(),
        }
    }

    /// Signed perpendicular distance, positive on the "above" side.
    #[inline]
    pub fn signed_distance(&self, p: Point) -> f64 {
        match *self {
            Line::Sloped { slope, intercept } => {
                (p.y - slope * p.x - intercept) / (1.0 + slope * slope).sqrt()
            }
            Line::Vertical { x } => p.x - x,
        }
    }

    pub fn side(&self, p: Point) -> Side {
        match approx_cmp(self.signed_distance(p), 0.0) {
            Ordering::Greater => Side::Above,
            Ordering::Less => Side::Below,
            Ordering::Equal => Side::On,
        }
    }

    /// Endpoints of the drawable segment: `x ∈ [-extent, extent]`, or
    /// `y ∈ [-extent, extent]` for vertical lines.
    pub fn endpoints(&self, extent: f64) -> (Point, Point) {
        match *self {
            Line::Sloped { slope, intercept } => (
                Point::new(-extent, intercept - slope * extent),
                Point::new(extent, intercept + slope * extent),
            ),
            Line::Vertical { x } => (Point::new(x, -extent), Point::new(x, extent)),
        }
    }
}
