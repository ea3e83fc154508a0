//! Planar geometry kernel.
//!
//! Purpose
//! - Provide the primitive predicates every other component builds on:
//!   orientation, line/segment intersection, centroid, perimeter and area.
//! - Keep one tolerance policy (`tol`) so coordinate and metric comparisons
//!   agree across the hull builder, splitter, balance search and strategies.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>` (alias `Point`), never mutated.
//! - Polygons are `&[Point]` slices, implicitly closed (last → first).
//! - Lines are `Line::Sloped` or `Line::Vertical`; vertical lines are a
//!   first-class variant, not an error path.
//!
//! References
//! - Code cross-refs: `hull::build_hull`, `split::split_hull`, `balance::balance_offset`

mod polygon;
mod predicates;
pub mod tol;
mod types;

pub use polygon::{centroid, polygon_area, polygon_perimeter, polygon_signed_area};
pub use predicates::{cross, is_counter_clockwise, orientation, segment_line_intersect};
pub use tol::{approx_cmp, approx_eq, approx_eq_rel, EPS};
pub use types::{Direction, Line, Orientation, Point, Side, DRAW_EXTENT};

#[cfg(test)]
mod tests;
