//! Drawing collaborator contract.
//!
//! The engine never owns rendering resources: strategies ask a `Canvas` to
//! draw line segments and closed loops, keep the returned handles, and hand
//! them back for removal. `yield_frame` is the only suspension point of a
//! run; its duration is advisory pacing.
//!
//! - `Overlay`: the set of handles one owner (a strategy or a run) has drawn.
//! - `RecordingCanvas`: in-memory canvas used by tests and the CLI.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::kernel::{Line, Point, DRAW_EXTENT};

/// Opaque handle for a drawn primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Handle(pub u64);

/// Colors used by the engine when asking for primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    /// Accepted cut.
    Green,
    /// Candidate under evaluation.
    Black,
}

impl Color {
    /// Display RGB value.
    pub fn rgb(self) -> u32 {
        match self {
            Color::Red => 0xbf212f,
            Color::Blue => 0x264b96,
            Color::Green => 0x27b376,
            Color::Black => 0x000000,
        }
    }
}

/// Rendering collaborator.
pub trait Canvas {
    /// Draw the segment `(x1, y1) – (x2, y2)`.
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color) -> Handle;
    /// Draw the closed polyline through `points`.
    fn draw_perimeter(&mut self, points: &[Point], color: Color) -> Handle;
    /// Remove a primitive; removing an unknown or already removed handle is a no-op.
    fn remove(&mut self, handle: Handle);
    /// Cooperative suspension between candidate evaluations.
    fn yield_frame(&mut self, _hint: Duration) {}
}

/// Handles drawn by one owner, removed together.
#[derive(Debug, Default)]
pub struct Overlay {
    handles: Vec<Handle>,
}

impl Overlay {
    /// Draw `line` clipped to `DRAW_EXTENT`.
    pub fn line(&mut self, canvas: &mut dyn Canvas, line: &Line, color: Color) {
        let (a, b) = line.endpoints(DRAW_EXTENT);
        self.handles.push(canvas.draw_line(a.x, a.y, b.x, b.y, color));
    }

    pub fn outline(&mut self, canvas: &mut dyn Canvas, points: &[Point], color: Color) {
        self.handles.push(canvas.draw_perimeter(points, color));
    }

    pub fn clear(&mut self, canvas: &mut dyn Canvas) {
        for h in self.handles.drain(..) {
            canvas.remove(h);
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// A primitive recorded by `RecordingCanvas`.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Segment { from: Point, to: Point, color: Color },
    Loop { points: Vec<Point>, color: Color },
}

impl Shape {
    pub fn color(&self) -> Color {
        match self {
            Shape::Segment { color, .. } | Shape::Loop { color, .. } => *color,
        }
    }
}

/// In-memory canvas: keeps live primitives and counts frames.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    live: BTreeMap<Handle, Shape>,
    next: u64,
    drawn: usize,
    frames: usize,
    paced: Duration,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live primitives in drawing order.
    pub fn live(&self) -> impl Iterator<Item = &Shape> {
        self.live.values()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Live primitives of one color.
    pub fn live_with(&self, color: Color) -> Vec<&Shape> {
        self.live.values().filter(|s| s.color() == color).collect()
    }

    /// Total primitives ever drawn.
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Sum of pacing hints received through `yield_frame`.
    pub fn paced(&self) -> Duration {
        self.paced
    }

    fn insert(&mut self, shape: Shape) -> Handle {
        let h = Handle(self.next);
        self.next += 1;
        self.drawn += 1;
        self.live.insert(h, shape);
        h
    }
}

impl Canvas for RecordingCanvas {
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color) -> Handle {
        self.insert(Shape::Segment {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
            color,
        })
    }

    fn draw_perimeter(&mut self, points: &[Point], color: Color) -> Handle {
        self.insert(Shape::Loop {
            points: points.to_vec(),
            color,
        })
    }

    fn remove(&mut self, handle: Handle) {
        self.live.remove(&handle);
    }

    fn yield_frame(&mut self, hint: Duration) {
        self.frames += 1;
        self.paced += hint;
    }
}
