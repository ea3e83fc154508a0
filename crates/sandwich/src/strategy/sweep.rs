//! Orientation sweep shared by the median and hull-balanced strategies.
//!
//! For each sampled orientation the sweep asks an offset rule for one line
//! per color, measures the perpendicular gap between the two parallel lines
//! and keeps the orientation with the smallest gap (earliest on ties). The
//! reported cut is the red line at that orientation.

use std::time::Duration;

use tracing::trace;

use super::{Probe, Search, SeparationResult, Strategy, StrategyKind, SweepCfg, SWEEP_PACING};
use crate::canvas::{Color, Overlay};
use crate::kernel::{Direction, Line, Point};

/// Per-color offset rule for one direction.
pub type OffsetFn = fn(&[Point], Direction) -> Option<f64>;

/// Upper median (`sorted[n / 2]`) of the per-point offsets: the count-balanced
/// line of `points` with direction `dir`.
pub fn median_offset(points: &[Point], dir: Direction) -> Option<f64> {
    let mut offsets: Vec<f64> = points.iter().map(|p| dir.offset_of(*p)).collect();
    if offsets.is_empty() || offsets.iter().any(|o| !o.is_finite()) {
        return None;
    }
    offsets.sort_by(f64::total_cmp);
    Some(offsets[offsets.len() / 2])
}

/// Sweep search over orientations `k · step` in `[0°, 180°)`.
pub struct Sweep {
    red: Vec<Point>,
    blue: Vec<Point>,
    offset: OffsetFn,
    step_deg: f64,
    steps: usize,
    k: usize,
    best: Option<(f64, Line)>,
    outlines: Vec<(Vec<Point>, Color)>,
}

impl Sweep {
    /// Empty red or blue input yields a search with no candidates.
    pub fn new(red: &[Point], blue: &[Point], cfg: SweepCfg, offset: OffsetFn) -> Self {
        let steps = if red.is_empty() || blue.is_empty() {
            0
        } else {
            cfg.steps()
        };
        Self {
            red: red.to_vec(),
            blue: blue.to_vec(),
            offset,
            step_deg: cfg.effective_step(),
            steps,
            k: 0,
            best: None,
            outlines: Vec::new(),
        }
    }

    pub fn with_outlines(mut self, outlines: Vec<(Vec<Point>, Color)>) -> Self {
        self.outlines = outlines;
        self
    }

    /// Drop all remaining candidates (degenerate input).
    pub fn halted(mut self) -> Self {
        self.steps = 0;
        self
    }
}

impl Iterator for Sweep {
    type Item = Probe;

    fn next(&mut self) -> Option<Probe> {
        while self.k < self.steps {
            let theta_deg = self.k as f64 * self.step_deg;
            self.k += 1;
            let dir = Direction::from_angle(theta_deg.to_radians());
            let (Some(r), Some(b)) = ((self.offset)(&self.red, dir), (self.offset)(&self.blue, dir)) else {
                continue;
            };
            let gap = dir.gap(r, b);
            let (red_line, blue_line) = (dir.line_at(r), dir.line_at(b));
            if !gap.is_finite() || !red_line.is_finite() || !blue_line.is_finite() {
                continue;
            }
            if self.best.map_or(true, |(g, _)| gap < g) {
                self.best = Some((gap, red_line));
            }
            trace!(theta_deg, gap, "orientation candidate");
            return Some(Probe {
                lines: vec![(red_line, Color::Red), (blue_line, Color::Blue)],
            });
        }
        None
    }
}

impl Search for Sweep {
    fn outcome(&self) -> SeparationResult {
        match self.best {
            Some((gap, line)) => SeparationResult::Cut {
                line,
                residual: gap,
            },
            None => SeparationResult::NoCut,
        }
    }

    fn outlines(&self) -> Vec<(Vec<Point>, Color)> {
        self.outlines.clone()
    }
}

/// Median-sweep heuristic: the orientation whose red and blue median lines
/// are closest. Reports the best sampled orientation, not a verified bisector.
#[derive(Debug, Default)]
pub struct MedianSweep {
    cfg: SweepCfg,
    overlay: Overlay,
}

impl MedianSweep {
    pub fn new(cfg: SweepCfg) -> Self {
        Self {
            cfg,
            overlay: Overlay::default(),
        }
    }
}

impl Strategy for MedianSweep {
    fn kind(&self) -> StrategyKind {
        StrategyKind::MedianSweep
    }

    fn search(&self, red: &[Point], blue: &[Point]) -> Box<dyn Search> {
        Box::new(Sweep::new(red, blue, self.cfg, median_offset))
    }

    fn pacing(&self) -> Duration {
        SWEEP_PACING
    }

    fn overlay_mut(&mut self) -> &mut Overlay {
        &mut self.overlay
    }
}
