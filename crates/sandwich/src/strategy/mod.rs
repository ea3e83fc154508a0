//! Separator strategies.
//!
//! Purpose
//! - Four interchangeable ways to find a line separating red and blue points:
//!   `NaivePairwise` (point-count majority through a red/blue pair),
//!   `MedianSweep` (closest per-color median lines over sampled orientations),
//!   and `HullBalanced` with a perimeter or area metric.
//!
//! Model
//! - A strategy produces a `Search`: an iterator of `Probe`s (the candidate
//!   lines evaluated at one step) with a final `outcome()`. Searches own
//!   copies of their inputs and all their state, so they are plain values
//!   that can be driven without any timing.
//! - `Run` drives a search against a `Canvas`: draw probe, yield a frame,
//!   remove probe, and finally draw the accepted cut.
//! - A strategy value only owns the handles of what it left on the canvas.
//!
//! References
//! - Code cross-refs: `balance::balance_offset`, `hull::build_hull`,
//!   `orchestrator::Orchestrator`

mod hull_balanced;
mod naive;
mod run;
mod sweep;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::canvas::{Canvas, Color, Overlay};
use crate::error::EngineError;
use crate::kernel::{Line, Point};

pub use hull_balanced::{HullBalanced, HullMetric};
pub use naive::{is_count_balanced, NaivePairwise, NaiveSearch};
pub use run::{Run, Step};
pub use sweep::{median_offset, MedianSweep, OffsetFn, Sweep};

/// Pacing hint for the pairwise strategy (one candidate per second).
pub const NAIVE_PACING: Duration = Duration::from_millis(1000);
/// Pacing hint for the orientation sweeps.
pub const SWEEP_PACING: Duration = Duration::from_millis(1);

/// Outcome of one separation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SeparationResult {
    /// A cut and the metric value it achieves: `0.0` for an exact pairwise
    /// cut, the gap between the two color lines for the sweeps.
    Cut { line: Line, residual: f64 },
    NoCut,
}

impl SeparationResult {
    pub fn line(&self) -> Option<Line> {
        match *self {
            SeparationResult::Cut { line, .. } => Some(line),
            SeparationResult::NoCut => None,
        }
    }

    pub fn is_cut(&self) -> bool {
        matches!(self, SeparationResult::Cut { .. })
    }
}

/// Strategy identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Naive,
    MedianSweep,
    PerimeterBalanced,
    AreaBalanced,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Naive,
        StrategyKind::MedianSweep,
        StrategyKind::PerimeterBalanced,
        StrategyKind::AreaBalanced,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Naive => "naive",
            StrategyKind::MedianSweep => "median-sweep",
            StrategyKind::PerimeterBalanced => "perimeter-balanced",
            StrategyKind::AreaBalanced => "area-balanced",
        }
    }

    /// Fresh strategy value of this kind.
    pub fn instantiate(self, cfg: SweepCfg) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Naive => Box::new(NaivePairwise::default()),
            StrategyKind::MedianSweep => Box::new(MedianSweep::new(cfg)),
            StrategyKind::PerimeterBalanced => Box::new(HullBalanced::perimeter(cfg)),
            StrategyKind::AreaBalanced => Box::new(HullBalanced::area(cfg)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = EngineError;

    /// Accepts the canonical names and the short selector values
    /// `naive-points`, `points`, `perimeter` and `area`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" | "naive-points" => Ok(StrategyKind::Naive),
            "median-sweep" | "points" => Ok(StrategyKind::MedianSweep),
            "perimeter-balanced" | "perimeter" => Ok(StrategyKind::PerimeterBalanced),
            "area-balanced" | "area" => Ok(StrategyKind::AreaBalanced),
            _ => Err(EngineError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Orientation sampling for the sweep strategies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepCfg {
    /// Angular step in degrees; orientations `0, step, 2·step, …` below 180°.
    pub step_deg: f64,
}

impl Default for SweepCfg {
    fn default() -> Self {
        Self { step_deg: 0.5 }
    }
}

impl SweepCfg {
    const MIN_STEP_DEG: f64 = 0.01;

    /// Step actually used: non-finite or non-positive steps fall back to the
    /// default, the rest is clamped to `[0.01°, 180°]`.
    pub fn effective_step(&self) -> f64 {
        if self.step_deg.is_finite() && self.step_deg > 0.0 {
            self.step_deg.clamp(Self::MIN_STEP_DEG, 180.0)
        } else {
            Self::default().step_deg
        }
    }

    /// Number of sampled orientations.
    pub fn steps(&self) -> usize {
        let step = self.effective_step();
        (0usize..).take_while(|k| (*k as f64) * step < 180.0).count()
    }
}

/// Candidate lines evaluated at one step of a search.
#[derive(Clone, Debug, PartialEq)]
pub struct Probe {
    pub lines: Vec<(Line, Color)>,
}

impl Probe {
    pub fn single(line: Line, color: Color) -> Self {
        Self {
            lines: vec![(line, color)],
        }
    }
}

/// A stepwise separation search.
///
/// Each `next()` evaluates one candidate (pair, orientation). After the
/// iterator is exhausted `outcome()` is final.
pub trait Search: Iterator<Item = Probe> {
    /// Best result so far.
    fn outcome(&self) -> SeparationResult;

    /// Closed outlines shown for the whole run (e.g. the color hulls).
    fn outlines(&self) -> Vec<(Vec<Point>, Color)> {
        Vec::new()
    }
}

/// A separation strategy.
pub trait Strategy {
    fn kind(&self) -> StrategyKind;

    /// Search over copies of `red` and `blue`.
    fn search(&self, red: &[Point], blue: &[Point]) -> Box<dyn Search>;

    /// Pacing hint handed to `Canvas::yield_frame` after each probe.
    fn pacing(&self) -> Duration;

    /// Handles this strategy currently has on the canvas.
    fn overlay_mut(&mut self) -> &mut Overlay;

    /// Remove everything this strategy has drawn.
    fn reset(&mut self, canvas: &mut dyn Canvas) {
        self.overlay_mut().clear(canvas);
    }

    /// Run the search to completion against `canvas`.
    fn separate(&mut self, red: &[Point], blue: &[Point], canvas: &mut dyn Canvas) -> SeparationResult {
        let mut run = Run::start(self, red, blue, canvas);
        loop {
            if let Step::Finished(result) = run.advance(self, canvas) {
                return result;
            }
        }
    }
}
