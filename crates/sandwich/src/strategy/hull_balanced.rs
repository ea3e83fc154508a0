//! Hull-balanced sweeps: per-color lines that split the color's convex hull
//! into parts of equal perimeter or equal area.

use std::time::Duration;

use tracing::debug;

use super::sweep::{OffsetFn, Sweep};
use super::{Search, Strategy, StrategyKind, SweepCfg, SWEEP_PACING};
use crate::balance::balance_offset;
use crate::canvas::{Color, Overlay};
use crate::hull::build_hull;
use crate::kernel::{polygon_area, polygon_perimeter, Direction, Point};

/// Scalar the balance search equalizes between the two hull parts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullMetric {
    Perimeter,
    Area,
}

impl HullMetric {
    pub fn eval(self, poly: &[Point]) -> f64 {
        match self {
            HullMetric::Perimeter => polygon_perimeter(poly),
            HullMetric::Area => polygon_area(poly),
        }
    }

    fn offset_fn(self) -> OffsetFn {
        match self {
            HullMetric::Perimeter => perimeter_offset as OffsetFn,
            HullMetric::Area => area_offset as OffsetFn,
        }
    }
}

fn perimeter_offset(points: &[Point], dir: Direction) -> Option<f64> {
    balance_offset(points, dir, polygon_perimeter)
}

fn area_offset(points: &[Point], dir: Direction) -> Option<f64> {
    balance_offset(points, dir, polygon_area)
}

/// Sweep whose per-color line balances a hull metric.
///
/// Both hulls are drawn for the whole run. If either hull has fewer than
/// three vertices the metric is undefined and the run ends without a cut.
#[derive(Debug)]
pub struct HullBalanced {
    metric: HullMetric,
    cfg: SweepCfg,
    overlay: Overlay,
}

impl HullBalanced {
    pub fn new(metric: HullMetric, cfg: SweepCfg) -> Self {
        Self {
            metric,
            cfg,
            overlay: Overlay::default(),
        }
    }

    pub fn perimeter(cfg: SweepCfg) -> Self {
        Self::new(HullMetric::Perimeter, cfg)
    }

    pub fn area(cfg: SweepCfg) -> Self {
        Self::new(HullMetric::Area, cfg)
    }

    pub fn metric(&self) -> HullMetric {
        self.metric
    }
}

impl Strategy for HullBalanced {
    fn kind(&self) -> StrategyKind {
        match self.metric {
            HullMetric::Perimeter => StrategyKind::PerimeterBalanced,
            HullMetric::Area => StrategyKind::AreaBalanced,
        }
    }

    fn search(&self, red: &[Point], blue: &[Point]) -> Box<dyn Search> {
        let red_hull = build_hull(red);
        let blue_hull = build_hull(blue);
        let degenerate = red_hull.len() < 3 || blue_hull.len() < 3;
        let outlines = [(red_hull, Color::Red), (blue_hull, Color::Blue)]
            .into_iter()
            .filter(|(hull, _)| !hull.is_empty())
            .collect();
        let sweep = Sweep::new(red, blue, self.cfg, self.metric.offset_fn()).with_outlines(outlines);
        if degenerate {
            debug!(metric = ?self.metric, "hull below three vertices, no cut");
            return Box::new(sweep.halted());
        }
        Box::new(sweep)
    }

    fn pacing(&self) -> Duration {
        SWEEP_PACING
    }

    fn overlay_mut(&mut self) -> &mut Overlay {
        &mut self.overlay
    }
}
