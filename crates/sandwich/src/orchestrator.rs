//! Request surface: add points, reset, switch strategy, drive runs.
//!
//! Every added point starts a run of the active strategy over all points.
//! The caller paces the run with `advance` (one probe per call). While a run
//! is active the orchestrator refuses `add_point`, `reset_all` and
//! `set_strategy` with `EngineError::RunInProgress`; there is no mid-run
//! cancellation.

use tracing::{debug, info};

use crate::canvas::{Canvas, Color};
use crate::error::EngineError;
use crate::kernel::Point;
use crate::strategy::{
    HullBalanced, MedianSweep, NaivePairwise, Run, SeparationResult, Step, Strategy, StrategyKind,
    SweepCfg,
};

/// Color class of an input point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointClass {
    Red,
    Blue,
}

impl From<PointClass> for Color {
    fn from(c: PointClass) -> Self {
        match c {
            PointClass::Red => Color::Red,
            PointClass::Blue => Color::Blue,
        }
    }
}

/// State reported by `Orchestrator::advance`.
#[derive(Clone, Debug, PartialEq)]
pub enum RunState {
    Idle,
    Running { frame: usize },
    Finished(SeparationResult),
}

/// One instance per strategy kind.
struct Roster {
    naive: NaivePairwise,
    median: MedianSweep,
    perimeter: HullBalanced,
    area: HullBalanced,
}

impl Roster {
    fn new(cfg: SweepCfg) -> Self {
        Self {
            naive: NaivePairwise::default(),
            median: MedianSweep::new(cfg),
            perimeter: HullBalanced::perimeter(cfg),
            area: HullBalanced::area(cfg),
        }
    }

    fn get_mut(&mut self, kind: StrategyKind) -> &mut dyn Strategy {
        match kind {
            StrategyKind::Naive => &mut self.naive,
            StrategyKind::MedianSweep => &mut self.median,
            StrategyKind::PerimeterBalanced => &mut self.perimeter,
            StrategyKind::AreaBalanced => &mut self.area,
        }
    }
}

pub struct Orchestrator {
    red: Vec<Point>,
    blue: Vec<Point>,
    active: StrategyKind,
    roster: Roster,
    run: Option<Run>,
    last: Option<SeparationResult>,
}

impl Orchestrator {
    pub fn new(active: StrategyKind, cfg: SweepCfg) -> Self {
        Self {
            red: Vec::new(),
            blue: Vec::new(),
            active,
            roster: Roster::new(cfg),
            run: None,
            last: None,
        }
    }

    pub fn strategy(&self) -> StrategyKind {
        self.active
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn points(&self, class: PointClass) -> &[Point] {
        match class {
            PointClass::Red => &self.red,
            PointClass::Blue => &self.blue,
        }
    }

    /// Result of the last completed run, cleared by `reset_all`.
    pub fn last_result(&self) -> Option<SeparationResult> {
        self.last
    }

    /// Record a new point and start a run over all points.
    pub fn add_point(
        &mut self,
        x: f64,
        y: f64,
        class: PointClass,
        canvas: &mut dyn Canvas,
    ) -> Result<(), EngineError> {
        if self.is_running() {
            return Err(EngineError::RunInProgress);
        }
        if !(x.is_finite() && y.is_finite()) {
            return Err(EngineError::NonFinitePoint { x, y });
        }
        match class {
            PointClass::Red => self.red.push(Point::new(x, y)),
            PointClass::Blue => self.blue.push(Point::new(x, y)),
        }
        debug!(x, y, ?class, "point added");
        let strategy = self.roster.get_mut(self.active);
        self.run = Some(Run::start(strategy, &self.red, &self.blue, canvas));
        Ok(())
    }

    /// Evaluate one probe of the active run.
    pub fn advance(&mut self, canvas: &mut dyn Canvas) -> RunState {
        let Some(run) = self.run.as_mut() else {
            return RunState::Idle;
        };
        let strategy = self.roster.get_mut(self.active);
        match run.advance(strategy, canvas) {
            Step::Probed { frame } => RunState::Running { frame },
            Step::Finished(result) => {
                self.run = None;
                self.last = Some(result);
                RunState::Finished(result)
            }
        }
    }

    /// Drive the active run to its end; `None` when no run is active.
    pub fn run_to_completion(&mut self, canvas: &mut dyn Canvas) -> Option<SeparationResult> {
        loop {
            match self.advance(canvas) {
                RunState::Idle => return None,
                RunState::Running { .. } => {}
                RunState::Finished(result) => return Some(result),
            }
        }
    }

    /// Drop all points and everything the active strategy has drawn.
    pub fn reset_all(&mut self, canvas: &mut dyn Canvas) -> Result<(), EngineError> {
        if self.is_running() {
            return Err(EngineError::RunInProgress);
        }
        self.red.clear();
        self.blue.clear();
        self.last = None;
        self.roster.get_mut(self.active).reset(canvas);
        debug!(strategy = %self.active, "reset");
        Ok(())
    }

    /// Switch strategy; clears the scene and all points.
    pub fn set_strategy(
        &mut self,
        kind: StrategyKind,
        canvas: &mut dyn Canvas,
    ) -> Result<(), EngineError> {
        self.reset_all(canvas)?;
        self.active = kind;
        info!(strategy = %kind, "strategy selected");
        Ok(())
    }
}
