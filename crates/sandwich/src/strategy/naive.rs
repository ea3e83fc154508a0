//! Pairwise search: lines through one red and one blue point.

use std::time::Duration;

use tracing::trace;

use super::{Probe, Search, SeparationResult, Strategy, StrategyKind, NAIVE_PACING};
use crate::canvas::{Color, Overlay};
use crate::kernel::{Line, Point, Side};

/// Majority rule: ignoring points within `EPS` of `line`, neither side holds
/// more than `⌈n/2⌉` of the `n` points.
pub fn is_count_balanced(line: &Line, points: &[Point]) -> bool {
    let limit = points.len().div_ceil(2);
    let (mut above, mut below) = (0usize, 0usize);
    for p in points {
        match line.side(*p) {
            Side::Above => above += 1,
            Side::Below => below += 1,
            Side::On => {}
        }
    }
    above <= limit && below <= limit
}

/// Enumerates `(red[i], blue[j])` with `i` ascending, then `j` ascending, and
/// stops at the first line balanced for both colors.
pub struct NaiveSearch {
    red: Vec<Point>,
    blue: Vec<Point>,
    i: usize,
    j: usize,
    found: Option<Line>,
}

impl NaiveSearch {
    pub fn new(red: &[Point], blue: &[Point]) -> Self {
        Self {
            red: red.to_vec(),
            blue: blue.to_vec(),
            i: 0,
            j: 0,
            found: None,
        }
    }
}

impl Iterator for NaiveSearch {
    type Item = Probe;

    fn next(&mut self) -> Option<Probe> {
        if self.found.is_some() {
            return None;
        }
        while self.i < self.red.len() {
            if self.j >= self.blue.len() {
                self.i += 1;
                self.j = 0;
                continue;
            }
            let (i, j) = (self.i, self.j);
            self.j += 1;
            let Some(line) = Line::through(self.red[i], self.blue[j]) else {
                continue;
            };
            let accepted = is_count_balanced(&line, &self.red) && is_count_balanced(&line, &self.blue);
            trace!(red = i, blue = j, accepted, "pair candidate");
            if accepted {
                self.found = Some(line);
                return Some(Probe::single(line, Color::Green));
            }
            return Some(Probe::single(line, Color::Black));
        }
        None
    }
}

impl Search for NaiveSearch {
    fn outcome(&self) -> SeparationResult {
        match self.found {
            Some(line) => SeparationResult::Cut { line, residual: 0.0 },
            None => SeparationResult::NoCut,
        }
    }
}

/// Pairwise strategy; the only one that can exhaust its candidates without a cut.
#[derive(Debug, Default)]
pub struct NaivePairwise {
    overlay: Overlay,
}

impl Strategy for NaivePairwise {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Naive
    }

    fn search(&self, red: &[Point], blue: &[Point]) -> Box<dyn Search> {
        Box::new(NaiveSearch::new(red, blue))
    }

    fn pacing(&self) -> Duration {
        NAIVE_PACING
    }

    fn overlay_mut(&mut self) -> &mut Overlay {
        &mut self.overlay
    }
}
