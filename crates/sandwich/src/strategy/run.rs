//! Caller-paced execution of one search against a canvas.

use std::time::Duration;

use tracing::{debug, trace};

use super::{Search, SeparationResult, Strategy};
use crate::canvas::{Canvas, Color, Overlay};
use crate::kernel::Point;

/// Result of one `Run::advance` call.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// One probe was drawn and a frame yielded; `frame` counts from 1.
    Probed { frame: usize },
    /// The search is exhausted; the cut (if any) is on the canvas.
    Finished(SeparationResult),
}

/// One run of a strategy: the search plus the handles of the current probe.
///
/// Call `advance` until it returns `Step::Finished`; the run is spent after that.
pub struct Run {
    search: Box<dyn Search>,
    probe: Overlay,
    pacing: Duration,
    frames: usize,
}

impl Run {
    /// Clear the strategy's previous drawing, draw the run outlines and
    /// prepare the search.
    pub fn start<S: Strategy + ?Sized>(
        strategy: &mut S,
        red: &[Point],
        blue: &[Point],
        canvas: &mut dyn Canvas,
    ) -> Self {
        strategy.reset(canvas);
        let search = strategy.search(red, blue);
        for (outline, color) in search.outlines() {
            strategy.overlay_mut().outline(canvas, &outline, color);
        }
        debug!(
            strategy = %strategy.kind(),
            red = red.len(),
            blue = blue.len(),
            "run started"
        );
        Self {
            search,
            probe: Overlay::default(),
            pacing: strategy.pacing(),
            frames: 0,
        }
    }

    /// Remove the previous probe, then evaluate and draw the next one, or
    /// draw the final cut once the search is exhausted.
    pub fn advance<S: Strategy + ?Sized>(&mut self, strategy: &mut S, canvas: &mut dyn Canvas) -> Step {
        self.probe.clear(canvas);
        match self.search.next() {
            Some(probe) => {
                for (line, color) in &probe.lines {
                    self.probe.line(canvas, line, *color);
                }
                self.frames += 1;
                trace!(frame = self.frames, lines = probe.lines.len(), "probe");
                canvas.yield_frame(self.pacing);
                Step::Probed { frame: self.frames }
            }
            None => {
                let result = self.search.outcome();
                if let Some(line) = result.line() {
                    strategy.overlay_mut().line(canvas, &line, Color::Green);
                }
                debug!(
                    strategy = %strategy.kind(),
                    frames = self.frames,
                    ?result,
                    "run finished"
                );
                Step::Finished(result)
            }
        }
    }
}
