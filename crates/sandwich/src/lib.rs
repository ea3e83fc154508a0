//! Ham-sandwich cuts for red and blue planar point sets.
//!
//! Layering, bottom-up:
//! - `kernel`: points, lines, orientation, tolerances, polygon measures.
//! - `hull`, `split`, `balance`: convex hull, splitting a hull by a line,
//!   bisection for a metric-balancing offset.
//! - `strategy`: the four separator strategies as stepwise searches.
//! - `canvas`, `orchestrator`: drawing contract and the request surface that
//!   runs one strategy at a time against a canvas.
//!
//! API Policy
//! - Internal to this workspace; breaking changes are fine when they improve
//!   the design.

pub mod balance;
pub mod canvas;
pub mod error;
pub mod hull;
pub mod kernel;
pub mod orchestrator;
pub mod rand;
pub mod split;
pub mod strategy;

pub use error::EngineError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for callers.
pub mod prelude {
    pub use crate::canvas::{Canvas, Color, Handle, RecordingCanvas};
    pub use crate::error::EngineError;
    pub use crate::kernel::{Line, Point};
    pub use crate::orchestrator::{Orchestrator, PointClass, RunState};
    pub use crate::rand::{draw_point_clouds, PointCloudCfg, PointClouds, Region, ReplayToken};
    pub use crate::strategy::{SeparationResult, Strategy, StrategyKind, SweepCfg};
}
