//! Caller-contract errors.
//!
//! Degenerate geometry is not an error: it surfaces as `None` or
//! `SeparationResult::NoCut`. These variants cover requests the engine
//! refuses without touching its state.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A run is active; adding points, resetting and switching strategy wait for it.
    #[error("a separation run is in progress")]
    RunInProgress,

    #[error("unknown strategy `{0}` (expected naive, median-sweep, perimeter-balanced or area-balanced)")]
    UnknownStrategy(String),

    #[error("point ({x}, {y}) has a non-finite coordinate")]
    NonFinitePoint { x: f64, y: f64 },
}
