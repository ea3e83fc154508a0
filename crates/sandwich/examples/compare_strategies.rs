//! Run all four strategies on the same random scenes and print their cuts.
//!
//! Usage:
//!   cargo run -p sandwich --example compare_strategies -- [scenes]
//!
//! Prints one line per (scene, strategy) with the cut, its residual and the
//! number of probes evaluated.

use sandwich::canvas::RecordingCanvas;
use sandwich::rand::{draw_point_clouds, PointCloudCfg, ReplayToken};
use sandwich::strategy::{SeparationResult, StrategyKind, SweepCfg};

fn main() {
    let scenes: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(3);
    let cfg = PointCloudCfg {
        red_count: 12,
        blue_count: 12,
        ..PointCloudCfg::default()
    };
    for index in 0..scenes {
        let clouds = draw_point_clouds(cfg, ReplayToken { seed: 2025, index });
        for kind in StrategyKind::ALL {
            let mut canvas = RecordingCanvas::new();
            let result = kind
                .instantiate(SweepCfg { step_deg: 1.0 })
                .separate(&clouds.red, &clouds.blue, &mut canvas);
            match result {
                SeparationResult::Cut { line, residual } => println!(
                    "scene {index} {:<18} probes={:<4} residual={residual:.4} line={line:?}",
                    kind.name(),
                    canvas.frames()
                ),
                SeparationResult::NoCut => println!(
                    "scene {index} {:<18} probes={:<4} no cut",
                    kind.name(),
                    canvas.frames()
                ),
            }
        }
    }
}
