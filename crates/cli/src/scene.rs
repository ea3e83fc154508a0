use anyhow::{ensure, Context, Result};
use sandwich::kernel::{Line, Point};
use sandwich::strategy::SeparationResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Scene file: `{"red": [[x, y], ...], "blue": [[x, y], ...]}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub red: Vec<[f64; 2]>,
    #[serde(default)]
    pub blue: Vec<[f64; 2]>,
}

impl SceneFile {
    pub fn from_points(red: &[Point], blue: &[Point]) -> Self {
        let pairs = |pts: &[Point]| -> Vec<[f64; 2]> { pts.iter().map(|p| [p.x, p.y]).collect() };
        Self {
            red: pairs(red),
            blue: pairs(blue),
        }
    }

    pub fn red_points(&self) -> Vec<Point> {
        self.red.iter().map(|[x, y]| Point::new(*x, *y)).collect()
    }

    pub fn blue_points(&self) -> Vec<Point> {
        self.blue.iter().map(|[x, y]| Point::new(*x, *y)).collect()
    }
}

/// Read and validate a scene file; all coordinates must be finite.
pub fn read_scene(path: &Path) -> Result<SceneFile> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let scene: SceneFile =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    for (color, pts) in [("red", &scene.red), ("blue", &scene.blue)] {
        for (i, [x, y]) in pts.iter().enumerate() {
            ensure!(
                x.is_finite() && y.is_finite(),
                "{color} point {i} is not finite: ({x}, {y})"
            );
        }
    }
    Ok(scene)
}

pub fn write_scene(path: &Path, scene: &SceneFile) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(scene)?)
        .with_context(|| format!("writing {}", path.display()))
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineOut {
    Sloped { slope: f64, intercept: f64 },
    Vertical { x: f64 },
}

impl From<Line> for LineOut {
    fn from(line: Line) -> Self {
        match line {
            Line::Sloped { slope, intercept } => LineOut::Sloped { slope, intercept },
            Line::Vertical { x } => LineOut::Vertical { x },
        }
    }
}

/// JSON summary of one separation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeparationOut {
    pub strategy: String,
    pub red: usize,
    pub blue: usize,
    pub frames: usize,
    pub cut: Option<LineOut>,
    pub residual: Option<f64>,
}

impl SeparationOut {
    pub fn new(strategy: String, red: usize, blue: usize, frames: usize, result: SeparationResult) -> Self {
        let (cut, residual) = match result {
            SeparationResult::Cut { line, residual } => (Some(line.into()), Some(residual)),
            SeparationResult::NoCut => (None, None),
        };
        Self {
            strategy,
            red,
            blue,
            frames,
            cut,
            residual,
        }
    }
}
