use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::common::{ConfigError, ConfigResult, Point3};
use crate::domains::planning::{Algorithm, Obstacle};

/// A planning scenario: workspace, obstacles, query endpoints, and which
/// algorithm to run. Loaded from JSON or TOML and validated in full before
/// any core component sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub space_size: [f64; 3],
    pub grid_resolution: f64,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
    pub start_point: [f64; 3],
    pub goal_point: [f64; 3],
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Candidate-node ceiling passed to the graph builder, if any.
    #[serde(default)]
    pub max_nodes: Option<usize>,
    /// Where to write the scene document for an external plotter, if anywhere.
    #[serde(default)]
    pub scene_output: Option<PathBuf>,
}

impl ScenarioConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;

        let extension = path.extension().and_then(|e| e.to_str());
        let config: ScenarioConfig = match extension {
            Some("json") => serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: display.clone(),
                source,
            })?,
            Some("toml") => toml::from_str(&content).map_err(|source| ConfigError::Toml {
                path: display.clone(),
                source,
            })?,
            _ => return Err(ConfigError::UnsupportedFormat { path: display }),
        };

        config.validate()?;
        Ok(config)
    }

    /// Shape, sign, and ordering checks. Everything here is fatal; an
    /// out-of-lattice start or goal is deliberately NOT a config error, it
    /// surfaces as `InvalidNode` at query time.
    pub fn validate(&self) -> ConfigResult<()> {
        for (axis, dim) in self.space_size.iter().enumerate() {
            if !dim.is_finite() || *dim <= 0.0 {
                return Err(invalid(format!(
                    "'space_size[{axis}]' must be positive, got {dim}"
                )));
            }
        }

        if !self.grid_resolution.is_finite() || self.grid_resolution <= 0.0 {
            return Err(invalid(format!(
                "'grid_resolution' must be positive, got {}",
                self.grid_resolution
            )));
        }

        for (index, obstacle) in self.obstacles.iter().enumerate() {
            for axis in 0..3 {
                let (start, end) = (obstacle.start[axis], obstacle.end[axis]);
                if !start.is_finite() || !end.is_finite() {
                    return Err(invalid(format!(
                        "obstacle {index} has a non-finite bound on axis {axis}"
                    )));
                }
                if start > end {
                    return Err(invalid(format!(
                        "obstacle {index}: 'start[{axis}]' must not exceed 'end[{axis}]'"
                    )));
                }
            }
        }

        for (name, point) in [
            ("start_point", &self.start_point),
            ("goal_point", &self.goal_point),
        ] {
            if point.iter().any(|coord| !coord.is_finite()) {
                return Err(invalid(format!("'{name}' must contain finite coordinates")));
            }
        }

        Ok(())
    }

    pub fn start(&self) -> Point3 {
        Point3::from(self.start_point)
    }

    pub fn goal(&self) -> Point3 {
        Point3::from(self.goal_point)
    }
}

fn invalid(reason: String) -> ConfigError {
    ConfigError::Invalid { reason }
}
