use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::common::{AppError, AppResult, Point3};
use crate::domains::planning::{Graph, Obstacle, Path, SceneRenderer};

/// The document handed to external plotting tools: workspace bounds, nodes,
/// undirected edges, obstacles, and the planned route when one exists.
#[derive(Debug, Serialize)]
pub struct SceneDocument {
    pub space_size: [f64; 3],
    pub resolution: f64,
    pub nodes: Vec<Point3>,
    pub edges: Vec<SceneEdge>,
    pub obstacles: Vec<Obstacle>,
    pub path: Option<Vec<Point3>>,
    pub path_cost: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct SceneEdge {
    pub from: Point3,
    pub to: Point3,
    pub weight: f64,
}

/// [`SceneRenderer`] adapter that writes the scene as pretty-printed JSON.
pub struct JsonSceneExporter {
    output: PathBuf,
}

impl JsonSceneExporter {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    pub fn document(graph: &Graph, path: Option<&Path>) -> SceneDocument {
        let mut edges = Vec::new();
        for node in graph.nodes() {
            for edge in graph.neighbors(node) {
                // each undirected edge appears once, from its lesser endpoint
                if *node < edge.to {
                    edges.push(SceneEdge {
                        from: *node,
                        to: edge.to,
                        weight: edge.weight,
                    });
                }
            }
        }

        SceneDocument {
            space_size: graph.space_size(),
            resolution: graph.resolution(),
            nodes: graph.nodes().copied().collect(),
            edges,
            obstacles: graph.obstacles().to_vec(),
            path: path.map(|p| p.waypoints().to_vec()),
            path_cost: path.map(|p| p.total_cost()),
        }
    }
}

impl SceneRenderer for JsonSceneExporter {
    fn render(&self, graph: &Graph, path: Option<&Path>) -> AppResult<()> {
        let document = Self::document(graph, path);
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| AppError::Store(format!("scene serialization failed: {e}")))?;

        if let Some(parent) = self.output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| AppError::Store(format!("{}: {e}", parent.display())))?;
            }
        }
        fs::write(&self.output, json)
            .map_err(|e| AppError::Store(format!("{}: {e}", self.output.display())))?;

        info!(output = %self.output.display(), "scene document written");
        Ok(())
    }
}
