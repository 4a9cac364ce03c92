use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::common::{PlanResult, Point3};
use crate::domains::planning::{planner_for, Algorithm, Graph, Path, PathPlanner};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlanStatus {
    Completed { total_cost: f64 },
    NoPathFound,
}

/// The record produced for one planning query: identity, query endpoints,
/// outcome, and the route itself when one exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRecord {
    pub id: String,
    pub algorithm: Algorithm,
    pub start: Point3,
    pub goal: Point3,
    pub status: PlanStatus,
    pub path: Option<Path>,
    pub created_at: DateTime<Utc>,
}

/// Application-level facade over the core: holds a shared immutable graph and
/// the configured planner, and wraps each query outcome in a [`PlanRecord`].
///
/// All mutable search state lives inside the planner call, so a single
/// service can serve concurrent queries against the same graph.
pub struct PlanningService {
    graph: Arc<Graph>,
    algorithm: Algorithm,
    planner: Box<dyn PathPlanner + Send + Sync>,
}

impl PlanningService {
    pub fn new(graph: Arc<Graph>, algorithm: Algorithm) -> Self {
        Self {
            graph,
            algorithm,
            planner: planner_for(algorithm),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn plan_route(&self, start: Point3, goal: Point3) -> PlanResult<PlanRecord> {
        info!(%start, %goal, algorithm = ?self.algorithm, "planning route");
        let outcome = self.planner.plan(&self.graph, start, goal)?;

        let (status, path) = match outcome {
            Some(path) => {
                info!(
                    waypoints = path.len(),
                    cost = path.total_cost(),
                    "route found"
                );
                (
                    PlanStatus::Completed {
                        total_cost: path.total_cost(),
                    },
                    Some(path),
                )
            }
            None => {
                info!("no route between start and goal");
                (PlanStatus::NoPathFound, None)
            }
        };

        Ok(PlanRecord {
            id: Uuid::new_v4().to_string(),
            algorithm: self.algorithm,
            start,
            goal,
            status,
            path,
            created_at: Utc::now(),
        })
    }
}
