pub mod astar;
pub mod dijkstra;

pub use astar::AStarPlanner;
pub use dijkstra::DijkstraPlanner;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::common::{PlanError, PlanResult, Point3};
use crate::domains::planning::{Graph, Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Dijkstra,
    AStar,
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Dijkstra
    }
}

/// A shortest-path search over an immutable [`Graph`].
///
/// `Ok(Some(path))` is a minimum-cost route, `Ok(None)` means the goal is
/// unreachable (a normal outcome), and `Err(InvalidNode)` means start or goal
/// is not a graph node at all. Implementations keep all search state local to
/// the query, so one planner may serve concurrent queries against a shared
/// graph.
pub trait PathPlanner {
    fn plan(&self, graph: &Graph, start: Point3, goal: Point3) -> PlanResult<Option<Path>>;
}

pub fn planner_for(algorithm: Algorithm) -> Box<dyn PathPlanner + Send + Sync> {
    match algorithm {
        Algorithm::Dijkstra => Box::new(DijkstraPlanner),
        Algorithm::AStar => Box::new(AStarPlanner),
    }
}

/// Membership check shared by both planners, raised before any search work.
pub(crate) fn check_endpoints(graph: &Graph, start: Point3, goal: Point3) -> PlanResult<()> {
    for node in [start, goal] {
        if !graph.contains_node(&node) {
            return Err(PlanError::InvalidNode { node });
        }
    }
    Ok(())
}

/// Walk the predecessor map backward from the terminal node and reverse, so
/// the result runs start to goal.
pub(crate) fn reconstruct_path(
    came_from: &HashMap<Point3, Point3>,
    terminal: Point3,
) -> Vec<Point3> {
    let mut waypoints = vec![terminal];
    let mut current = terminal;
    while let Some(previous) = came_from.get(&current) {
        current = *previous;
        waypoints.push(current);
    }
    waypoints.reverse();
    waypoints
}
