use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use tracing::debug;

use super::{check_endpoints, reconstruct_path, PathPlanner};
use crate::common::{PlanResult, Point3};
use crate::domains::planning::{Graph, Path};

/// A* with a straight-line heuristic.
///
/// Edge weights are Euclidean distances, so the unrounded straight-line
/// distance to the goal never overestimates the remaining cost: the heuristic
/// is admissible and consistent, and the returned path always matches
/// Dijkstra's total cost on the same input. Tie-breaking follows the same
/// lexicographic node order as [`super::DijkstraPlanner`].
pub struct AStarPlanner;

impl AStarPlanner {
    fn heuristic(node: &Point3, goal: &Point3) -> f64 {
        node.euclidean(goal)
    }
}

impl PathPlanner for AStarPlanner {
    fn plan(&self, graph: &Graph, start: Point3, goal: Point3) -> PlanResult<Option<Path>> {
        check_endpoints(graph, start, goal)?;

        let mut g_scores: HashMap<Point3, f64> = HashMap::new();
        g_scores.insert(start, 0.0);
        let mut came_from: HashMap<Point3, Point3> = HashMap::new();
        let mut closed: HashSet<Point3> = HashSet::new();

        let mut open_set: BinaryHeap<Reverse<(OrderedFloat<f64>, Point3)>> = BinaryHeap::new();
        open_set.push(Reverse((
            OrderedFloat(Self::heuristic(&start, &goal)),
            start,
        )));

        let mut expanded = 0usize;
        while let Some(Reverse((_, current))) = open_set.pop() {
            if current == goal {
                let cost = g_scores.get(&current).copied().unwrap_or(f64::INFINITY);
                debug!(expanded, cost, "a* reached the goal");
                return Ok(Some(Path::new(reconstruct_path(&came_from, current), cost)));
            }
            if !closed.insert(current) {
                // a consistent heuristic finalizes each node on first pop
                continue;
            }
            expanded += 1;

            let g = g_scores.get(&current).copied().unwrap_or(f64::INFINITY);
            for edge in graph.neighbors(&current) {
                if closed.contains(&edge.to) {
                    continue;
                }
                let tentative = g + edge.weight;
                if tentative < g_scores.get(&edge.to).copied().unwrap_or(f64::INFINITY) {
                    g_scores.insert(edge.to, tentative);
                    came_from.insert(edge.to, current);
                    open_set.push(Reverse((
                        OrderedFloat(tentative + Self::heuristic(&edge.to, &goal)),
                        edge.to,
                    )));
                }
            }
        }

        debug!(expanded, "a* exhausted the open set");
        Ok(None)
    }
}
