use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use tracing::debug;

use super::{check_endpoints, reconstruct_path, PathPlanner};
use crate::common::{PlanResult, Point3};
use crate::domains::planning::{Graph, Path};

/// Dijkstra's algorithm over the lattice graph.
///
/// The open set is a binary min-heap keyed by `(distance, node)`; the node
/// component makes equal-distance pops resolve in lexicographic coordinate
/// order, which keeps runs reproducible. Improvements push duplicate entries
/// rather than re-keying the heap, and stale entries are skipped on pop.
pub struct DijkstraPlanner;

impl PathPlanner for DijkstraPlanner {
    fn plan(&self, graph: &Graph, start: Point3, goal: Point3) -> PlanResult<Option<Path>> {
        check_endpoints(graph, start, goal)?;

        // Absent entries stand for the infinite initial distance.
        let mut distances: HashMap<Point3, f64> = HashMap::new();
        distances.insert(start, 0.0);
        let mut came_from: HashMap<Point3, Point3> = HashMap::new();

        let mut open_set: BinaryHeap<Reverse<(OrderedFloat<f64>, Point3)>> = BinaryHeap::new();
        open_set.push(Reverse((OrderedFloat(0.0), start)));

        let mut expanded = 0usize;
        while let Some(Reverse((OrderedFloat(distance), current))) = open_set.pop() {
            if current == goal {
                debug!(expanded, cost = distance, "dijkstra reached the goal");
                return Ok(Some(Path::new(
                    reconstruct_path(&came_from, current),
                    distance,
                )));
            }
            if distance > distances.get(&current).copied().unwrap_or(f64::INFINITY) {
                // stale duplicate left behind by a later improvement
                continue;
            }
            expanded += 1;

            for edge in graph.neighbors(&current) {
                let candidate = distance + edge.weight;
                if candidate < distances.get(&edge.to).copied().unwrap_or(f64::INFINITY) {
                    distances.insert(edge.to, candidate);
                    came_from.insert(edge.to, current);
                    open_set.push(Reverse((OrderedFloat(candidate), edge.to)));
                }
            }
        }

        debug!(expanded, "dijkstra exhausted the open set");
        Ok(None)
    }
}
