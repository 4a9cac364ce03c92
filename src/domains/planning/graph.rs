use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::info;

use crate::common::{quantize, GraphError, GraphResult, Point3};

/// An axis-aligned box obstacle. Bounds are inclusive on every axis: a lattice
/// node exactly on the boundary counts as inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub start: [f64; 3],
    pub end: [f64; 3],
}

impl Obstacle {
    pub fn new(start: [f64; 3], end: [f64; 3]) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, point: &Point3) -> bool {
        let coords = point.coords();
        (0..3).all(|axis| self.start[axis] <= coords[axis] && coords[axis] <= self.end[axis])
    }
}

/// One directed half of an undirected lattice edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub to: Point3,
    pub weight: f64,
}

/// An immutable lattice graph: the valid node set plus a weighted adjacency
/// map over the full 26-neighbor 3D neighborhood.
///
/// Built once by [`GraphBuilder`] and never mutated afterward, so it can be
/// shared behind an `Arc` by any number of concurrent planner queries without
/// locking. Obstacles and workspace bounds are retained for renderers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    nodes: BTreeSet<Point3>,
    edges: BTreeMap<Point3, Vec<Edge>>,
    obstacles: Vec<Obstacle>,
    space_size: [f64; 3],
    resolution: f64,
}

impl Graph {
    /// Nodes in lexicographic coordinate order.
    pub fn nodes(&self) -> impl Iterator<Item = &Point3> {
        self.nodes.iter()
    }

    pub fn contains_node(&self, node: &Point3) -> bool {
        self.nodes.contains(node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn neighbors(&self, node: &Point3) -> &[Edge] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn space_size(&self) -> [f64; 3] {
        self.space_size
    }

    pub fn resolution(&self) -> f64 {
        self.resolution
    }
}

/// Builds a [`Graph`] from workspace bounds, a uniform grid resolution, and a
/// set of box obstacles.
///
/// Inputs are assumed valid (positive extents and resolution); the config
/// layer rejects malformed values before this runs. The only failure here is
/// the optional candidate-count ceiling.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    space_size: [f64; 3],
    resolution: f64,
    obstacles: Vec<Obstacle>,
    max_nodes: Option<usize>,
}

impl GraphBuilder {
    pub fn new(space_size: [f64; 3], resolution: f64) -> Self {
        Self {
            space_size,
            resolution,
            obstacles: Vec::new(),
            max_nodes: None,
        }
    }

    pub fn with_obstacles(mut self, obstacles: Vec<Obstacle>) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Cap the candidate node count before the lattice is materialized.
    /// A guard against pathological resolutions, checked on the per-axis
    /// counts alone.
    pub fn with_max_nodes(mut self, limit: usize) -> Self {
        self.max_nodes = Some(limit);
        self
    }

    pub fn build(self) -> GraphResult<Graph> {
        let axis_counts = self.axis_counts();
        let candidates = axis_counts[0] * axis_counts[1] * axis_counts[2];
        if let Some(limit) = self.max_nodes {
            if candidates > limit {
                return Err(GraphError::LatticeTooLarge {
                    nodes: candidates,
                    limit,
                });
            }
        }

        let nodes = self.generate_nodes(axis_counts);
        let edges = self.connect_nodes(&nodes);

        let graph = Graph {
            nodes,
            edges,
            obstacles: self.obstacles,
            space_size: self.space_size,
            resolution: self.resolution,
        };
        info!(
            candidates,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "lattice graph built"
        );
        Ok(graph)
    }

    /// Points per axis for the inclusive sequence `0, r, 2r, ..., <= size`.
    /// The epsilon keeps an exact-multiple upper bound from being dropped to
    /// float division error.
    fn axis_counts(&self) -> [usize; 3] {
        let mut counts = [0usize; 3];
        for axis in 0..3 {
            counts[axis] = (self.space_size[axis] / self.resolution + 1e-9).floor() as usize + 1;
        }
        counts
    }

    /// Cartesian product of the per-axis sequences, minus every candidate
    /// falling inside any obstacle. Excluded nodes are absent entirely, not
    /// merely disconnected.
    fn generate_nodes(&self, axis_counts: [usize; 3]) -> BTreeSet<Point3> {
        let mut nodes = BTreeSet::new();
        for i in 0..axis_counts[0] {
            let x = quantize(i as f64 * self.resolution);
            for j in 0..axis_counts[1] {
                let y = quantize(j as f64 * self.resolution);
                for k in 0..axis_counts[2] {
                    let z = quantize(k as f64 * self.resolution);
                    let candidate = Point3::new(x, y, z);
                    if self.obstacles.iter().any(|o| o.contains(&candidate)) {
                        continue;
                    }
                    nodes.insert(candidate);
                }
            }
        }
        nodes
    }

    /// For each node, probe the 26 non-zero per-axis delta combinations in
    /// `{-r, 0, r}`. Every node enumerates independently and both sides
    /// quantize the same way, so the adjacency map comes out symmetric with
    /// bit-identical weights.
    fn connect_nodes(&self, nodes: &BTreeSet<Point3>) -> BTreeMap<Point3, Vec<Edge>> {
        let r = self.resolution;
        let mut edges = BTreeMap::new();
        for node in nodes {
            let mut adjacency = Vec::new();
            for dx in -1i32..=1 {
                for dy in -1i32..=1 {
                    for dz in -1i32..=1 {
                        if dx == 0 && dy == 0 && dz == 0 {
                            continue;
                        }
                        let neighbor =
                            node.offset(dx as f64 * r, dy as f64 * r, dz as f64 * r);
                        if nodes.contains(&neighbor) {
                            adjacency.push(Edge {
                                weight: node.distance_to(&neighbor),
                                to: neighbor,
                            });
                        }
                    }
                }
            }
            edges.insert(*node, adjacency);
        }
        edges
    }
}
