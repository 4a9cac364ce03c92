use serde::{Deserialize, Serialize};

use crate::common::Point3;

/// An ordered node sequence from start to goal, with its total edge weight.
/// Immutable output data; consecutive waypoints are always graph-adjacent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    waypoints: Vec<Point3>,
    total_cost: f64,
}

impl Path {
    pub fn new(waypoints: Vec<Point3>, total_cost: f64) -> Self {
        Self {
            waypoints,
            total_cost,
        }
    }

    pub fn waypoints(&self) -> &[Point3] {
        &self.waypoints
    }

    pub fn into_waypoints(self) -> Vec<Point3> {
        self.waypoints
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn start(&self) -> Option<&Point3> {
        self.waypoints.first()
    }

    pub fn goal(&self) -> Option<&Point3> {
        self.waypoints.last()
    }
}
