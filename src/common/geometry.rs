use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinates are quantized to this many decimal places. Lattice nodes are
/// looked up by arithmetic offset, so every coordinate that enters the graph
/// must round identically or neighbor lookups silently miss.
pub const COORD_DECIMALS: u32 = 5;

const COORD_SCALE: f64 = 100_000.0; // 10^COORD_DECIMALS

/// Round a coordinate or weight to the fixed precision.
pub fn quantize(value: f64) -> f64 {
    (value * COORD_SCALE).round() / COORD_SCALE
}

/// A point in 3D space, quantized to [`COORD_DECIMALS`] decimal places.
///
/// `OrderedFloat` gives the type a total order and a hash, so points can key
/// maps and sets directly. The derived `Ord` is lexicographic by axis, which
/// is also the deterministic tie-break order used by the planners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point3 {
    x: OrderedFloat<f64>,
    y: OrderedFloat<f64>,
    z: OrderedFloat<f64>,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: OrderedFloat(quantize(x)),
            y: OrderedFloat(quantize(y)),
            z: OrderedFloat(quantize(z)),
        }
    }

    pub fn x(&self) -> f64 {
        self.x.into_inner()
    }

    pub fn y(&self) -> f64 {
        self.y.into_inner()
    }

    pub fn z(&self) -> f64 {
        self.z.into_inner()
    }

    pub fn coords(&self) -> [f64; 3] {
        [self.x(), self.y(), self.z()]
    }

    /// The point displaced by the given per-axis deltas, re-quantized.
    pub fn offset(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(self.x() + dx, self.y() + dy, self.z() + dz)
    }

    /// Straight-line distance, unrounded. Used as the A* heuristic, where
    /// rounding up could overestimate the remaining cost.
    pub fn euclidean(&self, other: &Point3) -> f64 {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        let dz = self.z() - other.z();
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Euclidean distance quantized to the fixed precision. Edge weights use
    /// this so both endpoints of an edge agree bit-for-bit.
    pub fn distance_to(&self, other: &Point3) -> f64 {
        quantize(self.euclidean(other))
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(coords: [f64; 3]) -> Self {
        Self::new(coords[0], coords[1], coords[2])
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}
