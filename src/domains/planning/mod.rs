pub mod graph;
pub mod path;
pub mod planner;
pub mod ports;

pub use graph::*;
pub use path::*;
pub use planner::*;
pub use ports::*;
