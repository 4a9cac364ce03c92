pub mod graph_store;
pub mod scene_export;

pub use graph_store::*;
pub use scene_export::*;
